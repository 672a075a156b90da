mod plot;
pub use plot::grid;

mod tests;
