pub mod boundary;
pub mod grid;
pub mod stencil;

pub mod jacobi;
pub mod observer;

pub mod setup;
pub mod visualization;
