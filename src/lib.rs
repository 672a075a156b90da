#[macro_use]
extern crate derive_builder;

#[macro_use]
pub mod types;

pub mod log;
pub mod plotting;
pub mod solver;
