mod algebra;
mod common;
mod frontback;

pub use algebra::*;
pub use common::*;
pub use frontback::*;

#[macro_export]
macro_rules! idx {
    ($x:expr, $y:expr) => {
        $crate::types::Index2::new($x, $y)
    };
}

#[macro_export]
macro_rules! dim {
    ($x:expr, $y:expr) => {
        $crate::types::Dimension2::new($x, $y)
    };
}
