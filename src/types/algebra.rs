use nalgebra;

pub type Scalar = f64;

/// Cell index `(x, y)`: `x` is the column, `y` the row (row `0` is the top).
pub type Index2 = nalgebra::Vector2<usize>;
pub type Dimension2 = nalgebra::Vector2<usize>;
