use std::error;

pub use simple_error::bail;
pub use simple_error::SimpleResult;

pub type GenericResult<T> = std::result::Result<T, Box<dyn error::Error>>;
