pub mod error;
pub mod fractal;
pub mod geometry;
pub mod math;
pub mod render;

pub use error::{FractalError, Result};
