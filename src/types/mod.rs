//! Core value types shared across the crate

mod color;
mod handle;
mod units;
mod vector;

pub use color::Color;
pub use handle::{Handle, HandleAllocator};
pub use units::{DxfVersion, Units};
pub use vector::{Vector2, Vector3};
