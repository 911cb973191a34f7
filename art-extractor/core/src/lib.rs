//! Platform-neutral building blocks for extracted artwork: geometry, surfaces and colors.

pub mod color;
pub mod geom;
pub mod surface;
