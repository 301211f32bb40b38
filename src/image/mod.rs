//! Image processing utilities.
//!
//! # Modules
//!
//! - [`checkerboard`]: Checkerboard background removal (nobg)

pub mod checkerboard;
