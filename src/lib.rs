//! nobg - strip checkerboard transparency placeholders out of images.
//!
//! The library half exposes the filter so it can be reused outside the CLI:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let modified = nobg::image::checkerboard::remove_checkerboard(
//!     Path::new("empty-cart.png"),
//!     Path::new("empty-cart-fixed.png"),
//! )?;
//! println!("modified {modified} pixels");
//! # Ok::<(), nobg::image::checkerboard::FilterError>(())
//! ```

pub mod cli;
pub mod image;
pub mod logger;
pub mod utils;
