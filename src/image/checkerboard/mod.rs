//! Remove checkerboard transparency placeholders from images.
//!
//! Every pixel whose color channels are nearly equal and whose red channel
//! is above 200 is treated as a placeholder tile and replaced with fully
//! transparent white. There is no segmentation: light-gray or white subjects
//! are removed along with the tiles, and palettes darker than the threshold
//! survive untouched.

mod classify;
mod error;
mod process;

pub use classify::{
    BRIGHTNESS_THRESHOLD, GRAYSCALE_TOLERANCE, TRANSPARENT_WHITE, classify, is_bright,
    is_checkerboard, is_grayscale,
};
pub use error::FilterError;
pub use process::{FilterReport, count_checkerboard, process_image, remove_checkerboard};
