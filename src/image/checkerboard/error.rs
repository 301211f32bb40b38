//! Checkerboard filter error types.

use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Failure while reading or writing an image.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to decode `{}`", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to encode `{}`", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl FilterError {
    pub(super) fn decode(path: impl Into<PathBuf>, source: ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub(super) fn encode(path: impl Into<PathBuf>, source: impl Into<ImageError>) -> Self {
        Self::Encode {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Path that failed, input for decode errors and output for encode errors.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Decode { path, .. } | Self::Encode { path, .. } => path,
        }
    }

    /// Short error kind name for reporting.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
        }
    }
}
