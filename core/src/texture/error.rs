//! Error types for image decoding and encoding.

use std::fmt;
use std::path::{Path, PathBuf};

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while reading or writing image files.
#[derive(Debug)]
pub enum ImageError {
    /// The source is missing, corrupt, or in an unsupported format.
    /// No image is produced.
    Decode {
        /// Source path, `None` for in-memory sources.
        path: Option<PathBuf>,
        /// Underlying decoder or I/O error.
        source: BoxedError,
    },
    /// Writing the encoded image failed. The pixel buffer is untouched.
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Underlying encoder or I/O error.
        source: BoxedError,
    },
}

#[cfg_attr(not(feature = "image-io"), allow(dead_code))]
impl ImageError {
    pub(crate) fn decode(path: Option<&Path>, source: impl Into<BoxedError>) -> Self {
        Self::Decode {
            path: path.map(Path::to_path_buf),
            source: source.into(),
        }
    }

    pub(crate) fn encode(path: &Path, source: impl Into<BoxedError>) -> Self {
        Self::Encode {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode {
                path: Some(path),
                source,
            } => write!(f, "failed to decode image {}: {source}", path.display()),
            Self::Decode { path: None, source } => {
                write!(f, "failed to decode in-memory image: {source}")
            }
            Self::Encode { path, source } => {
                write!(f, "failed to encode image {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source.as_ref()),
        }
    }
}
