//! CPU-side image data.
//!
//! Provides [`Image`] for holding raw 8-bit pixel data with explicit buffer
//! ownership, [`PixelFormat`] for channel-count inference, and
//! [`TextureData`] as the view handed to the texture upload layer.
//!
//! Decoding and encoding files requires the `image-io` feature (on by
//! default).

mod error;
mod format;
mod types;

pub use error::ImageError;
pub use format::{
    GL_RED, GL_RGB, GL_RGBA, PixelFormat, channel_count_from_format, format_from_channel_count,
};
pub use types::{BufferState, Image, JPEG_QUALITY, PixelBuffer, TextureData};
