//! Image buffers with explicit ownership.
//!
//! An [`Image`] is a handle onto a [`PixelBuffer`]. Several handles may view
//! the same buffer (one decoded bitmap reused for the six faces of a cube
//! map, a glyph bitmap owned by a font cache), but only the handle created
//! with ownership is the designated releaser.
//!
//! # Lifecycle
//!
//! | Constructor                          | Initial state             |
//! |--------------------------------------|---------------------------|
//! | [`Image::load`], [`Image::load_from_memory`] | [`BufferState::Owning`] |
//! | [`Image::from_rows`]                 | [`BufferState::Owning`]   |
//! | [`Image::from_buffer`] (`owns=true`) | [`BufferState::Owning`]   |
//! | [`Image::from_buffer`] (`owns=false`), [`Image::alias`] | [`BufferState::Released`] |
//!
//! [`Image::release`] moves an owning handle to `Released` and is a no-op
//! afterwards. Storage is reference counted, so releasing the owner never
//! invalidates memory still viewed by an alias, and no buffer can be freed
//! twice.
//!
//! Reading pixels through a handle whose owner released it is a caller
//! error. The released handle holds an empty view: debug builds panic with
//! "image buffer read after release" on any read. In release builds
//! [`Image::pixel`] panics on the out-of-range index, while
//! [`Image::to_rows`] and [`Image::texture_data`] return empty data.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::format::PixelFormat;

#[cfg(feature = "image-io")]
use super::error::ImageError;

/// JPEG quality used by [`Image::save`].
pub const JPEG_QUALITY: u8 = 90;

/// Reference-counted 8-bit pixel storage.
///
/// Cloning is cheap and yields another view of the same bytes.
#[derive(Clone)]
pub struct PixelBuffer(Arc<[u8]>);

impl PixelBuffer {
    /// An empty buffer.
    pub fn empty() -> Self {
        Self(Arc::from(&[][..]))
    }

    /// Borrow the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Whether both buffers view the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live views of this allocation.
    pub fn view_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for PixelBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PixelBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self(Arc::from(data))
    }
}

impl From<&[u8]> for PixelBuffer {
    fn from(data: &[u8]) -> Self {
        Self(Arc::from(data))
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("len", &self.0.len())
            .field("views", &self.view_count())
            .finish()
    }
}

/// Ownership state of an [`Image`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferState {
    /// This handle is responsible for releasing the buffer.
    Owning,
    /// Released, or never owned. Terminal.
    Released,
}

/// Borrowed pixel data in the shape a texture upload expects.
///
/// The upload layer copies from `data` and never takes ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureData<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel format of `data`.
    pub format: PixelFormat,
    /// Tightly packed rows, top row first.
    pub data: &'a [u8],
}

impl TextureData<'_> {
    /// Size of `data` in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// A CPU-side image: dimensions, channel count and a tightly packed 8-bit
/// pixel buffer.
pub struct Image {
    width: u32,
    height: u32,
    channels: u32,
    format: PixelFormat,
    data: PixelBuffer,
    path: Option<PathBuf>,
    owns_buffer: bool,
}

impl Image {
    /// Decode an image file.
    ///
    /// The decoder's native channel count is kept (1, 2, 3 or 4). Sources
    /// with more than 8 bits per channel are narrowed to 8 bits.
    ///
    /// `flip` flips the rows vertically so the first row is the bottom of the
    /// picture, which is what OpenGL expects for 3D textures. 2D/UI callers
    /// that keep a top-left origin pass `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Decode`] when the file is missing, corrupt, or
    /// in an unsupported format.
    #[cfg(feature = "image-io")]
    pub fn load(path: impl AsRef<Path>, flip: bool) -> Result<Self, ImageError> {
        crate::profile_function!();
        let path = path.as_ref();
        log::info!("Loading image: {}", path.display());

        let decoded = ::image::open(path).map_err(|e| ImageError::decode(Some(path), e))?;
        let mut image = Self::from_decoded(decoded, flip);
        image.path = Some(path.to_path_buf());
        Ok(image)
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...) already in memory.
    ///
    /// Same channel and `flip` rules as [`Image::load`]. The image has no
    /// source path.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Decode`] when the bytes cannot be decoded.
    #[cfg(feature = "image-io")]
    pub fn load_from_memory(bytes: &[u8], flip: bool) -> Result<Self, ImageError> {
        crate::profile_function!();
        let decoded = ::image::load_from_memory(bytes).map_err(|e| ImageError::decode(None, e))?;
        Ok(Self::from_decoded(decoded, flip))
    }

    #[cfg(feature = "image-io")]
    fn from_decoded(decoded: ::image::DynamicImage, flip: bool) -> Self {
        let decoded = if flip {
            crate::profile_scope!("flip_rows");
            decoded.flipv()
        } else {
            decoded
        };
        let (width, height) = (decoded.width(), decoded.height());
        let channels = u32::from(decoded.color().channel_count());

        let data = match channels {
            1 => decoded.into_luma8().into_raw(),
            2 => decoded.into_luma_alpha8().into_raw(),
            3 => decoded.into_rgb8().into_raw(),
            _ => decoded.into_rgba8().into_raw(),
        };

        log::debug!("Decoded {width}x{height} image with {channels} channels");
        Self::from_buffer(width, height, channels, data, true)
    }

    /// Wrap an existing buffer without copying it.
    ///
    /// `buffer` must hold `width * height * channels` bytes; this is only
    /// checked in debug builds. With `owns = false` the handle starts in
    /// [`BufferState::Released`] and [`Image::release`] never touches the
    /// buffer.
    pub fn from_buffer(
        width: u32,
        height: u32,
        channels: u32,
        buffer: impl Into<PixelBuffer>,
        owns: bool,
    ) -> Self {
        let data = buffer.into();
        debug_assert_eq!(
            data.len(),
            expected_len(width, height, channels),
            "buffer size does not match {width}x{height}x{channels}"
        );

        Self {
            width,
            height,
            channels,
            format: PixelFormat::from_channel_count(channels),
            data,
            path: None,
            owns_buffer: owns,
        }
    }

    /// Build an owning image by concatenating `height` rows of
    /// `width * channels` bytes into a fresh buffer.
    ///
    /// Inverse of [`Image::to_rows`]: values are preserved, the buffer is a
    /// new allocation.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], width: u32, height: u32, channels: u32) -> Self {
        crate::profile_function!();
        let row_len = width as usize * channels as usize;
        debug_assert_eq!(rows.len(), height as usize, "row count does not match height");

        let mut data = Vec::with_capacity(expected_len(width, height, channels));
        for row in rows.iter().take(height as usize) {
            data.extend_from_slice(&row.as_ref()[..row_len]);
        }

        Self::from_buffer(width, height, channels, data, true)
    }

    /// A non-owning handle viewing the same buffer.
    pub fn alias(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            channels: self.channels,
            format: self.format,
            data: self.data.clone(),
            path: self.path.clone(),
            owns_buffer: false,
        }
    }

    /// Release the buffer if this handle owns it.
    ///
    /// Safe to call any number of times: only the first call on an owning
    /// handle has an effect, and non-owning handles are left untouched.
    pub fn release(&mut self) {
        if !self.owns_buffer {
            return;
        }

        log::debug!(
            "Releasing {}x{} image buffer ({} bytes)",
            self.width,
            self.height,
            self.data.len()
        );
        self.data = PixelBuffer::empty();
        self.owns_buffer = false;
    }

    /// Encode the image as JPEG at [`JPEG_QUALITY`] and write it to `path`.
    ///
    /// JPEG carries no alpha: 2-channel images are written as greyscale and
    /// 4-channel images as RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Encode`] when the file cannot be written or the
    /// encoder rejects the image.
    #[cfg(feature = "image-io")]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        use std::io::Write;

        use ::image::ExtendedColorType;
        use ::image::codecs::jpeg::JpegEncoder;

        crate::profile_function!();
        let path = path.as_ref();
        self.debug_assert_resident();

        if self.data.len() != self.expected_len() {
            return Err(ImageError::encode(
                path,
                format!(
                    "buffer holds {} bytes, expected {}",
                    self.data.len(),
                    self.expected_len()
                ),
            ));
        }
        if self.channels == 0 {
            return Err(ImageError::encode(path, "image has no channels"));
        }

        let (pixels, color) = if self.channels < 3 {
            (self.extract_channels(1), ExtendedColorType::L8)
        } else {
            (self.extract_channels(3), ExtendedColorType::Rgb8)
        };

        log::info!("Saving image: {}", path.display());
        let file = std::fs::File::create(path).map_err(|e| ImageError::encode(path, e))?;
        let mut writer = std::io::BufWriter::new(file);
        {
            crate::profile_scope!("jpeg_encode");
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
                .encode(&pixels, self.width, self.height, color)
                .map_err(|e| ImageError::encode(path, e))?;
        }
        writer.flush().map_err(|e| ImageError::encode(path, e))
    }

    /// Keep the first `keep` channels of every pixel.
    #[cfg(feature = "image-io")]
    fn extract_channels(&self, keep: usize) -> std::borrow::Cow<'_, [u8]> {
        let channels = self.channels as usize;
        if keep == channels {
            return std::borrow::Cow::Borrowed(self.data.as_slice());
        }

        let mut out = Vec::with_capacity(self.pixel_count() * keep);
        for pixel in self.data.chunks_exact(channels) {
            out.extend_from_slice(&pixel[..keep]);
        }
        std::borrow::Cow::Owned(out)
    }

    /// Channel values of the pixel at flat index `index` (row-major).
    ///
    /// The slice holds `channels` bytes starting at `index * channels`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height` or the owner released the buffer.
    pub fn pixel(&self, index: usize) -> &[u8] {
        self.debug_assert_resident();
        let channels = self.channels as usize;
        let start = index * channels;
        &self.data[start..start + channels]
    }

    /// Copy the buffer into `height` rows of `width * channels` bytes, top
    /// row first.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        crate::profile_function!();
        self.debug_assert_resident();
        let row_len = self.row_len();
        if row_len == 0 {
            return vec![Vec::new(); self.height as usize];
        }

        self.data
            .chunks_exact(row_len)
            .take(self.height as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// View of the pixel data for texture upload.
    pub fn texture_data(&self) -> TextureData<'_> {
        self.debug_assert_resident();
        TextureData {
            width: self.width,
            height: self.height,
            format: self.format,
            data: self.data.as_slice(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of channels per pixel.
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Pixel format derived from the channel count.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Source file, `None` for images built in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether this handle is responsible for releasing the buffer.
    pub fn owns_buffer(&self) -> bool {
        self.owns_buffer
    }

    /// Ownership state of this handle.
    pub fn state(&self) -> BufferState {
        if self.owns_buffer {
            BufferState::Owning
        } else {
            BufferState::Released
        }
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// The shared buffer backing this image.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.data
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    fn expected_len(&self) -> usize {
        expected_len(self.width, self.height, self.channels)
    }

    fn debug_assert_resident(&self) {
        debug_assert_eq!(
            self.data.len(),
            self.expected_len(),
            "image buffer read after release"
        );
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("format", &self.format)
            .field("path", &self.path)
            .field("owns_buffer", &self.owns_buffer)
            .field("data", &self.data)
            .finish()
    }
}

fn expected_len(width: u32, height: u32, channels: u32) -> usize {
    width as usize * height as usize * channels as usize
}
