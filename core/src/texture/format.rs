//! Pixel format inference from channel counts.

/// `GL_RED` enum value.
pub const GL_RED: u32 = 0x1903;
/// `GL_RGB` enum value.
pub const GL_RGB: u32 = 0x1907;
/// `GL_RGBA` enum value.
pub const GL_RGBA: u32 = 0x1908;

/// Layout of one pixel's 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// Single channel (uploaded as `GL_RED`).
    Mono,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha. Fallback for unusual channel counts.
    #[default]
    Rgba,
}

impl PixelFormat {
    /// Format for a pixel with `n` channels.
    ///
    /// Any count other than 1 or 3 maps to [`PixelFormat::Rgba`], including
    /// 0 and 2 (grey + alpha).
    pub const fn from_channel_count(n: u32) -> Self {
        match n {
            1 => Self::Mono,
            3 => Self::Rgb,
            _ => Self::Rgba,
        }
    }

    /// Number of channels a pixel of this format carries.
    pub const fn channel_count(self) -> u32 {
        match self {
            Self::Mono => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// OpenGL pixel format enum for texture uploads.
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Mono => GL_RED,
            Self::Rgb => GL_RGB,
            Self::Rgba => GL_RGBA,
        }
    }

    /// Format matching an OpenGL pixel format enum. Unknown values map to
    /// [`PixelFormat::Rgba`].
    pub const fn from_gl_enum(value: u32) -> Self {
        match value {
            GL_RED => Self::Mono,
            GL_RGB => Self::Rgb,
            _ => Self::Rgba,
        }
    }
}

/// Free-function form of [`PixelFormat::from_channel_count`].
pub const fn format_from_channel_count(n: u32) -> PixelFormat {
    PixelFormat::from_channel_count(n)
}

/// Free-function form of [`PixelFormat::channel_count`].
pub const fn channel_count_from_format(format: PixelFormat) -> u32 {
    format.channel_count()
}
