//! Icon decoding
//!
//! Reads an image file from disk and turns it into an owned RGBA pixel
//! buffer that can be attached to a notification as raw image data.

use image::io::Reader as ImageReader;
use image::ImageFormat;
use std::path::Path;

use crate::error::{NotifyError, Result};

/// Pixel layout of a decoded icon buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bits per channel, red/green/blue/alpha, no row padding
    Rgba8,
}

impl PixelFormat {
    pub fn channels(self) -> u32 {
        match self {
            PixelFormat::Rgba8 => 4,
        }
    }

    pub fn bits_per_sample(self) -> u32 {
        match self {
            PixelFormat::Rgba8 => 8,
        }
    }

    pub fn has_alpha(self) -> bool {
        match self {
            PixelFormat::Rgba8 => true,
        }
    }
}

/// Details about the file an icon was decoded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMetadata {
    /// Container format detected while decoding, if any
    pub source_format: Option<ImageFormat>,
    /// Color type of the file before conversion to RGBA
    pub source_color: String,
}

/// An owned, decoded icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: Vec<u8>,
    pub metadata: IconMetadata,
}

impl IconImage {
    /// Bytes per row of pixel data
    pub fn rowstride(&self) -> u32 {
        self.width * self.format.channels() * self.format.bits_per_sample() / 8
    }

    pub fn has_alpha(&self) -> bool {
        self.format.has_alpha()
    }
}

/// Something that can turn an icon file into pixels
///
/// `Ok(None)` means the decoder finished without a diagnostic but also
/// without producing an image. Callers decide how to treat that.
pub trait IconDecoder {
    fn decode(&self, path: &Path) -> Result<Option<IconImage>>;
}

/// Decoder backed by the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFileDecoder;

impl ImageFileDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl IconDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> Result<Option<IconImage>> {
        let reader = ImageReader::open(path)
            .map_err(|e| {
                NotifyError::IconDecode(format!(
                    "Failed to open file '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .with_guessed_format()
            .map_err(|e| {
                NotifyError::IconDecode(format!(
                    "Failed to read file '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        let source_format = reader.format();
        let decoded = reader
            .decode()
            .map_err(|e| NotifyError::IconDecode(e.to_string()))?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Ok(None);
        }

        let source_color = format!("{:?}", decoded.color());
        let rgba = decoded.into_rgba8();

        Ok(Some(IconImage {
            width: rgba.width(),
            height: rgba.height(),
            format: PixelFormat::Rgba8,
            data: rgba.into_raw(),
            metadata: IconMetadata {
                source_format,
                source_color,
            },
        }))
    }
}
