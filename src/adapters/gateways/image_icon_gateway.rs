//! ImageIconGateway - icon thumbnails decoded with the `image` crate
//!
//! The decoded pixels are returned in memory. Nothing is written to disk,
//! so concurrent or back-to-back selections never share a scratch file.

use std::path::Path;

use image::imageops::FilterType;
use image::ImageReader;

use crate::domain::errors::DomainError;
use crate::domain::repositories::{IconData, IconRepository};

/// Thumbnailer for .ico, .png, .bmp, .jpg and .gif resources
#[derive(Debug, Default)]
pub struct ImageIconGateway;

impl ImageIconGateway {
    /// Create a new gateway
    pub fn new() -> Self {
        Self
    }
}

impl IconRepository for ImageIconGateway {
    fn thumbnail(&self, path: &Path, size: u32) -> Result<IconData, DomainError> {
        if !path.is_file() {
            return Err(DomainError::IconSourceMissing(Some(path.to_path_buf())));
        }

        let decode_failed = |reason: String| DomainError::IconDecodeFailed {
            path: path.to_path_buf(),
            reason,
        };

        // Sniff the content: icon files are often PNGs with another extension
        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_failed(e.to_string()))?
            .decode()
            .map_err(|e| decode_failed(e.to_string()))?;

        // Fits inside size x size, aspect ratio kept, longer edge == size
        let scaled = image.resize(size, size, FilterType::Lanczos3).into_rgba8();
        let (width, height) = scaled.dimensions();

        log::debug!(
            "Thumbnail {:?}: {}x{} -> {}x{}",
            path,
            image.width(),
            image.height(),
            width,
            height
        );

        Ok(IconData::new(width, height, scaled.into_raw()))
    }
}
