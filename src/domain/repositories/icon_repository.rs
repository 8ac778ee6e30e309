//! IconRepository - interface for icon thumbnailing
//!
//! Decoding stays separate from display: implementations hand back a plain
//! RGBA buffer and the presentation side turns it into whatever surface
//! its toolkit wants.

use std::path::Path;

use crate::domain::errors::DomainError;

/// Edge length of list and detail thumbnails
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 64;

/// Largest thumbnail edge accepted from configuration
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;

/// A decoded icon (platform-independent representation)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconData {
    /// Icon width in pixels
    pub width: u32,
    /// Icon height in pixels
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel)
    pub pixels: Vec<u8>,
}

impl IconData {
    /// Create a new icon from RGBA data
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), Self::pixel_count(width, height) * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a placeholder icon (solid color)
    pub fn placeholder(width: u32, height: u32, r: u8, g: u8, b: u8) -> Self {
        let pixels = [r, g, b, 255].repeat(Self::pixel_count(width, height));
        Self::new(width, height, pixels)
    }

    fn pixel_count(width: u32, height: u32) -> usize {
        width as usize * height as usize
    }

    /// Length of the longer edge
    pub fn longest_edge(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Repository interface for icon thumbnails
pub trait IconRepository: Send + Sync {
    /// Load the image at `path` and scale it so its longer edge is `size`.
    ///
    /// Fails with `IconSourceMissing` when the file does not exist and
    /// `IconDecodeFailed` when it is not an image.
    fn thumbnail(&self, path: &Path, size: u32) -> Result<IconData, DomainError>;

    /// Icon shown for rows that have not been selected yet
    fn default_icon(&self, size: u32) -> IconData {
        IconData::placeholder(size, size, 128, 128, 128)
    }
}
