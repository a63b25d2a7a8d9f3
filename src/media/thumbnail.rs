use image::imageops::FilterType;

use crate::error::BrowserError;

/// Bounding box for generated thumbnails (longest edge)
const THUMBNAIL_SIZE: u32 = 256;

/// A decoded, grid-sized RGBA image.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

/// Decode encoded image bytes and resize them to fit the grid.
/// Aspect ratio is preserved.
pub fn make_thumbnail(bytes: &[u8]) -> Result<Thumbnail, BrowserError> {
    let img = image::load_from_memory(bytes)?;

    let resized = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Thumbnail {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::new_rgba8(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_thumbnail_fits_bounding_box() {
        let thumbnail = make_thumbnail(&png_bytes(512, 256)).unwrap();

        assert_eq!(thumbnail.width, 256);
        assert_eq!(thumbnail.height, 128);
        assert_eq!(
            thumbnail.pixels.len(),
            (thumbnail.width * thumbnail.height * 4) as usize
        );
    }

    #[test]
    fn test_small_image_keeps_proportions() {
        let thumbnail = make_thumbnail(&png_bytes(64, 32)).unwrap();

        assert!(thumbnail.width <= THUMBNAIL_SIZE);
        assert!(thumbnail.height <= thumbnail.width);
    }

    #[test]
    fn test_garbage_bytes_error() {
        let result = make_thumbnail(b"definitely not an image");

        assert!(matches!(result, Err(BrowserError::Image(_))));
    }
}
