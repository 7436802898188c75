use image::imageops::FilterType;
use tokio::task;

use super::FetchError;

/// Decoded thumbnail pixels, ready to hand to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub pixels: Vec<u8>,
}

/// Decode downloaded image bytes and shrink them to fit a `size` square
pub async fn shrink(bytes: Vec<u8>, size: u32) -> Result<Thumbnail, FetchError> {
    // Spawn blocking because decoding and resampling are CPU-intensive
    task::spawn_blocking(move || shrink_blocking(&bytes, size)).await?
}

fn shrink_blocking(bytes: &[u8], size: u32) -> Result<Thumbnail, FetchError> {
    let img = image::load_from_memory(bytes)?;

    // Never upscale small images
    let img = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_shrinks_to_bound_keeping_aspect() {
        let thumb = shrink(png(700, 350), 256).await.unwrap();
        assert_eq!(thumb.width, 256);
        assert_eq!(thumb.height, 128);
        assert_eq!(thumb.pixels.len(), (256 * 128 * 4) as usize);
    }

    #[tokio::test]
    async fn test_small_image_is_not_upscaled() {
        let thumb = shrink(png(100, 100), 256).await.unwrap();
        assert_eq!((thumb.width, thumb.height), (100, 100));
    }

    #[tokio::test]
    async fn test_garbage_is_image_error() {
        let result = shrink(b"not an image".to_vec(), 256).await;
        assert!(matches!(result, Err(FetchError::Image(_))));
    }
}
