use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, ImageFormat};

use crate::common::ScanError;

use super::PreprocessConfig;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ScanError> {
    image::load_from_memory(bytes).map_err(|e| ScanError::ImageDecodeFailed(e.to_string()))
}

/// Scale so neither dimension exceeds the configured bound (aspect ratio
/// preserved), then apply the fixed contrast/brightness enhancement.
pub fn prepare_image(image: &DynamicImage, config: &PreprocessConfig) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let max_dim = config.max_dimension;

    let scaled = if width > max_dim || height > max_dim {
        log::debug!(
            "resizing {}x{} to fit within {}px",
            width,
            height,
            max_dim
        );
        image.resize(max_dim, max_dim, FilterType::Lanczos3)
    } else {
        image.clone()
    };

    scaled
        .adjust_contrast(config.contrast)
        .brighten(config.brightness)
}

pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ScanError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ScanError::PreprocessingFailed(e.to_string()))?;

    if bytes.is_empty() {
        return Err(ScanError::PreprocessingFailed(
            "encoder produced no data".to_string(),
        ));
    }
    Ok(bytes)
}
