use std::collections::HashMap;

use image::DynamicImage;
use rusty_tesseract::{Args, Image};

use crate::common::ScanError;

use super::types::OcrConfig;

pub fn perform_ocr_tesseract(
    image: &DynamicImage,
    config: &OcrConfig,
) -> Result<String, ScanError> {
    let args = Args {
        lang: config.lang.clone(),
        config_variables: HashMap::from([(
            "tessedit_char_whitelist".into(),
            config.char_whitelist.clone(),
        )]),
        dpi: config.dpi.map(|v| v as i32),
        psm: config.psm.map(|v| v as i32),
        oem: config.oem.map(|v| v as i32),
    };

    let ocr_image = Image::from_dynamic_image(image)
        .map_err(|e| ScanError::RecognitionFailed(e.to_string()))?;

    rusty_tesseract::image_to_string(&ocr_image, &args)
        .map_err(|e| ScanError::RecognitionFailed(e.to_string()))
}
