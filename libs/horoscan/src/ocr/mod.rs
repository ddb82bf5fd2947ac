mod ocr_tesseract;
mod types;

pub use types::OcrConfig;

use std::time::Duration;

use image::DynamicImage;

use crate::common::ScanError;

pub fn recognize_text(image: &DynamicImage, config: &OcrConfig) -> Result<String, ScanError> {
    ocr_tesseract::perform_ocr_tesseract(image, config)
}

/// Run recognition on a blocking thread under a timeout. The engine does not
/// support cancellation, so on timeout the underlying work keeps running and
/// only the result is abandoned.
pub async fn recognize_with_timeout(
    image: DynamicImage,
    config: OcrConfig,
    timeout_secs: u64,
) -> Result<String, ScanError> {
    let task = tokio::task::spawn_blocking(move || recognize_text(&image, &config));

    match tokio::time::timeout(Duration::from_secs(timeout_secs), task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(ScanError::RecognitionFailed(format!(
            "recognition task failed: {}",
            join_err
        ))),
        Err(_) => Err(ScanError::RecognitionFailed(format!(
            "recognition timed out after {}s",
            timeout_secs
        ))),
    }
}
