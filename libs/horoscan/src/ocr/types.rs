use serde::{Deserialize, Serialize};

/// Configuration handed to the OCR engine. The whitelist restricts output to
/// digits and the separator characters the extraction rules understand; psm 7
/// treats the image as a single line of sparse text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OcrConfig {
    pub lang: String,
    pub char_whitelist: String,
    pub psm: Option<u32>,  // Page segmentation mode
    pub oem: Option<u32>,  // OCR Engine Mode
    pub dpi: Option<u32>,  // dots per inch
}

impl OcrConfig {
    pub fn default() -> Self {
        Self {
            lang: "eng+tha".to_string(),
            char_whitelist: Self::get_default_whitelist().to_string(),
            psm: Some(Self::get_default_psm()),
            oem: Some(Self::get_default_oem()),
            dpi: None,
        }
    }

    pub fn get_default_whitelist() -> &'static str {
        "0123456789- ."
    }

    pub fn get_default_psm() -> u32 {
        7
    }

    pub fn get_default_oem() -> u32 {
        1
    }
}
