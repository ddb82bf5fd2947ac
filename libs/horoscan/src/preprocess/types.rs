use serde::{Deserialize, Serialize};

/// Fixed preprocessing applied before recognition: a bounded downscale plus a
/// contrast/brightness bump. Images already within the bound are not upscaled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreprocessConfig {
    pub max_dimension: u32,
    pub contrast: f32,
    pub brightness: i32,
}

impl PreprocessConfig {
    pub fn default() -> Self {
        Self {
            max_dimension: Self::get_default_max_dimension(),
            contrast: 25.0,
            brightness: 12,
        }
    }

    pub fn new(max_dimension: u32, contrast: f32, brightness: i32) -> Self {
        Self {
            max_dimension,
            contrast,
            brightness,
        }
    }

    pub fn get_default_max_dimension() -> u32 {
        800
    }
}
