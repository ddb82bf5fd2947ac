mod types;
mod utils;

pub use types::PreprocessConfig;
pub use utils::{decode_image, encode_png, prepare_image};
