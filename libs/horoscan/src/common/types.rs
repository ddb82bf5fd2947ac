use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong during a single scan. All variants are
/// recoverable: the controller logs them and returns to an interactive state.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no image selected")]
    NoImageSelected,
    #[error("failed to decode image: {0}")]
    ImageDecodeFailed(String),
    #[error("image preprocessing failed: {0}")]
    PreprocessingFailed(String),
    #[error("text recognition failed: {0}")]
    RecognitionFailed(String),
    #[error("a scan is already in progress")]
    ScanInFlight,
}

/// A token from the recognized text that matched one of the number rules,
/// together with the sum of its decimal digit characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneCandidate {
    pub text: String,
    pub digit_sum: u32,
}

/// Result of one in-process scan: the unique candidates in first-encountered
/// order plus the diagnostic log gathered along the way.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub candidates: Vec<PhoneCandidate>,
    pub log: Vec<String>,
}
