use crate::common::get_current_timestamp_str;
use crate::extract::RuleSet;
use crate::ocr::OcrConfig;
use crate::preprocess::PreprocessConfig;

#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub preprocess: PreprocessConfig,
    pub ocr: OcrConfig,
    pub rules: RuleSet,
    pub timeout_secs: u64,
}

impl ScanConfig {
    pub fn default() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            ocr: OcrConfig::default(),
            rules: RuleSet::default(),
            timeout_secs: Self::get_default_timeout_secs(),
        }
    }

    pub fn get_default_timeout_secs() -> u64 {
        30
    }
}

/// Append-only diagnostic log shown to the user, reset at the start of each
/// scan. Entries carry a timestamp and are mirrored to the process log.
#[derive(Clone, Debug, Default)]
pub struct ScanLog {
    entries: Vec<String>,
}

impl ScanLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.entries
            .push(format!("[{}] {}", get_current_timestamp_str(), message));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
