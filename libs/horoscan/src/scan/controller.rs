use serde::Serialize;

use crate::common::{PhoneCandidate, ScanError};

use super::{ScanConfig, ScanLog};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanState {
    Idle,
    Ready,
    Scanning,
}

/// Read-only view of the controller handed to the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub state: ScanState,
    pub has_image: bool,
    pub results: Vec<PhoneCandidate>,
    pub log: Vec<String>,
}

/// Owns the per-session UI state and enforces the scan state machine:
/// `Idle` until an image is selected, `Ready` between scans, `Scanning` while
/// exactly one recognition is in flight. All mutation goes through the
/// transition methods below.
///
/// Selecting a new image never cancels running work; it bumps `generation` so
/// a superseded scan's outcome is discarded when it eventually lands.
pub struct ScanController {
    state: ScanState,
    image: Option<Vec<u8>>,
    results: Vec<PhoneCandidate>,
    log: ScanLog,
    generation: u64,
    config: ScanConfig,
}

impl ScanController {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            state: ScanState::Idle,
            image: None,
            results: Vec::new(),
            log: ScanLog::new(),
            generation: 0,
            config,
        }
    }

    pub fn select_image(&mut self, bytes: Vec<u8>) {
        if self.state == ScanState::Scanning {
            log::warn!("image replaced while a scan is running; its outcome will be discarded");
        }
        self.generation += 1;
        self.log = ScanLog::new();
        self.log.push(format!("image selected ({} bytes)", bytes.len()));
        self.image = Some(bytes);
        self.results.clear();
        self.state = ScanState::Ready;
    }

    /// Move `Ready` -> `Scanning` and hand back the image to recognize plus
    /// the generation the eventual outcome must present to be accepted.
    pub fn begin_scan(&mut self) -> Result<(Vec<u8>, u64), ScanError> {
        match self.state {
            ScanState::Idle => {
                self.log.push("scan requested with no image selected");
                Err(ScanError::NoImageSelected)
            }
            ScanState::Scanning => {
                self.log.push("scan requested while another scan is running");
                Err(ScanError::ScanInFlight)
            }
            ScanState::Ready => {
                let image = self.image.clone().ok_or(ScanError::NoImageSelected)?;
                self.state = ScanState::Scanning;
                self.results.clear();
                self.log = ScanLog::new();
                self.log.push("scan started");
                Ok((image, self.generation))
            }
        }
    }

    pub fn note_progress(&mut self, generation: u64, status: &str, fraction: f32) {
        if generation != self.generation {
            return;
        }
        self.log
            .push(format!("progress: {} ({:.0}%)", status, fraction * 100.0));
    }

    /// Returns whether the outcome was accepted; a stale generation means the
    /// scan was superseded and its results were discarded.
    pub fn finish_scan(&mut self, generation: u64, results: Vec<PhoneCandidate>) -> bool {
        if generation != self.generation {
            self.log.push("discarded results from a superseded scan");
            return false;
        }
        self.log
            .push(format!("scan finished with {} candidate(s)", results.len()));
        self.results = results;
        self.state = ScanState::Ready;
        true
    }

    /// Returns whether the error belonged to the current scan; stale errors
    /// are discarded like stale results.
    pub fn fail_scan(&mut self, generation: u64, error: &ScanError) -> bool {
        if generation != self.generation {
            self.log.push("discarded error from a superseded scan");
            return false;
        }
        self.log.push(format!("scan failed: {}", error));
        self.results.clear();
        self.state = ScanState::Ready;
        true
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            has_image: self.image.is_some(),
            results: self.results.clone(),
            log: self.log.entries().to_vec(),
        }
    }
}
