mod controller;
mod types;

pub use controller::{ScanController, ScanState, Snapshot};
pub use types::{ScanConfig, ScanLog};

use crate::common::{ScanError, ScanOutcome};
use crate::extract::extract_candidates;
use crate::ocr;
use crate::preprocess;

/// In-process execution strategy: decode, preprocess, recognize (on a blocking
/// thread, under the configured timeout) and extract, all on the caller's
/// task. The background-worker strategy in `crate::worker` is functionally
/// interchangeable with this.
pub async fn scan_image(bytes: &[u8], config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    let mut log = ScanLog::new();
    log.push(format!("scan started ({} input bytes)", bytes.len()));

    let decoded = preprocess::decode_image(bytes)?;
    log.push(format!(
        "decoded image {}x{}",
        decoded.width(),
        decoded.height()
    ));

    let prepared = preprocess::prepare_image(&decoded, &config.preprocess);
    let encoded = preprocess::encode_png(&prepared)?;
    log.push(format!(
        "preprocessed to {}x{} ({} encoded bytes)",
        prepared.width(),
        prepared.height(),
        encoded.len()
    ));

    let text =
        ocr::recognize_with_timeout(prepared, config.ocr.clone(), config.timeout_secs).await?;
    log.push(format!(
        "recognized {} character(s) across {} line(s)",
        text.chars().count(),
        text.lines().count()
    ));

    let candidates = extract_candidates(&text, &config.rules);
    log.push(format!("extracted {} unique candidate(s)", candidates.len()));

    Ok(ScanOutcome {
        candidates,
        log: log.into_entries(),
    })
}
