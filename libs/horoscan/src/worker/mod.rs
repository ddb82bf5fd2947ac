use tokio::sync::mpsc;

use crate::common::ScanError;
use crate::ocr;
use crate::preprocess;
use crate::scan::ScanConfig;

/// Messages a recognition request can produce: zero or more progress events
/// followed by exactly one terminal `Result` or `Error`.
#[derive(Clone, Debug)]
pub enum RecognitionEvent {
    Progress { status: String, fraction: f32 },
    Result { text: String },
    Error { message: String },
}

/// One unit of work for the background worker. The worker owns the bytes it
/// is given and answers exclusively through the `events` channel.
pub struct RecognitionRequest {
    pub image: Vec<u8>,
    pub config: ScanConfig,
    pub events: mpsc::Sender<RecognitionEvent>,
}

/// Spawn the single background recognition worker and return its request
/// channel. Requests are processed one at a time in arrival order; the worker
/// exits when every sender is dropped.
pub fn spawn_recognition_worker() -> mpsc::Sender<RecognitionRequest> {
    let (tx, mut rx) = mpsc::channel::<RecognitionRequest>(8);

    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            let events = request.events.clone();
            let terminal = match run_recognition(request).await {
                Ok(text) => RecognitionEvent::Result { text },
                Err(e) => RecognitionEvent::Error {
                    message: e.to_string(),
                },
            };
            if events.send(terminal).await.is_err() {
                log::warn!("recognition requester went away before the terminal event");
            }
        }
        log::info!("recognition worker shutting down");
    });

    tx
}

async fn run_recognition(request: RecognitionRequest) -> Result<String, ScanError> {
    let RecognitionRequest {
        image,
        config,
        events,
    } = request;

    send_progress(&events, "preprocessing", 0.0).await;
    let decoded = preprocess::decode_image(&image)?;
    let prepared = preprocess::prepare_image(&decoded, &config.preprocess);
    let encoded = preprocess::encode_png(&prepared)?;
    log::debug!(
        "preprocessed image to {}x{} ({} encoded bytes)",
        prepared.width(),
        prepared.height(),
        encoded.len()
    );

    send_progress(&events, "recognizing", 0.5).await;
    let text =
        ocr::recognize_with_timeout(prepared, config.ocr.clone(), config.timeout_secs).await?;

    send_progress(&events, "done", 1.0).await;
    Ok(text)
}

async fn send_progress(events: &mpsc::Sender<RecognitionEvent>, status: &str, fraction: f32) {
    let event = RecognitionEvent::Progress {
        status: status.to_string(),
        fraction,
    };
    if events.send(event).await.is_err() {
        log::debug!("progress event dropped: requester went away");
    }
}
