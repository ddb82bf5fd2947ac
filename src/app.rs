use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use horoscan::common::{PhoneCandidate, ScanError};
use horoscan::extract::extract_candidates;
use horoscan::scan::{ScanConfig, ScanController};
use horoscan::worker::{spawn_recognition_worker, RecognitionEvent, RecognitionRequest};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tower_http::limit::RequestBodyLimitLayer;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<ScanController>>,
    worker: mpsc::Sender<RecognitionRequest>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: Arc::new(Mutex::new(ScanController::new(ScanConfig::default()))),
            worker: spawn_recognition_worker(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ping", get(|| async { "pong" }))
        .route("/health", get(|| async { "healthy" }))
        .route("/state", get(state_snapshot))
        .route("/image", post(select_image))
        .route("/scan", post(trigger_scan))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("server/index.html"))
}

#[derive(Serialize)]
struct ApiMessage {
    message: String,
    success: bool,
}

#[derive(Serialize)]
struct ScanResponse {
    results: Vec<PhoneCandidate>,
    log: Vec<String>,
    success: bool,
}

fn error_status(error: &ScanError) -> StatusCode {
    match error {
        ScanError::NoImageSelected => StatusCode::BAD_REQUEST,
        ScanError::ImageDecodeFailed(_) => StatusCode::BAD_REQUEST,
        ScanError::ScanInFlight => StatusCode::CONFLICT,
        ScanError::PreprocessingFailed(_) | ScanError::RecognitionFailed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn state_snapshot(State(state): State<AppState>) -> Response {
    let controller = state.controller.lock().unwrap();
    Json(controller.snapshot()).into_response()
}

#[derive(Deserialize)]
struct ImageUpload {
    image: String, // Base64 string, optionally with a data-URL prefix
}

async fn select_image(
    State(state): State<AppState>,
    Json(payload): Json<ImageUpload>,
) -> Response {
    let base64_part = payload
        .image
        .split(',')
        .last()
        .unwrap_or(payload.image.as_str());

    let bytes = match STANDARD.decode(base64_part) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to decode base64 image data: {}", err);
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiMessage {
                    message: format!("Failed to decode base64 data: {}", err),
                    success: false,
                }),
            )
                .into_response();
        }
    };

    log::info!("Received {} bytes of image data", bytes.len());

    let mut controller = state.controller.lock().unwrap();
    controller.select_image(bytes);

    (
        StatusCode::OK,
        Json(ApiMessage {
            message: "image selected".to_string(),
            success: true,
        }),
    )
        .into_response()
}

async fn trigger_scan(State(state): State<AppState>) -> Response {
    // Lock only for the transition; recognition runs without the lock held.
    let (image, generation, config) = {
        let mut controller = state.controller.lock().unwrap();
        match controller.begin_scan() {
            Ok((image, generation)) => (image, generation, controller.config().clone()),
            Err(err) => {
                log::warn!("scan rejected: {}", err);
                return (
                    error_status(&err),
                    Json(ApiMessage {
                        message: err.to_string(),
                        success: false,
                    }),
                )
                    .into_response();
            }
        }
    };

    let (events_tx, mut events_rx) = mpsc::channel(16);
    let request = RecognitionRequest {
        image,
        config: config.clone(),
        events: events_tx,
    };

    if state.worker.send(request).await.is_err() {
        let err = ScanError::RecognitionFailed("recognition worker is gone".to_string());
        let mut controller = state.controller.lock().unwrap();
        if !controller.fail_scan(generation, &err) {
            return superseded_response().into_response();
        }
        return scan_failure(&controller.snapshot().log, &err).into_response();
    }

    while let Some(event) = events_rx.recv().await {
        match event {
            RecognitionEvent::Progress { status, fraction } => {
                let mut controller = state.controller.lock().unwrap();
                controller.note_progress(generation, &status, fraction);
            }
            RecognitionEvent::Result { text } => {
                let candidates = extract_candidates(&text, &config.rules);
                let mut controller = state.controller.lock().unwrap();
                if !controller.finish_scan(generation, candidates) {
                    return superseded_response().into_response();
                }
                let snapshot = controller.snapshot();
                return (
                    StatusCode::OK,
                    Json(ScanResponse {
                        results: snapshot.results,
                        log: snapshot.log,
                        success: true,
                    }),
                )
                    .into_response();
            }
            RecognitionEvent::Error { message } => {
                let err = ScanError::RecognitionFailed(message);
                let mut controller = state.controller.lock().unwrap();
                if !controller.fail_scan(generation, &err) {
                    return superseded_response().into_response();
                }
                return scan_failure(&controller.snapshot().log, &err).into_response();
            }
        }
    }

    let err =
        ScanError::RecognitionFailed("worker closed the channel without a terminal event".to_string());
    let mut controller = state.controller.lock().unwrap();
    if !controller.fail_scan(generation, &err) {
        return superseded_response().into_response();
    }
    scan_failure(&controller.snapshot().log, &err).into_response()
}

/// Reply for a request whose scan was superseded by a new image selection
/// before its terminal event arrived; the outcome was discarded, so the
/// request must not report success.
fn superseded_response() -> (StatusCode, Json<ApiMessage>) {
    (
        StatusCode::CONFLICT,
        Json(ApiMessage {
            message: "scan superseded by a new image selection".to_string(),
            success: false,
        }),
    )
}

fn scan_failure(log: &[String], error: &ScanError) -> (StatusCode, Json<ScanResponse>) {
    log::error!("scan failed: {}", error);
    (
        error_status(error),
        Json(ScanResponse {
            results: Vec::new(),
            log: log.to_vec(),
            success: false,
        }),
    )
}
