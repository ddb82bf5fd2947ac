use horoscan::common::{PhoneCandidate, ScanError};
use horoscan::scan::{ScanConfig, ScanController, ScanState};

fn candidate(text: &str, digit_sum: u32) -> PhoneCandidate {
    PhoneCandidate {
        text: text.to_string(),
        digit_sum,
    }
}

#[test]
fn starts_idle_without_image() {
    let controller = ScanController::new(ScanConfig::default());
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ScanState::Idle);
    assert!(!snapshot.has_image);
    assert!(snapshot.results.is_empty());
}

#[test]
fn scan_without_image_is_a_logged_no_op() {
    let mut controller = ScanController::new(ScanConfig::default());
    let err = controller.begin_scan().unwrap_err();
    assert!(matches!(err, ScanError::NoImageSelected));
    assert_eq!(controller.state(), ScanState::Idle);
    assert!(!controller.snapshot().log.is_empty());
}

#[test]
fn select_scan_finish_cycle() {
    let mut controller = ScanController::new(ScanConfig::default());

    controller.select_image(vec![1, 2, 3]);
    assert_eq!(controller.state(), ScanState::Ready);

    let (image, generation) = controller.begin_scan().unwrap();
    assert_eq!(image, vec![1, 2, 3]);
    assert_eq!(controller.state(), ScanState::Scanning);

    let err = controller.begin_scan().unwrap_err();
    assert!(matches!(err, ScanError::ScanInFlight));
    assert_eq!(controller.state(), ScanState::Scanning);

    assert!(controller.finish_scan(generation, vec![candidate("0812345678", 44)]));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ScanState::Ready);
    assert_eq!(snapshot.results, vec![candidate("0812345678", 44)]);
}

#[test]
fn failure_returns_to_ready_with_empty_results() {
    let mut controller = ScanController::new(ScanConfig::default());
    controller.select_image(vec![0xff; 16]);

    let (_, generation) = controller.begin_scan().unwrap();
    let err = ScanError::PreprocessingFailed("encoder produced no data".to_string());
    assert!(controller.fail_scan(generation, &err));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ScanState::Ready);
    assert!(snapshot.results.is_empty());
    assert!(snapshot.log.iter().any(|line| line.contains("scan failed")));
}

#[test]
fn progress_is_appended_to_the_log() {
    let mut controller = ScanController::new(ScanConfig::default());
    controller.select_image(vec![1]);
    let (_, generation) = controller.begin_scan().unwrap();

    controller.note_progress(generation, "recognizing", 0.5);
    assert!(controller
        .snapshot()
        .log
        .iter()
        .any(|line| line.contains("recognizing")));
}

#[test]
fn new_selection_discards_a_superseded_outcome() {
    let mut controller = ScanController::new(ScanConfig::default());
    controller.select_image(vec![1]);
    let (_, stale_generation) = controller.begin_scan().unwrap();

    // Selecting again always returns to ready, without cancelling the work.
    controller.select_image(vec![2]);
    assert_eq!(controller.state(), ScanState::Ready);

    // The stale outcome is reported as discarded so callers can tell the
    // requester its scan did not produce these results.
    assert!(!controller.finish_scan(stale_generation, vec![candidate("0812345678", 44)]));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ScanState::Ready);
    assert!(snapshot.results.is_empty());

    controller.note_progress(stale_generation, "recognizing", 0.5);
    assert!(!controller
        .snapshot()
        .log
        .iter()
        .any(|line| line.contains("recognizing")));
}

#[test]
fn stale_error_does_not_disturb_the_new_session() {
    let mut controller = ScanController::new(ScanConfig::default());
    controller.select_image(vec![1]);
    let (_, stale_generation) = controller.begin_scan().unwrap();

    controller.select_image(vec![2]);
    let (_, generation) = controller.begin_scan().unwrap();
    assert_ne!(stale_generation, generation);

    assert!(!controller.fail_scan(stale_generation, &ScanError::RecognitionFailed("late".into())));
    assert_eq!(controller.state(), ScanState::Scanning);
}
