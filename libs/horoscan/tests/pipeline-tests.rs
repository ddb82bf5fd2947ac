use horoscan::common::ScanError;
use horoscan::preprocess::{decode_image, encode_png, prepare_image, PreprocessConfig};
use horoscan::scan::{scan_image, ScanConfig};
use horoscan::worker::{spawn_recognition_worker, RecognitionEvent, RecognitionRequest};
use image::{DynamicImage, RgbImage};
use tokio::sync::mpsc;

mod preprocess_tests {
    use super::*;

    #[test]
    fn undecodable_bytes_report_decode_failure() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(ScanError::ImageDecodeFailed(_))));
    }

    #[test]
    fn large_images_are_bounded_preserving_aspect() {
        let config = PreprocessConfig::default();
        let image = DynamicImage::ImageRgb8(RgbImage::new(1600, 900));

        let prepared = prepare_image(&image, &config);
        assert!(prepared.width() <= config.max_dimension);
        assert!(prepared.height() <= config.max_dimension);
        assert_eq!(prepared.width(), 800);
        assert_eq!(prepared.height(), 450);
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let config = PreprocessConfig::default();
        let image = DynamicImage::ImageRgb8(RgbImage::new(120, 64));

        let prepared = prepare_image(&image, &config);
        assert_eq!((prepared.width(), prepared.height()), (120, 64));
    }

    #[test]
    fn reencoded_png_is_nonempty_and_decodable() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(32, 32));
        let bytes = encode_png(&image).unwrap();
        assert!(!bytes.is_empty());
        assert!(decode_image(&bytes).is_ok());
    }
}

mod scan_tests {
    use super::*;

    #[tokio::test]
    async fn scan_of_undecodable_image_fails_recoverably() {
        let config = ScanConfig::default();
        let result = scan_image(b"junk bytes", &config).await;
        assert!(matches!(result, Err(ScanError::ImageDecodeFailed(_))));
    }
}

mod worker_tests {
    use super::*;

    #[tokio::test]
    async fn worker_reports_decode_failure_as_terminal_error() {
        let worker = spawn_recognition_worker();
        let (events_tx, mut events_rx) = mpsc::channel(16);

        worker
            .send(RecognitionRequest {
                image: b"junk bytes".to_vec(),
                config: ScanConfig::default(),
                events: events_tx,
            })
            .await
            .expect("worker should accept the request");

        loop {
            match events_rx.recv().await {
                Some(RecognitionEvent::Progress { .. }) => continue,
                Some(RecognitionEvent::Error { message }) => {
                    assert!(message.contains("decode"), "unexpected message: {}", message);
                    break;
                }
                Some(RecognitionEvent::Result { text }) => {
                    panic!("junk bytes should not recognize to {:?}", text)
                }
                None => panic!("channel closed without a terminal event"),
            }
        }

        // The terminal event is the last one for this request.
        assert!(events_rx.recv().await.is_none());
    }
}
