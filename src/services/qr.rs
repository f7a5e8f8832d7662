//! QR identification flow: payload encode/decode and the scanner lifecycle.
//!
//! The payload is a UTF-8 JSON object carrying at least `assetId` and
//! `inventoryNumber`. Camera frame decoding itself is delegated to an
//! external library; this module owns everything after the raw text arrives:
//! validation, extraction, and the scan session state machine.

use chrono::Utc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::qr::{QrPayload, ScannedAsset},
    repository::Repository,
};

/// Delay before an invalid scan silently re-enters scanning
pub const SCAN_RETRY_DELAY: Duration = Duration::from_millis(1500);

/// Why a raw scan result was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrDecodeError {
    #[error("payload is not valid JSON")]
    NotJson,
    #[error("payload must carry both assetId and inventoryNumber")]
    MissingFields,
}

/// Encode the payload for a printable code. The timestamp is captured at
/// encode time and is informational only; decode never validates it.
pub fn encode(
    inventory_number: &str,
    asset_id: &str,
    name: Option<&str>,
    asset_type: Option<&str>,
) -> QrPayload {
    QrPayload {
        inventory_number: inventory_number.to_string(),
        asset_id: asset_id.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        name: name.map(str::to_string),
        asset_type: asset_type.map(str::to_string),
    }
}

/// Decode and validate a raw scan result. Both `assetId` and
/// `inventoryNumber` are required; `name` and `type` default when absent.
pub fn decode(raw: &str) -> Result<ScannedAsset, QrDecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|_| QrDecodeError::NotJson)?;

    let asset_id = value
        .get("assetId")
        .and_then(|v| v.as_str())
        .ok_or(QrDecodeError::MissingFields)?;
    let inventory_number = value
        .get("inventoryNumber")
        .and_then(|v| v.as_str())
        .ok_or(QrDecodeError::MissingFields)?;

    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown Asset");
    let asset_type = value
        .get("type")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown");

    Ok(ScannedAsset {
        id: asset_id.to_string(),
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        asset_id: asset_id.to_string(),
        inventory_number: inventory_number.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Scanner state machine
// ---------------------------------------------------------------------------

/// Camera acquisition failure. Permission failures are surfaced immediately
/// and never auto-retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera permission denied: {0}")]
    PermissionDenied(String),
    #[error("camera failure: {0}")]
    Failed(String),
}

/// An acquired camera capture session. Release must be safe to call once on
/// every exit path.
pub trait CaptureSession: Send {
    fn release(&mut self) -> Result<(), CameraError>;
}

/// Camera handle able to open capture sessions
pub trait CameraPort: Send {
    fn acquire(&mut self) -> Result<Box<dyn CaptureSession>, CameraError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    Idle,
    Scanning,
    ScanError,
}

/// Events emitted by the scanner
#[derive(Debug)]
pub enum ScannerEvent {
    Started,
    /// Successful decode; the capture session has already been released
    Decoded(ScannedAsset),
    /// Malformed payload; scanning resumes after `retry_in` without
    /// surfacing a hard failure
    Invalid {
        reason: QrDecodeError,
        retry_in: Duration,
    },
    Stopped,
}

/// Finite-state scanner: Idle -> Scanning -> (Decoded | ScanError) -> Idle.
///
/// The capture session is the only scoped resource; it is released on
/// successful decode, on stop, and on drop.
pub struct QrScanner {
    camera: Box<dyn CameraPort>,
    session: Option<Box<dyn CaptureSession>>,
    state: ScannerState,
}

impl QrScanner {
    pub fn new(camera: Box<dyn CameraPort>) -> Self {
        Self {
            camera,
            session: None,
            state: ScannerState::Idle,
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Acquire the capture session and enter Scanning. Camera errors are
    /// returned to the caller immediately; the scanner stays Idle. An
    /// explicit start while in ScanError resumes on the live session.
    pub fn start(&mut self) -> Result<ScannerEvent, CameraError> {
        match self.state {
            ScannerState::Scanning => {}
            ScannerState::ScanError => self.state = ScannerState::Scanning,
            ScannerState::Idle => {
                let session = self.camera.acquire()?;
                self.session = Some(session);
                self.state = ScannerState::Scanning;
            }
        }
        Ok(ScannerEvent::Started)
    }

    /// Feed one opportunistically decoded frame. Frames arriving outside the
    /// Scanning state are ignored.
    pub fn on_frame(&mut self, raw: &str) -> Option<ScannerEvent> {
        if self.state != ScannerState::Scanning {
            return None;
        }
        match decode(raw) {
            Ok(scanned) => {
                // Release before handing control back. A release failure is
                // logged, never escalated; the decoded result still lands.
                self.release_session();
                self.state = ScannerState::Idle;
                Some(ScannerEvent::Decoded(scanned))
            }
            Err(reason) => {
                self.state = ScannerState::ScanError;
                Some(ScannerEvent::Invalid {
                    reason,
                    retry_in: SCAN_RETRY_DELAY,
                })
            }
        }
    }

    /// Re-enter Scanning after an invalid scan. The caller invokes this once
    /// the retry delay elapses.
    pub fn resume(&mut self) {
        if self.state == ScannerState::ScanError {
            self.state = ScannerState::Scanning;
        }
    }

    /// Stop scanning and release the capture session
    pub fn stop(&mut self) -> ScannerEvent {
        self.release_session();
        self.state = ScannerState::Idle;
        ScannerEvent::Stopped
    }

    fn release_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Err(e) = session.release() {
                tracing::warn!("capture session release failed: {}", e);
            }
        }
    }
}

impl Drop for QrScanner {
    fn drop(&mut self) {
        self.release_session();
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// QR service: payload generation for stored assets and decode for the
/// maintenance prefill flow.
#[derive(Clone)]
pub struct QrService {
    repository: Repository,
}

impl QrService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Build the printable payload for an existing asset
    pub async fn encode_for_asset(&self, asset_id: Uuid) -> AppResult<QrPayload> {
        let asset = self.repository.assets.get_by_id(asset_id).await?;
        Ok(encode(
            &asset.inventory_number,
            &asset.id.to_string(),
            Some(&asset.name),
            Some(&asset.asset_type),
        ))
    }

    /// Decode a raw scan result, mapping rejection onto the API error type
    pub fn decode_payload(&self, raw: &str) -> AppResult<ScannedAsset> {
        decode(raw).map_err(|e| AppError::InvalidQrPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubSession {
        releases: Arc<AtomicUsize>,
        fail_release: bool,
    }

    impl CaptureSession for StubSession {
        fn release(&mut self) -> Result<(), CameraError> {
            self.releases.fetch_add(1, Ordering::SeqCst);
            if self.fail_release {
                Err(CameraError::Failed("release failed".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct StubCamera {
        releases: Arc<AtomicUsize>,
        deny: bool,
        fail_release: bool,
    }

    impl CameraPort for StubCamera {
        fn acquire(&mut self) -> Result<Box<dyn CaptureSession>, CameraError> {
            if self.deny {
                return Err(CameraError::PermissionDenied("denied".to_string()));
            }
            Ok(Box::new(StubSession {
                releases: self.releases.clone(),
                fail_release: self.fail_release,
            }))
        }
    }

    fn scanner(releases: Arc<AtomicUsize>) -> QrScanner {
        QrScanner::new(Box::new(StubCamera {
            releases,
            deny: false,
            fail_release: false,
        }))
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let payload = encode("IT-FA/KPTM/LAPTOP/IV/2025/IT/042", "A1001", None, None);
        let raw = serde_json::to_string(&payload).unwrap();
        let scanned = decode(&raw).unwrap();
        assert_eq!(scanned.inventory_number, "IT-FA/KPTM/LAPTOP/IV/2025/IT/042");
        assert_eq!(scanned.asset_id, "A1001");
        // Absent name/type fall back to defaults
        assert_eq!(scanned.name, "Unknown Asset");
        assert_eq!(scanned.asset_type, "Unknown");
    }

    #[test]
    fn test_decode_not_json() {
        assert_eq!(decode("not json"), Err(QrDecodeError::NotJson));
    }

    #[test]
    fn test_decode_missing_inventory_number() {
        assert_eq!(
            decode(r#"{"assetId":"A1004"}"#),
            Err(QrDecodeError::MissingFields)
        );
    }

    #[test]
    fn test_decode_missing_asset_id() {
        assert_eq!(
            decode(r#"{"inventoryNumber":"IT-FA/KPTM/LAPTOP/IV/2025/IT/042"}"#),
            Err(QrDecodeError::MissingFields)
        );
    }

    #[test]
    fn test_timestamp_is_not_validated() {
        let raw = r#"{"assetId":"A1","inventoryNumber":"N1","timestamp":"garbage"}"#;
        assert!(decode(raw).is_ok());
    }

    #[test]
    fn test_successful_decode_releases_session() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = scanner(releases.clone());
        scanner.start().unwrap();
        assert_eq!(scanner.state(), ScannerState::Scanning);

        let event = scanner
            .on_frame(r#"{"assetId":"A1","inventoryNumber":"N1"}"#)
            .unwrap();
        assert!(matches!(event, ScannerEvent::Decoded(_)));
        assert_eq!(scanner.state(), ScannerState::Idle);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_scan_retries_without_releasing() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = scanner(releases.clone());
        scanner.start().unwrap();

        let event = scanner.on_frame("not json").unwrap();
        match event {
            ScannerEvent::Invalid { reason, retry_in } => {
                assert_eq!(reason, QrDecodeError::NotJson);
                assert_eq!(retry_in, SCAN_RETRY_DELAY);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(scanner.state(), ScannerState::ScanError);
        // Session stays alive across the silent retry
        assert_eq!(releases.load(Ordering::SeqCst), 0);

        scanner.resume();
        assert_eq!(scanner.state(), ScannerState::Scanning);
    }

    #[test]
    fn test_start_after_invalid_scan_resumes_on_the_live_session() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = scanner(releases.clone());
        scanner.start().unwrap();
        scanner.on_frame("not json").unwrap();
        assert_eq!(scanner.state(), ScannerState::ScanError);

        // An explicit start acts as a resume, frames decode again
        scanner.start().unwrap();
        assert_eq!(scanner.state(), ScannerState::Scanning);
        let event = scanner
            .on_frame(r#"{"assetId":"A1","inventoryNumber":"N1"}"#)
            .unwrap();
        assert!(matches!(event, ScannerEvent::Decoded(_)));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_releases_session_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = scanner(releases.clone());
        scanner.start().unwrap();
        scanner.stop();
        scanner.stop();
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases_session() {
        let releases = Arc::new(AtomicUsize::new(0));
        {
            let mut scanner = scanner(releases.clone());
            scanner.start().unwrap();
        }
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_failure_still_delivers_decode() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = QrScanner::new(Box::new(StubCamera {
            releases: releases.clone(),
            deny: false,
            fail_release: true,
        }));
        scanner.start().unwrap();
        let event = scanner
            .on_frame(r#"{"assetId":"A1","inventoryNumber":"N1"}"#)
            .unwrap();
        assert!(matches!(event, ScannerEvent::Decoded(_)));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_permission_failure_surfaces_immediately() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = QrScanner::new(Box::new(StubCamera {
            releases,
            deny: true,
            fail_release: false,
        }));
        let err = scanner.start().unwrap_err();
        assert!(matches!(err, CameraError::PermissionDenied(_)));
        assert_eq!(scanner.state(), ScannerState::Idle);
    }

    #[test]
    fn test_frames_ignored_when_idle() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut scanner = scanner(releases);
        assert!(scanner
            .on_frame(r#"{"assetId":"A1","inventoryNumber":"N1"}"#)
            .is_none());
    }
}
