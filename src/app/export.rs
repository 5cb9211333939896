//! Deck export: fetch the rendered PPTX from the export service, decode it
//! and hand it to the save mechanism.
//!
//! The service returns the whole file inline as base64 inside a small JSON
//! envelope, so the flow is fetch -> decode -> save -> notify. A single
//! boolean guard keeps the flow single-flight; there is no retry, timeout
//! handling beyond the HTTP client's own, or cancellation.

use base64::Engine;
use serde::Deserialize;

use super::error::{AppError, Result};
use super::notify::{Notice, Notifier};

/// Fixed endpoint that renders the built-in deck to PPTX.
pub const EXPORT_URL: &str = "https://functions.poehali.dev/industrial-revolution/generate-pptx";

/// Fallback when the response carries no filename.
pub const DEFAULT_FILENAME: &str = "industrial_revolution.pptx";

pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Wire shape of the export service response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportResponse {
    pub success: bool,
    #[serde(rename = "fileBase64")]
    pub file_base64: Option<String>,
    pub filename: Option<String>,
}

pub trait ExportEndpoint {
    fn fetch(&self) -> Result<ExportResponse>;
}

/// Production endpoint: HTTP GET against the export service.
pub struct HttpEndpoint {
    url: String,
}

impl HttpEndpoint {
    pub fn new() -> Self {
        Self {
            url: EXPORT_URL.to_string(),
        }
    }
}

impl Default for HttpEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportEndpoint for HttpEndpoint {
    fn fetch(&self) -> Result<ExportResponse> {
        let response = minreq::get(self.url.as_str())
            .with_header("User-Agent", "SlideForge")
            .with_timeout(10)
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(AppError::Export(format!(
                "export server returned {}",
                response.status_code
            )));
        }

        Ok(response.json::<ExportResponse>()?)
    }
}

/// Platform save mechanism: receives the decoded bytes, the target filename
/// and the media type. The app implements this with the native save dialog.
pub trait FileSink {
    fn save(&mut self, bytes: &[u8], filename: &str, mime: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved,
    AlreadyRunning,
    Failed,
}

/// Single-flight export flow. `begin` sets the guard before the request goes
/// out; `finish` consumes the fetch result and clears the guard on every
/// path. The app splits the two across its worker-thread boundary; tests use
/// the synchronous `run` composition.
pub struct ExportController {
    in_flight: bool,
}

impl ExportController {
    pub fn new() -> Self {
        Self { in_flight: false }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Claim the guard. Returns `false` (and does nothing) when an export is
    /// already running.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Decode and save a completed fetch, then notify. The guard is cleared
    /// before the notification goes out, on success and failure alike.
    pub fn finish(
        &mut self,
        result: Result<ExportResponse>,
        sink: &mut dyn FileSink,
        notifier: &mut dyn Notifier,
    ) -> ExportOutcome {
        let saved = result.and_then(|response| save_payload(response, sink));
        self.in_flight = false;

        match saved {
            Ok(filename) => {
                notifier.notify(Notice::success(
                    "Export complete",
                    format!("Saved {filename}"),
                ));
                ExportOutcome::Saved
            }
            Err(err) => {
                notifier.notify(Notice::error("Export failed", err.to_string()));
                ExportOutcome::Failed
            }
        }
    }

    /// begin -> fetch -> finish in one call.
    pub fn run(
        &mut self,
        endpoint: &dyn ExportEndpoint,
        sink: &mut dyn FileSink,
        notifier: &mut dyn Notifier,
    ) -> ExportOutcome {
        if !self.begin() {
            return ExportOutcome::AlreadyRunning;
        }
        let result = endpoint.fetch();
        self.finish(result, sink, notifier)
    }
}

impl Default for ExportController {
    fn default() -> Self {
        Self::new()
    }
}

fn save_payload(response: ExportResponse, sink: &mut dyn FileSink) -> Result<String> {
    if !response.success {
        return Err(AppError::Export("export server reported failure".into()));
    }

    let payload = response
        .file_base64
        .ok_or_else(|| AppError::Export("response carried no file payload".into()))?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload.as_bytes())?;

    let filename = response
        .filename
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    sink.save(&bytes, &filename, PPTX_MIME)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notify::NoticeKind;
    use std::cell::Cell;

    struct StubEndpoint {
        body: &'static str,
        calls: Cell<u32>,
    }

    impl StubEndpoint {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    impl ExportEndpoint for StubEndpoint {
        fn fetch(&self) -> Result<ExportResponse> {
            self.calls.set(self.calls.get() + 1);
            Ok(serde_json::from_str(self.body)?)
        }
    }

    struct FailingEndpoint;

    impl ExportEndpoint for FailingEndpoint {
        fn fetch(&self) -> Result<ExportResponse> {
            Err(AppError::Export("connection refused".into()))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        saves: Vec<(Vec<u8>, String, String)>,
    }

    impl FileSink for RecordingSink {
        fn save(&mut self, bytes: &[u8], filename: &str, mime: &str) -> Result<()> {
            self.saves
                .push((bytes.to_vec(), filename.to_string(), mime.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Vec<Notice>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    #[test]
    fn test_successful_export_saves_decoded_bytes() {
        let endpoint =
            StubEndpoint::new(r#"{"success":true,"fileBase64":"SGVsbG8=","filename":"x.pptx"}"#);
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        let outcome = controller.run(&endpoint, &mut sink, &mut notifier);

        assert_eq!(outcome, ExportOutcome::Saved);
        assert_eq!(sink.saves.len(), 1);
        let (bytes, filename, mime) = &sink.saves[0];
        assert_eq!(bytes, b"Hello");
        assert_eq!(filename, "x.pptx");
        assert_eq!(mime, PPTX_MIME);

        assert_eq!(notifier.notices.len(), 1);
        assert_eq!(notifier.notices[0].kind, NoticeKind::Success);
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_unsuccessful_payload_saves_nothing() {
        let endpoint = StubEndpoint::new(r#"{"success":false}"#);
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        let outcome = controller.run(&endpoint, &mut sink, &mut notifier);

        assert_eq!(outcome, ExportOutcome::Failed);
        assert!(sink.saves.is_empty());
        assert_eq!(notifier.notices.len(), 1);
        assert_eq!(notifier.notices[0].kind, NoticeKind::Error);
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_success_without_payload_is_an_error() {
        let endpoint = StubEndpoint::new(r#"{"success":true,"filename":"x.pptx"}"#);
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        assert_eq!(
            controller.run(&endpoint, &mut sink, &mut notifier),
            ExportOutcome::Failed
        );
        assert!(sink.saves.is_empty());
        assert_eq!(notifier.notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_undecodable_payload_is_an_error() {
        let endpoint = StubEndpoint::new(r#"{"success":true,"fileBase64":"!!not-base64!!"}"#);
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        assert_eq!(
            controller.run(&endpoint, &mut sink, &mut notifier),
            ExportOutcome::Failed
        );
        assert!(sink.saves.is_empty());
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_transport_failure_notifies_once() {
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        let outcome = controller.run(&FailingEndpoint, &mut sink, &mut notifier);

        assert_eq!(outcome, ExportOutcome::Failed);
        assert!(sink.saves.is_empty());
        assert_eq!(notifier.notices.len(), 1);
        assert_eq!(notifier.notices[0].kind, NoticeKind::Error);
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_missing_filename_falls_back_to_default() {
        let endpoint = StubEndpoint::new(r#"{"success":true,"fileBase64":"SGVsbG8="}"#);
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        controller.run(&endpoint, &mut sink, &mut notifier);

        assert_eq!(sink.saves[0].1, DEFAULT_FILENAME);
    }

    #[test]
    fn test_second_request_while_in_flight_is_ignored() {
        let endpoint =
            StubEndpoint::new(r#"{"success":true,"fileBase64":"SGVsbG8=","filename":"x.pptx"}"#);
        let mut sink = RecordingSink::default();
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        // First claim wins; a second request while the fetch is pending is
        // dropped without touching the endpoint.
        assert!(controller.begin());
        assert_eq!(
            controller.run(&endpoint, &mut sink, &mut notifier),
            ExportOutcome::AlreadyRunning
        );
        assert_eq!(endpoint.calls.get(), 0);
        assert!(sink.saves.is_empty());
        assert!(notifier.notices.is_empty());

        // The pending flow completes normally and releases the guard.
        let result = endpoint.fetch();
        assert_eq!(
            controller.finish(result, &mut sink, &mut notifier),
            ExportOutcome::Saved
        );
        assert!(!controller.in_flight());
        assert!(controller.begin());
    }

    #[test]
    fn test_save_error_surfaces_as_error_notice() {
        struct RefusingSink;
        impl FileSink for RefusingSink {
            fn save(&mut self, _bytes: &[u8], _filename: &str, _mime: &str) -> Result<()> {
                Err(AppError::Export("save cancelled".into()))
            }
        }

        let endpoint = StubEndpoint::new(r#"{"success":true,"fileBase64":"SGVsbG8="}"#);
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        let outcome = controller.run(&endpoint, &mut RefusingSink, &mut notifier);

        assert_eq!(outcome, ExportOutcome::Failed);
        assert_eq!(notifier.notices.len(), 1);
        assert!(notifier.notices[0].detail.contains("save cancelled"));
        assert!(!controller.in_flight());
    }

    #[test]
    fn test_decoded_file_reaches_disk() {
        struct DirSink {
            dir: std::path::PathBuf,
        }
        impl FileSink for DirSink {
            fn save(&mut self, bytes: &[u8], filename: &str, _mime: &str) -> Result<()> {
                std::fs::write(self.dir.join(filename), bytes)?;
                Ok(())
            }
        }

        let tmp = tempfile::tempdir().unwrap();
        let endpoint =
            StubEndpoint::new(r#"{"success":true,"fileBase64":"SGVsbG8=","filename":"x.pptx"}"#);
        let mut sink = DirSink {
            dir: tmp.path().to_path_buf(),
        };
        let mut notifier = RecordingNotifier::default();
        let mut controller = ExportController::new();

        assert_eq!(
            controller.run(&endpoint, &mut sink, &mut notifier),
            ExportOutcome::Saved
        );
        let written = std::fs::read(tmp.path().join("x.pptx")).unwrap();
        assert_eq!(written, b"Hello");
    }

    #[test]
    fn test_wire_shape_decodes_optional_fields() {
        let full: ExportResponse = serde_json::from_str(
            r#"{"success":true,"fileBase64":"SGVsbG8=","filename":"x.pptx","size":8}"#,
        )
        .unwrap();
        assert!(full.success);
        assert_eq!(full.file_base64.as_deref(), Some("SGVsbG8="));
        assert_eq!(full.filename.as_deref(), Some("x.pptx"));

        let bare: ExportResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!bare.success);
        assert!(bare.file_base64.is_none());
        assert!(bare.filename.is_none());
    }
}
