//! Transient user notifications.
//!
//! The export flow reports its outcome through the `Notifier` trait; the main
//! window implements it with the banner frame, tests with a recording stub.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub detail: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Fire-and-forget notification sink; nothing is returned to the caller.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let ok = Notice::success("Export complete", "Saved deck.pptx");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.title, "Export complete");

        let err = Notice::error("Export failed", "connection refused");
        assert_eq!(err.kind, NoticeKind::Error);
        assert_eq!(err.detail, "connection refused");
    }
}
