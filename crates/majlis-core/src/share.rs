//! Text sharing capability.
//!
//! The host either offers a native share sheet or a clipboard (or neither).
//! Which one is used is decided once at startup by [`select_sharer`]; the
//! share button then calls the chosen [`TextSharer`] without branching.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{shared_greeting, VibeRecord};
use crate::error::ShareError;

/// Title passed to the native share sheet
pub const SHARE_TITLE: &str = "تحية عربية";

/// Acknowledgment shown after a clipboard copy
pub const COPIED_ACKNOWLEDGMENT: &str = "نُسخت التحية! الصقها حيث تشاء 🤍";

/// Content handed to a share capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    /// Compose the share text for the active vibe.
    ///
    /// The quoted greeting is always the shared catalog entry, not one tied
    /// to the vibe.
    pub fn compose(vibe: &VibeRecord) -> Self {
        let greeting = shared_greeting();
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!(
                "هلا! {} بانتظارك: {} – {}",
                vibe.label, greeting.phrase, greeting.note
            ),
        }
    }
}

/// Which share path a sharer takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharerKind {
    Native,
    Clipboard,
    Unavailable,
}

/// What happened when the share action ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet
    Shared,
    /// Copied to the clipboard; the user should be told
    Copied,
    /// No capability present, nothing done
    Skipped,
}

/// Host hook for a native "share content" capability
pub trait NativeShareHost: Send + Sync {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Host hook for writing text to the clipboard
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// A way of getting share text out of the app
pub trait TextSharer: Send + Sync {
    fn kind(&self) -> SharerKind;

    fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError>;
}

/// Shares through the host's native share sheet
pub struct NativeShare<H> {
    host: H,
}

impl<H: NativeShareHost> NativeShare<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: NativeShareHost> TextSharer for NativeShare<H> {
    fn kind(&self) -> SharerKind {
        SharerKind::Native
    }

    fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        self.host.share(payload)?;
        Ok(ShareOutcome::Shared)
    }
}

/// Copies the share text to the clipboard
pub struct ClipboardCopy<C> {
    clipboard: C,
}

impl<C: ClipboardWriter> ClipboardCopy<C> {
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }
}

impl<C: ClipboardWriter> TextSharer for ClipboardCopy<C> {
    fn kind(&self) -> SharerKind {
        SharerKind::Clipboard
    }

    fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        self.clipboard.write_text(&payload.text)?;
        Ok(ShareOutcome::Copied)
    }
}

/// Used when the host offers neither capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSharer;

impl TextSharer for NoSharer {
    fn kind(&self) -> SharerKind {
        SharerKind::Unavailable
    }

    fn share(&self, _payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        Ok(ShareOutcome::Skipped)
    }
}

/// Result of probing the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCapabilities {
    pub native_share: bool,
    pub clipboard: bool,
}

/// Pick the share path for this session. Native sharing wins when present.
pub fn select_sharer<H, C>(caps: HostCapabilities, native: H, clipboard: C) -> Arc<dyn TextSharer>
where
    H: NativeShareHost + 'static,
    C: ClipboardWriter + 'static,
{
    let sharer: Arc<dyn TextSharer> = if caps.native_share {
        Arc::new(NativeShare::new(native))
    } else if caps.clipboard {
        Arc::new(ClipboardCopy::new(clipboard))
    } else {
        Arc::new(NoSharer)
    };
    tracing::info!(kind = ?sharer.kind(), "Share capability selected");
    sharer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VibeId;
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl NativeShareHost for Recorder {
        fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Native("aborted".into()));
            }
            self.calls.lock().push(format!("native:{}", payload.title));
            Ok(())
        }
    }

    impl ClipboardWriter for Recorder {
        fn write_text(&self, text: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Clipboard("denied".into()));
            }
            self.calls.lock().push(format!("clipboard:{text}"));
            Ok(())
        }
    }

    #[test]
    fn test_compose_uses_second_greeting() {
        let payload = SharePayload::compose(VibeId::Classic.record());
        assert_eq!(payload.title, SHARE_TITLE);
        assert_eq!(
            payload.text,
            "هلا! الترحيب الكلاسيكي بانتظارك: هلا وغلا – تعبير ودود يوحي بحفاوة بالغة وكرم."
        );
    }

    #[test]
    fn test_native_preferred_when_both_present() {
        let native = Recorder::default();
        let clipboard = Recorder::default();
        let caps = HostCapabilities {
            native_share: true,
            clipboard: true,
        };
        let sharer = select_sharer(caps, native.clone(), clipboard.clone());
        assert_eq!(sharer.kind(), SharerKind::Native);

        let outcome = sharer
            .share(&SharePayload::compose(VibeId::Warm.record()))
            .unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(native.calls.lock().len(), 1);
        assert!(clipboard.calls.lock().is_empty());
    }

    #[test]
    fn test_clipboard_fallback() {
        let clipboard = Recorder::default();
        let caps = HostCapabilities {
            native_share: false,
            clipboard: true,
        };
        let sharer = select_sharer(caps, Recorder::default(), clipboard.clone());
        let payload = SharePayload::compose(VibeId::Modern.record());
        assert_eq!(sharer.share(&payload).unwrap(), ShareOutcome::Copied);
        assert_eq!(
            clipboard.calls.lock().as_slice(),
            [format!("clipboard:{}", payload.text)]
        );
    }

    #[test]
    fn test_no_capability_skips_silently() {
        let sharer = select_sharer(
            HostCapabilities::default(),
            Recorder::default(),
            Recorder::default(),
        );
        assert_eq!(sharer.kind(), SharerKind::Unavailable);
        let outcome = sharer
            .share(&SharePayload::compose(VibeId::Warm.record()))
            .unwrap();
        assert_eq!(outcome, ShareOutcome::Skipped);
    }

    #[test]
    fn test_clipboard_failure_surfaces_error() {
        let failing = Recorder {
            fail: true,
            ..Default::default()
        };
        let sharer = ClipboardCopy::new(failing);
        let err = sharer
            .share(&SharePayload::compose(VibeId::Warm.record()))
            .unwrap_err();
        assert_eq!(err, ShareError::Clipboard("denied".into()));
    }

    #[test]
    fn test_payload_serializes_for_host() {
        let payload = SharePayload::compose(VibeId::Warm.record());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["title"], SHARE_TITLE);
        assert!(json["text"].as_str().unwrap().contains("الدفء العائلي"));
    }
}
