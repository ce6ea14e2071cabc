//! Host capabilities: the webview's share sheet, the system clipboard and
//! the copy acknowledgment dialog.

use dioxus::prelude::*;
use majlis_core::{
    ClipboardWriter, HostCapabilities, NativeShareHost, ShareError, SharePayload,
    COPIED_ACKNOWLEDGMENT, PAGE_TITLE,
};

const PROBE_NATIVE_SHARE: &str = "return typeof navigator.share === 'function';";

/// Build the script handing `payload` to `navigator.share`.
///
/// The payload is embedded as a JSON literal. A dismissed sheet only logs
/// inside the webview.
fn share_script(payload: &SharePayload) -> Result<String, ShareError> {
    let json = serde_json::to_string(payload).map_err(|e| ShareError::Native(e.to_string()))?;
    Ok(format!(
        "navigator.share({json}).catch((err) => console.debug('share dismissed', err));"
    ))
}

/// Native share through the webview's `navigator.share`.
///
/// Fire-and-forget: the returned eval handle is not awaited.
pub struct WebviewShare;

impl NativeShareHost for WebviewShare {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let script = share_script(payload)?;
        let _ = document::eval(&script);
        Ok(())
    }
}

/// Desktop clipboard via arboard
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}

/// Detect which share capabilities this host offers.
///
/// Must run after the webview has mounted.
pub async fn probe_capabilities() -> HostCapabilities {
    let native_share = match document::eval(PROBE_NATIVE_SHARE).join::<bool>().await {
        Ok(available) => available,
        Err(e) => {
            tracing::warn!("Native share probe failed: {:?}", e);
            false
        }
    };
    let clipboard = arboard::Clipboard::new().is_ok();

    HostCapabilities {
        native_share,
        clipboard,
    }
}

/// Tell the user the greeting was copied. Modal until dismissed.
pub async fn acknowledge_copy() {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(PAGE_TITLE)
        .set_description(COPIED_ACKNOWLEDGMENT)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use majlis_core::VibeId;

    #[test]
    fn share_script_embeds_payload_as_json() {
        let payload = SharePayload::compose(VibeId::Warm.record());
        let script = share_script(&payload).unwrap();
        assert!(script.starts_with("navigator.share({"));
        assert!(script.contains("\"title\":\"تحية عربية\""));
        assert!(script.contains("الدفء العائلي"));
    }

    #[test]
    fn share_script_escapes_quotes() {
        let payload = SharePayload {
            title: "t".into(),
            text: "Hala w'ghala \"quoted\"".into(),
        };
        let script = share_script(&payload).unwrap();
        assert!(script.contains(r#"Hala w'ghala \"quoted\""#));
    }
}
