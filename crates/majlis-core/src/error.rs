//! Error types for Al-Majlis

use thiserror::Error;

/// Main error type for Al-Majlis operations
#[derive(Error, Debug)]
pub enum MajlisError {
    /// A vibe id string did not match any entry in the catalog
    #[error("Unknown vibe: {0}")]
    UnknownVibe(String),

    /// Sharing the greeting failed
    #[error("Share error: {0}")]
    Share(#[from] ShareError),
}

impl MajlisError {
    /// Whether the user should see a notice for this failure.
    ///
    /// Only clipboard writes qualify; a rejected native share sheet is
    /// usually the user dismissing it.
    pub fn needs_notice(&self) -> bool {
        matches!(self, MajlisError::Share(ShareError::Clipboard(_)))
    }
}

/// Failures of the host share capabilities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// Writing to the system clipboard failed (no clipboard, permission denied)
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// The native share sheet rejected the payload
    #[error("Native share failed: {0}")]
    Native(String),
}

/// Result type alias for Al-Majlis operations
pub type Result<T> = std::result::Result<T, MajlisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_error_converts_into_majlis_error() {
        let err: MajlisError = ShareError::Clipboard("denied".into()).into();
        assert!(matches!(err, MajlisError::Share(ShareError::Clipboard(_))));
        assert_eq!(
            err.to_string(),
            "Share error: Clipboard write failed: denied"
        );
    }

    #[test]
    fn only_clipboard_failures_need_notice() {
        let clipboard: MajlisError = ShareError::Clipboard("denied".into()).into();
        let native: MajlisError = ShareError::Native("AbortError".into()).into();
        assert!(clipboard.needs_notice());
        assert!(!native.needs_notice());
        assert!(!MajlisError::UnknownVibe("retro".into()).needs_notice());
    }

    #[test]
    fn unknown_vibe_message() {
        let err = MajlisError::UnknownVibe("retro".into());
        assert_eq!(err.to_string(), "Unknown vibe: retro");
    }
}
