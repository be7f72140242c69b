//! The asynchronous font service contract.

use std::future::Future;

use thiserror::Error;

use crate::FontName;

/// Errors produced by a [`FontSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    /// The requested font could not be made available for use.
    ///
    /// This is the one failure a replace batch recognizes; its message is
    /// forwarded to the panel verbatim.
    #[error("Could not load font: {0}")]
    LoadFailed(FontName),

    /// Enumerating the available fonts failed.
    #[error("font enumeration failed: {0}")]
    Enumeration(String),
}

/// Asynchronous access to the fonts available to the tool.
///
/// Both operations are suspension points; callers await them strictly
/// sequentially. `load_font` must be idempotent: loading an
/// already-loaded font is a cheap no-op.
pub trait FontSource {
    /// Every font currently available, as (family, style) pairs.
    fn available_fonts(&self) -> impl Future<Output = Result<Vec<FontName>, FontError>> + Send;

    /// Make `font` available for assignment to document text.
    fn load_font(&self, font: &FontName) -> impl Future<Output = Result<(), FontError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_message_names_the_font() {
        let err = FontError::LoadFailed(FontName::new("Inter", "Bold"));
        assert_eq!(err.to_string(), "Could not load font: Inter Bold");
    }
}
