//! Clipboard text payload and line-ending normalization.
//!
//! A [`TextPayload`] is created once per trigger invocation from the raw
//! clipboard text, consumed by an encoder, and discarded. It never changes
//! after construction.

/// Normalized clipboard text, ready for encoding.
///
/// Construction collapses Windows (`\r\n`) and legacy Mac (`\r`) line
/// endings to a single `\n` so that both encoders only ever see one kind of
/// newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPayload {
    text: String,
}

impl TextPayload {
    /// Builds a payload from raw clipboard text, normalizing line endings.
    pub fn new(raw: &str) -> Self {
        Self {
            text: normalize_line_endings(raw),
        }
    }

    /// Whether this payload should be injected at all.
    ///
    /// Empty or whitespace-only clipboard content is skipped before any
    /// event is generated.
    pub fn is_actionable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterates the payload's Unicode scalar values in order.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

/// Collapses `\r\n` and lone `\r` to `\n`.
///
/// Idempotent: normalizing already-normalized text is a no-op, because the
/// output never contains `\r`.
pub fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
