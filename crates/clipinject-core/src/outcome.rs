//! Per-invocation result of the injection pipeline.

use std::fmt;

/// What one trigger invocation amounted to.
///
/// Nothing is persisted: the outcome is handed to the reporting
/// collaborator and the pipeline returns to idle with no state carried
/// across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// The clipboard held no actionable text; no events were generated.
    Skipped,
    /// Every event of the delivering attempt was accepted by the OS.
    Success,
    /// Both strategies fell short. Carries the fallback attempt's counts
    /// and the OS error code for user-visible diagnostics.
    PartialFailure {
        submitted: usize,
        requested: usize,
        os_error: u32,
    },
}

impl InjectionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InjectionOutcome::Success)
    }
}

impl fmt::Display for InjectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionOutcome::Skipped => write!(f, "skipped (no actionable clipboard text)"),
            InjectionOutcome::Success => write!(f, "delivered"),
            InjectionOutcome::PartialFailure {
                submitted,
                requested,
                os_error,
            } => write!(
                f,
                "partial delivery ({submitted}/{requested}), OS error 0x{os_error:X}"
            ),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
