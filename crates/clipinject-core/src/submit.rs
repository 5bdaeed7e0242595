//! The event submission gate and the [`InputSink`] port.
//!
//! The gate is the single choke point where a batch of synthetic events is
//! handed to the OS input facility. The OS-facing half is the [`InputSink`]
//! trait (one call, one batch); the count comparison and the empty-batch
//! shortcut live here so every platform implementation gets identical
//! semantics.

use tracing::debug;

use crate::event::SyntheticKeyEvent;

/// What the OS input facility reported for one submission call.
///
/// Implementations must capture `os_error` immediately after the injection
/// call, before any other OS interaction can overwrite the thread's last
/// error. That ordering is the implementation's responsibility; the gate
/// only reads the captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSubmission {
    /// Number of events the OS accepted.
    pub accepted: usize,
    /// The OS last-error code captured right after the call.
    pub os_error: u32,
}

/// Port onto the OS low-level input-injection facility.
pub trait InputSink: Send + Sync {
    /// Submits the whole batch in a single OS call and reports the
    /// accepted count plus the immediately-captured OS error code.
    fn submit(&self, batch: &[SyntheticKeyEvent]) -> RawSubmission;
}

/// Outcome of one gated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The OS accepted every event in the batch.
    Accepted,
    /// The OS accepted fewer events than requested. The un-submitted
    /// remainder is never re-sent: the target's receive state after a
    /// short submission is unknown.
    Partial {
        submitted: usize,
        requested: usize,
        os_error: u32,
    },
}

/// Submits one batch through the sink and validates atomic acceptance.
///
/// An empty batch is trivially accepted without calling the OS. Otherwise
/// the sink is called exactly once; full acceptance means
/// `accepted == requested`, anything less is [`Submission::Partial`] with
/// the exact counts preserved. The gate never retries.
pub fn submit_batch(sink: &dyn InputSink, batch: &[SyntheticKeyEvent]) -> Submission {
    if batch.is_empty() {
        return Submission::Accepted;
    }

    let raw = sink.submit(batch);
    debug!(
        requested = batch.len(),
        accepted = raw.accepted,
        "submitted input batch"
    );

    if raw.accepted == batch.len() {
        Submission::Accepted
    } else {
        Submission::Partial {
            submitted: raw.accepted,
            requested: batch.len(),
            os_error: raw.os_error,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
