//! Mock input sink for unit and integration tests.
//!
//! # Why a mock sink?
//!
//! The real sink (`SendInputSink`) injects keystrokes into whatever
//! window has focus on the test machine. Running it in a test would
//! type into the developer's terminal. The `MockInputSink` records each
//! submitted batch in memory instead, and can be scripted to report
//! partial acceptance so callers' fallback and failure paths can be
//! exercised.
//!
//! # Scripted responses
//!
//! `push_response` queues a [`RawSubmission`] to return for the next
//! unanswered `submit` call. Calls past the end of the script report
//! full acceptance.

use std::sync::Mutex;

use clipinject_core::{InputSink, RawSubmission, SyntheticKeyEvent};

/// A sink that records all submitted batches without touching the OS.
#[derive(Default)]
pub struct MockInputSink {
    /// Every batch passed to `submit`, in call order.
    pub batches: Mutex<Vec<Vec<SyntheticKeyEvent>>>,
    responses: Mutex<Vec<RawSubmission>>,
}

impl MockInputSink {
    /// Creates a sink that accepts every batch in full.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next unanswered `submit` call.
    pub fn push_response(&self, response: RawSubmission) {
        self.responses.lock().unwrap().push(response);
    }

    /// Number of `submit` calls recorded so far.
    pub fn submission_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// Returns a copy of the batch recorded at `index`.
    pub fn batch(&self, index: usize) -> Vec<SyntheticKeyEvent> {
        self.batches.lock().unwrap()[index].clone()
    }
}

impl InputSink for MockInputSink {
    fn submit(&self, batch: &[SyntheticKeyEvent]) -> RawSubmission {
        let mut batches = self.batches.lock().unwrap();
        let index = batches.len();
        batches.push(batch.to_vec());
        self.responses
            .lock()
            .unwrap()
            .get(index)
            .copied()
            .unwrap_or(RawSubmission {
                accepted: batch.len(),
                os_error: 0,
            })
    }
}
