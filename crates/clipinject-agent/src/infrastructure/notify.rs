//! Outcome reporting through the log.
//!
//! The original tray balloon is replaced by structured log lines. A
//! successful injection logs at info; a partial delivery logs at warn
//! with the counts and OS error the outcome carries.

use clipinject_core::InjectionOutcome;
use tracing::{info, warn};

use crate::application::OutcomeSink;

/// Reports injection outcomes to the log.
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSink for LogReporter {
    fn report(&self, outcome: &InjectionOutcome) {
        match outcome {
            InjectionOutcome::Success => info!("clipboard text injected"),
            InjectionOutcome::PartialFailure { .. } => {
                warn!("injection failed: {outcome}");
            }
            InjectionOutcome::Skipped => {}
        }
    }
}
