//! InjectClipboardUseCase: turns the current clipboard text into keystrokes.
//!
//! This use case runs once per hotkey trigger. It reads the clipboard
//! through the [`ClipboardSource`] port, encodes the text with the pure
//! pipeline from `clipinject-core`, and submits the result through the
//! [`InputSink`] port. Every run ends in exactly one
//! [`InjectionOutcome`], and only non-skipped outcomes are reported.

use std::sync::Arc;
use std::time::Duration;

use clipinject_core::{
    encode, submit_batch, InjectionOutcome, InputSink, LayoutOracle, Submission, TextPayload,
};
use tracing::{debug, warn};

/// Read access to the system clipboard.
///
/// Implementations are best-effort: any OS-level failure is reported as
/// "no text available" rather than as an error, because a missed
/// injection must never take the agent down.
pub trait ClipboardSource: Send + Sync {
    /// Returns true if the clipboard currently holds text.
    fn has_text(&self) -> bool;

    /// Reads the clipboard text, or `None` if it is unavailable.
    fn read_text(&self) -> Option<String>;
}

/// Receives the outcome of each completed injection attempt.
///
/// Skipped runs are never reported; the user asked for nothing to
/// happen and nothing should be heard about it.
pub trait OutcomeSink: Send + Sync {
    fn report(&self, outcome: &InjectionOutcome);
}

/// The Inject Clipboard use case.
pub struct InjectClipboardUseCase {
    clipboard: Arc<dyn ClipboardSource>,
    layout: Arc<dyn LayoutOracle>,
    sink: Arc<dyn InputSink>,
    reporter: Arc<dyn OutcomeSink>,
    settle_delay: Duration,
}

impl InjectClipboardUseCase {
    pub fn new(
        clipboard: Arc<dyn ClipboardSource>,
        layout: Arc<dyn LayoutOracle>,
        sink: Arc<dyn InputSink>,
        reporter: Arc<dyn OutcomeSink>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            clipboard,
            layout,
            sink,
            reporter,
            settle_delay,
        }
    }

    /// Runs one injection attempt to completion.
    ///
    /// The sequence is: check the clipboard, release any physically held
    /// modifiers, wait for the target application to observe the
    /// releases, then inject with the Unicode strategy. If the OS
    /// accepts only part of the Unicode batch, one fallback attempt is
    /// made with the virtual-key strategy before giving up.
    pub fn run(&self) -> InjectionOutcome {
        if !self.clipboard.has_text() {
            debug!("clipboard holds no text, skipping");
            return InjectionOutcome::Skipped;
        }
        let raw = match self.clipboard.read_text() {
            Some(raw) => raw,
            None => {
                debug!("clipboard text unavailable, skipping");
                return InjectionOutcome::Skipped;
            }
        };

        let payload = TextPayload::new(&raw);
        if !payload.is_actionable() {
            debug!("clipboard text is whitespace only, skipping");
            return InjectionOutcome::Skipped;
        }

        // The hotkey chord is still physically held when WM_HOTKEY
        // arrives. Release the modifiers first so they cannot combine
        // with the injected keys, then give the foreground application
        // a moment to observe the releases.
        let _ = submit_batch(self.sink.as_ref(), &encode::modifier_release_batch());
        std::thread::sleep(self.settle_delay);

        let primary = encode::encode_unicode(&payload);
        let outcome = match submit_batch(self.sink.as_ref(), &primary) {
            Submission::Accepted => InjectionOutcome::Success,
            Submission::Partial {
                submitted,
                requested,
                os_error,
            } => {
                warn!(
                    submitted,
                    requested, os_error, "unicode injection incomplete, retrying with virtual keys"
                );
                self.run_fallback(&payload)
            }
        };

        if !matches!(outcome, InjectionOutcome::Skipped) {
            self.reporter.report(&outcome);
        }
        outcome
    }

    /// The single fallback attempt with the virtual-key strategy.
    fn run_fallback(&self, payload: &TextPayload) -> InjectionOutcome {
        let batch = encode::encode_virtual_key(payload, self.layout.as_ref());
        match submit_batch(self.sink.as_ref(), &batch) {
            Submission::Accepted => InjectionOutcome::Success,
            Submission::Partial {
                submitted,
                requested,
                os_error,
            } => InjectionOutcome::PartialFailure {
                submitted,
                requested,
                os_error,
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clipinject_core::{vk, KeyCombo, Modifiers, RawSubmission, SyntheticKeyEvent};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ── Mocks ─────────────────────────────────────────────────────────────────

    struct FixedClipboard {
        text: Option<String>,
    }

    impl FixedClipboard {
        fn with_text(text: &str) -> Self {
            Self {
                text: Some(text.to_string()),
            }
        }

        fn empty() -> Self {
            Self { text: None }
        }
    }

    impl ClipboardSource for FixedClipboard {
        fn has_text(&self) -> bool {
            self.text.is_some()
        }

        fn read_text(&self) -> Option<String> {
            self.text.clone()
        }
    }

    /// Records submitted batches and replays scripted responses.
    ///
    /// Responses past the end of the script are full acceptance.
    #[derive(Default)]
    struct ScriptedSink {
        batches: Mutex<Vec<Vec<SyntheticKeyEvent>>>,
        responses: Mutex<Vec<RawSubmission>>,
    }

    impl ScriptedSink {
        fn accepting() -> Self {
            Self::default()
        }

        fn with_responses(responses: Vec<RawSubmission>) -> Self {
            Self {
                batches: Mutex::new(Vec::new()),
                responses: Mutex::new(responses),
            }
        }

        fn batch_count(&self) -> usize {
            self.batches.lock().unwrap().len()
        }

        fn batch(&self, index: usize) -> Vec<SyntheticKeyEvent> {
            self.batches.lock().unwrap()[index].clone()
        }
    }

    impl InputSink for ScriptedSink {
        fn submit(&self, batch: &[SyntheticKeyEvent]) -> RawSubmission {
            let mut batches = self.batches.lock().unwrap();
            let index = batches.len();
            batches.push(batch.to_vec());
            let responses = self.responses.lock().unwrap();
            responses
                .get(index)
                .copied()
                .unwrap_or(RawSubmission {
                    accepted: batch.len(),
                    os_error: 0,
                })
        }
    }

    struct TableOracle {
        table: HashMap<char, KeyCombo>,
    }

    impl TableOracle {
        fn ascii_letters() -> Self {
            let mut table = HashMap::new();
            for (i, c) in ('a'..='z').enumerate() {
                let vk = 0x41 + i as u16;
                table.insert(
                    c,
                    KeyCombo {
                        vk,
                        modifiers: Modifiers::NONE,
                    },
                );
                table.insert(
                    c.to_ascii_uppercase(),
                    KeyCombo {
                        vk,
                        modifiers: Modifiers::SHIFT,
                    },
                );
            }
            Self { table }
        }
    }

    impl LayoutOracle for TableOracle {
        fn map_char(&self, c: char) -> Option<KeyCombo> {
            self.table.get(&c).copied()
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        outcomes: Mutex<Vec<InjectionOutcome>>,
    }

    impl OutcomeSink for RecordingReporter {
        fn report(&self, outcome: &InjectionOutcome) {
            self.outcomes.lock().unwrap().push(*outcome);
        }
    }

    fn make_use_case(
        clipboard: FixedClipboard,
        sink: ScriptedSink,
    ) -> (
        InjectClipboardUseCase,
        Arc<ScriptedSink>,
        Arc<RecordingReporter>,
    ) {
        let sink = Arc::new(sink);
        let reporter = Arc::new(RecordingReporter::default());
        let uc = InjectClipboardUseCase::new(
            Arc::new(clipboard),
            Arc::new(TableOracle::ascii_letters()),
            Arc::clone(&sink) as Arc<dyn InputSink>,
            Arc::clone(&reporter) as Arc<dyn OutcomeSink>,
            Duration::ZERO,
        );
        (uc, sink, reporter)
    }

    // ── Skip paths ────────────────────────────────────────────────────────────

    #[test]
    fn test_run_with_empty_clipboard_skips_without_touching_sink() {
        // Arrange
        let (uc, sink, reporter) = make_use_case(FixedClipboard::empty(), ScriptedSink::accepting());

        // Act
        let outcome = uc.run();

        // Assert – no events, no report
        assert!(matches!(outcome, InjectionOutcome::Skipped));
        assert_eq!(sink.batch_count(), 0);
        assert!(reporter.outcomes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_run_with_whitespace_only_text_skips() {
        // Arrange
        let (uc, sink, reporter) =
            make_use_case(FixedClipboard::with_text("  \r\n\t "), ScriptedSink::accepting());

        // Act
        let outcome = uc.run();

        // Assert
        assert!(matches!(outcome, InjectionOutcome::Skipped));
        assert_eq!(sink.batch_count(), 0);
        assert!(reporter.outcomes.lock().unwrap().is_empty());
    }

    // ── Primary strategy ──────────────────────────────────────────────────────

    #[test]
    fn test_run_releases_modifiers_then_injects_unicode() {
        // Arrange – "hi\r\nthere" normalizes to 9 chars, all BMP
        let (uc, sink, reporter) =
            make_use_case(FixedClipboard::with_text("hi\r\nthere"), ScriptedSink::accepting());

        // Act
        let outcome = uc.run();

        // Assert – release batch first, then one unicode batch of 18 events
        assert!(matches!(outcome, InjectionOutcome::Success));
        assert_eq!(sink.batch_count(), 2);
        let releases = sink.batch(0);
        assert_eq!(releases.len(), 4);
        assert!(releases.iter().all(|e| !e.is_press()));
        assert!(matches!(
            releases[0],
            SyntheticKeyEvent::VirtualKey { vk: v, .. } if v == vk::CONTROL
        ));
        assert_eq!(sink.batch(1).len(), 18);
        assert_eq!(
            *reporter.outcomes.lock().unwrap(),
            vec![InjectionOutcome::Success]
        );
    }

    // ── Fallback strategy ─────────────────────────────────────────────────────

    #[test]
    fn test_partial_unicode_acceptance_triggers_virtual_key_fallback() {
        // Arrange – primary batch for "A" has 2 events, OS accepts 1
        let sink = ScriptedSink::with_responses(vec![
            RawSubmission { accepted: 4, os_error: 0 },
            RawSubmission { accepted: 1, os_error: 5 },
        ]);
        let (uc, sink, reporter) = make_use_case(FixedClipboard::with_text("A"), sink);

        // Act
        let outcome = uc.run();

        // Assert – fallback batch is shift-wrapped press/release of 0x41
        assert!(matches!(outcome, InjectionOutcome::Success));
        assert_eq!(sink.batch_count(), 3);
        let fallback = sink.batch(2);
        assert_eq!(fallback.len(), 4);
        assert!(matches!(
            fallback[0],
            SyntheticKeyEvent::VirtualKey { vk: v, .. } if v == vk::SHIFT
        ));
        assert!(matches!(
            fallback[1],
            SyntheticKeyEvent::VirtualKey { vk: 0x41, .. }
        ));
        assert_eq!(
            *reporter.outcomes.lock().unwrap(),
            vec![InjectionOutcome::Success]
        );
    }

    #[test]
    fn test_fallback_partial_acceptance_reports_failure_and_stops() {
        // Arrange – both strategies come up short
        let sink = ScriptedSink::with_responses(vec![
            RawSubmission { accepted: 4, os_error: 0 },
            RawSubmission { accepted: 0, os_error: 5 },
            RawSubmission { accepted: 1, os_error: 87 },
        ]);
        let (uc, sink, reporter) = make_use_case(FixedClipboard::with_text("ab"), sink);

        // Act
        let outcome = uc.run();

        // Assert – exactly one fallback attempt, failure carries the counts
        assert_eq!(sink.batch_count(), 3);
        assert_eq!(
            outcome,
            InjectionOutcome::PartialFailure {
                submitted: 1,
                requested: 4,
                os_error: 87,
            }
        );
        assert_eq!(*reporter.outcomes.lock().unwrap(), vec![outcome]);
    }

    #[test]
    fn test_rejected_release_batch_does_not_abort_injection() {
        // Arrange – the blind release batch fails outright
        let sink = ScriptedSink::with_responses(vec![RawSubmission {
            accepted: 0,
            os_error: 5,
        }]);
        let (uc, sink, _reporter) = make_use_case(FixedClipboard::with_text("ok"), sink);

        // Act
        let outcome = uc.run();

        // Assert – injection proceeds regardless
        assert!(matches!(outcome, InjectionOutcome::Success));
        assert_eq!(sink.batch_count(), 2);
    }
}
