//! Application layer: the injection use case and the ports it depends on.
//!
//! Modules here depend only on `clipinject-core` and on trait objects.
//! Concrete OS adapters live in the infrastructure layer and are wired
//! in by `main.rs`.

pub mod inject_clipboard;

pub use inject_clipboard::{ClipboardSource, InjectClipboardUseCase, OutcomeSink};
