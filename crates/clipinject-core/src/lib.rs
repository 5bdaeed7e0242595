//! # clipinject-core
//!
//! OS-agnostic heart of ClipInject: the text-to-keystroke injection pipeline.
//!
//! This crate has zero dependencies on OS APIs. Everything that touches the
//! operating system lives behind two small traits and is implemented in the
//! agent crate's infrastructure layer:
//!
//! - [`LayoutOracle`] – asks the active keyboard layout how to type a
//!   character (virtual-key code plus required modifier state).
//! - [`InputSink`] – hands a batch of synthetic key events to the OS input
//!   facility and reports how many were accepted.
//!
//! # How the pipeline works (for beginners)
//!
//! ClipInject types the clipboard into whatever window has keyboard focus.
//! To do that it must express text as *key events*, the same records the OS
//! produces when a physical key is pressed. Two encodings exist because no
//! single one is honored by every application:
//!
//! 1. **Unicode strategy** – each character becomes a press/release pair
//!    carrying the raw UTF-16 code unit. Layout independent and works for
//!    any code point, but some targets (elevated consoles, legacy windows)
//!    silently ignore these events.
//! 2. **Virtual-key strategy** – each character is mapped through the
//!    active keyboard layout to a physical key plus modifier state, which
//!    every target honors but which cannot represent characters outside
//!    the layout. Those escape back to the Unicode pair, one character at
//!    a time.
//!
//! The agent tries the Unicode strategy first and falls back to the
//! virtual-key strategy when the OS reports that it accepted fewer events
//! than requested.
//!
//! # Modules
//!
//! - **`payload`** – clipboard text normalization ([`TextPayload`]).
//! - **`event`** – the [`SyntheticKeyEvent`] data model and virtual-key
//!   constants shared with the layout oracle.
//! - **`layout`** – the [`LayoutOracle`] port and its [`KeyCombo`] answer.
//! - **`encode`** – both encoding strategies and the modifier release batch.
//! - **`submit`** – the [`InputSink`] port and the submission gate.
//! - **`outcome`** – the per-invocation [`InjectionOutcome`] result.

pub mod encode;
pub mod event;
pub mod layout;
pub mod outcome;
pub mod payload;
pub mod submit;

// Re-export the most-used types at the crate root so callers can write
// `clipinject_core::TextPayload` instead of the full module path.
pub use event::{vk, EventBatch, KeyDirection, Modifiers, SyntheticKeyEvent};
pub use layout::{KeyCombo, LayoutOracle};
pub use outcome::InjectionOutcome;
pub use payload::TextPayload;
pub use submit::{submit_batch, InputSink, RawSubmission, Submission};
