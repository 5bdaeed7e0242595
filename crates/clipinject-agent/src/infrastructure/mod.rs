//! Infrastructure layer for the agent.
//!
//! Contains OS-facing adapters: clipboard access, the `SendInput` sink,
//! keyboard layout lookup, the global hotkey trigger, outcome reporting,
//! and configuration storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `clipinject_core`, but MUST NOT be imported by the `application`
//! layer.
//!
//! # Sub-modules
//!
//! - **`clipboard`** – reads text from the system clipboard via `arboard`.
//!   A `MockClipboard` is provided for tests.
//!
//! - **`input_sink`** – OS-specific implementations of `InputSink`. The
//!   correct implementation is selected at compile time using
//!   `#[cfg(target_os)]`. A `MockInputSink` is also provided for tests.
//!
//! - **`layout`** – resolves characters to virtual-key chords against the
//!   active keyboard layout (`VkKeyScanExW` on Windows).
//!
//! - **`trigger`** – registers the global hotkey and forwards trigger
//!   events from a dedicated message-loop thread over an `mpsc` channel.
//!
//! - **`notify`** – reports injection outcomes through the log.
//!
//! - **`config`** – loads and persists the TOML configuration file.

pub mod clipboard;
pub mod config;
pub mod input_sink;
pub mod layout;
pub mod notify;
pub mod trigger;
