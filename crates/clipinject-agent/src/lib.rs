//! # ClipInject agent
//!
//! The agent crate wires the pure encoding pipeline from `clipinject-core`
//! to a real operating system. It owns everything that touches the OS:
//! the global hotkey registration, the clipboard, the keyboard layout
//! lookup, and the `SendInput` call itself.
//!
//! ## Architecture (for beginners)
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - `application/` holds the use case and the port traits it depends on
//!   (`ClipboardSource`, `OutcomeSink`). The use case never names a
//!   platform API, so it is testable with plain mocks.
//! - `infrastructure/` holds one adapter per port. Each adapter module
//!   has a platform implementation selected with `#[cfg(target_os)]`
//!   and a mock used in tests and on unsupported platforms.
//!
//! The runtime shape is deliberately simple: a dedicated Win32 thread
//! runs a message loop for `WM_HOTKEY` and forwards trigger events over
//! an `mpsc` channel to a single dispatch thread, which runs the use
//! case to completion before reading the next event. One consumer means
//! injections can never interleave.

pub mod application;
pub mod infrastructure;
