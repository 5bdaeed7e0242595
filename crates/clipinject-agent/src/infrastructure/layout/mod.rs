//! Platform-specific keyboard layout lookup.
//!
//! The layout oracle answers one question: which virtual key, with
//! which modifiers, produces a given character on the active layout.
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
