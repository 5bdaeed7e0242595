//! Platform-specific input sink implementations.
//!
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`. The sink is the single point where
//! synthetic key events cross into the OS.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
