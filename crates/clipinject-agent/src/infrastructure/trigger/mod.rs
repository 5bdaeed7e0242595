//! Global hotkey trigger.
//!
//! The trigger turns a system-wide key chord into [`TriggerEvent`]s on
//! an `mpsc` channel. Platform backends live in submodules; this module
//! holds the platform-neutral pieces: the binding priority list, the
//! modifier constants, and the key-name parsing.
//!
//! Popular applications already claim the obvious paste chords, so the
//! agent tries a priority list of chords and keeps the first one the OS
//! grants. The chosen chord is reported back so the user knows which
//! one to press.

use thiserror::Error;

#[cfg(target_os = "windows")]
pub mod windows;

/// Modifier bits as understood by the OS hotkey registration.
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;

/// The single hotkey id this agent registers.
pub const HOTKEY_ID: i32 = 1;

/// One candidate chord: a modifier mask plus a human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub modifiers: u32,
    pub description: &'static str,
}

/// Chords to try, most preferred first.
///
/// Win+Shift is tried before the Ctrl combinations because terminals
/// and editors rarely claim Win-prefixed chords.
pub const BINDING_PRIORITY: [HotkeyBinding; 4] = [
    HotkeyBinding {
        modifiers: MOD_WIN | MOD_SHIFT,
        description: "Win+Shift",
    },
    HotkeyBinding {
        modifiers: MOD_CONTROL | MOD_ALT | MOD_SHIFT,
        description: "Ctrl+Alt+Shift",
    },
    HotkeyBinding {
        modifiers: MOD_CONTROL | MOD_SHIFT,
        description: "Ctrl+Shift",
    },
    HotkeyBinding {
        modifiers: MOD_CONTROL | MOD_ALT,
        description: "Ctrl+Alt",
    },
];

/// An event delivered when the registered hotkey fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Hotkey,
}

/// Errors from hotkey registration.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("no hotkey chord could be registered for key '{key}'")]
    AllBindingsTaken { key: String },
    #[error("'{0}' is not a registrable key name")]
    InvalidKey(String),
    #[error("hotkey service thread failed to start: {0}")]
    ThreadStart(String),
}

/// Parses a configured key name into its virtual-key code.
///
/// Only single ASCII letters and digits are accepted. Letters are case
/// insensitive.
pub fn key_to_vk(name: &str) -> Option<u32> {
    let mut chars = name.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c {
        'a'..='z' => Some(c.to_ascii_uppercase() as u32),
        'A'..='Z' => Some(c as u32),
        '0'..='9' => Some(c as u32),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
