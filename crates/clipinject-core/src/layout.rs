//! The keyboard layout oracle port.
//!
//! The virtual-key encoding strategy needs to know how the *currently
//! active* keyboard layout types a given character. That answer lives in
//! the OS, so the encoder asks through this trait and the agent's
//! infrastructure layer supplies the platform implementation
//! (`VkKeyScanExW` against `GetKeyboardLayout(0)` on Windows) or a
//! configurable table for tests.

use crate::event::Modifiers;

/// How the active layout types one character: which logical key to press
/// and which modifiers must be held while pressing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    /// Virtual-key code of the logical key.
    pub vk: u16,
    /// Modifiers that must be held down around the key press.
    pub modifiers: Modifiers,
}

/// Port onto the OS keyboard-layout mapping service.
pub trait LayoutOracle: Send + Sync {
    /// Maps a character to a key combination under the active layout.
    ///
    /// Returns `None` when the layout cannot produce the character at all
    /// (the OS sentinel for "unmappable"). The encoder then escapes that
    /// single character back to Unicode injection.
    fn map_char(&self, c: char) -> Option<KeyCombo>;
}
