//! Windows layout lookup via VkKeyScanExW.
//!
//! `VkKeyScanExW` resolves a UTF-16 code unit against a keyboard layout
//! handle. The low byte of the result is the virtual key, the high byte
//! packs the modifier chord (bit 0 Shift, bit 1 Control, bit 2 Alt).
//! A result of -1 means the layout cannot produce the character.

#![cfg(target_os = "windows")]

use clipinject_core::{KeyCombo, LayoutOracle, Modifiers};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyboardLayout, VkKeyScanExW};

/// Resolves characters against the active keyboard layout.
pub struct ActiveLayoutOracle;

impl ActiveLayoutOracle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ActiveLayoutOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutOracle for ActiveLayoutOracle {
    fn map_char(&self, c: char) -> Option<KeyCombo> {
        // Characters outside the BMP cannot be a single key on any
        // layout. They stay on the Unicode path.
        let code_unit = u16::try_from(c as u32).ok()?;

        // SAFETY: both calls take plain values and have no pointer
        // arguments. Passing thread id 0 queries the current thread's
        // layout.
        let scan = unsafe {
            let layout = GetKeyboardLayout(0);
            VkKeyScanExW(code_unit, layout)
        };
        if scan == -1 {
            return None;
        }

        let vk = (scan as u16) & 0x00FF;
        let modifier_bits = ((scan as u16) >> 8) as u8;
        Some(KeyCombo {
            vk,
            modifiers: Modifiers::from_bits(modifier_bits),
        })
    }
}
