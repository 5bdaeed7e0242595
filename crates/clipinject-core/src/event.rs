//! The synthetic key event data model.
//!
//! A [`SyntheticKeyEvent`] describes one atomic key transition. The OS-facing
//! input sink translates it into whatever record layout the platform input
//! facility expects (`KEYBDINPUT` on Windows); everything above the sink
//! works purely with this type.
//!
//! # Why two event shapes? (for beginners)
//!
//! - [`SyntheticKeyEvent::Unicode`] carries a raw UTF-16 code unit. On
//!   Windows these become `KEYEVENTF_UNICODE` injections that type the
//!   character directly, with no physical key involved.
//! - [`SyntheticKeyEvent::VirtualKey`] names a *logical key*, e.g. the "A"
//!   key or Left Shift. What character it produces depends on the active
//!   keyboard layout and the modifier keys held at the time.

/// Whether a key transition is a press (down) or a release (up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    Press,
    Release,
}

/// Required modifier state for a layout-mapped key, packed the way
/// `VkKeyScanEx` reports it: bit 0 = Shift, bit 1 = Control, bit 2 = Alt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(0b001);
    pub const CONTROL: Modifiers = Modifiers(0b010);
    pub const ALT: Modifiers = Modifiers(0b100);

    /// Builds a modifier set from a raw shift-state byte, keeping only the
    /// Shift/Control/Alt bits. Higher `VkKeyScanEx` bits (Hankaku and the
    /// reserved pair) have no injectable equivalent and are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Modifiers(bits & 0b111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// One synthetic key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntheticKeyEvent {
    /// Direct Unicode injection of one UTF-16 code unit.
    Unicode {
        code_unit: u16,
        direction: KeyDirection,
    },
    /// A logical key identified by its Windows-style virtual-key code.
    VirtualKey { vk: u16, direction: KeyDirection },
}

impl SyntheticKeyEvent {
    /// Press/release pair for a Unicode code unit, in injection order.
    pub fn unicode_pair(code_unit: u16) -> [SyntheticKeyEvent; 2] {
        [
            SyntheticKeyEvent::Unicode {
                code_unit,
                direction: KeyDirection::Press,
            },
            SyntheticKeyEvent::Unicode {
                code_unit,
                direction: KeyDirection::Release,
            },
        ]
    }

    /// Press/release pair for a virtual key, in injection order.
    pub fn virtual_key_pair(vk: u16) -> [SyntheticKeyEvent; 2] {
        [
            SyntheticKeyEvent::VirtualKey {
                vk,
                direction: KeyDirection::Press,
            },
            SyntheticKeyEvent::VirtualKey {
                vk,
                direction: KeyDirection::Release,
            },
        ]
    }

    pub fn direction(&self) -> KeyDirection {
        match *self {
            SyntheticKeyEvent::Unicode { direction, .. } => direction,
            SyntheticKeyEvent::VirtualKey { direction, .. } => direction,
        }
    }

    pub fn is_press(&self) -> bool {
        self.direction() == KeyDirection::Press
    }
}

/// An ordered batch of events forming one atomic submission unit.
///
/// Order is exactly generation order; the submission gate never reorders,
/// splits, or partially retries a batch.
pub type EventBatch = Vec<SyntheticKeyEvent>;

/// Windows-style virtual-key codes used by the encoders and the layout
/// oracle. Reference: winuser.h `VK_*` constants.
pub mod vk {
    /// Enter / Return key.
    pub const RETURN: u16 = 0x0D;
    /// Shift key.
    pub const SHIFT: u16 = 0x10;
    /// Control key.
    pub const CONTROL: u16 = 0x11;
    /// Alt key (named VK_MENU in winuser.h).
    pub const MENU: u16 = 0x12;
    /// Left OS/Meta (Windows) key.
    pub const LWIN: u16 = 0x5B;
}

// ── Tests ─────────────────────────────────────────────────────────────────────
