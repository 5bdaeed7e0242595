//! Mock layout oracle for unit and integration tests.
//!
//! The real oracle consults the active keyboard layout, which depends
//! on the machine running the tests. `MockLayoutOracle` answers from a
//! fixed table instead, so tests are deterministic on any host.

use std::collections::HashMap;

use clipinject_core::{KeyCombo, LayoutOracle, Modifiers};

/// A layout oracle backed by an explicit character table.
#[derive(Default)]
pub struct MockLayoutOracle {
    table: HashMap<char, KeyCombo>,
}

impl MockLayoutOracle {
    /// Creates an oracle that maps nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle preloaded with the US-QWERTY letters and
    /// digits: lowercase letters map unmodified, uppercase letters map
    /// with Shift, digits map unmodified.
    pub fn us_qwerty() -> Self {
        let mut oracle = Self::new();
        for (i, c) in ('a'..='z').enumerate() {
            let vk = 0x41 + i as u16;
            oracle.insert(c, vk, Modifiers::NONE);
            oracle.insert(c.to_ascii_uppercase(), vk, Modifiers::SHIFT);
        }
        for (i, c) in ('0'..='9').enumerate() {
            oracle.insert(c, 0x30 + i as u16, Modifiers::NONE);
        }
        oracle.insert(' ', 0x20, Modifiers::NONE);
        oracle
    }

    /// Adds or replaces one character mapping.
    pub fn insert(&mut self, c: char, vk: u16, modifiers: Modifiers) {
        self.table.insert(c, KeyCombo { vk, modifiers });
    }
}

impl LayoutOracle for MockLayoutOracle {
    fn map_char(&self, c: char) -> Option<KeyCombo> {
        self.table.get(&c).copied()
    }
}
