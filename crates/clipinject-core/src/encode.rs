//! The two encoding strategies and the modifier release batch.
//!
//! Both strategies turn a whole [`TextPayload`] into one [`EventBatch`].
//! Encoding never fails: the Unicode strategy defers acceptance to the OS,
//! and the virtual-key strategy escapes unmappable characters back to
//! Unicode pairs one character at a time.

use crate::event::{vk, EventBatch, Modifiers, SyntheticKeyEvent};
use crate::layout::LayoutOracle;
use crate::payload::TextPayload;

/// Encodes the payload with the direct Unicode strategy.
///
/// Each UTF-16 code unit becomes a press/release pair, in original order.
/// No layout lookup, no modifier events. For text within the Basic
/// Multilingual Plane this is exactly two events per character; a
/// supplementary-plane character contributes one pair per surrogate unit.
pub fn encode_unicode(payload: &TextPayload) -> EventBatch {
    let mut batch = EventBatch::with_capacity(payload.as_str().len() * 2);
    for unit in payload.as_str().encode_utf16() {
        batch.extend(SyntheticKeyEvent::unicode_pair(unit));
    }
    batch
}

/// Encodes the payload with the layout-mapped virtual-key strategy.
///
/// Per character, in order:
/// - `\n` emits the dedicated Enter key pair (some targets ignore a
///   Unicode line feed).
/// - A character the oracle cannot map escapes to the Unicode pair for
///   that character only.
/// - A mapped character emits its required modifier presses in Shift,
///   Control, Alt order, then the key press/release pair, then the
///   modifier releases in exact reverse order. The strict nesting keeps
///   modifier state balanced around every single character, so an
///   interrupted batch cannot leave a payload modifier latched beyond the
///   character it belonged to.
pub fn encode_virtual_key(payload: &TextPayload, oracle: &dyn LayoutOracle) -> EventBatch {
    let mut batch = EventBatch::new();

    for c in payload.chars() {
        if c == '\n' {
            batch.extend(SyntheticKeyEvent::virtual_key_pair(vk::RETURN));
            continue;
        }

        let Some(combo) = oracle.map_char(c) else {
            push_unicode_char(&mut batch, c);
            continue;
        };

        let held = required_modifier_vks(combo.modifiers);
        for &modifier in &held {
            batch.push(SyntheticKeyEvent::VirtualKey {
                vk: modifier,
                direction: crate::event::KeyDirection::Press,
            });
        }

        batch.extend(SyntheticKeyEvent::virtual_key_pair(combo.vk));

        for &modifier in held.iter().rev() {
            batch.push(SyntheticKeyEvent::VirtualKey {
                vk: modifier,
                direction: crate::event::KeyDirection::Release,
            });
        }
    }

    batch
}

/// Release-only events for the four standard modifiers, in Control, Alt,
/// Shift, OS-key order.
///
/// The trigger is itself a modifier-chorded hotkey; at the instant it
/// fires the OS still considers those keys physically down, and the first
/// injected keystroke would be corrupted by the phantom state. This batch
/// blindly asserts "up" for all four without reading current key state.
pub fn modifier_release_batch() -> EventBatch {
    [vk::CONTROL, vk::MENU, vk::SHIFT, vk::LWIN]
        .into_iter()
        .map(|code| SyntheticKeyEvent::VirtualKey {
            vk: code,
            direction: crate::event::KeyDirection::Release,
        })
        .collect()
}

/// Virtual-key codes of the modifiers a combo requires, in press order.
/// The order matches the mask bit order: Shift, then Control, then Alt.
fn required_modifier_vks(modifiers: Modifiers) -> Vec<u16> {
    let mut vks = Vec::with_capacity(3);
    if modifiers.contains(Modifiers::SHIFT) {
        vks.push(vk::SHIFT);
    }
    if modifiers.contains(Modifiers::CONTROL) {
        vks.push(vk::CONTROL);
    }
    if modifiers.contains(Modifiers::ALT) {
        vks.push(vk::MENU);
    }
    vks
}

/// Unicode press/release pairs for one character (two pairs if the
/// character is outside the Basic Multilingual Plane).
fn push_unicode_char(batch: &mut EventBatch, c: char) {
    let mut units = [0u16; 2];
    for &unit in c.encode_utf16(&mut units).iter() {
        batch.extend(SyntheticKeyEvent::unicode_pair(unit));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyDirection;
    use crate::layout::KeyCombo;
    use std::collections::HashMap;

    /// Table-backed oracle for encoder tests.
    struct TableOracle {
        map: HashMap<char, KeyCombo>,
    }

    impl TableOracle {
        fn new() -> Self {
            Self {
                map: HashMap::new(),
            }
        }

        fn with(mut self, c: char, vk_code: u16, modifiers: Modifiers) -> Self {
            self.map.insert(
                c,
                KeyCombo {
                    vk: vk_code,
                    modifiers,
                },
            );
            self
        }
    }

    impl LayoutOracle for TableOracle {
        fn map_char(&self, c: char) -> Option<KeyCombo> {
            self.map.get(&c).copied()
        }
    }

    fn press(vk_code: u16) -> SyntheticKeyEvent {
        SyntheticKeyEvent::VirtualKey {
            vk: vk_code,
            direction: KeyDirection::Press,
        }
    }

    fn release(vk_code: u16) -> SyntheticKeyEvent {
        SyntheticKeyEvent::VirtualKey {
            vk: vk_code,
            direction: KeyDirection::Release,
        }
    }

    // ── Unicode strategy ──────────────────────────────────────────────────────

    #[test]
    fn test_unicode_encoding_is_two_events_per_char_in_order() {
        let payload = TextPayload::new("abc");
        let batch = encode_unicode(&payload);

        assert_eq!(batch.len(), 6);
        for (i, c) in "abc".chars().enumerate() {
            let [down, up] = SyntheticKeyEvent::unicode_pair(c as u16);
            assert_eq!(batch[2 * i], down);
            assert_eq!(batch[2 * i + 1], up);
        }
    }

    #[test]
    fn test_unicode_encoding_of_empty_payload_is_empty() {
        assert!(encode_unicode(&TextPayload::new("")).is_empty());
    }

    #[test]
    fn test_unicode_encoding_of_normalized_crlf_text() {
        // Scenario B: "hi\r\nthere" normalizes to 9 chars -> 18 events.
        let payload = TextPayload::new("hi\r\nthere");
        assert_eq!(encode_unicode(&payload).len(), 18);
    }

    #[test]
    fn test_unicode_encoding_splits_supplementary_plane_into_surrogates() {
        // U+1F600 needs two UTF-16 code units -> two press/release pairs.
        let payload = TextPayload::new("\u{1F600}");
        let batch = encode_unicode(&payload);
        assert_eq!(batch.len(), 4);
        assert_eq!(
            batch[0],
            SyntheticKeyEvent::Unicode {
                code_unit: 0xD83D,
                direction: KeyDirection::Press
            }
        );
        assert_eq!(
            batch[2],
            SyntheticKeyEvent::Unicode {
                code_unit: 0xDE00,
                direction: KeyDirection::Press
            }
        );
    }

    // ── Virtual-key strategy ──────────────────────────────────────────────────

    #[test]
    fn test_virtual_key_encoding_of_unmodified_char() {
        let oracle = TableOracle::new().with('a', 0x41, Modifiers::NONE);
        let batch = encode_virtual_key(&TextPayload::new("a"), &oracle);

        assert_eq!(batch, vec![press(0x41), release(0x41)]);
    }

    #[test]
    fn test_virtual_key_encoding_nests_shift_around_key() {
        // Scenario C: 'A' maps to VK 0x41 + Shift.
        let oracle = TableOracle::new().with('A', 0x41, Modifiers::SHIFT);
        let batch = encode_virtual_key(&TextPayload::new("A"), &oracle);

        assert_eq!(
            batch,
            vec![press(vk::SHIFT), press(0x41), release(0x41), release(vk::SHIFT)]
        );
    }

    #[test]
    fn test_virtual_key_encoding_orders_modifiers_shift_control_alt() {
        let all = Modifiers::SHIFT | Modifiers::CONTROL | Modifiers::ALT;
        let oracle = TableOracle::new().with('x', 0x58, all);
        let batch = encode_virtual_key(&TextPayload::new("x"), &oracle);

        assert_eq!(
            batch,
            vec![
                press(vk::SHIFT),
                press(vk::CONTROL),
                press(vk::MENU),
                press(0x58),
                release(0x58),
                release(vk::MENU),
                release(vk::CONTROL),
                release(vk::SHIFT),
            ]
        );
    }

    #[test]
    fn test_virtual_key_encoding_uses_enter_key_for_newline() {
        // Newline must not consult the oracle at all.
        let oracle = TableOracle::new();
        let batch = encode_virtual_key(&TextPayload::new("\n"), &oracle);
        assert_eq!(batch, vec![press(vk::RETURN), release(vk::RETURN)]);
    }

    #[test]
    fn test_virtual_key_encoding_escapes_unmappable_char_to_unicode() {
        let oracle = TableOracle::new().with('a', 0x41, Modifiers::NONE);
        let batch = encode_virtual_key(&TextPayload::new("a€a"), &oracle);

        // a -> 2 vk events, € -> 2 unicode events, a -> 2 vk events.
        assert_eq!(batch.len(), 6);
        assert_eq!(batch[0], press(0x41));
        assert_eq!(
            batch[2],
            SyntheticKeyEvent::Unicode {
                code_unit: '€' as u16,
                direction: KeyDirection::Press
            }
        );
        assert_eq!(
            batch[3],
            SyntheticKeyEvent::Unicode {
                code_unit: '€' as u16,
                direction: KeyDirection::Release
            }
        );
        assert_eq!(batch[4], press(0x41));
    }

    #[test]
    fn test_virtual_key_nesting_holds_for_every_char_independently() {
        let oracle = TableOracle::new()
            .with('a', 0x41, Modifiers::NONE)
            .with('A', 0x41, Modifiers::SHIFT)
            .with('@', 0x32, Modifiers::SHIFT | Modifiers::CONTROL);
        let batch = encode_virtual_key(&TextPayload::new("aA@"), &oracle);

        // Walk the batch tracking held payload modifiers; they must be
        // balanced (empty) between characters and release in reverse order.
        let modifier_vks = [vk::SHIFT, vk::CONTROL, vk::MENU];
        let mut held: Vec<u16> = Vec::new();
        for ev in &batch {
            if let SyntheticKeyEvent::VirtualKey { vk: code, direction } = ev {
                if modifier_vks.contains(code) {
                    match direction {
                        KeyDirection::Press => held.push(*code),
                        KeyDirection::Release => {
                            assert_eq!(held.pop(), Some(*code), "release order must reverse press order");
                        }
                    }
                }
            }
        }
        assert!(held.is_empty(), "all modifiers must be released by end of batch");
    }

    // ── Modifier release batch ────────────────────────────────────────────────

    #[test]
    fn test_modifier_release_batch_releases_all_four_modifiers() {
        let batch = modifier_release_batch();
        assert_eq!(
            batch,
            vec![
                release(vk::CONTROL),
                release(vk::MENU),
                release(vk::SHIFT),
                release(vk::LWIN),
            ]
        );
    }
}
