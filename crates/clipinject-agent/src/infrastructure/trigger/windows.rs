//! Windows hotkey backend built on RegisterHotKey and a message loop.
//!
//! `WM_HOTKEY` is delivered to the message queue of the thread that
//! called `RegisterHotKey`, so both the registration and the
//! `GetMessageW` loop run on one dedicated thread. Registering with a
//! null window handle posts the message straight to that thread queue;
//! no hidden window is needed.

#![cfg(target_os = "windows")]

use std::sync::mpsc::{self, Receiver};
use std::thread;

use tracing::{debug, warn};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, TranslateMessage, MSG, WM_HOTKEY,
};

use super::{key_to_vk, TriggerError, TriggerEvent, BINDING_PRIORITY, HOTKEY_ID};

/// Owns the hotkey message-loop thread.
pub struct HotkeyTriggerService;

impl HotkeyTriggerService {
    /// Registers the first available chord from the priority list for
    /// `key` and starts forwarding hotkey presses.
    ///
    /// Returns the event receiver and the description of the chord that
    /// was actually registered.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::InvalidKey`] if `key` is not a single
    /// letter or digit, [`TriggerError::AllBindingsTaken`] if every
    /// chord in the priority list is already claimed by another
    /// application, and [`TriggerError::ThreadStart`] if the message-loop
    /// thread could not be spawned or died before reporting.
    pub fn start(key: &str) -> Result<(Receiver<TriggerEvent>, &'static str), TriggerError> {
        let vk = key_to_vk(key).ok_or_else(|| TriggerError::InvalidKey(key.to_string()))?;
        let key_name = key.to_uppercase();

        let (event_tx, event_rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("clipinject-hotkey-loop".to_string())
            .spawn(move || {
                let description = match register_first_available(vk) {
                    Some(description) => description,
                    None => {
                        let _ = ready_tx.send(Err(TriggerError::AllBindingsTaken {
                            key: key_name,
                        }));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(description));
                run_message_loop(&event_tx);

                // SAFETY: unregisters the id this thread registered.
                if let Err(err) = unsafe { UnregisterHotKey(None, HOTKEY_ID) } {
                    warn!(error = %err, "failed to unregister hotkey");
                }
            })
            .map_err(|e| TriggerError::ThreadStart(e.to_string()))?;

        let description = ready_rx.recv().map_err(|_| {
            TriggerError::ThreadStart("registration thread exited before reporting".to_string())
        })??;
        Ok((event_rx, description))
    }
}

/// Walks the chord priority list and keeps the first registration the
/// OS grants.
fn register_first_available(vk: u32) -> Option<&'static str> {
    for binding in BINDING_PRIORITY {
        // SAFETY: a null window handle ties the hotkey to this thread's
        // message queue.
        let granted = unsafe {
            RegisterHotKey(
                None,
                HOTKEY_ID,
                HOT_KEY_MODIFIERS(binding.modifiers),
                vk,
            )
        };
        match granted {
            Ok(()) => return Some(binding.description),
            Err(err) => {
                debug!(chord = binding.description, error = %err, "hotkey chord unavailable");
            }
        }
    }
    None
}

/// Pumps the thread message queue, forwarding each hotkey press.
///
/// The loop ends when the event receiver is dropped.
fn run_message_loop(event_tx: &mpsc::Sender<TriggerEvent>) {
    let mut msg = MSG::default();
    // SAFETY: msg is a valid MSG structure owned by this thread, and
    // the dispatch calls only touch messages GetMessageW filled in.
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            if msg.message == WM_HOTKEY && msg.wParam.0 == HOTKEY_ID as usize {
                if event_tx.send(TriggerEvent::Hotkey).is_err() {
                    break;
                }
                continue;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
