//! Windows input sink backed by the SendInput API.
//!
//! Every batch goes to the OS in a single `SendInput` call so the
//! events arrive as one uninterrupted stream. The return value is the
//! number of events the OS actually placed in the input queue; a
//! shortfall is surfaced verbatim for the submission gate to judge.

#![cfg(target_os = "windows")]

use clipinject_core::{InputSink, KeyDirection, RawSubmission, SyntheticKeyEvent};
use windows::Win32::Foundation::GetLastError;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP,
    KEYEVENTF_UNICODE, VIRTUAL_KEY,
};

/// Windows implementation of [`InputSink`] using SendInput.
pub struct SendInputSink;

impl SendInputSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SendInputSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSink for SendInputSink {
    fn submit(&self, batch: &[SyntheticKeyEvent]) -> RawSubmission {
        let inputs: Vec<INPUT> = batch.iter().map(to_input).collect();

        // SAFETY: inputs is a valid slice of INPUT structures and the
        // size argument matches the structure layout.
        let accepted = unsafe {
            windows::Win32::UI::Input::KeyboardAndMouse::SendInput(
                &inputs,
                std::mem::size_of::<INPUT>() as i32,
            )
        } as usize;

        // GetLastError must be read before any other API call can
        // overwrite it. Its value is only meaningful on a shortfall.
        // SAFETY: GetLastError is always safe to call.
        let os_error = unsafe { GetLastError() }.0;

        RawSubmission { accepted, os_error }
    }
}

fn to_input(event: &SyntheticKeyEvent) -> INPUT {
    let (vk, scan, mut flags) = match *event {
        SyntheticKeyEvent::Unicode { code_unit, .. } => (0u16, code_unit, KEYEVENTF_UNICODE),
        SyntheticKeyEvent::VirtualKey { vk, .. } => (vk, 0u16, KEYBD_EVENT_FLAGS(0)),
    };
    if event.direction() == KeyDirection::Release {
        flags |= KEYEVENTF_KEYUP;
    }

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(vk),
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}
