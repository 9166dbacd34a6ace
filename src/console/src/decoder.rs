//! Scancode decoding with shift and caps-lock tracking.
//!
//! The decoder consumes raw set-1 scancodes one at a time. Shift is tracked
//! from its make and break codes, caps lock toggles on its make code only,
//! and every other make code is translated through a [`Keymap`] in the case
//! the modifiers select. Break codes produce nothing.

use bones_common::Modifiers;
use log::trace;

use crate::keymap::{Keymap, US_QWERTY};

const LEFT_SHIFT_MAKE: u8 = 0x2A;
const RIGHT_SHIFT_MAKE: u8 = 0x36;
const LEFT_SHIFT_BREAK: u8 = 0xAA;
const RIGHT_SHIFT_BREAK: u8 = 0xB6;
const CAPS_LOCK_MAKE: u8 = 0x3A;

/// Codes with this bit set report a key release.
const BREAK_BIT: u8 = 0x80;

/// Keyboard decoder state.
pub struct ScancodeDecoder {
    modifiers: Modifiers,
    keymap: &'static Keymap,
}

impl ScancodeDecoder {
    /// Creates a decoder with the US layout and no modifiers active.
    pub fn new() -> Self {
        Self::with_keymap(&US_QWERTY)
    }

    /// Creates a decoder over a different layout.
    pub const fn with_keymap(keymap: &'static Keymap) -> Self {
        Self {
            modifiers: Modifiers::empty(),
            keymap,
        }
    }

    /// Processes one scancode, returning the character it types, if any.
    pub fn feed(&mut self, scancode: u8) -> Option<u8> {
        match scancode {
            LEFT_SHIFT_MAKE | RIGHT_SHIFT_MAKE => {
                self.modifiers.insert(Modifiers::SHIFT);
                None
            }
            LEFT_SHIFT_BREAK | RIGHT_SHIFT_BREAK => {
                self.modifiers.remove(Modifiers::SHIFT);
                None
            }
            CAPS_LOCK_MAKE => {
                self.modifiers.toggle(Modifiers::CAPS_LOCK);
                trace!("caps lock {}", self.caps_latched());
                None
            }
            code if code & BREAK_BIT != 0 => None,
            code => {
                let pair = self.keymap.lookup(code)?;
                Some(pair.select(self.modifiers.uppercase()))
            }
        }
    }

    /// Whether either shift key is currently held.
    pub fn shift_active(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Whether caps lock is latched on.
    pub fn caps_latched(&self) -> bool {
        self.modifiers.contains(Modifiers::CAPS_LOCK)
    }

    /// The full modifier set.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Default for ScancodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}
