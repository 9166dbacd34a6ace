//! Keyboard input loop.
//!
//! Input is polled: the loop spins on the PS/2 status register, decodes each
//! scancode and echoes the result to the console. No interrupts are used.

use bones_console::{echo_scancode, Ps2Controller, ScancodeDecoder};
use bones_hal::ScancodeSource;
use log::{debug, trace};
use pc_keyboard::{KeyEvent, ScancodeSet, ScancodeSet1};

use crate::arch::x86_64::{vga, X86Ports};

/// Logs each raw scancode as the key event it belongs to.
///
/// Runs alongside the console decoder and never affects what is typed.
pub struct KeyTrace {
    set: ScancodeSet1,
}

impl KeyTrace {
    /// Creates a tracer with no partial sequence pending.
    pub fn new() -> Self {
        Self {
            set: ScancodeSet1::new(),
        }
    }

    /// Records one scancode.
    pub fn observe(&mut self, scancode: u8) {
        match self.set.advance_state(scancode) {
            Ok(Some(KeyEvent { code, state })) => {
                trace!("scancode {:#04x}: {:?} {:?}", scancode, code, state)
            }
            Ok(None) => trace!("scancode {:#04x}: prefix", scancode),
            Err(error) => debug!("scancode {:#04x}: {:?}", scancode, error),
        }
    }
}

impl Default for KeyTrace {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the keyboard forever, echoing typed characters to the screen.
pub fn echo_loop() -> ! {
    let mut keyboard = Ps2Controller::new(X86Ports);
    let mut decoder = ScancodeDecoder::new();
    let mut key_trace = KeyTrace::new();

    loop {
        let scancode = keyboard.read_scancode();
        key_trace.observe(scancode);
        vga::with_writer(|writer| echo_scancode(&mut decoder, writer, scancode));
    }
}
