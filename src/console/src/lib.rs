//! Text console and keyboard decoding for the Bones kernel.
//!
//! # Architecture
//!
//! - `writer`: cursor tracking, control characters and scrolling over a
//!   [`TextBuffer`](bones_hal::TextBuffer)
//! - `cursor`: CRT controller programming for the blinking hardware cursor
//! - `keymap`: scancode set 1 translation table
//! - `decoder`: shift / caps-lock state machine on top of the keymap
//! - `ps2`: polling scancode source over the PS/2 controller ports
//!
//! Nothing in this crate touches hardware directly. All device access goes
//! through the HAL traits, so every piece runs on the host under test.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod cursor;
pub mod decoder;
pub mod keymap;
pub mod ps2;
pub mod writer;

#[cfg(test)]
mod mock;

pub use cursor::HardwareCursor;
pub use decoder::ScancodeDecoder;
pub use keymap::{KeyPair, Keymap, US_QWERTY};
pub use ps2::Ps2Controller;
pub use writer::Writer;

use bones_hal::{PortIo, TextBuffer};

/// Feeds one scancode to `decoder` and echoes the resulting byte, if any.
///
/// This is a single step of the kernel's input loop. Returns the byte that
/// was written.
pub fn echo_scancode<B, P>(
    decoder: &mut ScancodeDecoder,
    writer: &mut Writer<B, P>,
    scancode: u8,
) -> Option<u8>
where
    B: TextBuffer,
    P: PortIo,
{
    let byte = decoder.feed(scancode)?;
    writer.put_char(byte);
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MemoryBuffer, RecordingPorts};
    use bones_common::{ConsoleConfig, ScreenChar};

    #[test]
    fn test_typing_with_shift_reaches_screen() {
        let mut writer = Writer::new(MemoryBuffer::new(), RecordingPorts::new(), ConsoleConfig::new());
        writer.initialize();
        let mut decoder = ScancodeDecoder::new();

        let echoed: std::vec::Vec<u8> = [0x2A, 0x23, 0xAA, 0x17, 0x39, 0x0E]
            .into_iter()
            .filter_map(|code| echo_scancode(&mut decoder, &mut writer, code))
            .collect();

        assert_eq!(echoed, b"Hi \x08");
        let attribute = writer.attribute();
        assert_eq!(writer.buffer().cell(0, 0), ScreenChar::new(b'H', attribute).pack());
        assert_eq!(writer.buffer().cell(0, 1), ScreenChar::new(b'i', attribute).pack());
        assert_eq!(writer.buffer().cell(0, 2), ScreenChar::blank(attribute).pack());
        assert_eq!(writer.cursor_position(), (2, 0));
    }

    #[test]
    fn test_enter_moves_to_next_line() {
        let mut writer = Writer::new(MemoryBuffer::new(), RecordingPorts::new(), ConsoleConfig::new());
        writer.initialize();
        let mut decoder = ScancodeDecoder::new();

        for code in [0x1E, 0x1C, 0x30] {
            echo_scancode(&mut decoder, &mut writer, code);
        }

        assert_eq!(writer.cursor_position(), (1, 1));
        assert_eq!(writer.buffer().cell(1, 0) & 0xFF, u16::from(b'b'));
    }

    #[test]
    fn test_release_codes_echo_nothing() {
        let mut writer = Writer::new(MemoryBuffer::new(), RecordingPorts::new(), ConsoleConfig::new());
        writer.initialize();
        let mut decoder = ScancodeDecoder::new();

        assert_eq!(echo_scancode(&mut decoder, &mut writer, 0x9E), None);
        assert_eq!(echo_scancode(&mut decoder, &mut writer, 0x01), None);
        assert_eq!(writer.cursor_position(), (0, 0));
    }
}
