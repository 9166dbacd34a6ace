//! Hardware text-mode cursor.
//!
//! The blinking cursor is drawn by the VGA CRT controller, not by the cell
//! grid. It is programmed through an index/data port pair: write a register
//! number to the index port, then its value to the data port.

use bones_hal::PortIo;

/// CRT controller index port.
pub const CRTC_INDEX: u16 = 0x3D4;

/// CRT controller data port.
pub const CRTC_DATA: u16 = 0x3D5;

const CURSOR_START: u8 = 0x0A;
const CURSOR_END: u8 = 0x0B;
const CURSOR_LOCATION_HIGH: u8 = 0x0E;
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// First scanline of the underline cursor shown at initialization.
pub const CURSOR_START_LINE: u8 = 14;

/// Last scanline of the underline cursor.
pub const CURSOR_END_LINE: u8 = 15;

/// Bit 5 of the cursor start register turns the cursor off.
const CURSOR_DISABLE: u8 = 0x20;

/// Driver for the CRTC cursor registers.
pub struct HardwareCursor<P> {
    ports: P,
}

impl<P: PortIo> HardwareCursor<P> {
    /// Wraps the port space the CRTC lives in.
    pub const fn new(ports: P) -> Self {
        Self { ports }
    }

    /// Moves the cursor to (`col`, `row`) on a grid `width` columns wide.
    pub fn update(&mut self, col: usize, row: usize, width: usize) {
        let position = (row * width + col) as u16;
        self.ports.write_byte(CRTC_INDEX, CURSOR_LOCATION_LOW);
        self.ports.write_byte(CRTC_DATA, (position & 0xFF) as u8);
        self.ports.write_byte(CRTC_INDEX, CURSOR_LOCATION_HIGH);
        self.ports.write_byte(CRTC_DATA, ((position >> 8) & 0xFF) as u8);
    }

    /// Shows the cursor spanning scanlines `start..=end` of the cell.
    ///
    /// The reserved upper bits of both registers are preserved.
    pub fn enable(&mut self, start: u8, end: u8) {
        self.ports.write_byte(CRTC_INDEX, CURSOR_START);
        let current = self.ports.read_byte(CRTC_DATA);
        self.ports.write_byte(CRTC_DATA, (current & 0xC0) | (start & 0x1F));

        self.ports.write_byte(CRTC_INDEX, CURSOR_END);
        let current = self.ports.read_byte(CRTC_DATA);
        self.ports.write_byte(CRTC_DATA, (current & 0xE0) | (end & 0x1F));
    }

    /// Hides the cursor.
    pub fn disable(&mut self) {
        self.ports.write_byte(CRTC_INDEX, CURSOR_START);
        self.ports.write_byte(CRTC_DATA, CURSOR_DISABLE);
    }

    /// The underlying port space.
    pub fn ports(&self) -> &P {
        &self.ports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingPorts;

    #[test]
    fn test_update_writes_low_then_high() {
        let mut cursor = HardwareCursor::new(RecordingPorts::new());
        cursor.update(79, 24, 80);

        // 24 * 80 + 79 = 1999 = 0x07CF
        assert_eq!(
            cursor.ports().writes,
            [
                (CRTC_INDEX, 0x0F),
                (CRTC_DATA, 0xCF),
                (CRTC_INDEX, 0x0E),
                (CRTC_DATA, 0x07),
            ]
        );
    }

    #[test]
    fn test_enable_keeps_reserved_bits() {
        let mut ports = RecordingPorts::new();
        ports.script(CRTC_DATA, &[0xC0 | 0x1F, 0xE0 | 0x1F]);
        let mut cursor = HardwareCursor::new(ports);
        cursor.enable(14, 15);

        assert_eq!(
            cursor.ports().writes,
            [
                (CRTC_INDEX, 0x0A),
                (CRTC_DATA, 0xC0 | 14),
                (CRTC_INDEX, 0x0B),
                (CRTC_DATA, 0xE0 | 15),
            ]
        );
    }

    #[test]
    fn test_disable_sets_off_bit() {
        let mut cursor = HardwareCursor::new(RecordingPorts::new());
        cursor.disable();
        assert_eq!(cursor.ports().writes, [(CRTC_INDEX, 0x0A), (CRTC_DATA, 0x20)]);
    }
}
