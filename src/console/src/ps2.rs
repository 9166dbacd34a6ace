//! Polling PS/2 keyboard input.

use bitflags::bitflags;
use bones_hal::{PortIo, ScancodeSource};

/// PS/2 controller data port.
pub const DATA_PORT: u16 = 0x60;

/// PS/2 controller status register (read side of the command port).
pub const STATUS_PORT: u16 = 0x64;

bitflags! {
    /// Bits of the PS/2 controller status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// A byte is waiting in the output buffer.
        const OUTPUT_FULL = 1 << 0;
        /// The controller has not consumed the last byte written to it.
        const INPUT_FULL  = 1 << 1;
        /// Set by the firmware once the controller passed its self test.
        const SYSTEM      = 1 << 2;
        /// The last write went to the command port rather than data.
        const COMMAND     = 1 << 3;
        /// Receive timeout.
        const TIMEOUT     = 1 << 6;
        /// Parity error on the last byte.
        const PARITY      = 1 << 7;
    }
}

/// Keyboard scancode source that busy-waits on the controller status.
pub struct Ps2Controller<P> {
    ports: P,
}

impl<P: PortIo> Ps2Controller<P> {
    /// Wraps the port space the controller lives in.
    pub const fn new(ports: P) -> Self {
        Self { ports }
    }

    /// Current status register.
    pub fn status(&mut self) -> Status {
        Status::from_bits_retain(self.ports.read_byte(STATUS_PORT))
    }

    /// Returns the pending scancode, or `None` if the output buffer is empty.
    pub fn try_read_scancode(&mut self) -> Option<u8> {
        if self.status().contains(Status::OUTPUT_FULL) {
            Some(self.ports.read_byte(DATA_PORT))
        } else {
            None
        }
    }
}

impl<P: PortIo> ScancodeSource for Ps2Controller<P> {
    /// Spins until a byte arrives. There is no timeout.
    fn read_scancode(&mut self) -> u8 {
        loop {
            if let Some(scancode) = self.try_read_scancode() {
                return scancode;
            }
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingPorts;

    #[test]
    fn test_read_waits_for_output_full() {
        let mut ports = RecordingPorts::new();
        ports.script(STATUS_PORT, &[0x00, 0x14, 0x15]);
        ports.script(DATA_PORT, &[0x1E]);
        let mut keyboard = Ps2Controller::new(ports);

        assert_eq!(keyboard.read_scancode(), 0x1E);
        assert_eq!(
            keyboard.ports.reads,
            [STATUS_PORT, STATUS_PORT, STATUS_PORT, DATA_PORT]
        );
    }

    #[test]
    fn test_try_read_does_not_touch_data_when_empty() {
        let mut ports = RecordingPorts::new();
        ports.script(STATUS_PORT, &[0x1C]);
        let mut keyboard = Ps2Controller::new(ports);

        assert_eq!(keyboard.try_read_scancode(), None);
        assert_eq!(keyboard.ports.reads, [STATUS_PORT]);
    }

    #[test]
    fn test_status_keeps_unknown_bits() {
        let mut ports = RecordingPorts::new();
        ports.script(STATUS_PORT, &[0x35]);
        let mut keyboard = Ps2Controller::new(ports);

        let status = keyboard.status();
        assert!(status.contains(Status::OUTPUT_FULL | Status::SYSTEM));
        assert!(!status.contains(Status::INPUT_FULL));
        assert_eq!(status.bits(), 0x35);
    }
}
