//! Raw I/O port access.

use bones_hal::PortIo;
use x86_64::instructions::port::Port;

/// The CPU's I/O port space, accessed with `in`/`out` instructions.
#[derive(Debug, Clone, Copy, Default)]
pub struct X86Ports;

impl PortIo for X86Ports {
    fn read_byte(&mut self, port: u16) -> u8 {
        let mut port = Port::<u8>::new(port);
        // SAFETY: The kernel runs in ring 0 with full I/O privilege. Callers
        // only address the CRTC and PS/2 controller ports, whose reads have
        // no memory side effects.
        unsafe { port.read() }
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        let mut port = Port::<u8>::new(port);
        // SAFETY: As above; writes to the CRTC index/data pair only change
        // cursor registers.
        unsafe { port.write(value) }
    }
}
