//! x86_64 architecture support.
//!
//! Provides port I/O, the VGA text console and serial logging for x86_64
//! platforms.

pub mod port;
pub mod serial;
pub mod vga;

pub use port::X86Ports;
pub use serial::SERIAL;
pub use vga::{VgaBuffer, VgaWriter, WRITER};

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
