//! Bones Kernel
//!
//! A freestanding x86_64 kernel whose only job is a text console driven by
//! the keyboard.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (port I/O, VGA, serial)
//! - `boot`: Colored boot status lines
//! - `keyboard`: The polling input loop
//! - `logger`: `log` backend on the serial port
//! - `testutil`: QEMU test harness support
//!
//! Console and keyboard logic live in `bones-console`; this crate binds them
//! to real hardware.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod keyboard;
pub mod logger;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called once at entry. Interrupts stay disabled for the kernel's whole
/// run; input is polled.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        x86_64::instructions::interrupts::disable();
        arch::x86_64::serial::init();
        if let Err(error) = logger::init() {
            serial_println!("logger: {}", error);
        }
        arch::x86_64::vga::init();
    }
}
