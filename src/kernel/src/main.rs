//! Bones Kernel Entry Point

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use bones_common::Color;
use bones_kernel::arch::x86_64::{self, vga};
use bones_kernel::boot::{self, Status};
use bones_kernel::{keyboard, println, serial_println};
use core::fmt::Write;
use core::panic::PanicInfo;

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    bones_kernel::init();

    boot::log(Status::Ok, "Serial port initialized");
    boot::log(Status::Ok, "VGA text console ready");
    boot::log_detail("80x25, hardware cursor on CRTC 0x3D4/0x3D5");
    boot::log(Status::Info, "Keyboard: polling PS/2 controller");
    println!();
    println!("Kernel Booted. Try Shift AND Caps Lock!");

    keyboard::echo_loop()
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    // WRITER may already be held by the code that panicked.
    let shown = vga::try_with_writer(|writer| {
        writer.set_colors(Color::LightRed, Color::Black);
        let _ = writeln!(writer, "\n\n!!! KERNEL PANIC !!!");
        writer.set_colors(Color::White, Color::Black);
        let _ = writeln!(writer, "{}", info);
    });
    if shown.is_none() {
        serial_println!("console busy, panic not shown on screen");
    }

    x86_64::halt_loop()
}
