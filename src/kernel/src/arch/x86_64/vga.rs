//! VGA text mode driver for x86_64.
//!
//! Backs the console [`Writer`] with the memory-mapped text buffer at
//! 0xB8000 and the CRTC cursor ports, and exposes one global instance for
//! the print macros.

use bones_common::{Color, ConsoleConfig, BUFFER_HEIGHT, BUFFER_WIDTH};
use bones_console::Writer;
use bones_hal::TextBuffer;
use core::fmt::{self, Write};
use core::ptr;
use spin::Mutex;

use super::port::X86Ports;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Console settings the kernel boots with.
pub const CONFIG: ConsoleConfig = ConsoleConfig::new();

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[u16; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// Handle to the memory-mapped text buffer.
pub struct VgaBuffer {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped in x86 real/protected mode.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime.
// Access is synchronized through the WRITER spinlock.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Only one handle may exist; it lives inside [`WRITER`].
    fn new() -> Self {
        VgaBuffer {
            // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text buffer
            // address on x86 systems, identity mapped by the bootloader.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextBuffer for VgaBuffer {
    const WIDTH: usize = BUFFER_WIDTH;
    const HEIGHT: usize = BUFFER_HEIGHT;

    fn read_cell(&self, row: usize, col: usize) -> u16 {
        // SAFETY: Array indexing bounds-checks row and col. The buffer pointer
        // was validated at construction time. Volatile because the VGA buffer
        // is memory-mapped I/O.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[row][col]) }
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
        // SAFETY: As in read_cell. A single 16-bit store, so the display never
        // sees a character without its attribute.
        unsafe { ptr::write_volatile(&mut (*self.buffer).chars[row][col], cell) }
    }
}

/// The console type the kernel runs.
pub type VgaWriter = Writer<VgaBuffer, X86Ports>;

/// Global VGA writer instance.
///
/// Uses a spinlock for safe concurrent access.
pub static WRITER: spin::Once<Mutex<VgaWriter>> = spin::Once::new();

/// Initializes the global VGA writer and clears the screen.
///
/// Idempotent - safe to call multiple times.
pub fn init() {
    get_writer();
}

/// Returns a reference to the VGA writer, initializing if necessary.
fn get_writer() -> &'static Mutex<VgaWriter> {
    WRITER.call_once(|| {
        let mut writer = Writer::new(VgaBuffer::new(), X86Ports, CONFIG);
        writer.initialize();
        Mutex::new(writer)
    })
}

/// Prints to the VGA buffer without a newline.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::vga::_print(format_args!($($arg)*))
    };
}

/// Prints to the VGA buffer with a newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let writer = get_writer();
    let _ = writer.lock().write_fmt(args);
}

/// Runs `f` with exclusive access to the console.
pub fn with_writer<R>(f: impl FnOnce(&mut VgaWriter) -> R) -> R {
    f(&mut *get_writer().lock())
}

/// Runs `f` on the console only if no one else holds it.
///
/// Returns `None` when the lock is taken, or when the console was never
/// started. Used where blocking could deadlock, such as the panic handler.
pub fn try_with_writer<R>(f: impl FnOnce(&mut VgaWriter) -> R) -> Option<R> {
    let mut writer = WRITER.get()?.try_lock()?;
    Some(f(&mut *writer))
}

/// Sets the VGA output color.
pub fn set_color(foreground: Color, background: Color) {
    get_writer().lock().set_colors(foreground, background);
}
