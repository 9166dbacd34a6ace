//! Text console writer.
//!
//! Tracks the cursor and the current attribute over a [`TextBuffer`] and
//! implements the control characters the keyboard path produces: newline,
//! tab, backspace. Output past the last column wraps, output past the last
//! row scrolls.

use core::fmt;

use bones_common::{Attribute, Color, ConsoleConfig, ConsoleError, ScreenChar};
use bones_hal::{PortIo, TextBuffer};
use log::{debug, trace};

use crate::cursor::{HardwareCursor, CURSOR_END_LINE, CURSOR_START_LINE};

const BACKSPACE: u8 = 0x08;

/// Shown in place of bytes `fmt::Write` cannot render.
const PLACEHOLDER: u8 = 0xFE;

/// Text console over a cell grid and a hardware cursor.
///
/// Invariant: `row_position < B::HEIGHT` and `column_position < B::WIDTH`
/// between calls.
pub struct Writer<B, P> {
    /// Current column position (0 to WIDTH-1).
    column_position: usize,
    /// Current row position (0 to HEIGHT-1).
    row_position: usize,
    /// Attribute for newly written cells.
    attribute: Attribute,
    config: ConsoleConfig,
    buffer: B,
    cursor: HardwareCursor<P>,
}

impl<B: TextBuffer, P: PortIo> Writer<B, P> {
    /// Creates a writer without touching the hardware.
    ///
    /// Call [`initialize`](Self::initialize) before the first write.
    pub fn new(buffer: B, ports: P, config: ConsoleConfig) -> Self {
        Writer {
            column_position: 0,
            row_position: 0,
            attribute: config.default_attribute(),
            config,
            buffer,
            cursor: HardwareCursor::new(ports),
        }
    }

    /// Resets the cursor and attribute and blanks the whole screen.
    pub fn initialize(&mut self) {
        self.column_position = 0;
        self.row_position = 0;
        self.attribute = self.config.default_attribute();
        for row in 0..B::HEIGHT {
            self.clear_row(row);
        }
        if self.config.show_cursor() {
            self.cursor.enable(CURSOR_START_LINE, CURSOR_END_LINE);
        } else {
            self.cursor.disable();
        }
        self.sync_cursor();
        debug!(
            "console initialized: {}x{}, attribute {:#04x}",
            B::WIDTH,
            B::HEIGHT,
            self.attribute.bits()
        );
    }

    /// Sets the attribute for subsequent writes. Existing cells keep theirs.
    pub fn set_color(&mut self, attribute: Attribute) {
        trace!("attribute {:#04x}", attribute.bits());
        self.attribute = attribute;
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_colors(&mut self, foreground: Color, background: Color) {
        self.set_color(Attribute::new(foreground, background));
    }

    /// The attribute new cells are written with.
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Cursor position as `(col, row)`.
    pub fn cursor_position(&self) -> (usize, usize) {
        (self.column_position, self.row_position)
    }

    /// Moves the cursor to (`col`, `row`) without writing anything.
    pub fn set_cursor_position(&mut self, col: usize, row: usize) -> Result<(), ConsoleError> {
        if col >= B::WIDTH || row >= B::HEIGHT {
            return Err(ConsoleError::OutOfBounds { col, row });
        }
        self.column_position = col;
        self.row_position = row;
        self.sync_cursor();
        Ok(())
    }

    /// Writes one byte, interpreting `\n`, `\t` and backspace.
    ///
    /// Every other byte is stored as-is in the current cell, whether or not
    /// code page 437 has a sensible glyph for it.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),
            b'\t' => self.tab(),
            BACKSPACE => self.backspace(),
            byte => {
                let cell = ScreenChar::new(byte, self.attribute);
                self.buffer
                    .write_cell(self.row_position, self.column_position, cell.pack());
                self.column_position += 1;
                if self.column_position == B::WIDTH {
                    self.new_line();
                }
            }
        }
        self.sync_cursor();
    }

    /// Writes every byte of `bytes` in order.
    pub fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    /// Writes `text` up to, not including, the first NUL byte.
    pub fn write_string(&mut self, text: &str) {
        for byte in text.bytes().take_while(|&byte| byte != 0) {
            self.put_char(byte);
        }
    }

    /// Shifts every row up by one and blanks the last row.
    ///
    /// The cursor is left where it was; callers pin the row themselves.
    pub fn scroll(&mut self) {
        for row in 1..B::HEIGHT {
            self.buffer.copy_row(row, row - 1);
        }
        self.clear_row(B::HEIGHT - 1);
        trace!("scrolled");
    }

    /// Programs the hardware cursor to (`col`, `row`).
    pub fn update_cursor(&mut self, col: usize, row: usize) {
        self.cursor.update(col, row, B::WIDTH);
    }

    /// Blanks the screen with the current attribute and homes the cursor.
    pub fn clear_screen(&mut self) {
        for row in 0..B::HEIGHT {
            self.clear_row(row);
        }
        self.column_position = 0;
        self.row_position = 0;
        self.sync_cursor();
    }

    /// Shows the hardware cursor spanning scanlines `start..=end`.
    pub fn enable_cursor(&mut self, start: u8, end: u8) {
        self.cursor.enable(start, end);
    }

    /// Hides the hardware cursor.
    pub fn disable_cursor(&mut self) {
        self.cursor.disable();
    }

    /// The cell grid.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The port space the hardware cursor is programmed through.
    pub fn ports(&self) -> &P {
        self.cursor.ports()
    }

    fn new_line(&mut self) {
        self.column_position = 0;
        self.row_position += 1;
        if self.row_position == B::HEIGHT {
            self.scroll();
            self.row_position = B::HEIGHT - 1;
        }
    }

    fn tab(&mut self) {
        let width = self.config.tab_width().max(1);
        let next_stop = (self.column_position / width + 1) * width;
        if next_stop >= B::WIDTH {
            self.new_line();
        } else {
            self.column_position = next_stop;
        }
    }

    /// Erases the cell before the cursor, crossing at most one row boundary.
    fn backspace(&mut self) {
        if self.column_position > 0 {
            self.column_position -= 1;
        } else if self.row_position > 0 {
            self.row_position -= 1;
            self.column_position = B::WIDTH - 1;
        } else {
            return;
        }
        let blank = ScreenChar::blank(self.attribute);
        self.buffer
            .write_cell(self.row_position, self.column_position, blank.pack());
    }

    fn clear_row(&mut self, row: usize) {
        debug_assert!(row < B::HEIGHT, "row index out of bounds");
        self.buffer
            .fill_row(row, ScreenChar::blank(self.attribute).pack());
    }

    fn sync_cursor(&mut self) {
        self.cursor
            .update(self.column_position, self.row_position, B::WIDTH);
    }
}

impl<B: TextBuffer, P: PortIo> fmt::Write for Writer<B, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII or one of the handled controls
                0x20..=0x7e | b'\n' | b'\t' | BACKSPACE => self.put_char(byte),
                // Non-printable: show placeholder
                _ => self.put_char(PLACEHOLDER),
            }
        }
        Ok(())
    }
}

impl<B: TextBuffer, P: PortIo> bones_hal::Console for Writer<B, P> {
    fn write_str(&mut self, s: &str) {
        let _ = <Self as fmt::Write>::write_str(self, s);
    }

    fn clear(&mut self) {
        self.clear_screen();
    }
}
