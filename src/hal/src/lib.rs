//! Bones Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the seams between the console logic and the machine:
//! port I/O, the text-mode cell grid and the keyboard byte source. Production
//! code implements them over real hardware, tests over plain memory.

#![no_std]

/// Byte-granularity access to the x86 I/O port space.
pub trait PortIo {
    /// Reads one byte from `port`.
    fn read_byte(&mut self, port: u16) -> u8;
    /// Writes `value` to `port`.
    fn write_byte(&mut self, port: u16, value: u8);
}

impl<T: PortIo + ?Sized> PortIo for &mut T {
    fn read_byte(&mut self, port: u16) -> u8 {
        (**self).read_byte(port)
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        (**self).write_byte(port, value)
    }
}

/// A fixed-size grid of 16-bit text-mode cells.
///
/// Each cell packs a character byte in the low half and an attribute byte in
/// the high half. Implementations must write whole cells so a reader never
/// observes a half-updated one.
pub trait TextBuffer {
    /// Number of columns.
    const WIDTH: usize;
    /// Number of rows.
    const HEIGHT: usize;

    /// Reads the cell at (`row`, `col`).
    fn read_cell(&self, row: usize, col: usize) -> u16;

    /// Overwrites the cell at (`row`, `col`).
    fn write_cell(&mut self, row: usize, col: usize, cell: u16);

    /// Copies every cell of row `src` into row `dst`.
    fn copy_row(&mut self, src: usize, dst: usize) {
        for col in 0..Self::WIDTH {
            let cell = self.read_cell(src, col);
            self.write_cell(dst, col, cell);
        }
    }

    /// Fills every cell of `row` with `cell`.
    fn fill_row(&mut self, row: usize, cell: u16) {
        for col in 0..Self::WIDTH {
            self.write_cell(row, col, cell);
        }
    }
}

/// A blocking source of raw keyboard scancodes.
pub trait ScancodeSource {
    /// Blocks until the keyboard produces a byte and returns it.
    fn read_scancode(&mut self) -> u8;
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grid {
        cells: [[u16; 4]; 3],
    }

    impl TextBuffer for Grid {
        const WIDTH: usize = 4;
        const HEIGHT: usize = 3;

        fn read_cell(&self, row: usize, col: usize) -> u16 {
            self.cells[row][col]
        }

        fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
            self.cells[row][col] = cell;
        }
    }

    struct LastWrite(Option<(u16, u8)>);

    impl PortIo for LastWrite {
        fn read_byte(&mut self, _port: u16) -> u8 {
            0xAB
        }

        fn write_byte(&mut self, port: u16, value: u8) {
            self.0 = Some((port, value));
        }
    }

    #[test]
    fn test_copy_row_moves_whole_row() {
        let mut grid = Grid {
            cells: [[1, 2, 3, 4], [5, 6, 7, 8], [0; 4]],
        };
        grid.copy_row(1, 0);
        assert_eq!(grid.cells[0], [5, 6, 7, 8]);
        assert_eq!(grid.cells[1], [5, 6, 7, 8]);
    }

    #[test]
    fn test_fill_row_touches_only_target() {
        let mut grid = Grid { cells: [[0; 4]; 3] };
        grid.fill_row(2, 0x0720);
        assert_eq!(grid.cells[2], [0x0720; 4]);
        assert_eq!(grid.cells[1], [0; 4]);
    }

    #[test]
    fn test_port_io_through_mutable_reference() {
        fn probe<P: PortIo>(mut ports: P) -> u8 {
            ports.write_byte(0x3D4, 0x0F);
            ports.read_byte(0x60)
        }

        let mut port = LastWrite(None);
        assert_eq!(probe(&mut port), 0xAB);
        assert_eq!(port.0, Some((0x3D4, 0x0F)));
    }
}
