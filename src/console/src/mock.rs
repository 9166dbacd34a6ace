//! In-memory stand-ins for the display and the port space.

use bones_common::{BUFFER_HEIGHT, BUFFER_WIDTH};
use bones_hal::{PortIo, TextBuffer};
use std::collections::{BTreeMap, VecDeque};
use std::vec::Vec;

/// Text buffer with the same geometry as the VGA text grid.
pub struct MemoryBuffer {
    cells: [[u16; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self {
            cells: [[0; BUFFER_WIDTH]; BUFFER_HEIGHT],
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> u16 {
        self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> [u16; BUFFER_WIDTH] {
        self.cells[row]
    }
}

impl TextBuffer for MemoryBuffer {
    const WIDTH: usize = BUFFER_WIDTH;
    const HEIGHT: usize = BUFFER_HEIGHT;

    fn read_cell(&self, row: usize, col: usize) -> u16 {
        self.cells[row][col]
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: u16) {
        self.cells[row][col] = cell;
    }
}

/// Port space that logs every write and replays scripted reads.
///
/// Reads from a port with no script left return `idle`.
pub struct RecordingPorts {
    pub writes: Vec<(u16, u8)>,
    pub reads: Vec<u16>,
    scripts: BTreeMap<u16, VecDeque<u8>>,
    idle: u8,
}

impl RecordingPorts {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            reads: Vec::new(),
            scripts: BTreeMap::new(),
            idle: 0,
        }
    }

    pub fn script(&mut self, port: u16, values: &[u8]) {
        self.scripts
            .entry(port)
            .or_default()
            .extend(values.iter().copied());
    }

    /// The most recent `count` writes, oldest first.
    pub fn last_writes(&self, count: usize) -> &[(u16, u8)] {
        &self.writes[self.writes.len().saturating_sub(count)..]
    }
}

impl PortIo for RecordingPorts {
    fn read_byte(&mut self, port: u16) -> u8 {
        self.reads.push(port);
        self.scripts
            .get_mut(&port)
            .and_then(VecDeque::pop_front)
            .unwrap_or(self.idle)
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        self.writes.push((port, value));
    }
}
