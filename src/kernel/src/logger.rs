//! `log` backend writing to COM1.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::serial_println;

/// Most verbose level the kernel records, chosen by cargo feature.
pub const MAX_LEVEL: LevelFilter = if cfg!(feature = "log_trace") {
    LevelFilter::Trace
} else if cfg!(feature = "log_info") {
    LevelFilter::Info
} else {
    LevelFilter::Warn
};

struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SerialLogger = SerialLogger;

/// Installs the serial logger as the global `log` backend.
///
/// Fails only if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(MAX_LEVEL))
}
