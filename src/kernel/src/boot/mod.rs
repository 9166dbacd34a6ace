//! Boot logging with colored status indicators.
//!
//! Each line goes to the screen with a colored status bracket and to the
//! serial log at the matching level.

use bones_common::Color;

use crate::arch::x86_64::vga;
use crate::{print, println};

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Failure - `[FAIL]` in red
    Fail,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log(status: Status, message: &str) {
    match status {
        Status::Fail => log::error!("{}", message),
        Status::Warn => log::warn!("{}", message),
        Status::Ok | Status::Info => log::info!("{}", message),
    }
    print_status(status);
    println!(" {}", message);
}

/// Log an indented detail line (for sub-items).
pub fn log_detail(message: &str) {
    log::info!("  {}", message);
    println!("       {}", message);
}

fn print_status(status: Status) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
        Status::Fail => ("[FAIL]", Color::LightRed),
        Status::Warn => ("[WARN]", Color::Yellow),
        Status::Info => ("[INFO]", Color::LightCyan),
    };
    let previous = vga::with_writer(|writer| writer.attribute());
    vga::set_color(color, previous.background());
    print!("{}", text);
    vga::with_writer(|writer| writer.set_color(previous));
}
