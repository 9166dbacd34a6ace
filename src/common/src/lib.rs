//! Shared value types for the Bones console.
//!
//! Everything here is plain data: colors, packed cells, keyboard modifier
//! flags, console configuration and the error type. Both the console logic
//! and the kernel depend on this crate.

#![no_std]
#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod error;
pub mod modifiers;

pub use color::{Attribute, Color, ScreenChar};
pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use modifiers::Modifiers;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;
