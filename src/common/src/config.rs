//! Console configuration.

use crate::color::{Attribute, Color};
use crate::error::ConsoleError;
use crate::BUFFER_WIDTH;

/// Attribute applied by `initialize`: light red on dark grey.
pub const DEFAULT_ATTRIBUTE: Attribute = Attribute::new(Color::LightRed, Color::DarkGray);

/// Columns between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Settings a console starts from.
///
/// Fields are only set through the builders, so the tab width is always
/// between 1 and the row width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConsoleConfig")
)]
pub struct ConsoleConfig {
    default_attribute: Attribute,
    tab_width: usize,
    show_cursor: bool,
}

impl ConsoleConfig {
    /// The stock configuration.
    pub const fn new() -> Self {
        Self {
            default_attribute: DEFAULT_ATTRIBUTE,
            tab_width: DEFAULT_TAB_WIDTH,
            show_cursor: true,
        }
    }

    /// Attribute used to clear the screen at initialization.
    pub const fn default_attribute(&self) -> Attribute {
        self.default_attribute
    }

    /// Distance between tab stops, in columns.
    pub const fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Whether the blinking hardware cursor is shown after initialization.
    pub const fn show_cursor(&self) -> bool {
        self.show_cursor
    }

    /// Replaces the default attribute.
    pub const fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.default_attribute = attribute;
        self
    }

    /// Replaces the tab width.
    ///
    /// Zero, or anything wider than a row, is rejected.
    pub fn with_tab_width(mut self, tab_width: usize) -> Result<Self, ConsoleError> {
        if tab_width == 0 || tab_width > BUFFER_WIDTH {
            return Err(ConsoleError::InvalidTabWidth(tab_width));
        }
        self.tab_width = tab_width;
        Ok(self)
    }

    /// Hides or shows the hardware cursor after initialization.
    pub const fn with_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }
}

/// Unchecked form of [`ConsoleConfig`] that deserialization goes through.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConsoleConfig {
    default_attribute: Attribute,
    tab_width: usize,
    show_cursor: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConsoleConfig> for ConsoleConfig {
    type Error = ConsoleError;

    fn try_from(raw: RawConsoleConfig) -> Result<Self, Self::Error> {
        Ok(ConsoleConfig::new()
            .with_attribute(raw.default_attribute)
            .with_tab_width(raw.tab_width)?
            .with_cursor(raw.show_cursor))
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
