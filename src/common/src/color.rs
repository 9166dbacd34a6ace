//! Text-mode colors and packed screen cells.

use crate::error::ConsoleError;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

impl Color {
    /// Maps the low nibble of `value` to its palette entry.
    pub const fn from_nibble(value: u8) -> Color {
        match value & 0x0F {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGray,
            8 => Color::DarkGray,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::Pink,
            14 => Color::Yellow,
            _ => Color::White,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = ConsoleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 0x0F {
            return Err(ConsoleError::InvalidColor(value));
        }
        Ok(Color::from_nibble(value))
    }
}

/// Combined foreground and background color.
///
/// Low nibble is the foreground, high nibble the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    /// Creates a new attribute from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> Attribute {
        Attribute((background as u8) << 4 | (foreground as u8))
    }

    /// Wraps a raw attribute byte.
    pub const fn from_bits(bits: u8) -> Attribute {
        Attribute(bits)
    }

    /// Returns the raw attribute byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Foreground color.
    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    /// Background color.
    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }
}

impl From<Attribute> for u8 {
    fn from(attribute: Attribute) -> u8 {
        attribute.0
    }
}

/// A single character cell in the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    /// Character byte, code page 437.
    pub ascii_character: u8,
    /// Color of the cell.
    pub attribute: Attribute,
}

impl ScreenChar {
    /// Creates a cell holding `ascii_character` in `attribute`.
    pub const fn new(ascii_character: u8, attribute: Attribute) -> ScreenChar {
        ScreenChar {
            ascii_character,
            attribute,
        }
    }

    /// A space in `attribute`.
    pub const fn blank(attribute: Attribute) -> ScreenChar {
        ScreenChar::new(b' ', attribute)
    }

    /// Packs the cell as `character | attribute << 8`.
    pub const fn pack(self) -> u16 {
        (self.attribute.0 as u16) << 8 | self.ascii_character as u16
    }

    /// Splits a packed cell back into character and attribute.
    pub const fn unpack(cell: u16) -> ScreenChar {
        ScreenChar {
            ascii_character: (cell & 0xFF) as u8,
            attribute: Attribute((cell >> 8) as u8),
        }
    }
}

impl From<ScreenChar> for u16 {
    fn from(screen_char: ScreenChar) -> u16 {
        screen_char.pack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_packs_nibbles() {
        let attribute = Attribute::new(Color::LightRed, Color::DarkGray);
        assert_eq!(attribute.bits(), 0x8C);
        assert_eq!(attribute.foreground(), Color::LightRed);
        assert_eq!(attribute.background(), Color::DarkGray);
    }

    #[test]
    fn test_screen_char_layout() {
        let cell = ScreenChar::new(b'A', Attribute::new(Color::White, Color::Blue));
        assert_eq!(cell.pack(), 0x1F41);
        assert_eq!(ScreenChar::unpack(0x1F41), cell);
        assert_eq!(ScreenChar::blank(Attribute::from_bits(0x07)).pack(), 0x0720);
    }

    #[test]
    fn test_color_rejects_out_of_range() {
        assert_eq!(Color::try_from(14), Ok(Color::Yellow));
        assert_eq!(Color::try_from(16), Err(ConsoleError::InvalidColor(16)));
    }
}
