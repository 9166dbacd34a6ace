//! Scancode set 1 translation tables.

/// Characters produced by one key: without and with case flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    /// Plain character.
    pub lower: u8,
    /// Character while exactly one of shift or caps lock is active.
    pub upper: u8,
}

impl KeyPair {
    /// Entry for a key typing `lower`, or `upper` when case is flipped.
    pub const fn entry(lower: u8, upper: u8) -> Option<KeyPair> {
        Some(KeyPair { lower, upper })
    }

    /// Selects the member for the requested case.
    pub const fn select(self, uppercase: bool) -> u8 {
        if uppercase {
            self.upper
        } else {
            self.lower
        }
    }
}

/// Number of make codes a table covers.
pub const KEYMAP_LEN: usize = 0x80;

/// Map from make code to the key's characters.
///
/// `None` marks keys that produce no character: escape, the modifiers,
/// function keys and the keypad navigation cluster.
pub struct Keymap {
    entries: [Option<KeyPair>; KEYMAP_LEN],
}

impl Keymap {
    /// Builds a layout from a full make-code table.
    pub const fn from_entries(entries: [Option<KeyPair>; KEYMAP_LEN]) -> Keymap {
        Keymap { entries }
    }

    /// Looks up a make code. Codes at or above `0x80` have no entry.
    pub fn lookup(&self, scancode: u8) -> Option<KeyPair> {
        self.entries.get(usize::from(scancode)).copied().flatten()
    }
}

/// US QWERTY layout.
///
/// Enter, backspace and tab translate to `\n`, `0x08` and `\t` so the
/// console's line editing applies to typed input.
pub static US_QWERTY: Keymap = Keymap::from_entries(us_qwerty());

const fn us_qwerty() -> [Option<KeyPair>; KEYMAP_LEN] {
    let mut map = [None; KEYMAP_LEN];

    map[0x02] = KeyPair::entry(b'1', b'!');
    map[0x03] = KeyPair::entry(b'2', b'@');
    map[0x04] = KeyPair::entry(b'3', b'#');
    map[0x05] = KeyPair::entry(b'4', b'$');
    map[0x06] = KeyPair::entry(b'5', b'%');
    map[0x07] = KeyPair::entry(b'6', b'^');
    map[0x08] = KeyPair::entry(b'7', b'&');
    map[0x09] = KeyPair::entry(b'8', b'*');
    map[0x0A] = KeyPair::entry(b'9', b'(');
    map[0x0B] = KeyPair::entry(b'0', b')');
    map[0x0C] = KeyPair::entry(b'-', b'_');
    map[0x0D] = KeyPair::entry(b'=', b'+');
    map[0x0E] = KeyPair::entry(0x08, 0x08);
    map[0x0F] = KeyPair::entry(b'\t', b'\t');

    map[0x10] = KeyPair::entry(b'q', b'Q');
    map[0x11] = KeyPair::entry(b'w', b'W');
    map[0x12] = KeyPair::entry(b'e', b'E');
    map[0x13] = KeyPair::entry(b'r', b'R');
    map[0x14] = KeyPair::entry(b't', b'T');
    map[0x15] = KeyPair::entry(b'y', b'Y');
    map[0x16] = KeyPair::entry(b'u', b'U');
    map[0x17] = KeyPair::entry(b'i', b'I');
    map[0x18] = KeyPair::entry(b'o', b'O');
    map[0x19] = KeyPair::entry(b'p', b'P');
    map[0x1A] = KeyPair::entry(b'[', b'{');
    map[0x1B] = KeyPair::entry(b']', b'}');
    map[0x1C] = KeyPair::entry(b'\n', b'\n');

    map[0x1E] = KeyPair::entry(b'a', b'A');
    map[0x1F] = KeyPair::entry(b's', b'S');
    map[0x20] = KeyPair::entry(b'd', b'D');
    map[0x21] = KeyPair::entry(b'f', b'F');
    map[0x22] = KeyPair::entry(b'g', b'G');
    map[0x23] = KeyPair::entry(b'h', b'H');
    map[0x24] = KeyPair::entry(b'j', b'J');
    map[0x25] = KeyPair::entry(b'k', b'K');
    map[0x26] = KeyPair::entry(b'l', b'L');
    map[0x27] = KeyPair::entry(b';', b':');
    map[0x28] = KeyPair::entry(b'\'', b'"');
    map[0x29] = KeyPair::entry(b'`', b'~');
    map[0x2B] = KeyPair::entry(b'\\', b'|');

    map[0x2C] = KeyPair::entry(b'z', b'Z');
    map[0x2D] = KeyPair::entry(b'x', b'X');
    map[0x2E] = KeyPair::entry(b'c', b'C');
    map[0x2F] = KeyPair::entry(b'v', b'V');
    map[0x30] = KeyPair::entry(b'b', b'B');
    map[0x31] = KeyPair::entry(b'n', b'N');
    map[0x32] = KeyPair::entry(b'm', b'M');
    map[0x33] = KeyPair::entry(b',', b'<');
    map[0x34] = KeyPair::entry(b'.', b'>');
    map[0x35] = KeyPair::entry(b'/', b'?');
    map[0x37] = KeyPair::entry(b'*', b'*');
    map[0x39] = KeyPair::entry(b' ', b' ');

    // keypad
    map[0x4A] = KeyPair::entry(b'-', b'-');
    map[0x4E] = KeyPair::entry(b'+', b'+');

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_symbols() {
        assert_eq!(US_QWERTY.lookup(0x1E), KeyPair::entry(b'a', b'A'));
        assert_eq!(US_QWERTY.lookup(0x02), KeyPair::entry(b'1', b'!'));
        assert_eq!(US_QWERTY.lookup(0x35), KeyPair::entry(b'/', b'?'));
    }

    #[test]
    fn test_keys_without_characters() {
        // escape, left ctrl, shifts, alt, caps lock, F1, keypad 8
        for code in [0x01, 0x1D, 0x2A, 0x36, 0x38, 0x3A, 0x3B, 0x48] {
            assert_eq!(US_QWERTY.lookup(code), None, "scancode {:#04x}", code);
        }
    }

    #[test]
    fn test_break_codes_have_no_entry() {
        assert_eq!(US_QWERTY.lookup(0x9E), None);
        assert_eq!(US_QWERTY.lookup(0xFF), None);
    }

    #[test]
    fn test_select_member() {
        let pair = KeyPair::entry(b'q', b'Q').unwrap();
        assert_eq!(pair.select(false), b'q');
        assert_eq!(pair.select(true), b'Q');
    }
}
