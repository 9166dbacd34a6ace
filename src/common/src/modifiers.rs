//! Keyboard modifier state.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys that affect character translation.
    ///
    /// `SHIFT` is transient (set while either shift key is held),
    /// `CAPS_LOCK` is latched (flipped on each caps-lock press).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key is held.
        const SHIFT     = 1 << 0;
        /// Caps lock is latched on.
        const CAPS_LOCK = 1 << 1;
    }
}

impl Modifiers {
    /// Whether printable keys should produce their uppercase member.
    ///
    /// Shift and caps lock each flip case, so holding shift with caps lock
    /// latched gives lowercase again.
    pub const fn uppercase(self) -> bool {
        self.contains(Modifiers::SHIFT) ^ self.contains(Modifiers::CAPS_LOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_is_exclusive_or() {
        assert!(!Modifiers::empty().uppercase());
        assert!(Modifiers::SHIFT.uppercase());
        assert!(Modifiers::CAPS_LOCK.uppercase());
        assert!(!(Modifiers::SHIFT | Modifiers::CAPS_LOCK).uppercase());
    }
}
