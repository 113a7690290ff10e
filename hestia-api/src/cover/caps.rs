use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The set of independent abilities a cover declares. Service
/// dispatch is gated on these flags; a command whose flag is absent
/// never reaches the entity.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities(u32);

impl Capabilities {
    pub const OPEN: Capabilities = Capabilities(1);
    pub const CLOSE: Capabilities = Capabilities(2);
    pub const SET_POSITION: Capabilities = Capabilities(4);
    pub const STOP: Capabilities = Capabilities(8);
    pub const OPEN_TILT: Capabilities = Capabilities(16);
    pub const CLOSE_TILT: Capabilities = Capabilities(32);
    pub const STOP_TILT: Capabilities = Capabilities(64);
    pub const SET_TILT_POSITION: Capabilities = Capabilities(128);

    /// All four tilt flags. Tilt support inferred from a tilt
    /// position reading is declared as a group.
    pub const TILT: Capabilities = Capabilities(16 | 32 | 64 | 128);

    pub const fn empty() -> Capabilities {
        Capabilities(0)
    }

    /// The raw mask, as clients see it.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when every flag in `other` is also set in
    /// `self`.
    pub const fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Capabilities) {
        self.0 |= rhs.0
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}
