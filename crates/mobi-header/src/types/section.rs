//! Section numbers with an "absent" sentinel.

use serde::Serialize;

/// Raw value marking an index field as absent.
pub const INDEX_UNAVAILABLE: u32 = 0xFFFF_FFFF;

/// A record section number that may be [`SectionIndex::UNAVAILABLE`].
///
/// The sentinel is kept as-is rather than folded into zero or `None`, so a
/// decoded header can always be rebuilt byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionIndex(pub u32);

impl SectionIndex {
    /// The absent marker.
    pub const UNAVAILABLE: Self = Self(INDEX_UNAVAILABLE);

    /// Whether this field names a real section.
    #[must_use]
    pub const fn is_available(self) -> bool {
        self.0 != INDEX_UNAVAILABLE
    }

    /// The section number, if present.
    #[must_use]
    pub const fn get(self) -> Option<u32> {
        if self.is_available() {
            Some(self.0)
        } else {
            None
        }
    }

    /// The raw stored value, sentinel included.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for SectionIndex {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(section) => write!(f, "{section}"),
            None => write!(f, "unavailable"),
        }
    }
}
