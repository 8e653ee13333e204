//! Per-point extremum states.

use std::fmt;

/// Classification of a single sample.
///
/// The discriminants match the conventional `1 / -1 / 0` marker encoding
/// used by downstream metric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Extremum {
    /// Confirmed local maximum.
    Peak = 1,
    /// Confirmed local minimum.
    Valley = -1,
    /// Neither a significant peak nor a valley.
    Insignificant = 0,
}

impl Extremum {
    /// All three states in marker order (`1, -1, 0`).
    pub const ALL: [Extremum; 3] = [Self::Peak, Self::Valley, Self::Insignificant];

    /// Returns the `1 / -1 / 0` marker for this state.
    pub fn as_marker(self) -> i8 {
        self as i8
    }

    /// Parses a `1 / -1 / 0` marker.
    pub fn from_marker(marker: i8) -> Option<Self> {
        match marker {
            1 => Some(Self::Peak),
            -1 => Some(Self::Valley),
            0 => Some(Self::Insignificant),
            _ => None,
        }
    }

    /// Lower-case name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Peak => "peak",
            Self::Valley => "valley",
            Self::Insignificant => "insignificant",
        }
    }

    /// True for [`Extremum::Peak`] and [`Extremum::Valley`].
    pub fn is_extremum(self) -> bool {
        self != Self::Insignificant
    }
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
