//! The [`Cell`] type: a single traversable or impassable square.

/// Marker for an open cell in numeric grids.
pub const OPEN_MARKER: i64 = 0;

/// Marker for a blocked cell in numeric grids.
pub const BLOCKED_MARKER: i64 = 1;

/// A grid square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Blocked,
}

impl Cell {
    /// Decode a numeric marker. Anything but `0` or `1` is rejected.
    #[inline]
    pub const fn from_marker(value: i64) -> Option<Self> {
        match value {
            OPEN_MARKER => Some(Self::Open),
            BLOCKED_MARKER => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Decode a map-file character: `.`/`0` open, `#`/`1` blocked.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Self::Open),
            '#' | '1' => Some(Self::Blocked),
            _ => None,
        }
    }

    /// The numeric marker for this cell.
    #[inline]
    pub const fn marker(self) -> i64 {
        match self {
            Self::Open => OPEN_MARKER,
            Self::Blocked => BLOCKED_MARKER,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(Cell::from_marker(0), Some(Cell::Open));
        assert_eq!(Cell::from_marker(1), Some(Cell::Blocked));
        assert_eq!(Cell::from_marker(2), None);
        assert_eq!(Cell::from_marker(-1), None);
        assert_eq!(Cell::Blocked.marker(), 1);
        assert_eq!(Cell::default(), Cell::Open);
    }

    #[test]
    fn chars() {
        assert_eq!(Cell::from_char('.'), Some(Cell::Open));
        assert_eq!(Cell::from_char('1'), Some(Cell::Blocked));
        assert_eq!(Cell::from_char('x'), None);
        assert!(Cell::Open.is_open());
        assert!(!Cell::Blocked.is_open());
    }
}
