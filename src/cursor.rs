//! Logical cursor coordinates for the console's live area.
//!
//! Rows are **bottom-up**: row 0 is the bottom-most tracked line and larger
//! row numbers sit visually higher on screen. This matches how a console's
//! live area grows — new output scrolls everything up, and the line being
//! appended to is always row 0. Columns count from 0 at the left edge.
//!
//! Coordinates are `u16`, like every other cell coordinate in the rendering
//! stack. Negative positions are unrepresentable by construction.

use std::fmt;

/// A logical position in the live area: (row, col), both 0-indexed.
///
/// `row` counts **upward** from the bottom-most tracked line — row 2 is two
/// lines above the bottom. `col` is the character offset from the start of
/// the line (one displayable character per column; no width accounting).
///
/// `Cursor` is a plain `Copy` value: assigning one cursor to another
/// replaces both fields at once, never one at a time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Rows above the bottom-most tracked line.
    pub row: u16,
    /// Columns from the start of the line.
    pub col: u16,
}

impl Cursor {
    /// The origin — bottom row, first column.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a cursor at the given (row, col).
    #[inline]
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// A cursor at the start of the given row.
    #[inline]
    #[must_use]
    pub const fn row_start(row: u16) -> Self {
        Self { row, col: 0 }
    }

    /// True at the bottom row, first column.
    #[inline]
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// True on the bottom-most tracked row (where a newline scrolls).
    #[inline]
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        self.row == 0
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({}:{})", self.row, self.col)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_bottom_left() {
        let c = Cursor::ORIGIN;
        assert_eq!(c.row, 0);
        assert_eq!(c.col, 0);
        assert!(c.is_origin());
        assert!(c.is_bottom());
    }

    #[test]
    fn new_sets_both_fields() {
        let c = Cursor::new(2, 5);
        assert_eq!(c.row, 2);
        assert_eq!(c.col, 5);
        assert!(!c.is_origin());
        assert!(!c.is_bottom());
    }

    #[test]
    fn row_start_has_zero_col() {
        let c = Cursor::row_start(4);
        assert_eq!(c, Cursor::new(4, 0));
    }

    #[test]
    fn bottom_row_with_nonzero_col() {
        let c = Cursor::new(0, 7);
        assert!(c.is_bottom());
        assert!(!c.is_origin());
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Cursor::default(), Cursor::ORIGIN);
    }

    #[test]
    fn assignment_replaces_both_fields() {
        let mut a = Cursor::new(3, 9);
        let b = Cursor::new(1, 0);
        assert_ne!(a, b);
        a = b;
        assert_eq!(a, b);
        assert_eq!(a.row, 1);
        assert_eq!(a.col, 0);
    }

    #[test]
    fn equality() {
        assert_eq!(Cursor::new(1, 2), Cursor::new(1, 2));
        assert_ne!(Cursor::new(1, 2), Cursor::new(1, 3));
        assert_ne!(Cursor::new(1, 2), Cursor::new(2, 2));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Cursor::new(2, 5)), "Cursor(2:5)");
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Cursor::new(0, 12)), "0:12");
    }

    #[test]
    fn hash_consistency() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Cursor::new(1, 2));
        set.insert(Cursor::new(1, 2)); // duplicate
        set.insert(Cursor::new(2, 1));
        assert_eq!(set.len(), 2);
    }
}
