//! Display direction of the grid's columns.
//!
//! Layout always happens in left-to-right column-index space. A renderer
//! that needs right-to-left output applies [`Direction`] once, when it turns
//! a level's cells into a display sequence.

use serde::Deserialize;

/// Horizontal display order of columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Column 0 is the leftmost column.
    #[default]
    Ltr,
    /// Column 0 is the rightmost column.
    Rtl,
}

impl Direction {
    /// Returns `true` for [`Direction::Rtl`].
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Builds the display sequence of one level.
    ///
    /// `cells` are in ascending column order. Intro cells go on the leading
    /// edge: before the cells for `Ltr`, after the reversed cells for `Rtl`.
    /// The intro cells themselves keep their order in both directions.
    ///
    /// ```
    /// use daygrid_core::direction::Direction;
    ///
    /// let ltr = Direction::Ltr.arrange(vec!["h"], vec!["a", "b"]);
    /// assert_eq!(ltr, ["h", "a", "b"]);
    ///
    /// let rtl = Direction::Rtl.arrange(vec!["h"], vec!["a", "b"]);
    /// assert_eq!(rtl, ["b", "a", "h"]);
    /// ```
    pub fn arrange<T>(self, intro: Vec<T>, cells: Vec<T>) -> Vec<T> {
        match self {
            Self::Ltr => intro.into_iter().chain(cells).collect(),
            Self::Rtl => cells.into_iter().rev().chain(intro).collect(),
        }
    }

    /// Maps a column index to its visual position, counted from the left.
    pub fn visual_col(self, col: usize, col_count: usize) -> usize {
        match self {
            Self::Ltr => col,
            Self::Rtl => col_count - 1 - col,
        }
    }
}
