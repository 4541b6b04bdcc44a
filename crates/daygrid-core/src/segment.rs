//! Segments: the placements of events on a single grid row.
//!
//! A [`Segment`] is what the layout engine consumes. It carries the row it
//! belongs to, the inclusive column range it covers, and an opaque payload
//! that only the rendering layer looks at.
//!
//! # Example
//!
//! ```
//! use daygrid_core::segment::Segment;
//!
//! let meeting = Segment::new(0, 1, 3, "Planning");
//! let lunch = Segment::new(0, 3, 3, "Lunch");
//! let review = Segment::new(0, 4, 5, "Review");
//!
//! assert!(meeting.collides_with(&lunch));
//! assert!(!meeting.collides_with(&review));
//! assert_eq!(meeting.col_span(), 3);
//! ```

use std::fmt;

/// Identity of a segment within one layout pass.
///
/// The id is the segment's index in the slice handed to the layout engine,
/// so it is only meaningful together with that slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

impl SegmentId {
    /// Creates an id from an index into the input slice.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index into the input slice.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A time span placed on one row of the grid.
///
/// `first_col` and `last_col` are inclusive. The layout engine never changes
/// the geometry of a segment; the level it is stacked on is reported
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<P> {
    row: usize,
    first_col: usize,
    last_col: usize,
    payload: P,
}

impl<P> Segment<P> {
    /// Creates a new segment on `row` covering `first_col..=last_col`.
    ///
    /// The range is not validated here. The layout engine rejects inverted
    /// or out-of-range segments before doing any work.
    pub fn new(row: usize, first_col: usize, last_col: usize, payload: P) -> Self {
        Self {
            row,
            first_col,
            last_col,
            payload,
        }
    }

    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the first covered column.
    pub fn first_col(&self) -> usize {
        self.first_col
    }

    /// Returns the last covered column (inclusive).
    pub fn last_col(&self) -> usize {
        self.last_col
    }

    /// Returns the number of covered columns.
    pub fn col_span(&self) -> usize {
        self.last_col.saturating_sub(self.first_col) + 1
    }

    /// Returns the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns `true` if the two column ranges overlap.
    ///
    /// Both segments are assumed to be on the same row; the row is not
    /// compared.
    pub fn collides_with<Q>(&self, other: &Segment<Q>) -> bool {
        other.first_col <= self.last_col && other.last_col >= self.first_col
    }
}
