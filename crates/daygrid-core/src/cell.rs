//! Matrix cells produced by the row layout.
//!
//! Every `(level, col)` slot of a row's matrix refers to exactly one [`Cell`]
//! through a [`CellId`]. Cells are stored in a per-row arena, so a cell that
//! covers several slots (a multi-column segment, or a filler whose row span
//! has grown) is shared by id rather than by reference.

use crate::segment::SegmentId;

/// Index of a cell in a row's cell arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// Creates an id from an arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// The cell renders the given segment.
    Segment(SegmentId),
    /// Placeholder for a column with no segment at this level.
    Filler,
}

/// A rectangular region of a row's level × column matrix.
///
/// The rectangle starts at (`level`, `first_col`) and covers `row_span`
/// levels downward and `col_span` columns to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    level: usize,
    first_col: usize,
    col_span: usize,
    row_span: usize,
}

impl Cell {
    /// Creates a segment cell covering `first_col..=last_col` on `level`.
    pub fn segment(id: SegmentId, level: usize, first_col: usize, last_col: usize) -> Self {
        Self {
            kind: CellKind::Segment(id),
            level,
            first_col,
            col_span: last_col - first_col + 1,
            row_span: 1,
        }
    }

    /// Creates a single-column filler cell.
    pub fn filler(level: usize, col: usize) -> Self {
        Self {
            kind: CellKind::Filler,
            level,
            first_col: col,
            col_span: 1,
            row_span: 1,
        }
    }

    /// Extends the cell one level further down.
    pub fn grow_row_span(&mut self) {
        self.row_span += 1;
    }

    /// Returns the kind of the cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the segment backing this cell, if any.
    pub fn segment_id(&self) -> Option<SegmentId> {
        match self.kind {
            CellKind::Segment(id) => Some(id),
            CellKind::Filler => None,
        }
    }

    /// Returns `true` for filler cells.
    pub fn is_filler(&self) -> bool {
        matches!(self.kind, CellKind::Filler)
    }

    /// Returns the level the cell starts on.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the first covered column.
    pub fn first_col(&self) -> usize {
        self.first_col
    }

    /// Returns the last covered column (inclusive).
    pub fn last_col(&self) -> usize {
        self.first_col + self.col_span - 1
    }

    /// Returns the number of covered columns.
    pub fn col_span(&self) -> usize {
        self.col_span
    }

    /// Returns the number of covered levels.
    pub fn row_span(&self) -> usize {
        self.row_span
    }

    /// Returns `true` if the cell's rectangle contains (`level`, `col`).
    pub fn covers(&self, level: usize, col: usize) -> bool {
        (self.level..self.level + self.row_span).contains(&level)
            && (self.first_col..=self.last_col()).contains(&col)
    }
}
