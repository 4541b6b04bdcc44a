//! Segment-to-grid layout.
//!
//! A layout pass turns a flat list of [`Segment`]s into one [`RowLayout`] per
//! grid row. The pass runs in four stages:
//!
//! 1. [`group`]: split the segments into per-row buckets.
//! 2. [`stack`]: stack each row's segments into non-overlapping levels.
//! 3. [`matrix`]: build the level × column cell matrix of each row.
//! 4. [`engine`]: drive the stages above and collect the results.
//!
//! Input is validated up front. A single bad segment aborts the whole pass
//! with a [`LayoutError`], since a partial matrix cannot be rendered safely.

mod engine;
mod group;
mod matrix;
mod stack;

pub use engine::{RowLayout, RowLayoutEngine};
pub use group::group_rows;
pub use matrix::{MatrixOptions, RowMatrix, build_matrix};
pub use stack::{LevelAssignment, Stacking, stack_levels};

use thiserror::Error;

use daygrid_core::segment::{Segment, SegmentId};

/// Largest number of `row × column` slots a grid may have.
pub const MAX_GRID_SLOTS: usize = 1 << 20;

/// Contract violations detected before a layout pass starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("grid must have at least one column")]
    ZeroColumns,

    #[error(
        "a grid of {row_count} rows by {col_count} columns exceeds the limit of {max_slots} slots"
    )]
    GridTooLarge {
        row_count: usize,
        col_count: usize,
        max_slots: usize,
    },

    #[error("segment {segment} is on row {row}, but the grid has {row_count} rows")]
    RowOutOfRange {
        segment: SegmentId,
        row: usize,
        row_count: usize,
    },

    #[error("segment {segment} starts at column {first_col} but ends at column {last_col}")]
    InvertedSpan {
        segment: SegmentId,
        first_col: usize,
        last_col: usize,
    },

    #[error("segment {segment} ends at column {last_col}, but the grid has {col_count} columns")]
    ColumnOutOfRange {
        segment: SegmentId,
        last_col: usize,
        col_count: usize,
    },
}

/// Checks every segment against the grid geometry.
///
/// # Errors
///
/// Returns the first violation found. The grid size is checked before any
/// segment, and segments are checked in input order.
pub fn validate<P>(
    segments: &[Segment<P>],
    row_count: usize,
    col_count: usize,
) -> Result<(), LayoutError> {
    if col_count == 0 {
        return Err(LayoutError::ZeroColumns);
    }

    let fits = row_count
        .checked_mul(col_count)
        .is_some_and(|slots| slots <= MAX_GRID_SLOTS);
    if !fits {
        return Err(LayoutError::GridTooLarge {
            row_count,
            col_count,
            max_slots: MAX_GRID_SLOTS,
        });
    }

    for (index, seg) in segments.iter().enumerate() {
        let segment = SegmentId::new(index);

        if seg.row() >= row_count {
            return Err(LayoutError::RowOutOfRange {
                segment,
                row: seg.row(),
                row_count,
            });
        }

        if seg.first_col() > seg.last_col() {
            return Err(LayoutError::InvertedSpan {
                segment,
                first_col: seg.first_col(),
                last_col: seg.last_col(),
            });
        }

        if seg.last_col() >= col_count {
            return Err(LayoutError::ColumnOutOfRange {
                segment,
                last_col: seg.last_col(),
                col_count,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_valid_input() {
        let segments = vec![Segment::new(0, 0, 6, ()), Segment::new(1, 3, 3, ())];
        assert_eq!(validate(&segments, 2, 7), Ok(()));
    }

    #[test]
    fn test_validate_accepts_empty_input() {
        let segments: Vec<Segment<()>> = Vec::new();
        assert_eq!(validate(&segments, 0, 1), Ok(()));
    }

    #[test]
    fn test_validate_zero_columns() {
        let segments: Vec<Segment<()>> = Vec::new();
        assert_eq!(validate(&segments, 3, 0), Err(LayoutError::ZeroColumns));
    }

    #[test]
    fn test_validate_grid_too_large() {
        let segments: Vec<Segment<()>> = Vec::new();
        assert_eq!(
            validate(&segments, 1, 4_000_000_000_000_000_000),
            Err(LayoutError::GridTooLarge {
                row_count: 1,
                col_count: 4_000_000_000_000_000_000,
                max_slots: MAX_GRID_SLOTS,
            })
        );
        assert!(matches!(
            validate(&segments, usize::MAX, 2),
            Err(LayoutError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_grid_at_limit() {
        let segments = vec![Segment::new(0, 0, 0, ())];
        assert_eq!(validate(&segments, 1, MAX_GRID_SLOTS), Ok(()));
        assert!(validate(&segments, 2, MAX_GRID_SLOTS / 2 + 1).is_err());
    }

    #[test]
    fn test_validate_row_out_of_range() {
        let segments = vec![Segment::new(0, 0, 0, ()), Segment::new(2, 0, 0, ())];
        assert_eq!(
            validate(&segments, 2, 7),
            Err(LayoutError::RowOutOfRange {
                segment: SegmentId::new(1),
                row: 2,
                row_count: 2,
            })
        );
    }

    #[test]
    fn test_validate_inverted_span() {
        let segments = vec![Segment::new(0, 4, 2, ())];
        let err = validate(&segments, 1, 7).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvertedSpan {
                segment: SegmentId::new(0),
                first_col: 4,
                last_col: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "segment #0 starts at column 4 but ends at column 2"
        );
    }

    #[test]
    fn test_validate_column_out_of_range() {
        let segments = vec![Segment::new(0, 5, 7, ())];
        assert!(matches!(
            validate(&segments, 1, 7),
            Err(LayoutError::ColumnOutOfRange { last_col: 7, .. })
        ));
    }

    #[test]
    fn test_validate_reports_first_violation() {
        let segments = vec![Segment::new(0, 3, 1, ()), Segment::new(9, 0, 0, ())];
        assert!(matches!(
            validate(&segments, 1, 7),
            Err(LayoutError::InvertedSpan { .. })
        ));
    }
}
