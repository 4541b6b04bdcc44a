//! Grouping of segments into per-row buckets.

use daygrid_core::segment::{Segment, SegmentId};

/// Splits `segments` into `row_count` buckets of segment ids.
///
/// Bucket `r` holds the ids of all segments on row `r`, in input order.
///
/// # Panics
///
/// Panics if a segment's row is not below `row_count`. Callers run
/// [`validate`](super::validate) first.
pub fn group_rows<P>(segments: &[Segment<P>], row_count: usize) -> Vec<Vec<SegmentId>> {
    let mut rows = vec![Vec::new(); row_count];

    for (index, seg) in segments.iter().enumerate() {
        rows[seg.row()].push(SegmentId::new(index));
    }

    rows
}
