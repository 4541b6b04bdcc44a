//! Stacking of a row's segments into vertical levels.
//!
//! Segments are visited in display-priority order and each one drops into
//! the topmost level where it overlaps nothing. The level a segment lands on
//! is recorded in a [`LevelAssignment`] side-table; the segments themselves
//! are never touched.

use std::cmp::Ordering;

use indexmap::IndexMap;
use log::trace;

use daygrid_core::{
    collab::SegmentOrder,
    segment::{Segment, SegmentId},
};

/// Level each segment of a row was stacked on.
///
/// Entries are kept in stacking order, i.e. the order produced by the
/// ordering preference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelAssignment(IndexMap<SegmentId, usize>);

impl LevelAssignment {
    /// Returns the level of `id`, or `None` if the segment is not in this row.
    pub fn level_of(&self, id: SegmentId) -> Option<usize> {
        self.0.get(&id).copied()
    }

    /// Returns the number of assigned segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no segment was assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(segment, level)` pairs in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, usize)> + '_ {
        self.0.iter().map(|(id, level)| (*id, *level))
    }
}

/// Result of stacking one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stacking {
    levels: Vec<Vec<SegmentId>>,
    assignment: LevelAssignment,
}

impl Stacking {
    /// Returns the levels, top first. Each level is in column order.
    ///
    /// A row without segments has no levels.
    pub fn levels(&self) -> &[Vec<SegmentId>] {
        &self.levels
    }

    /// Returns the level side-table.
    pub fn assignment(&self) -> &LevelAssignment {
        &self.assignment
    }

    /// Splits the stacking into its levels and side-table.
    pub fn into_parts(self) -> (Vec<Vec<SegmentId>>, LevelAssignment) {
        (self.levels, self.assignment)
    }
}

/// Stacks the segments `row` of `segments` into levels.
///
/// The segments are first sorted with `order` (stable, so ties keep their
/// input order). Each segment then goes to the lowest level where it
/// collides with none of the segments already placed there, or onto a new
/// level at the bottom. Finally every level is put in left-to-right order.
pub fn stack_levels<P, O>(row: &[SegmentId], segments: &[Segment<P>], order: &O) -> Stacking
where
    O: SegmentOrder<P> + ?Sized,
{
    let mut ordered = row.to_vec();
    ordered.sort_by(|a, b| order.compare(&segments[a.index()], &segments[b.index()]));

    let mut levels: Vec<Vec<SegmentId>> = Vec::new();
    let mut assignment = IndexMap::with_capacity(ordered.len());

    for id in ordered {
        let seg = &segments[id.index()];

        let level = levels
            .iter()
            .position(|level| !collides_with_level(seg, level, segments))
            .unwrap_or(levels.len());

        if level == levels.len() {
            levels.push(Vec::new());
        }

        trace!(
            segment:% = id, level, first_col = seg.first_col(), last_col = seg.last_col();
            "Stacked segment",
        );

        levels[level].push(id);
        assignment.insert(id, level);
    }

    for level in &mut levels {
        level.sort_by(|a, b| compare_cols(&segments[a.index()], &segments[b.index()]));
    }

    Stacking {
        levels,
        assignment: LevelAssignment(assignment),
    }
}

fn collides_with_level<P>(seg: &Segment<P>, level: &[SegmentId], segments: &[Segment<P>]) -> bool {
    level
        .iter()
        .any(|other| seg.collides_with(&segments[other.index()]))
}

/// Left-to-right order of the segments of one level.
///
/// Compares `a`'s first column against `b`'s last column. Segments of a
/// level never overlap, which makes this a total order there.
fn compare_cols<P>(a: &Segment<P>, b: &Segment<P>) -> Ordering {
    a.first_col().cmp(&b.last_col())
}
