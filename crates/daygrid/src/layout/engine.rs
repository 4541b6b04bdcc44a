//! Row layout engine.
//!
//! [`RowLayoutEngine`] validates the input, groups segments by row, stacks
//! each row into levels and builds its cell matrix. Rows are laid out
//! independently of each other and returned in row order.

use log::{debug, info};

use daygrid_core::{
    cell::{Cell, CellId},
    collab::{InputOrder, IntroCells, NoIntro, SegmentOrder},
    grid::Grid,
    segment::{Segment, SegmentId},
};

use super::{
    LayoutError, LevelAssignment, MatrixOptions, build_matrix, group_rows, stack_levels, validate,
};

/// Layout result for one row of the grid.
///
/// A row always has at least one level, even when it holds no segments.
#[derive(Debug, Clone)]
pub struct RowLayout<I> {
    row: usize,
    segments: Vec<SegmentId>,
    levels: Vec<Vec<SegmentId>>,
    assignment: LevelAssignment,
    cells: Vec<Cell>,
    cell_matrix: Grid<CellId>,
    seg_matrix: Grid<Option<SegmentId>>,
    placements: Vec<Vec<CellId>>,
    intro: Vec<Vec<I>>,
}

impl<I> RowLayout<I> {
    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the ids of the row's segments, in input order.
    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    /// Returns the number of levels (at least one).
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns the number of columns.
    pub fn col_count(&self) -> usize {
        self.cell_matrix.cols()
    }

    /// Returns the segments of every level, top first, each in column order.
    pub fn levels(&self) -> &[Vec<SegmentId>] {
        &self.levels
    }

    /// Returns the level `id` was stacked on.
    pub fn level_of(&self, id: SegmentId) -> Option<usize> {
        self.assignment.level_of(id)
    }

    /// Returns the level side-table.
    pub fn assignment(&self) -> &LevelAssignment {
        &self.assignment
    }

    /// Returns the cell arena.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns a cell by id.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Returns the cell covering (`level`, `col`), if the slot exists.
    pub fn cell_at(&self, level: usize, col: usize) -> Option<&Cell> {
        self.cell_matrix.get(level, col).map(|id| self.cell(*id))
    }

    /// Returns the segment rendered at (`level`, `col`), if any.
    pub fn segment_at(&self, level: usize, col: usize) -> Option<SegmentId> {
        self.seg_matrix.get(level, col).copied().flatten()
    }

    /// Returns the cell lookup, indexed by `(level, col)`.
    pub fn cell_matrix(&self) -> &Grid<CellId> {
        &self.cell_matrix
    }

    /// Returns the segment lookup, indexed by `(level, col)`.
    pub fn seg_matrix(&self) -> &Grid<Option<SegmentId>> {
        &self.seg_matrix
    }

    /// Iterates over the cells starting on `level`, left to right.
    ///
    /// These are the cells a table renderer emits for the level's table
    /// row; slots covered by a cell from a level above are skipped.
    pub fn placed_cells(&self, level: usize) -> impl Iterator<Item = &Cell> {
        self.placements
            .get(level)
            .into_iter()
            .flatten()
            .map(|id| self.cell(*id))
    }

    /// Returns the intro cells of `level`.
    pub fn intro_cells(&self, level: usize) -> &[I] {
        self.intro.get(level).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Lays out segments into rows of stacked levels.
///
/// # Examples
///
/// ```
/// use daygrid::layout::RowLayoutEngine;
/// use daygrid_core::segment::Segment;
///
/// let segments = vec![
///     Segment::new(0, 0, 4, "Conference"),
///     Segment::new(0, 2, 3, "Dentist"),
///     Segment::new(1, 6, 6, "Party"),
/// ];
///
/// let rows = RowLayoutEngine::new(2, 7)
///     .with_order(|a: &Segment<_>, b: &Segment<_>| b.col_span().cmp(&a.col_span()))
///     .layout(&segments)
///     .expect("valid segments");
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].level_count(), 2);
/// assert_eq!(rows[1].level_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RowLayoutEngine<O = InputOrder, N = NoIntro> {
    row_count: usize,
    col_count: usize,
    order: O,
    intro: N,
    options: MatrixOptions,
}

impl RowLayoutEngine {
    /// Creates an engine for a `row_count × col_count` grid that keeps
    /// segments in input order and adds no intro cells.
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Self {
            row_count,
            col_count,
            order: InputOrder,
            intro: NoIntro,
            options: MatrixOptions::default(),
        }
    }
}

impl<O, N> RowLayoutEngine<O, N> {
    /// Sets the ordering preference applied to every row before stacking.
    pub fn with_order<O2>(self, order: O2) -> RowLayoutEngine<O2, N> {
        RowLayoutEngine {
            row_count: self.row_count,
            col_count: self.col_count,
            order,
            intro: self.intro,
            options: self.options,
        }
    }

    /// Sets the provider of intro cells.
    pub fn with_intro<N2: IntroCells>(self, intro: N2) -> RowLayoutEngine<O, N2> {
        RowLayoutEngine {
            row_count: self.row_count,
            col_count: self.col_count,
            order: self.order,
            intro,
            options: self.options,
        }
    }

    /// Sets the matrix construction options.
    pub fn with_options(mut self, options: MatrixOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Lays out `segments`, one [`RowLayout`] per row, in row order.
    ///
    /// Segment ids in the result are indices into `segments`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if any segment lies outside the grid or has an
    /// inverted column range, or if the grid has no columns. Nothing is laid
    /// out in that case.
    pub fn layout<P>(&self, segments: &[Segment<P>]) -> Result<Vec<RowLayout<N::Cell>>, LayoutError>
    where
        O: SegmentOrder<P>,
        N: IntroCells,
    {
        info!(
            segments = segments.len(), rows = self.row_count, cols = self.col_count;
            "Laying out segments",
        );

        validate(segments, self.row_count, self.col_count)?;

        let rows = group_rows(segments, self.row_count)
            .into_iter()
            .enumerate()
            .map(|(row, ids)| self.layout_row(row, ids, segments))
            .collect();

        Ok(rows)
    }

    fn layout_row<P>(
        &self,
        row: usize,
        ids: Vec<SegmentId>,
        segments: &[Segment<P>],
    ) -> RowLayout<N::Cell>
    where
        O: SegmentOrder<P>,
        N: IntroCells,
    {
        let (mut levels, assignment) = stack_levels(&ids, segments, &self.order).into_parts();

        // A row without segments still renders one empty level.
        if levels.is_empty() {
            levels.push(Vec::new());
        }

        let matrix = build_matrix(&levels, segments, self.col_count, &self.intro, self.options);
        let (cells, cell_matrix, seg_matrix, placements, intro) = matrix.into_parts();

        debug!(
            row, segments = ids.len(), levels = levels.len(), cells = cells.len();
            "Row laid out",
        );

        RowLayout {
            row,
            segments: ids,
            levels,
            assignment,
            cells,
            cell_matrix,
            seg_matrix,
            placements,
            intro,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    const COLS: usize = 7;
    const ROWS: usize = 3;

    // ===================
    // Strategies
    // ===================

    fn segment_strategy() -> impl Strategy<Value = Segment<()>> {
        (0..ROWS, 0..COLS, 0..COLS).prop_map(|(row, a, b)| Segment::new(row, a.min(b), a.max(b), ()))
    }

    fn segments_strategy() -> impl Strategy<Value = Vec<Segment<()>>> {
        prop::collection::vec(segment_strategy(), 0..24)
    }

    fn by_start(a: &Segment<()>, b: &Segment<()>) -> std::cmp::Ordering {
        a.first_col().cmp(&b.first_col())
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every slot is covered by exactly one cell, and that cell's rectangle
    /// contains the slot.
    fn check_matrix_is_complete_partition(
        segments: &[Segment<()>],
        options: MatrixOptions,
    ) -> Result<(), TestCaseError> {
        let rows = RowLayoutEngine::new(ROWS, COLS)
            .with_options(options)
            .layout(segments)
            .unwrap();

        for row in &rows {
            prop_assert!(row.level_count() >= 1);

            let mut covered = Grid::filled(row.level_count(), COLS, 0usize);
            for cell in row.cells() {
                for level in cell.level()..cell.level() + cell.row_span() {
                    for col in cell.first_col()..=cell.last_col() {
                        covered[(level, col)] += 1;
                    }
                }
            }

            for level in 0..row.level_count() {
                for col in 0..COLS {
                    prop_assert_eq!(covered[(level, col)], 1, "slot ({}, {})", level, col);
                    prop_assert!(row.cell_at(level, col).unwrap().covers(level, col));
                }
            }
        }
        Ok(())
    }

    /// Segments sharing a level never overlap, and appear in ascending
    /// column order.
    fn check_levels_disjoint_and_ordered(segments: &[Segment<()>]) -> Result<(), TestCaseError> {
        let rows = RowLayoutEngine::new(ROWS, COLS).layout(segments).unwrap();

        for row in &rows {
            for level in row.levels() {
                for pair in level.windows(2) {
                    let left = &segments[pair[0].index()];
                    let right = &segments[pair[1].index()];
                    prop_assert!(left.last_col() < right.first_col());
                }
            }
        }
        Ok(())
    }

    /// Overlapping segments of one row are never assigned the same level.
    fn check_overlapping_segments_split(segments: &[Segment<()>]) -> Result<(), TestCaseError> {
        let rows = RowLayoutEngine::new(ROWS, COLS).layout(segments).unwrap();

        for row in &rows {
            for (i, &a) in row.segments().iter().enumerate() {
                for &b in &row.segments()[i + 1..] {
                    if segments[a.index()].collides_with(&segments[b.index()]) {
                        prop_assert_ne!(row.level_of(a), row.level_of(b));
                    }
                }
            }
        }
        Ok(())
    }

    /// Stacking by ascending start column uses exactly as many levels as the
    /// deepest column overlap.
    fn check_level_count_is_minimal(segments: &[Segment<()>]) -> Result<(), TestCaseError> {
        let rows = RowLayoutEngine::new(ROWS, COLS)
            .with_order(by_start)
            .layout(segments)
            .unwrap();

        for row in &rows {
            let depth = (0..COLS)
                .map(|col| {
                    row.segments()
                        .iter()
                        .filter(|id| {
                            let seg = &segments[id.index()];
                            (seg.first_col()..=seg.last_col()).contains(&col)
                        })
                        .count()
                })
                .max()
                .unwrap_or(0);

            prop_assert_eq!(row.level_count(), depth.max(1));
        }
        Ok(())
    }

    /// The segment lookup agrees with the level assignment.
    fn check_seg_matrix_matches_levels(segments: &[Segment<()>]) -> Result<(), TestCaseError> {
        let rows = RowLayoutEngine::new(ROWS, COLS).layout(segments).unwrap();

        for row in &rows {
            for &id in row.segments() {
                let seg = &segments[id.index()];
                let level = row.level_of(id).unwrap();
                for col in seg.first_col()..=seg.last_col() {
                    prop_assert_eq!(row.segment_at(level, col), Some(id));
                }
            }
            let occupied = row.seg_matrix().iter_levels().flatten().flatten().count();
            let expected: usize = row
                .segments()
                .iter()
                .map(|id| segments[id.index()].col_span())
                .sum();
            prop_assert_eq!(occupied, expected);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn matrix_is_complete_partition(segments in segments_strategy()) {
            check_matrix_is_complete_partition(&segments, MatrixOptions::default())?;
        }

        #[test]
        fn matrix_is_complete_partition_with_single_column_growth(segments in segments_strategy()) {
            let options = MatrixOptions::default().with_single_column_growth(true);
            check_matrix_is_complete_partition(&segments, options)?;
        }

        #[test]
        fn levels_disjoint_and_ordered(segments in segments_strategy()) {
            check_levels_disjoint_and_ordered(&segments)?;
        }

        #[test]
        fn overlapping_segments_split(segments in segments_strategy()) {
            check_overlapping_segments_split(&segments)?;
        }

        #[test]
        fn level_count_is_minimal(segments in segments_strategy()) {
            check_level_count_is_minimal(&segments)?;
        }

        #[test]
        fn seg_matrix_matches_levels(segments in segments_strategy()) {
            check_seg_matrix_matches_levels(&segments)?;
        }
    }
}
