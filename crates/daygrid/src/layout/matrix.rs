//! Cell matrix construction for one row.
//!
//! The matrix has one line per level and one slot per column. Levels are
//! built top to bottom; within a level a cursor walks the columns left to
//! right, placing a segment cell for every segment and filler cells in the
//! gaps between them.
//!
//! A filler directly below another filler does not get a cell of its own:
//! the filler above grows its row span instead, so a run of empty slots in
//! one column is painted as a single tall cell.

use std::mem;

use log::trace;

use daygrid_core::{
    cell::{Cell, CellId},
    collab::IntroCells,
    grid::Grid,
    segment::{Segment, SegmentId},
};

/// Tuning knobs for matrix construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixOptions {
    grow_single_column_segments: bool,
}

impl MatrixOptions {
    /// Lets single-column segment cells grow their row span over the empty
    /// slots below them, the same way filler cells do.
    pub fn with_single_column_growth(mut self, enabled: bool) -> Self {
        self.grow_single_column_segments = enabled;
        self
    }

    /// Returns `true` if single-column segment cells may grow.
    pub fn grows_single_column_segments(&self) -> bool {
        self.grow_single_column_segments
    }
}

/// The cell matrix of one row.
#[derive(Debug, Clone)]
pub struct RowMatrix<I> {
    cells: Vec<Cell>,
    cell_matrix: Grid<CellId>,
    seg_matrix: Grid<Option<SegmentId>>,
    placements: Vec<Vec<CellId>>,
    intro: Vec<Vec<I>>,
}

impl<I> RowMatrix<I> {
    /// Returns the cell arena.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell covering each `(level, col)` slot.
    pub fn cell_matrix(&self) -> &Grid<CellId> {
        &self.cell_matrix
    }

    /// Returns the segment rendered at each `(level, col)` slot.
    pub fn seg_matrix(&self) -> &Grid<Option<SegmentId>> {
        &self.seg_matrix
    }

    /// Returns, per level, the cells whose top edge is on that level, in
    /// column order.
    pub fn placements(&self) -> &[Vec<CellId>] {
        &self.placements
    }

    /// Returns the intro cells of each level.
    pub fn intro(&self) -> &[Vec<I>] {
        &self.intro
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<Cell>,
        Grid<CellId>,
        Grid<Option<SegmentId>>,
        Vec<Vec<CellId>>,
        Vec<Vec<I>>,
    ) {
        (
            self.cells,
            self.cell_matrix,
            self.seg_matrix,
            self.placements,
            self.intro,
        )
    }
}

/// Builds the cell matrix of one row.
///
/// `levels` must hold at least one level, each in column order with no
/// overlapping segments (as produced by [`stack_levels`](super::stack_levels)),
/// and every segment must end before `col_count`.
pub fn build_matrix<P, N>(
    levels: &[Vec<SegmentId>],
    segments: &[Segment<P>],
    col_count: usize,
    intro: &N,
    options: MatrixOptions,
) -> RowMatrix<N::Cell>
where
    N: IntroCells + ?Sized,
{
    let mut builder = MatrixBuilder::new(col_count, options, levels.len());
    let mut intro_cells = Vec::with_capacity(levels.len());

    for (level, level_segs) in levels.iter().enumerate() {
        builder.build_level(level, level_segs, segments);
        intro_cells.push(intro.intro_cells());
    }

    builder.finish(levels.len(), intro_cells)
}

struct MatrixBuilder {
    col_count: usize,
    options: MatrixOptions,
    cells: Vec<Cell>,
    cell_slots: Vec<CellId>,
    seg_slots: Vec<Option<SegmentId>>,
    placements: Vec<Vec<CellId>>,
    /// Single-column cells of the previous level, by column.
    lone_above: Vec<Option<CellId>>,
    /// Single-column cells of the current level, by column.
    lone: Vec<Option<CellId>>,
}

impl MatrixBuilder {
    fn new(col_count: usize, options: MatrixOptions, level_count: usize) -> Self {
        Self {
            col_count,
            options,
            cells: Vec::new(),
            cell_slots: Vec::with_capacity(level_count * col_count),
            seg_slots: Vec::with_capacity(level_count * col_count),
            placements: Vec::with_capacity(level_count),
            lone_above: vec![None; col_count],
            lone: vec![None; col_count],
        }
    }

    fn build_level<P>(&mut self, level: usize, level_segs: &[SegmentId], segments: &[Segment<P>]) {
        let mut placed = Vec::new();
        let mut col = 0;

        for &id in level_segs {
            let seg = &segments[id.index()];

            col = self.fill_gap(level, col, seg.first_col(), &mut placed);

            let cell_id = self.alloc(Cell::segment(id, level, seg.first_col(), seg.last_col()));
            if self.options.grow_single_column_segments && seg.col_span() == 1 {
                self.lone[col] = Some(cell_id);
            }

            trace!(
                segment:% = id, level, first_col = seg.first_col(), last_col = seg.last_col();
                "Placed segment cell",
            );

            while col <= seg.last_col() {
                self.cell_slots.push(cell_id);
                self.seg_slots.push(Some(id));
                col += 1;
            }
            placed.push(cell_id);
        }

        self.fill_gap(level, col, self.col_count, &mut placed);

        self.placements.push(placed);
        self.lone_above = mem::replace(&mut self.lone, vec![None; self.col_count]);
    }

    /// Covers `from..until` of `level` with filler cells and returns `until`.
    fn fill_gap(
        &mut self,
        level: usize,
        from: usize,
        until: usize,
        placed: &mut Vec<CellId>,
    ) -> usize {
        for col in from..until {
            let cell_id = match self.lone_above[col] {
                Some(above) => {
                    self.cells[above.index()].grow_row_span();
                    above
                }
                None => {
                    let fresh = self.alloc(Cell::filler(level, col));
                    placed.push(fresh);
                    fresh
                }
            };

            self.cell_slots.push(cell_id);
            self.seg_slots.push(None);
            self.lone[col] = Some(cell_id);
        }

        until.max(from)
    }

    fn alloc(&mut self, cell: Cell) -> CellId {
        let id = CellId::new(self.cells.len());
        self.cells.push(cell);
        id
    }

    fn finish<I>(self, level_count: usize, intro: Vec<Vec<I>>) -> RowMatrix<I> {
        RowMatrix {
            cells: self.cells,
            cell_matrix: Grid::from_slots(level_count, self.col_count, self.cell_slots),
            seg_matrix: Grid::from_slots(level_count, self.col_count, self.seg_slots),
            placements: self.placements,
            intro,
        }
    }
}
