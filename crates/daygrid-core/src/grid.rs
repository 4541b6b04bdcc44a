//! Fixed-size two-dimensional lookup tables.
//!
//! Both the level count and the column count of a row are known before its
//! matrix is built, so lookups are stored in a flat, row-major [`Grid`]
//! instead of nested vectors.

use std::ops::{Index, IndexMut};

/// A `levels × cols` table indexed by `(level, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    levels: usize,
    cols: usize,
    slots: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every slot set to `value`.
    pub fn filled(levels: usize, cols: usize, value: T) -> Self {
        Self {
            levels,
            cols,
            slots: vec![value; levels * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid from row-major slots.
    ///
    /// # Panics
    ///
    /// Panics if `slots` does not hold exactly `levels * cols` values.
    pub fn from_slots(levels: usize, cols: usize, slots: Vec<T>) -> Self {
        assert_eq!(
            slots.len(),
            levels * cols,
            "a {levels}x{cols} grid needs {} slots",
            levels * cols
        );
        Self {
            levels,
            cols,
            slots,
        }
    }

    /// Returns the number of levels (rows of the table).
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the slot at (`level`, `col`), or `None` when out of bounds.
    pub fn get(&self, level: usize, col: usize) -> Option<&T> {
        self.offset(level, col).map(|offset| &self.slots[offset])
    }

    /// Returns a mutable slot at (`level`, `col`), or `None` when out of bounds.
    pub fn get_mut(&mut self, level: usize, col: usize) -> Option<&mut T> {
        self.offset(level, col).map(|offset| &mut self.slots[offset])
    }

    /// Returns the slots of one level, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of bounds.
    pub fn level(&self, level: usize) -> &[T] {
        let start = level * self.cols;
        &self.slots[start..start + self.cols]
    }

    /// Iterates over all levels from top to bottom.
    pub fn iter_levels(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` keeps `chunks` valid for zero-column grids, which hold no slots.
        self.slots.chunks(self.cols.max(1)).take(self.levels)
    }

    fn offset(&self, level: usize, col: usize) -> Option<usize> {
        (level < self.levels && col < self.cols).then(|| level * self.cols + col)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (level, col): (usize, usize)) -> &Self::Output {
        self.get(level, col).unwrap_or_else(|| {
            panic!(
                "grid index ({level}, {col}) out of bounds for {}x{} grid",
                self.levels, self.cols
            )
        })
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (level, col): (usize, usize)) -> &mut Self::Output {
        let (levels, cols) = (self.levels, self.cols);
        self.get_mut(level, col).unwrap_or_else(|| {
            panic!("grid index ({level}, {col}) out of bounds for {levels}x{cols} grid")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_grid() {
        let grid = Grid::filled(2, 3, 0u8);
        assert_eq!(grid.levels(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.level(1), &[0, 0, 0]);
    }

    #[test]
    fn test_index_and_mutation() {
        let mut grid = Grid::filled(2, 2, None);
        grid[(1, 0)] = Some('a');
        assert_eq!(grid[(1, 0)], Some('a'));
        assert_eq!(grid.get(0, 0), Some(&None));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_iter_levels() {
        let mut grid = Grid::filled(3, 2, 0);
        grid[(2, 1)] = 9;
        let levels: Vec<_> = grid.iter_levels().collect();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[2], &[0, 9]);
    }

    #[test]
    fn test_from_slots() {
        let grid = Grid::from_slots(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(grid[(0, 1)], 2);
        assert_eq!(grid[(1, 0)], 3);
    }

    #[test]
    #[should_panic(expected = "needs 4 slots")]
    fn test_from_slots_wrong_length_panics() {
        let _ = Grid::from_slots(2, 2, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::filled(1, 1, 0);
        let _ = grid[(0, 1)];
    }
}
