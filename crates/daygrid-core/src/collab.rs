//! Collaborator contracts consumed by the layout engine.
//!
//! The engine does not decide which events deserve the top levels, nor what
//! goes into a row's leading cells. Both are supplied by the caller:
//!
//! - [`SegmentOrder`]: display priority used to sort a row before stacking.
//! - [`IntroCells`]: cells injected at the leading edge of every level.
//!
//! Plain closures implement both traits.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use daygrid_core::{
//!     collab::{IntroCells, SegmentOrder},
//!     segment::Segment,
//! };
//!
//! let longest_first = |a: &Segment<()>, b: &Segment<()>| b.col_span().cmp(&a.col_span());
//! let a = Segment::new(0, 0, 3, ());
//! let b = Segment::new(0, 1, 1, ());
//! assert_eq!(longest_first.compare(&a, &b), Ordering::Less);
//!
//! let week_number = || vec!["W12"];
//! assert_eq!(week_number.intro_cells(), ["W12"]);
//! ```

use std::cmp::Ordering;

use crate::segment::Segment;

/// Display priority of segments within a row.
///
/// Segments that compare as [`Ordering::Less`] are stacked first and so get
/// the first claim on the upper levels. Sorting is stable, so segments that
/// compare equal keep their input order.
pub trait SegmentOrder<P> {
    /// Compares two segments of the same row.
    fn compare(&self, a: &Segment<P>, b: &Segment<P>) -> Ordering;
}

impl<P, F> SegmentOrder<P> for F
where
    F: Fn(&Segment<P>, &Segment<P>) -> Ordering,
{
    fn compare(&self, a: &Segment<P>, b: &Segment<P>) -> Ordering {
        self(a, b)
    }
}

/// Keeps segments in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl<P> SegmentOrder<P> for InputOrder {
    fn compare(&self, _a: &Segment<P>, _b: &Segment<P>) -> Ordering {
        Ordering::Equal
    }
}

/// Provider of non-segment cells placed at the leading edge of each level.
///
/// The provider is called once per level of every row and must return the
/// same cells on every call within one layout pass.
pub trait IntroCells {
    /// The cell type handed to the renderer.
    type Cell;

    /// Returns the intro cells for one level.
    fn intro_cells(&self) -> Vec<Self::Cell>;
}

impl<C, F> IntroCells for F
where
    F: Fn() -> Vec<C>,
{
    type Cell = C;

    fn intro_cells(&self) -> Vec<C> {
        self()
    }
}

/// Provides no intro cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntro;

impl IntroCells for NoIntro {
    type Cell = ();

    fn intro_cells(&self) -> Vec<()> {
        Vec::new()
    }
}
