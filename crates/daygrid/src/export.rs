//! Rendering of row layouts.
//!
//! Exporters consume the [`RowLayout`]s produced by the layout engine and
//! never re-run any layout logic. Column order in the layouts is always left
//! to right; each exporter applies the display [`Direction`] itself.
//!
//! [`Direction`]: daygrid_core::direction::Direction

pub mod html;
pub mod svg;

use std::fmt;

use thiserror::Error;

use daygrid_core::segment::SegmentId;

use crate::{
    layout::RowLayout,
    source::{Calendar, Event},
};

/// Errors raised while rendering.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Formatting error: {0}")]
    Format(#[from] fmt::Error),
}

/// A spacer cell at the leading edge of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroCell {
    index: usize,
}

impl IntroCell {
    /// Creates the `index`-th intro cell of a level.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the position among the level's intro cells.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Turns laid out rows into a document.
pub trait Exporter {
    /// Renders `rows`, the layout of `calendar`, to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the layout does not belong to `calendar` or the
    /// style cannot be applied.
    fn export(&self, calendar: &Calendar, rows: &[RowLayout<IntroCell>]) -> Result<String, Error>;
}

/// Looks up the event rendered by segment `id`.
fn event_of(calendar: &Calendar, id: SegmentId) -> Result<&Event, Error> {
    calendar
        .segments()
        .get(id.index())
        .map(|seg| seg.payload())
        .ok_or_else(|| {
            Error::Render(format!(
                "segment {id} is not part of the calendar ({} segments)",
                calendar.segments().len()
            ))
        })
}
