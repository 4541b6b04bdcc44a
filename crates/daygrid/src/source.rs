//! Event documents.
//!
//! A calendar is described in TOML: the grid size followed by an array of
//! `[[event]]` tables.
//!
//! ```toml
//! rows = 2
//! columns = 7
//!
//! [[event]]
//! title = "Offsite"
//! row = 0
//! first_col = 1
//! last_col = 3
//! all_day = true
//! color = "#3a87ad"
//! ```
//!
//! `last_col` defaults to `first_col`, `all_day` to `false`, and `color` to
//! the style's event color.

use std::ops::Range;

use serde::Deserialize;
use thiserror::Error;

use daygrid_core::{color::Color, segment::Segment};

/// Errors raised while reading an event document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("event `{title}` has an invalid color: {message}")]
    InvalidColor { title: String, message: String },
}

impl SourceError {
    /// Returns the byte range of the source the error points at, if known.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Toml(err) => err.span(),
            Self::InvalidColor { .. } => None,
        }
    }

    /// Returns the error message without location information.
    pub fn message(&self) -> String {
        match self {
            Self::Toml(err) => err.message().to_string(),
            Self::InvalidColor { .. } => self.to_string(),
        }
    }
}

/// The renderable payload of a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    title: String,
    all_day: bool,
    color: Option<Color>,
}

impl Event {
    /// Creates a timed event with the default color.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            all_day: false,
            color: None,
        }
    }

    /// Marks the event as all-day (builder style).
    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Sets the event color (builder style).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` for all-day events.
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    /// Returns the event's own color, if it has one.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// A grid of `rows × columns` with the segments to lay out on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    rows: usize,
    columns: usize,
    segments: Vec<Segment<Event>>,
}

impl Calendar {
    /// Creates a calendar from already positioned segments.
    pub fn new(rows: usize, columns: usize, segments: Vec<Segment<Event>>) -> Self {
        Self {
            rows,
            columns,
            segments,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the segments, in document order.
    pub fn segments(&self) -> &[Segment<Event>] {
        &self.segments
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    rows: usize,
    columns: usize,
    #[serde(default, rename = "event")]
    events: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventEntry {
    title: String,
    row: usize,
    first_col: usize,
    #[serde(default)]
    last_col: Option<usize>,
    #[serde(default)]
    all_day: bool,
    #[serde(default)]
    color: Option<String>,
}

impl EventEntry {
    fn into_segment(self) -> Result<Segment<Event>, SourceError> {
        let mut event = Event::new(self.title).with_all_day(self.all_day);

        if let Some(color) = self.color {
            let color = Color::new(&color).map_err(|message| SourceError::InvalidColor {
                title: event.title.clone(),
                message,
            })?;
            event = event.with_color(color);
        }

        let last_col = self.last_col.unwrap_or(self.first_col);
        Ok(Segment::new(self.row, self.first_col, last_col, event))
    }
}

/// Parses a TOML event document.
///
/// Only the document's shape is checked here. Whether the events fit the
/// grid is checked by the layout engine.
///
/// # Errors
///
/// Returns [`SourceError`] for malformed TOML, missing or unknown fields,
/// and invalid colors.
pub fn parse(source: &str) -> Result<Calendar, SourceError> {
    let document: Document = toml::from_str(source)?;

    let segments = document
        .events
        .into_iter()
        .map(EventEntry::into_segment)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Calendar::new(document.rows, document.columns, segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let source = r##"
            rows = 2
            columns = 7

            [[event]]
            title = "Offsite"
            row = 0
            first_col = 1
            last_col = 3
            all_day = true
            color = "#3a87ad"

            [[event]]
            title = "Dentist"
            row = 1
            first_col = 4
        "##;

        let calendar = parse(source).unwrap();
        assert_eq!(calendar.rows(), 2);
        assert_eq!(calendar.columns(), 7);
        assert_eq!(calendar.segments().len(), 2);

        let offsite = &calendar.segments()[0];
        assert_eq!(offsite.row(), 0);
        assert_eq!((offsite.first_col(), offsite.last_col()), (1, 3));
        assert_eq!(offsite.payload().title(), "Offsite");
        assert!(offsite.payload().is_all_day());
        assert!(offsite.payload().color().is_some());

        let dentist = &calendar.segments()[1];
        assert_eq!((dentist.first_col(), dentist.last_col()), (4, 4));
        assert!(!dentist.payload().is_all_day());
        assert_eq!(dentist.payload().color(), None);
    }

    #[test]
    fn test_parse_without_events() {
        let calendar = parse("rows = 6\ncolumns = 7\n").unwrap();
        assert_eq!(calendar.rows(), 6);
        assert!(calendar.segments().is_empty());
    }

    #[test]
    fn test_parse_missing_field() {
        let source = "rows = 1\ncolumns = 7\n[[event]]\ntitle = \"x\"\nrow = 0\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(err, SourceError::Toml(_)));
        assert!(err.message().contains("first_col"));
    }

    #[test]
    fn test_parse_unknown_field_has_span() {
        let source = "rows = 1\ncolumns = 7\nweeks = 3\n";
        let err = parse(source).unwrap_err();
        let span = err.span().expect("unknown field is located");
        assert!(source[span].contains("weeks"));
    }

    #[test]
    fn test_parse_invalid_color() {
        let source = r#"
            rows = 1
            columns = 7

            [[event]]
            title = "Launch"
            row = 0
            first_col = 0
            color = "blurple"
        "#;

        let err = parse(source).unwrap_err();
        assert!(matches!(err, SourceError::InvalidColor { ref title, .. } if title == "Launch"));
        assert!(err.span().is_none());
    }

    #[test]
    fn test_event_builder() {
        let event = Event::new("Standup").with_all_day(true);
        assert_eq!(event.title(), "Standup");
        assert!(event.is_all_day());
    }
}
