//! Daygrid - Stacks calendar event segments into span-aware table rows.
//!
//! A calendar grid has a fixed number of rows (weeks) and columns (days).
//! Events are given as [`segment::Segment`]s, each confined to one row and
//! covering a contiguous range of columns. Daygrid groups the segments by
//! row, stacks overlapping segments onto separate levels, and builds a cell
//! matrix per row in which empty slots are merged vertically into fillers.
//! The result can be rendered as an HTML table or an SVG picture.
//!
//! The layout stages are available on their own in [`layout`]; the
//! [`GridBuilder`] ties them to event documents, configuration and the
//! exporters.

pub mod config;
pub mod export;
pub mod layout;
pub mod order;
pub mod source;

mod error;

pub use daygrid_core::{cell, collab, color, direction, grid, segment};

pub use error::DaygridError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, IntroCell, html::HtmlTable, svg::SvgGrid};
use layout::{RowLayout, RowLayoutEngine};
use source::Calendar;

/// Builder for parsing, laying out and rendering calendar grids.
///
/// # Examples
///
/// ```rust
/// use daygrid::{GridBuilder, config::AppConfig};
///
/// let source = r#"
///     rows = 1
///     columns = 7
///
///     [[event]]
///     title = "Offsite"
///     row = 0
///     first_col = 1
///     last_col = 3
/// "#;
///
/// let builder = GridBuilder::new(AppConfig::default());
///
/// let calendar = builder.parse(source).expect("Failed to parse");
/// let html = builder.render_html(&calendar).expect("Failed to render");
/// assert!(html.contains("Offsite"));
///
/// // Or use default config
/// let builder = GridBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct GridBuilder {
    config: AppConfig,
}

impl GridBuilder {
    /// Create a new grid builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse an event document into a [`Calendar`].
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::Parse`] for malformed documents. The error
    /// keeps `source` so the failing location can be reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daygrid::GridBuilder;
    ///
    /// let calendar = GridBuilder::default()
    ///     .parse("rows = 2\ncolumns = 7\n")
    ///     .expect("Failed to parse calendar");
    /// assert_eq!(calendar.rows(), 2);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Calendar, DaygridError> {
        info!("Parsing calendar");

        let calendar =
            source::parse(source).map_err(|err| DaygridError::new_parse_error(err, source))?;

        debug!(
            rows = calendar.rows(), columns = calendar.columns(), segments = calendar.segments().len();
            "Calendar parsed successfully",
        );
        trace!(calendar:?; "Parsed calendar");

        Ok(calendar)
    }

    /// Lay out every row of `calendar`.
    ///
    /// Segments are stacked using the configured event order, and every level
    /// receives the configured number of intro cells.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::Layout`] if a segment does not fit the grid.
    pub fn layout(&self, calendar: &Calendar) -> Result<Vec<RowLayout<IntroCell>>, DaygridError> {
        let layout_config = self.config.layout();
        let intro_columns = layout_config.intro_columns();

        let engine = RowLayoutEngine::new(calendar.rows(), calendar.columns())
            .with_order(layout_config.event_order().clone())
            .with_intro(move || (0..intro_columns).map(IntroCell::new).collect::<Vec<_>>())
            .with_options(layout_config.matrix_options());

        let rows = engine.layout(calendar.segments())?;
        info!(
            rows = rows.len(),
            levels = rows.iter().map(RowLayout::level_count).sum::<usize>();
            "Layout calculated",
        );

        Ok(rows)
    }

    /// Lay out `calendar` and render it as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns `DaygridError` for layout errors or invalid style colors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daygrid::GridBuilder;
    ///
    /// let builder = GridBuilder::default();
    /// let calendar = builder.parse("rows = 1\ncolumns = 7\n").expect("Failed to parse");
    ///
    /// let svg = builder.render_svg(&calendar).expect("Failed to render calendar");
    /// assert!(svg.contains("<svg"));
    /// ```
    pub fn render_svg(&self, calendar: &Calendar) -> Result<String, DaygridError> {
        let rows = self.layout(calendar)?;

        let exporter = SvgGrid::new(self.config.layout().direction(), self.config.style().clone());
        let svg = exporter.export(calendar, &rows)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Lay out `calendar` and render it as an HTML table.
    ///
    /// # Errors
    ///
    /// Returns `DaygridError` for layout errors.
    pub fn render_html(&self, calendar: &Calendar) -> Result<String, DaygridError> {
        let rows = self.layout(calendar)?;

        let exporter = HtmlTable::new(self.config.layout().direction());
        let html = exporter.export(calendar, &rows)?;

        info!("HTML rendered successfully");
        Ok(html)
    }
}
