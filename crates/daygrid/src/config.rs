//! Configuration types for Daygrid layout and rendering.
//!
//! This module provides configuration structures that control how segments
//! are stacked and how the resulting grid is drawn. All types implement
//! [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Direction, event ordering and matrix options.
//! - [`StyleConfig`] - Colors and cell dimensions used by the exporters.
//!
//! # Example
//!
//! ```
//! # use daygrid::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     direction = "rtl"
//!     event_order = ["-span", "start"]
//!
//!     [style]
//!     cell_width = 90.0
//! "#).unwrap();
//!
//! assert!(config.layout().direction().is_rtl());
//! assert_eq!(config.style().cell_width(), 90.0);
//! ```

use serde::Deserialize;

use daygrid_core::{color::Color, direction::Direction};

use crate::{layout::MatrixOptions, order::EventOrder};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout settings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Display direction of the columns.
    #[serde(default)]
    direction: Direction,

    /// Stacking preference, most significant criterion first.
    #[serde(default)]
    event_order: EventOrder,

    /// Number of intro cells placed at the leading edge of every level.
    #[serde(default)]
    intro_columns: usize,

    /// Let single-column event cells grow over the empty slots below them.
    #[serde(default)]
    grow_single_column_segments: bool,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(direction: Direction, event_order: EventOrder, intro_columns: usize) -> Self {
        Self {
            direction,
            event_order,
            intro_columns,
            grow_single_column_segments: false,
        }
    }

    /// Enables or disables single-column segment growth (builder style).
    pub fn with_single_column_growth(mut self, enabled: bool) -> Self {
        self.grow_single_column_segments = enabled;
        self
    }

    /// Returns the display direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the stacking preference.
    pub fn event_order(&self) -> &EventOrder {
        &self.event_order
    }

    /// Returns the number of intro cells per level.
    pub fn intro_columns(&self) -> usize {
        self.intro_columns
    }

    /// Returns the matrix options derived from this configuration.
    pub fn matrix_options(&self) -> MatrixOptions {
        MatrixOptions::default().with_single_column_growth(self.grow_single_column_segments)
    }
}

const DEFAULT_BACKGROUND: &str = "white";
const DEFAULT_EVENT_COLOR: &str = "#3a87ad";
const DEFAULT_FILLER_COLOR: &str = "#f5f5f5";
const DEFAULT_GRID_COLOR: &str = "#dddddd";

/// Visual styling used by the exporters.
///
/// Colors are CSS color strings; fields that are not set fall back to the
/// built-in palette.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    event_color: Option<String>,

    #[serde(default)]
    filler_color: Option<String>,

    #[serde(default)]
    grid_color: Option<String>,

    /// Width of one column, in pixels.
    #[serde(default = "default_cell_width")]
    cell_width: f32,

    /// Height of one level, in pixels.
    #[serde(default = "default_level_height")]
    level_height: f32,

    /// Width of one intro cell, in pixels.
    #[serde(default = "default_intro_width")]
    intro_width: f32,
}

fn default_cell_width() -> f32 {
    120.0
}

fn default_level_height() -> f32 {
    24.0
}

fn default_intro_width() -> f32 {
    40.0
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            event_color: None,
            filler_color: None,
            grid_color: None,
            cell_width: default_cell_width(),
            level_height: default_level_height(),
            intro_width: default_intro_width(),
        }
    }
}

impl StyleConfig {
    /// Returns the background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background_color", &self.background_color, DEFAULT_BACKGROUND)
    }

    /// Returns the fill [`Color`] of events without a color of their own.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn event_color(&self) -> Result<Color, String> {
        parse_color("event_color", &self.event_color, DEFAULT_EVENT_COLOR)
    }

    /// Returns the fill [`Color`] of filler cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn filler_color(&self) -> Result<Color, String> {
        parse_color("filler_color", &self.filler_color, DEFAULT_FILLER_COLOR)
    }

    /// Returns the [`Color`] of grid lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn grid_color(&self) -> Result<Color, String> {
        parse_color("grid_color", &self.grid_color, DEFAULT_GRID_COLOR)
    }

    /// Returns the width of one column.
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Returns the height of one level.
    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    /// Returns the width of one intro cell.
    pub fn intro_width(&self) -> f32 {
        self.intro_width
    }
}

fn parse_color(key: &str, configured: &Option<String>, fallback: &str) -> Result<Color, String> {
    Color::new(configured.as_deref().unwrap_or(fallback))
        .map_err(|err| format!("Invalid {key} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.layout().direction(), Direction::Ltr);
        assert_eq!(config.layout().event_order(), &EventOrder::default());
        assert_eq!(config.layout().intro_columns(), 0);
        assert!(!config.layout().matrix_options().grows_single_column_segments());
        assert!(config.style().background_color().is_ok());
        assert!(config.style().event_color().is_ok());
        assert!(config.style().filler_color().is_ok());
        assert!(config.style().grid_color().is_ok());
        assert_eq!(config.style().level_height(), 24.0);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.style().cell_width(), 120.0);
        assert_eq!(config.style().intro_width(), 40.0);
    }

    #[test]
    fn test_layout_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            direction = "rtl"
            intro_columns = 1
            grow_single_column_segments = true
            "#,
        )
        .unwrap();

        assert!(config.layout().direction().is_rtl());
        assert_eq!(config.layout().intro_columns(), 1);
        assert!(config.layout().matrix_options().grows_single_column_segments());
    }

    #[test]
    fn test_invalid_color() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            event_color = "not-a-color"
            "#,
        )
        .unwrap();

        let err = config.style().event_color().unwrap_err();
        assert!(err.contains("event_color"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\nlevels = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\ndirection = \"up\"\n");
        assert!(result.is_err());
    }
}
