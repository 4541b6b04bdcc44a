//! SVG rendering.
//!
//! Rows are stacked vertically; within a row each level is one band of
//! `level_height` pixels and each column `cell_width` pixels wide. Every
//! cell of a row's arena becomes one rectangle, so a grown filler is drawn
//! once at its full height.

use log::{debug, info};
use svg::{
    Document,
    node::element::{Group, Rectangle, Text},
};

use daygrid_core::{cell::Cell, color::Color, direction::Direction};

use super::{Error, Exporter, IntroCell, event_of};
use crate::{config::StyleConfig, layout::RowLayout, source::Calendar};

/// Inset between an event box and its cell edges.
const EVENT_INSET: f32 = 1.5;

/// Left padding of event titles.
const TEXT_PADDING: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    fn to_svg(self) -> Rectangle {
        Rectangle::new()
            .set("x", self.x)
            .set("y", self.y)
            .set("width", self.width)
            .set("height", self.height)
    }

    fn inset(self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }
}

struct Palette {
    background: Color,
    event: Color,
    filler: Color,
    grid: Color,
}

impl Palette {
    fn from_style(style: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            background: style.background_color().map_err(Error::Style)?,
            event: style.event_color().map_err(Error::Style)?,
            filler: style.filler_color().map_err(Error::Style)?,
            grid: style.grid_color().map_err(Error::Style)?,
        })
    }
}

/// Renders row layouts as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgGrid {
    direction: Direction,
    style: StyleConfig,
}

impl SvgGrid {
    /// Creates an exporter with the given direction and style.
    pub fn new(direction: Direction, style: StyleConfig) -> Self {
        Self { direction, style }
    }

    fn intro_count(rows: &[RowLayout<IntroCell>]) -> usize {
        rows.iter()
            .flat_map(|row| (0..row.level_count()).map(move |level| row.intro_cells(level).len()))
            .max()
            .unwrap_or(0)
    }

    /// Left edge of the column area.
    fn columns_x(&self, intro_count: usize) -> f32 {
        if self.direction.is_rtl() {
            0.0
        } else {
            intro_count as f32 * self.style.intro_width()
        }
    }

    fn cell_rect(&self, cell: &Cell, col_count: usize, columns_x: f32, row_y: f32) -> Rect {
        let first = self.direction.visual_col(cell.first_col(), col_count);
        let last = self.direction.visual_col(cell.last_col(), col_count);

        Rect {
            x: columns_x + first.min(last) as f32 * self.style.cell_width(),
            y: row_y + cell.level() as f32 * self.style.level_height(),
            width: cell.col_span() as f32 * self.style.cell_width(),
            height: cell.row_span() as f32 * self.style.level_height(),
        }
    }

    fn intro_rect(&self, index: usize, level: usize, col_count: usize, row_y: f32) -> Rect {
        let intro_width = self.style.intro_width();
        let x = if self.direction.is_rtl() {
            col_count as f32 * self.style.cell_width() + index as f32 * intro_width
        } else {
            index as f32 * intro_width
        };

        Rect {
            x,
            y: row_y + level as f32 * self.style.level_height(),
            width: intro_width,
            height: self.style.level_height(),
        }
    }

    fn render_cell(
        &self,
        calendar: &Calendar,
        cell: &Cell,
        rect: Rect,
        palette: &Palette,
    ) -> Result<Group, Error> {
        let slot = rect
            .to_svg()
            .set("fill", &palette.filler)
            .set("stroke", &palette.grid)
            .set("stroke-width", 0.5);
        let mut group = Group::new().add(slot);

        if let Some(id) = cell.segment_id() {
            let event = event_of(calendar, id)?;
            let fill = event.color().unwrap_or(palette.event);
            let event_box = rect.inset(EVENT_INSET);

            let shape = event_box
                .to_svg()
                .set("fill", &fill)
                .set("rx", 3.0);
            let label = Text::new(event.title())
                .set("x", event_box.x + TEXT_PADDING)
                .set("y", event_box.y + event_box.height * 0.7)
                .set("font-family", "sans-serif")
                .set("font-size", self.style.level_height() * 0.5)
                .set("fill", "white");

            group = group
                .set("class", "dg-event")
                .set("data-segment", id.index())
                .add(shape)
                .add(label);
        } else {
            group = group.set("class", "dg-filler");
        }

        Ok(group)
    }

    fn render_row(
        &self,
        calendar: &Calendar,
        row: &RowLayout<IntroCell>,
        geometry: (f32, f32),
        palette: &Palette,
    ) -> Result<Group, Error> {
        let (columns_x, row_y) = geometry;
        let mut group = Group::new()
            .set("class", "dg-row")
            .set("data-row", row.row());

        for level in 0..row.level_count() {
            for intro in row.intro_cells(level) {
                let rect = self.intro_rect(intro.index(), level, row.col_count(), row_y);
                group = group.add(
                    rect.to_svg()
                        .set("class", "dg-intro")
                        .set("fill", &palette.background)
                        .set("stroke", &palette.grid)
                        .set("stroke-width", 0.5),
                );
            }
        }

        for cell in row.cells() {
            let rect = self.cell_rect(cell, row.col_count(), columns_x, row_y);
            group = group.add(self.render_cell(calendar, cell, rect, palette)?);
        }

        Ok(group)
    }
}

impl Exporter for SvgGrid {
    fn export(&self, calendar: &Calendar, rows: &[RowLayout<IntroCell>]) -> Result<String, Error> {
        info!(rows = rows.len(), direction:? = self.direction; "Rendering SVG grid");

        let palette = Palette::from_style(&self.style)?;
        let intro_count = Self::intro_count(rows);
        let columns_x = self.columns_x(intro_count);

        let width = intro_count as f32 * self.style.intro_width()
            + calendar.columns() as f32 * self.style.cell_width();

        let mut row_y = 0.0;
        let mut groups = Vec::with_capacity(rows.len());
        for row in rows {
            groups.push(self.render_row(calendar, row, (columns_x, row_y), &palette)?);
            row_y += row.level_count() as f32 * self.style.level_height();
        }
        let height = row_y;

        debug!(width, height; "SVG dimensions");

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", &palette.background);

        let document = groups.into_iter().fold(
            Document::new()
                .set("viewBox", format!("0 0 {width} {height}"))
                .set("width", width)
                .set("height", height)
                .add(background),
            |document, group| document.add(group),
        );

        Ok(document.to_string())
    }
}
