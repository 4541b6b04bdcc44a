//! HTML table rendering.
//!
//! Each grid row becomes a `<tbody>`, each level a `<tr>`, and each placed
//! cell a `<td>` carrying its `colspan`/`rowspan`. Slots covered by a cell
//! from a level above are not emitted again, as HTML tables expect.
//!
//! Right-to-left output is produced by reversing the cells of each `<tr>`.
//! The table itself is never marked `dir="rtl"`, since a browser would then
//! mirror the already reversed columns a second time.

use std::fmt::Write;

use log::{debug, info};

use daygrid_core::{cell::Cell, direction::Direction};

use super::{Error, Exporter, IntroCell, event_of};
use crate::{layout::RowLayout, source::Calendar};

/// Renders row layouts as an HTML `<table>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTable {
    direction: Direction,
}

impl HtmlTable {
    /// Creates an exporter for the given display direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    fn render_cell(&self, calendar: &Calendar, cell: &Cell) -> Result<String, Error> {
        let mut td = String::from("<td");
        if cell.col_span() > 1 {
            write!(td, " colspan=\"{}\"", cell.col_span())?;
        }
        if cell.row_span() > 1 {
            write!(td, " rowspan=\"{}\"", cell.row_span())?;
        }

        match cell.segment_id() {
            Some(id) => {
                let event = event_of(calendar, id)?;
                td.push_str(" class=\"dg-event-container\"><div class=\"dg-event");
                if event.is_all_day() {
                    td.push_str(" dg-all-day");
                }
                td.push('"');
                if let Some(color) = event.color() {
                    write!(td, " style=\"background-color:{color}\"")?;
                }
                write!(td, ">{}</div></td>", v_htmlescape::escape(event.title()))?;
            }
            None => td.push_str("></td>"),
        }

        Ok(td)
    }

    fn render_intro(intro: &IntroCell) -> String {
        format!("<td class=\"dg-intro\" data-intro=\"{}\"></td>", intro.index())
    }
}

impl Exporter for HtmlTable {
    fn export(&self, calendar: &Calendar, rows: &[RowLayout<IntroCell>]) -> Result<String, Error> {
        info!(rows = rows.len(), direction:? = self.direction; "Rendering HTML table");

        let mut out = String::new();
        let direction = if self.direction.is_rtl() { "rtl" } else { "ltr" };
        writeln!(
            out,
            "<table class=\"dg-table\" dir=\"ltr\" data-direction=\"{direction}\">"
        )?;

        for row in rows {
            writeln!(out, "  <tbody class=\"dg-row\" data-row=\"{}\">", row.row())?;

            for level in 0..row.level_count() {
                let cells = row
                    .placed_cells(level)
                    .map(|cell| self.render_cell(calendar, cell))
                    .collect::<Result<Vec<_>, _>>()?;
                let intro = row
                    .intro_cells(level)
                    .iter()
                    .map(Self::render_intro)
                    .collect();

                let tds = self.direction.arrange(intro, cells);
                writeln!(out, "    <tr>{}</tr>", tds.concat())?;
            }

            writeln!(out, "  </tbody>")?;
            debug!(row = row.row(), levels = row.level_count(); "Row rendered");
        }

        writeln!(out, "</table>")?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use daygrid_core::segment::Segment;

    use super::*;
    use crate::{layout::RowLayoutEngine, source::Event};

    fn render(calendar: &Calendar, direction: Direction, intro_columns: usize) -> String {
        let rows = RowLayoutEngine::new(calendar.rows(), calendar.columns())
            .with_intro(move || (0..intro_columns).map(IntroCell::new).collect::<Vec<_>>())
            .layout(calendar.segments())
            .unwrap();
        HtmlTable::new(direction).export(calendar, &rows).unwrap()
    }

    fn table_rows(html: &str) -> Vec<&str> {
        html.lines()
            .map(str::trim)
            .filter(|line| line.starts_with("<tr>"))
            .collect()
    }

    #[test]
    fn test_empty_row() {
        let calendar = Calendar::new(1, 3, Vec::new());
        let html = render(&calendar, Direction::Ltr, 0);

        assert_eq!(table_rows(&html), ["<tr><td></td><td></td><td></td></tr>"]);
        assert!(html.contains("data-direction=\"ltr\""));
    }

    #[test]
    fn test_spans_and_rowspans() {
        let calendar = Calendar::new(
            1,
            3,
            vec![
                Segment::new(0, 0, 1, Event::new("Trip")),
                Segment::new(0, 0, 0, Event::new("Call")),
            ],
        );
        let html = render(&calendar, Direction::Ltr, 0);

        assert_eq!(
            table_rows(&html),
            [
                "<tr><td colspan=\"2\" class=\"dg-event-container\"><div class=\"dg-event\">Trip</div></td><td rowspan=\"2\"></td></tr>",
                "<tr><td class=\"dg-event-container\"><div class=\"dg-event\">Call</div></td><td></td></tr>",
            ]
        );
    }

    #[test]
    fn test_rtl_reverses_cells_and_moves_intro() {
        let calendar = Calendar::new(1, 2, vec![Segment::new(0, 0, 0, Event::new("A"))]);
        let html = render(&calendar, Direction::Rtl, 1);

        assert_eq!(
            table_rows(&html),
            [
                "<tr><td></td><td class=\"dg-event-container\"><div class=\"dg-event\">A</div></td><td class=\"dg-intro\" data-intro=\"0\"></td></tr>"
            ]
        );
        // the DOM order is already mirrored, so the browser must not flip it again
        assert!(html.contains("dir=\"ltr\" data-direction=\"rtl\""));
        assert!(!html.contains("dir=\"rtl\""));
    }

    #[test]
    fn test_intro_leads_in_ltr() {
        let calendar = Calendar::new(1, 1, Vec::new());
        let html = render(&calendar, Direction::Ltr, 2);

        assert_eq!(
            table_rows(&html),
            [
                "<tr><td class=\"dg-intro\" data-intro=\"0\"></td><td class=\"dg-intro\" data-intro=\"1\"></td><td></td></tr>"
            ]
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let calendar = Calendar::new(
            1,
            1,
            vec![Segment::new(0, 0, 0, Event::new("<b>R&D</b>").with_all_day(true))],
        );
        let html = render(&calendar, Direction::Ltr, 0);

        assert!(html.contains("&lt;b&gt;R&amp;D&lt;&#x2f;b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("dg-event dg-all-day"));
    }

    #[test]
    fn test_one_tbody_per_row() {
        let calendar = Calendar::new(3, 2, Vec::new());
        let html = render(&calendar, Direction::Ltr, 0);
        assert_eq!(html.matches("<tbody").count(), 3);
        assert!(html.contains("data-row=\"2\""));
    }
}
