//! Per-person table image renderer.
//!
//! Draws a titled two-column table onto a PNG bitmap: header row with a
//! contrasting fill and bold white text, one data row per assignment.
//! A failure here is local to one person and reported by the caller.

use crate::errors::{AppError, AppResult};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub struct TableImage {
    width: u32,
    row_h: u32,
    margin: u32,
    title_band: u32,

    font_size: u32,
    header_font_size: u32,
    title_font_size: u32,

    header_fill: RGBColor,
    header_text: RGBColor,
    grid_line: RGBColor,
}

impl Default for TableImage {
    fn default() -> Self {
        Self {
            width: 1200,
            row_h: 48,
            margin: 40,
            title_band: 72,

            font_size: 20,
            header_font_size: 22,
            title_font_size: 28,

            header_fill: RGBColor(0x4F, 0x81, 0xBD),
            header_text: RGBColor(0xFF, 0xFF, 0xFF),
            grid_line: RGBColor(0x80, 0x80, 0x80),
        }
    }
}

impl TableImage {
    /// Render the table to `path`. `rows` must already be in display
    /// order; the renderer draws what it is given.
    pub fn render(
        &self,
        path: &Path,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> AppResult<()> {
        let height = self.title_band + (rows.len() as u32 + 1) * self.row_h + 2 * self.margin;
        let root = BitMapBackend::new(path, (self.width, height)).into_drawing_area();

        root.fill(&WHITE).map_err(to_render_error)?;

        // Title, centered over the table
        let title_style = TextStyle::from(FontDesc::new(
            FontFamily::SansSerif,
            self.title_font_size as f64,
            FontStyle::Bold,
        ))
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            title.to_string(),
            ((self.width / 2) as i32, (self.title_band / 2) as i32),
            title_style,
        ))
        .map_err(to_render_error)?;

        let col_widths = self.compute_col_widths(headers, rows);
        let x_start = self.margin as i32;
        let mut y = (self.title_band + self.margin) as i32;

        // Header row
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        self.draw_row(
            &root,
            x_start,
            y,
            &col_widths,
            &header_cells,
            self.header_font_size,
            FontStyle::Bold,
            Some(self.header_fill),
            self.header_text,
        )?;
        y += self.row_h as i32;

        // Data rows
        for row in rows {
            self.draw_row(
                &root,
                x_start,
                y,
                &col_widths,
                row,
                self.font_size,
                FontStyle::Normal,
                None,
                BLACK,
            )?;
            y += self.row_h as i32;
        }

        root.present().map_err(to_render_error)?;
        Ok(())
    }

    /// Column widths proportional to header + content display width,
    /// filling the drawable page width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<u32> {
        let mut weights: Vec<f64> = headers
            .iter()
            .map(|h| UnicodeWidthStr::width(*h).max(1) as f64)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = UnicodeWidthStr::width(cell.as_str()) as f64;
                if w > weights[i] {
                    weights[i] = w;
                }
            }
        }

        let total: f64 = weights.iter().sum();
        let avail = (self.width - 2 * self.margin) as f64;

        weights.iter().map(|w| (w / total * avail) as u32).collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_row<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, plotters::coord::Shift>,
        x_start: i32,
        y: i32,
        col_widths: &[u32],
        cells: &[String],
        font_size: u32,
        font_style: FontStyle,
        fill: Option<RGBColor>,
        text_color: RGBColor,
    ) -> AppResult<()> {
        let mut x = x_start;

        for (i, cell) in cells.iter().enumerate() {
            let w = col_widths[i] as i32;
            let h = self.row_h as i32;

            if let Some(color) = fill {
                root.draw(&Rectangle::new([(x, y), (x + w, y + h)], color.filled()))
                    .map_err(to_render_error)?;
            }
            root.draw(&Rectangle::new(
                [(x, y), (x + w, y + h)],
                self.grid_line.stroke_width(1),
            ))
            .map_err(to_render_error)?;

            let style = TextStyle::from(FontDesc::new(
                FontFamily::SansSerif,
                font_size as f64,
                font_style,
            ))
            .color(&text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(cell.clone(), (x + w / 2, y + h / 2), style))
                .map_err(to_render_error)?;

            x += w;
        }

        Ok(())
    }
}

fn to_render_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}
