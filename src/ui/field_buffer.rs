//! Scaled cell buffer for drawing a game field into a terminal area.
//!
//! Field coordinates are pixels with y pointing down. Cell `(col, row)` covers
//! field x in `[col / x_scale, (col + 1) / x_scale)` (and likewise for y), and a
//! shape paints every cell whose centre it covers.

use crate::geometry::{FieldPoint, FieldRect};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl Cell {
    pub const fn glyph(ch: char, fg: Color) -> Self {
        Self {
            ch,
            fg,
            bg: Color::Reset,
        }
    }

    /// A blank cell filled with a background colour.
    pub const fn solid(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg,
        }
    }
}

/// Axis-aligned bounds in field space: (left, top, right, bottom).
type Bounds = (f64, f64, f64, f64);

pub struct FieldBuffer {
    cells: Vec<Vec<Cell>>,
    cols: usize,
    rows: usize,
    /// Cells per field pixel.
    x_scale: f64,
    y_scale: f64,
}

impl FieldBuffer {
    pub fn new(cols: u16, rows: u16, field_width: f64, field_height: f64) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        Self {
            cells: vec![vec![Cell::default(); cols]; rows],
            cols,
            rows,
            x_scale: cols as f64 / field_width,
            y_scale: rows as f64 / field_height,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set one cell; anything off the buffer is ignored.
    pub fn set(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.cells[row][col] = cell;
        }
    }

    /// Cell containing a field position (may be off the buffer).
    pub fn cell_of(&self, p: FieldPoint) -> (i64, i64) {
        (
            (p.x * self.x_scale).floor() as i64,
            (p.y * self.y_scale).floor() as i64,
        )
    }

    fn cell_center(&self, col: usize, row: usize) -> FieldPoint {
        FieldPoint::new(
            (col as f64 + 0.5) / self.x_scale,
            (row as f64 + 0.5) / self.y_scale,
        )
    }

    /// Half the larger cell dimension, in field pixels.
    fn half_cell(&self) -> f64 {
        0.5 / self.x_scale.min(self.y_scale)
    }

    fn cell_span(&self, (left, top, right, bottom): Bounds) -> Option<(Range<usize>, Range<usize>)> {
        let c0 = (left * self.x_scale).floor().max(0.0) as usize;
        let c1 = ((right * self.x_scale).ceil().max(0.0) as usize).min(self.cols);
        let r0 = (top * self.y_scale).floor().max(0.0) as usize;
        let r1 = ((bottom * self.y_scale).ceil().max(0.0) as usize).min(self.rows);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0..c1, r0..r1))
    }

    /// Paint every cell whose centre satisfies `covers`. Shapes smaller than a
    /// cell still paint the cell under their anchor.
    fn paint_where(
        &mut self,
        bounds: Bounds,
        anchor: FieldPoint,
        cell: Cell,
        covers: impl Fn(FieldPoint) -> bool,
    ) {
        let mut painted = false;
        if let Some((cols, rows)) = self.cell_span(bounds) {
            for row in rows {
                for col in cols.clone() {
                    if covers(self.cell_center(col, row)) {
                        self.cells[row][col] = cell;
                        painted = true;
                    }
                }
            }
        }
        if !painted {
            let (col, row) = self.cell_of(anchor);
            self.set(col, row, cell);
        }
    }

    pub fn fill_rect(&mut self, rect: FieldRect, cell: Cell) {
        let bounds = (rect.x, rect.y, rect.right(), rect.bottom());
        self.paint_where(bounds, rect.center(), cell, |p| {
            p.x >= rect.x && p.x < rect.right() && p.y >= rect.y && p.y < rect.bottom()
        });
    }

    pub fn fill_circle(&mut self, center: FieldPoint, radius: f64, cell: Cell) {
        let bounds = (
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        self.paint_where(bounds, center, cell, |p| {
            let (dx, dy) = (p.x - center.x, p.y - center.y);
            dx * dx + dy * dy <= radius * radius
        });
    }

    /// A straight stroke `width` pixels wide. Never thinner than one cell.
    pub fn fill_segment(&mut self, from: FieldPoint, to: FieldPoint, width: f64, cell: Cell) {
        let reach = (width / 2.0).max(self.half_cell());
        let bounds = (
            from.x.min(to.x) - reach,
            from.y.min(to.y) - reach,
            from.x.max(to.x) + reach,
            from.y.max(to.y) + reach,
        );
        self.paint_where(bounds, from, cell, |p| {
            distance_to_segment(p, from, to) <= reach
        });
    }

    pub fn fill_triangle(&mut self, a: FieldPoint, b: FieldPoint, c: FieldPoint, cell: Cell) {
        let bounds = (
            a.x.min(b.x).min(c.x),
            a.y.min(b.y).min(c.y),
            a.x.max(b.x).max(c.x),
            a.y.max(b.y).max(c.y),
        );
        let anchor = FieldPoint::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        self.paint_where(bounds, anchor, cell, |p| {
            let d1 = edge_side(p, a, b);
            let d2 = edge_side(p, b, c);
            let d3 = edge_side(p, c, a);
            let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            !(has_neg && has_pos)
        });
    }

    /// Write `text` centred on a field position, keeping the existing background.
    pub fn text_centered(&mut self, center: FieldPoint, text: &str, fg: Color) {
        let (col, row) = self.cell_of(center);
        let start = col - text.chars().count() as i64 / 2;
        self.text_at(start, row, text, fg);
    }

    /// Write `text` starting at a cell, keeping the existing background.
    pub fn text_at(&mut self, col: i64, row: i64, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i64;
            let bg = if c >= 0 && row >= 0 {
                self.get(c as usize, row as usize)
                    .map_or(Color::Reset, |cell| cell.bg)
            } else {
                Color::Reset
            };
            self.set(c, row, Cell { ch, fg, bg });
        }
    }

    /// Draw the buffer, one paragraph per row with runs of equal style merged.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate() {
            let y = area.y + row_idx as u16;
            if y >= area.bottom() {
                break;
            }

            let mut spans: Vec<Span> = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();
            for cell in row_data {
                let style = Style::default().fg(cell.fg).bg(cell.bg);
                if style != current_style && !current_text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
                }
                current_style = style;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            let width = (self.cols as u16).min(area.width);
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(area.x, y, width, 1),
            );
        }
    }
}

fn distance_to_segment(p: FieldPoint, a: FieldPoint, b: FieldPoint) -> f64 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * abx, a.y + t * aby);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

fn edge_side(p: FieldPoint, a: FieldPoint, b: FieldPoint) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Largest sub-rect of `area`, centred, that shows the field undistorted.
pub fn fit_field_area(area: Rect, field_width: f64, field_height: f64) -> Rect {
    let cols_per_row = field_width / field_height * CELL_ASPECT;
    let (full_w, full_h) = (f64::from(area.width), f64::from(area.height));
    let (width, height) = if full_h * cols_per_row <= full_w {
        ((full_h * cols_per_row).round() as u16, area.height)
    } else {
        (area.width, (full_w / cols_per_row).round() as u16)
    };
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Map a terminal cell to the field position under its centre. `None` when the
/// cell lies outside `area`.
pub fn field_point_from_cell(
    area: Rect,
    field_width: f64,
    field_height: f64,
    column: u16,
    row: u16,
) -> Option<FieldPoint> {
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }
    let x = (f64::from(column - area.x) + 0.5) * field_width / f64::from(area.width);
    let y = (f64::from(row - area.y) + 0.5) * field_height / f64::from(area.height);
    Some(FieldPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARK: Cell = Cell::solid(Color::Green);

    fn painted(buffer: &FieldBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..buffer.rows() {
            for col in 0..buffer.cols() {
                if buffer.get(col, row) == Some(MARK) {
                    out.push((col, row));
                }
            }
        }
        out
    }

    #[test]
    fn test_fill_rect_matches_click_mapping() {
        let area = Rect::new(0, 0, 60, 30);
        let rect = FieldRect::new(200.0, 260.0, 200.0, 80.0);
        let mut buffer = FieldBuffer::new(area.width, area.height, 600.0, 600.0);
        buffer.fill_rect(rect, MARK);

        let cells = painted(&buffer);
        assert_eq!(cells.len(), 20 * 4);
        for (col, row) in cells {
            let at = field_point_from_cell(area, 600.0, 600.0, col as u16, row as u16);
            assert!(at.is_some_and(|p| rect.contains(p)));
        }
    }

    #[test]
    fn test_tiny_shape_still_paints_one_cell() {
        let mut buffer = FieldBuffer::new(40, 20, 800.0, 600.0);
        buffer.fill_rect(FieldRect::new(401.0, 301.0, 5.0, 10.0), MARK);
        assert_eq!(painted(&buffer), vec![(20, 10)]);
    }

    #[test]
    fn test_offscreen_shape_is_clipped() {
        let mut buffer = FieldBuffer::new(40, 20, 800.0, 600.0);
        buffer.fill_rect(FieldRect::new(100.0, -30.0, 50.0, 30.0), MARK);
        assert!(painted(&buffer).is_empty());
        buffer.fill_circle(FieldPoint::new(0.0, 0.0), 40.0, MARK);
        assert!(painted(&buffer).contains(&(0, 0)));
    }

    #[test]
    fn test_circle_is_symmetric() {
        let mut buffer = FieldBuffer::new(20, 20, 200.0, 200.0);
        buffer.fill_circle(FieldPoint::new(100.0, 100.0), 50.0, MARK);
        let cells = painted(&buffer);
        assert!(cells.contains(&(10, 10)));
        assert!(cells.contains(&(5, 10)));
        assert!(!cells.contains(&(4, 10)));
        assert!(!cells.contains(&(5, 5)));
    }

    #[test]
    fn test_triangle_points_up() {
        let mut buffer = FieldBuffer::new(10, 10, 100.0, 100.0);
        buffer.fill_triangle(
            FieldPoint::new(0.0, 100.0),
            FieldPoint::new(50.0, 0.0),
            FieldPoint::new(100.0, 100.0),
            MARK,
        );
        let cells = painted(&buffer);
        assert!(cells.contains(&(0, 9)));
        assert!(cells.contains(&(9, 9)));
        assert!(!cells.contains(&(0, 0)));
        assert!(cells.contains(&(5, 1)));
    }

    #[test]
    fn test_segment_covers_its_length() {
        let mut buffer = FieldBuffer::new(30, 30, 300.0, 300.0);
        buffer.fill_segment(
            FieldPoint::new(150.0, 155.0),
            FieldPoint::new(250.0, 155.0),
            2.0,
            MARK,
        );
        for col in 15..25 {
            assert_eq!(buffer.get(col, 15), Some(MARK));
        }
        assert_ne!(buffer.get(15, 18), Some(MARK));
    }

    #[test]
    fn test_text_keeps_background() {
        let mut buffer = FieldBuffer::new(20, 5, 200.0, 50.0);
        buffer.fill_rect(FieldRect::new(0.0, 20.0, 200.0, 10.0), MARK);
        buffer.text_centered(FieldPoint::new(100.0, 25.0), "Start", Color::White);
        let first = buffer.get(8, 2);
        assert_eq!(first.map(|c| c.ch), Some('S'));
        assert_eq!(first.map(|c| c.bg), Some(Color::Green));
        assert_eq!(buffer.get(12, 2).map(|c| c.ch), Some('t'));
    }

    #[test]
    fn test_field_point_from_cell() {
        let area = Rect::new(10, 5, 80, 30);
        assert_eq!(field_point_from_cell(area, 800.0, 600.0, 9, 10), None);
        assert_eq!(field_point_from_cell(area, 800.0, 600.0, 90, 10), None);
        assert_eq!(field_point_from_cell(area, 800.0, 600.0, 20, 35), None);
        assert_eq!(
            field_point_from_cell(area, 800.0, 600.0, 10, 5),
            Some(FieldPoint::new(5.0, 10.0))
        );
        assert_eq!(
            field_point_from_cell(area, 800.0, 600.0, 89, 34),
            Some(FieldPoint::new(795.0, 590.0))
        );
    }

    #[test]
    fn test_fit_field_area_keeps_aspect() {
        // Square field in a wide area: 2 columns per row.
        let fitted = fit_field_area(Rect::new(0, 0, 100, 30), 600.0, 600.0);
        assert_eq!(fitted, Rect::new(20, 0, 60, 30));

        // 4:3 field in a tall area is limited by width.
        let fitted = fit_field_area(Rect::new(0, 0, 40, 40), 800.0, 600.0);
        assert_eq!(fitted.width, 40);
        assert_eq!(fitted.height, 15);
        assert_eq!(fitted.y, 12);
    }
}
