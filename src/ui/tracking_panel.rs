//! Debug view of the latest tracking frame: hand skeletons plus source health.

use super::field_buffer::{Cell, FieldBuffer};
use super::game_common::render_panel_frame;
use crate::core::FrameStats;
use crate::gesture::is_fist_closed;
use crate::geometry::FieldPoint;
use crate::tracking::landmarks::{FINGER_TIP_BASE, THUMB_TIP};
use crate::tracking::{HandLandmarks, TrackingFrame, HAND_SKELETON};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Landmarks are normalized, so the skeleton field is the unit square.
const UNIT: f64 = 1.0;

const HAND_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

pub fn render_tracking_panel(
    frame: &mut Frame,
    area: Rect,
    tracking: &TrackingFrame,
    stats: &FrameStats,
    source: &str,
) {
    let inner = render_panel_frame(frame, area, "Hands");
    if inner.height < 3 || inner.width < 4 {
        return;
    }

    let skeleton_area = Rect {
        height: inner.height - 2,
        ..inner
    };
    let buffer = skeleton_buffer(skeleton_area.width, skeleton_area.height, tracking);
    buffer.render(frame, skeleton_area);

    let footer = vec![
        Line::from(vec![
            Span::styled(" src ", Style::default().fg(Color::DarkGray)),
            Span::styled(source.to_string(), Style::default().fg(Color::White)),
        ]),
        footer_line(stats),
    ];
    frame.render_widget(
        Paragraph::new(footer),
        Rect::new(inner.x, inner.y + inner.height - 2, inner.width, 2),
    );
}

fn footer_line(stats: &FrameStats) -> Line<'static> {
    if stats.source_closed {
        return Line::from(Span::styled(
            " source closed",
            Style::default().fg(Color::Yellow),
        ));
    }
    let skipped_color = if stats.skipped_frames > 0 {
        Color::Red
    } else {
        Color::DarkGray
    };
    Line::from(vec![
        Span::styled(
            format!(" {} frames ", stats.frames),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} skipped", stats.skipped_frames),
            Style::default().fg(skipped_color),
        ),
    ])
}

/// Draw every hand's bones and joints into a buffer of the given size.
pub fn skeleton_buffer(cols: u16, rows: u16, tracking: &TrackingFrame) -> FieldBuffer {
    let mut buffer = FieldBuffer::new(cols, rows, UNIT, UNIT);
    if !tracking.has_hands() {
        buffer.text_centered(FieldPoint::new(0.5, 0.5), "no hands", Color::DarkGray);
        return buffer;
    }
    for (i, hand) in tracking.hands.iter().enumerate() {
        let color = if is_fist_closed(hand) {
            Color::Red
        } else {
            HAND_COLORS[i % HAND_COLORS.len()]
        };
        draw_hand(&mut buffer, hand, color);
    }
    buffer
}

fn draw_hand(buffer: &mut FieldBuffer, hand: &HandLandmarks, color: Color) {
    let point = |index: usize| {
        let lm = hand.get(index);
        FieldPoint::new(lm.x, lm.y)
    };
    for (from, to) in HAND_SKELETON {
        buffer.fill_segment(point(from), point(to), 0.0, Cell::glyph('·', color));
    }
    for (index, lm) in hand.points().iter().enumerate() {
        let is_tip = index == THUMB_TIP || FINGER_TIP_BASE.iter().any(|&(tip, _)| tip == index);
        let glyph = if is_tip { 'o' } else { '•' };
        let (col, row) = buffer.cell_of(FieldPoint::new(lm.x, lm.y));
        buffer.set(col, row, Cell::glyph(glyph, color));
    }
}
