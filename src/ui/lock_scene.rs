//! Pop the Lock rendering: dial, shackle, target marker and sweeping bar.

use super::field_buffer::{Cell, FieldBuffer};
use super::game_common::info_line;
use crate::games::lock::{
    LockGame, LockOutcome, BAR_WIDTH, FIELD_HEIGHT, FIELD_WIDTH, LOCK_RADIUS, RESTART_BUTTON,
    SHACKLE_HEIGHT, SHACKLE_WIDTH, START_BUTTON,
};
use crate::games::Phase;
use crate::geometry::{FieldPoint, FieldRect};
use ratatui::{style::Color, text::Line};

const CENTER: FieldPoint = FieldPoint::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);

pub const BORDER_COLOR: Color = Color::Yellow;

pub fn render_field(buffer: &mut FieldBuffer, game: &LockGame) {
    match game.phase {
        Phase::NotStarted => {
            buffer.text_centered(
                FieldPoint::new(CENTER.x, CENTER.y - 120.0),
                "Pop the Lock",
                Color::Yellow,
            );
            draw_button(buffer, START_BUTTON, "Start");
        }
        Phase::Running => draw_lock(buffer, game),
        Phase::Over => {
            draw_lock(buffer, game);
            buffer.text_centered(CENTER, "Game Over!", Color::Red);
            draw_button(buffer, RESTART_BUTTON, "Restart");
        }
    }
}

fn draw_lock(buffer: &mut FieldBuffer, game: &LockGame) {
    let shackle = FieldRect::new(
        CENTER.x - SHACKLE_WIDTH / 2.0,
        CENTER.y - LOCK_RADIUS - SHACKLE_HEIGHT,
        SHACKLE_WIDTH,
        SHACKLE_HEIGHT,
    );
    buffer.fill_rect(shackle, Cell::solid(Color::DarkGray));
    buffer.fill_circle(CENTER, LOCK_RADIUS, Cell::solid(Color::Yellow));

    buffer.fill_segment(
        CENTER,
        spoke_end(game.target_angle),
        BAR_WIDTH,
        Cell::solid(Color::Blue),
    );
    let bar_color = if game.in_grace_period() {
        Color::Green
    } else {
        Color::Red
    };
    buffer.fill_segment(
        CENTER,
        spoke_end(game.bar_angle),
        BAR_WIDTH,
        Cell::solid(bar_color),
    );
}

/// Point on the dial rim at `angle` (radians, clockwise on screen).
fn spoke_end(angle: f64) -> FieldPoint {
    FieldPoint::new(
        CENTER.x + LOCK_RADIUS * angle.cos(),
        CENTER.y + LOCK_RADIUS * angle.sin(),
    )
}

fn draw_button(buffer: &mut FieldBuffer, rect: FieldRect, label: &str) {
    buffer.fill_rect(rect, Cell::solid(Color::Green));
    buffer.text_centered(rect.center(), label, Color::White);
}

pub fn status(game: &LockGame) -> (String, Color) {
    match game.phase {
        Phase::NotStarted => ("Click Start (or press Enter) to play".to_string(), Color::Yellow),
        Phase::Running if game.in_grace_period() => (
            format!("Popped! Next lock in {:.1}s", game.grace_timer),
            Color::Green,
        ),
        Phase::Running => (
            "Close your fist while the red bar crosses the blue marker".to_string(),
            Color::White,
        ),
        Phase::Over => {
            let reason = match game.last_outcome {
                Some(LockOutcome::Missed) => "Missed the marker",
                _ => "Game over",
            };
            (format!("{}! Final score: {}", reason, game.score), Color::Red)
        }
    }
}

pub fn info_lines(game: &LockGame) -> Vec<Line<'static>> {
    vec![
        info_line("Score:", game.score.to_string(), Color::Yellow),
        info_line("Best:", game.high_score.to_string(), Color::Cyan),
        info_line("Level:", game.level.to_string(), Color::White),
        info_line("Speed:", format!("{:.3} rad", game.bar_speed), Color::White),
    ]
}
