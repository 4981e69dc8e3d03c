//! Asteroid Therapy rendering: ship, bullets and asteroids on a dark field.

use super::field_buffer::{Cell, FieldBuffer};
use super::game_common::info_line;
use crate::games::shooter::{
    ShooterGame, BULLET_HEIGHT, BULLET_WIDTH, FIELD_HEIGHT, FIELD_WIDTH, STARTING_HEALTH,
};
use crate::games::Phase;
use crate::geometry::{FieldPoint, FieldRect};
use ratatui::{style::Color, text::Line};

pub const BORDER_COLOR: Color = Color::LightBlue;

const CENTER: FieldPoint = FieldPoint::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);

pub fn render_field(buffer: &mut FieldBuffer, game: &ShooterGame) {
    match game.phase {
        Phase::NotStarted => {
            buffer.text_centered(
                FieldPoint::new(CENTER.x, CENTER.y - 50.0),
                "Asteroid Therapy",
                Color::White,
            );
            buffer.text_centered(CENTER, "Click anywhere to launch", Color::LightBlue);
        }
        Phase::Running => draw_entities(buffer, game),
        Phase::Over => {
            buffer.text_centered(
                FieldPoint::new(CENTER.x, CENTER.y - 50.0),
                "Game Over!",
                Color::White,
            );
            buffer.text_centered(CENTER, "Click anywhere to restart", Color::LightBlue);
        }
    }
}

fn draw_entities(buffer: &mut FieldBuffer, game: &ShooterGame) {
    buffer.fill_rect(game.player_rect(), Cell::solid(Color::White));
    for bullet in &game.bullets {
        let rect = FieldRect::new(bullet.x, bullet.y, BULLET_WIDTH, BULLET_HEIGHT);
        buffer.fill_rect(rect, Cell::solid(Color::Red));
    }
    // The hit box hangs off the anchor's bottom-right, but the rock is drawn
    // centred on the anchor.
    for asteroid in &game.asteroids {
        buffer.fill_circle(asteroid.anchor(), asteroid.size, Cell::solid(Color::Yellow));
    }
}

/// Filled and empty hearts for the remaining health.
pub fn health_bar(health: u32) -> String {
    let full = health.min(STARTING_HEALTH) as usize;
    let empty = STARTING_HEALTH as usize - full;
    format!("{}{}", "♥".repeat(full), "♡".repeat(empty))
}

pub fn status(game: &ShooterGame) -> (String, Color) {
    match game.phase {
        Phase::NotStarted => ("Click anywhere (or press Enter) to launch".to_string(), Color::Yellow),
        Phase::Running => (
            "Point your thumb left or right to steer; shots fire automatically".to_string(),
            Color::White,
        ),
        Phase::Over => (
            format!("Ship destroyed! Final score: {}", game.score),
            Color::Red,
        ),
    }
}

pub fn info_lines(game: &ShooterGame) -> Vec<Line<'static>> {
    let health_color = if game.health <= 1 {
        Color::Red
    } else {
        Color::Green
    };
    vec![
        info_line("Score:", game.score.to_string(), Color::Yellow),
        info_line("Best:", game.high_score.to_string(), Color::Cyan),
        info_line("Health:", health_bar(game.health), health_color),
        info_line("Level:", game.level.to_string(), Color::White),
        info_line("Rocks:", game.asteroids.len().to_string(), Color::White),
    ]
}
