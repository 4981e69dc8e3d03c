//! Taco Catch rendering: ground strip, the taco eater and falling tacos.

use super::field_buffer::{Cell, FieldBuffer};
use super::game_common::info_line;
use crate::games::catch::{
    CatchGame, Obstacle, FIELD_HEIGHT, FIELD_WIDTH, GROUND_HEIGHT, HEAD_RADIUS, OBSTACLE_HEIGHT,
    OBSTACLE_WIDTH, PLAYER_WIDTH, START_BUTTON,
};
use crate::games::Phase;
use crate::geometry::{FieldPoint, FieldRect};
use ratatui::{style::Color, text::Line};

pub const BORDER_COLOR: Color = Color::LightGreen;

const TACO_COLOR: Color = Color::Rgb(255, 215, 0);

pub fn render_field(buffer: &mut FieldBuffer, game: &CatchGame) {
    if game.phase == Phase::NotStarted {
        buffer.text_centered(
            FieldPoint::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0 - 150.0),
            "Taco Eating Game",
            Color::LightBlue,
        );
        buffer.fill_rect(START_BUTTON, Cell::solid(Color::Green));
        buffer.text_centered(START_BUTTON.center(), "Start", Color::Black);
        return;
    }

    let ground = FieldRect::new(0.0, FIELD_HEIGHT - GROUND_HEIGHT, FIELD_WIDTH, GROUND_HEIGHT);
    buffer.fill_rect(ground, Cell::solid(Color::DarkGray));

    buffer.fill_rect(game.player_rect(), Cell::solid(Color::Green));
    let head = FieldPoint::new(game.player_x + PLAYER_WIDTH / 2.0, game.player_y - HEAD_RADIUS);
    buffer.fill_circle(head, HEAD_RADIUS, Cell::solid(Color::Gray));
    buffer.fill_rect(game.mouth_rect(), Cell::solid(Color::Red));

    for taco in &game.obstacles {
        draw_taco(buffer, taco);
    }
}

/// Tacos are drawn as upward-pointing triangles filling their box.
fn draw_taco(buffer: &mut FieldBuffer, taco: &Obstacle) {
    buffer.fill_triangle(
        FieldPoint::new(taco.x, taco.y + OBSTACLE_HEIGHT),
        FieldPoint::new(taco.x + OBSTACLE_WIDTH / 2.0, taco.y),
        FieldPoint::new(taco.x + OBSTACLE_WIDTH, taco.y + OBSTACLE_HEIGHT),
        Cell::solid(TACO_COLOR),
    );
}

pub fn status(game: &CatchGame) -> (String, Color) {
    match game.phase {
        Phase::NotStarted => ("Click Start (or press Enter) to play".to_string(), Color::Yellow),
        Phase::Running => (
            "Tilt your index finger up or down to walk; catch tacos in your mouth".to_string(),
            Color::White,
        ),
        Phase::Over => (format!("Final score: {}", game.score), Color::Red),
    }
}

pub fn info_lines(game: &CatchGame) -> Vec<Line<'static>> {
    vec![
        info_line("Score:", game.score.to_string(), Color::Yellow),
        info_line("Eaten:", game.tacos_eaten.to_string(), Color::Green),
        info_line(
            "Next pt:",
            format!("{} tacos", game.tacos_to_next_point()),
            Color::White,
        ),
        info_line("Falling:", game.obstacles.len().to_string(), Color::White),
    ]
}
