//! Taco Catch data structures.

use crate::games::Phase;
use crate::geometry::FieldRect;

/// Field dimensions in pixels.
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const FRAME_RATE: u32 = 30;

pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 80.0;
pub const HEAD_RADIUS: f64 = 15.0;
/// Height of the ground strip at the bottom of the field.
pub const GROUND_HEIGHT: f64 = 50.0;
/// Margin the player cannot enter on either side.
pub const BORDER_WIDTH: f64 = 10.0;
/// Pixels moved per frame while steering.
pub const PLAYER_STEP: f64 = 5.0;

pub const MOUTH_WIDTH: f64 = 20.0;
pub const MOUTH_HEIGHT: f64 = 10.0;

pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const OBSTACLE_HEIGHT: f64 = 30.0;
/// Pixels an obstacle falls per frame.
pub const OBSTACLE_SPEED: f64 = 5.0;
/// Wall-clock seconds between spawns.
pub const SPAWN_INTERVAL_SECS: f64 = 1.0;
/// Spawn x range (inclusive), keeping tacos clear of the side walls.
pub const SPAWN_MIN_X: i32 = 50;
pub const SPAWN_MAX_X: i32 = (FIELD_WIDTH - 50.0 - OBSTACLE_WIDTH) as i32;

/// Every this many tacos eaten scores a point.
pub const TACOS_PER_POINT: u32 = 5;

pub const PLAYER_MIN_X: f64 = BORDER_WIDTH;
pub const PLAYER_MAX_X: f64 = FIELD_WIDTH - PLAYER_WIDTH - BORDER_WIDTH;
pub const PLAYER_START_X: f64 = FIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0;
pub const PLAYER_Y: f64 = FIELD_HEIGHT - PLAYER_HEIGHT - GROUND_HEIGHT;

pub const START_BUTTON: FieldRect = FieldRect::new(
    FIELD_WIDTH / 2.0 - 100.0,
    FIELD_HEIGHT / 2.0 - 50.0,
    200.0,
    100.0,
);

/// A falling taco. `(x, y)` is the top-left of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
}

impl Obstacle {
    pub fn new(x: f64) -> Self {
        Self {
            x,
            y: -OBSTACLE_HEIGHT,
        }
    }

    pub fn rect(&self) -> FieldRect {
        FieldRect::new(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct CatchGame {
    pub phase: Phase,
    /// Left edge of the player's body.
    pub player_x: f64,
    /// Top edge of the player's body (fixed).
    pub player_y: f64,
    pub obstacles: Vec<Obstacle>,
    pub tacos_eaten: u32,
    pub score: u32,
    /// Seconds since the last spawn; `None` until the first spawn.
    pub since_last_spawn: Option<f64>,
    pub tick_count: u64,
}

impl Default for CatchGame {
    fn default() -> Self {
        Self::new()
    }
}

impl CatchGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            player_x: PLAYER_START_X,
            player_y: PLAYER_Y,
            obstacles: Vec::new(),
            tacos_eaten: 0,
            score: 0,
            since_last_spawn: None,
            tick_count: 0,
        }
    }

    /// The small box above the body that actually eats tacos.
    pub fn mouth_rect(&self) -> FieldRect {
        FieldRect::new(
            self.player_x + PLAYER_WIDTH / 2.0 - MOUTH_WIDTH / 2.0,
            self.player_y - HEAD_RADIUS,
            MOUTH_WIDTH,
            MOUTH_HEIGHT,
        )
    }

    pub fn player_rect(&self) -> FieldRect {
        FieldRect::new(self.player_x, self.player_y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Tacos still needed for the next point.
    pub fn tacos_to_next_point(&self) -> u32 {
        TACOS_PER_POINT - self.tacos_eaten % TACOS_PER_POINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = CatchGame::new();
        assert_eq!(game.phase, Phase::NotStarted);
        assert_eq!(game.player_x, 375.0);
        assert_eq!(game.player_y, 470.0);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.score, 0);
        assert_eq!(game.tacos_eaten, 0);
        assert!(game.since_last_spawn.is_none());
    }

    #[test]
    fn test_mouth_sits_above_body() {
        let game = CatchGame::new();
        let mouth = game.mouth_rect();
        assert_eq!(mouth, FieldRect::new(390.0, 455.0, 20.0, 10.0));
        assert!(mouth.bottom() <= game.player_rect().y);
    }

    #[test]
    fn test_bounds_constants() {
        assert_eq!(PLAYER_MIN_X, 10.0);
        assert_eq!(PLAYER_MAX_X, 740.0);
        assert_eq!(SPAWN_MAX_X, 700);
        assert_eq!(START_BUTTON, FieldRect::new(300.0, 250.0, 200.0, 100.0));
    }

    #[test]
    fn test_tacos_to_next_point() {
        let mut game = CatchGame::new();
        assert_eq!(game.tacos_to_next_point(), 5);
        game.tacos_eaten = 3;
        assert_eq!(game.tacos_to_next_point(), 2);
        game.tacos_eaten = 5;
        assert_eq!(game.tacos_to_next_point(), 5);
    }
}
