//! Asteroid Therapy data structures.

use crate::games::Phase;
use crate::geometry::{FieldPoint, FieldRect};

/// Field dimensions in pixels.
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const FRAME_RATE: u32 = 60;

pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 50.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const PLAYER_START: FieldPoint = FieldPoint::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - 100.0);
pub const PLAYER_MAX_X: f64 = FIELD_WIDTH - PLAYER_WIDTH;
pub const STARTING_HEALTH: u32 = 5;

pub const BULLET_SPEED: f64 = 10.0;
pub const BULLET_WIDTH: f64 = 5.0;
pub const BULLET_HEIGHT: f64 = 10.0;
/// Ticks between automatic shots.
pub const SHOOT_DELAY: u32 = 10;

pub const ASTEROID_SIZE: f64 = 30.0;
pub const ASTEROID_HEALTH: i32 = 3;
pub const ASTEROID_SPEED: f64 = 5.0;
/// Ticks between asteroid spawns.
pub const ASTEROID_SPAWN_RATE: u64 = 30;
pub const ASTEROID_MAX_X: i32 = (FIELD_WIDTH - ASTEROID_SIZE) as i32;

/// Flat damage each bullet deals before the halving term.
pub const DAMAGE_PER_BULLET: i32 = 1;

/// A falling asteroid. `(x, y)` anchors its hit box at the top-left; it is
/// drawn as a circle of radius `size` centred on the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Remaining health. Goes to zero or below on the killing hit.
    pub health: i32,
}

impl Asteroid {
    pub fn new(x: f64) -> Self {
        Self {
            x,
            y: 0.0,
            size: ASTEROID_SIZE,
            health: ASTEROID_HEALTH,
        }
    }

    pub fn anchor(&self) -> FieldPoint {
        FieldPoint::new(self.x, self.y)
    }

    pub fn hit_box(&self) -> FieldRect {
        FieldRect::new(self.x, self.y, self.size, self.size)
    }
}

/// A player shot. `(x, y)` is its tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
}

impl Bullet {
    pub fn position(&self) -> FieldPoint {
        FieldPoint::new(self.x, self.y)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct ShooterGame {
    pub phase: Phase,
    /// Top-left of the ship.
    pub player: FieldPoint,
    pub health: u32,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub score: u32,
    /// Best score this process has seen. Survives resets.
    pub high_score: u32,
    pub level: u32,
    pub damage_per_bullet: i32,
    /// Ticks since the run started; drives asteroid spawning.
    pub frame_count: u64,
    /// Ticks since the last shot.
    pub shoot_timer: u32,
}

impl Default for ShooterGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ShooterGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            player: PLAYER_START,
            health: STARTING_HEALTH,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            high_score: 0,
            level: 1,
            damage_per_bullet: DAMAGE_PER_BULLET,
            frame_count: 0,
            shoot_timer: 0,
        }
    }

    pub fn player_rect(&self) -> FieldRect {
        FieldRect::new(self.player.x, self.player.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}
