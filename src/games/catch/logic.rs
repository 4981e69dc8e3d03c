//! Game logic for Taco Catch: steering, falling tacos, mouth collisions.

use super::types::*;
use crate::games::Phase;
use crate::geometry::FieldPoint;
use crate::gesture::{step_for, vertical_displacement, VERTICAL_STEER_THRESHOLD};
use crate::tracking::HandLandmarks;
use rand::{Rng, RngCore};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatchTick {
    pub caught: u32,
    pub points: u32,
    pub spawned: bool,
}

pub fn start(game: &mut CatchGame) {
    if game.phase == Phase::NotStarted {
        game.phase = Phase::Running;
        log::info!("Catch: run started");
    }
}

pub fn reset(game: &mut CatchGame) {
    *game = CatchGame::new();
}

/// Advance one frame: steer, fall, eat, spawn, in that order.
pub fn tick(
    game: &mut CatchGame,
    hands: &[HandLandmarks],
    dt_secs: f64,
    rng: &mut dyn RngCore,
) -> CatchTick {
    let mut report = CatchTick::default();
    if game.phase != Phase::Running {
        return report;
    }

    if let Some(hand) = hands.first() {
        steer(game, vertical_displacement(hand));
    }
    move_obstacles(game);
    let (caught, points) = eat_overlapping(game);
    report.caught = caught;
    report.points = points;
    report.spawned = advance_spawner(game, dt_secs, rng);

    game.tick_count += 1;
    report
}

/// Move the player one step for `displacement` and clamp to the field.
pub fn steer(game: &mut CatchGame, displacement: f64) {
    let step = step_for(displacement, VERTICAL_STEER_THRESHOLD);
    game.player_x += f64::from(step.sign()) * PLAYER_STEP;
    game.player_x = game.player_x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
}

/// Drop every taco and discard the ones below the field.
pub fn move_obstacles(game: &mut CatchGame) {
    for obstacle in &mut game.obstacles {
        obstacle.y += OBSTACLE_SPEED;
    }
    game.obstacles.retain(|o| o.y <= FIELD_HEIGHT);
}

/// Remove tacos touching the mouth. Returns (tacos caught, points scored).
pub fn eat_overlapping(game: &mut CatchGame) -> (u32, u32) {
    let mouth = game.mouth_rect();
    let before = game.obstacles.len();
    game.obstacles.retain(|o| !mouth.overlaps(&o.rect()));
    let caught = (before - game.obstacles.len()) as u32;

    let mut points = 0;
    for _ in 0..caught {
        record_catch(game);
        if game.tacos_eaten % TACOS_PER_POINT == 0 {
            points += 1;
        }
    }
    (caught, points)
}

/// Count one eaten taco, scoring on every fifth.
pub fn record_catch(game: &mut CatchGame) {
    game.tacos_eaten += 1;
    if game.tacos_eaten % TACOS_PER_POINT == 0 {
        game.score += 1;
        log::debug!("Catch: {} tacos eaten, score {}", game.tacos_eaten, game.score);
    }
}

fn advance_spawner(game: &mut CatchGame, dt_secs: f64, rng: &mut dyn RngCore) -> bool {
    let due = match game.since_last_spawn.as_mut() {
        None => true,
        Some(elapsed) => {
            *elapsed += dt_secs;
            *elapsed > SPAWN_INTERVAL_SECS
        }
    };
    if due {
        spawn_obstacle(game, rng);
        game.since_last_spawn = Some(0.0);
    }
    due
}

/// Add one taco above the top edge at a random column.
pub fn spawn_obstacle(game: &mut CatchGame, rng: &mut dyn RngCore) {
    let x = rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X);
    game.obstacles.push(Obstacle::new(f64::from(x)));
}

/// Half-open hit test against the start button.
pub fn handle_click(game: &mut CatchGame, at: FieldPoint) -> bool {
    if game.phase == Phase::NotStarted && START_BUTTON.contains(at) {
        start(game);
        return true;
    }
    false
}

pub fn activate_button(game: &mut CatchGame) -> bool {
    if game.phase == Phase::NotStarted {
        start(game);
        return true;
    }
    false
}
