//! Game logic for Asteroid Therapy: steering, auto-fire, asteroid hits.

use super::types::*;
use crate::games::Phase;
use crate::gesture::{horizontal_thumb_displacement, step_for, THUMB_STEER_THRESHOLD};
use crate::tracking::HandLandmarks;
use rand::{Rng, RngCore};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShooterTick {
    pub fired: bool,
    pub spawned: bool,
    pub destroyed: u32,
    pub hits_taken: u32,
    pub game_over: bool,
}

pub fn start(game: &mut ShooterGame) {
    if game.phase == Phase::NotStarted {
        game.phase = Phase::Running;
        log::info!("Shooter: run started");
    }
}

/// Restore every run-scoped field and clear all bullets and asteroids.
pub fn reset(game: &mut ShooterGame) {
    let high_score = game.high_score;
    *game = ShooterGame::new();
    game.high_score = high_score;
}

/// Health left after one bullet: the flat damage, then half of what is
/// left (at least 1) on top.
pub fn apply_bullet_hit(health: i32, damage: i32) -> i32 {
    let after_flat = health - damage;
    after_flat - after_flat.div_euclid(2).max(1)
}

/// Advance one frame.
pub fn tick(game: &mut ShooterGame, hands: &[HandLandmarks], rng: &mut dyn RngCore) -> ShooterTick {
    let mut report = ShooterTick::default();
    if game.phase != Phase::Running {
        return report;
    }

    for hand in hands {
        steer(game, horizontal_thumb_displacement(hand));
    }

    if game.frame_count % ASTEROID_SPAWN_RATE == 0 {
        spawn_asteroid(game, rng);
        report.spawned = true;
    }

    if game.shoot_timer >= SHOOT_DELAY {
        fire(game);
        game.shoot_timer = 0;
        report.fired = true;
    } else {
        game.shoot_timer += 1;
    }

    let asteroids = update_asteroids(game);
    report.destroyed = asteroids.destroyed;
    report.hits_taken = asteroids.hits_taken;
    if asteroids.player_destroyed {
        game_over(game);
        report.game_over = true;
        return report;
    }

    move_bullets(game);
    game.frame_count += 1;
    report
}

/// Move the ship one step for `displacement` and clamp to the field.
pub fn steer(game: &mut ShooterGame, displacement: f64) {
    let step = step_for(displacement, THUMB_STEER_THRESHOLD);
    game.player.x += f64::from(step.sign()) * PLAYER_SPEED;
    game.player.x = game.player.x.clamp(0.0, PLAYER_MAX_X);
}

pub fn spawn_asteroid(game: &mut ShooterGame, rng: &mut dyn RngCore) {
    let x = rng.gen_range(0..=ASTEROID_MAX_X);
    game.asteroids.push(Asteroid::new(f64::from(x)));
    log::debug!("Shooter: asteroid spawned at x={}", x);
}

/// Fire one bullet from the middle of the ship's nose.
pub fn fire(game: &mut ShooterGame) {
    game.bullets.push(Bullet {
        x: game.player.x + PLAYER_WIDTH / 2.0,
        y: game.player.y,
    });
}

pub fn move_bullets(game: &mut ShooterGame) {
    for bullet in &mut game.bullets {
        bullet.y -= BULLET_SPEED;
    }
    game.bullets.retain(|b| b.y >= 0.0);
}

/// Result of one asteroid pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsteroidPass {
    pub destroyed: u32,
    pub hits_taken: u32,
    pub player_destroyed: bool,
}

/// Move every asteroid and resolve ship and bullet contacts.
///
/// Asteroids are rebuilt into a fresh list rather than removed in place.
/// An asteroid that reaches the ship is spent; if that empties the ship's
/// health the pass stops and the remaining asteroids are left where they are.
pub fn update_asteroids(game: &mut ShooterGame) -> AsteroidPass {
    let mut pass = AsteroidPass::default();
    let player = game.player_rect();
    let mut pending = std::mem::take(&mut game.asteroids).into_iter();
    let mut survivors = Vec::with_capacity(pending.len());

    while let Some(mut asteroid) = pending.next() {
        asteroid.y += ASTEROID_SPEED;
        if asteroid.y > FIELD_HEIGHT {
            continue;
        }

        if player.contains_strict(asteroid.anchor()) {
            game.health = game.health.saturating_sub(1);
            pass.hits_taken += 1;
            log::debug!("Shooter: ship hit, health {}", game.health);
            if game.health == 0 {
                pass.player_destroyed = true;
                survivors.extend(pending);
                break;
            }
            continue;
        }

        let hit_box = asteroid.hit_box();
        if let Some(i) = game
            .bullets
            .iter()
            .position(|b| hit_box.contains_strict(b.position()))
        {
            game.bullets.remove(i);
            asteroid.health = apply_bullet_hit(asteroid.health, game.damage_per_bullet);
            if asteroid.health <= 0 {
                game.score += 1;
                pass.destroyed += 1;
                continue;
            }
        }

        survivors.push(asteroid);
    }

    game.asteroids = survivors;
    pass
}

fn game_over(game: &mut ShooterGame) {
    game.phase = Phase::Over;
    if game.score > game.high_score {
        game.high_score = game.score;
    }
    log::info!("Shooter: ship destroyed, final score {}", game.score);
}

/// Any click starts from the title screen or restarts after game over.
pub fn handle_click(game: &mut ShooterGame) -> bool {
    match game.phase {
        Phase::NotStarted => {
            start(game);
            true
        }
        Phase::Over => {
            reset(game);
            start(game);
            true
        }
        Phase::Running => false,
    }
}
