//! Integration test: Asteroid Therapy combat and lifecycle
//!
//! Covers the compound bullet damage, ship collisions ending the run,
//! automatic fire and every-hand steering.

use gesture_arcade::games::shooter::{
    apply_bullet_hit, Asteroid, Bullet, ShooterGame, ASTEROID_HEALTH, PLAYER_SPEED,
    PLAYER_START, SHOOT_DELAY, STARTING_HEALTH,
};
use gesture_arcade::games::{ArcadeGame, Phase};
use gesture_arcade::geometry::FieldPoint;
use gesture_arcade::tracking::landmarks::{THUMB_MCP, THUMB_TIP};
use gesture_arcade::tracking::{HandLandmarks, Landmark};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn running(rng: &mut ChaCha8Rng) -> ShooterGame {
    let mut game = ShooterGame::new();
    assert!(game.click(FieldPoint::new(1.0, 1.0), rng));
    game
}

/// Thumb tip `offset` to the right of the thumb base.
fn thumb(offset: f64) -> HandLandmarks {
    let mut hand = HandLandmarks::uniform(Landmark::new(0.5, 0.5));
    hand.set(THUMB_MCP, Landmark::new(0.5, 0.5));
    hand.set(THUMB_TIP, Landmark::new(0.5 + offset, 0.5));
    hand
}

#[test]
fn test_bullet_damage_compounds() {
    assert_eq!(apply_bullet_hit(ASTEROID_HEALTH, 1), 1);
    assert_eq!(apply_bullet_hit(1, 1), -1);
}

#[test]
fn test_two_hits_destroy_an_asteroid() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = running(&mut rng);
    game.asteroids.push(Asteroid::new(100.0));
    game.asteroids[0].y = 100.0;
    game.bullets.push(Bullet { x: 110.0, y: 110.0 });

    game.tick(&[], FRAME, &mut rng);
    let target = game
        .asteroids
        .iter()
        .find(|a| a.x == 100.0)
        .copied();
    assert_eq!(target.map(|a| a.health), Some(1));
    assert!(game.bullets.is_empty());

    game.bullets.push(Bullet { x: 110.0, y: 120.0 });
    game.tick(&[], FRAME, &mut rng);
    assert!(game.asteroids.iter().all(|a| a.x != 100.0 || a.y < 100.0));
    assert_eq!(game.score(), 1);
}

#[test]
fn test_last_hit_on_ship_ends_run() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = running(&mut rng);
    game.score = 4;
    game.health = 1;
    game.asteroids.push(Asteroid {
        x: game.player.x + 10.0,
        y: game.player.y + 5.0,
        ..Asteroid::new(0.0)
    });

    game.tick(&[], FRAME, &mut rng);
    assert!(game.is_over());
    assert_eq!(game.health, 0);
    assert_eq!(game.high_score, 4);

    // The field freezes once the run is over.
    let frames = game.frame_count;
    game.tick(&[thumb(0.2)], FRAME, &mut rng);
    assert_eq!(game.frame_count, frames);
}

#[test]
fn test_ship_survives_a_hit_with_health_left() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = running(&mut rng);
    game.asteroids.push(Asteroid {
        x: game.player.x + 10.0,
        y: game.player.y + 5.0,
        ..Asteroid::new(0.0)
    });
    game.tick(&[], FRAME, &mut rng);
    assert_eq!(game.health, STARTING_HEALTH - 1);
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn test_auto_fire_cadence() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut game = running(&mut rng);
    for _ in 0..SHOOT_DELAY {
        game.tick(&[], FRAME, &mut rng);
    }
    assert!(game.bullets.is_empty());
    game.tick(&[], FRAME, &mut rng);
    assert_eq!(game.bullets.len(), 1);
}

#[test]
fn test_every_hand_steers() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut game = running(&mut rng);
    game.tick(&[thumb(0.1), thumb(0.1)], FRAME, &mut rng);
    assert_eq!(game.player.x, PLAYER_START.x + 2.0 * PLAYER_SPEED);
    game.tick(&[thumb(0.1), thumb(-0.1)], FRAME, &mut rng);
    assert_eq!(game.player.x, PLAYER_START.x + 2.0 * PLAYER_SPEED);

    for _ in 0..200 {
        game.tick(&[thumb(-0.1)], FRAME, &mut rng);
        if game.is_over() {
            break;
        }
    }
    if !game.is_over() {
        assert_eq!(game.player.x, 0.0);
    }
}

#[test]
fn test_click_restarts_after_game_over() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = running(&mut rng);
    game.score = 9;
    game.health = 1;
    game.asteroids.push(Asteroid {
        x: game.player.x + 10.0,
        y: game.player.y + 5.0,
        ..Asteroid::new(0.0)
    });
    game.tick(&[], FRAME, &mut rng);
    assert!(game.is_over());

    assert!(game.click(FieldPoint::new(700.0, 20.0), &mut rng));
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.health, STARTING_HEALTH);
    assert!(game.asteroids.is_empty());
    assert_eq!(game.high_score, 9);

    // Clicks during play do nothing.
    assert!(!game.click(FieldPoint::new(700.0, 20.0), &mut rng));
}
