//! Integration test: Pop the Lock through the shared game lifecycle
//!
//! Drives `LockGame` via `ArcadeGame` the way the frame loop does, with
//! synthetic hands for fist and open poses.

use gesture_arcade::games::lock::{
    GRACE_PERIOD_SECS, INITIAL_BAR_SPEED, START_BUTTON,
};
use gesture_arcade::games::{ArcadeGame, LockGame, LockOutcome, Phase};
use gesture_arcade::geometry::FieldPoint;
use gesture_arcade::tracking::landmarks::FINGER_TIP_BASE;
use gesture_arcade::tracking::{HandLandmarks, Landmark};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(33);

fn fist() -> HandLandmarks {
    HandLandmarks::uniform(Landmark::new(0.5, 0.5))
}

fn open_hand() -> HandLandmarks {
    let mut hand = fist();
    for (tip, _) in FINGER_TIP_BASE {
        hand.set(tip, Landmark::new(0.5, 0.2));
    }
    hand
}

fn running(rng: &mut ChaCha8Rng) -> LockGame {
    let mut game = LockGame::new(rng);
    assert!(game.click(START_BUTTON.center(), rng));
    assert_eq!(game.phase(), Phase::Running);
    game
}

#[test]
fn test_ten_open_frames_sweep_half_a_radian() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut game = running(&mut rng);
    for _ in 0..10 {
        game.tick(&[open_hand()], FRAME, &mut rng);
    }
    assert!((game.bar_angle - 10.0 * INITIAL_BAR_SPEED).abs() < 1e-9);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_pop_then_grace_then_miss() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut game = running(&mut rng);

    // Put the target right where the bar will be next frame.
    game.target_angle = game.bar_angle + game.bar_speed;
    game.tick(&[fist()], FRAME, &mut rng);
    assert_eq!(game.last_outcome, Some(LockOutcome::Popped));
    assert_eq!(game.score(), 1);
    assert_eq!(game.level, 2);

    // Holding the fist through the grace period does nothing.
    game.target_angle = game.bar_angle + std::f64::consts::PI;
    let grace_frames = (GRACE_PERIOD_SECS / FRAME.as_secs_f64()).ceil() as usize;
    for _ in 0..grace_frames {
        game.tick(&[fist()], FRAME, &mut rng);
        assert_eq!(game.phase(), Phase::Running);
    }
    assert!(!game.in_grace_period());

    // The bar is now far from the target, so the next fist misses.
    game.tick(&[fist()], FRAME, &mut rng);
    assert_eq!(game.last_outcome, Some(LockOutcome::Missed));
    assert!(game.is_over());
    assert_eq!(game.high_score, 1);
}

#[test]
fn test_no_hands_never_ends_the_run() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut game = running(&mut rng);
    for _ in 0..500 {
        game.tick(&[], FRAME, &mut rng);
    }
    assert_eq!(game.phase(), Phase::Running);
    assert!((0.0..=std::f64::consts::TAU).contains(&game.bar_angle));
}

#[test]
fn test_reset_keeps_best_score() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut game = running(&mut rng);
    game.target_angle = game.bar_angle + game.bar_speed;
    game.tick(&[fist()], FRAME, &mut rng);
    game.grace_timer = 0.0;
    game.target_angle = game.bar_angle + std::f64::consts::PI;
    game.tick(&[fist()], FRAME, &mut rng);
    assert!(game.is_over());

    game.reset(&mut rng);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score, 1);

    // Clicks off the button leave the start screen up.
    assert!(!game.click(FieldPoint::new(5.0, 5.0), &mut rng));
    assert!(game.activate(&mut rng));
    assert_eq!(game.phase(), Phase::Running);
}
