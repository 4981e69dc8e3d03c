//! Integration test: gesture classification from wire-format frames
//!
//! Feeds tracker JSON through the stream parser and checks what the
//! classifier makes of the resulting hands.

use gesture_arcade::gesture::{
    horizontal_thumb_displacement, is_fist_closed, step_for, vertical_displacement, Step,
    THUMB_STEER_THRESHOLD, VERTICAL_STEER_THRESHOLD,
};
use gesture_arcade::tracking::landmarks::{
    FINGER_TIP_BASE, INDEX_TIP, THUMB_MCP, THUMB_TIP, WRIST,
};
use gesture_arcade::tracking::stream::parse_frame_line;
use gesture_arcade::tracking::{HandLandmarks, Landmark, LANDMARK_COUNT};

/// Serialize one hand the way a tracker would.
fn wire_line(hand: &HandLandmarks, mirrored: bool) -> String {
    let points: Vec<String> = hand
        .points()
        .iter()
        .map(|p| format!(r#"{{"x": {}, "y": {}}}"#, p.x, p.y))
        .collect();
    format!(
        r#"{{"hands": [[{}]], "mirrored": {}}}"#,
        points.join(", "),
        mirrored
    )
}

fn open_palm() -> HandLandmarks {
    let mut hand = HandLandmarks::uniform(Landmark::new(0.5, 0.6));
    hand.set(WRIST, Landmark::new(0.5, 0.8));
    for (i, (tip, _)) in FINGER_TIP_BASE.iter().enumerate() {
        hand.set(*tip, Landmark::new(0.4 + 0.05 * i as f64, 0.3));
    }
    hand
}

fn single_hand(line: &str) -> HandLandmarks {
    match parse_frame_line(line, 1) {
        Ok(mut frame) if frame.hands.len() == 1 => frame.hands.remove(0),
        other => panic!("expected one hand, got {:?}", other),
    }
}

#[test]
fn test_fist_survives_the_wire() {
    let fist = HandLandmarks::uniform(Landmark::new(0.3, 0.4));
    let hand = single_hand(&wire_line(&fist, true));
    assert!(is_fist_closed(&hand));

    let hand = single_hand(&wire_line(&open_palm(), true));
    assert!(!is_fist_closed(&hand));
}

#[test]
fn test_one_extended_finger_breaks_the_fist() {
    let mut hand = HandLandmarks::uniform(Landmark::new(0.5, 0.5));
    let (tip, _) = FINGER_TIP_BASE[3];
    hand.set(tip, Landmark::new(0.5, 0.3));
    assert!(!is_fist_closed(&hand));
}

#[test]
fn test_unmirrored_frames_flip_thumb_direction() {
    let mut hand = HandLandmarks::uniform(Landmark::new(0.5, 0.5));
    hand.set(THUMB_MCP, Landmark::new(0.5, 0.5));
    hand.set(THUMB_TIP, Landmark::new(0.6, 0.5));

    let mirrored = single_hand(&wire_line(&hand, true));
    let raw = single_hand(&wire_line(&hand, false));

    assert_eq!(
        step_for(horizontal_thumb_displacement(&mirrored), THUMB_STEER_THRESHOLD),
        Step::Right
    );
    assert_eq!(
        step_for(horizontal_thumb_displacement(&raw), THUMB_STEER_THRESHOLD),
        Step::Left
    );
}

#[test]
fn test_index_below_wrist_steers_right() {
    let mut hand = HandLandmarks::uniform(Landmark::new(0.5, 0.5));
    hand.set(WRIST, Landmark::new(0.5, 0.5));
    hand.set(INDEX_TIP, Landmark::new(0.5, 0.62));
    assert_eq!(
        step_for(vertical_displacement(&hand), VERTICAL_STEER_THRESHOLD),
        Step::Right
    );

    hand.set(INDEX_TIP, Landmark::new(0.5, 0.4));
    assert_eq!(
        step_for(vertical_displacement(&hand), VERTICAL_STEER_THRESHOLD),
        Step::Left
    );

    hand.set(INDEX_TIP, Landmark::new(0.5, 0.53));
    assert_eq!(
        step_for(vertical_displacement(&hand), VERTICAL_STEER_THRESHOLD),
        Step::Hold
    );

    // Exactly on the threshold holds still.
    assert_eq!(
        step_for(VERTICAL_STEER_THRESHOLD, VERTICAL_STEER_THRESHOLD),
        Step::Hold
    );
}

#[test]
fn test_short_hand_is_rejected() {
    let points: Vec<String> = (0..LANDMARK_COUNT - 1)
        .map(|_| r#"{"x": 0.5, "y": 0.5}"#.to_string())
        .collect();
    let line = format!(r#"{{"hands": [[{}]]}}"#, points.join(","));
    assert!(parse_frame_line(&line, 9).is_err());
}

#[test]
fn test_blank_line_has_no_hands() {
    match parse_frame_line("   ", 3) {
        Ok(frame) => assert!(!frame.has_hands()),
        Err(err) => panic!("blank line should parse: {}", err),
    }
}
