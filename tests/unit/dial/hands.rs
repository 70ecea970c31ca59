use std::f64::consts::{PI, TAU};

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn epoch_only_offsets_the_hour_hand() {
    let r = hand_rotations(0);
    assert_eq!(r.seconds, 0.0);
    assert_eq!(r.minutes, 0.0);
    assert!(approx(r.hours, TAU / 12.0));
}

#[test]
fn thirty_seconds_is_half_a_turn() {
    let r = hand_rotations(30_000);
    assert!(approx(r.seconds, PI));
    assert!(approx(r.minutes, PI / 60.0));
}

#[test]
fn wrapped_stays_within_one_turn() {
    let r = hand_rotations(90_000).wrapped();
    assert!(approx(r.seconds, PI));
    assert!((0.0..TAU).contains(&r.minutes));
    assert!((0.0..TAU).contains(&r.hours));

    let past = hand_rotations(-15_000).wrapped();
    assert!(approx(past.seconds, 1.5 * PI));
}
