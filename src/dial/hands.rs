use std::f64::consts::TAU;

/// Rotations of the three clock hands, in radians, clockwise from the top.
///
/// Values grow without bound with the timestamp; use [`HandRotations::wrapped`]
/// when a value in `[0, 2π)` is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandRotations {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
}

impl HandRotations {
    pub fn wrapped(self) -> Self {
        Self {
            seconds: self.seconds.rem_euclid(TAU),
            minutes: self.minutes.rem_euclid(TAU),
            hours: self.hours.rem_euclid(TAU),
        }
    }
}

/// Hand rotations for a Unix timestamp in milliseconds.
///
/// The seconds hand turns once a minute and the minutes hand once an hour. The hour
/// hand turns every twelve hours and carries a fixed `1/12` turn offset.
pub fn hand_rotations(unix_millis: i64) -> HandRotations {
    let minutes = unix_millis as f64 / 1000.0 / 60.0;
    let hours = minutes / 60.0;
    HandRotations {
        seconds: minutes * TAU,
        minutes: hours * TAU,
        hours: (hours / 12.0 + 1.0 / 12.0) * TAU,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dial/hands.rs"]
mod tests;
