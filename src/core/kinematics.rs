//! Closed-form kinematics for a body launched straight up (or down) under
//! constant gravity.
//!
//! Heights are measured from the ground (`y = 0`), velocities are positive
//! upward and `g` is the magnitude of the gravitational acceleration. None of
//! the functions here validate their arguments: `g` must be strictly positive.
//! Use [`LaunchInputs::new`] at the edges of the program to enforce that.

use crate::error::{Error, Result};

/// Width of the cosmetic horizontal span the flight is spread over when
/// plotting. Has no physical meaning.
pub const STAGE_WIDTH: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    pub height_m: f64,
    pub velocity_mps: f64,
    pub gravity_mps2: f64,
}

impl LaunchInputs {
    pub fn new(height_m: f64, velocity_mps: f64, gravity_mps2: f64) -> Result<Self> {
        if !height_m.is_finite() || !velocity_mps.is_finite() || !gravity_mps2.is_finite() {
            return Err(Error::InvalidInput(
                "inputs must be finite numbers".to_string(),
            ));
        }
        if height_m < 0.0 {
            return Err(Error::InvalidInput(format!(
                "initial height cannot be negative ({height_m} m)"
            )));
        }
        if gravity_mps2 <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "gravity must be positive ({gravity_mps2} m/s^2)"
            )));
        }

        Ok(Self {
            height_m,
            velocity_mps,
            gravity_mps2,
        })
    }
}

/// Time until the body returns to `y = 0`.
///
/// Solves `d0 + v0*t - 0.5*g*t^2 = 0` and keeps the root
/// `(-b - sqrt(disc)) / (2a)`. A negative discriminant yields `0.0`, which
/// callers must read as "no trajectory" and never divide by.
pub fn solve_time_of_flight(height_m: f64, velocity_mps: f64, gravity_mps2: f64) -> f64 {
    let a = -0.5 * gravity_mps2;
    let b = velocity_mps;
    let c = height_m;
    let disc = (b * b) - (4.0 * a * c);
    if disc < 0.0 {
        return 0.0;
    }

    let t = (-b - disc.sqrt()) / (2.0 * a);
    // (-b - |b|) / (2a) is -0.0 for a body starting on the ground moving down.
    if t == 0.0 { 0.0 } else { t }
}

/// Time to the apex, only defined for an upward launch.
pub fn apex_time(velocity_mps: f64, gravity_mps2: f64) -> Option<f64> {
    (velocity_mps > 0.0).then(|| velocity_mps / gravity_mps2)
}

pub fn max_height(height_m: f64, velocity_mps: f64, gravity_mps2: f64) -> f64 {
    match apex_time(velocity_mps, gravity_mps2) {
        Some(t_apex) => height_at(height_m, velocity_mps, gravity_mps2, t_apex),
        None => height_m,
    }
}

pub fn height_at(height_m: f64, velocity_mps: f64, gravity_mps2: f64, time_s: f64) -> f64 {
    height_m + (velocity_mps * time_s) - (0.5 * gravity_mps2 * time_s * time_s)
}

pub fn velocity_at(velocity_mps: f64, gravity_mps2: f64, time_s: f64) -> f64 {
    velocity_mps - (gravity_mps2 * time_s)
}

/// Maps `time_s` linearly onto `[0, STAGE_WIDTH]`.
///
/// A zero (or negative) flight time maps everything to `0.0` instead of
/// dividing by zero.
pub fn display_x(time_s: f64, time_of_flight_s: f64) -> f64 {
    if time_of_flight_s <= 0.0 {
        return 0.0;
    }
    (time_s / time_of_flight_s) * STAGE_WIDTH
}
