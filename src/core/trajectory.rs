use log::debug;

use crate::core::kinematics::{
    LaunchInputs, STAGE_WIDTH, apex_time, display_x, height_at, max_height,
    solve_time_of_flight, velocity_at,
};
use crate::core::scrub::TimeScrub;

pub const TRAJECTORY_SAMPLES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Everything that can be read off the flight at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightState {
    pub time_s: f64,
    pub height_m: f64,
    pub velocity_mps: f64,
    pub display_x: f64,
    /// Velocity gravity has removed since launch (`g * t`).
    pub gravity_loss_mps: f64,
}

impl FlightState {
    pub fn direction(&self) -> Direction {
        if self.velocity_mps > 0.0 {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }
}

/// Derived values of one launch, rebuilt whenever an input changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    inputs: LaunchInputs,
    time_of_flight_s: f64,
    max_height_m: f64,
    apex_time_s: Option<f64>,
}

impl Trajectory {
    pub fn new(inputs: LaunchInputs) -> Self {
        let LaunchInputs {
            height_m,
            velocity_mps,
            gravity_mps2,
        } = inputs;
        let time_of_flight_s = solve_time_of_flight(height_m, velocity_mps, gravity_mps2);
        let max_height_m = max_height(height_m, velocity_mps, gravity_mps2);
        let apex_time_s = apex_time(velocity_mps, gravity_mps2);

        debug!(
            "trajectory d0={height_m} v0={velocity_mps} g={gravity_mps2}: \
             t_total={time_of_flight_s:.4}s h_max={max_height_m:.4}m"
        );

        Self {
            inputs,
            time_of_flight_s,
            max_height_m,
            apex_time_s,
        }
    }

    pub fn inputs(&self) -> LaunchInputs {
        self.inputs
    }

    pub fn time_of_flight_s(&self) -> f64 {
        self.time_of_flight_s
    }

    pub fn max_height_m(&self) -> f64 {
        self.max_height_m
    }

    pub fn apex_time_s(&self) -> Option<f64> {
        self.apex_time_s
    }

    pub fn has_flight(&self) -> bool {
        self.time_of_flight_s > 0.0
    }

    pub fn scrub(&self) -> TimeScrub {
        TimeScrub::new(self.time_of_flight_s)
    }

    pub fn state_at(&self, time_s: f64) -> FlightState {
        let LaunchInputs {
            height_m,
            velocity_mps,
            gravity_mps2,
        } = self.inputs;
        FlightState {
            time_s,
            height_m: height_at(height_m, velocity_mps, gravity_mps2, time_s),
            velocity_mps: velocity_at(velocity_mps, gravity_mps2, time_s),
            display_x: display_x(time_s, self.time_of_flight_s),
            gravity_loss_mps: gravity_mps2 * time_s,
        }
    }

    /// Evenly spaced `(display x, height)` points from launch to landing,
    /// both ends included.
    pub fn sample_path(&self, samples: usize) -> Vec<(f64, f64)> {
        let LaunchInputs {
            height_m,
            velocity_mps,
            gravity_mps2,
        } = self.inputs;
        let sample_count = samples.max(2);
        let last = (sample_count - 1) as f64;
        (0..sample_count)
            .map(|i| {
                let frac = i as f64 / last;
                let t = frac * self.time_of_flight_s;
                (
                    frac * STAGE_WIDTH,
                    height_at(height_m, velocity_mps, gravity_mps2, t),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(d0: f64, v0: f64, g: f64) -> Trajectory {
        Trajectory::new(LaunchInputs::new(d0, v0, g).expect("valid inputs"))
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn readouts_follow_the_building_launch() {
        let flight = trajectory(50.0, 15.0, 9.81);
        assert!(flight.has_flight());
        assert_close(flight.max_height_m(), 61.47, 0.01);

        let start = flight.state_at(0.0);
        assert_eq!(start.height_m, 50.0);
        assert_eq!(start.velocity_mps, 15.0);
        assert_eq!(start.display_x, 0.0);
        assert_eq!(start.direction(), Direction::Ascending);

        let later = flight.state_at(2.0);
        assert_close(later.height_m, 60.38, 1e-9);
        assert_close(later.velocity_mps, -4.62, 1e-9);
        assert_close(later.gravity_loss_mps, 19.62, 1e-9);
        assert_eq!(later.direction(), Direction::Descending);

        let landing = flight.state_at(flight.time_of_flight_s());
        assert_close(landing.display_x, STAGE_WIDTH, 1e-12);
        assert_close(landing.height_m, 0.0, 1e-9);
    }

    #[test]
    fn zero_velocity_counts_as_descending() {
        let flight = trajectory(10.0, 0.0, 9.81);
        assert_eq!(flight.state_at(0.0).direction(), Direction::Descending);
    }

    #[test]
    fn path_spans_launch_to_landing() {
        let flight = trajectory(50.0, 15.0, 9.81);
        let path = flight.sample_path(TRAJECTORY_SAMPLES);
        assert_eq!(path.len(), TRAJECTORY_SAMPLES);
        assert_eq!(path[0], (0.0, 50.0));

        let (x_end, y_end) = path[TRAJECTORY_SAMPLES - 1];
        assert_close(x_end, STAGE_WIDTH, 1e-12);
        assert_close(y_end, 0.0, 1e-9);
        assert!(path.windows(2).all(|w| w[1].0 > w[0].0));
    }

    #[test]
    fn grounded_body_has_flat_path_and_no_flight() {
        let flight = trajectory(0.0, -5.0, 9.81);
        assert!(!flight.has_flight());
        assert!(flight.scrub().is_degenerate());
        assert_eq!(flight.max_height_m(), 0.0);
        assert!(flight.apex_time_s().is_none());
        assert_eq!(flight.state_at(0.0).display_x, 0.0);

        let path = flight.sample_path(1);
        assert_eq!(path.len(), 2);
        assert!(path.iter().all(|&(_, y)| y == 0.0));
    }
}
