use log::{debug, warn};
use vertical_launch::core::gravity::body_index;
use vertical_launch::core::{BODIES, Body, LaunchInputs, Scene, TimeScrub, Trajectory};

use crate::constants::MIN_HEIGHT_M;

const TIME_EPSILON_S: f64 = 1e-4;

/// Everything the window owns between frames.
pub(crate) struct AppRuntime {
    pub(crate) body_idx: usize,
    pub(crate) height_m: f32,
    pub(crate) velocity_mps: f32,
    pub(crate) time_s: f32,
    pub(crate) playing: bool,
    pub(crate) show_equations: bool,
    pub(crate) trajectory: Trajectory,
    applied: LaunchInputs,
}

impl AppRuntime {
    pub(crate) fn new(body: &'static Body, inputs: LaunchInputs) -> Self {
        Self {
            body_idx: body_index(body),
            height_m: inputs.height_m as f32,
            velocity_mps: inputs.velocity_mps as f32,
            time_s: 0.0,
            playing: false,
            show_equations: false,
            trajectory: Trajectory::new(inputs),
            applied: inputs,
        }
    }

    pub(crate) fn body(&self) -> &'static Body {
        &BODIES[self.body_idx.min(BODIES.len() - 1)]
    }

    pub(crate) fn scrub(&self) -> TimeScrub {
        self.trajectory.scrub()
    }

    /// Height stays on or above the ground. Velocity keeps any sign and size.
    /// A non-finite edit falls back to the last applied launch.
    pub(crate) fn bound_inputs(&mut self) {
        if !self.height_m.is_finite() {
            self.height_m = self.applied.height_m as f32;
        }
        if !self.velocity_mps.is_finite() {
            self.velocity_mps = self.applied.velocity_mps as f32;
        }
        self.height_m = self.height_m.max(MIN_HEIGHT_M);
    }

    /// Rebuilds the trajectory when a control moved. The scrub restarts
    /// at zero for a new flight.
    pub(crate) fn sync_inputs(&mut self) {
        let inputs = match LaunchInputs::new(
            self.height_m as f64,
            self.velocity_mps as f64,
            self.body().gravity_mps2,
        ) {
            Ok(inputs) => inputs,
            Err(err) => {
                warn!("ignoring control values: {err}");
                return;
            }
        };
        if inputs == self.applied {
            return;
        }

        debug!("inputs changed, rebuilding trajectory");
        self.applied = inputs;
        self.trajectory = Trajectory::new(inputs);
        self.time_s = 0.0;
        self.playing = false;
    }

    pub(crate) fn set_time(&mut self, time_s: f64) {
        self.time_s = self.scrub().clamp(time_s) as f32;
    }

    /// The slider stores `f32`, so the landing time may be off by a rounding.
    pub(crate) fn at_end(&self) -> bool {
        self.scrub().is_at_end(self.time_s as f64 + TIME_EPSILON_S)
    }

    pub(crate) fn scene(&self) -> Scene {
        Scene::compose(&self.trajectory, self.time_s as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertical_launch::core::find_body;

    fn runtime(height_m: f64, velocity_mps: f64) -> AppRuntime {
        let earth = find_body("earth").unwrap();
        let inputs = LaunchInputs::new(height_m, velocity_mps, earth.gravity_mps2).unwrap();
        AppRuntime::new(earth, inputs)
    }

    #[test]
    fn large_launch_values_survive_a_frame() {
        let mut state = runtime(1000.0, -200.0);
        let before = state.trajectory;

        state.bound_inputs();
        state.sync_inputs();

        assert_eq!(state.height_m, 1000.0);
        assert_eq!(state.velocity_mps, -200.0);
        assert_eq!(state.trajectory, before);
    }

    #[test]
    fn height_is_floored_at_ground() {
        let mut state = runtime(50.0, 15.0);
        state.height_m = -12.0;
        state.velocity_mps = 900.0;

        state.bound_inputs();
        state.sync_inputs();

        assert_eq!(state.height_m, 0.0);
        assert_eq!(state.velocity_mps, 900.0);
        assert_eq!(state.trajectory.inputs().height_m, 0.0);
        assert_eq!(state.trajectory.inputs().velocity_mps, 900.0);
    }

    #[test]
    fn non_finite_edit_keeps_last_launch() {
        let mut state = runtime(50.0, 15.0);
        state.height_m = f32::INFINITY;
        state.velocity_mps = f32::NAN;

        state.bound_inputs();

        assert_eq!(state.height_m, 50.0);
        assert_eq!(state.velocity_mps, 15.0);
    }

    #[test]
    fn changed_input_restarts_the_timeline() {
        let mut state = runtime(50.0, 15.0);
        state.set_time(2.0);
        state.playing = true;

        state.velocity_mps = 20.0;
        state.sync_inputs();

        assert_eq!(state.time_s, 0.0);
        assert!(!state.playing);
        assert_eq!(state.trajectory.inputs().velocity_mps, 20.0);
    }
}
