//! Renderer-neutral description of one frame of the visualizer.
//!
//! Both front ends (the macroquad window and the plotters export) draw a
//! [`Scene`]; neither computes physics on its own.

use crate::core::trajectory::{Direction, FlightState, TRAJECTORY_SAMPLES, Trajectory};
use crate::core::window::PlotWindow;

pub const BUILDING_LEFT_X: f64 = -2.0;
pub const PLATFORM_END_X: f64 = 0.5;

/// Arrow length per m/s of velocity.
pub const ARROW_SCALE: f64 = 0.5;
pub const ARROW_HEAD_WIDTH: f64 = 0.2;
pub const ARROW_HEAD_LENGTH: f64 = 0.3;
pub const LABEL_OFFSET_X: f64 = 0.3;

/// Dash pattern of the static path, in samples.
const DASH_ON_SAMPLES: usize = 4;
const DASH_OFF_SAMPLES: usize = 3;

pub const X_CAPTION: &str = "Simulated horizontal distance";
pub const Y_CAPTION: &str = "Height (m)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Building {
    pub left_x: f64,
    pub right_x: f64,
    pub height_m: f64,
    pub platform_end_x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityArrow {
    pub origin: (f64, f64),
    /// Signed vertical extent, head not included.
    pub length: f64,
    pub head_width: f64,
    pub head_length: f64,
    pub direction: Direction,
}

impl VelocityArrow {
    pub fn tip(&self) -> (f64, f64) {
        (self.origin.0, self.origin.1 + self.length)
    }

    /// Triangle of the head, pointing along the velocity.
    pub fn head(&self) -> [(f64, f64); 3] {
        let (x, y) = self.tip();
        let sign = if self.length < 0.0 { -1.0 } else { 1.0 };
        let half = self.head_width * 0.5;
        [
            (x - half, y),
            (x + half, y),
            (x, y + (sign * self.head_length)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub window: PlotWindow,
    pub title: String,
    pub building: Building,
    pub path: Vec<(f64, f64)>,
    pub state: FlightState,
    pub marker: (f64, f64),
    pub arrow: VelocityArrow,
    pub label: Label,
}

impl Scene {
    pub fn compose(trajectory: &Trajectory, time_s: f64) -> Self {
        let state = trajectory.state_at(time_s);
        let marker = (state.display_x, state.height_m);

        Self {
            window: PlotWindow::for_peak(trajectory.max_height_m()),
            title: format!("Instant t = {:.2} s", state.time_s),
            building: Building {
                left_x: BUILDING_LEFT_X,
                right_x: 0.0,
                height_m: trajectory.inputs().height_m,
                platform_end_x: PLATFORM_END_X,
            },
            path: trajectory.sample_path(TRAJECTORY_SAMPLES),
            state,
            marker,
            arrow: VelocityArrow {
                origin: marker,
                length: state.velocity_mps * ARROW_SCALE,
                head_width: ARROW_HEAD_WIDTH,
                head_length: ARROW_HEAD_LENGTH,
                direction: state.direction(),
            },
            label: Label {
                text: format!("v = {:.1} m/s", state.velocity_mps),
                anchor: (marker.0 + LABEL_OFFSET_X, marker.1),
            },
        }
    }

    /// The static path cut into dashes.
    pub fn dash_runs(&self) -> Vec<&[(f64, f64)]> {
        dash_runs(&self.path)
    }
}

pub fn dash_runs(points: &[(f64, f64)]) -> Vec<&[(f64, f64)]> {
    let period = DASH_ON_SAMPLES + DASH_OFF_SAMPLES;
    (0..points.len())
        .step_by(period)
        .map(|start| {
            let end = (start + DASH_ON_SAMPLES).min(points.len());
            &points[start..end]
        })
        .filter(|run| run.len() >= 2)
        .collect()
}
