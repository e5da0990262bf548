use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use vertical_launch::core::BODIES;

use crate::constants::{MIN_HEIGHT_M, PANEL_H, PANEL_W, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) play_pause: bool,
    pub(crate) reset_time: bool,
    pub(crate) toggle_equations: bool,
    pub(crate) step_back: bool,
    pub(crate) step_forward: bool,
    /// Slider moved to this time this frame.
    pub(crate) scrub_to: Option<f32>,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            play_pause: self.play_pause || other.play_pause,
            reset_time: self.reset_time || other.reset_time,
            toggle_equations: self.toggle_equations || other.toggle_equations,
            step_back: self.step_back || other.step_back,
            step_forward: self.step_forward || other.step_forward,
            scrub_to: other.scrub_to.or(self.scrub_to),
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        play_pause: is_key_pressed(KeyCode::Space),
        reset_time: is_key_pressed(KeyCode::Home),
        toggle_equations: is_key_pressed(KeyCode::E),
        step_back: is_key_pressed(KeyCode::Left),
        step_forward: is_key_pressed(KeyCode::Right),
        scrub_to: None,
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let labels: Vec<String> = BODIES.iter().map(|body| body.label()).collect();
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let (scrub_min, scrub_max) = state.scrub().range();
    let time_before = state.time_s;

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, "1. Setting");
            ui.combo_box(hash!(), "Place", &label_refs, &mut state.body_idx);
            ui.separator();
            ui.label(None, "2. Initial conditions");
            ui.drag(
                hash!(),
                "Height (m)",
                (MIN_HEIGHT_M, f32::MAX),
                &mut state.height_m,
            );
            ui.drag(
                hash!(),
                "Velocity (m/s)",
                None::<(f32, f32)>,
                &mut state.velocity_mps,
            );
            ui.label(None, "Positive = up, negative = down");
            ui.separator();
            ui.label(None, "3. Timeline");
            ui.slider(
                hash!(),
                "Time (s)",
                scrub_min as f32..scrub_max as f32,
                &mut state.time_s,
            );
            if !state.trajectory.has_flight() {
                ui.label(None, "No flight: the body is not in the air");
            }
            if ui.button(None, if state.playing { "Pause (Space)" } else { "Play (Space)" }) {
                actions.play_pause = true;
            }
            if ui.button(None, "Reset time (Home)") {
                actions.reset_time = true;
            }
            if ui.button(
                None,
                if state.show_equations {
                    "Hide equations (E)"
                } else {
                    "Show equations (E)"
                },
            ) {
                actions.toggle_equations = true;
            }
        });

    if state.time_s != time_before {
        actions.scrub_to = Some(state.time_s);
    }
    actions
}
