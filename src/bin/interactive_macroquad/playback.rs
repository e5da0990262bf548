use log::info;
use macroquad::prelude::*;

use crate::constants::{HEIGHT_KEY_RATE_MPS, PLAYBACK_SPEED, VELOCITY_KEY_RATE_MPS};
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if let Some(time_s) = actions.scrub_to {
        state.playing = false;
        state.set_time(time_s as f64);
    }

    if actions.play_pause {
        if state.playing {
            state.playing = false;
        } else if state.trajectory.has_flight() {
            if state.at_end() {
                state.time_s = 0.0;
            }
            state.playing = true;
        }
        info!(
            "playback {}",
            if state.playing { "started" } else { "paused" }
        );
    }

    if actions.reset_time {
        state.playing = false;
        state.time_s = 0.0;
    }

    if actions.step_back {
        state.playing = false;
        state.time_s = state.scrub().nudge(state.time_s as f64, -1) as f32;
    }
    if actions.step_forward {
        state.playing = false;
        state.time_s = state.scrub().nudge(state.time_s as f64, 1) as f32;
    }

    if actions.toggle_equations {
        state.show_equations = !state.show_equations;
    }
}

pub(crate) fn apply_keyboard_adjustments(state: &mut AppRuntime, frame_dt: f32) {
    if !is_mouse_button_down(MouseButton::Left) {
        if is_key_down(KeyCode::W) {
            state.height_m += HEIGHT_KEY_RATE_MPS * frame_dt;
        }
        if is_key_down(KeyCode::S) {
            state.height_m -= HEIGHT_KEY_RATE_MPS * frame_dt;
        }
        if is_key_down(KeyCode::D) {
            state.velocity_mps += VELOCITY_KEY_RATE_MPS * frame_dt;
        }
        if is_key_down(KeyCode::A) {
            state.velocity_mps -= VELOCITY_KEY_RATE_MPS * frame_dt;
        }
    }
    state.bound_inputs();
}

pub(crate) fn step_playback(state: &mut AppRuntime, frame_dt: f32) {
    if !state.playing {
        return;
    }

    let scrub = state.scrub();
    let dt = (frame_dt as f64 * PLAYBACK_SPEED).min(0.10);
    let next = scrub.advance(state.time_s as f64, dt);
    state.time_s = next as f32;
    if scrub.is_at_end(next) {
        state.playing = false;
    }
}
