use macroquad::prelude::*;
use vertical_launch::core::Scene;

use crate::constants::{
    CONTROLS_Y, HEADER_COLOR, ILLUSTRATION_GAP, ILLUSTRATION_MAX_W, PANEL_H, PANEL_X, PANEL_Y,
    TITLE_Y,
};
use crate::render::{direction_color, draw_ui_text};
use crate::state::AppRuntime;
use crate::view::PlotArea;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    scene: &Scene,
    area: &PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(area, font);
    draw_plot_title(scene, area, font);
    draw_readouts(scene, area, font);
    draw_summary_block(state, area.left, screen_h, font);
    if state.show_equations {
        draw_equations(scene, state, screen_h, font);
    }
}

fn draw_header_block(area: &PlotArea, font: Option<&Font>) {
    draw_ui_text(
        "Vertical Launch Simulator - Time Control",
        area.left,
        TITLE_Y,
        30,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        "Move the time slider to walk the flight step by step and watch height and velocity change.",
        area.left,
        TITLE_Y + 28.0,
        18,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        "Controls: Space play/pause | Left/Right step | Home reset time | W/S height | A/D velocity | E equations",
        area.left,
        CONTROLS_Y,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_plot_title(scene: &Scene, area: &PlotArea, font: Option<&Font>) {
    let size = measure_text(&scene.title, font, 24, 1.0);
    draw_ui_text(
        &scene.title,
        area.left + ((area.width() - size.width) * 0.5),
        area.top - 14.0,
        24,
        HEADER_COLOR,
        font,
    );
}

/// Metric column to the right of the plot.
fn draw_readouts(scene: &Scene, area: &PlotArea, font: Option<&Font>) {
    let x = area.right + 40.0;
    let mut y = area.top + 30.0;
    let state = scene.state;
    let metrics = [
        ("Time", format!("{:.2} s", state.time_s), HEADER_COLOR),
        ("Current height", format!("{:.2} m", state.height_m), HEADER_COLOR),
        (
            "Current velocity",
            format!("{:.2} m/s", state.velocity_mps),
            direction_color(state.direction()),
        ),
    ];

    for (caption, value, color) in metrics {
        draw_ui_text(caption, x, y, 18, DARKGRAY, font);
        draw_ui_text(&value, x, y + 36.0, 34, color, font);
        y += 90.0;
    }
}

fn draw_summary_block(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let trajectory = &state.trajectory;
    draw_ui_text(
        &format!(
            "Place: {} | Height: {:.1} m | Velocity: {:.1} m/s",
            state.body(),
            state.height_m,
            state.velocity_mps
        ),
        left,
        screen_h - 45.0,
        22,
        HEADER_COLOR,
        font,
    );

    let flight = if trajectory.has_flight() {
        format!(
            "Flight: {:.2} s | Max height: {:.2} m | {}",
            trajectory.time_of_flight_s(),
            trajectory.max_height_m(),
            if state.playing { "Playing" } else { "Paused" }
        )
    } else {
        "Flight: none, the body is on the ground moving down".to_string()
    };
    draw_ui_text(&flight, left, screen_h - 14.0, 20, BLUE, font);
}

fn draw_equations(scene: &Scene, state: &AppRuntime, screen_h: f32, font: Option<&Font>) {
    let x = PANEL_X;
    let y = screen_h - 150.0;
    let body = state.body();
    draw_rectangle(
        x,
        y - 30.0,
        420.0,
        130.0,
        Color::from_rgba(255, 255, 255, 235),
    );
    draw_rectangle_lines(x, y - 30.0, 420.0, 130.0, 1.5, LIGHTGRAY);
    draw_ui_text("y(t) = y0 + v0*t - 1/2*g*t^2", x + 12.0, y, 22, HEADER_COLOR, font);
    draw_ui_text("v(t) = v0 - g*t", x + 12.0, y + 28.0, 22, HEADER_COLOR, font);
    draw_ui_text(
        &format!(
            "At {:.2} s, {} gravity ({} m/s^2) has removed",
            scene.state.time_s, body.name, body.gravity_mps2
        ),
        x + 12.0,
        y + 60.0,
        17,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        &format!(
            "{:.2} m/s from the initial velocity.",
            scene.state.gravity_loss_mps
        ),
        x + 12.0,
        y + 82.0,
        17,
        DARKGRAY,
        font,
    );
}

/// Draws the reference illustration under the control panel.
pub(crate) fn draw_illustration(texture: &Texture2D, font: Option<&Font>) {
    let scale = (ILLUSTRATION_MAX_W / texture.width().max(1.0)).min(1.0);
    let size = vec2(texture.width() * scale, texture.height() * scale);
    let y = PANEL_Y + PANEL_H + ILLUSTRATION_GAP;
    draw_texture_ex(
        texture,
        PANEL_X,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(size),
            ..Default::default()
        },
    );
    draw_ui_text("Reference", PANEL_X, y + size.y + 18.0, 16, DARKGRAY, font);
}
