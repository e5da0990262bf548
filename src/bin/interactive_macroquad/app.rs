use std::path::Path;

use log::{info, warn};
use macroquad::prelude::*;
use vertical_launch::Result;
use vertical_launch::config::{ILLUSTRATION_PATH, LaunchArgs, LaunchSettings};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::{draw_hud, draw_illustration};
use crate::playback::{apply_actions, apply_keyboard_adjustments, step_playback};
use crate::render::{
    draw_axis_tick_labels, draw_building, draw_dashed_path, draw_grid, draw_ground, draw_marker,
    draw_velocity_arrow, draw_velocity_label,
};
use crate::state::AppRuntime;
use crate::view::PlotArea;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Vertical Launch Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

/// Decorative only: a missing or unreadable file is skipped.
async fn load_illustration() -> Option<Texture2D> {
    if !Path::new(ILLUSTRATION_PATH).exists() {
        return None;
    }
    load_texture(ILLUSTRATION_PATH).await.ok()
}

pub(crate) async fn run(args: &LaunchArgs) -> Result<()> {
    let settings = LaunchSettings::from_args(args)?;
    let inputs = settings.inputs()?;

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("could not load '{UI_FONT_PATH}': {err}, falling back to default font");
            None
        }
    };
    let illustration = load_illustration().await;

    let mut state = AppRuntime::new(settings.body, inputs);
    info!("interactive session started");

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_keyboard_adjustments(&mut state, frame_dt);
        state.sync_inputs();
        apply_actions(&mut state, actions);
        step_playback(&mut state, frame_dt);

        let scene = state.scene();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
            top: TOP_MARGIN,
            bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + 1.0),
            window: scene.window,
        };

        clear_background(BACKGROUND);
        draw_grid(&area, GRID_COLOR);
        draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
        draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(&area, ui_font.as_ref());
        draw_ground(&area);

        draw_building(&area, scene.building);
        draw_dashed_path(&area, &scene, 2.0);
        draw_velocity_arrow(&area, &scene.arrow);
        draw_marker(&area, scene.marker);
        draw_velocity_label(&area, &scene, ui_font.as_ref());

        draw_hud(&state, &scene, &area, screen_h, ui_font.as_ref());
        if let Some(texture) = illustration.as_ref() {
            draw_illustration(texture, ui_font.as_ref());
        }

        next_frame().await;
    }
}
