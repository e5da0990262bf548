use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 120.0;
pub const PANEL_W: f32 = 380.0;
pub const PANEL_H: f32 = 330.0;
pub const ILLUSTRATION_MAX_W: f32 = 360.0;
pub const ILLUSTRATION_GAP: f32 = 16.0;

pub const LEFT_MARGIN: f32 = 480.0;
pub const RIGHT_MARGIN: f32 = 260.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const MIN_HEIGHT_M: f32 = 0.0;
pub const HEIGHT_KEY_RATE_MPS: f32 = 20.0;
pub const VELOCITY_KEY_RATE_MPS: f32 = 10.0;

/// Playback runs at real time scaled by this factor.
pub const PLAYBACK_SPEED: f64 = 1.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const BUILDING_COLOR: Color = Color::new(0.5, 0.5, 0.5, 0.3);
pub const PATH_COLOR: Color = Color::new(0.5, 0.5, 0.5, 0.6);
pub const ASCENDING_COLOR: Color = Color::new(0.12, 0.47, 0.71, 1.0);
pub const DESCENDING_COLOR: Color = Color::new(0.84, 0.15, 0.16, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const MARKER_RADIUS: f32 = 9.0;
