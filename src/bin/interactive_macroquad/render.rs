use macroquad::prelude::*;
use vertical_launch::core::Direction;
use vertical_launch::core::scene::{Building, Scene, VelocityArrow, X_CAPTION, Y_CAPTION};

use crate::constants::{
    ASCENDING_COLOR, BUILDING_COLOR, DESCENDING_COLOR, MARKER_RADIUS, PATH_COLOR, X_GRID_LINES,
    Y_GRID_LINES,
};
use crate::view::PlotArea;

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn direction_color(direction: Direction) -> Color {
    match direction {
        Direction::Ascending => ASCENDING_COLOR,
        Direction::Descending => DESCENDING_COLOR,
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: &PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let x = area.x_at(i as f32 / X_GRID_LINES as f32);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let y = area.y_at(i as f32 / Y_GRID_LINES as f32);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(area: &PlotArea, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;
    let window = area.window;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.x_at(t);
        let value = window.x_min + (t as f64 * window.x_span());
        let label = format_axis_value(value, window.x_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.y_at(t);
        let value = window.y_min + (t as f64 * window.y_span());
        let label = format_axis_value(value, window.y_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    let x_caption_size = measure_text(X_CAPTION, font, 18, 1.0);
    draw_ui_text(
        X_CAPTION,
        area.right - x_caption_size.width,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(Y_CAPTION, area.left + 10.0, area.top - 8.0, 18, label_color, font);
}

pub(crate) fn draw_ground(area: &PlotArea) {
    let a = area.world_to_screen((area.window.x_min, 0.0));
    let b = area.world_to_screen((area.window.x_max, 0.0));
    draw_line(a.x, a.y, b.x, b.y, 2.0, BLACK);
}

pub(crate) fn draw_building(area: &PlotArea, building: Building) {
    let top_left = area.world_to_screen((building.left_x, building.height_m));
    let bottom_right = area.world_to_screen((building.right_x, 0.0));
    draw_rectangle(
        top_left.x,
        top_left.y,
        (bottom_right.x - top_left.x).max(1.0),
        bottom_right.y - top_left.y,
        BUILDING_COLOR,
    );

    let roof_end = area.world_to_screen((building.right_x, building.height_m));
    draw_line(top_left.x, top_left.y, roof_end.x, roof_end.y, 1.5, BLACK);

    let platform_end = area.world_to_screen((building.platform_end_x, building.height_m));
    draw_line(roof_end.x, roof_end.y, platform_end.x, platform_end.y, 4.0, BLACK);
}

pub(crate) fn draw_dashed_path(area: &PlotArea, scene: &Scene, thickness: f32) {
    for run in scene.dash_runs() {
        let mut prev = area.world_to_screen(run[0]);
        for point in run.iter().skip(1).copied() {
            let cur = area.world_to_screen(point);
            draw_line(prev.x, prev.y, cur.x, cur.y, thickness, PATH_COLOR);
            prev = cur;
        }
    }
}

pub(crate) fn draw_velocity_arrow(area: &PlotArea, arrow: &VelocityArrow) {
    let color = direction_color(arrow.direction);
    let origin = area.world_to_screen(arrow.origin);
    let tip = area.world_to_screen(arrow.tip());
    draw_line(origin.x, origin.y, tip.x, tip.y, 3.0, color);

    let head = arrow.head().map(|corner| area.world_to_screen(corner));
    draw_triangle(head[0], head[1], head[2], color);
}

pub(crate) fn draw_marker(area: &PlotArea, marker: (f64, f64)) {
    let p = area.world_to_screen(marker);
    draw_circle(p.x, p.y, MARKER_RADIUS, RED);
    draw_circle_lines(p.x, p.y, MARKER_RADIUS, 2.0, BLACK);
}

pub(crate) fn draw_velocity_label(area: &PlotArea, scene: &Scene, font: Option<&Font>) {
    let anchor = area.world_to_screen(scene.label.anchor);
    let color = direction_color(scene.arrow.direction);
    draw_ui_text(&scene.label.text, anchor.x, anchor.y, 20, color, font);
}
