//! Static export of a [`Scene`] through plotters.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::gravity::Body;
use crate::core::scene::{Scene, X_CAPTION, Y_CAPTION};
use crate::core::trajectory::Direction;
use crate::error::{Error, Result};

pub const DEFAULT_PLOT_SIZE: (u32, u32) = (1000, 500);

const BUILDING_FILL: RGBColor = RGBColor(128, 128, 128);
const PATH_COLOR: RGBColor = RGBColor(128, 128, 128);
const ASCENDING_COLOR: RGBColor = RGBColor(31, 119, 180);
const DESCENDING_COLOR: RGBColor = RGBColor(214, 39, 40);
const MARKER_RADIUS_PX: i32 = 8;

fn plot_err(err: impl Display) -> Error {
    Error::Plot(err.to_string())
}

pub fn direction_color(direction: Direction) -> RGBColor {
    match direction {
        Direction::Ascending => ASCENDING_COLOR,
        Direction::Descending => DESCENDING_COLOR,
    }
}

/// `launch_<body>_<timestamp>.png` in the working directory.
pub fn default_plot_path(body: &Body) -> PathBuf {
    PathBuf::from(format!(
        "launch_{}_{}.png",
        body.name.to_lowercase(),
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Writes the scene to `path`; `.svg` selects the SVG backend, any other
/// extension the bitmap one.
pub fn render_to_file(scene: &Scene, path: &Path, size: (u32, u32)) -> Result<()> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_scene(&root, scene)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_scene(&root, scene)?;
    }

    info!("wrote {}", path.display());
    Ok(())
}

fn draw_scene<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &Scene) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let window = scene.window;
    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(X_CAPTION)
        .y_desc(Y_CAPTION)
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(plot_err)?;

    let building = scene.building;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [
                (building.left_x, 0.0),
                (building.right_x, building.height_m),
            ],
            BUILDING_FILL.mix(0.3).filled(),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series([
            PathElement::new(
                vec![
                    (building.left_x, building.height_m),
                    (building.right_x, building.height_m),
                ],
                BLACK.stroke_width(1),
            ),
            PathElement::new(
                vec![
                    (building.right_x, building.height_m),
                    (building.platform_end_x, building.height_m),
                ],
                BLACK.stroke_width(3),
            ),
            PathElement::new(
                vec![(window.x_min, 0.0), (window.x_max, 0.0)],
                BLACK.stroke_width(1),
            ),
        ])
        .map_err(plot_err)?;

    chart
        .draw_series(
            scene
                .dash_runs()
                .into_iter()
                .map(|run| PathElement::new(run.to_vec(), PATH_COLOR.mix(0.5).stroke_width(2))),
        )
        .map_err(plot_err)?;

    let color = direction_color(scene.arrow.direction);
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![scene.arrow.origin, scene.arrow.tip()],
            color.stroke_width(2),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(std::iter::once(Polygon::new(
            scene.arrow.head().to_vec(),
            color.filled(),
        )))
        .map_err(plot_err)?;

    chart
        .draw_series([
            Circle::new(scene.marker, MARKER_RADIUS_PX, RED.filled()),
            Circle::new(scene.marker, MARKER_RADIUS_PX, BLACK.stroke_width(1)),
        ])
        .map_err(plot_err)?;

    chart
        .draw_series(std::iter::once(Text::new(
            scene.label.text.clone(),
            scene.label.anchor,
            ("sans-serif", 16).into_font().color(&color),
        )))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
