use macroquad::prelude::*;
use vertical_launch::core::PlotWindow;

/// Screen rectangle the plot window is mapped onto.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) window: PlotWindow,
}

impl PlotArea {
    pub(crate) fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    pub(crate) fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }

    pub(crate) fn world_to_screen(&self, world: (f64, f64)) -> Vec2 {
        let fx = ((world.0 - self.window.x_min) / self.window.x_span()) as f32;
        let fy = ((world.1 - self.window.y_min) / self.window.y_span()) as f32;
        vec2(self.left + fx * self.width(), self.bottom - fy * self.height())
    }

    pub(crate) fn x_at(&self, frac: f32) -> f32 {
        self.left + frac * self.width()
    }

    pub(crate) fn y_at(&self, frac: f32) -> f32 {
        self.bottom - frac * self.height()
    }
}
