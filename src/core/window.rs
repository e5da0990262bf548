//! Data window of the plot, in metres on both axes (the x axis being the
//! cosmetic stage coordinate).

pub const X_MIN: f64 = -2.5;
pub const X_MAX: f64 = 6.0;
pub const Y_MIN: f64 = -5.0;

/// Headroom above the apex.
const Y_HEADROOM_RATIO: f64 = 1.2;
const MIN_Y_MAX: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotWindow {
    pub fn for_peak(max_height_m: f64) -> Self {
        Self {
            x_min: X_MIN,
            x_max: X_MAX,
            y_min: Y_MIN,
            y_max: (max_height_m * Y_HEADROOM_RATIO).max(MIN_Y_MAX),
        }
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_headroom_above_apex() {
        let window = PlotWindow::for_peak(61.47);
        assert!((window.y_max - 73.764).abs() < 1e-9);
        assert_eq!(window.y_min, Y_MIN);
        assert_eq!(window.x_span(), 8.5);
        assert!(window.contains(0.0, 61.47));
        assert!(!window.contains(7.0, 0.0));
    }

    #[test]
    fn flat_flight_keeps_positive_span() {
        let window = PlotWindow::for_peak(0.0);
        assert!(window.y_span() > 0.0);
        assert!(window.y_max > 0.0);
    }
}
