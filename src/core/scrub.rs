/// Granularity of the time control.
pub const SCRUB_STEP_S: f64 = 0.05;

/// Upper bound handed to UI controls when there is no flight, so the control
/// never collapses to a zero-width range.
pub const SCRUB_MIN_SPAN_S: f64 = SCRUB_STEP_S;

/// Most rows a timeline will produce before the interval is widened.
pub const MAX_TICKS: usize = 10_000;

/// Time control bounded to `[0, t_total]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScrub {
    max_s: f64,
    step_s: f64,
}

impl TimeScrub {
    pub fn new(time_of_flight_s: f64) -> Self {
        Self {
            max_s: time_of_flight_s.max(0.0),
            step_s: SCRUB_STEP_S,
        }
    }

    pub fn max_s(&self) -> f64 {
        self.max_s
    }

    pub fn step_s(&self) -> f64 {
        self.step_s
    }

    pub fn is_degenerate(&self) -> bool {
        self.max_s <= 0.0
    }

    pub fn range(&self) -> (f64, f64) {
        if self.is_degenerate() {
            (0.0, SCRUB_MIN_SPAN_S)
        } else {
            (0.0, self.max_s)
        }
    }

    /// Snaps to the step grid, then clamps into the flight.
    ///
    /// `t_total` itself is always reachable even when it is not a multiple of
    /// the step.
    pub fn clamp(&self, time_s: f64) -> f64 {
        if self.is_degenerate() || !time_s.is_finite() {
            return 0.0;
        }
        if time_s >= self.max_s {
            return self.max_s;
        }
        let snapped = (time_s / self.step_s).round() * self.step_s;
        snapped.clamp(0.0, self.max_s)
    }

    pub fn advance(&self, time_s: f64, dt_s: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (time_s + dt_s.max(0.0)).clamp(0.0, self.max_s)
    }

    pub fn nudge(&self, time_s: f64, steps: i32) -> f64 {
        self.clamp(time_s + (steps as f64 * self.step_s))
    }

    pub fn is_at_end(&self, time_s: f64) -> bool {
        time_s >= self.max_s
    }

    /// Sample times `0, every, 2*every, ...`, always ending on `t_total`.
    ///
    /// Intervals too fine for [`MAX_TICKS`] rows are widened to fit.
    pub fn ticks(&self, every_s: f64) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![0.0];
        }
        let every_s = if every_s.is_finite() && every_s > 0.0 {
            every_s
        } else {
            self.step_s
        }
        .max(self.max_s / MAX_TICKS as f64);

        let count = (self.max_s / every_s).floor() as usize;
        let mut ticks: Vec<f64> = (0..=count).map(|i| i as f64 * every_s).collect();
        match ticks.last() {
            Some(&last) if (self.max_s - last) < 1e-9 => {
                if let Some(end) = ticks.last_mut() {
                    *end = self.max_s;
                }
            }
            _ => ticks.push(self.max_s),
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn zero_flight_keeps_a_usable_range() {
        let scrub = TimeScrub::new(0.0);
        assert!(scrub.is_degenerate());
        let (lo, hi) = scrub.range();
        assert!(hi > lo);
        assert_eq!(scrub.clamp(0.04), 0.0);
        assert_eq!(scrub.advance(0.0, 1.0), 0.0);
        assert_eq!(scrub.ticks(0.5), vec![0.0]);
    }

    #[test]
    fn clamp_snaps_to_step_and_stays_in_flight() {
        let scrub = TimeScrub::new(1.427);
        assert_close(scrub.clamp(0.52), 0.5, 1e-12);
        assert_close(scrub.clamp(0.53), 0.55, 1e-12);
        assert_eq!(scrub.clamp(-3.0), 0.0);
        assert_eq!(scrub.clamp(9.0), 1.427);
        assert_eq!(scrub.clamp(f64::NAN), 0.0);
        // 1.426 snaps to 1.45, past the landing.
        assert_eq!(scrub.clamp(1.426), 1.427);
    }

    #[test]
    fn advance_stops_at_landing() {
        let scrub = TimeScrub::new(2.0);
        assert_close(scrub.advance(0.5, 0.25), 0.75, 1e-12);
        assert_eq!(scrub.advance(1.9, 1.0), 2.0);
        assert!(scrub.is_at_end(scrub.advance(1.9, 1.0)));
        assert_close(scrub.advance(1.0, -1.0), 1.0, 1e-12);
    }

    #[test]
    fn nudge_moves_whole_steps() {
        let scrub = TimeScrub::new(2.0);
        assert_close(scrub.nudge(1.0, 1), 1.05, 1e-12);
        assert_close(scrub.nudge(1.0, -2), 0.9, 1e-12);
        assert_eq!(scrub.nudge(0.0, -1), 0.0);
    }

    #[test]
    fn ticks_end_on_time_of_flight() {
        let scrub = TimeScrub::new(1.2);
        let ticks = scrub.ticks(0.5);
        assert_eq!(ticks.len(), 4);
        assert_close(ticks[2], 1.0, 1e-12);
        assert_eq!(*ticks.last().unwrap(), 1.2);

        let exact = TimeScrub::new(1.0).ticks(0.5);
        assert_eq!(exact, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn tiny_interval_is_widened_to_row_limit() {
        let scrub = TimeScrub::new(5.069);
        for every in [1e-300, 1e-7, f64::MIN_POSITIVE] {
            let ticks = scrub.ticks(every);
            assert!(ticks.len() <= MAX_TICKS + 2, "{} rows", ticks.len());
            assert_eq!(ticks[0], 0.0);
            assert_eq!(*ticks.last().unwrap(), 5.069);
            assert!(ticks.windows(2).all(|w| w[1] > w[0]));
        }
    }
}
