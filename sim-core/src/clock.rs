/// Converts elapsed wall time into a whole number of simulation ticks.
///
/// The host feeds the time since its last frame to [`FixedStepClock::advance`]
/// and runs that many ticks. Leftover time carries over to the next frame.
/// When a frame falls far behind, the tick count is capped and the rest of
/// the backlog is dropped so a slow frame cannot snowball.
#[derive(Clone, Debug)]
pub struct FixedStepClock {
    interval: f64,
    max_ticks: usize,
    accumulator: f64,
}

impl FixedStepClock {
    /// ### Panics
    /// Panics if `interval` is not positive and finite.
    pub fn new(interval: f64, max_ticks: usize) -> Self {
        assert!(interval.is_finite() && interval > 0.0, "tick interval must be positive");
        Self {
            interval,
            max_ticks,
            accumulator: 0.0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Changes the cadence, keeping any accumulated time. Ignores
    /// non-positive or non-finite values.
    pub fn set_interval(&mut self, interval: f64) {
        if interval.is_finite() && interval > 0.0 {
            self.interval = interval;
        }
    }

    pub fn set_max_ticks(&mut self, max_ticks: usize) {
        self.max_ticks = max_ticks;
    }

    /// Adds `elapsed` seconds and returns how many ticks are due.
    pub fn advance(&mut self, elapsed: f64) -> usize {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let due = (self.accumulator / self.interval).floor();
        if due >= self.max_ticks as f64 {
            if due > self.max_ticks as f64 {
                log::trace!(
                    "dropping {} ticks of backlog",
                    due as usize - self.max_ticks
                );
            }
            self.accumulator = 0.0;
            return self.max_ticks;
        }

        let due = due as usize;
        self.accumulator -= due as f64 * self.interval;
        due
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn advance_counts_whole_intervals_and_keeps_remainder() {
        let mut clock = FixedStepClock::new(0.25, 100);

        assert_eq!(clock.advance(0.625), 2);
        assert_abs_diff_eq!(clock.accumulator, 0.125, epsilon = 1e-12);

        assert_eq!(clock.advance(0.125), 1);
        assert_abs_diff_eq!(clock.accumulator, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = FixedStepClock::new(1.0, 10);

        assert_eq!(clock.advance(0.4), 0);
        assert_eq!(clock.advance(0.4), 0);
        assert_eq!(clock.advance(0.4), 1);
    }

    #[test]
    fn backlog_is_capped_and_dropped() {
        let mut clock = FixedStepClock::new(0.001, 16);

        assert_eq!(clock.advance(1.0), 16);
        assert_eq!(clock.accumulator, 0.0);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn invalid_elapsed_is_ignored() {
        let mut clock = FixedStepClock::new(0.5, 4);

        assert_eq!(clock.advance(-3.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
        assert_eq!(clock.advance(f64::INFINITY), 0);
        assert_eq!(clock.accumulator, 0.0);
    }

    #[test]
    fn set_interval_rejects_non_positive() {
        let mut clock = FixedStepClock::new(0.5, 4);
        clock.set_interval(0.0);
        assert_eq!(clock.interval(), 0.5);
        clock.set_interval(0.1);
        assert_eq!(clock.interval(), 0.1);
    }

    #[test]
    fn reset_discards_partial_time() {
        let mut clock = FixedStepClock::new(1.0, 4);
        clock.advance(0.9);
        clock.reset();
        assert_eq!(clock.advance(0.2), 0);
    }

    #[test]
    #[should_panic]
    fn zero_interval_panics() {
        FixedStepClock::new(0.0, 1);
    }
}
