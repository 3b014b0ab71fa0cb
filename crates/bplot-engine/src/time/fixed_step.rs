use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Frame time is added to a lag counter; every whole `step` of lag becomes one
/// fixed tick. Remaining lag carries into the next frame, so over time the
/// tick rate matches `1 / step` regardless of frame rate.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    lag: Duration,
    max_steps: u32,
}

impl FixedStep {
    /// Ticks per second; e.g. `60` gives a step of 1/60 s.
    pub fn per_second(rate: u32) -> Self {
        assert!(rate > 0, "fixed update rate must be positive");
        Self::new(Duration::from_secs_f64(1.0 / f64::from(rate)))
    }

    pub fn new(step: Duration) -> Self {
        assert!(!step.is_zero(), "fixed step must be non-zero");
        Self {
            step,
            lag: Duration::ZERO,
            max_steps: 8,
        }
    }

    /// Caps ticks per frame. Lag beyond the cap is dropped instead of
    /// snowballing into ever longer catch-up frames.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn step_secs(&self) -> f32 {
        self.step.as_secs_f32()
    }

    pub fn lag(&self) -> Duration {
        self.lag
    }

    /// Adds `elapsed` to the lag and returns how many fixed ticks to run now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.lag += elapsed;

        let mut steps = 0;
        while self.lag >= self.step {
            if steps == self.max_steps {
                log::debug!("fixed step fell behind, dropping {:?} of lag", self.lag);
                self.lag = Duration::ZERO;
                break;
            }
            self.lag -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn short_frames_accumulate_until_a_step() {
        let mut fixed = FixedStep::new(ms(10));
        assert_eq!(fixed.advance(ms(4)), 0);
        assert_eq!(fixed.advance(ms(4)), 0);
        assert_eq!(fixed.advance(ms(4)), 1);
        assert_eq!(fixed.lag(), ms(2));
    }

    #[test]
    fn long_frame_runs_several_steps() {
        let mut fixed = FixedStep::new(ms(10));
        assert_eq!(fixed.advance(ms(35)), 3);
        assert_eq!(fixed.lag(), ms(5));
    }

    #[test]
    fn steps_are_capped_and_excess_lag_dropped() {
        let mut fixed = FixedStep::new(ms(10)).with_max_steps(2);
        assert_eq!(fixed.advance(ms(100)), 2);
        assert_eq!(fixed.lag(), Duration::ZERO);
    }

    #[test]
    fn sixty_per_second_step() {
        let fixed = FixedStep::per_second(60);
        assert!((fixed.step_secs() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_rate_panics() {
        let _ = FixedStep::per_second(0);
    }
}
