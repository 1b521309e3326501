use rand::Rng;
use rand::rngs::StdRng;

const MIN_PERIOD: f32 = 0.001;

#[derive(Debug, Clone)]
struct Jitter {
    min: f32,
    max: f32,
    rng: StdRng,
}

impl Jitter {
    fn draw(&mut self) -> f32 {
        if self.max > self.min {
            self.rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// A cancellable repeating task driven by frame time.
///
/// The owner feeds it the frame delta and reacts to the number of fires. A
/// jittered interval owns its generator and draws a fresh period after every
/// fire, so one value stands in for a chain of self-rescheduling one-shot
/// timers. A fixed interval never draws anything.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    jitter: Option<Jitter>,
    elapsed: f32,
    cancelled: bool,
}

impl Interval {
    pub fn fixed(period: f32) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            jitter: None,
            elapsed: 0.0,
            cancelled: false,
        }
    }

    pub fn jittered(min: f32, max: f32, rng: StdRng) -> Self {
        let min = min.max(MIN_PERIOD);
        let mut jitter = Jitter { min, max: max.max(min), rng };
        Self {
            period: jitter.draw(),
            jitter: Some(jitter),
            elapsed: 0.0,
            cancelled: false,
        }
    }

    /// Advances by `dt` seconds and returns how many times the task fired.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.cancelled || !(dt > 0.0) {
            return 0;
        }

        self.elapsed += dt;
        let mut fires = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fires += 1;
            if let Some(jitter) = self.jitter.as_mut() {
                self.period = jitter.draw();
            }
        }
        fires
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.elapsed = 0.0;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Seconds until the next fire.
    pub fn remaining(&self) -> f32 {
        (self.period - self.elapsed).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    impl Interval {
        fn is_jittered(&self) -> bool {
            self.jitter.is_some()
        }
    }

    #[test]
    fn fixed_interval_fires_once_per_period() {
        let mut interval = Interval::fixed(1.0);

        assert_eq!(interval.advance(0.5), 0);
        assert_eq!(interval.advance(0.5), 1);
        assert_eq!(interval.advance(2.25), 2);
        assert!((interval.remaining() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn fixed_interval_keeps_its_period_without_a_generator() {
        let mut interval = Interval::fixed(0.25);
        assert!(!interval.is_jittered());

        for _ in 0..100 {
            assert_eq!(interval.advance(0.25), 1);
            assert!((interval.remaining() - 0.25).abs() < 1e-5);
        }
    }

    #[test]
    fn jittered_interval_stays_within_bounds() {
        let mut interval = Interval::jittered(0.2, 0.8, StdRng::seed_from_u64(7));
        assert!(interval.is_jittered());

        for _ in 0..200 {
            let next = interval.remaining();
            assert!((0.199..0.8).contains(&next), "next fire in {next} out of range");
            assert_eq!(interval.advance(next + 1e-4), 1);
        }
    }

    #[test]
    fn same_seed_gives_the_same_periods() {
        let mut a = Interval::jittered(0.2, 0.8, StdRng::seed_from_u64(11));
        let mut b = Interval::jittered(0.2, 0.8, StdRng::seed_from_u64(11));

        for _ in 0..20 {
            assert_eq!(a.remaining(), b.remaining());
            let step = a.remaining() + 1e-4;
            a.advance(step);
            b.advance(step);
        }
    }

    #[test]
    fn cancelled_interval_never_fires_again() {
        let mut interval = Interval::fixed(0.1);
        interval.cancel();

        assert!(interval.is_cancelled());
        assert_eq!(interval.advance(10.0), 0);
    }

    #[test]
    fn non_positive_or_nan_deltas_are_ignored() {
        let mut interval = Interval::fixed(0.0);

        assert_eq!(interval.advance(-1.0), 0);
        assert_eq!(interval.advance(f32::NAN), 0);
        assert_eq!(interval.advance(0.0015), 1);
    }
}
