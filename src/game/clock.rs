use std::time::{Duration, Instant};

/// Decides when the next game update is due
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrameClock {
    next_tick: Instant,
    interval: Duration,
}

impl FrameClock {
    /// Create a clock ticking every `interval` whose first tick is due
    /// immediately
    pub(crate) fn new(interval: Duration) -> FrameClock {
        FrameClock {
            next_tick: Instant::now(),
            interval,
        }
    }

    /// Create a clock ticking `per_second` times a second
    pub(crate) fn per_second(per_second: u32) -> FrameClock {
        FrameClock::new(Duration::from_secs(1) / per_second.max(1))
    }

    /// Make the next tick due at `now`
    pub(crate) fn reset(&mut self, now: Instant) {
        self.next_tick = now;
    }

    /// Return `true` if a tick is due at `now`.  When it is, the following
    /// tick is scheduled one interval after `now`, so a late tick pushes back
    /// every tick after it.
    pub(crate) fn due(&mut self, now: Instant) -> bool {
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
            true
        } else {
            false
        }
    }

    /// Time remaining at `now` until the next tick is due
    pub(crate) fn wait(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_per_second() {
        assert_eq!(
            FrameClock::per_second(10).interval(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn first_tick_is_immediate() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(100));
        clock.reset(start);
        assert!(clock.due(start));
        assert!(!clock.due(start));
        assert_eq!(clock.wait(start), Duration::from_millis(100));
    }

    #[test]
    fn deadline_counts_from_crossing_time() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(100));
        clock.reset(start);
        assert!(clock.due(start));
        assert!(!clock.due(start + Duration::from_millis(99)));
        // A tick serviced 30ms late pushes the following one back by 30ms
        let late = start + Duration::from_millis(130);
        assert!(clock.due(late));
        assert!(!clock.due(start + Duration::from_millis(229)));
        assert!(clock.due(start + Duration::from_millis(230)));
    }

    #[test]
    fn at_most_one_tick_per_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(100));
        clock.reset(start);
        let ticks = (0..1000)
            .map(|ms| start + Duration::from_millis(ms))
            .filter(|&t| clock.due(t))
            .count();
        assert_eq!(ticks, 10);
    }
}
