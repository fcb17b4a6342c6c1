use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;

use super::timing::seconds;

/// A monotonically non-decreasing time source.
///
/// Readings are offsets from an arbitrary fixed origin, so only differences between
/// two readings of the same clock are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock that only moves when told to. Used to drive the sequencer deterministically.
#[derive(Debug, Default)]
pub struct ManualClock {
    micros: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.micros
            .fetch_add(by.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn advance_secs(&self, secs: f64) {
        self.advance(seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::Relaxed))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by `chrono::Utc::now`, which also works in the browser.
///
/// System time can step backwards, so readings are clamped to never go below the
/// previous one.
#[derive(Debug)]
pub struct WallClock {
    origin_ms: i64,
    last_ms: AtomicU64,
}

impl Default for WallClock {
    fn default() -> Self {
        Self {
            origin_ms: Utc::now().timestamp_millis(),
            last_ms: AtomicU64::new(0),
        }
    }
}

impl Clock for WallClock {
    fn now(&self) -> Duration {
        let elapsed = (Utc::now().timestamp_millis() - self.origin_ms).max(0) as u64;
        let prev = self.last_ms.fetch_max(elapsed, Ordering::Relaxed);
        Duration::from_millis(prev.max(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);

        clock.advance(Duration::from_millis(250));
        clock.advance_secs(0.5);
        assert_eq!(clock.now(), Duration::from_millis(750));
    }

    #[test]
    fn test_wall_clock_is_monotonic() {
        let clock = WallClock::default();
        let mut prev = clock.now();
        for _ in 0..1000 {
            let next = clock.now();
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_clock_through_reference() {
        fn read(clock: impl Clock) -> Duration {
            clock.now()
        }

        let clock = ManualClock::new();
        clock.advance_secs(1.0);
        assert_eq!(read(&clock), Duration::from_secs(1));
    }
}
