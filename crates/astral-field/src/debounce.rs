//! Resize debouncing: apply only the last event of a burst.

use std::time::{Duration, Instant};

/// Quiet period a resize burst must observe before taking effect.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Single-shot, re-armed debouncer. Every `push` replaces the pending
/// value and restarts the window; `poll` releases the value once the
/// window has elapsed with no newer push.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a value, re-arming the quiet-period timer.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Release the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, armed)) if now.duration_since(*armed) >= self.window => {
                self.pending.take().map(|(v, _)| v)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_yields_only_the_last_value() {
        let mut d = Debouncer::new(RESIZE_DEBOUNCE);
        let t0 = Instant::now();
        for i in 0..10u32 {
            d.push((100 + i, 50), t0 + Duration::from_millis(i as u64 * 10));
        }
        // Still inside the window of the last push.
        assert_eq!(d.poll(t0 + Duration::from_millis(250)), None);
        // One window after the last push, exactly one value comes out.
        let released = d.poll(t0 + Duration::from_millis(290));
        assert_eq!(released, Some((109, 50)));
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn lone_event_applies_after_the_window() {
        let mut d = Debouncer::new(RESIZE_DEBOUNCE);
        let t0 = Instant::now();
        d.push(42, t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(199)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(200)), Some(42));
    }

    #[test]
    fn empty_debouncer_yields_nothing() {
        let mut d: Debouncer<u32> = Debouncer::new(RESIZE_DEBOUNCE);
        assert_eq!(d.poll(Instant::now()), None);
    }
}
