use std::time::{Duration, Instant};

/// Last-write-wins coalescer for rapid inputs such as search-as-you-type.
///
/// Each `submit` replaces any pending value and re-arms the deadline, so
/// only the final value within a quiet window is ever released; earlier
/// intermediate values are dropped, never delivered out of order. The
/// clock is injected by the caller, which keeps the type free of timers
/// and threads and makes delivery deterministic to test.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Stage a value, superseding any value staged earlier.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.delay);
    }

    /// Release the pending value if its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Release the pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_poll_before_deadline_yields_nothing() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit("a", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_poll_after_deadline_yields_once() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit("a", start);
        assert_eq!(debouncer.poll(start + DELAY), Some("a"));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn test_last_write_wins_within_window() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit("g", start);
        debouncer.submit("gr", start + Duration::from_millis(50));
        debouncer.submit("gri", start + Duration::from_millis(100));

        // The earlier deadlines were superseded along with their values.
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(100) + DELAY),
            Some("gri")
        );
    }

    #[test]
    fn test_flush_releases_immediately() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit("a", start);
        assert_eq!(debouncer.flush(), Some("a"));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit("a", start);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY), None);
    }
}
