//! Cancellable deadlines polled from the event loop.

use std::time::{Duration, Instant};

/// A timer that is either idle or armed for a deadline.
///
/// Periodic timers re-arm themselves when they fire; one-shot timers go idle.
#[derive(Debug, Clone)]
pub(super) struct Timer {
    period: Option<Duration>,
    due: Option<Instant>,
}

impl Timer {
    pub(super) fn one_shot() -> Self {
        Self {
            period: None,
            due: None,
        }
    }

    pub(super) fn periodic(period: Duration) -> Self {
        Self {
            period: Some(period),
            due: None,
        }
    }

    /// Arm for `delay` from `now`. Re-arming replaces the previous deadline.
    pub(super) fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Arm a periodic timer for one period from `now`, unless already armed.
    pub(super) fn start(&mut self, now: Instant) {
        if self.due.is_none() {
            if let Some(p) = self.period {
                self.due = Some(now + p);
            }
        }
    }

    pub(super) fn cancel(&mut self) {
        self.due = None;
    }

    #[cfg(test)]
    pub(super) fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub(super) fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Return true if the deadline passed, re-arming or disarming as needed.
    ///
    /// A periodic timer that fell more than one period behind skips the missed
    /// ticks instead of firing them in a burst.
    pub(super) fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(due) = self.due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.due = match self.period {
            Some(p) => {
                let next = due + p;
                Some(if next <= now { now + p } else { next })
            }
            None => None,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_then_goes_idle() {
        let t0 = Instant::now();
        let mut t = Timer::one_shot();
        t.arm(t0, Duration::from_millis(100));

        assert!(!t.fire_if_due(t0 + Duration::from_millis(99)));
        assert!(t.fire_if_due(t0 + Duration::from_millis(100)));
        assert!(!t.is_armed());
        assert!(!t.fire_if_due(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut t = Timer::one_shot();
        t.arm(t0, Duration::from_millis(10));
        t.cancel();
        assert!(!t.fire_if_due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn periodic_rearms_and_skips_missed_ticks() {
        let t0 = Instant::now();
        let period = Duration::from_millis(50);
        let mut t = Timer::periodic(period);
        t.start(t0);
        assert_eq!(t.due(), Some(t0 + period));

        assert!(t.fire_if_due(t0 + period));
        assert_eq!(t.due(), Some(t0 + period * 2));

        // Far behind: one fire, next deadline measured from now.
        let late = t0 + Duration::from_millis(1000);
        assert!(t.fire_if_due(late));
        assert_eq!(t.due(), Some(late + period));
    }

    #[test]
    fn start_keeps_existing_deadline() {
        let t0 = Instant::now();
        let mut t = Timer::periodic(Duration::from_millis(50));
        t.start(t0);
        t.start(t0 + Duration::from_millis(30));
        assert_eq!(t.due(), Some(t0 + Duration::from_millis(50)));
    }
}
