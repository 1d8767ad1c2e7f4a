/// Continuous hover required before the dwell flag flips on, seconds.
pub const DWELL_DELAY_SECS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Armed { deadline: f64 },
    Dwelling,
}

/// Hover-dwell state machine.
///
/// Entering a marked interactive target arms a one-shot timer; the timer is
/// never re-armed while the hover session continues (moving between adjacent
/// marked targets counts as one session). Leaving all marked targets cancels
/// the timer and clears the dwell flag immediately.
pub struct DwellDetector {
    phase: Phase,
}

impl DwellDetector {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Feed the hover flag derived from a pointer event.
    pub fn observe(&mut self, over_interactive: bool, now: f64) {
        match (self.phase, over_interactive) {
            (Phase::Idle, true) => {
                self.phase = Phase::Armed {
                    deadline: now + DWELL_DELAY_SECS,
                };
            }
            (Phase::Armed { .. } | Phase::Dwelling, false) => {
                self.phase = Phase::Idle;
            }
            // Already armed or dwelling and still hovering: no re-arm.
            // Idle over nothing: nothing to cancel.
            _ => {}
        }
    }

    /// Advance the timer. Call once per frame.
    pub fn poll(&mut self, now: f64) {
        if let Phase::Armed { deadline } = self.phase {
            if now >= deadline {
                self.phase = Phase::Dwelling;
            }
        }
    }

    pub fn is_dwelling(&self) -> bool {
        self.phase == Phase::Dwelling
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Idle",
            Phase::Armed { .. } => "Armed",
            Phase::Dwelling => "Dwelling",
        }
    }

    /// Cancel any armed timer and clear the dwell flag. Safe to call
    /// redundantly.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwell_flips_at_expiry_not_before() {
        let mut d = DwellDetector::new();
        d.observe(true, 0.0);
        d.poll(2.99);
        assert!(!d.is_dwelling());
        d.poll(3.01);
        assert!(d.is_dwelling());
    }

    #[test]
    fn leaving_before_expiry_prevents_dwell() {
        let mut d = DwellDetector::new();
        d.observe(true, 0.0);
        d.observe(false, 1.0);
        d.poll(10.0);
        assert!(!d.is_dwelling());
    }

    #[test]
    fn leaving_while_dwelling_resets_immediately() {
        let mut d = DwellDetector::new();
        d.observe(true, 0.0);
        d.poll(3.5);
        assert!(d.is_dwelling());
        d.observe(false, 3.6);
        assert!(!d.is_dwelling());
    }

    #[test]
    fn partial_hover_does_not_carry_over() {
        let mut d = DwellDetector::new();
        // Hover 1s, leave, re-enter. The first second must not count.
        d.observe(true, 0.0);
        d.observe(false, 1.0);
        d.observe(true, 1.5);
        d.poll(3.5); // 3.5s since first entry, but only 2s since re-entry
        assert!(!d.is_dwelling());
        d.poll(4.6); // 3.1s of uninterrupted hover
        assert!(d.is_dwelling());
    }

    #[test]
    fn timer_is_not_rearmed_while_hover_session_continues() {
        let mut d = DwellDetector::new();
        d.observe(true, 0.0);
        // Repeated enters (e.g. nested targets) must not push the deadline.
        d.observe(true, 1.0);
        d.observe(true, 2.5);
        d.poll(3.1);
        assert!(d.is_dwelling());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut d = DwellDetector::new();
        d.observe(true, 0.0);
        d.reset();
        d.reset();
        d.poll(5.0);
        assert!(!d.is_dwelling());
        assert_eq!(d.label(), "Idle");
    }
}
