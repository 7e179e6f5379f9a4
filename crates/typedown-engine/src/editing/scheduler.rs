use std::time::{Duration, Instant};

use xi_rope::Rope;

use crate::parsing::blocks::classify;
use crate::parsing::rope::line_at_offset;

/// Default debounce window for low-urgency recomputes.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(40);

/// When the host should recompute decorations after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// Before the next paint. Used where a one-frame lag is visible, such as
    /// a heading growing as `#` characters are typed.
    Immediate,
    /// After the given quiet period, coalescing bursts of keystrokes.
    Debounced(Duration),
}

/// Decides recompute urgency per event. Stateless: the decision depends only
/// on the snapshot and cursor it is handed.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Urgency of a recompute after a text edit. Edits on structural lines
    /// (headings and list items) change layout as the user types, so those
    /// recompute immediately; plain text can wait out the debounce window.
    pub fn plan_after_edit(&self, rope: &Rope, cursor: usize) -> Recompute {
        let pos = line_at_offset(rope, cursor);
        let text = rope.slice_to_cow(pos.start..pos.text_end);
        let kind = classify(&text, 0).kind;
        if matches!(kind, crate::parsing::BlockKind::Heading(_)) || kind.is_list_item() {
            Recompute::Immediate
        } else {
            Recompute::Debounced(self.interval)
        }
    }

    /// Selection moves change the active region, which flips syntax between
    /// hidden and revealed. Always immediate.
    pub fn plan_after_selection(&self) -> Recompute {
        Recompute::Immediate
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

/// Tracks the single pending debounced recompute. Scheduling again before
/// the deadline replaces it, so a typing burst yields one recompute.
///
/// Time is passed in by the caller, which keeps the event loop in charge of
/// the clock and the tests deterministic.
#[derive(Debug, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Clears and reports a due deadline. Returns false while the window is
    /// still open or nothing is scheduled.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::heading("# head", 3, Recompute::Immediate)]
    #[case::bullet("- item", 4, Recompute::Immediate)]
    #[case::checklist("- [ ] t", 7, Recompute::Immediate)]
    #[case::ordered("1. one", 6, Recompute::Immediate)]
    #[case::paragraph("plain text", 5, Recompute::Debounced(DEBOUNCE_INTERVAL))]
    #[case::quote("> quoted", 4, Recompute::Debounced(DEBOUNCE_INTERVAL))]
    fn edit_urgency_follows_the_cursor_line(
        #[case] md: &str,
        #[case] cursor: usize,
        #[case] expected: Recompute,
    ) {
        let plan = Scheduler::default().plan_after_edit(&Rope::from(md), cursor);
        assert_eq!(plan, expected);
    }

    #[test]
    fn edit_urgency_uses_the_line_under_a_multiline_cursor() {
        let rope = Rope::from("para\n# heading\n");
        let scheduler = Scheduler::default();
        assert_eq!(
            scheduler.plan_after_edit(&rope, 2),
            Recompute::Debounced(DEBOUNCE_INTERVAL)
        );
        assert_eq!(scheduler.plan_after_edit(&rope, 8), Recompute::Immediate);
    }

    #[test]
    fn selection_moves_are_always_immediate() {
        assert_eq!(
            Scheduler::default().plan_after_selection(),
            Recompute::Immediate
        );
    }

    #[test]
    fn custom_interval_flows_into_the_plan() {
        let scheduler = Scheduler::new(Duration::from_millis(100));
        assert_eq!(
            scheduler.plan_after_edit(&Rope::from("text"), 0),
            Recompute::Debounced(Duration::from_millis(100))
        );
    }

    #[test]
    fn rescheduling_replaces_the_pending_deadline() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(t0, DEBOUNCE_INTERVAL);
        debouncer.schedule(t0 + Duration::from_millis(30), DEBOUNCE_INTERVAL);

        // The first deadline has passed but the second has not.
        assert!(!debouncer.fire_if_due(t0 + Duration::from_millis(45)));
        assert!(debouncer.is_pending());
        assert!(debouncer.fire_if_due(t0 + Duration::from_millis(70)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn fire_consumes_the_deadline_once() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(t0, DEBOUNCE_INTERVAL);
        assert!(debouncer.fire_if_due(t0 + DEBOUNCE_INTERVAL));
        assert!(!debouncer.fire_if_due(t0 + DEBOUNCE_INTERVAL));
    }

    #[test]
    fn cancel_discards_the_pending_recompute() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(t0, DEBOUNCE_INTERVAL);
        debouncer.cancel();
        assert!(!debouncer.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
