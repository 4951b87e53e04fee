//! Ticketed debouncer.
//!
//! Each `push` supersedes the previous value and returns a ticket. The timer
//! that owns a ticket calls `settle` when it fires; only the newest ticket
//! yields its value, so a burst of input produces exactly one settled value.

/// Handle for one pushed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Holds the newest pushed value until its ticket settles.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u32,
    issued: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Debouncer<T> {
    /// Debouncer waiting `window_ms` after the last push.
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            issued: 0,
            pending: None,
        }
    }

    /// How long the caller should wait before settling a ticket.
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Replace the pending value; earlier tickets can no longer settle.
    pub fn push(&mut self, value: T) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Take the pending value if `ticket` is still the newest one.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => Some(value),
            other => {
                self.pending = other;
                None
            },
        }
    }

    /// Drop the pending value so no outstanding ticket settles.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays keystrokes on a fake clock: each push arms a timer at
    /// `at + window`, timers fire in deadline order.
    fn replay(window: u32, keystrokes: &[(u64, &str)]) -> Vec<(u64, String)> {
        let mut debouncer = Debouncer::new(window);
        let mut timers = Vec::new();
        for (at, text) in keystrokes {
            let ticket = debouncer.push(text.to_string());
            timers.push((at + u64::from(debouncer.window_ms()), ticket));
        }
        timers.sort_by_key(|(deadline, _)| *deadline);
        timers
            .into_iter()
            .filter_map(|(deadline, ticket)| debouncer.settle(ticket).map(|v| (deadline, v)))
            .collect()
    }

    #[test]
    fn burst_within_window_fires_once_with_last_value() {
        let fired = replay(500, &[(0, "foo"), (300, "foobar")]);
        assert_eq!(fired, vec![(800, "foobar".to_string())]);
    }

    #[test]
    fn stale_ticket_does_not_consume_newer_value() {
        let mut debouncer = Debouncer::new(500);
        let first = debouncer.push("foo");
        let second = debouncer.push("foobar");
        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), Some("foobar"));
        assert_eq!(debouncer.settle(second), None);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new(10);
        let ticket = debouncer.push(1);
        debouncer.cancel();
        assert_eq!(debouncer.settle(ticket), None);
    }
}
