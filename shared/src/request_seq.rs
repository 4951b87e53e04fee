//! Request-generation tokens.
//!
//! Every fetch takes a token; when its response arrives it is applied only if
//! no newer fetch started in the meantime. Late responses from superseded
//! filters are dropped instead of overwriting fresher results.

/// Generation number of one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Issues tokens and tracks the newest one.
#[derive(Debug, Default)]
pub struct RequestSeq {
    current: u64,
}

impl RequestSeq {
    /// Start a fetch; every earlier token becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    /// Whether `token` belongs to the newest fetch.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == token.0
    }

    /// Make every outstanding token stale, e.g. when the owner unmounts.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut seq = RequestSeq::default();
        let slow = seq.begin();
        let fast = seq.begin();
        assert!(!seq.is_current(slow));
        assert!(seq.is_current(fast));
    }

    #[test]
    fn invalidate_drops_everything_in_flight() {
        let mut seq = RequestSeq::default();
        let token = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(token));
        let next = seq.begin();
        assert!(seq.is_current(next));
    }
}
