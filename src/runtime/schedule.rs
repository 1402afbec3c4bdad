/// A repeating deadline: fires at most once per poll, skipping periods that were missed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRate {
    period_ms: u64,
    next_due_ms: u64,
}

impl FixedRate {
    /// First firing is one period after `start_ms`.
    pub fn new(period_ms: u64, start_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: start_ms.saturating_add(period_ms),
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    pub fn should_fire(&self, now_ms: u64) -> bool {
        now_ms >= self.next_due_ms
    }

    /// Fire if due and move the deadline past `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.should_fire(now_ms) {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.period_ms;
        self.next_due_ms = self
            .next_due_ms
            .saturating_add((missed + 1).saturating_mul(self.period_ms));
        true
    }
}
