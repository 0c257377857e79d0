/// First reconnect delay, and the value restored after a successful open.
pub const FLOOR_MS: u32 = 1_000;
pub const CAP_MS: u32 = 30_000;

/// Exponential reconnect delay, doubling per consecutive failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    current_ms: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            current_ms: FLOOR_MS,
        }
    }
}

impl Backoff {
    /// Delay to wait before the next attempt; advances the sequence.
    pub fn next_delay(&mut self) -> u32 {
        let delay = self.current_ms;
        self.current_ms = self.current_ms.saturating_mul(2).min(CAP_MS);
        delay
    }

    pub fn reset(&mut self) {
        self.current_ms = FLOOR_MS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_double_until_capped() {
        let mut backoff = Backoff::default();
        let delays: Vec<u32> = (0..8).map(|_| backoff.next_delay()).collect();
        assert_eq!(
            delays,
            vec![1000, 2000, 4000, 8000, 16000, 30000, 30000, 30000]
        );
    }

    #[test]
    fn should_never_exceed_cap() {
        let mut backoff = Backoff::default();
        for _ in 0..100 {
            assert!(backoff.next_delay() <= CAP_MS);
        }
    }

    #[test]
    fn should_restart_from_floor_after_reset() {
        let mut backoff = Backoff::default();
        backoff.next_delay();
        backoff.next_delay();
        backoff.reset();
        assert_eq!(backoff.next_delay(), FLOOR_MS);
    }
}
