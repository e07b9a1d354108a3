/// Guard for tracking adjustment rounds and preventing unbounded convergence loops
#[derive(Debug, Clone)]
pub struct ConvergenceGuard {
    /// Maximum number of adjust-and-complete rounds allowed
    pub max_rounds: u32,
    /// Current round count
    current_round: u32,
}

impl ConvergenceGuard {
    pub fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds,
            current_round: 0,
        }
    }

    /// Start another round. Returns `false` once the limit is exceeded.
    pub fn next_round(&mut self) -> bool {
        self.current_round = self.current_round.saturating_add(1);
        self.current_round <= self.max_rounds
    }

    /// Rounds started so far, capped at the limit
    pub fn rounds_completed(&self) -> u32 {
        self.current_round.min(self.max_rounds)
    }
}

impl Default for ConvergenceGuard {
    fn default() -> Self {
        Self::new(8)
    }
}
