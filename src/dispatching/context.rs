//! Dispatch context for selection rule evaluation.

/// Runtime state passed to selection rules at a decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulated clock.
    pub clock: i64,
}

impl DispatchContext {
    /// Creates a context at the given clock value.
    pub fn at_time(clock: i64) -> Self {
        Self { clock }
    }

    /// Time a process has spent waiting since arrival (0 if not yet arrived).
    #[inline]
    pub fn waited_since(&self, arrival: i64) -> i64 {
        (self.clock - arrival).max(0)
    }
}
