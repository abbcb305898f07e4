/// Control actions supported by the closed-form solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon the solve; no solution is returned.
    StopEarly,
}

/// Emitted once per variable, in index order, right after it is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Index of the variable just computed.
    pub index: usize,

    /// Contribution `a_i · x_i^p_i` the variable was solved for.
    ///
    /// This is the residual `b − (n−1)·k` for the first variable and `k`
    /// for every other.
    pub share: f64,

    /// The computed value `x_i`.
    pub value: f64,
}

impl Event {
    /// Returns `true` if the computed value is neither infinite nor NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}
