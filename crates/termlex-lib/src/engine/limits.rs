/// Bounds on the work a single `match_str` call may do.
///
/// Both limits turn runaway grammars (left recursion, separators that never
/// advance) into a [`RuntimeError`](super::RuntimeError) instead of a hang
/// or a stack overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchLimits {
    /// Token dispatches allowed per match.
    pub(crate) exec_fuel: u32,
    /// Term expansions allowed on the stack at once.
    pub(crate) recursion_limit: u32,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 256,
        }
    }
}

impl MatchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn exec_fuel(&self) -> u32 {
        self.exec_fuel
    }

    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}
