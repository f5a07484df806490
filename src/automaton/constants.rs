// Constants for the automaton engine

/// Cell count used when a line is constructed without an explicit length
pub const DEFAULT_LENGTH: usize = 100;

/// Rule used when a line is constructed without an explicit rule
pub const DEFAULT_RULE: u8 = 30;

/// Largest cell count the engine will allocate
/// This is an allocation cap, not a display limit; hosts apply their own bounds
pub const MAX_LENGTH: usize = 1 << 20;

/// Probability threshold for the randomize policy (strictly below is Alive)
pub const RANDOM_ALIVE_THRESHOLD: f64 = 0.5;
