/// Shortest candidate the index covers.
pub const MIN_TELOMERE_LENGTH: usize = 20;
/// Longest candidate the index covers.
pub const MAX_TELOMERE_LENGTH: usize = 25;

/// Longest fragment the generator builds, and the upper bound of any length
/// window.
pub const MAX_FRAGMENT_LENGTH: usize = 1_000;

pub const DEFAULT_INCLUDE_REVERSE: bool = true;

/// 0 lets rayon size the pool to the available parallelism.
pub const DEFAULT_THREADS: usize = 0;
