//! Random Source Port - Interface for uniform integer draws.

/// Port for drawing uniformly distributed integers.
///
/// Reference numbers are the only consumer; tests substitute a fixed
/// sequence so confirmations are predictable.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}
