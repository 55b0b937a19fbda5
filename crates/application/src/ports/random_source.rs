/// Source of uniformly distributed integers, injected wherever a choice is
/// randomized so the choice can be replayed in tests.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..bound`. Callers never pass `bound == 0`.
    fn next_below(&self, bound: u32) -> u32;
}
