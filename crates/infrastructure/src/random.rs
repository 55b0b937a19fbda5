use gotify_srv_application::ports::RandomSource;

/// Thread-local `fastrand` generator; nothing shared between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn next_below(&self, bound: u32) -> u32 {
        fastrand::u32(..bound.max(1))
    }
}
