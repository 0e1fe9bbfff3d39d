//       _
// __  _| | ___ __   __ _ ___ _____      ____| |
// \ \/ / |/ / '_ \ / _` / __/ __\ \ /\ / / _` |
//  >  <| ' <| |_) | (_| \__ \__ \\ V  V / (_| |
// /_/\_\_|\_\ .__/ \__,_|___/___/ \_/\_/ \__,_|
//           |_|
//
// License : Apache-2.0
//
// Secure random source

use rand::Rng;
use rand::rngs::OsRng;

/// Uniform selection over a bounded range.
///
/// Production code uses [`OsEntropy`]; tests substitute a scripted source so
/// the composer stays deterministic.
pub trait EntropySource {
    /// Draws a uniform value in `[0, bound)`. `bound` must be non-zero.
    fn pick(&mut self, bound: usize) -> usize;

    /// One fair coin flip.
    fn coin_flip(&mut self) -> bool {
        self.pick(2) == 1
    }
}

/// The operating-system CSPRNG.
///
/// Panics if the platform entropy source is unavailable; a password
/// generator must never fall back to a weaker source, so there is none.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn pick(&mut self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}
