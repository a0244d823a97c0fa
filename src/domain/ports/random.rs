/// Source of uniform randomness for the animation.
///
/// Injected wherever a decision is random so that a run can be replayed
/// from a seed and tests can pin every draw.
pub trait RandomSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}
