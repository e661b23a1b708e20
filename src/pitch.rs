/// One of the 12 equal tempered pitch classes, always in `[0, 11]`.
pub type PitchClass = usize;

/// Reduce any integer to its pitch class.
///
/// Non-negative modulo, so `mod12(-1)` is 11 rather than -1.
pub fn mod12(x: i64) -> PitchClass {
    x.rem_euclid(12) as PitchClass
}
