//! Float32 precision checking utility.

/// Checks if a number can be exactly represented as a 32-bit floating point value.
///
/// Returns `true` if the number survives a round-trip through `f32` without
/// precision loss. `NaN` never compares equal to itself, so it reports `false`.
///
/// # Example
///
/// ```
/// use mpack_buffers::is_float32;
///
/// assert!(is_float32(1.0));
/// assert!(is_float32(0.5));
/// assert!(!is_float32(0.1));  // 0.1 cannot be exactly represented in f32
/// assert!(!is_float32(f64::NAN));
/// ```
pub fn is_float32(n: f64) -> bool {
    (n as f32) as f64 == n
}
