//! Integer arithmetic exposed next to the spectral demo.

/// Add two numbers together
///
/// Overflow wraps in two's complement rather than panicking.
pub fn add(i: i32, j: i32) -> i32 {
    i.wrapping_add(j)
}
