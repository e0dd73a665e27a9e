//! Shared cyclic-arithmetic helpers.

/// Floored modulo: the result always lies in `[0, n)` for positive `n`.
///
/// Unlike `%`, negative dividends wrap into the positive range
/// (`floor_mod(-1, 10) == 9`).
pub const fn floor_mod(a: i64, n: i64) -> i64 {
    a.rem_euclid(n)
}

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
