//! Currency rounding
//!
//! Every monetary derivation rounds to a whole currency unit before it is
//! used in later sums. Halves round toward positive infinity, so `-2.5`
//! becomes `-2` (unlike `f64::round`, which gives `-3`).

/// Round to the nearest whole unit, halves up.
///
/// Results beyond the `i64` range (infinities included) saturate at
/// `i64::MIN`/`i64::MAX`. `NaN` yields `0`.
pub fn round_half_up(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
