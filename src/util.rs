/// Rounds `value` to `decimals` places, ties to even.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// Rounds to the nearest whole number, ties to even.
#[inline]
pub fn round_int(value: f64) -> i64 {
    value.round_ties_even() as i64
}
