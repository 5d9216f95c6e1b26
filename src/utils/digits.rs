/// Split a calculator value into its sign and the decimal digit text of its
/// integer magnitude.
///
/// Digit-manipulation operations share one sign convention: strip the sign,
/// rewrite the digit text, reattach the sign at the end. This pair of
/// helpers keeps that convention in a single place.
pub fn split_digits(value: f64) -> (bool, String) {
    let integral = value as i64;
    (integral < 0, integral.unsigned_abs().to_string())
}

/// Reattach a sign to rewritten digit text and return to the numeric domain.
///
/// Leading zeros disappear in the parse. Digit text too long for `i64`
/// saturates at `i64::MAX`.
pub fn attach_sign(negative: bool, digits: &str) -> f64 {
    let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
    let signed = if negative { -magnitude } else { magnitude };
    signed as f64
}
