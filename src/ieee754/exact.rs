/*
    Exact decimal values of binary64 fields
*/

use super::*;
use crate::ExactDecimal;

/// Returns the exact decimal value denoted by the exponent and
/// mantissa fields of `bits`. The sign field is ignored.
///
/// For a subnormal (or zero) encoding the value is
/// `(mantissa / 2^52) * 2^(1 - 1023)`; for a normal encoding it is
/// `(mantissa / 2^52 + 1) * 2^(exponent - 1023)`.
/// No rounding takes place.
pub fn exact_value(bits: &FloatBits) -> ExactDecimal {
    debug_assert!(!bits.is_special(), "infinity or NaN has no exact value: {:?}", bits);

    let fraction = ExactDecimal::from(bits.mantissa).div_pow2(FloatBits::M as u32);
    let (fraction, exp) = if bits.is_subnormal() {
        (fraction, 1 - FloatBits::BIAS)
    } else {
        (fraction + ExactDecimal::one(), bits.exponent as i64 - FloatBits::BIAS)
    };

    // at most 767 significant digits, below any working precision
    let value = fraction * ExactDecimal::pow2(exp);
    debug_assert!(
        value.significant_digits() <= crate::Config::MIN_PRECISION,
        "exact value exceeds the smallest working precision: {} digits",
        value.significant_digits()
    );
    value
}
