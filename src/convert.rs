/*
    Exact conversions between `f64` and decimal strings
*/

use crate::decimal::Literal;
use crate::ieee754::{exact_value, FloatBits};
use crate::{ConvertError, ExactDecimal, Round};

// The bit-level check is required: `-0.0 == 0.0`.
fn is_negative_zero(value: f64) -> bool {
    value.to_bits() == (-0.0_f64).to_bits()
}

/// Returns the exact decimal value of `value`.
///
/// Finite values are written in plain notation with every digit of their
/// exact expansion, e.g. `0.1` becomes
/// `"0.1000000000000000055511151231257827021181583404541015625"`.
/// Negative zero is written `"-0"`; non-finite values are written
/// `"NaN"`, `"Infinity"` and `"-Infinity"`.
pub fn stringify(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0 || is_negative_zero(value);
    let positive = if negative { -value } else { value };
    let exact = exact_value(&FloatBits::decode(positive));
    if negative {
        format!("-{exact}")
    } else {
        exact.to_string()
    }
}

/// Parses a decimal literal into the `f64` it denotes exactly.
///
/// Accepts `"NaN"`, `"Infinity"`, `"-Infinity"` and literals of the form
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
/// The literal is rounded to the nearest `f64`, and the exact value of
/// that `f64` is compared against the literal: any difference is an error.
///
/// # Errors
///
/// - [`ConvertError::Syntax`] if `literal` does not match the grammar,
/// - [`ConvertError::Magnitude`] if it lies beyond the finite range,
/// - [`ConvertError::PrecisionLoss`] if no `f64` equals it exactly.
pub fn parse(literal: &str) -> Result<f64, ConvertError> {
    match literal {
        "NaN" => return Ok(f64::NAN),
        "Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    let lit = Literal::scan(literal)?;
    let negative = lit.negative;
    let exact_input = ExactDecimal::from_literal(&lit.unsigned());

    let rounded = exact_input.round();
    if rounded.flags().overflow() {
        tracing::debug!(literal, "rejecting literal beyond the binary64 range");
        return Err(ConvertError::Magnitude {
            literal: literal.to_string(),
        });
    }
    let approx = rounded.into_value();

    // round-trip verification
    let exact_round_trip = exact_value(&FloatBits::decode(approx));
    if exact_round_trip != exact_input {
        let nearest = stringify(if negative { -approx } else { approx });
        tracing::debug!(literal, nearest = %nearest, "rejecting inexact literal");
        return Err(ConvertError::PrecisionLoss {
            literal: literal.to_string(),
            nearest,
        });
    }

    Ok(if negative { -approx } else { approx })
}
