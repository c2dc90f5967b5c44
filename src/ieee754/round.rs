/*
    Rounding exact decimals to binary64
*/

use std::ops::AddAssign;

use bitvec::field::BitField;
use num_integer::Integer;
use num_traits::Zero;

use super::util::*;
use super::*;
use crate::{config, ExactDecimal, Round, Rounded};

// Every decimal whose leading digit sits above 10^308 overflows:
// the largest finite binary64 value is about 1.8e308.
const MAX_ADJUSTED_EXPONENT: i64 = 308;

// Every decimal below 10^-324 rounds to zero:
// half of the smallest subnormal is about 2.5e-324.
const MIN_ADJUSTED_EXPONENT: i64 = -324;

fn overflowed(sign: bool) -> Rounded<f64> {
    let value = if sign { f64::NEG_INFINITY } else { f64::INFINITY };
    let flags = Exceptions::default()
        .with_overflow(true)
        .with_inexact(true);
    Rounded::new(value, flags)
}

fn flushed(sign: bool) -> Rounded<f64> {
    let value = if sign { -0.0 } else { 0.0 };
    let flags = Exceptions::default()
        .with_underflow(true)
        .with_inexact(true);
    Rounded::new(value, flags)
}

// Rounds `(-1)^s * c * 2^exp` to nearest, ties to even.
// The integer `c` may have any number of bits.
fn round_finite(s: bool, mut exp: i64, mut c: BitVec) -> Rounded<f64> {
    // Drop leading zeros
    let lz = match c.last_one() {
        Some(i) => i + 1,
        None => return Rounded::new(if s { -0.0 } else { 0.0 }, Exceptions::default()),
    };
    c.truncate(lz);
    let prec = c.len();

    // Construct a mantissa large enough to hold
    //  (a) input mantissa
    //  (b) output mantissa + 3 bits
    // and record the number of bits added
    let c_len = usize::max(prec, FloatBits::PREC) + 3;
    let padding = c_len - prec;
    c.resize(c_len, false);
    c.shift_right(padding);
    exp -= padding as i64;

    // Split off three rounding bits
    //  `half`: unrounded value is at least half way to the next representable float
    //  `quarter`: unrounded value is either 1/4 or 3/4 of the way
    //   to the next representable float (depending on `half`)
    //  `sticky`: unrounded value is slightly above 0, 1/4, 1/2, 3/4 of the way
    //   to the next representable float but below the next regime
    let diff = c_len - FloatBits::PREC;
    let (low, high) = c.split_at(diff);
    let mut c_new = high.to_bitvec();
    let mut half_bit = low[diff - 1];
    let mut quarter_bit = low[diff - 2];
    let mut sticky_bit = low[..diff - 2].any();
    exp += diff as i64;

    // gradual underflow
    while exp < FloatBits::EXPMIN {
        sticky_bit |= quarter_bit;
        quarter_bit = half_bit;
        half_bit = c_new[0];
        c_new.shift_left(1);
        exp += 1;
    }

    round_finalize(s, exp, c_new, half_bit, quarter_bit, sticky_bit)
}

// Builds the result from a `PREC`-bit integer significand,
// its exponent and the rounding bits.
fn round_finalize(
    s: bool,
    mut exp: i64,
    mut c: BitVec,
    half_bit: bool,
    quarter_bit: bool,
    sticky_bit: bool,
) -> Rounded<f64> {
    // above half way, or exactly half way with an odd lsb
    let increment = half_bit && (quarter_bit || sticky_bit || c[0]);
    if increment {
        // possibly need to adjust exponent
        let mut i = bitvec_to_biguint(&c);
        i.add_assign(1_u8);
        let c_ext = biguint_to_bitvec(&i, FloatBits::PREC + 1);
        let carry = c_ext[FloatBits::PREC];

        c = c_ext[..FloatBits::PREC].to_bitvec();
        if carry {
            c.set(FloatBits::PREC - 1, true);
            exp += 1;
        }
    }

    let inexact = half_bit || quarter_bit || sticky_bit;
    if exp > FloatBits::EXPMAX {
        return overflowed(s);
    }

    // without a leading 1 the result is subnormal and `exp` is `EXPMIN`
    let normal = c[FloatBits::M];
    let exponent = if normal {
        (exp + FloatBits::M as i64 + FloatBits::BIAS) as u16
    } else {
        0
    };
    let bits = FloatBits {
        sign: s,
        exponent,
        mantissa: c[..FloatBits::M].load_le::<u64>(),
    };

    let flags = Exceptions::default()
        .with_underflow(!normal && inexact)
        .with_inexact(inexact);
    Rounded::new(bits.to_f64(), flags)
}

// Implementing `Round<f64>` for `ExactDecimal`
impl Round<f64> for ExactDecimal {
    fn round(&self) -> Rounded<f64> {
        let sign = self.is_negative();
        if self.is_zero() {
            return Rounded::new(0.0, Exceptions::default());
        }

        let adjusted = self.adjusted_exponent();
        if adjusted > MAX_ADJUSTED_EXPONENT {
            tracing::trace!(adjusted, "decimal exponent above the binary64 range");
            return overflowed(sign);
        }
        if adjusted < MIN_ADJUSTED_EXPONENT {
            tracing::trace!(adjusted, "decimal exponent below the binary64 range");
            return flushed(sign);
        }

        let working = self.truncate_to(config::get().working_precision());
        let (num, den) = working.magnitude_ratio();

        // Scale the quotient to at least `PREC + 4` bits and
        // append one more bit recording a non-zero remainder
        let shift = (FloatBits::PREC as i64 + 4) - (num.bits() as i64 - den.bits() as i64);
        let (q, r) = if shift >= 0 {
            (num << shift as usize).div_rem(&den)
        } else {
            num.div_rem(&(den << shift.unsigned_abs() as usize))
        };
        let mut c = q << 1_usize;
        if !r.is_zero() {
            c.add_assign(1_u8);
        }

        let width = c.bits() as usize;
        round_finite(sign, -shift - 1, biguint_to_bitvec(&c, width))
    }
}
