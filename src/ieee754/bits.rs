/*
    Packing and unpacking `FloatBits`
*/

use bitvec::field::BitField;
use bitvec::prelude::Lsb0;

use super::*;

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u32, Lsb0; $($t)*]
        }
    };
}

// Format parameters
impl FloatBits {
    /// Bitwidth of the representation.
    pub const N: usize = 64;

    /// Bitwidth of the exponent field.
    pub const E: usize = 11;

    /// Number of (binary) digits when the significand is expressed
    /// as an integer. This is just `Self::M + 1`.
    pub const PREC: usize = Self::N - Self::E;

    /// Bitwidth of the mantissa field.
    pub const M: usize = Self::PREC - 1;

    /// Exponent of the largest finite value in the form `(-1)^s 2^e m`
    /// where `m` is a fraction between 1 and 2.
    pub const EMAX: i64 = 1023;

    /// Exponent of the smallest normal value in the form `(-1)^s 2^e m`
    /// where `m` is a fraction between 1 and 2.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// Exponent of the largest finite value in the form `(-1)^s 2^e c`
    /// where `c` is an integer.
    /// This is just `Self::EMAX - Self::M`.
    pub const EXPMAX: i64 = Self::EMAX - Self::M as i64;

    /// Exponent of the smallest subnormal value in the form `(-1)^s 2^e c`
    /// where `c` is an integer.
    /// This is just `Self::EMIN - Self::M`.
    pub const EXPMIN: i64 = Self::EMIN - Self::M as i64;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;

    /// Exponent field value of infinities and NaNs.
    pub const EXP_SPECIAL: u16 = 0x7FF;
}

// Accumulates a bit field least-significant byte first, scaling each
// byte by successive powers of 256.
fn accumulate_bytes(field: &BitSlice) -> u64 {
    let mut value = 0u64;
    let mut scale = 1u64;
    for byte in field.chunks(8) {
        value += byte.load_le::<u8>() as u64 * scale;
        scale *= 256;
    }
    value
}

impl FloatBits {
    /// Splits a non-negative, finite `f64` into its fields.
    ///
    /// The sign is reported but is expected to be clear;
    /// callers handle the sign of a value before decoding it.
    pub fn decode(value: f64) -> Self {
        debug_assert!(value.is_finite(), "cannot decode a non-finite value: {}", value);

        let mut bv = bitvec![0; Self::N];
        bv.store_le(value.to_bits());

        let (mantissa, rest) = bv.split_at(Self::M);
        let (exponent, sign) = rest.split_at(Self::E);
        Self {
            sign: sign[0],
            exponent: exponent.load_le::<u16>(),
            mantissa: accumulate_bytes(mantissa),
        }
    }

    /// Packs these fields into an `f64`.
    pub fn to_f64(&self) -> f64 {
        debug_assert!(
            self.mantissa >> Self::M == 0,
            "mantissa does not fit in {} bits: {:#x}",
            Self::M,
            self.mantissa
        );
        debug_assert!(
            self.exponent <= Self::EXP_SPECIAL,
            "exponent does not fit in {} bits: {}",
            Self::E,
            self.exponent
        );

        let mut bv = bitvec![0; Self::N];
        bv[..Self::M].store_le(self.mantissa);
        bv[Self::M..Self::N - 1].store_le(self.exponent);
        bv.set(Self::N - 1, self.sign);
        f64::from_bits(bv.load_le::<u64>())
    }

    /// Returns true if these fields encode a zero or a subnormal number.
    pub fn is_subnormal(&self) -> bool {
        self.exponent == 0
    }

    /// Returns true if these fields encode a zero.
    pub fn is_zero(&self) -> bool {
        self.exponent == 0 && self.mantissa == 0
    }

    /// Returns true if these fields encode an infinity or NaN.
    pub fn is_special(&self) -> bool {
        self.exponent == Self::EXP_SPECIAL
    }
}

impl From<f64> for FloatBits {
    fn from(value: f64) -> Self {
        Self::decode(value)
    }
}

impl From<FloatBits> for f64 {
    fn from(bits: FloatBits) -> Self {
        bits.to_f64()
    }
}
