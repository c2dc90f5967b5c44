/*
    Arbitrary-precision decimals
*/

mod literal;

use std::fmt;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::ConvertError;

pub(crate) use literal::Literal;

/// An exact, arbitrary-precision decimal number.
///
/// The value is `coefficient * 10^(-scale)`. An `ExactDecimal` is always
/// normalized: the coefficient carries no trailing zero digits and zero is
/// stored as `0 * 10^0`. Two `ExactDecimal`s are therefore numerically
/// equal exactly when they are structurally equal.
///
/// Zero is never negative; the sign of a floating-point zero must be
/// tracked by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExactDecimal {
    coeff: BigInt,
    scale: i64,
    digits: usize,
}

// Shared powers
pub(crate) fn pow10(k: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u8), k)
}

fn pow5(k: usize) -> BigUint {
    num_traits::pow(BigUint::from(5u8), k)
}

// Number of decimal digits of a non-zero magnitude.
fn count_digits(m: &BigUint) -> usize {
    if let Some(small) = m.to_u64() {
        return small.checked_ilog10().map_or(1, |d| d as usize + 1);
    }

    // m >= 2^(bits - 1), so the estimate never exceeds the digit count
    // by more than the float error; start one below it and count up
    let estimate = ((m.bits() - 1) as f64 * std::f64::consts::LOG10_2) as usize;
    let mut digits = estimate.saturating_sub(1).max(1);
    let mut bound = pow10(digits);
    while *m >= bound {
        bound *= 10u8;
        digits += 1;
    }
    digits
}

// Removes trailing zero digits, returning how many were removed.
// Zeros are divided out in chunks of 16, then 4, then 1.
fn strip_trailing_zeros(coeff: &mut BigInt) -> i64 {
    let mut stripped = 0;
    for (width, chunk) in [(16, 10_000_000_000_000_000_u64), (4, 10_000), (1, 10)] {
        let chunk = BigInt::from(chunk);
        loop {
            let (q, r) = coeff.div_rem(&chunk);
            if !r.is_zero() {
                break;
            }
            *coeff = q;
            stripped += width;
        }
    }
    stripped
}

impl ExactDecimal {
    /// Largest adjusted exponent accepted by [`FromStr`].
    pub const MAX_EXPONENT: i64 = 100_000;

    /// Smallest adjusted exponent accepted by [`FromStr`].
    pub const MIN_EXPONENT: i64 = -100_000;

    /// Builds a normalized decimal from `coeff * 10^(-scale)`.
    pub fn new(mut coeff: BigInt, scale: i64) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }

        let scale = scale.saturating_sub(strip_trailing_zeros(&mut coeff));
        let digits = count_digits(coeff.magnitude());
        Self {
            coeff,
            scale,
            digits,
        }
    }

    /// Returns exact zero.
    pub fn zero() -> Self {
        Self {
            coeff: BigInt::zero(),
            scale: 0,
            digits: 1,
        }
    }

    /// Returns exact one.
    pub fn one() -> Self {
        Self {
            coeff: BigInt::one(),
            scale: 0,
            digits: 1,
        }
    }

    /// Returns `2^e` exactly. Negative powers are represented as
    /// `5^(-e) * 10^e`. The coefficient has about `|e|` bits.
    pub fn pow2(e: i64) -> Self {
        let k = e.unsigned_abs() as usize;
        if e >= 0 {
            Self::new(BigInt::one() << k, 0)
        } else {
            Self::new(BigInt::from(pow5(k)), -e)
        }
    }

    /// Divides by `2^k` exactly.
    pub fn div_pow2(&self, k: u32) -> Self {
        Self::new(&self.coeff * BigInt::from(pow5(k as usize)), self.scale + k as i64)
    }

    /// Returns the (normalized) integer coefficient.
    pub fn coefficient(&self) -> &BigInt {
        &self.coeff
    }

    /// Returns the decimal scale: the value is `coefficient * 10^(-scale)`.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Returns the number of significant decimal digits.
    /// Zero has one significant digit.
    pub fn significant_digits(&self) -> usize {
        self.digits
    }

    /// Returns the power of ten of the leading digit,
    /// i.e. `floor(log10(|self|))` for non-zero values.
    pub fn adjusted_exponent(&self) -> i64 {
        (self.digits as i64 - 1).saturating_sub(self.scale)
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Returns true if this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.coeff.sign() == Sign::Minus
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self {
            coeff: self.coeff.abs(),
            scale: self.scale,
            digits: self.digits,
        }
    }

    // Keeps the leading `precision` digits and appends a non-zero
    // sticky digit when any digit was dropped.
    pub(crate) fn truncate_to(&self, precision: usize) -> Self {
        if self.digits <= precision {
            return self.clone();
        }
        let dropped = self.digits - precision;
        let kept = self.coeff.magnitude() / pow10(dropped);
        let coeff = BigInt::from_biguint(self.coeff.sign(), kept * 10u8 + 1u8);
        Self::new(coeff, self.scale - dropped as i64 + 1)
    }

    // Returns `|self|` as a ratio of unsigned integers `(num, den)`
    // where `den` is a power of ten.
    pub(crate) fn magnitude_ratio(&self) -> (BigUint, BigUint) {
        let num = self.coeff.magnitude().clone();
        if self.scale <= 0 {
            (num * pow10(self.scale.unsigned_abs() as usize), BigUint::one())
        } else {
            (num, pow10(self.scale as usize))
        }
    }

    // Parses a literal that already passed the grammar check.
    pub(crate) fn from_literal(lit: &Literal<'_>) -> Self {
        let digits = format!("{}{}", lit.integer, lit.fraction);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Self::zero();
        }

        let trimmed = digits.trim_end_matches('0');
        let trailing = (digits.len() - trimmed.len()) as i64;
        let scale = (lit.fraction.len() as i64)
            .saturating_sub(lit.exponent())
            .saturating_sub(trailing);

        let magnitude = match BigUint::parse_bytes(trimmed.as_bytes(), 10) {
            Some(m) => m,
            None => return Self::zero(),
        };
        let sign = if lit.negative { Sign::Minus } else { Sign::Plus };
        Self {
            coeff: BigInt::from_biguint(sign, magnitude),
            scale,
            digits: trimmed.len(),
        }
    }
}

impl Default for ExactDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for ExactDecimal {
    fn from(n: u64) -> Self {
        Self::new(BigInt::from(n), 0)
    }
}

impl From<BigUint> for ExactDecimal {
    fn from(n: BigUint) -> Self {
        Self::new(BigInt::from(n), 0)
    }
}

impl Neg for ExactDecimal {
    type Output = ExactDecimal;

    fn neg(self) -> Self::Output {
        Self {
            coeff: -self.coeff,
            scale: self.scale,
            digits: self.digits,
        }
    }
}

impl Add for &ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, other: &ExactDecimal) -> Self::Output {
        // align to the larger scale
        let scale = i64::max(self.scale, other.scale);
        let lhs = &self.coeff * BigInt::from(pow10((scale - self.scale) as usize));
        let rhs = &other.coeff * BigInt::from(pow10((scale - other.scale) as usize));
        ExactDecimal::new(lhs + rhs, scale)
    }
}

impl Add for ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, other: ExactDecimal) -> Self::Output {
        &self + &other
    }
}

impl Mul for &ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, other: &ExactDecimal) -> Self::Output {
        ExactDecimal::new(&self.coeff * &other.coeff, self.scale + other.scale)
    }
}

impl Mul for ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, other: ExactDecimal) -> Self::Output {
        &self * &other
    }
}

// Canonical plain notation: no exponent, no redundant zeros.
impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coeff.magnitude().to_str_radix(10);
        if self.is_negative() {
            f.write_str("-")?;
        }

        if self.scale <= 0 {
            f.write_str(&digits)?;
            for _ in 0..self.scale.unsigned_abs() {
                f.write_str("0")?;
            }
            Ok(())
        } else {
            let scale = self.scale as usize;
            if digits.len() > scale {
                let (int, frac) = digits.split_at(digits.len() - scale);
                write!(f, "{int}.{frac}")
            } else {
                f.write_str("0.")?;
                for _ in 0..(scale - digits.len()) {
                    f.write_str("0")?;
                }
                f.write_str(&digits)
            }
        }
    }
}

/// Parses a decimal literal exactly.
///
/// Besides the grammar, the adjusted exponent must lie within
/// [`ExactDecimal::MIN_EXPONENT`]`..=`[`ExactDecimal::MAX_EXPONENT`];
/// otherwise [`ConvertError::Magnitude`] is returned. This keeps the plain
/// notation and the scale alignment in `Add` proportional to the input.
impl FromStr for ExactDecimal {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lit = Literal::scan(s)?;
        let value = Self::from_literal(&lit);
        if !(Self::MIN_EXPONENT..=Self::MAX_EXPONENT).contains(&value.adjusted_exponent()) {
            return Err(ConvertError::Magnitude {
                literal: s.to_string(),
            });
        }
        Ok(value)
    }
}
