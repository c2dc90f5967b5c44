/*
    IEEE-754 binary64
*/

mod bits;
mod exact;
mod exceptions;
mod round;
mod util;

pub use exact::exact_value;

use bitvec::prelude::Lsb0;

type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;
type BitSlice = bitvec::prelude::BitSlice<u32, Lsb0>;

/** The fields of a binary64 encoding.
 *
 * A binary64 value is packed as
 *
 *  - bit 63: sign,
 *  - bits 52 to 62: biased exponent,
 *  - bits 0 to 51: mantissa (the fraction without its implicit leading digit).
 *
 * An exponent field of 0 encodes zero or a subnormal number,
 * and an exponent field of 2047 encodes an infinity or NaN.
 *
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatBits {
    pub sign: bool,
    pub exponent: u16,
    pub mantissa: u64,
}

/** Exception flags as specified by the IEEE-754 standard.
 *
 * Rounding an exact value into binary64 may raise:
 *
 *  - overflow: the rounded result exceeded in magnitude the largest finite
 *      value had the exponent range been unbounded;
 *  - underflow: the result is non-zero and tiny (subnormal or flushed to zero)
 *      and inexact;
 *  - inexact: the result differs from the exact value.
 *
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exceptions {
    overflow: bool,
    underflow: bool,
    inexact: bool,
}
