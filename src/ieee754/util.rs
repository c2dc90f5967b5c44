use num_bigint::BigUint;

use super::*;

// Converts a `BitVec` to `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitSlice) -> BigUint {
    let digits: Vec<u8> = bv.iter().by_vals().map(u8::from).collect();
    BigUint::from_radix_le(&digits, 2).unwrap_or_default()
}

// Converts a `BigUint` to `BitVec` of exactly `width` bits,
// dropping any bits above `width`
pub(crate) fn biguint_to_bitvec(i: &BigUint, width: usize) -> BitVec {
    let mut bv = BitVec::from_vec(i.to_u32_digits());
    bv.resize(width, false);
    bv
}
