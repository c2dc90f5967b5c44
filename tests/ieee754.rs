use exact_float::{ieee754::*, ExactDecimal, Round};

#[test]
fn parameters() {
    assert_eq!(FloatBits::N, 64);
    assert_eq!(FloatBits::E, 11);
    assert_eq!(FloatBits::PREC, 53);
    assert_eq!(FloatBits::M, 52);
    assert_eq!(FloatBits::EMAX, 1023);
    assert_eq!(FloatBits::EMIN, -1022);
    assert_eq!(FloatBits::EXPMAX, 971);
    assert_eq!(FloatBits::EXPMIN, -1074);
    assert_eq!(FloatBits::BIAS, 1023);
}

#[test]
fn decode() {
    let fp = 1.0;
    let bits = FloatBits::decode(fp);
    assert!(!bits.sign, "decoding failed (sign): {:.20e}", fp);
    assert_eq!(bits.exponent, 1023, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, 0, "decoding failed (mantissa): {:.20e}", fp);

    let fp = 1.5;
    let bits = FloatBits::decode(fp);
    assert_eq!(bits.exponent, 1023, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, 0x8000000000000, "decoding failed (mantissa): {:.20e}", fp);

    let fp = 0.0;
    let bits = FloatBits::decode(fp);
    assert!(bits.is_zero(), "decoding failed (class): {:.20e}", fp);
    assert_eq!(bits.exponent, 0, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, 0, "decoding failed (mantissa): {:.20e}", fp);

    let fp = f64::MIN_POSITIVE;
    let bits = FloatBits::decode(fp);
    assert!(!bits.is_subnormal(), "decoding failed (class): {:.20e}", fp);
    assert_eq!(bits.exponent, 1, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, 0, "decoding failed (mantissa): {:.20e}", fp);

    let fp = f64::from_bits(1);
    let bits = FloatBits::decode(fp);
    assert!(bits.is_subnormal(), "decoding failed (class): {:.20e}", fp);
    assert_eq!(bits.exponent, 0, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, 1, "decoding failed (mantissa): {:.20e}", fp);

    let fp = f64::MAX;
    let bits = FloatBits::decode(fp);
    assert_eq!(bits.exponent, 2046, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, (1 << 52) - 1, "decoding failed (mantissa): {:.20e}", fp);

    // every byte of the mantissa is distinct
    let fp = f64::from_bits(0x4012_3456_789A_BCDE);
    let bits = FloatBits::decode(fp);
    assert_eq!(bits.exponent, 0x401, "decoding failed (exponent): {:.20e}", fp);
    assert_eq!(bits.mantissa, 0x2_3456_789A_BCDE, "decoding failed (mantissa): {:.20e}", fp);
}

#[test]
fn decode_matches_masks() {
    let mut x = 0x9E37_79B9_7F4A_7C15_u64;
    for _ in 0..10_000 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        let fp = f64::from_bits(x & !(1 << 63));
        if !fp.is_finite() {
            continue;
        }

        let bits = FloatBits::decode(fp);
        assert_eq!(bits.exponent as u64, (x >> 52) & 0x7FF, "exponent of {:#x}", x);
        assert_eq!(bits.mantissa, x & ((1 << 52) - 1), "mantissa of {:#x}", x);
        assert_eq!(bits.to_f64().to_bits(), fp.to_bits(), "repacking {:#x}", x);
    }
}

#[test]
fn pack() {
    let bits = FloatBits {
        sign: true,
        exponent: 1023,
        mantissa: 0x8000000000000,
    };
    assert_eq!(bits.to_f64(), -1.5);

    let bits = FloatBits {
        sign: true,
        exponent: 0,
        mantissa: 0,
    };
    assert_eq!(bits.to_f64().to_bits(), (-0.0_f64).to_bits());

    let bits = FloatBits {
        sign: false,
        exponent: FloatBits::EXP_SPECIAL,
        mantissa: 0,
    };
    assert!(bits.is_special());
    assert_eq!(f64::from(bits), f64::INFINITY);
}

fn exact(fp: f64) -> String {
    exact_value(&FloatBits::decode(fp)).to_string()
}

#[test]
fn exact_values() {
    assert_eq!(exact(0.0), "0");
    assert_eq!(exact(1.0), "1");
    assert_eq!(exact(1.5), "1.5");
    assert_eq!(exact(0.5), "0.5");
    assert_eq!(exact(0.25), "0.25");
    assert_eq!(exact(3.0), "3");
    assert_eq!(exact(1024.0), "1024");
    assert_eq!(exact(9007199254740993.0), "9007199254740992");
    assert_eq!(exact(0.1), "0.1000000000000000055511151231257827021181583404541015625");
    assert_eq!(exact(1e23), "99999999999999991611392");
    assert_eq!(exact(2f64.powi(-10)), "0.0009765625");

    // 1.5 is exactly 3/2, not an approximation
    let value = exact_value(&FloatBits {
        sign: false,
        exponent: 1023,
        mantissa: 0x8000000000000,
    });
    assert_eq!(value, "1.5".parse::<ExactDecimal>().unwrap());
    assert_eq!(value.coefficient().to_string(), "15");
    assert_eq!(value.scale(), 1);
}

#[test]
fn exact_values_at_the_boundaries() {
    // smallest subnormal: 2^-1074
    let value = exact_value(&FloatBits::decode(f64::from_bits(1)));
    assert_eq!(value, ExactDecimal::pow2(-1074));
    assert_eq!(value.scale(), 1074);
    assert_eq!(value.significant_digits(), 751);
    assert!(value.to_string().starts_with("0.000000000000"));
    assert!(value.to_string().ends_with("625"));

    // the largest subnormal and smallest normal differ by 2^-1074
    let largest_subnormal = exact_value(&FloatBits::decode(f64::from_bits((1 << 52) - 1)));
    let smallest_normal = exact_value(&FloatBits::decode(f64::MIN_POSITIVE));
    assert_eq!(smallest_normal, ExactDecimal::pow2(-1022));
    assert_eq!(largest_subnormal + ExactDecimal::pow2(-1074), smallest_normal);

    // largest finite: (2 - 2^-52) * 2^1023
    let max = exact_value(&FloatBits::decode(f64::MAX));
    assert_eq!(max.scale(), 0);
    assert_eq!(max.adjusted_exponent(), 308);
    assert_eq!(max.to_string(), "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368");
}

#[test]
fn round_to_nearest_even() {
    let round = |s: &str| s.parse::<ExactDecimal>().unwrap().round();

    let r = round("0.5");
    assert_eq!(*r.value(), 0.5);
    assert!(r.is_exact());

    let r = round("0.1");
    assert_eq!(*r.value(), 0.1);
    assert!(r.flags().inexact());
    assert!(!r.flags().overflow());

    // 2^53 + 1 is a tie between 2^53 and 2^53 + 2
    let r = round("9007199254740993");
    assert_eq!(*r.value(), 9007199254740992.0);
    assert!(r.flags().inexact());

    // 2^53 + 3 is a tie between 2^53 + 2 and 2^53 + 4
    let r = round("9007199254740995");
    assert_eq!(*r.value(), 9007199254740996.0);

    let r = round("-2.5");
    assert_eq!(*r.value(), -2.5);
    assert!(r.is_exact());
}

#[test]
fn round_overflow_and_underflow() {
    let round = |s: &str| s.parse::<ExactDecimal>().unwrap().round();

    let r = round("1e400");
    assert_eq!(*r.value(), f64::INFINITY);
    assert!(r.flags().overflow() && r.flags().inexact());

    let r = round("-1e400");
    assert_eq!(*r.value(), f64::NEG_INFINITY);
    assert!(r.flags().overflow());

    // just below the overflow threshold rounds down to the largest finite value
    let r = round("179769313486231580793728971405303415079934132710037826936173778980444968292764750946649017977587207096330286416692887910946555547851940402630657488671505820681908902000708383676273854845817711531764475730270069855571366959622842914819860834936475292719074168444365510704342711559699508093042880177904174497791");
    assert_eq!(*r.value(), f64::MAX);
    assert!(!r.flags().overflow());

    // the threshold itself is a tie and goes to the even neighbour: infinity
    let r = round("179769313486231580793728971405303415079934132710037826936173778980444968292764750946649017977587207096330286416692887910946555547851940402630657488671505820681908902000708383676273854845817711531764475730270069855571366959622842914819860834936475292719074168444365510704342711559699508093042880177904174497792");
    assert_eq!(*r.value(), f64::INFINITY);
    assert!(r.flags().overflow());

    // half of the smallest subnormal is a tie and goes to zero
    let half = exact_value(&FloatBits::decode(f64::from_bits(1))).div_pow2(1);
    let r = half.round();
    assert_eq!(r.value().to_bits(), 0);
    assert!(r.flags().underflow() && r.flags().inexact());

    // anything above half rounds up to the smallest subnormal
    let r = round("2.5e-324");
    assert_eq!(r.value().to_bits(), 1);
    assert!(r.flags().underflow());

    let r = round("1e-400");
    assert_eq!(*r.value(), 0.0);
    assert!(r.flags().underflow() && r.flags().inexact());

    // rounding up across the subnormal boundary yields the smallest normal
    let below = exact_value(&FloatBits::decode(f64::from_bits((1 << 52) - 1)));
    let nudge = exact_value(&FloatBits::decode(f64::from_bits(1))).div_pow2(1);
    let r = (below + nudge + ExactDecimal::pow2(-1200)).round();
    assert_eq!(*r.value(), f64::MIN_POSITIVE);
}

#[test]
fn round_matches_std() {
    let mut x = 0x2545_F491_4F6C_DD1D_u64;
    let mut next = || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        x
    };

    for _ in 0..5_000 {
        let digits = 1 + (next() % 25) as usize;
        let mut literal = String::new();
        for i in 0..digits {
            let d = next() % 10;
            let d = if i == 0 && d == 0 { 1 } else { d };
            literal.push(char::from(b'0' + d as u8));
        }
        let exp = (next() % 680) as i64 - 345;
        let literal = format!("{literal}e{exp}");

        let expected: f64 = literal.parse().unwrap();
        let actual = *literal.parse::<ExactDecimal>().unwrap().round().value();
        assert_eq!(actual.to_bits(), expected.to_bits(), "rounding {}", literal);
    }
}
