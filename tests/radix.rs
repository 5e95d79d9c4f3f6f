use num_bigint::BigInt;
use radix_sim::*;

fn dec(coeff: i64, exp: i64) -> Decimal {
    Decimal::finite(coeff < 0, BigInt::from(coeff), BigInt::from(exp))
}

#[test]
fn parameters() {
    assert_eq!(Decimal::radix(), 10);
    assert_eq!(Binary::radix(), 2);
    assert_eq!(RadixFloat::<36>::radix(), 36);

    let ctx = Context::decimal64();
    assert_eq!(ctx.precision(), 16);
    assert_eq!(ctx.etiny(), Some(BigInt::from(-398)));
    assert_eq!(ctx.etop(), Some(BigInt::from(369)));
}

#[test]
fn binary_matches_f64() {
    let cases = [(0.1, 0.2), (1.0, f64::EPSILON / 2.0), (3.0, -2.9999999), (1e300, 1e300), (5e-324, 5e-324)];
    for (x, y) in cases {
        let mut ctx = Context::binary64();
        let sum = Binary::from(x).add(&Binary::from(y), &mut ctx);
        assert_eq!(sum.to_f64(), x + y, "addition failed: {:e} + {:e}", x, y);

        let mut ctx = Context::binary64();
        let prod = Binary::from(x).mul(&Binary::from(y), &mut ctx);
        assert_eq!(prod.to_f64(), x * y, "multiplication failed: {:e} * {:e}", x, y);

        let mut ctx = Context::binary64();
        let quot = Binary::from(x).div(&Binary::from(y), &mut ctx);
        assert_eq!(quot.to_f64(), x / y, "division failed: {:e} / {:e}", x, y);
    }

    let mut ctx = Context::binary64();
    assert_eq!(Binary::from(2.0).sqrt(&mut ctx).to_f64(), 2f64.sqrt());
    assert_eq!(Binary::from(1.0).next_plus(&mut ctx).to_f64(), 1.0 + f64::EPSILON);
    assert_eq!(Binary::from(0.0).next_minus(&mut ctx).to_f64(), -5e-324);

    let mut ctx = Context::binary64().with_blank_flags();
    let max = Binary::from(f64::MAX);
    assert!(max.add(&max, &mut ctx).is_infinity());
    assert!(ctx.flags().overflow());
}

#[test]
fn rounding_modes() {
    let cases = [
        (Rounding::Up, 12346, -12346),
        (Rounding::Down, 12345, -12345),
        (Rounding::Ceiling, 12346, -12345),
        (Rounding::Floor, 12345, -12346),
        (Rounding::HalfUp, 12345, -12345),
        (Rounding::HalfDown, 12345, -12345),
        (Rounding::HalfEven, 12345, -12345),
        (Rounding::ZeroFiveUp, 12346, -12346),
    ];
    for (rounding, pos, neg) in cases {
        let mut ctx = Context::for_precision_and_rounding(5, rounding);
        assert_eq!(dec(123451, -5).round(&mut ctx), dec(pos, -4), "{:?} failed", rounding);
        assert_eq!(dec(-123451, -5).round(&mut ctx), dec(neg, -4), "{:?} failed", rounding);
    }

    let ties = [
        (Rounding::HalfUp, 12346),
        (Rounding::HalfDown, 12345),
        (Rounding::HalfEven, 12346),
    ];
    for (rounding, expected) in ties {
        let mut ctx = Context::for_precision_and_rounding(5, rounding);
        assert_eq!(dec(123455, -5).round(&mut ctx), dec(expected, -4), "{:?} failed", rounding);
    }

    let mut ctx = Context::for_precision_and_rounding(2, Rounding::ZeroFiveUp);
    assert_eq!(dec(401, 0).round(&mut ctx), dec(41, 1));
    assert_eq!(dec(451, 0).round(&mut ctx), dec(46, 1));
    assert_eq!(dec(471, 0).round(&mut ctx), dec(47, 1));
}

#[test]
fn other_radices() {
    let mut ctx = Context::unlimited();
    let third = RadixFloat::<3>::from(1).div(&RadixFloat::<3>::from(3), &mut ctx);
    assert_eq!(third, RadixFloat::<3>::finite(false, BigInt::from(1), BigInt::from(-1)));

    let mut ctx = Context::for_precision(4);
    let r = RadixFloat::<16>::from(255).mul(&RadixFloat::<16>::from(4097), &mut ctx);
    // 0xff * 0x1001 = 0xff0ff
    assert_eq!(r, RadixFloat::<16>::finite(false, BigInt::from(0xff10), BigInt::from(1)));
}

#[test]
fn transcendental_functions() {
    let mut ctx = Context::for_precision(10);
    assert_eq!(dec(2, 0).pow(&dec(5, -1), &mut ctx), dec(1414213562, -9));
    assert_eq!(dec(-1, 0).exp(&mut ctx), dec(3678794412, -10));
    assert_eq!(dec(5, -1).ln(&mut ctx), dec(-6931471806, -10));
    assert_eq!(dec(2, 0).sqrt(&mut ctx), dec(1414213562, -9));

    let mut ctx = Context::for_precision(5).with_blank_flags();
    assert!(dec(-1, 0).ln(&mut ctx).is_nan());
    assert!(ctx.flags().invalid());

    let mut ctx = Context::for_precision(5).with_blank_flags();
    assert_eq!(dec(0, 0).ln(&mut ctx), Decimal::infinity(true));
    assert!(ctx.flags().is_empty());
}

#[test]
fn hi_lo_pairs() {
    let mut ctx = Context::for_precision(40);
    let pi = Decimal::pi(&mut ctx);
    let (hi, lo) = to_hi_lo_pair(&pi);
    assert_eq!(hi, std::f32::consts::PI);
    assert!(lo != 0.0 && lo.abs() < 1e-6);
    assert!((f64::from(hi) + f64::from(lo) - std::f64::consts::PI).abs() < 1e-14);

    assert_eq!(to_hi_lo_pair(&Decimal::zero(true)), (-0.0, 0.0));
    assert_eq!(to_hi_lo_pair(&dec(-25, -1)), (-2.5, 0.0));
}
