use num_bigint::BigInt;
use radix_sim::*;

fn dec(coeff: i64, exp: i64) -> Decimal {
    Decimal::finite(coeff < 0, BigInt::from(coeff), BigInt::from(exp))
}

fn parts(v: &Decimal) -> (bool, BigInt, BigInt) {
    (v.sign(), v.coefficient().unwrap().clone(), v.exponent().unwrap().clone())
}

#[test]
fn signaling_nan_takes_precedence() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let qnan = Decimal::nan(false, false, BigInt::from(1));
    let snan = Decimal::nan(true, true, BigInt::from(2));
    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.add(&qnan, &snan, &mut ctx).unwrap();
    assert_eq!(r, Decimal::nan(true, false, BigInt::from(2)));
    assert!(ctx.flags().invalid());

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.multiply(&dec(1, 0), &qnan, &mut ctx).unwrap();
    assert_eq!(r, qnan);
    assert!(ctx.flags().is_empty());

    // payloads keep at most `precision` digits
    let mut ctx = Context::for_precision(3).with_blank_flags();
    let long = Decimal::nan(false, false, BigInt::from(12345));
    let r = math.plus(&long, &mut ctx).unwrap();
    assert_eq!(r.nan_payload(), Some(&BigInt::from(345)));
}

#[test]
fn quiet_nans_propagate_left_to_right() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let first = Decimal::nan(false, false, BigInt::from(1));
    let second = Decimal::nan(true, false, BigInt::from(2));
    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.add(&first, &second, &mut ctx).unwrap();
    assert_eq!(r, first);
    assert!(ctx.flags().is_empty());

    let r = math.divide(&second, &first, &mut ctx).unwrap();
    assert_eq!(r, second);

    // a signaling addend alone still signals
    let snan = Decimal::nan(false, true, BigInt::from(3));
    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.multiply_and_add(&dec(2, 0), &dec(3, 0), &snan, &mut ctx).unwrap();
    assert_eq!(r.is_signaling(), Some(false));
    assert_eq!(r.nan_payload(), Some(&BigInt::from(3)));
    assert!(ctx.flags().invalid());

    // signaling beats an earlier quiet NaN
    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.multiply_and_add(&first, &dec(3, 0), &snan, &mut ctx).unwrap();
    assert_eq!(r, Decimal::nan(false, false, BigInt::from(3)));
    assert!(ctx.flags().invalid());
}

#[test]
fn subtracting_a_nan_keeps_its_sign() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);
    let nan = Decimal::nan(true, false, BigInt::from(0));
    let mut ctx = Context::for_precision(5).with_blank_flags();
    assert_eq!(math.subtract(&dec(1, 0), &nan, &mut ctx).unwrap(), nan);
}

#[test]
fn operands_are_rounded_first() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.add(&dec(0, 0), &dec(12345678, -7), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(12346), BigInt::from(-4)));
    let flags = ctx.flags();
    assert!(flags.lost_digits() && flags.inexact() && flags.rounded());

    // zero digits lost are only rounded
    let mut ctx = Context::for_precision(2).with_blank_flags();
    let r = math.multiply(&dec(1000, 0), &dec(1, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(10), BigInt::from(2)));
    assert!(ctx.flags().rounded() && !ctx.flags().lost_digits());
}

#[test]
fn division() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::for_precision_and_rounding(5, Rounding::HalfUp).with_blank_flags();
    let r = math.divide(&dec(1, 0), &dec(3, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(33333), BigInt::from(-5)));
    assert!(ctx.flags().inexact() && ctx.flags().rounded());

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.divide(&dec(1, 0), &dec(4, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(25), BigInt::from(-2)));
    assert!(ctx.flags().is_empty());

    // positive exponents are written out when they fit
    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.divide(&dec(6, 2), &dec(2, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(300), BigInt::from(0)));

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.divide(&dec(-7, 0), &dec(0, 0), &mut ctx).unwrap();
    assert!(r.is_infinity() && r.sign());
    assert!(ctx.flags().division_by_zero());

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.divide_to_integer_zero_scale(&dec(75, -1), &dec(2, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(3), BigInt::from(0)));
    let r = math.remainder(&dec(75, -1), &dec(2, 0), &mut ctx, false).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(15), BigInt::from(-1)));
}

#[test]
fn special_results_need_flags() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::for_precision(5);
    let r = math.divide(&dec(1, 0), &dec(0, 0), &mut ctx).unwrap();
    assert!(r.is_nan());

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.add(&Decimal::infinity(false), &dec(1, 0), &mut ctx).unwrap();
    assert!(r.is_nan() && ctx.flags().invalid());
}

#[test]
fn finite_only_families_fail() {
    let engine = FullMath::<10>::finite_only();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.divide(&dec(1, 0), &dec(0, 0), &mut ctx);
    assert_eq!(r, Err(ArithmeticError::NonFiniteResult));

    let mut ctx = Context::decimal32().with_blank_flags();
    let r = math.quantize(&dec(1, 0), &dec(1, -100), &mut ctx);
    assert_eq!(r, Err(ArithmeticError::InvalidOperation));
}

#[test]
fn quantize() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::decimal32().with_blank_flags();
    let r = math.quantize(&dec(1, 0), &dec(1, -100), &mut ctx).unwrap();
    assert!(r.is_nan() && ctx.flags().invalid());

    let mut ctx = Context::for_precision(9).with_blank_flags();
    let r = math.quantize(&dec(2175, -3), &dec(1, -2), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(218), BigInt::from(-2)));

    // zero results keep the quantized exponent
    let mut ctx = Context::for_precision(9).with_blank_flags();
    let r = math.quantize(&dec(0, 0), &dec(1, -3), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(0), BigInt::from(-3)));
}

#[test]
fn subnormal_results_are_underflows() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::decimal32().with_blank_flags();
    let r = math.multiply(&dec(1, -50), &dec(1, -50), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(1), BigInt::from(-100)));
    let flags = ctx.flags();
    assert!(flags.subnormal() && flags.underflow() && flags.inexact() && flags.rounded());
}

#[test]
fn clamped_needs_clamping() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let unclamped = Context::decimal32().with_clamp_normal_exponents(false);
    let mut ctx = unclamped.with_blank_flags();
    let r = math.round_to_precision(&dec(0, -200), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(0), BigInt::from(0)));
    assert!(!ctx.flags().clamped());

    let mut ctx = Context::decimal32().with_blank_flags();
    let r = math.plus(&dec(1, 96), &mut ctx).unwrap();
    assert!(ctx.flags().clamped());
    assert_eq!(r.to_f64(), 1e96);
}

#[test]
fn zero_results_and_shortcuts() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let mut ctx = Context::for_precision(5).with_blank_flags();
    let r = math.add(&dec(5, -3), &dec(-5, -3), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(0), BigInt::from(0)));

    let r = math.add(&dec(3, 3), &dec(4, 3), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(7000), BigInt::from(0)));

    let r = math.power(&dec(0, 0), &dec(0, 2), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(1), BigInt::from(0)));

    let r = math.multiply_and_add(&dec(0, 0), &dec(9, 0), &dec(12, -1), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(12), BigInt::from(-1)));
}

#[test]
fn selection_and_comparison() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);
    let mut ctx = Context::for_precision(5).with_blank_flags();

    let a = dec(10, -1);
    let b = dec(100, -2);
    assert_eq!(math.max(&a, &b, &mut ctx).unwrap(), a);
    assert_eq!(math.min(&b, &a, &mut ctx).unwrap(), b);
    assert_eq!(math.max_magnitude(&dec(-3, 0), &dec(2, 0), &mut ctx).unwrap(), dec(-3, 0));
    assert_eq!(math.compare_to(&dec(2, 0), &dec(1, 0)), std::cmp::Ordering::Greater);

    let r = math.compare_to_with_context(&dec(1, 0), &dec(2, 0), false, &mut ctx).unwrap();
    assert_eq!(r, Decimal::from(-1));

    let r = math.pi(&mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(31416), BigInt::from(-4)));
}

#[test]
fn huge_exponents_stay_in_place() {
    let engine = FullMath::<10>::new();
    let math = SimpleRadixMath::new(&engine);

    let huge = dec(1, 5_000_000_000);
    let mut ctx = Context::unlimited().with_blank_flags();
    let r = math.multiply(&huge, &dec(1, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(1), BigInt::from(5_000_000_000i64)));
    assert!(ctx.flags().is_empty());

    // small positive exponents are still written out
    let r = math.multiply(&dec(12, 3), &dec(1, 0), &mut ctx).unwrap();
    assert_eq!(parts(&r), (false, BigInt::from(12000), BigInt::from(0)));
}
