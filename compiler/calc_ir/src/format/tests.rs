use super::*;
use pretty_assertions::assert_eq;

#[test]
fn integers_print_without_fraction() {
    assert_eq!(format_g(5.0, 4), "5");
    assert_eq!(format_g(120.0, 4), "120");
    assert_eq!(format_g(1234.0, 4), "1234");
    assert_eq!(format_g(-42.0, 4), "-42");
}

#[test]
fn fractions_round_to_significant_digits() {
    assert_eq!(format_g(3.141_592_65, 4), "3.142");
    assert_eq!(format_g(-2.5, 4), "-2.5");
    assert_eq!(format_g(0.1, 4), "0.1");
    assert_eq!(format_g(2.0 / 3.0, 4), "0.6667");
    assert_eq!(format_g(0.0001, 4), "0.0001");
}

#[test]
fn large_and_small_values_switch_to_exponent() {
    assert_eq!(format_g(12_346.0, 4), "1.235e+04");
    assert_eq!(format_g(1_234_567.0, 4), "1.235e+06");
    assert_eq!(format_g(100_000.0, 4), "1e+05");
    assert_eq!(format_g(0.000_01, 4), "1e-05");
    assert_eq!(format_g(1e100, 4), "1e+100");
    assert_eq!(format_g(-6.02e-23, 4), "-6.02e-23");
}

#[test]
fn rounding_can_bump_the_exponent() {
    assert_eq!(format_g(9999.7, 4), "1e+04");
    assert_eq!(format_g(99.996, 4), "100");
}

#[test]
fn zero_and_specials() {
    assert_eq!(format_g(0.0, 4), "0");
    assert_eq!(format_g(-0.0, 4), "-0");
    assert_eq!(format_g(f64::INFINITY, 4), "inf");
    assert_eq!(format_g(f64::NEG_INFINITY, 4), "-inf");
    assert_eq!(format_g(f64::NAN, 4), "nan");
    assert_eq!(format_g(-f64::NAN, 4), "-nan");
}

#[test]
fn zero_precision_means_one_digit() {
    assert_eq!(format_g(123.0, 0), "1e+02");
    assert_eq!(format_g(7.0, 0), "7");
}

mod proptest_format {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn seventeen_digits_round_trip(value in proptest::num::f64::NORMAL) {
            let text = format_g(value, 17);
            prop_assert_eq!(text.parse::<f64>().unwrap(), value);
        }

        #[test]
        fn four_digits_never_exceed_four_significant_digits(value in -1e12f64..1e12f64) {
            let text = format_g(value, 4);
            let mantissa = text.split('e').next().unwrap();
            let digits = mantissa
                .chars()
                .filter(char::is_ascii_digit)
                .collect::<String>();
            let significant = digits.trim_start_matches('0');
            prop_assert!(significant.len() <= 4, "{} -> {}", value, text);
        }
    }
}
