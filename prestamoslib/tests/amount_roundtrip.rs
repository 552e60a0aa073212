use prestamoslib::amount::{format_amount, parse_amount};
use rust_decimal::Decimal;

#[test]
fn parse_strips_thousands_separators() {
    assert_eq!(parse_amount("1,234.50"), Decimal::from_str_exact("1234.50").unwrap());
    assert_eq!(parse_amount("1,000,000"), Decimal::from(1_000_000));
}

#[test]
fn parse_falls_back_to_zero() {
    assert_eq!(parse_amount(""), Decimal::ZERO);
    assert_eq!(parse_amount("   "), Decimal::ZERO);
    assert_eq!(parse_amount("abc"), Decimal::ZERO);
    assert_eq!(parse_amount("12abc"), Decimal::ZERO);
}

#[test]
fn format_groups_and_pads() {
    assert_eq!(format_amount(Decimal::ZERO), "0.00");
    assert_eq!(format_amount(Decimal::from_str_exact("1234.5").unwrap()), "1,234.50");
    assert_eq!(format_amount(Decimal::from(-70)), "-70.00");
    assert_eq!(
        format_amount(Decimal::from_str_exact("1234567.891").unwrap()),
        "1,234,567.89"
    );
    assert_eq!(format_amount(Decimal::from(999)), "999.00");
    assert_eq!(format_amount(Decimal::from(1000)), "1,000.00");
}

#[test]
fn format_then_parse_round_trips() {
    for s in ["0", "0.25", "999.99", "1000", "1234.5", "98765432.10"] {
        let x = Decimal::from_str_exact(s).unwrap();
        assert_eq!(parse_amount(&format_amount(x)), x, "round trip of {s}");
    }
}
