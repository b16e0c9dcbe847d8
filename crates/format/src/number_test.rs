use super::*;

fn fmt(pattern: &str, value: f64) -> String {
    PatternNumberFormatter::new(pattern).unwrap().format(value)
}

#[test]
fn test_zero_placeholders_pad_decimals() {
    assert_eq!(fmt("0.00", 3.5), "3.50");
    assert_eq!(fmt("000.0", 7.0), "007.0");
    assert_eq!(fmt("0.00", 0.0), "0.00");
}

#[test]
fn test_grouping() {
    assert_eq!(fmt("#,##0", 12345.0), "12,345");
    assert_eq!(fmt("#,##0", 1234567.0), "1,234,567");
    assert_eq!(fmt("#,##0", 12.0), "12");
    assert_eq!(fmt("#,##0.00", -9876.5), "-9,876.50");
}

#[test]
fn test_digit_placeholders_drop_insignificant_zeros() {
    assert_eq!(fmt("#.##", 1.0), "1");
    assert_eq!(fmt("#.##", 1.5), "1.5");
    assert_eq!(fmt("#.##", 0.5), ".5");
    assert_eq!(fmt("0.0#", 2.0), "2.0");
    assert_eq!(fmt("0.0#", 2.125), "2.13");
}

#[test]
fn test_rounding_half_away_from_zero() {
    assert_eq!(fmt("0", 2.5), "3");
    assert_eq!(fmt("0", -2.5), "-3");
    assert_eq!(fmt("0.0", 0.25), "0.3");
}

#[test]
fn test_scaling_and_multipliers() {
    assert_eq!(fmt("#,##0,", 1_500_000.0), "1,500");
    assert_eq!(fmt("0,,", 3_000_000.0), "3");
    assert_eq!(fmt("0%", 0.42), "42%");
    assert_eq!(fmt("0.0‰", 0.0123), "12.3‰");
}

#[test]
fn test_literals_and_escapes() {
    assert_eq!(fmt("'Total: '0", 8.0), "Total: 8");
    assert_eq!(fmt("\"#\"0", 4.0), "#4");
    assert_eq!(fmt("\\#0", 4.0), "#4");
    assert_eq!(fmt("0 kg", 12.0), "12 kg");
    assert_eq!(fmt("(000) 000-0000", 5551234567.0), "(555) 123-4567");
    assert_eq!(fmt("0.0.0", 1.25), "1.2.5");
}

#[test]
fn test_currency_symbol() {
    let formatter = PatternNumberFormatter::new("¤#,##0.00")
        .unwrap()
        .with_currency_symbol("€");
    assert_eq!(formatter.format(1234.5), "€1,234.50");
    assert_eq!(fmt("¤0", 3.0), "$3");
}

#[test]
fn test_sections() {
    assert_eq!(fmt("0.00;(0.00)", -3.5), "(3.50)");
    assert_eq!(fmt("0.00;(0.00)", 3.5), "3.50");
    assert_eq!(fmt("0;-0;'nil'0", 0.0), "nil0");
    assert_eq!(fmt("0;;'zero '0", -2.0), "-2");
    assert_eq!(fmt("0.0", -0.01), "0.0");
}

#[test]
fn test_overflow_digits_go_to_leftmost_placeholder() {
    assert_eq!(fmt("#", 123456.0), "123456");
    assert_eq!(fmt("#", 0.0), "");
    assert_eq!(fmt(".00", 3.5), "3.50");
}

#[test]
fn test_decimal_formatter() {
    let decimal = PatternNumberFormatter::decimal();
    assert_eq!(decimal.format(1234.5678), "1,234.568");
    assert_eq!(decimal.format(0.0), "0");
    assert_eq!(decimal.format(-42.0), "-42");
    assert_eq!(decimal.pattern(), "#,##0.###");
    assert_eq!(decimal, PatternNumberFormatter::new("#,##0.###").unwrap());
}

#[test]
fn test_invalid_patterns() {
    assert_eq!(
        PatternNumberFormatter::new(""),
        Err(FormatError::EmptyPattern)
    );
    assert!(matches!(
        PatternNumberFormatter::new("0 'units"),
        Err(FormatError::UnterminatedQuote { position: 2, .. })
    ));
    assert!(matches!(
        PatternNumberFormatter::new("0\\"),
        Err(FormatError::TrailingEscape { position: 1, .. })
    ));
    assert!(matches!(
        PatternNumberFormatter::new("0;0;0;0"),
        Err(FormatError::TooManySections { position: 5, .. })
    ));
    assert!(matches!(
        PatternNumberFormatter::new("abc"),
        Err(FormatError::MissingDigitPlaceholder { section: 0, .. })
    ));
    assert!(matches!(
        PatternNumberFormatter::new(",##0"),
        Err(FormatError::UnmatchedGroupSeparator { position: 0, .. })
    ));
}

#[test]
fn test_literal_only_sections() {
    let accounting = PatternNumberFormatter::new("#,##0.00;(#,##0.00);'-'").unwrap();
    assert_eq!(accounting.format(0.0), "-");
    assert_eq!(accounting.format(1234.5), "1,234.50");
    assert_eq!(accounting.format(-1234.5), "(1,234.50)");
    assert_eq!(accounting.format(0.001), "-");

    assert_eq!(fmt("0;none", -4.0), "none");
    assert_eq!(fmt("0;none", 4.0), "4");
    assert_eq!(fmt("0;none;zero", 0.0), "zero");
}

#[test]
fn test_scaled_overflow_falls_back_to_plain_number() {
    let value = 1e306;
    assert_eq!(fmt("0.000‰", value), value.to_string());
    assert_eq!(fmt("0.000‰", -value), (-value).to_string());
    assert_eq!(fmt("0.000‰", 2.5), "2500.000‰");
}
