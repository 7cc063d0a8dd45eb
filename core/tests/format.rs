use sales_core::format::{format_margin, format_price, format_units};

/// Prices carry the currency prefix and two decimals.
#[test]
fn price_has_two_decimals() {
    assert_eq!(format_price(10.0, "$"), "$10.00");
    assert_eq!(format_price(1234.567, "$"), "$1234.57");
    assert_eq!(format_price(0.5, "€"), "€0.50");
}

/// Margins round to a whole percentage.
#[test]
fn margin_is_whole_percent() {
    assert_eq!(format_margin(40.0), "40%");
    assert_eq!(format_margin(39.6), "40%");
    assert_eq!(format_margin(-12.2), "-12%");
}

/// Units use thousands separators; fractions are kept when present.
#[test]
fn units_have_thousands_separators() {
    assert_eq!(format_units(0.0), "0");
    assert_eq!(format_units(999.0), "999");
    assert_eq!(format_units(1000.0), "1,000");
    assert_eq!(format_units(1234567.0), "1,234,567");
    assert_eq!(format_units(1234.5), "1,234.5");
    assert_eq!(format_units(-45000.0), "-45,000");
}
