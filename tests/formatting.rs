use quickcheck_macros::quickcheck;
use stock_search_wasm::domain::formatting::{
    ChangeDirection, calculate_change_percentage, change_direction, format_currency,
    format_large_number, format_percentage, is_valid_symbol, truncate_text,
};

#[test]
fn large_numbers_abbreviate_at_powers_of_one_thousand() {
    assert_eq!(format_large_number(Some(2_500_000.0)), "2.50M");
    assert_eq!(format_large_number(Some(1_500_000_000_000.0)), "1.50T");
    assert_eq!(format_large_number(Some(3_200_000_000.0)), "3.20B");
    assert_eq!(format_large_number(Some(12_300.0)), "12.30K");
    assert_eq!(format_large_number(Some(-500.0)), "-500");
    assert_eq!(format_large_number(None), "N/A");
}

#[test]
fn percentages_respect_the_requested_precision() {
    assert_eq!(format_percentage(Some(3.456), 1), "3.5%");
    assert_eq!(format_percentage(Some(-0.5), 2), "-0.50%");
    assert_eq!(format_percentage(None, 2), "N/A");
}

#[test]
fn currency_handles_missing_and_negative_values() {
    assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
    assert_eq!(format_currency(Some(-0.25)), "-$0.25");
    assert_eq!(format_currency(None), "N/A");
}

#[test]
fn symbol_shape_check() {
    assert!(is_valid_symbol("AAPL"));
    assert!(is_valid_symbol("A"));
    assert!(is_valid_symbol("BRK2"));
    assert!(!is_valid_symbol("aapl"), "lowercase input is rejected as-is");
    assert!(!is_valid_symbol("1ABC"));
    assert!(!is_valid_symbol(""));
    assert!(!is_valid_symbol("TOOLONG"));
}

#[test]
fn change_direction_classifies_sign() {
    assert_eq!(change_direction(Some(1.2)), ChangeDirection::Up);
    assert_eq!(change_direction(Some(-1.2)), ChangeDirection::Down);
    assert_eq!(change_direction(Some(0.0)), ChangeDirection::Flat);
    assert_eq!(change_direction(None), ChangeDirection::Flat);
    assert_eq!(ChangeDirection::Up.css_class(), "text-success");
    assert_eq!(ChangeDirection::Down.css_class(), "text-danger");
    assert_eq!(ChangeDirection::Flat.css_class(), "text-muted");
}

#[test]
fn change_percentage_guards_the_baseline() {
    assert_eq!(calculate_change_percentage(Some(110.0), Some(100.0)), Some(10.0));
    assert_eq!(calculate_change_percentage(Some(110.0), Some(0.0)), None);
    assert_eq!(calculate_change_percentage(None, Some(100.0)), None);
}

#[test]
fn long_names_truncate_with_ellipsis() {
    assert_eq!(truncate_text("Apple Inc.", 48), "Apple Inc.");
    assert_eq!(truncate_text("abcdefghij", 8), "abcde...");
}

#[quickcheck]
fn abbreviation_suffix_tracks_magnitude(value: f64) -> bool {
    if !value.is_finite() {
        return true;
    }
    let rendered = format_large_number(Some(value));
    let suffixed = rendered.ends_with(['K', 'M', 'B', 'T']);
    let sign_ok = rendered.starts_with('-') == (value < 0.0);
    sign_ok && suffixed == (value.abs() >= 1_000.0)
}
