use super::*;

// =============================================================
// IFSC
// =============================================================

#[test]
fn accepts_well_formed_ifsc() {
    assert!(is_valid_ifsc("HDFC0001234"));
    assert!(is_valid_ifsc("sbin0000456"));
}

#[test]
fn rejects_ifsc_without_zero_separator() {
    assert!(!is_valid_ifsc("HDFC1001234"));
}

#[test]
fn rejects_ifsc_of_wrong_length() {
    assert!(!is_valid_ifsc("HDFC000123"));
    assert!(!is_valid_ifsc("HDFC00012345"));
    assert!(!is_valid_ifsc(""));
}

#[test]
fn rejects_ifsc_with_digit_prefix() {
    assert!(!is_valid_ifsc("1DFC0001234"));
}

// =============================================================
// Account number
// =============================================================

#[test]
fn accepts_digit_account_numbers() {
    assert!(is_valid_account_number("123456789"));
    assert!(is_valid_account_number("123456789012345678"));
    assert!(is_valid_account_number("  1234567890  "));
}

#[test]
fn rejects_account_numbers_outside_length_bounds() {
    assert!(!is_valid_account_number("12345678"));
    assert!(!is_valid_account_number("1234567890123456789"));
}

#[test]
fn rejects_non_digit_account_numbers() {
    assert!(!is_valid_account_number("12345abc9"));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn accepts_ten_digit_phone() {
    assert!(is_valid_phone("9876543210"));
}

#[test]
fn rejects_short_or_decorated_phone() {
    assert!(!is_valid_phone("98765"));
    assert!(!is_valid_phone("+919876543210"));
}
