use super::*;

// =============================================================
// mask_account_number
// =============================================================

#[test]
fn masks_to_last_four() {
    assert_eq!(mask_account_number("1234567890123456"), "\u{2022}\u{2022}\u{2022}\u{2022} 3456");
}

#[test]
fn masks_short_but_maskable_numbers() {
    assert_eq!(mask_account_number("98765"), "\u{2022}\u{2022}\u{2022}\u{2022} 8765");
}

#[test]
fn leaves_four_or_fewer_characters_unchanged() {
    assert_eq!(mask_account_number("1234"), "1234");
    assert_eq!(mask_account_number(""), "");
}

// =============================================================
// format_amount
// =============================================================

#[test]
fn amount_has_two_decimals() {
    assert_eq!(format_amount(450.0), "450.00");
    assert_eq!(format_amount(0.5), "0.50");
}

#[test]
fn amount_rounds_to_cents() {
    assert_eq!(format_amount(12.345), "12.35");
}

// =============================================================
// format_date
// =============================================================

#[test]
fn date_trims_time_component() {
    assert_eq!(format_date("2025-11-03T14:22:09Z"), "2025-11-03");
}

#[test]
fn date_passes_through_plain_dates() {
    assert_eq!(format_date("2025-11-03"), "2025-11-03");
}
