//! Display formatting for account numbers, amounts, and dates.

/// Mask an account number down to its last four characters.
///
/// `"1234567890123456"` renders as `"•••• 3456"`. Values of four characters
/// or fewer are returned unchanged since there is nothing left to hide.
pub fn mask_account_number(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= 4 {
        return raw.to_owned();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("\u{2022}\u{2022}\u{2022}\u{2022} {tail}")
}

/// Render a money amount with two decimal places.
///
/// This is also the text the transaction search matches against, so the
/// search behaves exactly like the visible table.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Trim an ISO-8601 timestamp down to its date part.
pub fn format_date(iso: &str) -> String {
    iso.split('T').next().unwrap_or(iso).to_owned()
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
