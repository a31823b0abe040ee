//! Synchronous form validation.
//!
//! These checks run before a request is issued; a failing field blocks the
//! submission and is shown inline, it never reaches the backend.

/// Validate an IFSC bank code: four letters, a literal `0`, six alphanumerics.
pub fn is_valid_ifsc(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_alphabetic)
        && bytes[4] == b'0'
        && bytes[5..].iter().all(u8::is_ascii_alphanumeric)
}

/// Validate an account number: 9 to 18 digits.
pub fn is_valid_account_number(raw: &str) -> bool {
    let trimmed = raw.trim();
    (9..=18).contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a ten-digit mobile number.
pub fn is_valid_phone(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.len() == 10 && trimmed.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
