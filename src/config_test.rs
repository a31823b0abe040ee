use super::*;

#[test]
fn normalize_strips_trailing_slash_and_whitespace() {
    assert_eq!(normalize(" https://api.cheftable.in/v1/ "), "https://api.cheftable.in/v1");
    assert_eq!(normalize("http://localhost:8000/api"), "http://localhost:8000/api");
}

#[test]
fn default_base_has_no_trailing_slash() {
    assert_eq!(normalize(DEFAULT_API_BASE), DEFAULT_API_BASE);
}
