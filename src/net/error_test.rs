use super::*;

// =============================================================
// is_not_found
// =============================================================

#[test]
fn status_404_is_not_found() {
    let err = ApiError::Status { status: 404, message: String::new() };
    assert!(err.is_not_found());
}

#[test]
fn not_found_message_is_detected_case_insensitively() {
    let err = ApiError::Status { status: 400, message: "Provider profile Not Found".into() };
    assert!(err.is_not_found());
}

#[test]
fn other_statuses_are_not_not_found() {
    let err = ApiError::Status { status: 500, message: "boom".into() };
    assert!(!err.is_not_found());
    assert!(!ApiError::Network("timeout".into()).is_not_found());
    assert!(!ApiError::Unauthenticated.is_not_found());
}

// =============================================================
// from_status
// =============================================================

#[test]
fn status_401_becomes_unauthenticated() {
    assert_eq!(ApiError::from_status(401, "expired".into()), ApiError::Unauthenticated);
}

#[test]
fn other_statuses_keep_status_and_body() {
    assert_eq!(
        ApiError::from_status(422, "invalid ifsc".into()),
        ApiError::Status { status: 422, message: "invalid ifsc".into() }
    );
}

// =============================================================
// Display
// =============================================================

#[test]
fn status_error_displays_status_and_message() {
    let err = ApiError::Status { status: 422, message: "invalid ifsc".into() };
    assert_eq!(err.to_string(), "422: invalid ifsc");
}

#[test]
fn unavailable_names_the_server_stub() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}
