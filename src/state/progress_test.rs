use super::*;

#[test]
fn idle_by_default() {
    assert!(!ProgressState::default().is_busy());
}

#[test]
fn busy_while_any_request_is_open() {
    let mut p = ProgressState::default();
    p.begin();
    p.begin();
    p.end();
    assert!(p.is_busy());
    p.end();
    assert!(!p.is_busy());
}

#[test]
fn extra_end_does_not_underflow() {
    let mut p = ProgressState::default();
    p.end();
    assert!(!p.is_busy());
    p.begin();
    assert!(p.is_busy());
}
