use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "code sent");
    let b = state.push(ToastLevel::Error, "request failed");
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "one");
    let b = state.push(ToastLevel::Info, "two");
    state.dismiss(a);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, b);
}

#[test]
fn dismissing_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Info, "keep");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}
