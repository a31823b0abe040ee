use super::*;

fn account(id: &str) -> BankAccount {
    BankAccount {
        id: id.into(),
        account_number: "1234567890123456".into(),
        bank_name: "HDFC".into(),
        ifsc_code: "HDFC0001234".into(),
        is_active: true,
        balance: 1500.0,
    }
}

// =============================================================
// AccountsModal
// =============================================================

#[test]
fn create_binds_no_record() {
    assert!(AccountsModal::Create.record().is_none());
}

#[test]
fn edit_delete_and_transactions_bind_their_record() {
    for modal in [
        AccountsModal::Edit(account("acc_1")),
        AccountsModal::Delete(account("acc_1")),
        AccountsModal::Transactions(account("acc_1")),
    ] {
        assert_eq!(modal.record().map(|a| a.id.as_str()), Some("acc_1"));
    }
}

#[test]
fn opening_a_modal_replaces_the_previous_one() {
    // The page holds a single Option<AccountsModal>, so "open" is an
    // assignment: there is no state in which two modals coexist.
    let mut slot = Some(AccountsModal::Transactions(account("acc_1")));
    assert_eq!(slot.as_ref().and_then(AccountsModal::record).map(|a| a.id.as_str()), Some("acc_1"));
    slot = Some(AccountsModal::Edit(account("acc_2")));
    match &slot {
        Some(AccountsModal::Edit(selected)) => assert_eq!(selected.id, "acc_2"),
        other => panic!("expected edit modal, got {other:?}"),
    }
}

#[test]
fn closing_clears_the_selected_record() {
    let mut slot = Some(AccountsModal::Delete(account("acc_3")));
    assert!(slot.as_ref().and_then(AccountsModal::record).is_some());
    slot = None;
    assert!(slot.is_none());
}
