use super::*;

#[test]
fn join_url_concatenates_base_and_path() {
    assert_eq!(
        join_url("http://localhost:8000/api", "/bank-accounts"),
        "http://localhost:8000/api/bank-accounts"
    );
}

#[test]
fn join_url_keeps_nested_paths_intact() {
    assert_eq!(
        join_url("https://api.cheftable.in", "/bank-accounts/acc_1/transactions"),
        "https://api.cheftable.in/bank-accounts/acc_1/transactions"
    );
}
