use super::*;
use crate::net::types::Transaction;

fn tx(id: &str, transaction_type: TransactionType, amount: f64, reference: &str) -> Transaction {
    Transaction {
        id: id.into(),
        transaction_type,
        amount,
        reference: reference.into(),
        balance_after: 0.0,
        created_at: "2026-02-01T09:30:00Z".into(),
    }
}

fn ledger() -> Vec<Transaction> {
    vec![
        tx("t1", TransactionType::Deposit, 500.0, "REF1001"),
        tx("t2", TransactionType::Withdrawal, 120.0, "REF1002"),
        tx("t3", TransactionType::Deposit, 75.25, "REF1003"),
        tx("t4", TransactionType::Withdrawal, 500.0, "PAYOUT-88"),
        tx("t5", TransactionType::Deposit, 42.0, "REF1004"),
    ]
}

fn ids<'a>(filtered: &[&'a Transaction]) -> Vec<&'a str> {
    filtered.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// Text predicate
// =============================================================

#[test]
fn empty_term_matches_everything() {
    let filter = TransactionFilter::default();
    assert_eq!(filter.apply(&ledger()).len(), 5);
}

#[test]
fn term_matches_reference_case_insensitively() {
    let filter = TransactionFilter { term: "payout".into(), ..Default::default() };
    assert_eq!(ids(&filter.apply(&ledger())), vec!["t4"]);
}

#[test]
fn term_matches_amount_as_rendered_text() {
    let filter = TransactionFilter { term: "75.25".into(), ..Default::default() };
    assert_eq!(ids(&filter.apply(&ledger())), vec!["t3"]);
}

#[test]
fn whitespace_around_term_is_ignored() {
    let filter = TransactionFilter { term: "  ref1002  ".into(), ..Default::default() };
    assert_eq!(ids(&filter.apply(&ledger())), vec!["t2"]);
}

// =============================================================
// Category predicate and conjunction
// =============================================================

#[test]
fn category_alone_restricts_by_type() {
    let filter = TransactionFilter { category: CategoryFilter::Withdrawal, ..Default::default() };
    assert_eq!(ids(&filter.apply(&ledger())), vec!["t2", "t4"]);
}

#[test]
fn term_and_category_are_conjunctive_not_union() {
    // "500.00" matches t1 (deposit) and t4 (withdrawal); the category keeps
    // only the deposit.
    let filter = TransactionFilter { term: "500.00".into(), category: CategoryFilter::Deposit };
    assert_eq!(ids(&filter.apply(&ledger())), vec!["t1"]);
}

#[test]
fn conjunction_can_empty_the_result() {
    let filter = TransactionFilter { term: "payout".into(), category: CategoryFilter::Deposit };
    assert!(filter.apply(&ledger()).is_empty());
}

// =============================================================
// Ordering and idempotence
// =============================================================

#[test]
fn source_order_is_preserved() {
    let filter = TransactionFilter { category: CategoryFilter::Deposit, ..Default::default() };
    assert_eq!(ids(&filter.apply(&ledger())), vec!["t1", "t3", "t5"]);
}

#[test]
fn filtering_is_idempotent() {
    let source = ledger();
    let filter = TransactionFilter { term: "ref".into(), category: CategoryFilter::Deposit };
    let once = ids(&filter.apply(&source));
    let survivors: Vec<Transaction> =
        filter.apply(&source).into_iter().cloned().collect();
    let twice = ids(&filter.apply(&survivors));
    assert_eq!(once, twice);
}
