//! Client-side transaction search.
//!
//! Filtering runs over the already-fetched list only; changing the term or
//! category never issues a network call. Both predicates must hold and the
//! source ordering is preserved.

use crate::net::types::{Transaction, TransactionType};
use crate::util::format::format_amount;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Deposit,
    Withdrawal,
}

impl CategoryFilter {
    pub const ALL_OPTIONS: [Self; 3] = [Self::All, Self::Deposit, Self::Withdrawal];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Deposit => "Deposits",
            Self::Withdrawal => "Withdrawals",
        }
    }

    fn admits(self, transaction_type: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Deposit => transaction_type == TransactionType::Deposit,
            Self::Withdrawal => transaction_type == TransactionType::Withdrawal,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    pub term: String,
    pub category: CategoryFilter,
}

impl TransactionFilter {
    /// Whether one transaction survives the filter.
    ///
    /// The text predicate matches the reference or the amount exactly as the
    /// table renders it; an empty term matches everything.
    pub fn matches(&self, tx: &Transaction) -> bool {
        let term = self.term.trim().to_lowercase();
        let text_ok = term.is_empty()
            || tx.reference.to_lowercase().contains(&term)
            || format_amount(tx.amount).contains(&term);
        text_ok && self.category.admits(tx.transaction_type)
    }

    /// Filter a fetched list, preserving its order.
    pub fn apply<'a>(&self, source: &'a [Transaction]) -> Vec<&'a Transaction> {
        source.iter().filter(|tx| self.matches(tx)).collect()
    }
}

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;
