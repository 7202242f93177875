//! Read-only views derived from a sequence of records.
//!
//! Every view preserves the relative order of its input.

use crate::amount::Amount;
use crate::transaction::TransactionRecord;

/// Category label selected by the bills view.
pub const BILLS_CATEGORY: &str = "Bills";

/// Amounts strictly above this are "big" transactions.
pub const BIG_TRANSACTION_THRESHOLD: Amount = Amount::whole(50);

/// Records whose category equals `category` exactly (case-sensitive, no trimming).
pub fn filter_by_category(records: &[TransactionRecord], category: &str) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

/// Records whose amount is strictly greater than `threshold`.
pub fn filter_above(records: &[TransactionRecord], threshold: Amount) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|r| r.amount > threshold)
        .cloned()
        .collect()
}

pub fn names(records: &[TransactionRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

/// One [`TransactionRecord::spending_line`] per record.
pub fn spending_lines(records: &[TransactionRecord]) -> Vec<String> {
    records.iter().map(TransactionRecord::spending_line).collect()
}

pub fn amounts(records: &[TransactionRecord]) -> Vec<Amount> {
    records.iter().map(|r| r.amount).collect()
}
