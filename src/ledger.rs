//! The canonical ordered store of transaction records.
//!
//! Records are validated once on construction. The only mutation the ledger
//! allows afterwards is reordering through [`Ledger::sort_by`].

use crate::error::{ReportError, Result};
use crate::sort::stable_sort_by;
use crate::transaction::{seed_records, TransactionRecord};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;

/// An ordered, validated sequence of transaction records.
///
/// # Invariants
///
/// - Every `id` is positive and unique
/// - Every `name` and `category` is non-blank
/// - Every `amount` is strictly positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    /// Builds a ledger, rejecting records that break the ledger invariants.
    pub fn from_records(records: Vec<TransactionRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            validate(record)?;
            if !seen.insert(record.id) {
                return Err(ReportError::DuplicateId { id: record.id });
            }
        }

        debug!("Ledger holds {} records", records.len());
        Ok(Ledger { records })
    }

    /// Builds the ledger from the compiled-in seed records.
    ///
    /// # Panics
    ///
    /// Panics if the seed data breaks a ledger invariant. The seed is part of
    /// the program, so a bad record is a bug rather than a runtime condition.
    pub fn seed() -> Self {
        match Self::from_records(seed_records()) {
            Ok(ledger) => ledger,
            Err(e) => panic!("seed data is malformed: {}", e),
        }
    }

    /// Records in their current order.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Copy of the records in their current order.
    pub fn snapshot(&self) -> Vec<TransactionRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reorders the records in place with a stable sort.
    ///
    /// Pairs the comparator cannot order are kept in their current relative order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&TransactionRecord, &TransactionRecord) -> Option<Ordering>,
    {
        stable_sort_by(&mut self.records, compare);
    }
}

fn validate(record: &TransactionRecord) -> Result<()> {
    let invalid = |message: &str| ReportError::InvalidRecord {
        id: record.id,
        message: message.to_string(),
    };

    if record.id == 0 {
        return Err(invalid("id must be positive"));
    }
    if record.name.trim().is_empty() {
        return Err(invalid("name is blank"));
    }
    if record.category.trim().is_empty() {
        return Err(invalid("category is blank"));
    }
    if !record.amount.is_positive() {
        return Err(invalid("amount must be positive"));
    }
    Ok(())
}
