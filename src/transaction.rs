//! Transaction record model and the compiled-in seed data.

use crate::amount::Amount;
use serde::Serialize;
use std::fmt;

/// A single transaction entry.
///
/// Field order matches the CSV column order used when rendering reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// Unique positive transaction ID
    pub id: u32,

    /// Who made the transaction
    pub name: String,

    /// Positive amount in currency units
    pub amount: Amount,

    /// Free-form category label; casing is kept verbatim
    pub category: String,
}

impl TransactionRecord {
    /// Creates a new record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
    ) -> Self {
        TransactionRecord {
            id,
            name: name.into(),
            amount,
            category: category.into(),
        }
    }

    /// Renders the record as a spending sentence padded by one space on each side.
    ///
    /// ```
    /// use transaction_report::{Amount, TransactionRecord};
    ///
    /// let bob = TransactionRecord::new(2, "Bob", Amount::whole(40), "entertainment");
    /// assert_eq!(bob.spending_line(), " Bob spent $40 on entertainment ");
    /// ```
    pub fn spending_line(&self) -> String {
        format!(" {} spent ${} on {} ", self.name, self.amount, self.category)
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} ({})",
            self.id, self.name, self.amount, self.category
        )
    }
}

/// The five transactions every report is built from.
///
/// Category casing differs between records ("Bills" vs "entertainment") and is kept as-is.
pub fn seed_records() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new(1, "ALice", Amount::whole(50), "Bills"),
        TransactionRecord::new(2, "Bob", Amount::whole(40), "entertainment"),
        TransactionRecord::new(3, "Jessica", Amount::whole(70), "groceries"),
        TransactionRecord::new(4, "Michael", Amount::whole(30), "transport"),
        TransactionRecord::new(5, "Sarah", Amount::whole(90), "Shopping"),
    ]
}
