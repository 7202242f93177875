//! # Transaction Report
//!
//! Derives a fixed sequence of filtered, projected and sorted views from a
//! small ledger of transactions and renders them as a labelled text report.
//!
//! ## Design Principles
//!
//! - **Exact amounts**: `rust_decimal` backed, rendered in natural form (`50`)
//! - **One canonical store**: the [`Ledger`] owns the records; views borrow it
//! - **Explicit sequencing**: sorts reorder a copy or the ledger itself, see [`Sequencing`]
//! - **Stable sorts**: pairs a comparator cannot order keep their input order
//!
//! ## Example
//!
//! ```no_run
//! use transaction_report::{Ledger, ReportGenerator, Sequencing};
//!
//! let mut generator = ReportGenerator::new(Ledger::seed(), Sequencing::Snapshot);
//! let report = generator.run();
//! report.write_to(std::io::stdout()).unwrap();
//! ```

pub mod amount;
pub mod error;
pub mod ledger;
pub mod report;
pub mod sort;
pub mod transaction;
pub mod views;

pub use amount::Amount;
pub use error::{ReportError, Result};
pub use ledger::Ledger;
pub use report::{Report, ReportGenerator, Section, SectionBody, Sequencing};
pub use transaction::{seed_records, TransactionRecord};
