//! Report generation and rendering.
//!
//! [`ReportGenerator::run`] derives ten labelled sections from a [`Ledger`]
//! in a fixed order. [`Report::write_to`] renders them as plain text.

use crate::amount::Amount;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::sort::{by_amount_ascending, by_amount_descending, by_name, stable_sort_by};
use crate::transaction::TransactionRecord;
use crate::views::{self, BIG_TRANSACTION_THRESHOLD, BILLS_CATEGORY};
use csv::WriterBuilder;
use log::{debug, info};
use std::cmp::Ordering;
use std::io::Write;

pub const TRANSACTIONS: &str = "Transactions:";
pub const BILLS: &str = "Bills:";
pub const BIG_TRANSACTIONS: &str = "Big Transactions:";
pub const TRANSACTION_NAMES: &str = "Transaction Names:";
pub const FORMATTED_TRANSACTIONS: &str = "Formatted Transactions 2:";
pub const AMOUNTS: &str = "Amounts:";
pub const SORTED_LOW_TO_HIGH: &str = "Sorted Low to High:";
pub const SORTED_HIGH_TO_LOW: &str = "Sorted High to Low:";
pub const SORTED_ALPHABETICALLY: &str = "Sorted Alphabetically:";
pub const SORTED_NAMES: &str = "Sorted Alphabetically 2:";

const CSV_HEADER: [&str; 4] = ["id", "name", "amount", "category"];

type RecordComparator = fn(&TransactionRecord, &TransactionRecord) -> Option<Ordering>;

/// Whether sort steps reorder the ledger itself or a private copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sequencing {
    /// Each sort works on a copy; the ledger keeps its original order.
    #[default]
    Snapshot,

    /// Each sort reorders the ledger, so later steps see earlier sorts.
    Live,
}

/// Payload of one report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Records(Vec<TransactionRecord>),
    Text(Vec<String>),
    Amounts(Vec<Amount>),
}

/// A labelled report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub body: SectionBody,
}

impl Section {
    fn records(label: &'static str, records: Vec<TransactionRecord>) -> Self {
        Section {
            label,
            body: SectionBody::Records(records),
        }
    }

    fn text(label: &'static str, values: Vec<String>) -> Self {
        Section {
            label,
            body: SectionBody::Text(values),
        }
    }

    fn amounts(label: &'static str, amounts: Vec<Amount>) -> Self {
        Section {
            label,
            body: SectionBody::Amounts(amounts),
        }
    }
}

/// The ordered output of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with the given label.
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Writes every section as text.
    ///
    /// Record sections are CSV tables with an `id,name,amount,category` header,
    /// text sections are bracketed lists of quoted strings, and amount sections
    /// are bracketed lists of numbers. Sections are separated by a blank line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "{}", section.label)?;

            match &section.body {
                SectionBody::Records(records) => {
                    let mut csv_writer = WriterBuilder::new()
                        .has_headers(false)
                        .from_writer(&mut writer);

                    csv_writer.write_record(CSV_HEADER)?;
                    for record in records {
                        csv_writer.serialize(record)?;
                    }
                    csv_writer.flush()?;
                }
                SectionBody::Text(values) => {
                    writeln!(writer, "{:?}", values)?;
                }
                SectionBody::Amounts(amounts) => {
                    let joined: Vec<String> = amounts.iter().map(|a| a.to_string()).collect();
                    writeln!(writer, "[{}]", joined.join(", "))?;
                }
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// Runs the fixed sequence of report steps against a ledger.
pub struct ReportGenerator {
    ledger: Ledger,
    sequencing: Sequencing,
}

impl ReportGenerator {
    pub fn new(ledger: Ledger, sequencing: Sequencing) -> Self {
        ReportGenerator { ledger, sequencing }
    }

    /// The ledger in its current order. Under [`Sequencing::Live`] this
    /// reflects every sort performed so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Produces the ten report sections in order.
    pub fn run(&mut self) -> Report {
        info!(
            "Generating report over {} records ({:?} sequencing)",
            self.ledger.len(),
            self.sequencing
        );

        let mut sections = Vec::with_capacity(10);
        let records = self.ledger.records();

        sections.push(Section::records(TRANSACTIONS, records.to_vec()));

        let bills = views::filter_by_category(records, BILLS_CATEGORY);
        debug!("{} records in category {:?}", bills.len(), BILLS_CATEGORY);
        sections.push(Section::records(BILLS, bills));

        let big = views::filter_above(records, BIG_TRANSACTION_THRESHOLD);
        debug!("{} records above {}", big.len(), BIG_TRANSACTION_THRESHOLD);
        sections.push(Section::records(BIG_TRANSACTIONS, big));

        let names = views::names(records);
        sections.push(Section::text(TRANSACTION_NAMES, names.clone()));
        sections.push(Section::text(
            FORMATTED_TRANSACTIONS,
            views::spending_lines(records),
        ));
        sections.push(Section::amounts(AMOUNTS, views::amounts(records)));

        sections.push(self.sorted(SORTED_LOW_TO_HIGH, by_amount_ascending));
        sections.push(self.sorted(SORTED_HIGH_TO_LOW, by_amount_descending));
        sections.push(self.sorted(SORTED_ALPHABETICALLY, by_name));

        // Plain names have no amount, so this comparator orders nothing and
        // the names keep their projected order.
        let mut sorted_names = names;
        stable_sort_by(&mut sorted_names, by_amount_ascending);
        sections.push(Section::text(SORTED_NAMES, sorted_names));

        debug!("Report has {} sections", sections.len());
        Report { sections }
    }

    fn sorted(&mut self, label: &'static str, compare: RecordComparator) -> Section {
        let records = match self.sequencing {
            Sequencing::Snapshot => {
                let mut copy = self.ledger.snapshot();
                stable_sort_by(&mut copy, compare);
                copy
            }
            Sequencing::Live => {
                self.ledger.sort_by(compare);
                self.ledger.snapshot()
            }
        };
        debug!("{}: {:?}", label, views::names(&records));
        Section::records(label, records)
    }
}
