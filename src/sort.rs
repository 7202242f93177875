//! Stable sorting driven by partial comparators.
//!
//! Comparators return `Option<Ordering>`: `None` means the pair cannot be
//! ordered. [`stable_sort_by`] treats such pairs as equal, so a comparator
//! that never orders anything leaves its input untouched.

use crate::amount::Amount;
use crate::transaction::TransactionRecord;
use std::cmp::Ordering;

/// Sorts `items` in place, keeping the relative order of pairs that compare
/// equal or cannot be ordered.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    // slice::sort_by is stable
    items.sort_by(|a, b| compare(a, b).unwrap_or(Ordering::Equal));
}

/// Values that may carry a transaction amount.
pub trait AmountField {
    fn amount_field(&self) -> Option<Amount>;
}

impl AmountField for TransactionRecord {
    fn amount_field(&self) -> Option<Amount> {
        Some(self.amount)
    }
}

impl AmountField for String {
    fn amount_field(&self) -> Option<Amount> {
        None
    }
}

impl AmountField for str {
    fn amount_field(&self) -> Option<Amount> {
        None
    }
}

/// Orders by the sign of `a.amount - b.amount`.
///
/// Returns `None` when either side has no amount.
pub fn amount_difference<T>(a: &T, b: &T) -> Option<Ordering>
where
    T: AmountField + ?Sized,
{
    let diff = a.amount_field()? - b.amount_field()?;
    Some(diff.signum_ordering())
}

/// Low to high by amount.
pub fn by_amount_ascending<T>(a: &T, b: &T) -> Option<Ordering>
where
    T: AmountField + ?Sized,
{
    amount_difference(a, b)
}

/// High to low by amount.
pub fn by_amount_descending<T>(a: &T, b: &T) -> Option<Ordering>
where
    T: AmountField + ?Sized,
{
    amount_difference(b, a)
}

/// Byte-wise comparison of names, so `"ALice" < "Bob" < "alice"`.
pub fn by_name(a: &TransactionRecord, b: &TransactionRecord) -> Option<Ordering> {
    Some(a.name.cmp(&b.name))
}
