//! Pure aggregation over cache snapshots.
//!
//! Everything here is stateless and never mutates its input. Output ordering
//! always matches input cache order: the service's ordering is inherited,
//! including any nondeterminism it may have, and no re-sorting by date is
//! performed.

use chrono::{DateTime, Utc};

use crate::{LedgerRecord, Money};

/// One chart point: the record's bucket label and its amount, in cache
/// order. Same-day records are not merged.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub amount: Money,
}

/// Sum of all record amounts. Zero over an empty cache.
pub fn total_amount(records: &[LedgerRecord]) -> Money {
    records.iter().map(|record| record.amount).sum()
}

/// Signed cross-kind balance: total income minus total expense.
pub fn net_balance(income: &[LedgerRecord], expense: &[LedgerRecord]) -> Money {
    total_amount(income) - total_amount(expense)
}

/// Date-bucketed series for chart consumption: exactly one point per record,
/// in cache order.
pub fn series(records: &[LedgerRecord]) -> Vec<SeriesPoint> {
    records
        .iter()
        .map(|record| SeriesPoint {
            label: bucket_label(record.date),
            amount: record.amount,
        })
        .collect()
}

/// Day + abbreviated month display string, e.g. `"5 Sep"`. Deterministic in
/// the date: same date, same label.
pub fn bucket_label(date: DateTime<Utc>) -> String {
    date.format("%-d %b").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(id: &str, cents: i64, date: DateTime<Utc>) -> LedgerRecord {
        LedgerRecord {
            id: id.to_string(),
            amount: Money::new(cents),
            label: "Food".to_string(),
            date,
            icon: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn totals_over_empty_cache_are_zero() {
        assert_eq!(total_amount(&[]), Money::ZERO);
        assert_eq!(net_balance(&[], &[]), Money::ZERO);
        assert!(series(&[]).is_empty());
    }

    #[test]
    fn total_is_invariant_under_reordering() {
        let a = record("a", 1000, date(2026, 9, 5));
        let b = record("b", 2500, date(2026, 9, 6));
        let c = record("c", 50, date(2026, 9, 7));
        let forward = [a.clone(), b.clone(), c.clone()];
        let backward = [c, b, a];
        assert_eq!(total_amount(&forward), Money::new(3550));
        assert_eq!(total_amount(&forward), total_amount(&backward));
    }

    #[test]
    fn net_balance_subtracts_expense_from_income() {
        let income = [record("a", 10_000, date(2026, 9, 5))];
        let expense = [
            record("b", 2_500, date(2026, 9, 6)),
            record("c", 9_000, date(2026, 9, 7)),
        ];
        assert_eq!(net_balance(&income, &expense), Money::new(-1_500));
        assert_eq!(net_balance(&income, &[]), Money::new(10_000));
    }

    #[test]
    fn series_preserves_cache_order_and_length() {
        let records = [
            record("a", 1000, date(2026, 9, 6)),
            record("b", 2000, date(2026, 9, 5)),
            record("c", 3000, date(2026, 9, 5)),
        ];
        let points = series(&records);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label, "6 Sep");
        assert_eq!(points[0].amount, Money::new(1000));
        // same date, same label, still two distinct points
        assert_eq!(points[1].label, "5 Sep");
        assert_eq!(points[2].label, "5 Sep");
    }

    #[test]
    fn bucket_label_has_no_zero_padding() {
        assert_eq!(bucket_label(date(2026, 1, 3)), "3 Jan");
        assert_eq!(bucket_label(date(2026, 12, 25)), "25 Dec");
    }
}
