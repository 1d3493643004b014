//! Ordering stage of the record query pipeline.
//!
//! The backing store can only sort by creation time, so every other
//! ordering is produced here, in memory, over the full fetched list.

use std::collections::VecDeque;

use crate::record::{RecordFields, SortDirection, SortField};

/// Sorts records by the given field and direction.
///
/// Top-down recursive merge sort over [`SortValue`](crate::record::SortValue)
/// keys. The merge only takes from the left run while it is strictly
/// ahead, so equal keys come out right run first: the sort is **not
/// stable**, and callers must not rely on the relative order inside a
/// tie group. Records with a missing date key sort before dated ones.
#[must_use]
pub fn sort_records<R: RecordFields>(
    records: Vec<R>,
    field: SortField,
    direction: SortDirection,
) -> Vec<R> {
    if records.len() <= 1 {
        return records;
    }
    let mut left = records;
    let right = left.split_off(left.len() / 2);
    let left = sort_records(left, field, direction);
    let right = sort_records(right, field, direction);
    merge(left, right, field, direction)
}

fn merge<R: RecordFields>(
    left: Vec<R>,
    right: Vec<R>,
    field: SortField,
    direction: SortDirection,
) -> Vec<R> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = VecDeque::from(left);
    let mut right = VecDeque::from(right);

    loop {
        let take_left = match (left.front(), right.front()) {
            (Some(l), Some(r)) => {
                let (l, r) = (l.sort_value(field), r.sort_value(field));
                match direction {
                    SortDirection::Ascending => l < r,
                    SortDirection::Descending => l > r,
                }
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        if let Some(record) = source.pop_front() {
            merged.push(record);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{
        Bill, CategoryGroup, CategoryKind, CategoryRef, PaymentMethodKind, PaymentMethodRef,
    };
    use chrono::{DateTime, TimeZone, Utc};
    use fluxo_shared::types::{Amount, BillId, CategoryId, PaymentMethodId, UserId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn bill(description: &str, amount: Decimal) -> Bill {
        Bill {
            id: BillId::new(),
            user_id: UserId::new(),
            description: description.to_string(),
            amount: Amount::new(amount).unwrap(),
            bill_date: None,
            pay_date: None,
            paid_out: false,
            fixed: false,
            paid_with_card: false,
            category: CategoryRef {
                id: CategoryId::new(),
                description: "General".to_string(),
                kind: CategoryKind::Other,
            },
            category_group: CategoryGroup::Other,
            payment_method: PaymentMethodRef {
                id: PaymentMethodId::new(),
                description: "Cash".to_string(),
                kind: PaymentMethodKind::Cash,
            },
            created_at: at(2025, 1, 1),
            updated_at: None,
        }
    }

    fn amounts(records: &[Bill]) -> Vec<Decimal> {
        records.iter().map(|b| b.amount.value()).collect()
    }

    #[test]
    fn test_descending_amount_order() {
        let records = vec![
            bill("electricity", dec!(148.00)),
            bill("salary", dec!(8209.56)),
            bill("rent", dec!(1200.56)),
        ];
        let sorted = sort_records(records, SortField::Amount, SortDirection::Descending);
        assert_eq!(
            amounts(&sorted),
            [dec!(8209.56), dec!(1200.56), dec!(148.00)]
        );
    }

    #[test]
    fn test_ascending_is_the_reverse_of_descending_for_distinct_keys() {
        let records = vec![
            bill("c", dec!(30)),
            bill("a", dec!(10)),
            bill("e", dec!(50)),
            bill("b", dec!(20)),
            bill("d", dec!(40)),
        ];
        let mut ascending = amounts(&sort_records(
            records.clone(),
            SortField::Amount,
            SortDirection::Ascending,
        ));
        let descending = amounts(&sort_records(
            records,
            SortField::Amount,
            SortDirection::Descending,
        ));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_description_sorts_lexicographically() {
        let records = vec![
            bill("rent", dec!(1)),
            bill("coffee", dec!(1)),
            bill("water", dec!(1)),
        ];
        let sorted = sort_records(records, SortField::Description, SortDirection::Ascending);
        let names: Vec<&str> = sorted.iter().map(|b| b.description.as_str()).collect();
        assert_eq!(names, ["coffee", "rent", "water"]);
    }

    #[test]
    fn test_missing_dates_sort_before_dated_records() {
        let dated = Bill {
            bill_date: Some(at(2025, 3, 1)),
            ..bill("dated", dec!(1))
        };
        let undated = bill("undated", dec!(1));
        let sorted = sort_records(
            vec![dated, undated],
            SortField::PrimaryDate,
            SortDirection::Ascending,
        );
        assert_eq!(sorted[0].description, "undated");
        assert_eq!(sorted[1].description, "dated");
    }

    #[test]
    fn test_ties_preserve_the_multiset_without_promising_an_order() {
        let records = vec![
            bill("x", dec!(10)),
            bill("y", dec!(10)),
            bill("z", dec!(5)),
            bill("w", dec!(10)),
        ];
        let sorted = sort_records(records, SortField::Amount, SortDirection::Ascending);

        assert_eq!(amounts(&sorted), [dec!(5), dec!(10), dec!(10), dec!(10)]);
        let mut tied: Vec<&str> = sorted[1..].iter().map(|b| b.description.as_str()).collect();
        tied.sort_unstable();
        assert_eq!(tied, ["w", "x", "y"]);
    }

    #[test]
    fn test_singleton_and_empty_inputs_pass_through() {
        let empty: Vec<Bill> = Vec::new();
        assert!(sort_records(empty, SortField::Amount, SortDirection::Ascending).is_empty());

        let one = vec![bill("only", dec!(7))];
        let sorted = sort_records(one, SortField::Amount, SortDirection::Descending);
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].description, "only");
    }
}
