//! Property-based tests for the query pipeline stages.

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use fluxo_shared::types::{Amount, BillId, CategoryId, PageQuery, PaymentMethodId, UserId};

use super::filter::{self, FilterSpec};
use super::order::sort_records;
use super::paginate::paginate;
use crate::calendar::ReportingCalendar;
use crate::record::{
    Bill, CategoryGroup, CategoryKind, CategoryRef, PaymentMethodKind, PaymentMethodRef,
    RecordFields, SortDirection, SortField,
};

/// Strategy for a valid amount with cent precision.
fn amount_strategy() -> impl Strategy<Value = Amount> {
    (0i64..100_000_000i64).prop_map(|cents| {
        Amount::new(Decimal::new(cents, 2)).expect("cent amounts are always valid")
    })
}

/// Strategy for an instant somewhere in 1970..2033.
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..2_000_000_000i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).expect("in-range timestamp"))
}

fn sort_field_strategy() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Amount),
        Just(SortField::PrimaryDate),
        Just(SortField::SecondaryDate),
        Just(SortField::Description),
        Just(SortField::CreatedAt),
    ]
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![
        Just(SortDirection::Ascending),
        Just(SortDirection::Descending),
    ]
}

fn make_bill(
    description: String,
    amount: Amount,
    bill_date: Option<DateTime<Utc>>,
    pay_date: Option<DateTime<Utc>>,
    flags: (bool, bool, bool),
    created_at: DateTime<Utc>,
) -> Bill {
    let (paid_out, fixed, paid_with_card) = flags;
    Bill {
        id: BillId::new(),
        user_id: UserId::new(),
        description,
        amount,
        bill_date,
        pay_date,
        paid_out,
        fixed,
        paid_with_card,
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
        created_at,
        updated_at: None,
    }
}

/// Strategy for a bill with arbitrary amount, dates and flags.
fn bill_strategy() -> impl Strategy<Value = Bill> {
    (
        "[a-z]{1,12}",
        amount_strategy(),
        proptest::option::of(instant_strategy()),
        proptest::option::of(instant_strategy()),
        any::<(bool, bool, bool)>(),
        instant_strategy(),
    )
        .prop_map(|(description, amount, bill_date, pay_date, flags, created_at)| {
            make_bill(description, amount, bill_date, pay_date, flags, created_at)
        })
}

fn bills_strategy() -> impl Strategy<Value = Vec<Bill>> {
    proptest::collection::vec(bill_strategy(), 0..25)
}

fn ids(records: &[Bill]) -> Vec<BillId> {
    records.iter().map(|b| b.id).collect()
}

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Walking every valid page in order reproduces the input list
    /// exactly once, and no page exceeds the requested size.
    #[test]
    fn prop_pages_concatenate_to_the_whole_list(
        bills in bills_strategy(),
        size in 1i64..10,
    ) {
        let total_pages = (bills.len() as u64).div_ceil(size as u64);
        let mut walked = Vec::new();
        for page in 0..total_pages {
            let result = paginate(bills.clone(), PageQuery::new(page as i64, size), None);
            prop_assert!(result.content.len() as i64 <= size);
            prop_assert_eq!(result.total_pages, total_pages);
            walked.extend(result.content);
        }
        prop_assert_eq!(walked, bills);
    }

    /// The envelope always reflects input validity: unusable input zeroes
    /// it, usable input carries the true totals. Raw page and size are
    /// echoed either way.
    #[test]
    fn prop_envelope_matches_input_validity(
        bills in bills_strategy(),
        page in proptest::option::of(-5i64..30),
        size in proptest::option::of(-5i64..10),
    ) {
        let query = PageQuery { page, size };
        let result = paginate(bills.clone(), query, None);

        match query.validated() {
            None => {
                prop_assert!(result.content.is_empty());
                prop_assert_eq!(result.total_elements, 0);
                prop_assert_eq!(result.total_pages, 0);
            }
            Some((_, size)) => {
                prop_assert_eq!(result.total_elements, bills.len() as u64);
                prop_assert_eq!(result.total_pages, (bills.len() as u64).div_ceil(size));
            }
        }
        prop_assert_eq!(result.page, page);
        prop_assert_eq!(result.size, size);
    }

    /// An empty spec filters nothing.
    #[test]
    fn prop_empty_filter_is_identity(bills in bills_strategy()) {
        let calendar = ReportingCalendar::utc();
        let result = filter::apply(bills.clone(), &FilterSpec::new(), &calendar, reference_day());
        prop_assert_eq!(result, bills);
    }

    /// Applying two single-criterion specs one after the other selects
    /// the same records as the combined spec.
    #[test]
    fn prop_sequential_filters_equal_the_combined_spec(
        bills in bills_strategy(),
        fixed in any::<bool>(),
        settled in any::<bool>(),
    ) {
        let calendar = ReportingCalendar::utc();
        let today = reference_day();

        let first = FilterSpec::new().with_fixed(fixed);
        let second = FilterSpec::new().with_settled(settled);
        let combined = FilterSpec::new().with_fixed(fixed).with_settled(settled);

        let sequential = filter::apply(
            filter::apply(bills.clone(), &first, &calendar, today),
            &second,
            &calendar,
            today,
        );
        let at_once = filter::apply(bills, &combined, &calendar, today);
        prop_assert_eq!(sequential, at_once);
    }

    /// The amount criterion is a floor: kept records sit at or above the
    /// threshold, dropped ones below it.
    #[test]
    fn prop_min_amount_splits_at_the_threshold(
        bills in bills_strategy(),
        threshold in amount_strategy(),
    ) {
        let calendar = ReportingCalendar::utc();
        let spec = FilterSpec::new().with_min_amount(threshold);
        let kept = filter::apply(bills.clone(), &spec, &calendar, reference_day());

        for bill in &kept {
            prop_assert!(bill.amount >= threshold);
        }
        let expected = bills.iter().filter(|b| b.amount >= threshold).count();
        prop_assert_eq!(kept.len(), expected);
    }

    /// Sorting never invents or drops records.
    #[test]
    fn prop_sort_preserves_the_multiset(
        bills in bills_strategy(),
        field in sort_field_strategy(),
        direction in direction_strategy(),
    ) {
        let mut before = ids(&bills);
        let sorted = sort_records(bills, field, direction);
        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Adjacent keys always respect the requested direction.
    #[test]
    fn prop_sorted_keys_are_monotone(
        bills in bills_strategy(),
        field in sort_field_strategy(),
        direction in direction_strategy(),
    ) {
        let sorted = sort_records(bills, field, direction);
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].sort_value(field), pair[1].sort_value(field));
            match direction {
                SortDirection::Ascending => prop_assert!(a <= b),
                SortDirection::Descending => prop_assert!(a >= b),
            }
        }
    }

    /// With all keys distinct the two directions are exact reverses.
    #[test]
    fn prop_directions_reverse_each_other_for_distinct_keys(
        cents in proptest::collection::hash_set(0i64..1_000_000, 0..15),
    ) {
        let bills: Vec<Bill> = cents
            .into_iter()
            .map(|c| {
                let amount = Amount::new(Decimal::new(c, 2)).expect("valid amount");
                make_bill(
                    "bill".to_string(),
                    amount,
                    None,
                    None,
                    (false, false, false),
                    DateTime::from_timestamp(0, 0).expect("epoch"),
                )
            })
            .collect();

        let ascending = sort_records(bills.clone(), SortField::Amount, SortDirection::Ascending);
        let mut descending =
            sort_records(bills, SortField::Amount, SortDirection::Descending);
        descending.reverse();
        prop_assert_eq!(ids(&ascending), ids(&descending));
    }
}
