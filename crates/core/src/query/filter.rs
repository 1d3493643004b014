//! Filter stage of the record query pipeline.
//!
//! A [`FilterSpec`] holds three independent groups of criteria that are
//! always AND-ed: one classification key, the flag/amount group, and one
//! date predicate. Empty spec means no filtering at all.

use chrono::{DateTime, NaiveDate, Utc};
use fluxo_shared::types::{Amount, CategoryId, PaymentMethodId};
use serde::{Deserialize, Serialize};

use crate::calendar::ReportingCalendar;
use crate::record::{CategoryGroup, PaymentStatus, RecordFields};

/// Classification key a record list can be narrowed by.
///
/// The enum makes "more than one key at a time" unrepresentable, so the
/// pipeline never has to trust upstream request validation for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Records in the given category.
    Category(CategoryId),
    /// Records whose category belongs to the given group.
    CategoryGroup(CategoryGroup),
    /// Records tied to the given payment method.
    PaymentMethod(PaymentMethodId),
    /// Records whose derived payment status matches.
    PaymentStatus(PaymentStatus),
}

/// Which of the record's two dates a date predicate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// Due/accrual date.
    Primary,
    /// Settlement date.
    Secondary,
}

/// Predicate applied to the targeted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePredicate {
    /// The date equals the given instant.
    Exactly(DateTime<Utc>),
    /// The date falls inside the inclusive range. A missing bound is
    /// open-ended on that side.
    Between {
        /// Inclusive lower bound.
        start: Option<DateTime<Utc>>,
        /// Inclusive upper bound.
        end: Option<DateTime<Utc>>,
    },
}

/// A date criterion: one target field, one predicate.
///
/// Records whose targeted date is unset never match, whatever the
/// predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    /// Field the predicate applies to.
    pub field: DateField,
    /// Predicate on that field.
    pub predicate: DatePredicate,
}

/// Filter criteria for a record query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Classification key, at most one.
    pub status: Option<StatusFilter>,
    /// Keep only recurring (or only one-off) records.
    pub fixed: Option<bool>,
    /// Keep only settled (or only unsettled) records.
    pub settled: Option<bool>,
    /// Keep only card-linked (or only card-free) records.
    pub card_linked: Option<bool>,
    /// Keep only records with `amount >= min_amount`.
    pub min_amount: Option<Amount>,
    /// Date criterion, at most one.
    pub date: Option<DateFilter>,
}

impl FilterSpec {
    /// Creates a new empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classification key.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Keeps only records whose `fixed` flag matches.
    #[must_use]
    pub const fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = Some(fixed);
        self
    }

    /// Keeps only records whose settled flag matches.
    #[must_use]
    pub const fn with_settled(mut self, settled: bool) -> Self {
        self.settled = Some(settled);
        self
    }

    /// Keeps only records whose card flag matches.
    #[must_use]
    pub const fn with_card_linked(mut self, card_linked: bool) -> Self {
        self.card_linked = Some(card_linked);
        self
    }

    /// Keeps only records with an amount at or above the threshold.
    #[must_use]
    pub const fn with_min_amount(mut self, min_amount: Amount) -> Self {
        self.min_amount = Some(min_amount);
        self
    }

    /// Sets the date criterion.
    #[must_use]
    pub const fn with_date(mut self, date: DateFilter) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns true when the spec has no active criteria.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.fixed.is_none()
            && self.settled.is_none()
            && self.card_linked.is_none()
            && self.min_amount.is_none()
            && self.date.is_none()
    }
}

type Predicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;

fn predicates<'a, R: RecordFields>(
    spec: &FilterSpec,
    calendar: &'a ReportingCalendar,
    today: NaiveDate,
) -> Vec<Predicate<'a, R>> {
    let mut active: Vec<Predicate<'a, R>> = Vec::new();

    if let Some(status) = spec.status {
        active.push(Box::new(move |record| match status {
            StatusFilter::Category(id) => record.category_id() == id,
            StatusFilter::CategoryGroup(group) => record.category_group() == group,
            StatusFilter::PaymentMethod(id) => record.payment_method_id() == id,
            StatusFilter::PaymentStatus(status) => {
                record.payment_status(calendar, today) == status
            }
        }));
    }
    if let Some(fixed) = spec.fixed {
        active.push(Box::new(move |record| record.fixed() == fixed));
    }
    if let Some(settled) = spec.settled {
        active.push(Box::new(move |record| record.settled() == settled));
    }
    if let Some(card_linked) = spec.card_linked {
        active.push(Box::new(move |record| record.card_linked() == card_linked));
    }
    if let Some(min_amount) = spec.min_amount {
        active.push(Box::new(move |record| record.amount() >= min_amount));
    }
    if let Some(date) = spec.date {
        let (start, end) = match date.predicate {
            DatePredicate::Exactly(instant) => (instant, instant),
            DatePredicate::Between { start, end } => (
                start.unwrap_or(DateTime::<Utc>::MIN_UTC),
                end.unwrap_or(DateTime::<Utc>::MAX_UTC),
            ),
        };
        active.push(Box::new(move |record| {
            let target = match date.field {
                DateField::Primary => record.primary_date(),
                DateField::Secondary => record.secondary_date(),
            };
            target.is_some_and(|instant| start <= instant && instant <= end)
        }));
    }

    active
}

/// Retains the records matching every active criterion of the spec.
///
/// Order-preserving; an empty spec returns the input unchanged. `today`
/// is the reference day for payment-status derivation, resolved once by
/// the caller.
#[must_use]
pub fn apply<R: RecordFields>(
    records: Vec<R>,
    spec: &FilterSpec,
    calendar: &ReportingCalendar,
    today: NaiveDate,
) -> Vec<R> {
    let active = predicates(spec, calendar, today);
    if active.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| active.iter().all(|matches| matches(record)))
        .collect()
}
