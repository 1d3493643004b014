//! The record-shape interface the query pipeline is generic over.

use chrono::{DateTime, NaiveDate, Utc};
use fluxo_shared::types::{Amount, CategoryId, PaymentMethodId};

use super::category::CategoryGroup;
use super::sort::{SortField, SortValue};
use super::status::PaymentStatus;
use crate::calendar::ReportingCalendar;

/// Field access shared by bills and receivables.
///
/// The filter, ordering and pagination stages are written once against
/// this trait; each record type maps its own field names onto the common
/// vocabulary (a bill's `bill_date` and a receivable's `receivable_date`
/// are both the primary date).
pub trait RecordFields: Send + Sync {
    /// Monetary amount.
    fn amount(&self) -> Amount;

    /// Due/accrual date of the record, if set.
    fn primary_date(&self) -> Option<DateTime<Utc>>;

    /// Settlement date, set once the obligation is settled.
    fn secondary_date(&self) -> Option<DateTime<Utc>>;

    /// Whether the record has been paid/received.
    fn settled(&self) -> bool;

    /// Whether the record recurs every period.
    fn fixed(&self) -> bool;

    /// Whether the record is linked to a card.
    fn card_linked(&self) -> bool;

    /// Free-text description.
    fn description(&self) -> &str;

    /// Category identifier.
    fn category_id(&self) -> CategoryId;

    /// Category group.
    fn category_group(&self) -> CategoryGroup;

    /// Payment method identifier.
    fn payment_method_id(&self) -> PaymentMethodId;

    /// Creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Derives the payment status relative to `today` in the reporting
    /// timezone.
    fn payment_status(&self, calendar: &ReportingCalendar, today: NaiveDate) -> PaymentStatus {
        let due = self.primary_date().map(|instant| calendar.local_date(instant));
        PaymentStatus::derive(self.settled(), due, today)
    }

    /// Returns the comparable view of the given sort field.
    fn sort_value(&self, field: SortField) -> SortValue<'_> {
        match field {
            SortField::Amount => SortValue::Amount(self.amount().value()),
            SortField::PrimaryDate => SortValue::Instant(self.primary_date()),
            SortField::SecondaryDate => SortValue::Instant(self.secondary_date()),
            SortField::Description => SortValue::Text(self.description()),
            SortField::CreatedAt => SortValue::Instant(Some(self.created_at())),
        }
    }
}
