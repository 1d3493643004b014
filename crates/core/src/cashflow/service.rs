//! Cash-flow aggregation service.

use std::sync::Arc;

use fluxo_shared::types::UserId;
use tracing::{debug, error};

use super::error::CashFlowError;
use super::types::MonthSummary;
use crate::calendar::ReportingCalendar;
use crate::record::{Bill, Receivable, RecordFields, SortDirection};
use crate::store::RecordStore;

/// Builds the twelve-month income/expense/profit report for one year.
///
/// Holds one store handle per record type so bills and receivables can
/// be fetched concurrently.
pub struct CashFlowService<B, R> {
    bills: Arc<B>,
    receivables: Arc<R>,
    calendar: ReportingCalendar,
}

impl<B, R> CashFlowService<B, R>
where
    B: RecordStore<Bill>,
    R: RecordStore<Receivable>,
{
    /// Creates a cash-flow service over the given stores.
    #[must_use]
    pub fn new(bills: Arc<B>, receivables: Arc<R>, calendar: ReportingCalendar) -> Self {
        Self {
            bills,
            receivables,
            calendar,
        }
    }

    /// Returns one summary per calendar month of `year`, January through
    /// December, always exactly twelve entries.
    ///
    /// Records are bucketed by the calendar month their primary date
    /// falls in, in the reporting timezone. Records without a primary
    /// date belong to no month.
    ///
    /// # Errors
    ///
    /// Returns [`CashFlowError::Store`] when either bulk fetch fails;
    /// there are no partial reports.
    pub async fn monthly_summaries(
        &self,
        user_id: UserId,
        year: i32,
    ) -> Result<Vec<MonthSummary>, CashFlowError> {
        let (bills, receivables) = tokio::try_join!(
            self.bills
                .fetch_all_for_user(user_id, SortDirection::Descending),
            self.receivables
                .fetch_all_for_user(user_id, SortDirection::Descending),
        )
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, year, "Failed to fetch records for cash flow report");
            CashFlowError::Store(e)
        })?;

        debug!(
            user_id = %user_id,
            year,
            bills = bills.len(),
            receivables = receivables.len(),
            "Summarizing cash flow"
        );

        Ok(summarize_year(&self.calendar, year, &bills, &receivables))
    }
}

/// Pure summation core behind [`CashFlowService::monthly_summaries`].
pub(crate) fn summarize_year(
    calendar: &ReportingCalendar,
    year: i32,
    bills: &[Bill],
    receivables: &[Receivable],
) -> Vec<MonthSummary> {
    (1..=12)
        .map(|month| summarize_month(calendar, year, month, bills, receivables))
        .collect()
}

fn summarize_month(
    calendar: &ReportingCalendar,
    year: i32,
    month: u32,
    bills: &[Bill],
    receivables: &[Receivable],
) -> MonthSummary {
    let mut summary = MonthSummary::empty(year, month);
    // A year outside the representable range has no window; the month
    // stays zeroed rather than failing the whole report.
    let Some((first, last)) = ReportingCalendar::month_window(year, month) else {
        return summary;
    };

    for bill in bills {
        let Some(local) = bill.primary_date().map(|i| calendar.local_date(i)) else {
            continue;
        };
        if local < first || local > last {
            continue;
        }
        summary.general_expenses += bill.amount().value();
        if bill.settled() {
            summary.paid_expenses += bill.amount().value();
        }
    }

    for receivable in receivables {
        let Some(local) = receivable.primary_date().map(|i| calendar.local_date(i)) else {
            continue;
        };
        if local < first || local > last {
            continue;
        }
        summary.general_incomes += receivable.amount().value();
        if receivable.settled() {
            summary.paid_incomes += receivable.amount().value();
        }
    }

    summary.general_profit = summary.general_incomes - summary.general_expenses;
    summary.paid_profit = summary.paid_incomes - summary.paid_expenses;
    summary
}
