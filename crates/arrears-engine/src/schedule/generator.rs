use super::dates;
use super::domain::{ArrearsItem, ArrearsScheduleInput, RentFrequency, ScheduleError};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

/// Builds the canonical billing ledger for a tenancy: ordered, contiguous
/// periods from the tenancy start, each due the full rent and initially
/// unpaid.
///
/// A period is billed once its start date falls before the cutoff; the
/// period that would begin on or after the cutoff is not emitted. A period
/// whose span crosses the cutoff is kept whole, never truncated, because
/// court schedules deal in complete billing periods.
pub fn generate_rent_periods(
    tenancy_start_date: NaiveDate,
    rent_amount: Decimal,
    rent_frequency: RentFrequency,
    cutoff_date: NaiveDate,
) -> Result<Vec<ArrearsItem>, ScheduleError> {
    if rent_amount <= Decimal::ZERO {
        return Err(ScheduleError::NonPositiveRentAmount {
            amount: rent_amount,
        });
    }

    let mut items = Vec::new();
    let mut step: u32 = 0;

    loop {
        let period_start = dates::period_start_at(tenancy_start_date, rent_frequency, step);
        if period_start >= cutoff_date {
            break;
        }

        let next_start = dates::period_start_at(tenancy_start_date, rent_frequency, step + 1);
        items.push(ArrearsItem {
            period_start,
            period_end: next_start - Duration::days(1),
            rent_due: rent_amount,
            rent_paid: Decimal::ZERO,
        });
        step += 1;
    }

    Ok(items)
}

/// Wraps generation with prerequisite checks: missing tenancy facts yield an
/// empty schedule rather than an error, so the caller can render a guided
/// prompt instead of failing. The cutoff is the notice date when supplied,
/// otherwise `today` (the caller's current date; the engine never reads the
/// clock itself).
pub fn create_empty_arrears_schedule(
    input: &ArrearsScheduleInput,
    today: NaiveDate,
) -> Result<Vec<ArrearsItem>, ScheduleError> {
    let (Some(start), Some(amount), Some(frequency)) = (
        input.tenancy_start_date,
        input.rent_amount,
        input.rent_frequency,
    ) else {
        return Ok(Vec::new());
    };

    let cutoff = input.notice_date.unwrap_or(today);
    generate_rent_periods(start, amount, frequency, cutoff)
}
