use super::domain::{ArrearsItem, ComputedArrears, RentFrequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Reduces a ledger into the summary the threshold evaluators work from.
///
/// Each period contributes `max(0, rent_due - rent_paid)`; an overpaid
/// period never offsets arrears in another period inside this function.
/// `arrears_at_notice_date` restricts the same sum to periods ending on or
/// before the notice date and is `None` when no notice date is supplied.
/// An empty ledger produces a zeroed, non-authoritative result.
pub fn compute_arrears(
    items: &[ArrearsItem],
    rent_frequency: RentFrequency,
    rent_amount: Decimal,
    notice_date: Option<NaiveDate>,
) -> ComputedArrears {
    let mut total_arrears = Decimal::ZERO;
    let mut arrears_at_notice = notice_date.map(|_| Decimal::ZERO);
    let mut periods_with_arrears = 0;
    let mut periods_fully_unpaid = 0;
    let mut periods_partially_paid = 0;
    let mut periods_fully_paid = 0;

    for item in items {
        let owed = item.amount_owed();
        total_arrears += owed;

        if owed > Decimal::ZERO {
            periods_with_arrears += 1;
        }

        if let (Some(running), Some(notice)) = (arrears_at_notice.as_mut(), notice_date) {
            if item.period_end <= notice {
                *running += owed;
            }
        }

        if item.rent_paid >= item.rent_due {
            periods_fully_paid += 1;
        } else if item.rent_paid.is_zero() {
            periods_fully_unpaid += 1;
        } else {
            periods_partially_paid += 1;
        }
    }

    let monthly_rent = rent_amount * rent_frequency.monthly_equivalent_factor();
    let arrears_in_months = if monthly_rent > Decimal::ZERO {
        total_arrears / monthly_rent
    } else {
        Decimal::ZERO
    };

    ComputedArrears {
        total_arrears,
        arrears_at_notice_date: arrears_at_notice,
        arrears_in_months,
        periods_with_arrears,
        periods_fully_unpaid,
        periods_partially_paid,
        periods_fully_paid,
        is_authoritative: !items.is_empty(),
    }
}
