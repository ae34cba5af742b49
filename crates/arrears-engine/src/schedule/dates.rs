use super::domain::RentFrequency;
use chrono::{Duration, Months, NaiveDate};

/// Adds whole calendar months, clamping the day-of-month when the target
/// month is shorter (31 Jan -> 28/29 Feb). Both monthly and quarterly
/// stepping go through here so the clamping rule lives in exactly one place.
pub(crate) fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Start date of the period `steps` increments after the tenancy anchor.
///
/// Month-based frequencies always step from the anchor rather than from the
/// previous period, so a 31st-of-month anchor clamps through February and
/// recovers the 31st in March instead of drifting to the 28th forever.
pub(crate) fn period_start_at(
    anchor: NaiveDate,
    frequency: RentFrequency,
    steps: u32,
) -> NaiveDate {
    match frequency {
        RentFrequency::Weekly => anchor + Duration::days(7 * i64::from(steps)),
        RentFrequency::Fortnightly => anchor + Duration::days(14 * i64::from(steps)),
        RentFrequency::Monthly => add_months_clamped(anchor, steps),
        RentFrequency::Quarterly => add_months_clamped(anchor, 3 * steps),
    }
}
