use super::{GroundAssessment, Jurisdiction, PossessionGround, ThresholdRequirement};
use crate::schedule::{ComputedArrears, RentFrequency};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Section 157's "serious arrears" test is pinned to a fixed 56-day target,
/// not to two calendar months; for a monthly tenancy the two differ.
const SERIOUS_ARREARS_TARGET_DAYS: u32 = 56;
const DAYS_PER_WEEK: u32 = 7;
const WEEKS_PER_YEAR: Decimal = dec!(52);

const fn serious_arrears_weeks() -> u32 {
    SERIOUS_ARREARS_TARGET_DAYS / DAYS_PER_WEEK
}

/// One week's worth of rent, whatever the billing frequency: the annual
/// rent roll spread over 52 weeks.
pub fn weekly_equivalent_rent(rent_amount: Decimal, rent_frequency: RentFrequency) -> Decimal {
    rent_amount * Decimal::from(rent_frequency.periods_per_year()) / WEEKS_PER_YEAR
}

/// Expresses a total arrears figure as a number of weeks of rent, the unit
/// the Welsh statute reasons in. Returns zero when the rent amount is zero.
pub fn calculate_wales_arrears_in_weeks(
    total_arrears: Decimal,
    rent_amount: Decimal,
    rent_frequency: RentFrequency,
) -> Decimal {
    let weekly_rent = weekly_equivalent_rent(rent_amount, rent_frequency);
    if weekly_rent <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_arrears / weekly_rent
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalesSection157Assessment {
    pub met: bool,
    pub threshold_label: String,
    pub threshold_amount: Decimal,
}

/// Section 157 (serious rent arrears): met when the outstanding amount
/// reaches the 8-week equivalent of the rent. This is an absolute-amount
/// rule and deliberately does not reuse England's months-based figure.
pub fn is_wales_section157_threshold_met(
    total_arrears: Decimal,
    rent_frequency: RentFrequency,
    rent_amount: Decimal,
) -> WalesSection157Assessment {
    let weeks = serious_arrears_weeks();
    let threshold_amount =
        weekly_equivalent_rent(rent_amount, rent_frequency) * Decimal::from(weeks);

    WalesSection157Assessment {
        met: total_arrears >= threshold_amount,
        threshold_label: format!("at least {weeks} weeks' rent"),
        threshold_amount,
    }
}

pub(super) fn assess_section157(
    snapshot: &ComputedArrears,
    rent_amount: Decimal,
    rent_frequency: RentFrequency,
) -> GroundAssessment {
    let assessment =
        is_wales_section157_threshold_met(snapshot.total_arrears, rent_frequency, rent_amount);

    GroundAssessment {
        jurisdiction: Jurisdiction::Wales,
        ground: PossessionGround::WalesSection157,
        reference: PossessionGround::WalesSection157.reference(),
        is_eligible: assessment.met,
        measured_value: snapshot.total_arrears,
        threshold: ThresholdRequirement::WeeksOfRent {
            weeks: serious_arrears_weeks(),
            amount: assessment.threshold_amount,
        },
    }
}

/// Section 159 (other rent arrears, discretionary): any outstanding rent.
pub(super) fn assess_section159(snapshot: &ComputedArrears) -> GroundAssessment {
    GroundAssessment {
        jurisdiction: Jurisdiction::Wales,
        ground: PossessionGround::WalesSection159,
        reference: PossessionGround::WalesSection159.reference(),
        is_eligible: snapshot.total_arrears > Decimal::ZERO,
        measured_value: snapshot.total_arrears,
        threshold: ThresholdRequirement::AnyArrears,
    }
}
