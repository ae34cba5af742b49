use super::{GroundAssessment, Jurisdiction, PossessionGround, ThresholdRequirement};
use crate::schedule::ComputedArrears;
use rust_decimal::Decimal;

/// Ground 18 counts billing periods in arrears; the amounts involved are
/// irrelevant. Three periods owing a pound each meet it, one period owing
/// thousands does not.
const GROUND18_MINIMUM_PERIODS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScotlandGround18Assessment {
    pub met: bool,
    pub periods_with_arrears: usize,
    pub required_periods: usize,
}

/// First-class Ground 18 evaluator, symmetric with the England and Wales
/// checks so callers never re-derive the count rule inline.
pub fn is_scotland_ground18_threshold_met(
    snapshot: &ComputedArrears,
) -> ScotlandGround18Assessment {
    ScotlandGround18Assessment {
        met: snapshot.periods_with_arrears >= GROUND18_MINIMUM_PERIODS,
        periods_with_arrears: snapshot.periods_with_arrears,
        required_periods: GROUND18_MINIMUM_PERIODS,
    }
}

pub(super) fn assess_ground18(snapshot: &ComputedArrears) -> GroundAssessment {
    let assessment = is_scotland_ground18_threshold_met(snapshot);

    GroundAssessment {
        jurisdiction: Jurisdiction::Scotland,
        ground: PossessionGround::ScotlandGround18,
        reference: PossessionGround::ScotlandGround18.reference(),
        is_eligible: assessment.met,
        measured_value: Decimal::from(assessment.periods_with_arrears as u64),
        threshold: ThresholdRequirement::PeriodsInArrears {
            minimum: GROUND18_MINIMUM_PERIODS as u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(total: Decimal, periods: usize) -> ComputedArrears {
        ComputedArrears {
            total_arrears: total,
            arrears_at_notice_date: None,
            arrears_in_months: Decimal::ZERO,
            periods_with_arrears: periods,
            periods_fully_unpaid: 0,
            periods_partially_paid: periods,
            periods_fully_paid: 0,
            is_authoritative: true,
        }
    }

    #[test]
    fn three_periods_owing_a_pound_each_meet_the_ground() {
        let assessment = is_scotland_ground18_threshold_met(&snapshot(dec!(3), 3));
        assert!(assessment.met);
        assert_eq!(assessment.periods_with_arrears, 3);
        assert_eq!(assessment.required_periods, 3);
    }

    #[test]
    fn two_periods_owing_thousands_do_not() {
        let assessment = is_scotland_ground18_threshold_met(&snapshot(dec!(20000), 2));
        assert!(!assessment.met);
    }

    #[test]
    fn assessment_carries_the_count_as_the_measured_value() {
        let assessment = assess_ground18(&snapshot(dec!(450), 4));
        assert!(assessment.is_eligible);
        assert_eq!(assessment.measured_value, dec!(4));
        assert_eq!(
            assessment.threshold,
            ThresholdRequirement::PeriodsInArrears { minimum: 3 }
        );
    }
}
