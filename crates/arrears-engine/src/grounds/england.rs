use super::{GroundAssessment, Jurisdiction, PossessionGround, ThresholdRequirement};
use crate::schedule::{compute_arrears, ArrearsItem, ComputedArrears, RentFrequency};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Ground 8's mandatory minimum: two months' rent-equivalent unpaid.
const GROUND8_MONTHS_THRESHOLD: Decimal = dec!(2);

/// Ground 11 is about persistent delay rather than a standing balance;
/// arrears recurring across two or more distinct periods is the signal.
const GROUND11_MINIMUM_PERIODS: usize = 2;

pub(super) fn assess_ground8(snapshot: &ComputedArrears) -> GroundAssessment {
    GroundAssessment {
        jurisdiction: Jurisdiction::England,
        ground: PossessionGround::EnglandGround8,
        reference: PossessionGround::EnglandGround8.reference(),
        is_eligible: snapshot.arrears_in_months >= GROUND8_MONTHS_THRESHOLD,
        measured_value: snapshot.arrears_in_months,
        threshold: ThresholdRequirement::MonthsEquivalent {
            months: GROUND8_MONTHS_THRESHOLD,
        },
    }
}

pub(super) fn assess_ground10(snapshot: &ComputedArrears) -> GroundAssessment {
    GroundAssessment {
        jurisdiction: Jurisdiction::England,
        ground: PossessionGround::EnglandGround10,
        reference: PossessionGround::EnglandGround10.reference(),
        is_eligible: snapshot.total_arrears > Decimal::ZERO,
        measured_value: snapshot.total_arrears,
        threshold: ThresholdRequirement::AnyArrears,
    }
}

pub(super) fn assess_ground11(snapshot: &ComputedArrears) -> GroundAssessment {
    GroundAssessment {
        jurisdiction: Jurisdiction::England,
        ground: PossessionGround::EnglandGround11,
        reference: PossessionGround::EnglandGround11.reference(),
        is_eligible: snapshot.periods_with_arrears >= GROUND11_MINIMUM_PERIODS,
        measured_value: Decimal::from(snapshot.periods_with_arrears as u64),
        threshold: ThresholdRequirement::PeriodsInArrears {
            minimum: GROUND11_MINIMUM_PERIODS as u32,
        },
    }
}

/// Ground 8 check over a raw ledger, shaped for callers that hold tenancy
/// facts rather than a precomputed snapshot.
#[derive(Debug, Clone)]
pub struct Ground8EligibilityRequest<'a> {
    pub arrears_items: &'a [ArrearsItem],
    pub rent_amount: Decimal,
    pub rent_frequency: RentFrequency,
    pub jurisdiction: Jurisdiction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ground8Eligibility {
    pub is_eligible: bool,
    pub arrears_in_months: Decimal,
}

/// Ground 8 belongs to the Housing Act regime: tenancies in Wales and
/// Scotland go through their own grounds, so any non-England jurisdiction is
/// reported ineligible here regardless of the arrears level.
pub fn validate_ground8_eligibility(request: &Ground8EligibilityRequest<'_>) -> Ground8Eligibility {
    let snapshot = compute_arrears(
        request.arrears_items,
        request.rent_frequency,
        request.rent_amount,
        None,
    );
    let assessment = assess_ground8(&snapshot);

    Ground8Eligibility {
        is_eligible: assessment.is_eligible && request.jurisdiction == Jurisdiction::England,
        arrears_in_months: snapshot.arrears_in_months,
    }
}

/// Ground 8 decided against two snapshots, as the statute requires: the
/// threshold must hold both when the notice is served and at the hearing.
/// The caller's "now" snapshot stands proxy for the hearing date.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground8DualCheck {
    pub at_service: GroundAssessment,
    pub at_hearing: GroundAssessment,
    pub is_eligible: bool,
}

pub fn assess_ground8_at_service_and_hearing(
    at_service: &ComputedArrears,
    at_hearing: &ComputedArrears,
) -> Ground8DualCheck {
    let at_service = assess_ground8(at_service);
    let at_hearing = assess_ground8(at_hearing);
    let is_eligible = at_service.is_eligible && at_hearing.is_eligible;

    Ground8DualCheck {
        at_service,
        at_hearing,
        is_eligible,
    }
}
