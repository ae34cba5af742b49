//! Statutory possession-ground threshold evaluators.
//!
//! The three legal regimes measure arrears in incompatible units: England's
//! Ground 8 in months-equivalent, Wales's Section 157 in an absolute amount
//! derived from a fixed 8-week target, Scotland's Ground 18 in a bare count
//! of periods. Each ground is therefore its own evaluation over the shared
//! `ComputedArrears` snapshot, dispatched through one tagged variant.

mod england;
mod scotland;
mod wales;

pub use england::{
    assess_ground8_at_service_and_hearing, validate_ground8_eligibility, Ground8DualCheck,
    Ground8Eligibility, Ground8EligibilityRequest,
};
pub use scotland::{is_scotland_ground18_threshold_met, ScotlandGround18Assessment};
pub use wales::{
    calculate_wales_arrears_in_weeks, is_wales_section157_threshold_met, weekly_equivalent_rent,
    WalesSection157Assessment,
};

use crate::schedule::{ComputedArrears, RentFrequency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    England,
    Wales,
    Scotland,
}

impl Jurisdiction {
    pub const fn ordered() -> [Self; 3] {
        [Self::England, Self::Wales, Self::Scotland]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::England => "England",
            Self::Wales => "Wales",
            Self::Scotland => "Scotland",
        }
    }
}

/// Rent-arrears possession grounds the engine can decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionGround {
    EnglandGround8,
    EnglandGround10,
    EnglandGround11,
    WalesSection157,
    WalesSection159,
    ScotlandGround18,
}

impl PossessionGround {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::EnglandGround8,
            Self::EnglandGround10,
            Self::EnglandGround11,
            Self::WalesSection157,
            Self::WalesSection159,
            Self::ScotlandGround18,
        ]
    }

    pub const fn jurisdiction(self) -> Jurisdiction {
        match self {
            Self::EnglandGround8 | Self::EnglandGround10 | Self::EnglandGround11 => {
                Jurisdiction::England
            }
            Self::WalesSection157 | Self::WalesSection159 => Jurisdiction::Wales,
            Self::ScotlandGround18 => Jurisdiction::Scotland,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EnglandGround8 => "Ground 8",
            Self::EnglandGround10 => "Ground 10",
            Self::EnglandGround11 => "Ground 11",
            Self::WalesSection157 => "Section 157",
            Self::WalesSection159 => "Section 159",
            Self::ScotlandGround18 => "Ground 18",
        }
    }

    pub const fn reference(self) -> &'static str {
        match self {
            Self::EnglandGround8 => "Housing Act 1988, Schedule 2, Ground 8",
            Self::EnglandGround10 => "Housing Act 1988, Schedule 2, Ground 10",
            Self::EnglandGround11 => "Housing Act 1988, Schedule 2, Ground 11",
            Self::WalesSection157 => "Renting Homes (Wales) Act 2016, Section 157",
            Self::WalesSection159 => "Renting Homes (Wales) Act 2016, Section 159",
            Self::ScotlandGround18 => "Ground 18 (Scotland, rent arrears)",
        }
    }

    /// Whether a ground requires the court to grant possession once met, as
    /// opposed to leaving it to the court's discretion.
    pub const fn is_mandatory(self) -> bool {
        matches!(
            self,
            Self::EnglandGround8 | Self::WalesSection157 | Self::ScotlandGround18
        )
    }

    /// Decides this ground against an arrears snapshot. Pure; neither the
    /// snapshot nor the tenancy facts are mutated.
    pub fn evaluate(
        self,
        snapshot: &ComputedArrears,
        rent_amount: Decimal,
        rent_frequency: RentFrequency,
    ) -> GroundAssessment {
        match self {
            Self::EnglandGround8 => england::assess_ground8(snapshot),
            Self::EnglandGround10 => england::assess_ground10(snapshot),
            Self::EnglandGround11 => england::assess_ground11(snapshot),
            Self::WalesSection157 => {
                wales::assess_section157(snapshot, rent_amount, rent_frequency)
            }
            Self::WalesSection159 => wales::assess_section159(snapshot),
            Self::ScotlandGround18 => scotland::assess_ground18(snapshot),
        }
    }
}

/// Statutory minimum a ground measures against, in the ground's own units.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdRequirement {
    MonthsEquivalent { months: Decimal },
    WeeksOfRent { weeks: u32, amount: Decimal },
    PeriodsInArrears { minimum: u32 },
    AnyArrears,
}

impl ThresholdRequirement {
    pub fn label(&self) -> String {
        match self {
            Self::MonthsEquivalent { months } => {
                format!("at least {months} months' rent unpaid")
            }
            Self::WeeksOfRent { weeks, amount } => {
                format!("at least {weeks} weeks' rent unpaid ({amount})")
            }
            Self::PeriodsInArrears { minimum } => {
                format!("rent unpaid across at least {minimum} billing periods")
            }
            Self::AnyArrears => "some rent lawfully due is unpaid".to_string(),
        }
    }
}

/// Outcome of deciding one ground against one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundAssessment {
    pub jurisdiction: Jurisdiction,
    pub ground: PossessionGround,
    pub reference: &'static str,
    pub is_eligible: bool,
    pub measured_value: Decimal,
    pub threshold: ThresholdRequirement,
}

/// Assesses every ground belonging to one jurisdiction, in statutory order.
pub fn assess_grounds(
    jurisdiction: Jurisdiction,
    snapshot: &ComputedArrears,
    rent_amount: Decimal,
    rent_frequency: RentFrequency,
) -> Vec<GroundAssessment> {
    PossessionGround::ordered()
        .into_iter()
        .filter(|ground| ground.jurisdiction() == jurisdiction)
        .map(|ground| ground.evaluate(snapshot, rent_amount, rent_frequency))
        .collect()
}
