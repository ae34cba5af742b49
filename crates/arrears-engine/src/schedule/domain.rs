use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How often rent falls due. Drives both the length of a billing period and
/// the monthly-equivalent conversion used by months-based thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentFrequency {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
}

impl RentFrequency {
    pub const fn ordered() -> [Self; 4] {
        [Self::Weekly, Self::Fortnightly, Self::Monthly, Self::Quarterly]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
        }
    }

    pub const fn periods_per_year(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Fortnightly => 26,
            Self::Monthly => 12,
            Self::Quarterly => 4,
        }
    }

    /// Multiplier turning one period's rent into one month's rent:
    /// weekly 52/12, fortnightly 26/12, monthly 1, quarterly 1/3.
    pub fn monthly_equivalent_factor(self) -> Decimal {
        Decimal::from(self.periods_per_year()) / dec!(12)
    }

    /// Parses a raw frequency string from an outside boundary (CSV upload,
    /// request payload). The typed enum makes an unrecognized frequency
    /// unrepresentable inside the engine, so this is where it surfaces.
    pub fn parse(value: &str) -> Result<Self, ScheduleError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "fortnightly" => Ok(Self::Fortnightly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            other => Err(ScheduleError::UnknownFrequency(other.to_string())),
        }
    }
}

/// One billing period of the arrears schedule.
///
/// The amount owed for a period is always derived from `rent_due` and
/// `rent_paid`; it is deliberately not a stored field, so an edited payment
/// can never drift apart from a stale owed figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrearsItem {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub rent_due: Decimal,
    pub rent_paid: Decimal,
}

impl ArrearsItem {
    /// Unpaid rent for this period, floored at zero. An overpaid period
    /// never offsets arrears elsewhere; cross-period netting is a manual
    /// decision left to the user.
    pub fn amount_owed(&self) -> Decimal {
        (self.rent_due - self.rent_paid).max(Decimal::ZERO)
    }
}

/// Tenancy facts as captured so far. Every field is optional because the
/// caller collects them incrementally; an incomplete set yields an empty
/// schedule rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrearsScheduleInput {
    pub tenancy_start_date: Option<NaiveDate>,
    pub rent_amount: Option<Decimal>,
    pub rent_frequency: Option<RentFrequency>,
    pub notice_date: Option<NaiveDate>,
}

impl ArrearsScheduleInput {
    /// Whether the facts needed to generate a schedule are all present.
    pub fn is_complete(&self) -> bool {
        self.tenancy_start_date.is_some()
            && self.rent_amount.is_some()
            && self.rent_frequency.is_some()
    }
}

/// Aggregated view of an arrears schedule.
///
/// `is_authoritative` distinguishes "zero arrears" from "not yet computed":
/// it is `false` whenever the input ledger was empty or ungenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedArrears {
    pub total_arrears: Decimal,
    pub arrears_at_notice_date: Option<Decimal>,
    pub arrears_in_months: Decimal,
    pub periods_with_arrears: usize,
    pub periods_fully_unpaid: usize,
    pub periods_partially_paid: usize,
    pub periods_fully_paid: usize,
    pub is_authoritative: bool,
}

impl ComputedArrears {
    /// Non-authoritative zero result, used when prerequisites are missing.
    pub fn empty() -> Self {
        Self {
            total_arrears: Decimal::ZERO,
            arrears_at_notice_date: None,
            arrears_in_months: Decimal::ZERO,
            periods_with_arrears: 0,
            periods_fully_unpaid: 0,
            periods_partially_paid: 0,
            periods_fully_paid: 0,
            is_authoritative: false,
        }
    }
}

/// Rejected inputs that block schedule generation outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("rent amount must be greater than zero (found {amount})")]
    NonPositiveRentAmount { amount: Decimal },
    #[error("unrecognized rent frequency '{0}' (expected weekly, fortnightly, monthly or quarterly)")]
    UnknownFrequency(String),
}
