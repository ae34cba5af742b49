pub mod domain;

mod aggregate;
mod dates;
mod generator;
mod import;
mod validator;

pub use aggregate::compute_arrears;
pub use domain::{
    ArrearsItem, ArrearsScheduleInput, ComputedArrears, RentFrequency, ScheduleError,
};
pub use generator::{create_empty_arrears_schedule, generate_rent_periods};
pub use import::{LedgerImportError, PaymentLedgerImporter};
pub use validator::{validate_schedule, ScheduleViolation, ViolationKind};
