//! Arrears schedule and statutory-ground eligibility engine.
//!
//! The crate turns sparse tenancy facts (start date, rent amount, billing
//! frequency) into a canonical ledger of billing periods, aggregates that
//! ledger into legally meaningful totals, and evaluates the possession
//! grounds of three jurisdictions (England, Wales, Scotland) against the
//! same ledger. The schedule and grounds computations are pure functions
//! over explicit inputs; I/O is confined to configuration loading and the
//! payment-ledger importer.

pub mod config;
pub mod error;
pub mod grounds;
pub mod schedule;
pub mod telemetry;
