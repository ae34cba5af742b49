use super::domain::ArrearsItem;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum LedgerImportError {
    #[error("failed to read payment ledger: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid payment ledger CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: could not parse '{value}' as a date (expected YYYY-MM-DD or DD/MM/YYYY)")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: could not parse '{value}' as an amount")]
    InvalidAmount { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(rename = "Period Start")]
    period_start: String,
    #[serde(rename = "Period End")]
    period_end: String,
    #[serde(rename = "Rent Due")]
    rent_due: String,
    #[serde(rename = "Rent Paid", default)]
    rent_paid: Option<String>,
}

fn parse_ledger_date(value: &str, row: usize) -> Result<NaiveDate, LedgerImportError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| LedgerImportError::InvalidDate {
            row,
            value: value.to_string(),
        })
}

fn parse_ledger_amount(value: &str, row: usize) -> Result<Decimal, LedgerImportError> {
    // Bank and agent exports format amounts for humans: "£1,200.00".
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| *ch != '£' && *ch != ',')
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).map_err(|_| LedgerImportError::InvalidAmount {
        row,
        value: value.to_string(),
    })
}

/// Reads an exported payment history into an arrears ledger.
///
/// Landlords usually arrive with a CSV from their bank or letting agent
/// rather than a hand-typed schedule, so this accepts
/// `Period Start, Period End, Rent Due, Rent Paid` rows (ISO or UK dates,
/// human-formatted amounts, blank paid column meaning nothing received) and
/// returns the items sorted by period start. Integrity checking is left to
/// the same validator that covers hand-edited ledgers.
pub struct PaymentLedgerImporter;

impl PaymentLedgerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ArrearsItem>, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ArrearsItem>, LedgerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut items = Vec::new();
        for (offset, record) in csv_reader.deserialize::<LedgerRow>().enumerate() {
            let row = record?;
            // Header is line 1, first data row line 2.
            let line = offset + 2;

            items.push(ArrearsItem {
                period_start: parse_ledger_date(&row.period_start, line)?,
                period_end: parse_ledger_date(&row.period_end, line)?,
                rent_due: parse_ledger_amount(&row.rent_due, line)?,
                rent_paid: row
                    .rent_paid
                    .as_deref()
                    .map(|value| parse_ledger_amount(value, line))
                    .transpose()?
                    .unwrap_or(Decimal::ZERO),
            });
        }

        items.sort_by_key(|item| (item.period_start, item.period_end));
        Ok(items)
    }
}
