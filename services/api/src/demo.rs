use crate::infra::{parse_amount, parse_date};
use arrears_engine::error::AppError;
use arrears_engine::grounds::{
    assess_ground8_at_service_and_hearing, assess_grounds, GroundAssessment, Jurisdiction,
};
use arrears_engine::schedule::{
    compute_arrears, generate_rent_periods, validate_schedule, ArrearsItem,
    PaymentLedgerImporter, RentFrequency,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ArrearsReportArgs {
    /// Tenancy start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) tenancy_start: NaiveDate,
    /// Rent amount per billing period
    #[arg(long, value_parser = parse_amount)]
    pub(crate) rent: Decimal,
    /// Billing frequency: weekly, fortnightly, monthly or quarterly
    #[arg(long, value_parser = RentFrequency::parse)]
    pub(crate) frequency: RentFrequency,
    /// Notice date; also the schedule cutoff when supplied (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) notice_date: Option<NaiveDate>,
    /// Override the schedule cutoff used when no notice date is given
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Exported payment history CSV to use instead of a generated ledger
    #[arg(long)]
    pub(crate) ledger_csv: Option<PathBuf>,
    /// Restrict the report to one jurisdiction: england, wales or scotland
    #[arg(long, value_parser = parse_jurisdiction)]
    pub(crate) jurisdiction: Option<Jurisdiction>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Tenancy start date for the demo scenario (YYYY-MM-DD). Defaults to 2025-03-01.
    #[arg(long, value_parser = parse_date)]
    pub(crate) tenancy_start: Option<NaiveDate>,
    /// Monthly rent for the demo scenario. Defaults to 1200.
    #[arg(long, value_parser = parse_amount)]
    pub(crate) rent: Option<Decimal>,
}

fn parse_jurisdiction(raw: &str) -> Result<Jurisdiction, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "england" => Ok(Jurisdiction::England),
        "wales" => Ok(Jurisdiction::Wales),
        "scotland" => Ok(Jurisdiction::Scotland),
        other => Err(format!(
            "unknown jurisdiction '{other}' (expected england, wales or scotland)"
        )),
    }
}

pub(crate) fn run_arrears_report(args: ArrearsReportArgs) -> Result<(), AppError> {
    let ArrearsReportArgs {
        tenancy_start,
        rent,
        frequency,
        notice_date,
        today,
        ledger_csv,
        jurisdiction,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let cutoff = notice_date.unwrap_or(today);

    let items = match ledger_csv {
        Some(path) => PaymentLedgerImporter::from_path(path)?,
        None => generate_rent_periods(tenancy_start, rent, frequency, cutoff)?,
    };

    println!(
        "Arrears report: tenancy from {tenancy_start}, {} rent of {rent}",
        frequency.label().to_ascii_lowercase()
    );
    render_schedule(&items);

    let violations = validate_schedule(&items);
    if !violations.is_empty() {
        println!("\nIntegrity violations (fix these before relying on the figures):");
        for violation in &violations {
            println!(
                "- entry {}: {} ({})",
                violation.item_index,
                violation.kind.label(),
                violation.message
            );
        }
        return Ok(());
    }

    let computed = compute_arrears(&items, frequency, rent, notice_date);
    render_summary(&computed);

    let jurisdictions = match jurisdiction {
        Some(only) => vec![only],
        None => Jurisdiction::ordered().to_vec(),
    };
    for jurisdiction in jurisdictions {
        println!("\n{}:", jurisdiction.label());
        for assessment in assess_grounds(jurisdiction, &computed, rent, frequency) {
            render_assessment(&assessment);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let tenancy_start = args
        .tenancy_start
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default());
    let rent = args.rent.unwrap_or_else(|| Decimal::from(1200));
    let notice_date = tenancy_start
        .checked_add_months(chrono::Months::new(3))
        .unwrap_or(tenancy_start);

    println!("Arrears eligibility demo");
    println!(
        "Tenancy from {tenancy_start}, monthly rent {rent}, notice served {notice_date}\n"
    );

    let mut items =
        generate_rent_periods(tenancy_start, rent, RentFrequency::Monthly, notice_date)?;

    // First month paid in full, second half-paid, the rest missed.
    if let Some(first) = items.first_mut() {
        first.rent_paid = rent;
    }
    if let Some(second) = items.get_mut(1) {
        second.rent_paid = rent / Decimal::from(2);
    }

    render_schedule(&items);

    let at_service = compute_arrears(&items, RentFrequency::Monthly, rent, Some(notice_date));
    render_summary(&at_service);

    for jurisdiction in Jurisdiction::ordered() {
        println!("\n{}:", jurisdiction.label());
        for assessment in assess_grounds(jurisdiction, &at_service, rent, RentFrequency::Monthly)
        {
            render_assessment(&assessment);
        }
    }

    // Ground 8 needs the threshold at service and again at the hearing;
    // show what a pay-down between the two does to the mandatory ground.
    if let Some(second) = items.get_mut(1) {
        second.rent_paid = rent;
    }
    let at_hearing = compute_arrears(&items, RentFrequency::Monthly, rent, Some(notice_date));
    let dual = assess_ground8_at_service_and_hearing(&at_service, &at_hearing);
    println!("\nGround 8 across both statutory checkpoints:");
    println!(
        "- at service: {:.2} months ({})",
        dual.at_service.measured_value,
        verdict(dual.at_service.is_eligible)
    );
    println!(
        "- at hearing after pay-down: {:.2} months ({})",
        dual.at_hearing.measured_value,
        verdict(dual.at_hearing.is_eligible)
    );
    println!("- overall: {}", verdict(dual.is_eligible));

    Ok(())
}

fn render_schedule(items: &[ArrearsItem]) {
    println!("Schedule ({} periods):", items.len());
    for item in items {
        println!(
            "- {} to {} | due {} | paid {} | owed {}",
            item.period_start,
            item.period_end,
            item.rent_due,
            item.rent_paid,
            item.amount_owed()
        );
    }
}

fn render_summary(computed: &arrears_engine::schedule::ComputedArrears) {
    println!("\nTotal arrears: {}", computed.total_arrears);
    if let Some(at_notice) = computed.arrears_at_notice_date {
        println!("Arrears at notice date: {at_notice}");
    }
    println!("Months-equivalent: {:.4}", computed.arrears_in_months);
    println!(
        "Periods in arrears: {} ({} unpaid, {} partial, {} paid)",
        computed.periods_with_arrears,
        computed.periods_fully_unpaid,
        computed.periods_partially_paid,
        computed.periods_fully_paid
    );
}

fn render_assessment(assessment: &GroundAssessment) {
    println!(
        "- {} ({}): {} | measured {} against {}",
        assessment.ground.label(),
        assessment.reference,
        verdict(assessment.is_eligible),
        assessment.measured_value,
        assessment.threshold.label()
    );
}

fn verdict(eligible: bool) -> &'static str {
    if eligible {
        "threshold met"
    } else {
        "threshold not met"
    }
}
