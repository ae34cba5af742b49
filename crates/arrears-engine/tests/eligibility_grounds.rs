use arrears_engine::grounds::{
    assess_grounds, calculate_wales_arrears_in_weeks, is_scotland_ground18_threshold_met,
    is_wales_section157_threshold_met, validate_ground8_eligibility, Ground8EligibilityRequest,
    Jurisdiction, PossessionGround,
};
use arrears_engine::schedule::{compute_arrears, ArrearsItem, RentFrequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn monthly_item(month: u32, due: Decimal, paid: Decimal) -> ArrearsItem {
    let start = date(2025, month, 1);
    let end = match month {
        2 => date(2025, 2, 28),
        4 | 6 | 9 | 11 => date(2025, month, 30),
        _ => date(2025, month, 31),
    };
    ArrearsItem {
        period_start: start,
        period_end: end,
        rent_due: due,
        rent_paid: paid,
    }
}

#[test]
fn ground8_boundary_two_months_unpaid_is_eligible() {
    let items = vec![
        monthly_item(3, dec!(1200), dec!(0)),
        monthly_item(4, dec!(1200), dec!(0)),
    ];

    let result = validate_ground8_eligibility(&Ground8EligibilityRequest {
        arrears_items: &items,
        rent_amount: dec!(1200),
        rent_frequency: RentFrequency::Monthly,
        jurisdiction: Jurisdiction::England,
    });

    assert!(result.is_eligible);
    assert_eq!(result.arrears_in_months, dec!(2));
}

#[test]
fn ground8_boundary_just_under_two_months_is_not() {
    let items = vec![
        monthly_item(3, dec!(1200), dec!(0)),
        monthly_item(4, dec!(1200), dec!(0.01)),
    ];

    let result = validate_ground8_eligibility(&Ground8EligibilityRequest {
        arrears_items: &items,
        rent_amount: dec!(1200),
        rent_frequency: RentFrequency::Monthly,
        jurisdiction: Jurisdiction::England,
    });

    assert!(!result.is_eligible);
    assert!(result.arrears_in_months < dec!(2));
}

#[test]
fn section157_boundary_exact_eight_week_amount() {
    // Weekly tenancy at 150: the 8-week bar is exactly 1200.
    let exactly = is_wales_section157_threshold_met(dec!(1200), RentFrequency::Weekly, dec!(150));
    assert!(exactly.met);
    assert_eq!(exactly.threshold_amount, dec!(1200));

    let penny_short =
        is_wales_section157_threshold_met(dec!(1199.99), RentFrequency::Weekly, dec!(150));
    assert!(!penny_short.met);
}

#[test]
fn section157_is_independent_of_englands_months_figure() {
    // Monthly rent 1300: a two-month balance (2600) clears the 56-day bar
    // (2400), but so does 2400 itself, which is under two months.
    let between = is_wales_section157_threshold_met(dec!(2500), RentFrequency::Monthly, dec!(1300));
    assert!(between.met);
    assert!(dec!(2500) < dec!(2600));

    let weeks = calculate_wales_arrears_in_weeks(dec!(2400), dec!(1300), RentFrequency::Monthly);
    assert_eq!(weeks, dec!(8));
}

#[test]
fn ground18_counts_periods_not_amounts() {
    let spread = vec![
        monthly_item(1, dec!(500), dec!(499)),
        monthly_item(2, dec!(500), dec!(499)),
        monthly_item(3, dec!(500), dec!(499)),
    ];
    let spread_snapshot = compute_arrears(&spread, RentFrequency::Monthly, dec!(500), None);
    assert!(is_scotland_ground18_threshold_met(&spread_snapshot).met);
    assert_eq!(spread_snapshot.total_arrears, dec!(3));

    let concentrated = vec![
        monthly_item(1, dec!(10000), dec!(0)),
        monthly_item(2, dec!(10000), dec!(10000)),
    ];
    let concentrated_snapshot =
        compute_arrears(&concentrated, RentFrequency::Monthly, dec!(10000), None);
    assert!(!is_scotland_ground18_threshold_met(&concentrated_snapshot).met);
}

#[test]
fn jurisdiction_assessments_use_their_own_units() {
    // Fortnightly tenancy at 550, five periods fully unpaid.
    let items: Vec<ArrearsItem> = (0..5)
        .map(|index| {
            let start = date(2025, 1, 6) + chrono::Duration::days(14 * index);
            ArrearsItem {
                period_start: start,
                period_end: start + chrono::Duration::days(13),
                rent_due: dec!(550),
                rent_paid: Decimal::ZERO,
            }
        })
        .collect();
    let snapshot = compute_arrears(&items, RentFrequency::Fortnightly, dec!(550), None);

    let england = assess_grounds(
        Jurisdiction::England,
        &snapshot,
        dec!(550),
        RentFrequency::Fortnightly,
    );
    let ground8 = england
        .iter()
        .find(|assessment| assessment.ground == PossessionGround::EnglandGround8)
        .expect("ground 8 assessed");
    // 2750 owed against a monthly-equivalent rent of 550 * 26/12.
    assert_eq!(
        ground8.measured_value,
        dec!(2750) / (dec!(550) * dec!(26) / dec!(12))
    );
    assert!(ground8.is_eligible);

    let wales = assess_grounds(
        Jurisdiction::Wales,
        &snapshot,
        dec!(550),
        RentFrequency::Fortnightly,
    );
    let section157 = wales
        .iter()
        .find(|assessment| assessment.ground == PossessionGround::WalesSection157)
        .expect("section 157 assessed");
    // 8 weeks of a 550/fortnight tenancy is 2200; 2750 owed clears it.
    assert!(section157.is_eligible);
    assert_eq!(section157.measured_value, dec!(2750));

    let scotland = assess_grounds(
        Jurisdiction::Scotland,
        &snapshot,
        dec!(550),
        RentFrequency::Fortnightly,
    );
    assert!(scotland[0].is_eligible);
    assert_eq!(scotland[0].measured_value, dec!(5));
}

#[test]
fn discretionary_grounds_track_their_own_signals() {
    let items = vec![
        monthly_item(3, dec!(1200), dec!(1150)),
        monthly_item(4, dec!(1200), dec!(1200)),
    ];
    let snapshot = compute_arrears(&items, RentFrequency::Monthly, dec!(1200), None);

    let england = assess_grounds(
        Jurisdiction::England,
        &snapshot,
        dec!(1200),
        RentFrequency::Monthly,
    );

    let ground8 = &england[0];
    let ground10 = &england[1];
    let ground11 = &england[2];

    assert_eq!(ground8.ground, PossessionGround::EnglandGround8);
    assert!(!ground8.is_eligible);

    // 50 outstanding: Ground 10 met, Ground 11 needs recurrence.
    assert_eq!(ground10.ground, PossessionGround::EnglandGround10);
    assert!(ground10.is_eligible);

    assert_eq!(ground11.ground, PossessionGround::EnglandGround11);
    assert!(!ground11.is_eligible);
}

#[test]
fn mandatory_flags_follow_the_statutes() {
    assert!(PossessionGround::EnglandGround8.is_mandatory());
    assert!(!PossessionGround::EnglandGround10.is_mandatory());
    assert!(!PossessionGround::EnglandGround11.is_mandatory());
    assert!(PossessionGround::WalesSection157.is_mandatory());
    assert!(!PossessionGround::WalesSection159.is_mandatory());
    assert!(PossessionGround::ScotlandGround18.is_mandatory());
}
