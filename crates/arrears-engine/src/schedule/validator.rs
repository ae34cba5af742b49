use super::domain::ArrearsItem;
use rust_decimal::Decimal;
use serde::Serialize;

/// What a schedule check found wrong with one ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    InvertedRange,
    NegativeRentDue,
    Overpayment,
    OverlappingPeriods,
}

impl ViolationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvertedRange => "Inverted Range",
            Self::NegativeRentDue => "Negative Rent Due",
            Self::Overpayment => "Overpayment",
            Self::OverlappingPeriods => "Overlapping Periods",
        }
    }
}

/// A single integrity violation, indexed into the ledger the caller passed
/// in. Violations report; they never correct. Callers must block their
/// "proceed" action while any remain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleViolation {
    pub item_index: usize,
    pub kind: ViolationKind,
    pub message: String,
}

/// Checks a live, possibly user-edited ledger for inverted ranges, negative
/// due amounts, over-payment and overlapping periods. Boundary-touching
/// periods (`end == next start`) are legitimate back-to-back billing, not an
/// overlap. Entries with inverted ranges are left out of the overlap pass so
/// one bad edit does not cascade into false positives.
pub fn validate_schedule(items: &[ArrearsItem]) -> Vec<ScheduleViolation> {
    let mut violations = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if item.period_start > item.period_end {
            violations.push(ScheduleViolation {
                item_index: index,
                kind: ViolationKind::InvertedRange,
                message: format!(
                    "period starts {} but ends {}",
                    item.period_start, item.period_end
                ),
            });
        }

        if item.rent_due < Decimal::ZERO {
            violations.push(ScheduleViolation {
                item_index: index,
                kind: ViolationKind::NegativeRentDue,
                message: format!("rent due is negative ({})", item.rent_due),
            });
        }

        if item.rent_paid > item.rent_due {
            violations.push(ScheduleViolation {
                item_index: index,
                kind: ViolationKind::Overpayment,
                message: format!(
                    "rent paid {} exceeds rent due {}",
                    item.rent_paid, item.rent_due
                ),
            });
        }
    }

    let mut ordered: Vec<(usize, &ArrearsItem)> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.period_start <= item.period_end)
        .collect();
    ordered.sort_by_key(|(_, item)| (item.period_start, item.period_end));

    for pair in ordered.windows(2) {
        let (current_index, current) = pair[0];
        let (next_index, next) = pair[1];
        if current.period_end > next.period_start {
            violations.push(ScheduleViolation {
                item_index: next_index,
                kind: ViolationKind::OverlappingPeriods,
                message: format!(
                    "period starting {} overlaps the period {} to {} (entry {})",
                    next.period_start, current.period_start, current.period_end, current_index
                ),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn item(start: NaiveDate, end: NaiveDate, due: Decimal, paid: Decimal) -> ArrearsItem {
        ArrearsItem {
            period_start: start,
            period_end: end,
            rent_due: due,
            rent_paid: paid,
        }
    }

    #[test]
    fn clean_schedule_produces_no_violations() {
        let items = vec![
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(1200)),
            item(date(2024, 2, 1), date(2024, 2, 29), dec!(1200), dec!(600)),
        ];
        assert!(validate_schedule(&items).is_empty());
    }

    #[test]
    fn flags_inverted_range_and_overpayment_on_same_entry() {
        let items = vec![item(
            date(2024, 2, 10),
            date(2024, 2, 1),
            dec!(800),
            dec!(900),
        )];

        let violations = validate_schedule(&items);
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|violation| violation.kind == ViolationKind::InvertedRange));
        assert!(violations
            .iter()
            .any(|violation| violation.kind == ViolationKind::Overpayment));
        assert!(violations.iter().all(|violation| violation.item_index == 0));
    }

    #[test]
    fn flags_negative_rent_due() {
        let items = vec![item(
            date(2024, 1, 1),
            date(2024, 1, 31),
            dec!(-10),
            dec!(0),
        )];
        let violations = validate_schedule(&items);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::NegativeRentDue);
    }

    #[test]
    fn detects_overlap_but_allows_boundary_touch() {
        let overlapping = vec![
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(0)),
            item(date(2024, 1, 15), date(2024, 2, 14), dec!(1200), dec!(0)),
        ];
        let violations = validate_schedule(&overlapping);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::OverlappingPeriods);
        assert_eq!(violations[0].item_index, 1);

        let touching = vec![
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(0)),
            item(date(2024, 1, 31), date(2024, 2, 28), dec!(1200), dec!(0)),
        ];
        assert!(validate_schedule(&touching)
            .iter()
            .all(|violation| violation.kind != ViolationKind::OverlappingPeriods));

        let adjacent = vec![
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(0)),
            item(date(2024, 2, 1), date(2024, 2, 28), dec!(1200), dec!(0)),
        ];
        assert!(validate_schedule(&adjacent).is_empty());
    }

    #[test]
    fn overlap_check_sorts_rather_than_trusting_input_order() {
        let items = vec![
            item(date(2024, 2, 1), date(2024, 2, 29), dec!(1200), dec!(0)),
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(0)),
            item(date(2024, 2, 20), date(2024, 3, 19), dec!(1200), dec!(0)),
        ];

        let violations = validate_schedule(&items);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::OverlappingPeriods);
        assert_eq!(violations[0].item_index, 2);
    }

    #[test]
    fn inverted_ranges_are_excluded_from_overlap_comparison() {
        // The middle entry spans the whole quarter backwards; if it joined
        // the overlap pass it would collide with both neighbours.
        let items = vec![
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(0)),
            item(date(2024, 3, 31), date(2024, 1, 1), dec!(1200), dec!(0)),
            item(date(2024, 2, 1), date(2024, 2, 29), dec!(1200), dec!(0)),
        ];

        let violations = validate_schedule(&items);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::InvertedRange);
        assert_eq!(violations[0].item_index, 1);
    }

    #[test]
    fn validation_never_mutates_the_ledger() {
        let items = vec![
            item(date(2024, 1, 1), date(2024, 1, 31), dec!(1200), dec!(1500)),
            item(date(2024, 1, 15), date(2024, 2, 14), dec!(1200), dec!(0)),
        ];
        let snapshot = items.clone();
        let _ = validate_schedule(&items);
        assert_eq!(items, snapshot);
    }
}
