use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{BuildingSystem, Condition};

const DAYS_PER_YEAR: f64 = 365.25;
/// Points added as a system approaches the end of its expected lifespan.
pub const MAX_AGE_POINTS: f64 = 40.0;
pub const STALE_SERVICE_PENALTY: i32 = 10;
pub const STALE_SERVICE_DAYS: i64 = 730;

/// The physical state a risk score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskInputs {
    pub condition: Condition,
    pub install_date: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    pub last_service_date: Option<NaiveDate>,
}

impl From<&BuildingSystem> for RiskInputs {
    fn from(system: &BuildingSystem) -> Self {
        Self {
            condition: system.condition,
            install_date: system.install_date,
            expected_lifespan_years: system.expected_lifespan_years,
            last_service_date: system.last_service_date,
        }
    }
}

/// Inclusive score band owned by each condition grade.
pub fn condition_band(condition: Condition) -> (u8, u8) {
    match condition {
        Condition::Excellent => (0, 10),
        Condition::Good => (10, 30),
        Condition::Fair => (30, 55),
        Condition::Poor => (55, 80),
        Condition::Critical => (80, 100),
    }
}

/// Fraction of the expected lifespan already used, clamped to [0, 1].
///
/// `None` when no usable lifespan is recorded; a missing install date counts as a brand
/// new system.
pub fn lifespan_ratio(inputs: &RiskInputs, today: NaiveDate) -> Option<f64> {
    let lifespan = inputs.expected_lifespan_years.filter(|years| *years > 0)?;
    let age = inputs
        .install_date
        .map(|installed| fractional_years(installed, today))
        .unwrap_or(0.0);
    Some((age / lifespan as f64).clamp(0.0, 1.0))
}

fn service_is_stale(last_service: Option<NaiveDate>, today: NaiveDate) -> bool {
    match last_service {
        None => true,
        Some(date) => (today - date).num_days() > STALE_SERVICE_DAYS,
    }
}

/// Maps a system's condition, age and service recency onto 0–100.
pub fn risk_score(inputs: &RiskInputs, today: NaiveDate) -> u8 {
    let (floor, _) = condition_band(inputs.condition);
    let age_points = lifespan_ratio(inputs, today)
        .map(|ratio| (ratio * MAX_AGE_POINTS).round() as i32)
        .unwrap_or(0);
    let recency = if service_is_stale(inputs.last_service_date, today) {
        STALE_SERVICE_PENALTY
    } else {
        0
    };
    (floor as i32 + age_points + recency).clamp(0, 100) as u8
}

pub fn score_system(system: &BuildingSystem, today: NaiveDate) -> u8 {
    risk_score(&RiskInputs::from(system), today)
}

/// Ranking order for risky systems: highest risk first, then the longest without
/// service, with never-serviced systems ahead of everything else.
pub fn compare_by_risk(
    a: (u8, Option<NaiveDate>),
    b: (u8, Option<NaiveDate>),
) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}

fn fractional_years(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

/// Whole years since installation, never negative.
pub fn age_in_years(install_date: NaiveDate, today: NaiveDate) -> u32 {
    fractional_years(install_date, today).floor().max(0.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingLife {
    pub years: u32,
    pub percentage: f64,
}

/// Years left before the expected end of life, and that remainder as a share of the lifespan.
pub fn remaining_life(
    install_date: NaiveDate,
    lifespan_years: i32,
    today: NaiveDate,
) -> Option<RemainingLife> {
    if lifespan_years <= 0 {
        return None;
    }
    let age = age_in_years(install_date, today) as i64;
    let years = (lifespan_years as i64 - age).max(0) as u32;
    let percentage = (years as f64 / lifespan_years as f64 * 100.0).clamp(0.0, 100.0);
    Some(RemainingLife { years, percentage })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn inputs(condition: Condition) -> RiskInputs {
        RiskInputs {
            condition,
            install_date: None,
            expected_lifespan_years: None,
            last_service_date: None,
        }
    }

    #[test]
    fn fresh_excellent_system_scores_zero() {
        let today = date(2025, 6, 1);
        let mut input = inputs(Condition::Excellent);
        input.install_date = Some(today);
        input.expected_lifespan_years = Some(15);
        input.last_service_date = Some(date(2025, 5, 1));
        assert_eq!(risk_score(&input, today), 0);
    }

    #[test]
    fn half_life_good_system_without_service() {
        let today = date(2025, 6, 15);
        let mut input = inputs(Condition::Good);
        input.install_date = Some(date(2015, 6, 15));
        input.expected_lifespan_years = Some(20);
        // 10 (good) + 20 (half of 40) + 10 (never serviced)
        assert_eq!(risk_score(&input, today), 40);
    }

    #[test]
    fn extreme_age_is_clamped() {
        let today = date(2025, 1, 1);
        let mut input = inputs(Condition::Critical);
        input.install_date = Some(date(1525, 1, 1));
        input.expected_lifespan_years = Some(10);
        assert_eq!(risk_score(&input, today), 100);
    }

    #[test]
    fn non_positive_lifespan_adds_no_age_points() {
        let today = date(2025, 1, 1);
        let mut input = inputs(Condition::Fair);
        input.install_date = Some(date(1990, 1, 1));
        input.last_service_date = Some(date(2024, 12, 1));
        input.expected_lifespan_years = Some(-5);
        assert_eq!(risk_score(&input, today), 30);
        input.expected_lifespan_years = Some(0);
        assert_eq!(risk_score(&input, today), 30);
    }

    #[test]
    fn future_install_date_counts_as_new() {
        let today = date(2025, 1, 1);
        let mut input = inputs(Condition::Good);
        input.install_date = Some(date(2030, 1, 1));
        input.expected_lifespan_years = Some(10);
        input.last_service_date = Some(today);
        assert_eq!(risk_score(&input, today), 10);
    }

    #[test]
    fn service_older_than_two_years_is_penalised() {
        let today = date(2025, 1, 1);
        let mut input = inputs(Condition::Good);
        input.last_service_date = Some(today - chrono::Duration::days(STALE_SERVICE_DAYS));
        assert_eq!(risk_score(&input, today), 10);
        input.last_service_date = Some(today - chrono::Duration::days(STALE_SERVICE_DAYS + 1));
        assert_eq!(risk_score(&input, today), 20);
    }

    #[test]
    fn ranking_breaks_ties_by_oldest_service_nulls_first() {
        let mut ranked = vec![
            (60, Some(date(2024, 1, 1))),
            (80, Some(date(2024, 1, 1))),
            (60, None),
            (60, Some(date(2020, 1, 1))),
        ];
        ranked.sort_by(|a, b| compare_by_risk(*a, *b));
        assert_eq!(
            ranked,
            vec![
                (80, Some(date(2024, 1, 1))),
                (60, None),
                (60, Some(date(2020, 1, 1))),
                (60, Some(date(2024, 1, 1))),
            ]
        );
    }

    #[test]
    fn remaining_life_bottoms_out_at_zero() {
        let today = date(2025, 1, 1);
        let life = remaining_life(date(2000, 1, 1), 20, today).unwrap();
        assert_eq!(life.years, 0);
        assert_eq!(life.percentage, 0.0);

        let life = remaining_life(date(2020, 1, 1), 20, today).unwrap();
        assert_eq!(life.years, 15);
        assert_eq!(life.percentage, 75.0);

        assert!(remaining_life(date(2020, 1, 1), 0, today).is_none());
    }

    #[test]
    fn age_is_never_negative() {
        assert_eq!(age_in_years(date(2030, 1, 1), date(2025, 1, 1)), 0);
        assert_eq!(age_in_years(date(2012, 11, 1), date(2025, 1, 1)), 12);
    }
}
