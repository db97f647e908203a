use chrono::{Datelike, NaiveDate};

use crate::domain::{BuildingSystem, ExpenseCategory, Property};
use crate::portfolio::Portfolio;
use crate::scoring::{average_score, compare_by_risk, property_health, score_system};

use super::settings::{DashboardSettings, ScoreSource};
use super::view::{CategoryTotal, DashboardView, MonthTotal, PropertySummary, WithProperty};

const MONTHS_IN_WINDOW: i32 = 12;

/// Sums money amounts starting from `+0.0`, so an empty bucket never reports `-0.0`.
fn money_total(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.fold(0.0, |total, amount| total + amount)
}

/// A system paired with the risk the dashboard should use for it.
struct Scored<'a> {
    system: &'a BuildingSystem,
    risk: u8,
}

impl DashboardView {
    /// The empty-portfolio view: zero counts, empty lists and twelve zeroed months.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            total_properties: 0,
            total_units: 0,
            avg_health_score: 0,
            open_work_orders: 0,
            urgent_items: 0,
            total_expenses_this_year: 0.0,
            total_expenses_last_year: 0.0,
            upcoming_maintenance: Vec::new(),
            critical_systems: Vec::new(),
            recent_work_orders: Vec::new(),
            expenses_by_category: Vec::new(),
            expenses_by_month: month_window(today)
                .into_iter()
                .map(|start| MonthTotal {
                    month: start.format("%b").to_string(),
                    amount: 0.0,
                })
                .collect(),
            property_summaries: Vec::new(),
        }
    }
}

/// First day of each of the twelve months ending with `today`'s month, oldest first.
pub fn month_window(today: NaiveDate) -> Vec<NaiveDate> {
    let current = today.year() * 12 + today.month0() as i32;
    (0..MONTHS_IN_WINDOW)
        .rev()
        .filter_map(|back| {
            let index = current - back;
            NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
        })
        .collect()
}

/// Reduces one owner's portfolio into the dashboard view model.
///
/// Pure: the same portfolio, settings and date always produce an identical view.
pub fn aggregate(
    portfolio: &Portfolio,
    settings: &DashboardSettings,
    today: NaiveDate,
) -> DashboardView {
    if portfolio.properties.is_empty() {
        return DashboardView::empty(today);
    }

    let this_year = today.year();
    let last_year = this_year - 1;

    let scored: Vec<Scored<'_>> = portfolio
        .systems
        .iter()
        .map(|system| Scored {
            system,
            risk: match settings.score_source {
                ScoreSource::Stored => system.stored_risk(),
                ScoreSource::Derived => score_system(system, today),
            },
        })
        .collect();

    let health_of = |property: &Property| -> u8 {
        match settings.score_source {
            ScoreSource::Stored => property.health_score.unwrap_or(0).min(100),
            ScoreSource::Derived => property_health(
                scored
                    .iter()
                    .filter(|entry| entry.system.property_id == property.id)
                    .map(|entry| entry.risk),
            ),
        }
    };
    let health: Vec<u8> = portfolio.properties.iter().map(health_of).collect();

    let open_work_orders = portfolio
        .work_orders
        .iter()
        .filter(|order| order.is_open())
        .count();

    let urgent_systems = scored
        .iter()
        .filter(|entry| entry.risk > 0 && entry.risk >= settings.urgent_threshold)
        .count();
    let urgent_orders = portfolio
        .work_orders
        .iter()
        .filter(|order| order.is_unresolved_emergency())
        .count();

    let year_total = |year: i32| -> f64 {
        money_total(
            portfolio
                .expenses
                .iter()
                .filter(|expense| expense.in_year(year))
                .map(|expense| expense.amount),
        )
    };

    let mut upcoming: Vec<_> = portfolio
        .maintenance_schedules
        .iter()
        .filter(|schedule| schedule.is_upcoming())
        .collect();
    upcoming.sort_by_key(|schedule| schedule.next_due);
    let upcoming_maintenance = upcoming
        .into_iter()
        .take(settings.top_n)
        .map(|schedule| WithProperty {
            item: schedule.clone(),
            property_name: portfolio.property_name(schedule.property_id).to_string(),
        })
        .collect();

    let mut critical: Vec<&Scored<'_>> = scored
        .iter()
        .filter(|entry| entry.risk > 0 && entry.risk >= settings.critical_threshold)
        .collect();
    critical.sort_by(|a, b| {
        compare_by_risk(
            (a.risk, a.system.last_service_date),
            (b.risk, b.system.last_service_date),
        )
    });
    let critical_systems = critical
        .into_iter()
        .take(settings.top_n)
        .map(|entry| {
            let mut item = entry.system.clone();
            item.risk_score = Some(entry.risk);
            WithProperty {
                item,
                property_name: portfolio.property_name(entry.system.property_id).to_string(),
            }
        })
        .collect();

    let mut recent: Vec<_> = portfolio.work_orders.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let recent_work_orders = recent
        .into_iter()
        .take(settings.top_n)
        .map(|order| WithProperty {
            item: order.clone(),
            property_name: portfolio.property_name(order.property_id).to_string(),
        })
        .collect();

    let property_summaries = portfolio
        .properties
        .iter()
        .zip(health.iter())
        .map(|(property, score)| summarize_property(portfolio, property, *score, this_year))
        .collect();

    DashboardView {
        total_properties: portfolio.properties.len(),
        total_units: portfolio
            .properties
            .iter()
            .map(|property| property.units_count)
            .sum(),
        avg_health_score: average_score(&health),
        open_work_orders,
        urgent_items: urgent_systems + urgent_orders,
        total_expenses_this_year: year_total(this_year),
        total_expenses_last_year: year_total(last_year),
        upcoming_maintenance,
        critical_systems,
        recent_work_orders,
        expenses_by_category: expenses_by_category(portfolio, this_year),
        expenses_by_month: expenses_by_month(portfolio, today),
        property_summaries,
    }
}

fn expenses_by_category(portfolio: &Portfolio, year: i32) -> Vec<CategoryTotal> {
    // First-seen order, so equal totals keep a stable position after sorting.
    let mut totals: Vec<(ExpenseCategory, f64)> = Vec::new();
    for expense in portfolio.expenses.iter().filter(|expense| expense.in_year(year)) {
        match totals.iter_mut().find(|(category, _)| *category == expense.category) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }
    let mut totals: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(name, value)| CategoryTotal { name, value })
        .collect();
    totals.sort_by(|a, b| b.value.total_cmp(&a.value));
    totals
}

fn expenses_by_month(portfolio: &Portfolio, today: NaiveDate) -> Vec<MonthTotal> {
    month_window(today)
        .into_iter()
        .map(|start| MonthTotal {
            month: start.format("%b").to_string(),
            amount: money_total(
                portfolio
                    .expenses
                    .iter()
                    .filter(|expense| expense.in_month(start.year(), start.month()))
                    .map(|expense| expense.amount),
            ),
        })
        .collect()
}

fn summarize_property(
    portfolio: &Portfolio,
    property: &Property,
    health_score: u8,
    year: i32,
) -> PropertySummary {
    PropertySummary {
        id: property.id,
        name: property.name.clone(),
        health_score,
        open_work_orders: portfolio
            .work_orders
            .iter()
            .filter(|order| order.property_id == property.id && order.is_open())
            .count(),
        total_expenses: money_total(
            portfolio
                .expenses
                .iter()
                .filter(|expense| expense.property_id == property.id && expense.in_year(year))
                .map(|expense| expense.amount),
        ),
        system_count: portfolio.systems_for(property.id).count(),
        tenant_count: portfolio
            .tenants
            .iter()
            .filter(|tenant| tenant.property_id == property.id && tenant.is_active)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_window_crosses_year_boundary() {
        let window = month_window(date(2025, 3, 18));
        assert_eq!(window.len(), 12);
        assert_eq!(window.first(), Some(&date(2024, 4, 1)));
        assert_eq!(window.last(), Some(&date(2025, 3, 1)));
        assert!(window.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn month_window_ending_in_december_stays_in_year() {
        let window = month_window(date(2025, 12, 31));
        assert_eq!(window.first(), Some(&date(2025, 1, 1)));
        assert_eq!(window.last(), Some(&date(2025, 12, 1)));
    }

    #[test]
    fn empty_view_has_twelve_zero_months() {
        let view = DashboardView::empty(date(2025, 6, 1));
        assert_eq!(view.expenses_by_month.len(), 12);
        assert_eq!(view.expenses_by_month[11].month, "Jun");
        assert!(view.expenses_by_month.iter().all(|month| month.amount == 0.0));
    }

    #[test]
    fn money_total_of_nothing_is_positive_zero() {
        let total = money_total(std::iter::empty());
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }
}
