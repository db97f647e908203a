use colored::{ColoredString, Colorize};
use std::fmt::{self, Write};

use crate::currency::{format_currency, CurrencyCode};
use crate::dashboard::{DashboardSettings, DashboardView};
use crate::domain::Displayable;
use crate::scoring::HealthBand;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => text,
        MessageKind::Success => format!("[✓] {text}").bright_green().to_string(),
        MessageKind::Warning => format!("[!] {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("[x] {text}").bright_red().to_string(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Error => eprintln!("{formatted}"),
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

/// Health score coloured by its band.
pub fn health_badge(score: u8) -> ColoredString {
    let band = HealthBand::from_score(score);
    let text = format!("{score:>3} {}", band.label());
    match band {
        HealthBand::Healthy => text.green(),
        HealthBand::Fair => text.yellow(),
        HealthBand::AtRisk => text.bright_red(),
        HealthBand::Critical => text.red().bold(),
    }
}

fn risk_badge(risk: u8, urgent_threshold: u8) -> ColoredString {
    let text = format!("risk {risk:>3}");
    if risk >= urgent_threshold {
        text.red().bold()
    } else {
        text.yellow()
    }
}

/// Plain-text rendering of the dashboard for terminals.
pub fn render_dashboard(
    view: &DashboardView,
    settings: &DashboardSettings,
    currency: &CurrencyCode,
) -> String {
    let money = |amount: f64| format_currency(amount, currency);
    let mut out = String::new();

    let _ = writeln!(out, "{}", apply_style(MessageKind::Section, "Portfolio"));
    let _ = writeln!(
        out,
        "Properties: {}   Units: {}   Avg health: {}",
        view.total_properties,
        view.total_units,
        health_badge(view.avg_health_score)
    );
    let _ = writeln!(
        out,
        "Open work orders: {}   Urgent items: {}",
        view.open_work_orders,
        if view.urgent_items > 0 {
            view.urgent_items.to_string().red().bold()
        } else {
            view.urgent_items.to_string().normal()
        }
    );
    let _ = writeln!(
        out,
        "Expenses this year: {}   last year: {}",
        money(view.total_expenses_this_year),
        money(view.total_expenses_last_year)
    );

    if !view.critical_systems.is_empty() {
        let _ = writeln!(out, "\n{}", apply_style(MessageKind::Section, "Critical systems"));
        for entry in &view.critical_systems {
            let _ = writeln!(
                out,
                "  {}  {} - {}",
                risk_badge(entry.item.stored_risk(), settings.urgent_threshold),
                entry.item.display_label(),
                entry.property_name
            );
        }
    }

    if !view.upcoming_maintenance.is_empty() {
        let _ = writeln!(out, "\n{}", apply_style(MessageKind::Section, "Upcoming maintenance"));
        for entry in &view.upcoming_maintenance {
            let due = entry
                .item
                .next_due
                .map(|date| date.to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "  {due}  {} - {}", entry.item.title, entry.property_name);
        }
    }

    if !view.recent_work_orders.is_empty() {
        let _ = writeln!(out, "\n{}", apply_style(MessageKind::Section, "Recent work orders"));
        for entry in &view.recent_work_orders {
            let _ = writeln!(
                out,
                "  {} - {}",
                entry.item.display_label(),
                entry.property_name
            );
        }
    }

    if !view.expenses_by_category.is_empty() {
        let _ = writeln!(out, "\n{}", apply_style(MessageKind::Section, "Spend by category"));
        for total in &view.expenses_by_category {
            let _ = writeln!(out, "  {:<12} {:>14}", total.name.as_str(), money(total.value));
        }
    }

    let _ = writeln!(out, "\n{}", apply_style(MessageKind::Section, "Last 12 months"));
    for month in &view.expenses_by_month {
        let _ = writeln!(out, "  {} {:>14}", month.month, money(month.amount));
    }

    if !view.property_summaries.is_empty() {
        let _ = writeln!(out, "\n{}", apply_style(MessageKind::Section, "Properties"));
        for summary in &view.property_summaries {
            let _ = writeln!(
                out,
                "  {}  {}  open: {}  systems: {}  tenants: {}  spend: {}",
                health_badge(summary.health_score),
                summary.name,
                summary.open_work_orders,
                summary.system_count,
                summary.tenant_count,
                money(summary.total_expenses)
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_dashboard_still_lists_twelve_months() {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let text = render_dashboard(
            &DashboardView::empty(today),
            &DashboardSettings::default(),
            &CurrencyCode::default(),
        );
        assert!(text.contains("Properties: 0"));
        assert!(text.contains("Apr"));
        assert!(text.contains("Mar"));
        assert!(!text.contains("Critical systems"));
    }

    #[test]
    fn risk_badge_follows_configured_urgent_threshold() {
        assert_eq!(risk_badge(60, 70), "risk  60".yellow());
        assert_eq!(risk_badge(60, 55), "risk  60".red().bold());
    }

    #[test]
    fn health_badge_names_band() {
        colored::control::set_override(false);
        assert_eq!(health_badge(58).to_string(), " 58 at risk");
        assert_eq!(health_badge(100).to_string(), "100 healthy");
    }
}
