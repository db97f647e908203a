//! Portfolio dashboard: the aggregated view model and the reduction that builds it.

pub mod aggregate;
pub mod settings;
pub mod view;

pub use aggregate::{aggregate, month_window};
pub use settings::{DashboardSettings, ScoreSource};
pub use view::{CategoryTotal, DashboardView, MonthTotal, PropertySummary, WithProperty};
