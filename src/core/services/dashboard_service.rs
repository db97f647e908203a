use chrono::NaiveDate;
use tracing::{debug, info_span};

use crate::clock::Clock;
use crate::dashboard::{aggregate, DashboardSettings, DashboardView};
use crate::portfolio::Portfolio;

pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard for the clock's current date.
    pub fn build(
        portfolio: &Portfolio,
        settings: &DashboardSettings,
        clock: &dyn Clock,
    ) -> DashboardView {
        Self::build_on(portfolio, settings, clock.today())
    }

    pub fn build_on(
        portfolio: &Portfolio,
        settings: &DashboardSettings,
        today: NaiveDate,
    ) -> DashboardView {
        let span = info_span!("dashboard", owner = %portfolio.owner, %today);
        let _guard = span.enter();
        let view = aggregate(portfolio, settings, today);
        debug!(
            properties = view.total_properties,
            urgent = view.urgent_items,
            open_work_orders = view.open_work_orders,
            "dashboard aggregated"
        );
        view
    }
}
