use upkeep_core::{
    clock::FixedClock,
    core::services::DashboardService,
    dashboard::DashboardSettings,
    init,
    seed::demo_portfolio,
};

#[test]
fn demo_dashboard_smoke() {
    init();

    let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
    let view = DashboardService::build(
        &demo_portfolio(),
        &DashboardSettings::default(),
        &FixedClock::on(today),
    );

    assert_eq!(view.total_properties, 3);
    assert!(!view.critical_systems.is_empty());
}
