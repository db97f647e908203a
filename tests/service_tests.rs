mod common;

use common::date;
use upkeep_core::{
    core::services::{
        DashboardService, ExpenseFilter, ExpenseService, MaintenanceService, PropertyService,
        ScoringService, ServiceError, WorkOrderFilter, WorkOrderService,
    },
    dashboard::DashboardSettings,
    domain::{
        BuildingSystem, Condition, Contractor, Expense, ExpenseCategory, MaintenanceSchedule,
        Priority, Property, PropertyType, SystemCategory, Tenant, WorkOrder, WorkOrderStatus,
    },
    portfolio::Portfolio,
    seed::demo_portfolio,
};

fn duplex() -> Property {
    Property::new("Maple Street Duplex", "142 Maple Street", PropertyType::Duplex)
        .with_location("Springfield", "IL", "62701")
        .with_units(2)
}

#[test]
fn services_feed_the_dashboard() {
    let today = date(2025, 6, 15);
    let created = today.and_hms_opt(8, 30, 0).unwrap();
    let mut portfolio = Portfolio::new("Alex Rivera");

    let maple = PropertyService::add_property(&mut portfolio, duplex()).unwrap();
    let heater = PropertyService::add_system(
        &mut portfolio,
        BuildingSystem::new(maple, SystemCategory::Plumbing, "Water Heater", Condition::Poor)
            .installed(date(2014, 3, 10), 12),
        today,
    )
    .unwrap();
    PropertyService::add_tenant(
        &mut portfolio,
        Tenant::new(maple, "Maria Johnson").with_lease(date(2024, 8, 1), date(2025, 7, 31), 1100.0),
    )
    .unwrap();

    let plumber = portfolio.add_contractor(Contractor::new("ABC Plumbing & Heating").preferred());
    let order = WorkOrderService::add(
        &mut portfolio,
        WorkOrder::new(maple, "Water heater rumbling", Priority::Emergency, created).for_system(heater),
        today,
    )
    .unwrap();
    WorkOrderService::assign(&mut portfolio, order, plumber).unwrap();

    ExpenseService::add(
        &mut portfolio,
        Expense::new(maple, ExpenseCategory::Repair, "Flush tank", 180.0, date(2025, 6, 2)),
    )
    .unwrap();

    let view = DashboardService::build_on(&portfolio, &DashboardSettings::default(), today);
    // Poor floor 55, most of a 12 year life and never serviced: clamped.
    assert_eq!(view.critical_systems[0].item.risk_score, Some(100));
    assert_eq!(view.avg_health_score, 0);
    assert_eq!(view.urgent_items, 2);
    assert_eq!(view.open_work_orders, 1);
    assert_eq!(view.total_expenses_this_year, 180.0);
    assert_eq!(view.property_summaries[0].tenant_count, 1);
    assert_eq!(
        view.recent_work_orders[0].item.status,
        WorkOrderStatus::Assigned
    );

    WorkOrderService::update_status(&mut portfolio, order, WorkOrderStatus::Completed, None, today)
        .unwrap();
    let view = DashboardService::build_on(&portfolio, &DashboardSettings::default(), today);
    assert_eq!(view.open_work_orders, 0);
    assert_eq!(view.urgent_items, 1);
}

#[test]
fn work_order_rejects_system_from_other_property() {
    let today = date(2025, 6, 15);
    let mut portfolio = Portfolio::new("owner");
    let maple = PropertyService::add_property(&mut portfolio, duplex()).unwrap();
    let oak = PropertyService::add_property(
        &mut portfolio,
        Property::new("Oak Avenue Rental", "88 Oak Avenue", PropertyType::SingleFamily)
            .with_location("Springfield", "IL", "62704"),
    )
    .unwrap();
    let roof = PropertyService::add_system(
        &mut portfolio,
        BuildingSystem::new(oak, SystemCategory::Roof, "Metal Roof", Condition::Excellent),
        today,
    )
    .unwrap();

    let err = WorkOrderService::add(
        &mut portfolio,
        WorkOrder::new(maple, "Patch roof", Priority::Medium, today.and_hms_opt(9, 0, 0).unwrap())
            .for_system(roof),
        today,
    )
    .expect_err("foreign system");
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(WorkOrderService::list(&portfolio, &WorkOrderFilter::default()).is_empty());
}

#[test]
fn rescoring_demo_replaces_hand_entered_scores() {
    let mut portfolio = demo_portfolio();
    let today = date(2026, 2, 15);
    let report = ScoringService::refresh(&mut portfolio, today);
    assert!(report.systems_changed > 0);
    assert_eq!(report.properties_changed, 3);

    // Excellent floor 0, 10.7 of 50 years is 9 age points, never serviced adds 10.
    let metal_roof = portfolio
        .systems
        .iter()
        .find(|system| system.name == "Metal Roof")
        .unwrap();
    assert_eq!(metal_roof.risk_score, Some(19));

    let stored = DashboardService::build_on(&portfolio, &DashboardSettings::default(), today);
    let derived = DashboardService::build_on(&portfolio, &DashboardSettings::derived(), today);
    assert_eq!(stored, derived);
}

#[test]
fn expense_summary_by_property_and_year() {
    let portfolio = demo_portfolio();
    let downtown = portfolio.properties[2].id;
    let summary = ExpenseService::summarize(
        &portfolio,
        &ExpenseFilter {
            property_id: Some(downtown),
            year: Some(2025),
            ..ExpenseFilter::default()
        },
    );
    assert_eq!(summary.count, 3);
    assert_eq!(summary.total, 6180.0);
    assert_eq!(summary.deductible_total, 6180.0);
}

#[test]
fn completing_maintenance_moves_it_down_the_dashboard() {
    let today = date(2026, 3, 1);
    let mut portfolio = Portfolio::new("owner");
    let maple = PropertyService::add_property(&mut portfolio, duplex()).unwrap();
    let filters = MaintenanceService::add(
        &mut portfolio,
        MaintenanceSchedule::new(maple, "HVAC Filter Change", 90).due_on(date(2026, 3, 1)),
    )
    .unwrap();
    MaintenanceService::add(
        &mut portfolio,
        MaintenanceSchedule::new(maple, "Gutter Cleaning", 180).due_on(date(2026, 4, 15)),
    )
    .unwrap();

    let next = MaintenanceService::complete(&mut portfolio, filters, today).unwrap();
    assert_eq!(next, date(2026, 5, 30));

    let view = DashboardService::build_on(&portfolio, &DashboardSettings::default(), today);
    let titles: Vec<&str> = view
        .upcoming_maintenance
        .iter()
        .map(|entry| entry.item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Gutter Cleaning", "HVAC Filter Change"]);
}
