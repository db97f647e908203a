//! Demo landlord portfolio used by the CLI `demo` command and the integration tests.
//!
//! Scores are the hand-entered cached values, not the output of the risk formula; run
//! `ScoringService::refresh` to replace them.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{
    BuildingSystem, Condition, Contractor, Expense, ExpenseCategory, MaintenanceSchedule,
    Priority, Property, PropertyType, Season, SystemCategory, Tenant, WorkOrder,
    WorkOrderCategory, WorkOrderStatus,
};
use crate::portfolio::Portfolio;

pub const DEMO_OWNER: &str = "Alex Rivera";

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(date: NaiveDate, hour: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(hour)
}

#[allow(clippy::too_many_arguments)]
fn property(
    name: &str,
    address: &str,
    zip: &str,
    kind: PropertyType,
    year_built: i32,
    sqft: u32,
    units: u32,
    prices: (f64, f64),
    health: u8,
) -> Property {
    let mut property = Property::new(name, address, kind)
        .with_location("Springfield", "IL", zip)
        .with_units(units)
        .with_health(health);
    property.year_built = Some(year_built);
    property.sqft = Some(sqft);
    property.purchase_price = Some(prices.0);
    property.current_value = Some(prices.1);
    property
}

fn contractor(company: &str, contact: &str, specialty: &str, rating: f64, jobs: u32) -> Contractor {
    let mut contractor = Contractor::new(company).with_specialty(specialty);
    contractor.contact_name = Some(contact.to_string());
    contractor.rating = rating;
    contractor.jobs_completed = jobs;
    contractor
}

pub fn demo_portfolio() -> Portfolio {
    let mut portfolio = Portfolio::new(DEMO_OWNER);

    let maple = portfolio.add_property(property(
        "Maple Street Duplex",
        "142 Maple Street",
        "62701",
        PropertyType::Duplex,
        1985,
        2400,
        2,
        (185_000.0, 245_000.0),
        72,
    ));
    let oak = portfolio.add_property(property(
        "Oak Avenue Rental",
        "88 Oak Avenue",
        "62704",
        PropertyType::SingleFamily,
        1998,
        1800,
        1,
        (220_000.0, 275_000.0),
        89,
    ));
    let downtown = portfolio.add_property(property(
        "Downtown Apartments",
        "500 Main Street",
        "62702",
        PropertyType::Apartment,
        1972,
        6000,
        4,
        (420_000.0, 510_000.0),
        58,
    ));

    let mut water_heater = BuildingSystem::new(
        maple,
        SystemCategory::Plumbing,
        "Water Heater",
        Condition::Poor,
    )
    .with_make("Rheem")
    .installed(ymd(2014, 3, 10), 12)
    .serviced(ymd(2023, 6, 1))
    .with_risk(85);
    water_heater.warranty_expiration = Some(ymd(2024, 3, 10));
    let water_heater = portfolio.add_system(water_heater);

    let mut fpe_panel = BuildingSystem::new(
        downtown,
        SystemCategory::Electrical,
        "Electrical Panel",
        Condition::Critical,
    )
    .with_make("Federal Pacific")
    .installed(ymd(1972, 1, 1), 40)
    .with_risk(95);
    fpe_panel.notes = Some(
        "Federal Pacific panels are a known fire hazard. Recommend immediate replacement.".into(),
    );

    let systems = [
        BuildingSystem::new(maple, SystemCategory::Hvac, "Central Furnace", Condition::Fair)
            .with_make("Carrier")
            .installed(ymd(2012, 11, 1), 20)
            .serviced(ymd(2024, 10, 15))
            .with_risk(45),
        BuildingSystem::new(maple, SystemCategory::Hvac, "Central AC", Condition::Poor)
            .with_make("Carrier")
            .installed(ymd(2012, 11, 1), 15)
            .serviced(ymd(2024, 5, 20))
            .with_risk(72),
        BuildingSystem::new(maple, SystemCategory::Roof, "Asphalt Shingle Roof", Condition::Fair)
            .installed(ymd(2005, 8, 15), 25)
            .serviced(ymd(2024, 4, 1))
            .with_risk(55),
        BuildingSystem::new(
            maple,
            SystemCategory::Electrical,
            "Main Electrical Panel",
            Condition::Good,
        )
        .with_make("Square D")
        .installed(ymd(1985, 1, 1), 40)
        .with_risk(30),
        BuildingSystem::new(maple, SystemCategory::Plumbing, "Sump Pump", Condition::Good)
            .with_make("Wayne")
            .installed(ymd(2020, 4, 15), 10)
            .with_risk(15),
        BuildingSystem::new(oak, SystemCategory::Hvac, "Heat Pump", Condition::Excellent)
            .with_make("Trane")
            .installed(ymd(2018, 9, 1), 15)
            .serviced(ymd(2025, 1, 10))
            .with_risk(8),
        BuildingSystem::new(
            oak,
            SystemCategory::Plumbing,
            "Tankless Water Heater",
            Condition::Excellent,
        )
        .with_make("Rinnai")
        .installed(ymd(2021, 3, 15), 20)
        .with_risk(3),
        BuildingSystem::new(oak, SystemCategory::Roof, "Metal Roof", Condition::Excellent)
            .installed(ymd(2015, 6, 1), 50)
            .with_risk(2),
        BuildingSystem::new(downtown, SystemCategory::Hvac, "Boiler System", Condition::Fair)
            .with_make("Weil-McLain")
            .installed(ymd(2008, 10, 1), 20)
            .serviced(ymd(2024, 9, 1))
            .with_risk(60),
        BuildingSystem::new(downtown, SystemCategory::Plumbing, "Main Water Line", Condition::Poor)
            .installed(ymd(1972, 1, 1), 50)
            .with_risk(78),
        fpe_panel,
        BuildingSystem::new(
            downtown,
            SystemCategory::FireSafety,
            "Fire Alarm System",
            Condition::Good,
        )
        .installed(ymd(2015, 3, 1), 15)
        .with_risk(20),
    ];
    for system in systems {
        portfolio.add_system(system);
    }

    let abc = portfolio
        .add_contractor(contractor("ABC Plumbing & Heating", "Mike Torres", "plumbing", 4.8, 12).preferred());
    let elite = portfolio
        .add_contractor(contractor("Elite Electric", "Sarah Chen", "electrical", 4.5, 5).preferred());
    portfolio.add_contractor(contractor("Top Notch Roofing", "James Miller", "roofing", 4.2, 3));

    portfolio.add_tenant(
        Tenant::new(maple, "Maria Johnson").with_lease(ymd(2023, 8, 1), ymd(2025, 7, 31), 1100.0),
    );
    let david = portfolio.add_tenant(
        Tenant::new(maple, "David Kim").with_lease(ymd(2024, 1, 1), ymd(2025, 12, 31), 1150.0),
    );
    for (name, start, end, rent) in [
        ("Lisa Park", ymd(2024, 6, 1), ymd(2025, 5, 31), 850.0),
        ("Tom Wright", ymd(2023, 9, 1), ymd(2025, 8, 31), 1050.0),
        ("Rachel Green", ymd(2024, 3, 1), ymd(2026, 2, 28), 1075.0),
    ] {
        portfolio.add_tenant(Tenant::new(downtown, name).with_lease(start, end, rent));
    }

    let mut rumbling = WorkOrder::new(
        maple,
        "Water heater making rumbling noises",
        Priority::High,
        at(ymd(2026, 2, 12), 9),
    )
    .for_system(water_heater)
    .scheduled(ymd(2026, 2, 20));
    rumbling.contractor_id = Some(abc);
    rumbling.estimated_cost = Some(1200.0);

    let mut faucet = WorkOrder::new(
        maple,
        "Kitchen faucet dripping",
        Priority::Low,
        at(ymd(2026, 2, 13), 14),
    )
    .with_status(WorkOrderStatus::Assigned)
    .scheduled(ymd(2026, 2, 25));
    faucet.contractor_id = Some(abc);
    faucet.tenant_id = Some(david);
    faucet.estimated_cost = Some(150.0);

    let mut panel = WorkOrder::new(
        downtown,
        "Electrical panel replacement - URGENT",
        Priority::Emergency,
        at(ymd(2026, 2, 10), 8),
    )
    .with_status(WorkOrderStatus::InProgress)
    .with_category(WorkOrderCategory::Replacement)
    .scheduled(ymd(2026, 2, 18));
    panel.contractor_id = Some(elite);
    panel.estimated_cost = Some(4500.0);

    let mut tune_up = WorkOrder::new(
        oak,
        "Annual HVAC tune-up",
        Priority::Low,
        at(ymd(2025, 1, 3), 10),
    )
    .with_status(WorkOrderStatus::Completed)
    .with_category(WorkOrderCategory::Preventive)
    .scheduled(ymd(2025, 1, 10));
    tune_up.contractor_id = Some(abc);
    tune_up.estimated_cost = Some(200.0);
    tune_up.actual_cost = Some(185.0);
    tune_up.completed_date = Some(ymd(2025, 1, 10));

    let mut gutters = WorkOrder::new(
        maple,
        "Gutter cleaning - Spring",
        Priority::Medium,
        at(ymd(2026, 2, 14), 11),
    )
    .with_category(WorkOrderCategory::Preventive);
    gutters.estimated_cost = Some(300.0);
    gutters.due_date = Some(ymd(2026, 4, 1));

    for order in [rumbling, faucet, panel, tune_up, gutters] {
        portfolio.add_work_order(order);
    }

    let expenses = [
        (maple, ExpenseCategory::Repair, "Emergency pipe repair - Unit A bathroom", 450.0, ymd(2025, 11, 15), "ABC Plumbing"),
        (maple, ExpenseCategory::Preventive, "Furnace annual inspection", 185.0, ymd(2025, 10, 15), "ABC Plumbing & Heating"),
        (oak, ExpenseCategory::Preventive, "HVAC tune-up", 185.0, ymd(2025, 1, 10), "ABC Plumbing & Heating"),
        (downtown, ExpenseCategory::Repair, "Boiler pressure valve replacement", 780.0, ymd(2025, 9, 22), "ABC Plumbing & Heating"),
        (downtown, ExpenseCategory::Cosmetic, "Apt 201 repaint for new tenant", 1200.0, ymd(2025, 8, 1), "Fresh Coat Painting"),
        (maple, ExpenseCategory::Insurance, "Annual property insurance premium", 2400.0, ymd(2025, 1, 1), "State Farm"),
        (oak, ExpenseCategory::Insurance, "Annual property insurance premium", 1800.0, ymd(2025, 1, 1), "State Farm"),
        (downtown, ExpenseCategory::Insurance, "Annual property insurance premium", 4200.0, ymd(2025, 1, 1), "State Farm"),
    ];
    for (property_id, category, description, amount, date, vendor) in expenses {
        portfolio.add_expense(
            Expense::new(property_id, category, description, amount, date).with_vendor(vendor),
        );
    }

    let schedules = [
        (maple, "HVAC Filter Change", 90, ymd(2025, 12, 1), ymd(2026, 3, 1), Season::Any),
        (maple, "Gutter Cleaning", 180, ymd(2025, 10, 15), ymd(2026, 4, 15), Season::Spring),
        (maple, "Smoke Detector Test", 180, ymd(2025, 9, 1), ymd(2026, 3, 1), Season::Any),
        (oak, "HVAC Filter Change", 90, ymd(2026, 1, 10), ymd(2026, 4, 10), Season::Any),
        (downtown, "Boiler Inspection", 365, ymd(2025, 9, 1), ymd(2026, 9, 1), Season::Fall),
        (downtown, "Fire Alarm Testing", 365, ymd(2025, 3, 1), ymd(2026, 3, 1), Season::Any),
    ];
    for (property_id, title, frequency, completed, due, season) in schedules {
        let mut schedule = MaintenanceSchedule::new(property_id, title, frequency)
            .due_on(due)
            .in_season(season);
        schedule.last_completed = Some(completed);
        portfolio.add_schedule(schedule);
    }

    portfolio
}
