use serde::Serialize;
use uuid::Uuid;

use crate::domain::{BuildingSystem, ExpenseCategory, MaintenanceSchedule, WorkOrder};

/// Everything the dashboard screen renders for one owner.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_properties: usize,
    pub total_units: u32,
    pub avg_health_score: u8,
    pub open_work_orders: usize,
    pub urgent_items: usize,
    pub total_expenses_this_year: f64,
    pub total_expenses_last_year: f64,
    pub upcoming_maintenance: Vec<WithProperty<MaintenanceSchedule>>,
    pub critical_systems: Vec<WithProperty<BuildingSystem>>,
    pub recent_work_orders: Vec<WithProperty<WorkOrder>>,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub expenses_by_month: Vec<MonthTotal>,
    pub property_summaries: Vec<PropertySummary>,
}

/// A list entry annotated with the name of the property it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithProperty<T> {
    #[serde(flatten)]
    pub item: T,
    pub property_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub name: ExpenseCategory,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthTotal {
    /// Short month name, e.g. `"Jan"`.
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: Uuid,
    pub name: String,
    pub health_score: u8,
    pub open_work_orders: usize,
    pub total_expenses: f64,
    pub system_count: usize,
    pub tenant_count: usize,
}
