//! The in-memory snapshot of one owner's properties and everything attached to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    BuildingSystem, Contractor, Expense, MaintenanceSchedule, Property, Tenant, WorkOrder,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;
pub const UNKNOWN_PROPERTY: &str = "Unknown";

/// Collections already scoped to a single owner. Ownership is enforced by whoever builds
/// the snapshot; nothing here re-checks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: Uuid,
    pub owner: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub systems: Vec<BuildingSystem>,
    #[serde(default)]
    pub work_orders: Vec<WorkOrder>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub maintenance_schedules: Vec<MaintenanceSchedule>,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub contractors: Vec<Contractor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Portfolio::schema_version_default")]
    pub schema_version: u8,
}

impl Portfolio {
    pub fn new(owner: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            properties: Vec::new(),
            systems: Vec::new(),
            work_orders: Vec::new(),
            expenses: Vec::new(),
            maintenance_schedules: Vec::new(),
            tenants: Vec::new(),
            contractors: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_property(&mut self, property: Property) -> Uuid {
        let id = property.id;
        self.properties.push(property);
        self.touch();
        id
    }

    pub fn add_system(&mut self, system: BuildingSystem) -> Uuid {
        let id = system.id;
        self.systems.push(system);
        self.touch();
        id
    }

    pub fn add_work_order(&mut self, work_order: WorkOrder) -> Uuid {
        let id = work_order.id;
        self.work_orders.push(work_order);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_schedule(&mut self, schedule: MaintenanceSchedule) -> Uuid {
        let id = schedule.id;
        self.maintenance_schedules.push(schedule);
        self.touch();
        id
    }

    pub fn add_tenant(&mut self, tenant: Tenant) -> Uuid {
        let id = tenant.id;
        self.tenants.push(tenant);
        self.touch();
        id
    }

    pub fn add_contractor(&mut self, contractor: Contractor) -> Uuid {
        let id = contractor.id;
        self.contractors.push(contractor);
        self.touch();
        id
    }

    pub fn property(&self, id: Uuid) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn property_mut(&mut self, id: Uuid) -> Option<&mut Property> {
        self.properties.iter_mut().find(|property| property.id == id)
    }

    /// Display name for a property id, falling back to `"Unknown"`.
    pub fn property_name(&self, id: Uuid) -> &str {
        self.property(id)
            .map(|property| property.name.as_str())
            .unwrap_or(UNKNOWN_PROPERTY)
    }

    pub fn system(&self, id: Uuid) -> Option<&BuildingSystem> {
        self.systems.iter().find(|system| system.id == id)
    }

    pub fn system_mut(&mut self, id: Uuid) -> Option<&mut BuildingSystem> {
        self.systems.iter_mut().find(|system| system.id == id)
    }

    pub fn work_order_mut(&mut self, id: Uuid) -> Option<&mut WorkOrder> {
        self.work_orders.iter_mut().find(|order| order.id == id)
    }

    pub fn schedule_mut(&mut self, id: Uuid) -> Option<&mut MaintenanceSchedule> {
        self.maintenance_schedules
            .iter_mut()
            .find(|schedule| schedule.id == id)
    }

    pub fn contractor(&self, id: Uuid) -> Option<&Contractor> {
        self.contractors.iter().find(|contractor| contractor.id == id)
    }

    pub fn systems_for(&self, property_id: Uuid) -> impl Iterator<Item = &BuildingSystem> {
        self.systems
            .iter()
            .filter(move |system| system.property_id == property_id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Condition, PropertyType, SystemCategory};

    #[test]
    fn property_name_falls_back_to_unknown() {
        let mut portfolio = Portfolio::new("owner");
        let id = portfolio.add_property(Property::new("Maple", "1 Maple St", PropertyType::Duplex));
        assert_eq!(portfolio.property_name(id), "Maple");
        assert_eq!(portfolio.property_name(Uuid::new_v4()), UNKNOWN_PROPERTY);
    }

    #[test]
    fn systems_for_filters_by_property() {
        let mut portfolio = Portfolio::new("owner");
        let a = portfolio.add_property(Property::new("A", "1 A St", PropertyType::Condo));
        let b = portfolio.add_property(Property::new("B", "2 B St", PropertyType::Condo));
        portfolio.add_system(BuildingSystem::new(a, SystemCategory::Roof, "Roof", Condition::Good));
        portfolio.add_system(BuildingSystem::new(b, SystemCategory::Hvac, "AC", Condition::Fair));
        portfolio.add_system(BuildingSystem::new(a, SystemCategory::Doors, "Door", Condition::Poor));
        assert_eq!(portfolio.systems_for(a).count(), 2);
        assert_eq!(portfolio.systems_for(b).count(), 1);
    }
}
