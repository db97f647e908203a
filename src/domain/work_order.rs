use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A unit of maintenance work raised against a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: Uuid,
    pub property_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Uuid>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: WorkOrderCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    /// Present exactly when `status` is `Completed`.
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl WorkOrder {
    pub fn new(
        property_id: Uuid,
        title: impl Into<String>,
        priority: Priority,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            system_id: None,
            contractor_id: None,
            tenant_id: None,
            title: title.into(),
            description: None,
            status: WorkOrderStatus::Open,
            priority,
            category: WorkOrderCategory::Repair,
            estimated_cost: None,
            actual_cost: None,
            scheduled_date: None,
            completed_date: None,
            due_date: None,
            created_at,
        }
    }

    pub fn for_system(mut self, system_id: Uuid) -> Self {
        self.system_id = Some(system_id);
        self
    }

    pub fn with_status(mut self, status: WorkOrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: WorkOrderCategory) -> Self {
        self.category = category;
        self
    }

    pub fn scheduled(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Emergency work that has not been completed (cancelled emergencies still count).
    pub fn is_unresolved_emergency(&self) -> bool {
        self.priority == Priority::Emergency && self.status != WorkOrderStatus::Completed
    }
}

impl Identifiable for WorkOrder {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToProperty for WorkOrder {
    fn property_id(&self) -> Uuid {
        self.property_id
    }
}

impl Displayable for WorkOrder {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.title, self.priority.label(), self.status.label())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    Assigned,
    InProgress,
    AwaitingParts,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::Cancelled)
    }

    pub fn is_open(&self) -> bool {
        !self.is_terminal()
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::Assigned => "assigned",
            WorkOrderStatus::InProgress => "in progress",
            WorkOrderStatus::AwaitingParts => "awaiting parts",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Emergency,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderCategory {
    #[default]
    Repair,
    Replacement,
    Preventive,
    Inspection,
    Cosmetic,
    Emergency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_are_not_open() {
        assert!(WorkOrderStatus::Completed.is_terminal());
        assert!(WorkOrderStatus::Cancelled.is_terminal());
        for status in [
            WorkOrderStatus::Open,
            WorkOrderStatus::Assigned,
            WorkOrderStatus::InProgress,
            WorkOrderStatus::AwaitingParts,
        ] {
            assert!(status.is_open(), "{status:?} should be open");
        }
    }

    #[test]
    fn status_serializes_in_snake_case() {
        let json = serde_json::to_string(&WorkOrderStatus::AwaitingParts).unwrap();
        assert_eq!(json, "\"awaiting_parts\"");
    }
}
