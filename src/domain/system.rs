use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A physical building system (furnace, roof, panel, ...) installed at a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSystem {
    pub id: Uuid,
    pub property_id: Uuid,
    pub category: SystemCategory,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub install_date: Option<NaiveDate>,
    #[serde(default)]
    pub expected_lifespan_years: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiration: Option<NaiveDate>,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub last_service_date: Option<NaiveDate>,
    /// Cached 0–100 risk; higher means more urgent.
    #[serde(default)]
    pub risk_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BuildingSystem {
    pub fn new(
        property_id: Uuid,
        category: SystemCategory,
        name: impl Into<String>,
        condition: Condition,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            category,
            name: name.into(),
            make: None,
            model: None,
            serial_number: None,
            install_date: None,
            expected_lifespan_years: None,
            warranty_expiration: None,
            condition,
            last_service_date: None,
            risk_score: Some(0),
            notes: None,
        }
    }

    pub fn installed(mut self, date: NaiveDate, lifespan_years: i32) -> Self {
        self.install_date = Some(date);
        self.expected_lifespan_years = Some(lifespan_years);
        self
    }

    pub fn serviced(mut self, date: NaiveDate) -> Self {
        self.last_service_date = Some(date);
        self
    }

    pub fn with_risk(mut self, score: u8) -> Self {
        self.risk_score = Some(score);
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Cached risk clamped into range; a missing score reads as 0.
    pub fn stored_risk(&self) -> u8 {
        self.risk_score.unwrap_or(0).min(100)
    }
}

impl Identifiable for BuildingSystem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BuildingSystem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToProperty for BuildingSystem {
    fn property_id(&self) -> Uuid {
        self.property_id
    }
}

impl Displayable for BuildingSystem {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.category.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SystemCategory {
    Hvac,
    Plumbing,
    Electrical,
    Roof,
    Foundation,
    Windows,
    Doors,
    Insulation,
    FireSafety,
    Elevator,
    Appliance,
    Exterior,
    Interior,
}

impl SystemCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SystemCategory::Hvac => "HVAC",
            SystemCategory::Plumbing => "Plumbing",
            SystemCategory::Electrical => "Electrical",
            SystemCategory::Roof => "Roof",
            SystemCategory::Foundation => "Foundation",
            SystemCategory::Windows => "Windows",
            SystemCategory::Doors => "Doors",
            SystemCategory::Insulation => "Insulation",
            SystemCategory::FireSafety => "Fire Safety",
            SystemCategory::Elevator => "Elevator",
            SystemCategory::Appliance => "Appliance",
            SystemCategory::Exterior => "Exterior",
            SystemCategory::Interior => "Interior",
        }
    }
}

/// Inspected physical condition, best to worst.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
    Critical,
}
