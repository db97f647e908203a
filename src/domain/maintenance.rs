use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Recurring preventive task for a property or one of its systems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    pub id: Uuid,
    pub property_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<Uuid>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency_days: i64,
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
    #[serde(default)]
    pub next_due: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub season: Season,
}

fn default_active() -> bool {
    true
}

impl MaintenanceSchedule {
    pub fn new(property_id: Uuid, title: impl Into<String>, frequency_days: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            system_id: None,
            title: title.into(),
            description: None,
            frequency_days,
            last_completed: None,
            next_due: None,
            is_active: default_active(),
            season: Season::Any,
        }
    }

    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.next_due = Some(date);
        self
    }

    pub fn in_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Active and carrying a due date.
    pub fn is_upcoming(&self) -> bool {
        self.is_active && self.next_due.is_some()
    }
}

impl Identifiable for MaintenanceSchedule {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToProperty for MaintenanceSchedule {
    fn property_id(&self) -> Uuid {
        self.property_id
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    #[default]
    Any,
}
