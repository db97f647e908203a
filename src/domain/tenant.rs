use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub property_id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Tenant {
    pub fn new(property_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            name: name.into(),
            email: None,
            phone: None,
            lease_start: None,
            lease_end: None,
            monthly_rent: None,
            deposit_amount: None,
            is_active: default_active(),
        }
    }

    pub fn with_lease(mut self, start: NaiveDate, end: NaiveDate, rent: f64) -> Self {
        self.lease_start = Some(start);
        self.lease_end = Some(end);
        self.monthly_rent = Some(rent);
        self.deposit_amount = Some(rent);
        self
    }

    pub fn moved_out(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl Identifiable for Tenant {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Tenant {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToProperty for Tenant {
    fn property_id(&self) -> Uuid {
        self.property_id
    }
}
