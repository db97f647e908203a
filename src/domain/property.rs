use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A rental property owned by the portfolio holder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<u32>,
    #[serde(default = "default_units")]
    pub units_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// Cached 0–100 rollup of the property's systems.
    #[serde(default)]
    pub health_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_units() -> u32 {
    1
}

impl Property {
    /// Creates a single-unit property with a perfect starting health score.
    pub fn new(name: impl Into<String>, address: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            property_type: kind,
            year_built: None,
            sqft: None,
            units_count: default_units(),
            purchase_price: None,
            current_value: None,
            health_score: Some(100),
            notes: None,
        }
    }

    pub fn with_location(
        mut self,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        self.city = city.into();
        self.state = state.into();
        self.zip = zip.into();
        self
    }

    pub fn with_units(mut self, units: u32) -> Self {
        self.units_count = units;
        self
    }

    pub fn with_health(mut self, score: u8) -> Self {
        self.health_score = Some(score);
        self
    }
}

impl Identifiable for Property {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Property {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Property {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.address)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Duplex,
    Triplex,
    Apartment,
    Commercial,
    Condo,
}
