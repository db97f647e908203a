use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A service company the owner hires for work orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    pub id: Uuid,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub jobs_completed: u32,
    #[serde(default)]
    pub is_preferred: bool,
}

impl Contractor {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_name: company_name.into(),
            contact_name: None,
            email: None,
            phone: None,
            specialty: None,
            rating: 0.0,
            jobs_completed: 0,
            is_preferred: false,
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn preferred(mut self) -> Self {
        self.is_preferred = true;
        self
    }
}

impl Identifiable for Contractor {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Contractor {
    fn name(&self) -> &str {
        &self.company_name
    }
}
