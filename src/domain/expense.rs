use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Money spent on a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub property_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<Uuid>,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default = "default_deductible")]
    pub is_deductible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

fn default_deductible() -> bool {
    true
}

impl Expense {
    pub fn new(
        property_id: Uuid,
        category: ExpenseCategory,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            work_order_id: None,
            contractor_id: None,
            category,
            description: description.into(),
            amount,
            date,
            is_deductible: default_deductible(),
            vendor: None,
            payment_method: None,
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn non_deductible(mut self) -> Self {
        self.is_deductible = false;
        self
    }

    /// Calendar-year membership of the expense date.
    pub fn in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToProperty for Expense {
    fn property_id(&self) -> Uuid {
        self.property_id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} {:.2} ({})", self.date, self.amount, self.category.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Repair,
    Replacement,
    Preventive,
    Inspection,
    Cosmetic,
    Utilities,
    Insurance,
    Tax,
    Mortgage,
    Management,
    Other,
}

impl ExpenseCategory {
    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Repair => "repair",
            ExpenseCategory::Replacement => "replacement",
            ExpenseCategory::Preventive => "preventive",
            ExpenseCategory::Inspection => "inspection",
            ExpenseCategory::Cosmetic => "cosmetic",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Tax => "tax",
            ExpenseCategory::Mortgage => "mortgage",
            ExpenseCategory::Management => "management",
            ExpenseCategory::Other => "other",
        }
    }
}
