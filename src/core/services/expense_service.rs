use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Displayable, Expense, ExpenseCategory};
use crate::portfolio::Portfolio;

use super::{require, ServiceError, ServiceResult};

/// Narrowing applied to expense summaries; `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    pub property_id: Option<Uuid>,
    pub category: Option<ExpenseCategory>,
    pub year: Option<i32>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.property_id.map_or(true, |id| expense.property_id == id)
            && self.category.map_or(true, |category| expense.category == category)
            && self.year.map_or(true, |year| expense.in_year(year))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total: f64,
    pub deductible_total: f64,
    pub count: usize,
}

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(portfolio: &mut Portfolio, expense: Expense) -> ServiceResult<Uuid> {
        require(
            expense.amount.is_finite() && expense.amount > 0.0,
            "Amount must be positive",
        )?;
        require(!expense.description.trim().is_empty(), "Description is required")?;
        if portfolio.property(expense.property_id).is_none() {
            return Err(ServiceError::NotFound("Property".into()));
        }
        let label = expense.display_label();
        let id = portfolio.add_expense(expense);
        info!(expense = %id, %label, "expense recorded");
        Ok(id)
    }

    pub fn summarize(portfolio: &Portfolio, filter: &ExpenseFilter) -> ExpenseSummary {
        portfolio
            .expenses
            .iter()
            .filter(|expense| filter.matches(expense))
            .fold(ExpenseSummary::default(), |mut summary, expense| {
                summary.total += expense.amount;
                if expense.is_deductible {
                    summary.deductible_total += expense.amount;
                }
                summary.count += 1;
                summary
            })
    }
}
