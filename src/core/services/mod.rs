pub mod dashboard_service;
pub mod expense_service;
pub mod maintenance_service;
pub mod property_service;
pub mod scoring_service;
pub mod work_order_service;

pub use dashboard_service::DashboardService;
pub use expense_service::{ExpenseFilter, ExpenseService, ExpenseSummary};
pub use maintenance_service::MaintenanceService;
pub use property_service::PropertyService;
pub use scoring_service::{RescoreReport, ScoringService};
pub use work_order_service::{WorkOrderFilter, WorkOrderService};

use crate::errors::UpkeepError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] UpkeepError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub(crate) fn require(condition: bool, message: impl Into<String>) -> ServiceResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ServiceError::Validation(message.into()))
    }
}
