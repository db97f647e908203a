pub mod common;
pub mod contractor;
pub mod expense;
pub mod maintenance;
pub mod property;
pub mod system;
pub mod tenant;
pub mod work_order;

pub use common::{BelongsToProperty, Displayable, Identifiable, NamedEntity};
pub use contractor::Contractor;
pub use expense::{Expense, ExpenseCategory};
pub use maintenance::{MaintenanceSchedule, Season};
pub use property::{Property, PropertyType};
pub use system::{BuildingSystem, Condition, SystemCategory};
pub use tenant::Tenant;
pub use work_order::{Priority, WorkOrder, WorkOrderCategory, WorkOrderStatus};
