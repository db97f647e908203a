use chrono::{Duration, NaiveDate};
use tracing::info;
use uuid::Uuid;

use crate::domain::MaintenanceSchedule;
use crate::portfolio::Portfolio;

use super::{require, ServiceError, ServiceResult};

pub struct MaintenanceService;

impl MaintenanceService {
    pub fn add(portfolio: &mut Portfolio, schedule: MaintenanceSchedule) -> ServiceResult<Uuid> {
        require(!schedule.title.trim().is_empty(), "Title is required")?;
        require(schedule.frequency_days > 0, "Frequency must be at least one day")?;
        if portfolio.property(schedule.property_id).is_none() {
            return Err(ServiceError::NotFound("Property".into()));
        }
        if let Some(system_id) = schedule.system_id {
            let system = portfolio
                .system(system_id)
                .ok_or_else(|| ServiceError::NotFound("System".into()))?;
            require(
                system.property_id == schedule.property_id,
                "System belongs to a different property",
            )?;
        }
        Ok(portfolio.add_schedule(schedule))
    }

    /// Marks the task done today and rolls `next_due` forward by one period.
    pub fn complete(
        portfolio: &mut Portfolio,
        id: Uuid,
        today: NaiveDate,
    ) -> ServiceResult<NaiveDate> {
        let schedule = portfolio
            .schedule_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Maintenance schedule".into()))?;
        require(schedule.frequency_days > 0, "Frequency must be at least one day")?;
        let next_due = today + Duration::days(schedule.frequency_days);
        schedule.last_completed = Some(today);
        schedule.next_due = Some(next_due);
        portfolio.touch();
        info!(schedule = %id, %next_due, "maintenance completed");
        Ok(next_due)
    }

    /// Active tasks whose due date has passed, most overdue first.
    pub fn overdue(portfolio: &Portfolio, today: NaiveDate) -> Vec<&MaintenanceSchedule> {
        let mut overdue: Vec<&MaintenanceSchedule> = portfolio
            .maintenance_schedules
            .iter()
            .filter(|schedule| schedule.is_active)
            .filter(|schedule| schedule.next_due.map_or(false, |due| due < today))
            .collect();
        overdue.sort_by_key(|schedule| schedule.next_due);
        overdue
    }
}
