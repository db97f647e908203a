//! Write boundary for work orders, including the completion-date rule.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::domain::{WorkOrder, WorkOrderStatus};
use crate::portfolio::Portfolio;

use super::{require, ServiceError, ServiceResult};

/// Optional narrowing for work-order listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkOrderFilter {
    pub property_id: Option<Uuid>,
    pub status: Option<WorkOrderStatus>,
}

pub struct WorkOrderService;

impl WorkOrderService {
    /// Validates and stores a new work order.
    pub fn add(
        portfolio: &mut Portfolio,
        mut order: WorkOrder,
        today: NaiveDate,
    ) -> ServiceResult<Uuid> {
        require(!order.title.trim().is_empty(), "Title is required")?;
        if portfolio.property(order.property_id).is_none() {
            return Err(ServiceError::NotFound("Property".into()));
        }
        if let Some(system_id) = order.system_id {
            let system = portfolio
                .system(system_id)
                .ok_or_else(|| ServiceError::NotFound("System".into()))?;
            require(
                system.property_id == order.property_id,
                "System belongs to a different property",
            )?;
        }
        if let Some(contractor_id) = order.contractor_id {
            if portfolio.contractor(contractor_id).is_none() {
                return Err(ServiceError::NotFound("Contractor".into()));
            }
        }
        if let Some(cost) = order.estimated_cost {
            require(cost >= 0.0, "Estimated cost cannot be negative")?;
        }
        let (status, completed_on) = (order.status, order.completed_date);
        apply_status(&mut order, status, completed_on, today);
        let id = portfolio.add_work_order(order);
        info!(work_order = %id, "work order created");
        Ok(id)
    }

    /// Moves a work order to `status`. Completing stamps `completed_on` (or `today`);
    /// any other status clears the completion date.
    pub fn update_status(
        portfolio: &mut Portfolio,
        id: Uuid,
        status: WorkOrderStatus,
        completed_on: Option<NaiveDate>,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        let order = portfolio
            .work_order_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Work order".into()))?;
        let previous = order.status;
        apply_status(order, status, completed_on, today);
        portfolio.touch();
        info!(work_order = %id, from = ?previous, to = ?status, "work order status changed");
        Ok(())
    }

    /// Attaches a contractor; an open order becomes assigned.
    pub fn assign(portfolio: &mut Portfolio, id: Uuid, contractor_id: Uuid) -> ServiceResult<()> {
        if portfolio.contractor(contractor_id).is_none() {
            return Err(ServiceError::NotFound("Contractor".into()));
        }
        let order = portfolio
            .work_order_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Work order".into()))?;
        require(!order.status.is_terminal(), "Work order is already closed")?;
        order.contractor_id = Some(contractor_id);
        if order.status == WorkOrderStatus::Open {
            order.status = WorkOrderStatus::Assigned;
        }
        portfolio.touch();
        Ok(())
    }

    /// Newest first, optionally narrowed to one property and/or status.
    pub fn list<'a>(portfolio: &'a Portfolio, filter: &WorkOrderFilter) -> Vec<&'a WorkOrder> {
        let mut orders: Vec<&WorkOrder> = portfolio
            .work_orders
            .iter()
            .filter(|order| filter.property_id.map_or(true, |id| order.property_id == id))
            .filter(|order| filter.status.map_or(true, |status| order.status == status))
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Work orders scheduled for a calendar day.
    pub fn scheduled_on(portfolio: &Portfolio, date: NaiveDate) -> Vec<&WorkOrder> {
        portfolio
            .work_orders
            .iter()
            .filter(|order| order.scheduled_date == Some(date))
            .collect()
    }
}

fn apply_status(
    order: &mut WorkOrder,
    status: WorkOrderStatus,
    completed_on: Option<NaiveDate>,
    today: NaiveDate,
) {
    order.status = status;
    order.completed_date = match status {
        WorkOrderStatus::Completed => Some(completed_on.or(order.completed_date).unwrap_or(today)),
        _ => None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contractor, Priority, Property, PropertyType};
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(9, 0, 0).unwrap()
    }

    fn portfolio_with_property() -> (Portfolio, Uuid) {
        let mut portfolio = Portfolio::new("owner");
        let id = portfolio.add_property(Property::new("Maple", "142 Maple", PropertyType::Duplex));
        (portfolio, id)
    }

    #[test]
    fn completing_sets_date_and_reopening_clears_it() {
        let today = date(2025, 3, 4);
        let (mut portfolio, property) = portfolio_with_property();
        let id = WorkOrderService::add(
            &mut portfolio,
            WorkOrder::new(property, "Leaky faucet", Priority::Low, at(2025, 3, 1)),
            today,
        )
        .unwrap();

        WorkOrderService::update_status(&mut portfolio, id, WorkOrderStatus::Completed, None, today)
            .unwrap();
        assert_eq!(portfolio.work_orders[0].completed_date, Some(today));

        WorkOrderService::update_status(
            &mut portfolio,
            id,
            WorkOrderStatus::InProgress,
            None,
            today,
        )
        .unwrap();
        assert_eq!(portfolio.work_orders[0].completed_date, None);
    }

    #[test]
    fn add_normalizes_stray_completion_date() {
        let today = date(2025, 3, 4);
        let (mut portfolio, property) = portfolio_with_property();
        let mut order = WorkOrder::new(property, "Paint", Priority::Low, at(2025, 3, 1));
        order.completed_date = Some(date(2025, 1, 1));
        WorkOrderService::add(&mut portfolio, order, today).unwrap();
        assert_eq!(portfolio.work_orders[0].completed_date, None);
    }

    #[test]
    fn add_rejects_unknown_property_and_blank_title() {
        let today = date(2025, 3, 4);
        let (mut portfolio, property) = portfolio_with_property();
        let err = WorkOrderService::add(
            &mut portfolio,
            WorkOrder::new(Uuid::new_v4(), "Roof", Priority::High, at(2025, 3, 1)),
            today,
        )
        .expect_err("unknown property");
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = WorkOrderService::add(
            &mut portfolio,
            WorkOrder::new(property, "  ", Priority::High, at(2025, 3, 1)),
            today,
        )
        .expect_err("blank title");
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn assign_moves_open_order_to_assigned() {
        let today = date(2025, 3, 4);
        let (mut portfolio, property) = portfolio_with_property();
        let contractor = portfolio.add_contractor(Contractor::new("ABC Plumbing"));
        let id = WorkOrderService::add(
            &mut portfolio,
            WorkOrder::new(property, "Water heater", Priority::High, at(2025, 3, 1)),
            today,
        )
        .unwrap();
        WorkOrderService::assign(&mut portfolio, id, contractor).unwrap();
        assert_eq!(portfolio.work_orders[0].status, WorkOrderStatus::Assigned);
        assert_eq!(portfolio.work_orders[0].contractor_id, Some(contractor));
    }

    #[test]
    fn list_filters_and_orders_newest_first() {
        let today = date(2025, 3, 4);
        let (mut portfolio, property) = portfolio_with_property();
        for (day, title) in [(1, "first"), (3, "third"), (2, "second")] {
            WorkOrderService::add(
                &mut portfolio,
                WorkOrder::new(property, title, Priority::Medium, at(2025, 3, day))
                    .scheduled(date(2025, 3, 10)),
                today,
            )
            .unwrap();
        }
        let titles: Vec<&str> = WorkOrderService::list(&portfolio, &WorkOrderFilter::default())
            .iter()
            .map(|order| order.title.as_str())
            .collect();
        assert_eq!(titles, vec!["third", "second", "first"]);

        let none = WorkOrderFilter {
            status: Some(WorkOrderStatus::Completed),
            ..WorkOrderFilter::default()
        };
        assert!(WorkOrderService::list(&portfolio, &none).is_empty());
        assert_eq!(WorkOrderService::scheduled_on(&portfolio, date(2025, 3, 10)).len(), 3);
        assert!(WorkOrderService::scheduled_on(&portfolio, date(2025, 3, 11)).is_empty());
    }
}
