//! Explicit recompute step for the cached `risk_score` and `health_score` columns.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::portfolio::Portfolio;
use crate::scoring::{property_health, score_system};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RescoreReport {
    pub systems_changed: usize,
    pub properties_changed: usize,
}

pub struct ScoringService;

impl ScoringService {
    /// Recomputes every system risk and property health in place.
    pub fn refresh(portfolio: &mut Portfolio, today: NaiveDate) -> RescoreReport {
        let mut report = RescoreReport::default();
        for system in portfolio.systems.iter_mut() {
            let score = score_system(system, today);
            if system.risk_score != Some(score) {
                system.risk_score = Some(score);
                report.systems_changed += 1;
            }
        }
        let ids: Vec<Uuid> = portfolio.properties.iter().map(|p| p.id).collect();
        for id in ids {
            if Self::apply_health(portfolio, id) {
                report.properties_changed += 1;
            }
        }
        if report != RescoreReport::default() {
            portfolio.touch();
        }
        info!(
            systems = report.systems_changed,
            properties = report.properties_changed,
            "refreshed cached scores"
        );
        report
    }

    /// Rescores the systems of one property and its health; returns the new health.
    pub fn refresh_property(
        portfolio: &mut Portfolio,
        property_id: Uuid,
        today: NaiveDate,
    ) -> ServiceResult<u8> {
        if portfolio.property(property_id).is_none() {
            return Err(ServiceError::NotFound(format!("Property {property_id}")));
        }
        for system in portfolio
            .systems
            .iter_mut()
            .filter(|system| system.property_id == property_id)
        {
            system.risk_score = Some(score_system(system, today));
        }
        Self::apply_health(portfolio, property_id);
        portfolio.touch();
        Ok(portfolio
            .property(property_id)
            .and_then(|property| property.health_score)
            .unwrap_or(0))
    }

    fn apply_health(portfolio: &mut Portfolio, property_id: Uuid) -> bool {
        let health = property_health(
            portfolio
                .systems_for(property_id)
                .map(|system| system.stored_risk()),
        );
        match portfolio.property_mut(property_id) {
            Some(property) if property.health_score != Some(health) => {
                property.health_score = Some(health);
                true
            }
            _ => false,
        }
    }
}
