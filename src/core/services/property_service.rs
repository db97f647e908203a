//! Write boundary for properties, their systems and tenants.

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::domain::{BuildingSystem, Condition, Displayable, Property, Tenant};
use crate::portfolio::Portfolio;

use super::{require, ScoringService, ServiceError, ServiceResult};

const MIN_ZIP_LEN: usize = 5;

pub struct PropertyService;

impl PropertyService {
    pub fn add_property(portfolio: &mut Portfolio, property: Property) -> ServiceResult<Uuid> {
        require(!property.name.trim().is_empty(), "Property name is required")?;
        require(!property.address.trim().is_empty(), "Address is required")?;
        require(
            property.zip.trim().len() >= MIN_ZIP_LEN,
            "Valid ZIP code required",
        )?;
        require(property.units_count >= 1, "A property has at least one unit")?;
        let label = property.display_label();
        let id = portfolio.add_property(property);
        info!(property = %id, %label, "property created");
        Ok(id)
    }

    /// Stores a system and refreshes the cached scores of its property.
    pub fn add_system(
        portfolio: &mut Portfolio,
        system: BuildingSystem,
        today: NaiveDate,
    ) -> ServiceResult<Uuid> {
        require(!system.name.trim().is_empty(), "System name is required")?;
        if let Some(years) = system.expected_lifespan_years {
            require(years >= 0, "Expected lifespan cannot be negative")?;
        }
        if portfolio.property(system.property_id).is_none() {
            return Err(ServiceError::NotFound("Property".into()));
        }
        let property_id = system.property_id;
        let id = portfolio.add_system(system);
        ScoringService::refresh_property(portfolio, property_id, today)?;
        Ok(id)
    }

    /// Records a service visit, optionally with a newly inspected condition, and rescores.
    pub fn record_service(
        portfolio: &mut Portfolio,
        system_id: Uuid,
        serviced_on: NaiveDate,
        condition: Option<Condition>,
        today: NaiveDate,
    ) -> ServiceResult<u8> {
        let system = portfolio
            .system_mut(system_id)
            .ok_or_else(|| ServiceError::NotFound("System".into()))?;
        require(serviced_on <= today, "Service date cannot be in the future")?;
        system.last_service_date = Some(serviced_on);
        if let Some(condition) = condition {
            system.condition = condition;
        }
        let property_id = system.property_id;
        ScoringService::refresh_property(portfolio, property_id, today)?;
        Ok(portfolio
            .system(system_id)
            .map(|system| system.stored_risk())
            .unwrap_or(0))
    }

    pub fn add_tenant(portfolio: &mut Portfolio, tenant: Tenant) -> ServiceResult<Uuid> {
        require(!tenant.name.trim().is_empty(), "Tenant name is required")?;
        if portfolio.property(tenant.property_id).is_none() {
            return Err(ServiceError::NotFound("Property".into()));
        }
        if let (Some(start), Some(end)) = (tenant.lease_start, tenant.lease_end) {
            require(start <= end, "Lease cannot end before it starts")?;
        }
        Ok(portfolio.add_tenant(tenant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyType, SystemCategory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_property() -> Property {
        Property::new("Maple Street Duplex", "142 Maple Street", PropertyType::Duplex)
            .with_location("Springfield", "IL", "62701")
            .with_units(2)
    }

    #[test]
    fn add_property_validates_zip() {
        let mut portfolio = Portfolio::new("owner");
        let bad = valid_property().with_location("Springfield", "IL", "627");
        let err = PropertyService::add_property(&mut portfolio, bad).expect_err("short zip");
        assert!(err.to_string().contains("ZIP"));
        PropertyService::add_property(&mut portfolio, valid_property()).unwrap();
        assert_eq!(portfolio.properties.len(), 1);
    }

    #[test]
    fn add_system_rejects_negative_lifespan() {
        let today = date(2025, 1, 1);
        let mut portfolio = Portfolio::new("owner");
        let property = PropertyService::add_property(&mut portfolio, valid_property()).unwrap();
        let system = BuildingSystem::new(property, SystemCategory::Roof, "Roof", Condition::Fair)
            .installed(date(2005, 8, 15), -25);
        let err = PropertyService::add_system(&mut portfolio, system, today).expect_err("negative");
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(portfolio.systems.is_empty());
    }

    #[test]
    fn add_system_scores_and_updates_health() {
        let today = date(2025, 1, 1);
        let mut portfolio = Portfolio::new("owner");
        let property = PropertyService::add_property(&mut portfolio, valid_property()).unwrap();
        let system = BuildingSystem::new(property, SystemCategory::Hvac, "Furnace", Condition::Fair)
            .serviced(date(2024, 10, 15));
        PropertyService::add_system(&mut portfolio, system, today).unwrap();
        assert_eq!(portfolio.systems[0].risk_score, Some(30));
        assert_eq!(portfolio.properties[0].health_score, Some(70));
    }

    #[test]
    fn record_service_clears_stale_penalty() {
        let today = date(2025, 1, 1);
        let mut portfolio = Portfolio::new("owner");
        let property = PropertyService::add_property(&mut portfolio, valid_property()).unwrap();
        let system = BuildingSystem::new(property, SystemCategory::Plumbing, "Pump", Condition::Good);
        let id = PropertyService::add_system(&mut portfolio, system, today).unwrap();
        assert_eq!(portfolio.systems[0].risk_score, Some(20));

        let risk =
            PropertyService::record_service(&mut portfolio, id, today, Some(Condition::Excellent), today)
                .unwrap();
        assert_eq!(risk, 0);
        assert_eq!(portfolio.properties[0].health_score, Some(100));
    }

    #[test]
    fn tenant_requires_known_property() {
        let mut portfolio = Portfolio::new("owner");
        let err = PropertyService::add_tenant(&mut portfolio, Tenant::new(Uuid::new_v4(), "Maria"))
            .expect_err("unknown property");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
