//! Risk scoring for individual systems and health rollups for properties.

pub mod health;
pub mod risk;

pub use health::{average_score, property_health, HealthBand};
pub use risk::{
    age_in_years, compare_by_risk, remaining_life, risk_score, score_system, RemainingLife,
    RiskInputs,
};
