use serde::{Deserialize, Serialize};

/// Health of a property with no recorded systems.
pub const PRISTINE_HEALTH: u8 = 100;

/// Rolls system risk scores up into a 0–100 property health score: the inverse of the
/// mean risk.
pub fn property_health<I>(risks: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = risks
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), risk| {
            (sum + risk.min(100) as u32, count + 1)
        });
    if count == 0 {
        return PRISTINE_HEALTH;
    }
    let mean = (sum as f64 / count as f64).round() as i32;
    (100 - mean).clamp(0, 100) as u8
}

/// Arithmetic mean rounded to the nearest integer; 0 for an empty slice.
pub fn average_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|score| *score as u32).sum();
    (sum as f64 / scores.len() as f64).round().clamp(0.0, 100.0) as u8
}

/// Coarse grading used when presenting health scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Healthy,
    Fair,
    AtRisk,
    Critical,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => HealthBand::Healthy,
            60..=79 => HealthBand::Fair,
            40..=59 => HealthBand::AtRisk,
            _ => HealthBand::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::Fair => "fair",
            HealthBand::AtRisk => "at risk",
            HealthBand::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_without_systems_is_pristine() {
        assert_eq!(property_health(Vec::<u8>::new()), PRISTINE_HEALTH);
    }

    #[test]
    fn health_inverts_mean_risk() {
        assert_eq!(property_health([60, 78, 95, 20]), 37);
        assert_eq!(property_health([8, 3, 2]), 96);
    }

    #[test]
    fn out_of_range_risk_is_clamped() {
        assert_eq!(property_health([250, 250]), 0);
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(average_score(&[]), 0);
        assert_eq!(average_score(&[72, 89, 58]), 73);
        assert_eq!(average_score(&[1, 2]), 2);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(HealthBand::from_score(100), HealthBand::Healthy);
        assert_eq!(HealthBand::from_score(80), HealthBand::Healthy);
        assert_eq!(HealthBand::from_score(79), HealthBand::Fair);
        assert_eq!(HealthBand::from_score(40), HealthBand::AtRisk);
        assert_eq!(HealthBand::from_score(39), HealthBand::Critical);
    }
}
