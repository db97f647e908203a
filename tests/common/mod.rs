#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;
use upkeep_core::{
    config::ConfigManager,
    domain::{BuildingSystem, Condition, Property, PropertyType, SystemCategory},
    portfolio::Portfolio,
    storage::JsonStorage,
};
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an initialized store and a config manager backed by a unique directory.
pub fn setup_test_env() -> (JsonStorage, ConfigManager) {
    let base = temp_base();
    let storage = JsonStorage::open(Some(base.clone()), Some(3)).expect("open json storage");
    let config = ConfigManager::with_base_dir(base).expect("config manager for temp dir");
    (storage, config)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn property(portfolio: &mut Portfolio, name: &str) -> Uuid {
    portfolio.add_property(
        Property::new(name, format!("1 {name} Way"), PropertyType::SingleFamily)
            .with_location("Springfield", "IL", "62701"),
    )
}

/// Adds a system carrying a cached risk score.
pub fn system_with_risk(portfolio: &mut Portfolio, property_id: Uuid, name: &str, risk: u8) -> Uuid {
    portfolio.add_system(
        BuildingSystem::new(property_id, SystemCategory::Hvac, name, Condition::Fair).with_risk(risk),
    )
}
