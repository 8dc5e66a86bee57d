use crate::core::pedometer::{DIET_REMINDER_CALORIES, WATER_REMINDER_STEPS};
use crate::core::controller::WATER_CONSUMED_ML;
use crate::core::tracker::STEPS_PER_ACTIVITY;
use crate::core::PedometerSettings;
use crate::utils::error::{HealthError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_WATER_CONSUMED_ML: u32 = 10_000;

/// Simulation constants, loadable from an optional TOML file.
/// Missing sections and keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub pedometer: PedometerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PedometerConfig {
    pub steps_per_activity: u64,
    pub water_reminder_steps: u64,
    pub diet_reminder_calories: u64,
}

impl Default for PedometerConfig {
    fn default() -> Self {
        Self {
            steps_per_activity: STEPS_PER_ACTIVITY,
            water_reminder_steps: WATER_REMINDER_STEPS,
            diet_reminder_calories: DIET_REMINDER_CALORIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub water_consumed_ml: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            water_consumed_ml: WATER_CONSUMED_ML,
        }
    }
}

impl TrackerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HealthError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn pedometer_settings(&self) -> PedometerSettings {
        PedometerSettings {
            water_reminder_steps: self.pedometer.water_reminder_steps,
            diet_reminder_calories: self.pedometer.diet_reminder_calories,
        }
    }

    pub fn steps_per_activity(&self) -> u64 {
        self.pedometer.steps_per_activity
    }

    pub fn water_consumed_ml(&self) -> u32 {
        self.report.water_consumed_ml
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number(
            "pedometer.steps_per_activity",
            self.pedometer.steps_per_activity,
            1,
        )?;
        validate_range(
            "report.water_consumed_ml",
            self.report.water_consumed_ml,
            0,
            MAX_WATER_CONSUMED_ML,
        )?;
        Ok(())
    }
}
