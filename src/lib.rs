pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TrackerConfig;

pub use crate::adapters::MobileApp;
pub use crate::app::{Session, SessionState};
pub use crate::core::{
    Activity, ExerciseFactory, HealthObserver, HealthTrackerController, HealthTrackerModel,
    HealthTrackerView, Pedometer, PedometerSettings, RunningFactory, SharedPedometer,
    WeightliftingFactory,
};
pub use crate::utils::console::{Console, SharedBuffer};
pub use crate::utils::error::{HealthError, Result};
