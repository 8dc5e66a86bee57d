pub mod controller;
pub mod factory;
pub mod pedometer;
pub mod tracker;
pub mod view;

pub use crate::domain::model::Activity;
pub use crate::domain::ports::{ExerciseFactory, HealthObserver};

pub use controller::HealthTrackerController;
pub use factory::{RunningFactory, WeightliftingFactory};
pub use pedometer::{Pedometer, PedometerSettings, SharedPedometer};
pub use tracker::HealthTrackerModel;
pub use view::HealthTrackerView;
