use crate::domain::model::Activity;

/// Receives pedometer notifications. Callbacks run synchronously in
/// registration order and must not call back into the pedometer.
pub trait HealthObserver {
    fn update(&self, steps: u64, calories_burned: u64);
    fn water_reminder(&self);
    fn diet_reminder(&self);
}

pub trait ExerciseFactory {
    fn create_exercise(&self) -> Activity;
}
