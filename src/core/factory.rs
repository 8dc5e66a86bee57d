use crate::core::{Activity, ExerciseFactory};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunningFactory;

impl ExerciseFactory for RunningFactory {
    fn create_exercise(&self) -> Activity {
        Activity::new("Running", 30, 200)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightliftingFactory;

impl ExerciseFactory for WeightliftingFactory {
    fn create_exercise(&self) -> Activity {
        Activity::new("Weightlifting", 45, 150)
    }
}
