use crate::core::{Activity, SharedPedometer};
use crate::utils::console::Console;
use crate::utils::error::Result;
use std::io::Write;

/// Simulated steps credited per recorded activity, whatever its type.
pub const STEPS_PER_ACTIVITY: u64 = 500;

/// Stores recorded activities and forwards each one to the shared pedometer.
pub struct HealthTrackerModel {
    activities: Vec<Activity>,
    pedometer: SharedPedometer,
    steps_per_activity: u64,
    console: Console,
}

impl HealthTrackerModel {
    pub fn new(pedometer: SharedPedometer) -> Self {
        Self {
            activities: Vec::new(),
            pedometer,
            steps_per_activity: STEPS_PER_ACTIVITY,
            console: Console::stdout(),
        }
    }

    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    pub fn with_steps_per_activity(mut self, steps: u64) -> Self {
        self.steps_per_activity = steps;
        self
    }

    pub fn record_activity(&mut self, activity: Activity) -> Result<()> {
        let calories = u64::from(activity.calories_burned());
        writeln!(self.console, "Activity recorded: {}", activity)?;
        tracing::debug!(name = activity.name(), calories, "activity stored");
        self.activities.push(activity);

        self.pedometer
            .borrow_mut()
            .record_steps(self.steps_per_activity, calories);
        Ok(())
    }

    pub fn calculate_total_calories(&self) -> u64 {
        self.activities
            .iter()
            .map(|a| u64::from(a.calories_burned()))
            .sum()
    }

    /// Recorded activities, oldest first.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn pedometer(&self) -> &SharedPedometer {
        &self.pedometer
    }

    pub fn console(&self) -> &Console {
        &self.console
    }
}
