use crate::core::{Activity, HealthTrackerModel, HealthTrackerView};
use crate::utils::error::Result;

/// Simulated water intake shown on every report; not tracked state.
pub const WATER_CONSUMED_ML: u32 = 1000;

pub struct HealthTrackerController {
    model: HealthTrackerModel,
    view: HealthTrackerView,
    water_consumed_ml: u32,
}

impl HealthTrackerController {
    pub fn new(model: HealthTrackerModel, view: HealthTrackerView) -> Self {
        Self {
            model,
            view,
            water_consumed_ml: WATER_CONSUMED_ML,
        }
    }

    pub fn with_water_consumed(mut self, water_consumed_ml: u32) -> Self {
        self.water_consumed_ml = water_consumed_ml;
        self
    }

    /// Records into the model, then renders a report with the fresh total
    /// on the model's console.
    pub fn record_activity(&mut self, activity: Activity) -> Result<()> {
        self.model.record_activity(activity)?;

        let mut console = self.model.console().clone();
        self.view.display_health_report(
            &mut console,
            self.model.calculate_total_calories(),
            self.water_consumed_ml,
        )
    }

    pub fn model(&self) -> &HealthTrackerModel {
        &self.model
    }

    pub fn water_consumed_ml(&self) -> u32 {
        self.water_consumed_ml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExerciseFactory, Pedometer, PedometerSettings, RunningFactory};
    use crate::utils::console::{Console, SharedBuffer};

    #[test]
    fn test_controller_routes_to_model() {
        let pedometer = Pedometer::shared(PedometerSettings::default());
        let model = HealthTrackerModel::new(pedometer.clone());
        let mut controller = HealthTrackerController::new(model, HealthTrackerView);

        controller.record_activity(RunningFactory.create_exercise()).unwrap();
        controller.record_activity(RunningFactory.create_exercise()).unwrap();

        assert_eq!(controller.model().calculate_total_calories(), 400);
        assert_eq!(pedometer.borrow().total_steps(), 1000);
        assert_eq!(controller.water_consumed_ml(), WATER_CONSUMED_ML);
    }

    #[test]
    fn test_report_follows_recorded_line() {
        let buffer = SharedBuffer::new();
        let model = HealthTrackerModel::new(Pedometer::shared(PedometerSettings::default()))
            .with_console(Console::new(buffer.clone()));
        let mut controller =
            HealthTrackerController::new(model, HealthTrackerView).with_water_consumed(600);

        controller.record_activity(RunningFactory.create_exercise()).unwrap();

        assert_eq!(
            buffer.contents(),
            format!(
                "Activity recorded: Running, Duration: 30 minutes, Calories Burned: 200\n{}",
                HealthTrackerView.render_health_report(200, 600)
            )
        );
    }
}
