use crate::utils::error::Result;
use std::io::Write;

/// Stateless text renderer for the health report.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthTrackerView;

impl HealthTrackerView {
    pub fn render_health_report(&self, total_calories_burned: u64, water_consumed_ml: u32) -> String {
        format!(
            "\n--- Health Report ---\n\
             Total Calories Burned: {} calories\n\
             Water Consumed: {} ml\n\
             ---------------------\n\n",
            total_calories_burned, water_consumed_ml
        )
    }

    pub fn display_health_report<W: Write>(
        &self,
        out: &mut W,
        total_calories_burned: u64,
        water_consumed_ml: u32,
    ) -> Result<()> {
        write!(
            out,
            "{}",
            self.render_health_report(total_calories_burned, water_consumed_ml)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let report = HealthTrackerView.render_health_report(350, 1000);
        assert_eq!(
            report,
            "\n--- Health Report ---\nTotal Calories Burned: 350 calories\nWater Consumed: 1000 ml\n---------------------\n\n"
        );
    }

    #[test]
    fn test_display_writes_rendered_report() {
        let mut out = Vec::new();
        HealthTrackerView
            .display_health_report(&mut out, 200, 750)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            HealthTrackerView.render_health_report(200, 750)
        );
    }
}
