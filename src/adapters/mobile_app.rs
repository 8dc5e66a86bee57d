use crate::utils::console::Console;
use crate::domain::ports::HealthObserver;
use std::io::Write;

/// Console stand-in for a phone app that mirrors pedometer events.
#[derive(Clone, Default)]
pub struct MobileApp {
    console: Console,
}

impl MobileApp {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn step_message(steps: u64) -> String {
        format!("Mobile App: You've taken {} steps today. Keep it up!", steps)
    }

    pub fn water_message() -> &'static str {
        "Mobile App: Reminder - Stay hydrated! Drink water."
    }

    pub fn diet_message() -> &'static str {
        "Mobile App: Reminder - Consider having a healthy meal to refuel your energy."
    }

    // Observer callbacks have no error channel; a failed write is logged.
    fn emit(&self, line: &str) {
        let mut console = self.console.clone();
        if let Err(e) = writeln!(console, "{}", line) {
            tracing::warn!("⚠️ mobile app notification not written: {}", e);
        }
    }
}

impl HealthObserver for MobileApp {
    fn update(&self, steps: u64, _calories_burned: u64) {
        self.emit(&Self::step_message(steps));
    }

    fn water_reminder(&self) {
        self.emit(Self::water_message());
    }

    fn diet_reminder(&self) {
        self.emit(Self::diet_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::console::SharedBuffer;

    #[test]
    fn test_notifications_written_in_call_order() {
        let buffer = SharedBuffer::new();
        let app = MobileApp::new(Console::new(buffer.clone()));

        app.update(1500, 350);
        app.water_reminder();
        app.diet_reminder();

        assert_eq!(
            buffer.contents(),
            "Mobile App: You've taken 1500 steps today. Keep it up!\n\
             Mobile App: Reminder - Stay hydrated! Drink water.\n\
             Mobile App: Reminder - Consider having a healthy meal to refuel your energy.\n"
        );
    }
}
