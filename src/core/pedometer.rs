use crate::core::HealthObserver;
use std::cell::RefCell;
use std::rc::Rc;

pub const WATER_REMINDER_STEPS: u64 = 5000;
pub const DIET_REMINDER_CALORIES: u64 = 300;

/// Handle to the one pedometer every component shares.
pub type SharedPedometer = Rc<RefCell<Pedometer>>;

thread_local! {
    static INSTANCE: SharedPedometer = Rc::new(RefCell::new(Pedometer::new(PedometerSettings::default())));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedometerSettings {
    /// Water reminder fires while total steps are strictly above this.
    pub water_reminder_steps: u64,
    /// Diet reminder fires while total calories are strictly above this.
    pub diet_reminder_calories: u64,
}

impl Default for PedometerSettings {
    fn default() -> Self {
        Self {
            water_reminder_steps: WATER_REMINDER_STEPS,
            diet_reminder_calories: DIET_REMINDER_CALORIES,
        }
    }
}

/// Accumulates steps and calories and notifies observers on every recording.
///
/// Totals only ever grow. Once a reminder threshold is crossed it stays
/// crossed, so the reminder fires again on each later `record_steps` call.
pub struct Pedometer {
    observers: Vec<Rc<dyn HealthObserver>>,
    total_steps: u64,
    total_calories_burned: u64,
    settings: PedometerSettings,
}

impl Pedometer {
    pub fn new(settings: PedometerSettings) -> Self {
        Self {
            observers: Vec::new(),
            total_steps: 0,
            total_calories_burned: 0,
            settings,
        }
    }

    /// Fresh shared handle, for callers that inject the pedometer explicitly.
    pub fn shared(settings: PedometerSettings) -> SharedPedometer {
        Rc::new(RefCell::new(Self::new(settings)))
    }

    /// The process-wide pedometer, created on first access.
    ///
    /// The program is single-threaded, so the main thread's instance is the
    /// only one that ever exists.
    pub fn instance() -> SharedPedometer {
        INSTANCE.with(Rc::clone)
    }

    pub fn apply_settings(&mut self, settings: PedometerSettings) {
        tracing::debug!(?settings, "pedometer settings applied");
        self.settings = settings;
    }

    pub fn settings(&self) -> PedometerSettings {
        self.settings
    }

    pub fn add_observer(&mut self, observer: Rc<dyn HealthObserver>) {
        self.observers.push(observer);
        tracing::debug!("observer registered ({} total)", self.observers.len());
    }

    /// Removal is not supported; registered observers stay for the
    /// pedometer's lifetime.
    pub fn remove_observer(&mut self, _observer: &Rc<dyn HealthObserver>) {
        tracing::debug!("remove_observer is a no-op; observer stays registered");
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn total_calories_burned(&self) -> u64 {
        self.total_calories_burned
    }

    pub fn record_steps(&mut self, steps: u64, calories_burned: u64) {
        self.total_steps = self.total_steps.saturating_add(steps);
        self.total_calories_burned = self.total_calories_burned.saturating_add(calories_burned);
        tracing::debug!(
            total_steps = self.total_steps,
            total_calories = self.total_calories_burned,
            "steps recorded"
        );

        self.notify_observers();

        if self.total_steps > self.settings.water_reminder_steps {
            tracing::info!("💧 water reminder ({} steps)", self.total_steps);
            self.notify_water_reminder();
        }
        if self.total_calories_burned > self.settings.diet_reminder_calories {
            tracing::info!("🍎 diet reminder ({} calories)", self.total_calories_burned);
            self.notify_diet_reminder();
        }
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update(self.total_steps, self.total_calories_burned);
        }
    }

    fn notify_water_reminder(&self) {
        for observer in &self.observers {
            observer.water_reminder();
        }
    }

    fn notify_diet_reminder(&self) {
        for observer in &self.observers {
            observer.diet_reminder();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl HealthObserver for Recorder {
        fn update(&self, steps: u64, calories_burned: u64) {
            self.log
                .borrow_mut()
                .push(format!("{}:update:{}:{}", self.label, steps, calories_burned));
        }

        fn water_reminder(&self) {
            self.log.borrow_mut().push(format!("{}:water", self.label));
        }

        fn diet_reminder(&self) {
            self.log.borrow_mut().push(format!("{}:diet", self.label));
        }
    }

    fn recorder(label: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn HealthObserver> {
        Rc::new(Recorder {
            label,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_record_steps_accumulates() {
        let mut pedometer = Pedometer::new(PedometerSettings::default());
        pedometer.record_steps(500, 200);
        pedometer.record_steps(500, 150);
        assert_eq!(pedometer.total_steps(), 1000);
        assert_eq!(pedometer.total_calories_burned(), 350);
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pedometer = Pedometer::new(PedometerSettings::default());
        pedometer.add_observer(recorder("a", &log));
        pedometer.add_observer(recorder("b", &log));

        pedometer.record_steps(100, 10);

        assert_eq!(*log.borrow(), vec!["a:update:100:10", "b:update:100:10"]);
    }

    #[test]
    fn test_duplicate_observer_notified_twice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observer = recorder("a", &log);
        let mut pedometer = Pedometer::new(PedometerSettings::default());
        pedometer.add_observer(Rc::clone(&observer));
        pedometer.add_observer(observer);

        pedometer.record_steps(1, 1);

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pedometer = Pedometer::new(PedometerSettings::default());
        pedometer.add_observer(recorder("a", &log));

        pedometer.record_steps(5000, 300);
        assert_eq!(*log.borrow(), vec!["a:update:5000:300"]);

        pedometer.record_steps(1, 1);
        assert_eq!(
            log.borrow()[1..].to_vec(),
            vec!["a:update:5001:301", "a:water", "a:diet"]
        );
    }

    #[test]
    fn test_reminders_refire_every_call() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pedometer = Pedometer::new(PedometerSettings {
            water_reminder_steps: 0,
            diet_reminder_calories: u64::MAX,
        });
        pedometer.add_observer(recorder("a", &log));

        for _ in 0..3 {
            pedometer.record_steps(10, 0);
        }

        let waters = log.borrow().iter().filter(|l| l.ends_with("water")).count();
        assert_eq!(waters, 3);
    }

    #[test]
    fn test_remove_observer_keeps_it_registered() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observer = recorder("a", &log);
        let mut pedometer = Pedometer::new(PedometerSettings::default());
        pedometer.add_observer(Rc::clone(&observer));

        pedometer.remove_observer(&observer);
        pedometer.record_steps(1, 1);

        assert_eq!(pedometer.observer_count(), 1);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_instance_is_shared() {
        let first = Pedometer::instance();
        let second = Pedometer::instance();
        assert!(Rc::ptr_eq(&first, &second));

        let before = second.borrow().total_steps();
        first.borrow_mut().record_steps(500, 0);
        assert_eq!(second.borrow().total_steps(), before + 500);
    }

    #[test]
    fn test_totals_saturate() {
        let mut pedometer = Pedometer::new(PedometerSettings::default());
        pedometer.record_steps(u64::MAX, 0);
        pedometer.record_steps(10, 0);
        assert_eq!(pedometer.total_steps(), u64::MAX);
    }
}
