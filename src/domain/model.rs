use std::fmt;

/// A single recorded exercise event. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    duration_minutes: u32,
    calories_burned: u32,
}

impl Activity {
    pub fn new(name: impl Into<String>, duration_minutes: u32, calories_burned: u32) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            calories_burned,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn calories_burned(&self) -> u32 {
        self.calories_burned
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Duration: {} minutes, Calories Burned: {}",
            self.name, self.duration_minutes, self.calories_burned
        )
    }
}
