use crate::core::{ExerciseFactory, HealthTrackerController, RunningFactory, WeightliftingFactory};
use crate::utils::error::{HealthError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Choose an activity (R for Running, W for Weightlifting, Q to Quit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Running,
    Weightlifting,
    Quit,
}

impl MenuChoice {
    /// Factory for the chosen activity; `None` for quit.
    pub fn factory(self) -> Option<Box<dyn ExerciseFactory>> {
        match self {
            MenuChoice::Running => Some(Box::new(RunningFactory)),
            MenuChoice::Weightlifting => Some(Box::new(WeightliftingFactory)),
            MenuChoice::Quit => None,
        }
    }
}

impl TryFrom<char> for MenuChoice {
    type Error = HealthError;

    fn try_from(input: char) -> Result<Self> {
        match input {
            'R' | 'r' => Ok(MenuChoice::Running),
            'W' | 'w' => Ok(MenuChoice::Weightlifting),
            'Q' | 'q' => Ok(MenuChoice::Quit),
            other => Err(HealthError::InvalidChoice { input: other }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingChoice,
    Running,
    Terminated,
}

/// Yields one non-whitespace character at a time from line-based input.
pub struct ChoiceReader<R: BufRead> {
    input: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> ChoiceReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next choice character, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 come back as `U+FFFD`, which the menu
    /// rejects like any other unknown character.
    pub fn next_choice(&mut self) -> Result<Option<char>> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Ok(Some(c));
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .chars()
                    .filter(|c| !c.is_whitespace()),
            );
        }
    }
}

/// The interactive menu loop driving the controller.
pub struct Session {
    controller: HealthTrackerController,
    state: SessionState,
}

impl Session {
    pub fn new(controller: HealthTrackerController) -> Self {
        Self {
            controller,
            state: SessionState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn controller(&self) -> &HealthTrackerController {
        &self.controller
    }

    /// Applies one input character. Invalid input is reported on `out` and
    /// leaves every piece of tracker state untouched.
    pub fn handle<W: Write>(&mut self, input: char, out: &mut W) -> Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        match MenuChoice::try_from(input) {
            Ok(choice) => match choice.factory() {
                Some(factory) => {
                    self.state = SessionState::Running;
                    let exercise = factory.create_exercise();
                    tracing::debug!(choice = ?choice, "creating {}", exercise.name());
                    self.controller.record_activity(exercise)?;
                    self.state = SessionState::AwaitingChoice;
                }
                None => {
                    writeln!(out, "Quitting the program.")?;
                    tracing::info!("👋 session terminated by user");
                    self.state = SessionState::Terminated;
                }
            },
            Err(e) => {
                tracing::debug!("{} ({})", e, e.recovery_suggestion());
                writeln!(out, "{}", e.user_friendly_message())?;
            }
        }

        Ok(self.state)
    }

    /// Prompts and handles choices until quit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        let mut reader = ChoiceReader::new(input);

        while self.state != SessionState::Terminated {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            match reader.next_choice()? {
                Some(choice) => {
                    self.handle(choice, &mut out)?;
                }
                None => {
                    writeln!(out)?;
                    tracing::info!("end of input, quitting");
                    self.state = SessionState::Terminated;
                }
            }
            out.flush()?;
        }

        Ok(())
    }
}
