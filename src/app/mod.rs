pub mod session;

pub use session::{ChoiceReader, MenuChoice, Session, SessionState};
