mod item;
mod session;

pub use item::{Choice, ChoiceLabel, QuizItem};
pub use session::{EngineError, Phase, QuizSession, ReviewEntry, Score};
