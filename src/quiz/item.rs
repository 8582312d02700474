use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of one of the four fixed answer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    /// All labels, in display order.
    pub const ALL: [ChoiceLabel; 4] = [
        ChoiceLabel::A,
        ChoiceLabel::B,
        ChoiceLabel::C,
        ChoiceLabel::D,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(ChoiceLabel::A),
            'B' => Some(ChoiceLabel::B),
            'C' => Some(ChoiceLabel::C),
            'D' => Some(ChoiceLabel::D),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            ChoiceLabel::A => 'A',
            ChoiceLabel::B => 'B',
            ChoiceLabel::C => 'C',
            ChoiceLabel::D => 'D',
        }
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single labeled answer choice. `text` keeps the option string as the
/// backend sends it (label prefix included), which is also how it is shown
/// to the student.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: ChoiceLabel,
    pub text: String,
}

/// One multiple-choice question, in the order the backend defines for its
/// page. Immutable; exactly four choices labeled A through D.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizItem {
    pub quiz_id: String,
    pub question: String,
    pub choices: Vec<Choice>,
    pub answer: ChoiceLabel,
}
