use std::collections::HashMap;
use thiserror::Error;

use super::item::{ChoiceLabel, QuizItem};

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("quiz session requires at least one question")]
    EmptyQuiz,

    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),
}

/// Whether the session is still accepting answers or has been walked past
/// its last question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Per-question result row for the results screen, in original item order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub question: String,
    pub chosen: Option<ChoiceLabel>,
    pub correct: ChoiceLabel,
    pub is_correct: bool,
}

/// One run of a quiz, from the first question to completion or reset.
///
/// The session itself enforces the navigation rules the UI mirrors with
/// disabled buttons: forward navigation requires an answer for the current
/// question, backward navigation requires not being at the first one, and a
/// completed session only accepts `reset()`. Illegal calls fail with
/// [`EngineError::InvalidTransition`] and leave the state untouched.
#[derive(Debug)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    current: usize,
    answers: HashMap<String, ChoiceLabel>,
    phase: Phase,
}

impl QuizSession {
    /// Starts a session over `items`. The caller decides what to show when a
    /// page has no quiz; a session never starts with zero questions.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, EngineError> {
        if items.is_empty() {
            return Err(EngineError::EmptyQuiz);
        }

        Ok(Self {
            items,
            current: 0,
            answers: HashMap::new(),
            phase: Phase::Active,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question_count(&self) -> usize {
        self.items.len()
    }

    /// One-based position of the current question, with the total.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.items.len())
    }

    pub fn current_item(&self) -> &QuizItem {
        &self.items[self.current]
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self) -> Option<ChoiceLabel> {
        self.answers.get(&self.items[self.current].quiz_id).copied()
    }

    /// Records `label` for the current question, overwriting any earlier
    /// choice. The label is only checked against the fixed A-D domain, not
    /// against the question's own option list.
    pub fn answer(&mut self, label: ChoiceLabel) -> Result<(), EngineError> {
        if self.phase == Phase::Completed {
            return Err(EngineError::InvalidTransition(
                "cannot answer a completed session",
            ));
        }

        self.answers
            .insert(self.items[self.current].quiz_id.clone(), label);
        Ok(())
    }

    /// Advances to the next question, or completes the session when the
    /// current question is the last one. Rejected while the current question
    /// is unanswered.
    pub fn next(&mut self) -> Result<(), EngineError> {
        if self.phase == Phase::Completed {
            return Err(EngineError::InvalidTransition(
                "session is already completed",
            ));
        }
        if self.current_answer().is_none() {
            return Err(EngineError::InvalidTransition(
                "current question is unanswered",
            ));
        }

        if self.current == self.items.len() - 1 {
            self.phase = Phase::Completed;
        } else {
            self.current += 1;
        }
        Ok(())
    }

    /// Steps back to the previous question. The revisited question keeps its
    /// recorded answer.
    pub fn previous(&mut self) -> Result<(), EngineError> {
        if self.phase == Phase::Completed {
            return Err(EngineError::InvalidTransition(
                "session is already completed",
            ));
        }
        if self.current == 0 {
            return Err(EngineError::InvalidTransition(
                "already at the first question",
            ));
        }

        self.current -= 1;
        Ok(())
    }

    /// Discards all answers and returns to the first question, keeping the
    /// same items. Valid from any phase.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.phase = Phase::Active;
    }

    /// Number of questions answered correctly so far. Unanswered questions
    /// never count as correct; only meaningful as a final score once the
    /// session is completed.
    pub fn score(&self) -> Score {
        let correct = self
            .items
            .iter()
            .filter(|item| self.answers.get(&item.quiz_id) == Some(&item.answer))
            .count();
        let total = self.items.len();
        let percentage = (100.0 * correct as f64 / total as f64).round() as u32;

        Score {
            correct,
            total,
            percentage,
        }
    }

    /// Read-only per-question results in original item order.
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.items
            .iter()
            .map(|item| {
                let chosen = self.answers.get(&item.quiz_id).copied();
                ReviewEntry {
                    question: item.question.clone(),
                    chosen,
                    correct: item.answer,
                    is_correct: chosen == Some(item.answer),
                }
            })
            .collect()
    }
}
