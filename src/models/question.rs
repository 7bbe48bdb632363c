use serde::{Deserialize, Serialize};
use std::fmt;

/// One multiple-choice quiz item parsed from a BQ block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Prompt text, trimmed; internal paragraph breaks preserved as '\n'
    pub question: String,

    /// The single correct answer, same shape as `question`
    pub correct_answer: String,

    /// Distractors in source order; padded with empty strings so there are
    /// always at least 4 entries (a block may legitimately supply more)
    pub wrong_answers: Vec<String>,

    /// Feedback text shown for both general and correct-answer feedback;
    /// empty when the block carried no justification
    pub justification: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        wrong_answers: Vec<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            wrong_answers,
            justification: justification.into(),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.question)?;
        writeln!(f, "Resposta Correta:\n{}", self.correct_answer)?;
        for wrong in &self.wrong_answers {
            writeln!(f, "Resposta:\n{}", wrong)?;
        }
        write!(f, "Justificativa:\n{}", self.justification)
    }
}
