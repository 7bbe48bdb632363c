use serde::{Deserialize, Serialize};

use super::Question;
use crate::moodle;

/// One converted document: header text plus its questions in document order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionBank {
    /// All paragraphs preceding the first `#Questão` marker, newline-joined
    pub header: String,

    /// Insertion order matches the order blocks appeared in the source;
    /// no reordering or deduplication
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            questions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Serialize the full bank as Moodle quiz XML
    pub fn to_moodle_xml(&self) -> String {
        moodle::render_quiz(&self.questions)
    }

    /// Serialize only the given questions (e.g. an approved subset), leaving
    /// the bank itself untouched
    pub fn to_moodle_xml_with(&self, selection: &[Question]) -> String {
        moodle::render_quiz(selection)
    }
}
