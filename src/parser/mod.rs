pub mod document;
pub mod marker;
pub mod question;

pub use document::{parse_document, parse_text};
pub use marker::{
    is_answer_separator_marker, is_final_marker, is_justification_marker,
    is_question_start_marker, split_justification_line, JustificationSplit,
};
pub use question::parse_question;
