// bq2moodle - BQ question bank to Moodle XML converter
// Parses the line-tagged BQ convention out of .docx or plain-text documents
// and serializes the result as Moodle multichoice quiz XML.

pub mod cli;
pub mod docx;
pub mod models;
pub mod moodle;
pub mod parser;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use docx::DocxError;
pub use models::{Question, QuestionBank};
pub use parser::{parse_document, parse_text};
