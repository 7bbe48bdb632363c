//! CLI command implementations

pub mod convert;
pub mod inspect;

use crate::models::QuestionBank;
use crate::{docx, parser, Context, Result};
use std::path::Path;

/// Load a question bank from either input format
///
/// `.docx` files go through the archive adapter; anything else is read as BQ
/// plain text with one paragraph per line.
pub fn load_bank(input: &Path) -> Result<QuestionBank> {
    let is_docx = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"));

    if is_docx {
        let paragraphs = docx::extract_paragraphs(input)
            .with_context(|| format!("Failed to extract {}", input.display()))?;
        Ok(parser::parse_document(paragraphs))
    } else {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        Ok(parser::parse_text(&text))
    }
}
