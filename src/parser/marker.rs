//! Marker recognition for the BQ line-tagged convention
//!
//! A marker is a paragraph whose trimmed text matches one of the reserved
//! tags (`#Questão`, `#Resposta`, `#Justificativa`, `#Final`). Structural
//! markers are matched literally, without case or diacritic normalization:
//! a paragraph reading `#final` is plain text, not a terminator. The
//! justification marker is the exception, with a tolerant inline form that
//! may appear glued to answer text on the same line.

use regex::Regex;
use std::sync::OnceLock;

/// Opens a question block; also closes the preceding one
pub const QUESTION_MARKER: &str = "#Questão";

/// Conventional end-of-document terminator
pub const FINAL_MARKER: &str = "#Final";

/// Separates prompt / correct answer / distractors inside a block
pub const ANSWER_MARKER: &str = "#Resposta";

/// Text split around an inline justification marker
#[derive(Debug, Clone, PartialEq)]
pub struct JustificationSplit {
    /// Trimmed text preceding the marker (may be empty)
    pub before: String,
    /// Trimmed text following the marker token (may be empty)
    pub after: String,
}

pub fn is_question_start_marker(line: &str) -> bool {
    line.trim() == QUESTION_MARKER
}

pub fn is_final_marker(line: &str) -> bool {
    line.trim() == FINAL_MARKER
}

pub fn is_answer_separator_marker(line: &str) -> bool {
    line.trim() == ANSWER_MARKER
}

/// Check whether the line is a stand-alone justification marker
///
/// Only these four literal forms count, case-sensitively:
/// `#Justificativa`, `Justificativa`, `#Justificativa:`, `Justificativa:`.
pub fn is_justification_marker(line: &str) -> bool {
    matches!(
        line.trim(),
        "#Justificativa" | "Justificativa" | "#Justificativa:" | "Justificativa:"
    )
}

fn hash_form_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)#justificativa").expect("valid regex"))
}

fn plain_form_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)justificativa").expect("valid regex"))
}

fn marker_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^#?justificativa:?\s*").expect("valid regex"))
}

/// Locate an inline justification marker and split the line around it
///
/// Searches case-insensitively for `#justificativa` first, then for the bare
/// `justificativa`. Returns `None` when neither occurs. The marker token
/// itself (optional `#`, the word, optional `:`, trailing whitespace) is
/// consumed; everything before it becomes `before`, the remainder `after`,
/// both trimmed. This is what lets `"6 Justificativa: explanation"` yield
/// distractor `"6"` and justification `"explanation"`.
pub fn split_justification_line(line: &str) -> Option<JustificationSplit> {
    let idx = hash_form_re()
        .find(line)
        .or_else(|| plain_form_re().find(line))
        .map(|m| m.start())?;

    let rest = &line[idx..];
    // The token pattern always matches here since idx points at the word;
    // the bare marker lengths cover the degenerate case anyway.
    let token_len = marker_token_re()
        .find(rest)
        .map(|m| m.end())
        .unwrap_or(if rest.starts_with('#') { 13 } else { 12 });

    Some(JustificationSplit {
        before: line[..idx].trim().to_string(),
        after: rest[token_len..].trim().to_string(),
    })
}
