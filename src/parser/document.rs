//! Whole-document parsing
//!
//! Splits an ordered paragraph sequence into a header plus per-question
//! blocks delimited by `#Questão`/`#Final`, and hands each block to the
//! question parser. Document order is preserved; a trailing `#Final` is
//! conventional but never required.

use std::collections::VecDeque;

use super::marker;
use super::question::parse_question;
use crate::models::QuestionBank;

/// Parse a full ordered paragraph sequence into a [`QuestionBank`]
pub fn parse_document(paragraphs: Vec<String>) -> QuestionBank {
    let mut queue: VecDeque<String> = paragraphs.into();

    // Header runs up to the first #Questão, which is consumed
    let mut header = String::new();
    while let Some(line) = queue.pop_front() {
        if marker::is_question_start_marker(&line) {
            break;
        }
        if !header.is_empty() {
            header.push('\n');
        }
        header.push_str(&line);
    }

    let mut bank = QuestionBank::new(header.trim());

    let mut buffer: Vec<String> = Vec::new();
    while let Some(line) = queue.pop_front() {
        if marker::is_question_start_marker(&line) || marker::is_final_marker(&line) {
            if !buffer.is_empty() {
                bank.questions.push(parse_question(std::mem::take(&mut buffer)));
            }
        } else {
            buffer.push(line);
        }
    }

    // No terminating marker; the trailing buffer is still a question
    if !buffer.is_empty() {
        bank.questions.push(parse_question(buffer));
    }

    bank
}

/// Parse BQ plain text where each line is one paragraph
///
/// Lines are trimmed before parsing, matching what the .docx extraction
/// produces for paragraph runs.
pub fn parse_text(text: &str) -> QuestionBank {
    let paragraphs: Vec<String> = text.lines().map(|s| s.trim().to_string()).collect();
    parse_document(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_and_single_question() {
        let bank = parse_document(doc(&[
            "Header line",
            "#Questão",
            "What is 2+2?",
            "#Resposta",
            "4",
            "#Resposta",
            "3",
            "#Resposta",
            "5",
            "#Final",
        ]));
        assert_eq!(bank.header, "Header line");
        assert_eq!(bank.len(), 1);
        let q = &bank.questions[0];
        assert_eq!(q.question, "What is 2+2?");
        assert_eq!(q.correct_answer, "4");
        assert_eq!(q.wrong_answers, vec!["3", "5", "", ""]);
        assert_eq!(q.justification, "");
    }

    #[test]
    fn test_multiline_header() {
        let bank = parse_document(doc(&[
            "Banco de Questões",
            "Disciplina X",
            "#Questão",
            "P?",
        ]));
        assert_eq!(bank.header, "Banco de Questões\nDisciplina X");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_multiple_questions_keep_document_order() {
        let bank = parse_document(doc(&[
            "H",
            "#Questão",
            "primeira?",
            "#Resposta",
            "a1",
            "#Questão",
            "segunda?",
            "#Resposta",
            "a2",
            "#Final",
        ]));
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions[0].question, "primeira?");
        assert_eq!(bank.questions[1].question, "segunda?");
    }

    #[test]
    fn test_missing_final_marker_still_yields_last_question() {
        let bank = parse_document(doc(&[
            "H",
            "#Questão",
            "P?",
            "#Resposta",
            "certa",
        ]));
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions[0].correct_answer, "certa");
    }

    #[test]
    fn test_lowercase_final_is_plain_text() {
        let bank = parse_document(doc(&[
            "H",
            "#Questão",
            "P?",
            "#Resposta",
            "certa",
            "#final",
        ]));
        // "#final" is not a marker, so it lands in the block
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions[0].correct_answer, "certa\n#final");
    }

    #[test]
    fn test_consecutive_markers_skip_empty_blocks() {
        let bank = parse_document(doc(&["H", "#Questão", "#Questão", "P?", "#Final"]));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_document_without_questions() {
        let bank = parse_document(doc(&["só cabeçalho", "mais texto"]));
        assert_eq!(bank.header, "só cabeçalho\nmais texto");
        assert!(bank.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let bank = parse_document(Vec::new());
        assert_eq!(bank.header, "");
        assert!(bank.is_empty());
    }

    #[test]
    fn test_parse_text_splits_and_trims_lines() {
        let bank = parse_text("Header\r\n  #Questão  \r\nP?\n#Resposta\ncerta\n#Final\n");
        assert_eq!(bank.header, "Header");
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions[0].correct_answer, "certa");
    }
}
