//! Question block parsing
//!
//! A block is the run of paragraphs between two structural markers and is
//! consumed front-to-back in four phases: prompt, correct answer,
//! distractors, justification. The parser is total: missing `#Resposta`
//! boundaries simply let a phase swallow the rest of the block, and short
//! blocks degrade to empty fields rather than errors.

use std::collections::VecDeque;

use super::marker::{self, ANSWER_MARKER};
use crate::models::Question;

/// Minimum number of distractor slots a question carries (1 correct + 4
/// wrong = the 5 alternatives Moodle expects)
pub const MIN_WRONG_ANSWERS: usize = 4;

/// Parse one isolated question block into a [`Question`]
pub fn parse_question(block: Vec<String>) -> Question {
    let mut queue: VecDeque<String> = block.into();

    let question = take_until_separator(&mut queue);
    let correct_answer = take_until_separator(&mut queue);
    let wrong_answers = take_distractors(&mut queue);

    // Whatever survived the distractor phase is justification text
    let lines: Vec<String> = queue.into_iter().collect();
    let justification = lines.join("\n").trim().to_string();

    Question::new(question, correct_answer, wrong_answers, justification)
}

/// Dequeue and accumulate lines until an `#Resposta` separator (discarded)
/// or queue exhaustion; the result is trimmed
fn take_until_separator(queue: &mut VecDeque<String>) -> String {
    let mut acc = String::new();
    while let Some(line) = queue.pop_front() {
        if line.trim() == ANSWER_MARKER {
            break;
        }
        acc.push_str(&line);
        acc.push('\n');
    }
    acc.trim().to_string()
}

/// Collect distractors until a justification marker (stand-alone or inline)
/// ends the phase, padding with empty strings up to [`MIN_WRONG_ANSWERS`]
///
/// An inline marker splits its line: the text before it still belongs to the
/// current distractor, the text after it is pushed back to the front of the
/// queue so the justification phase picks it up first.
fn take_distractors(queue: &mut VecDeque<String>) -> Vec<String> {
    let mut wrong_answers = Vec::new();
    let mut buffer = String::new();

    while let Some(line) = queue.pop_front() {
        if line.trim() == ANSWER_MARKER {
            flush(&mut buffer, &mut wrong_answers);
        } else if marker::is_justification_marker(&line) {
            flush(&mut buffer, &mut wrong_answers);
            break;
        } else if let Some(split) = marker::split_justification_line(&line) {
            if !split.before.is_empty() {
                buffer.push_str(&split.before);
                buffer.push('\n');
            }
            flush(&mut buffer, &mut wrong_answers);
            if !split.after.is_empty() {
                queue.push_front(split.after);
            }
            break;
        } else {
            buffer.push_str(&line);
            buffer.push('\n');
        }
    }

    // A block ending at a #Questão/#Final boundary leaves its last
    // distractor in the buffer; it still counts
    flush(&mut buffer, &mut wrong_answers);

    // Pad up, never truncate here; over-supplied blocks keep every
    // distractor they collected and the serializer settles the count
    while wrong_answers.len() < MIN_WRONG_ANSWERS {
        wrong_answers.push(String::new());
    }
    wrong_answers
}

/// Push the trimmed buffer as a distractor when non-empty, then clear it
fn flush(buffer: &mut String, wrong_answers: &mut Vec<String>) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        wrong_answers.push(trimmed.to_string());
    }
    buffer.clear();
}
