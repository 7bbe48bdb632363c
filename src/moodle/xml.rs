//! Moodle quiz XML serialization
//!
//! Renders questions into the fixed multichoice import schema. The grading
//! metadata and the Portuguese feedback strings are constants of the format,
//! not derived from input. Serialization is total: any question renders,
//! however sparse its fields.

use crate::models::Question;

/// Number of wrong-answer slots every serialized question carries
const WRONG_ANSWER_SLOTS: usize = 4;

const CORRECT_FEEDBACK: &str = "Sua resposta está correta.";
const PARTIAL_FEEDBACK: &str = "Sua resposta está parcialmente correta.";
const INCORRECT_FEEDBACK: &str = "Sua resposta está incorreta.";

/// Render a sequence of questions as a complete Moodle quiz XML document
///
/// Questions are numbered `Questão N` by their 1-based position in the
/// slice, not by any stored id, so callers can pass a filtered or reordered
/// subset and still get contiguous numbering.
pub fn render_quiz(questions: &[Question]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push("<quiz>".to_string());

    for (n, question) in questions.iter().enumerate() {
        render_question(&mut lines, question, n + 1);
    }

    lines.push("</quiz>".to_string());
    lines.join("\n")
}

fn render_question(lines: &mut Vec<String>, q: &Question, number: usize) {
    lines.push(r#"  <question type="multichoice">"#.to_string());
    lines.push("    <name>".to_string());
    lines.push(format!("      <text><![CDATA[Questão {}]]></text>", number));
    lines.push("    </name>".to_string());
    lines.push(r#"    <questiontext format="moodle_auto_format">"#.to_string());
    lines.push(format!("      <text><![CDATA[{}]]></text>", cdata(&q.question)));
    lines.push("    </questiontext>".to_string());
    lines.push(r#"    <generalfeedback format="moodle_auto_format">"#.to_string());
    lines.push(format!("      <text><![CDATA[{}]]></text>", cdata(&q.justification)));
    lines.push("    </generalfeedback>".to_string());
    lines.push("    <defaultgrade>1.0000000</defaultgrade>".to_string());
    lines.push("    <penalty>0.3333333</penalty>".to_string());
    lines.push("    <hidden>0</hidden>".to_string());
    lines.push("    <idnumber></idnumber>".to_string());
    lines.push("    <single>true</single>".to_string());
    lines.push("    <shuffleanswers>true</shuffleanswers>".to_string());
    lines.push("    <answernumbering>abc</answernumbering>".to_string());
    lines.push(r#"    <correctfeedback format="moodle_auto_format">"#.to_string());
    lines.push(format!("      <text><![CDATA[{}]]></text>", CORRECT_FEEDBACK));
    lines.push("    </correctfeedback>".to_string());
    lines.push(r#"    <partiallycorrectfeedback format="moodle_auto_format">"#.to_string());
    lines.push(format!("      <text><![CDATA[{}]]></text>", PARTIAL_FEEDBACK));
    lines.push("    </partiallycorrectfeedback>".to_string());
    lines.push(r#"    <incorrectfeedback format="moodle_auto_format">"#.to_string());
    lines.push(format!("      <text><![CDATA[{}]]></text>", INCORRECT_FEEDBACK));
    lines.push("    </incorrectfeedback>".to_string());
    lines.push("    <shownumcorrect></shownumcorrect>".to_string());

    // The single full-credit answer carries the justification as feedback
    lines.push(r#"    <answer fraction="100" format="moodle_auto_format">"#.to_string());
    lines.push(format!("      <text><![CDATA[{}]]></text>", cdata(&q.correct_answer)));
    lines.push(r#"      <feedback format="moodle_auto_format">"#.to_string());
    lines.push(format!("        <text><![CDATA[{}]]></text>", cdata(&q.justification)));
    lines.push("      </feedback>".to_string());
    lines.push("    </answer>".to_string());

    // Always exactly 4 zero-credit answers: over-supplied distractors are
    // truncated here, under-supplied ones render as empty slots
    let mut wrong: Vec<&str> = q
        .wrong_answers
        .iter()
        .take(WRONG_ANSWER_SLOTS)
        .map(String::as_str)
        .collect();
    while wrong.len() < WRONG_ANSWER_SLOTS {
        wrong.push("");
    }
    for answer in wrong {
        lines.push(r#"    <answer fraction="0" format="moodle_auto_format">"#.to_string());
        lines.push(format!("      <text><![CDATA[{}]]></text>", cdata(answer)));
        lines.push(r#"      <feedback format="moodle_auto_format">"#.to_string());
        lines.push("        <text><![CDATA[]]></text>".to_string());
        lines.push("      </feedback>".to_string());
        lines.push("    </answer>".to_string());
    }

    lines.push("  </question>".to_string());
}

/// Normalize text for a character-data block: line endings become `\n` and
/// the result is trimmed; no entity escaping is performed
fn cdata(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}
