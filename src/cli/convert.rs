//! Convert command implementation

use crate::models::{Question, QuestionBank};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Run the convert command
///
/// Parses the input document, optionally narrows it to a 1-based selection
/// of questions (e.g. "1,3,5", kept in the order given), and writes the
/// Moodle quiz XML next to the input unless an output path is supplied.
pub fn run(input: &Path, output: Option<&Path>, questions: Option<&str>) -> Result<()> {
    let bank = super::load_bank(input)?;

    println!(
        "{}",
        format!("📄 Parsed {} questions from {}", bank.len(), input.display()).cyan()
    );

    let xml = match questions {
        Some(spec) => {
            let selection = select_questions(&bank, spec)?;
            println!(
                "   Exporting {} of {} questions",
                selection.len(),
                bank.len()
            );
            bank.to_moodle_xml_with(&selection)
        }
        None => bank.to_moodle_xml(),
    };

    let output_path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("xml"),
    };
    std::fs::write(&output_path, &xml)?;

    println!("{}", format!("✓ Wrote {}", output_path.display()).green());
    Ok(())
}

/// Resolve a comma-separated list of 1-based question numbers
fn select_questions(bank: &QuestionBank, spec: &str) -> Result<Vec<Question>> {
    let mut selection = Vec::new();
    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let number: usize = token
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid question number '{}'", token))?;
        if number == 0 || number > bank.len() {
            anyhow::bail!(
                "Question {} is out of range (the bank has {} questions)",
                number,
                bank.len()
            );
        }
        selection.push(bank.questions[number - 1].clone());
    }
    if selection.is_empty() {
        anyhow::bail!("No questions selected by '{}'", spec);
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        let mut bank = QuestionBank::new("H");
        for n in 1..=3 {
            bank.questions.push(Question::new(
                format!("P{}?", n),
                format!("a{}", n),
                vec![String::new(); 4],
                "",
            ));
        }
        bank
    }

    #[test]
    fn test_selection_keeps_given_order() {
        let selection = select_questions(&bank(), "3,1").unwrap();
        assert_eq!(selection[0].question, "P3?");
        assert_eq!(selection[1].question, "P1?");
    }

    #[test]
    fn test_selection_rejects_out_of_range() {
        assert!(select_questions(&bank(), "4").is_err());
        assert!(select_questions(&bank(), "0").is_err());
    }

    #[test]
    fn test_selection_rejects_garbage() {
        assert!(select_questions(&bank(), "um").is_err());
        assert!(select_questions(&bank(), ",").is_err());
    }
}
