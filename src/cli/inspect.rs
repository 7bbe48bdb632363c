//! Inspect command implementation
//!
//! Parses a document and prints what the converter sees, without writing
//! any XML. Useful for checking marker placement before an export.

use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(input: &Path, json: bool) -> Result<()> {
    let bank = super::load_bank(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bank)?);
        return Ok(());
    }

    if !bank.header.is_empty() {
        println!("{}", bank.header.bold());
        println!();
    }

    if bank.is_empty() {
        println!("{}", "⚠ No questions found (missing #Questão markers?)".yellow());
        return Ok(());
    }

    for (n, question) in bank.questions.iter().enumerate() {
        println!("{}", format!("── Questão {} ──", n + 1).cyan());
        println!("{}", question);
        println!();
    }
    println!("{}", format!("✓ {} questions", bank.len()).green());
    Ok(())
}
