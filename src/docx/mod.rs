//! .docx paragraph extraction
//!
//! A .docx file is a zip container holding `word/document.xml`. This adapter
//! pulls one trimmed string per `w:p` paragraph, concatenating the text of
//! its `w:t` runs, and hands the ordered sequence to the core parser. All
//! failures here are container/part problems, reported through [`DocxError`]
//! and never mixed with parsing behavior (the parser itself cannot fail).

use std::fs::File;
use std::io::Read;
use std::path::Path;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Failures of the .docx extraction layer
#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid .docx container: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("document part {DOCUMENT_PART} is missing from the archive")]
    MissingDocumentPart,

    #[error("document part is not valid XML: {0}")]
    InvalidXml(#[from] roxmltree::Error),
}

/// Extract the document's paragraphs as ordered, trimmed strings
///
/// Paragraphs without text runs come back as empty strings; the core parser
/// tolerates them.
pub fn extract_paragraphs(path: &Path) -> Result<Vec<String>, DocxError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut document_xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut document_xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => return Err(DocxError::MissingDocumentPart),
        Err(e) => return Err(DocxError::Archive(e)),
    }

    parse_document_xml(&document_xml)
}

/// Flatten `word/document.xml` into one string per `w:p` element
fn parse_document_xml(document_xml: &str) -> Result<Vec<String>, DocxError> {
    let doc = roxmltree::Document::parse(document_xml)?;

    let mut paragraphs = Vec::new();
    for p in doc
        .descendants()
        .filter(|n| n.has_tag_name((WORD_NS, "p")))
    {
        let text: String = p
            .descendants()
            .filter(|n| n.has_tag_name((WORD_NS, "t")))
            .filter_map(|t| t.text())
            .collect();
        paragraphs.push(text.trim().to_string());
    }
    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
            WORD_NS, body
        )
    }

    #[test]
    fn test_paragraph_runs_are_concatenated() {
        let xml = wrap_body("<w:p><w:r><w:t>Olá </w:t></w:r><w:r><w:t>mundo</w:t></w:r></w:p>");
        let paragraphs = parse_document_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Olá mundo"]);
    }

    #[test]
    fn test_empty_paragraph_becomes_empty_string() {
        let xml = wrap_body("<w:p/><w:p><w:r><w:t>#Questão</w:t></w:r></w:p>");
        let paragraphs = parse_document_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["", "#Questão"]);
    }

    #[test]
    fn test_paragraph_order_is_document_order() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>um</w:t></w:r></w:p><w:p><w:r><w:t>dois</w:t></w:r></w:p>",
        );
        let paragraphs = parse_document_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["um", "dois"]);
    }

    #[test]
    fn test_foreign_namespace_elements_are_ignored() {
        let xml = format!(
            r#"<w:document xmlns:w="{}" xmlns:x="urn:other"><w:body><x:p><x:t>não</x:t></x:p><w:p><w:r><w:t>sim</w:t></w:r></w:p></w:body></w:document>"#,
            WORD_NS
        );
        let paragraphs = parse_document_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["sim"]);
    }

    #[test]
    fn test_invalid_xml_is_reported() {
        assert!(matches!(
            parse_document_xml("<w:document"),
            Err(DocxError::InvalidXml(_))
        ));
    }
}
