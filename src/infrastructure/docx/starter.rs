//! Built-in allergist prescription template.

use super::error::DocxError;
use super::package::DocxDocument;

/// Paragraphs of the starter template, one run each.
pub const STARTER_LINES: [&str; 9] = [
    "Allergist Prescription",
    "Name:",
    "Age:",
    "Sex:",
    "Diagnosis:",
    "Date:",
    "",
    "Rx:",
    "Signature: ____________________",
];

/// Encodes the starter template as a `.docx` package.
pub fn starter_template() -> Result<Vec<u8>, DocxError> {
    let paragraphs: Vec<[&str; 1]> = STARTER_LINES.iter().map(|line| [*line]).collect();
    let borrowed: Vec<&[&str]> = paragraphs.iter().map(|runs| runs.as_slice()).collect();
    DocxDocument::compose(&borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldLabel;

    #[test]
    fn test_starter_template_carries_every_label() {
        let document = DocxDocument::from_bytes(&starter_template().unwrap()).unwrap();
        let texts = document.template().texts();

        for label in FieldLabel::ALL {
            assert!(
                texts.iter().any(|text| text.starts_with(label.prefix())),
                "missing {}",
                label.prefix()
            );
        }
    }
}
