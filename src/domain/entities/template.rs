//! Text model of a form template.
//!
//! A template is an ordered list of paragraphs, each an ordered list of runs.
//! Only run text is modelled; formatting stays with the document codec in
//! [`crate::infrastructure::docx`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A label recognized in template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Name,
    Age,
    Sex,
    Diagnosis,
    Date,
}

impl FieldLabel {
    /// Every label, in the order they are checked against a paragraph.
    pub const ALL: [FieldLabel; 5] = [
        FieldLabel::Name,
        FieldLabel::Age,
        FieldLabel::Sex,
        FieldLabel::Diagnosis,
        FieldLabel::Date,
    ];

    /// Literal prefix searched for in template text, e.g. `"Name:"`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Name => "Name:",
            Self::Age => "Age:",
            Self::Sex => "Sex:",
            Self::Diagnosis => "Diagnosis:",
            Self::Date => "Date:",
        }
    }

    /// Text that replaces a matched span: `"<Label>: <value>"`.
    pub fn render(self, value: &str) -> String {
        format!("{} {}", self.prefix(), value)
    }

    /// First label, in [`FieldLabel::ALL`] order, contained in `text`.
    pub fn find_in(text: &str) -> Option<FieldLabel> {
        Self::ALL
            .into_iter()
            .find(|label| text.contains(label.prefix()))
    }
}

/// Granularity of template substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Replace the whole paragraph text.
    Paragraph,
    /// Replace only the runs that carry a label, keeping their formatting.
    #[default]
    Run,
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => f.write_str("paragraph"),
            Self::Run => f.write_str("run"),
        }
    }
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paragraph" => Ok(Self::Paragraph),
            "run" => Ok(Self::Run),
            other => Err(format!("unknown fill mode '{other}' (expected 'run' or 'paragraph')")),
        }
    }
}

/// A contiguous span of text sharing one set of formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Run {
    pub text: String,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Replaces the paragraph text.
    ///
    /// The text lands in the first run and every later run is emptied, so the
    /// run count never changes. A paragraph without runs gains one.
    pub fn set_text(&mut self, text: impl Into<String>) {
        match self.runs.split_first_mut() {
            Some((first, rest)) => {
                first.text = text.into();
                for run in rest {
                    run.text.clear();
                }
            }
            None => self.runs.push(Run::new(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentTemplate {
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentTemplate {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Builds a template where each paragraph is a single run.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            lines
                .into_iter()
                .map(|line| Paragraph::new(vec![Run::new(line)]))
                .collect(),
        )
    }

    /// Paragraph texts, in document order.
    pub fn texts(&self) -> Vec<String> {
        self.paragraphs.iter().map(Paragraph::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_prefers_declaration_order() {
        assert_eq!(FieldLabel::find_in("Date: / Name:"), Some(FieldLabel::Name));
        assert_eq!(FieldLabel::find_in("Patient Age: __"), Some(FieldLabel::Age));
        assert_eq!(FieldLabel::find_in("Signature"), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(FieldLabel::Diagnosis.render("Asthma"), "Diagnosis: Asthma");
    }

    #[test]
    fn test_fill_mode_parse() {
        assert_eq!("RUN".parse::<FillMode>(), Ok(FillMode::Run));
        assert_eq!("paragraph".parse::<FillMode>(), Ok(FillMode::Paragraph));
        assert!("table".parse::<FillMode>().is_err());
    }

    #[test]
    fn test_set_text_collapses_into_first_run() {
        let mut paragraph = Paragraph::new(vec![Run::new("Na"), Run::new("me: "), Run::new("___")]);
        paragraph.set_text("Name: Jane");

        assert_eq!(paragraph.runs.len(), 3);
        assert_eq!(paragraph.runs[0].text, "Name: Jane");
        assert_eq!(paragraph.text(), "Name: Jane");
    }

    #[test]
    fn test_set_text_on_empty_paragraph() {
        let mut paragraph = Paragraph::default();
        paragraph.set_text("Date: today");

        assert_eq!(paragraph.runs, vec![Run::new("Date: today")]);
    }
}
