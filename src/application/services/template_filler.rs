//! Label substitution over a [`DocumentTemplate`].

use crate::domain::entities::{DocumentTemplate, FieldLabel, FillMode, PatientRecord};

/// Outcome of [`fill_template`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Paragraphs rewritten (paragraph mode) or labels substituted (run mode).
    pub replaced: usize,
    /// Indices of paragraphs whose text carries a label that no single run
    /// holds whole, so run mode left it unfilled. Always empty in paragraph
    /// mode.
    pub unfilled: Vec<usize>,
}

/// Fills `template` in place with values from `record`.
///
/// # Paragraph mode
///
/// The first label (in [`FieldLabel::ALL`] order) contained anywhere in a
/// paragraph's text selects the value, and the whole paragraph text becomes
/// `"<Label>: <value>"`. Other labels in the same paragraph are ignored.
///
/// # Run mode
///
/// Every label occurrence inside a run is replaced in place with
/// `"<Label>: <value>"`; the text around it and neighbouring runs are kept,
/// so `"Age: ___   Sex: ___"` becomes `"Age: 30 ___   Sex: Male ___"`.
/// Inserted values are not scanned again. A label split across two runs is
/// not matched and its paragraph is listed in [`FillReport::unfilled`].
///
/// Paragraphs and runs that match nothing are left byte-identical.
pub fn fill_template(
    template: &mut DocumentTemplate,
    record: &PatientRecord,
    mode: FillMode,
) -> FillReport {
    let mut report = FillReport::default();

    for (index, paragraph) in template.paragraphs.iter_mut().enumerate() {
        let text = paragraph.text();
        let Some(label) = FieldLabel::find_in(&text) else {
            continue;
        };

        match mode {
            FillMode::Paragraph => {
                paragraph.set_text(label.render(record.value(label)));
                report.replaced += 1;
            }
            FillMode::Run => {
                let mut filled = 0;
                for run in &mut paragraph.runs {
                    if let Some((rewritten, count)) = substitute(&run.text, record) {
                        run.text = rewritten;
                        filled += count;
                    }
                }

                if filled < count_labels(&text) {
                    report.unfilled.push(index);
                }
                report.replaced += filled;
            }
        }
    }

    report
}

/// Replaces every label occurrence in `text` in one left-to-right pass.
/// `None` when `text` holds no label.
fn substitute(text: &str, record: &PatientRecord) -> Option<(String, usize)> {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    let mut count = 0;

    while let Some((at, label)) = next_label(rest) {
        output.push_str(&rest[..at]);
        output.push_str(&label.render(record.value(label)));
        rest = &rest[at + label.prefix().len()..];
        count += 1;
    }

    if count == 0 {
        return None;
    }
    output.push_str(rest);
    Some((output, count))
}

fn count_labels(mut text: &str) -> usize {
    let mut count = 0;
    while let Some((at, label)) = next_label(text) {
        text = &text[at + label.prefix().len()..];
        count += 1;
    }
    count
}

/// Earliest label occurrence in `text`.
fn next_label(text: &str) -> Option<(usize, FieldLabel)> {
    FieldLabel::ALL
        .into_iter()
        .filter_map(|label| text.find(label.prefix()).map(|at| (at, label)))
        .min_by_key(|(at, _)| *at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Paragraph, Run};

    fn john_doe() -> PatientRecord {
        PatientRecord {
            name: "John Doe".to_string(),
            age: "30".to_string(),
            sex: "Male".to_string(),
            diagnosis: "Hypertension".to_string(),
            date: "2024-03-13".to_string(),
        }
    }

    fn form() -> DocumentTemplate {
        DocumentTemplate::from_lines([
            "Allergist Prescription",
            "Name: ______",
            "Age:",
            "Sex:",
            "Diagnosis:",
            "Date:",
            "Signature",
        ])
    }

    #[test]
    fn test_paragraph_mode_fills_every_label() {
        let mut template = form();
        let report = fill_template(&mut template, &john_doe(), FillMode::Paragraph);

        assert_eq!(report.replaced, 5);
        assert!(report.unfilled.is_empty());
        assert_eq!(
            template.texts(),
            vec![
                "Allergist Prescription",
                "Name: John Doe",
                "Age: 30",
                "Sex: Male",
                "Diagnosis: Hypertension",
                "Date: 2024-03-13",
                "Signature",
            ]
        );
    }

    #[test]
    fn test_unmatched_paragraphs_are_untouched() {
        let original = form();
        let mut template = original.clone();
        fill_template(&mut template, &john_doe(), FillMode::Run);

        assert_eq!(template.paragraphs[0], original.paragraphs[0]);
        assert_eq!(template.paragraphs[6], original.paragraphs[6]);
    }

    #[test]
    fn test_paragraph_mode_first_label_wins() {
        let mut template = DocumentTemplate::from_lines(["Date: ____   Name: ____"]);
        fill_template(&mut template, &john_doe(), FillMode::Paragraph);

        assert_eq!(template.texts(), vec!["Name: John Doe"]);
    }

    #[test]
    fn test_paragraph_mode_collapses_runs() {
        let mut template = DocumentTemplate::new(vec![Paragraph::new(vec![
            Run::new("Patient "),
            Run::new("Name:"),
            Run::new(" ____"),
        ])]);
        fill_template(&mut template, &john_doe(), FillMode::Paragraph);

        assert_eq!(template.paragraphs[0].text(), "Name: John Doe");
        assert_eq!(template.paragraphs[0].runs.len(), 3);
    }

    #[test]
    fn test_run_mode_rewrites_only_matching_runs() {
        let mut template = DocumentTemplate::new(vec![Paragraph::new(vec![
            Run::new("Patient "),
            Run::new("Name:"),
            Run::new(" | "),
            Run::new("Age:"),
        ])]);
        let report = fill_template(&mut template, &john_doe(), FillMode::Run);

        assert_eq!(report.replaced, 2);
        let runs: Vec<&str> = template.paragraphs[0]
            .runs
            .iter()
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(runs, vec!["Patient ", "Name: John Doe", " | ", "Age: 30"]);
    }

    #[test]
    fn test_run_mode_ignores_label_split_across_runs() {
        let mut template =
            DocumentTemplate::new(vec![Paragraph::new(vec![Run::new("Na"), Run::new("me:")])]);
        let report = fill_template(&mut template, &john_doe(), FillMode::Run);

        assert_eq!(report.replaced, 0);
        assert_eq!(report.unfilled, vec![0]);
        assert_eq!(template.paragraphs[0].text(), "Name:");
    }

    #[test]
    fn test_run_mode_fills_every_label_in_a_run() {
        let mut template = DocumentTemplate::from_lines(["Age: ___   Sex: ___"]);
        let report = fill_template(&mut template, &john_doe(), FillMode::Run);

        assert_eq!(report.replaced, 2);
        assert!(report.unfilled.is_empty());
        assert_eq!(template.texts(), vec!["Age: 30 ___   Sex: Male ___"]);
    }

    #[test]
    fn test_run_mode_keeps_text_around_label() {
        let mut template = DocumentTemplate::from_lines(["Name: ______ (print)"]);
        fill_template(&mut template, &john_doe(), FillMode::Run);

        assert_eq!(template.texts(), vec!["Name: John Doe ______ (print)"]);
    }

    #[test]
    fn test_run_mode_does_not_rescan_inserted_values() {
        let mut record = john_doe();
        record.name = "Date: unknown".to_string();
        let mut template = DocumentTemplate::from_lines(["Name:"]);
        let report = fill_template(&mut template, &record, FillMode::Run);

        assert_eq!(report.replaced, 1);
        assert_eq!(template.texts(), vec!["Name: Date: unknown"]);
    }

    #[test]
    fn test_run_mode_reports_word_style_split_label() {
        let mut template = DocumentTemplate::new(vec![
            Paragraph::new(vec![Run::new("Name"), Run::new(": ______")]),
            Paragraph::new(vec![Run::new("Age:"), Run::new(" ___ Se"), Run::new("x:")]),
        ]);
        let report = fill_template(&mut template, &john_doe(), FillMode::Run);

        assert_eq!(report.replaced, 1);
        assert_eq!(report.unfilled, vec![0, 1]);
        assert_eq!(template.paragraphs[0].text(), "Name: ______");
        assert_eq!(template.paragraphs[1].text(), "Age: 30 ___ Sex:");
    }

    #[test]
    fn test_values_are_written_verbatim() {
        let mut record = john_doe();
        record.name = "  <O'Brien & Sons>  ".to_string();
        let mut template = DocumentTemplate::from_lines(["Name:"]);
        fill_template(&mut template, &record, FillMode::Paragraph);

        assert_eq!(template.texts(), vec!["Name:   <O'Brien & Sons>  "]);
    }
}
