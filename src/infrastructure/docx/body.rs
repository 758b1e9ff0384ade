//! `word/document.xml` event buffer with text slots.
//!
//! The whole part is kept as a list of owned XML events. While parsing, every
//! text event inside `w:p / w:r / w:t` is recorded as a slot so edited run
//! text can be spliced back in place.

use super::error::DocxError;
use crate::domain::entities::{DocumentTemplate, Paragraph, Run};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

const PARAGRAPH: &[u8] = b"w:p";
const RUN: &[u8] = b"w:r";
const TEXT: &[u8] = b"w:t";

/// Positions of a `<w:t>` start event and one of its text events.
#[derive(Debug, Clone, Copy)]
struct TextSlot {
    open: usize,
    text: usize,
}

#[derive(Debug, Default)]
struct RunSlots {
    slots: Vec<TextSlot>,
}

#[derive(Debug, Default)]
struct ParagraphSlots {
    runs: Vec<RunSlots>,
}

/// Open paragraph while walking the event stream. Paragraphs nest inside
/// text boxes, so these live on a stack.
struct Frame {
    paragraph: usize,
    in_run: bool,
    run: Option<usize>,
}

pub(crate) struct DocumentBody {
    events: Vec<Event<'static>>,
    paragraphs: Vec<ParagraphSlots>,
    template: DocumentTemplate,
}

impl DocumentBody {
    pub(crate) fn parse(xml: &[u8]) -> Result<Self, DocxError> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut events = Vec::new();
        let mut paragraphs: Vec<ParagraphSlots> = Vec::new();
        let mut template = DocumentTemplate::default();
        let mut stack: Vec<Frame> = Vec::new();
        let mut open_text: Option<usize> = None;
        let mut buf = Vec::new();

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| DocxError::Xml(format!("at byte {}: {e}", reader.buffer_position())))?;
            let index = events.len();

            match &event {
                Event::Eof => break,
                Event::Start(e) => match e.name().as_ref() {
                    PARAGRAPH => {
                        stack.push(Frame {
                            paragraph: paragraphs.len(),
                            in_run: false,
                            run: None,
                        });
                        paragraphs.push(ParagraphSlots::default());
                        template.paragraphs.push(Paragraph::default());
                    }
                    RUN => {
                        if let Some(frame) = stack.last_mut() {
                            frame.in_run = true;
                            frame.run = None;
                        }
                    }
                    TEXT => {
                        if stack.last().is_some_and(|frame| frame.in_run) {
                            open_text = Some(index);
                        }
                    }
                    _ => {}
                },
                Event::End(e) => match e.name().as_ref() {
                    PARAGRAPH => {
                        stack.pop();
                        open_text = None;
                    }
                    RUN => {
                        if let Some(frame) = stack.last_mut() {
                            frame.in_run = false;
                            frame.run = None;
                        }
                    }
                    TEXT => open_text = None,
                    _ => {}
                },
                Event::Empty(e) if e.name().as_ref() == PARAGRAPH => {
                    paragraphs.push(ParagraphSlots::default());
                    template.paragraphs.push(Paragraph::default());
                }
                Event::Text(t) => {
                    if let (Some(open), Some(frame)) = (open_text, stack.last_mut()) {
                        let text = t.unescape().map_err(|e| DocxError::Xml(e.to_string()))?;
                        let run = match frame.run {
                            Some(run) => run,
                            None => {
                                let run = paragraphs[frame.paragraph].runs.len();
                                paragraphs[frame.paragraph].runs.push(RunSlots::default());
                                template.paragraphs[frame.paragraph]
                                    .runs
                                    .push(Run::default());
                                frame.run = Some(run);
                                run
                            }
                        };
                        paragraphs[frame.paragraph].runs[run]
                            .slots
                            .push(TextSlot { open, text: index });
                        template.paragraphs[frame.paragraph].runs[run]
                            .text
                            .push_str(&text);
                    }
                }
                _ => {}
            }

            events.push(event.into_owned());
            buf.clear();
        }

        Ok(Self {
            events,
            paragraphs,
            template,
        })
    }

    /// Current paragraph/run text.
    pub(crate) fn template(&self) -> &DocumentTemplate {
        &self.template
    }

    /// Writes the run text of `edited` back into the event buffer.
    ///
    /// Only runs whose text changed are touched. A changed run keeps its first
    /// `<w:t>` (now `xml:space="preserve"`) and any further `<w:t>` elements
    /// in the same run are emptied.
    ///
    /// # Errors
    ///
    /// Returns [`DocxError::LayoutMismatch`] if `edited` does not have the same
    /// paragraph and run counts as the parsed document.
    pub(crate) fn apply(&mut self, edited: &DocumentTemplate) -> Result<(), DocxError> {
        if edited.paragraphs.len() != self.paragraphs.len() {
            return Err(DocxError::LayoutMismatch(format!(
                "document has {} paragraphs, edit has {}",
                self.paragraphs.len(),
                edited.paragraphs.len()
            )));
        }

        for (index, (slots, paragraph)) in self.paragraphs.iter().zip(&edited.paragraphs).enumerate()
        {
            if slots.runs.len() != paragraph.runs.len() {
                return Err(DocxError::LayoutMismatch(format!(
                    "paragraph {index} has {} runs, edit has {}",
                    slots.runs.len(),
                    paragraph.runs.len()
                )));
            }

            let current = &self.template.paragraphs[index].runs;
            for ((run_slots, before), after) in slots.runs.iter().zip(current).zip(&paragraph.runs) {
                if before.text == after.text {
                    continue;
                }

                for (position, slot) in run_slots.slots.iter().enumerate() {
                    let text = if position == 0 { after.text.as_str() } else { "" };
                    self.events[slot.open] = Event::Start(
                        BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
                    );
                    self.events[slot.text] = Event::Text(BytesText::new(text).into_owned());
                }
            }
        }

        self.template = edited.clone();
        Ok(())
    }

    pub(crate) fn to_xml(&self) -> Result<Vec<u8>, DocxError> {
        let mut writer = Writer::new(Vec::new());
        for event in &self.events {
            writer
                .write_event(event.clone())
                .map_err(|e| DocxError::Xml(e.to_string()))?;
        }
        Ok(writer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
        r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Name:</w:t></w:r><w:r><w:t xml:space="preserve"> ____</w:t></w:r></w:p>"#,
        r#"<w:p/>"#,
        r#"<w:p><w:r><w:tab/></w:r><w:r><w:t>Allergy &amp; Asthma</w:t></w:r></w:p>"#,
        r#"</w:body></w:document>"#
    );

    #[test]
    fn test_parse_collects_paragraph_and_run_text() {
        let body = DocumentBody::parse(XML.as_bytes()).unwrap();
        let template = body.template();

        assert_eq!(template.paragraphs.len(), 3);
        assert_eq!(template.paragraphs[0].runs.len(), 2);
        assert_eq!(template.paragraphs[0].text(), "Name: ____");
        assert!(template.paragraphs[1].runs.is_empty());
        // The tab-only run carries no text and is not modelled.
        assert_eq!(template.paragraphs[2].runs.len(), 1);
        assert_eq!(template.paragraphs[2].text(), "Allergy & Asthma");
    }

    #[test]
    fn test_unchanged_body_writes_identical_xml() {
        let body = DocumentBody::parse(XML.as_bytes()).unwrap();
        assert_eq!(body.to_xml().unwrap(), XML.as_bytes());
    }

    #[test]
    fn test_apply_rewrites_only_changed_runs() {
        let mut body = DocumentBody::parse(XML.as_bytes()).unwrap();
        let mut edited = body.template().clone();
        edited.paragraphs[0].runs[0].text = "Name: A & B".to_string();
        body.apply(&edited).unwrap();

        let xml = String::from_utf8(body.to_xml().unwrap()).unwrap();
        assert!(xml.contains(r#"<w:rPr><w:b/></w:rPr><w:t xml:space="preserve">Name: A &amp; B</w:t>"#));
        assert!(xml.contains(r#"<w:t xml:space="preserve"> ____</w:t>"#));
        assert!(xml.contains("Allergy &amp; Asthma"));

        let reparsed = DocumentBody::parse(xml.as_bytes()).unwrap();
        assert_eq!(reparsed.template().paragraphs[0].text(), "Name: A & B ____");
    }

    #[test]
    fn test_apply_rejects_layout_change() {
        let mut body = DocumentBody::parse(XML.as_bytes()).unwrap();
        let mut edited = body.template().clone();
        edited.paragraphs.pop();

        assert!(matches!(
            body.apply(&edited),
            Err(DocxError::LayoutMismatch(_))
        ));
    }

    #[test]
    fn test_malformed_xml_is_reported() {
        let result = DocumentBody::parse(b"<w:document><w:body></w:document>");
        assert!(matches!(result, Err(DocxError::Xml(_))));
    }
}
