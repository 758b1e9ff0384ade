//! Zip package handling for `.docx` files.

use super::body::DocumentBody;
use super::error::DocxError;
use super::DOCUMENT_PART;
use crate::domain::entities::DocumentTemplate;
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Largest uncompressed size accepted for a single package part.
pub const MAX_PART_BYTES: u64 = 32 * 1024 * 1024;

struct Part {
    name: String,
    data: Vec<u8>,
    is_dir: bool,
}

/// A decoded Word document.
///
/// Every package part is kept in its original order; only
/// `word/document.xml` is regenerated on [`DocxDocument::to_bytes`].
pub struct DocxDocument {
    parts: Vec<Part>,
    body: DocumentBody,
}

impl DocxDocument {
    /// Decodes a `.docx` package.
    ///
    /// # Errors
    ///
    /// Returns [`DocxError::Zip`] for a broken archive,
    /// [`DocxError::PartTooLarge`] for a part above [`MAX_PART_BYTES`],
    /// [`DocxError::MissingPart`] when there is no main document part, and
    /// [`DocxError::Xml`] when that part is not well-formed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocxError> {
        Self::decode(bytes, MAX_PART_BYTES)
    }

    fn decode(bytes: &[u8], part_limit: u64) -> Result<Self, DocxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            let name = file.name().to_string();
            if file.size() > part_limit {
                return Err(DocxError::PartTooLarge {
                    name,
                    limit: part_limit,
                });
            }

            let is_dir = file.is_dir();
            let data = read_part(&mut file, &name, part_limit)?;
            parts.push(Part { name, data, is_dir });
        }

        let document = parts
            .iter()
            .find(|part| part.name == DOCUMENT_PART)
            .ok_or(DocxError::MissingPart(DOCUMENT_PART))?;
        let body = DocumentBody::parse(&document.data)?;

        Ok(Self { parts, body })
    }

    /// Paragraph/run text of the main document part.
    pub fn template(&self) -> DocumentTemplate {
        self.body.template().clone()
    }

    /// Writes edited text back into the document.
    ///
    /// # Errors
    ///
    /// Returns [`DocxError::LayoutMismatch`] if paragraphs or runs were added
    /// or removed.
    pub fn apply(&mut self, edited: &DocumentTemplate) -> Result<(), DocxError> {
        self.body.apply(edited)
    }

    /// Encodes the document back into a `.docx` package.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocxError> {
        let document_xml = self.body.to_xml()?;
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for part in &self.parts {
            if part.is_dir {
                writer.add_directory(part.name.as_str(), options)?;
                continue;
            }

            writer.start_file(part.name.as_str(), options)?;
            if part.name == DOCUMENT_PART {
                writer.write_all(&document_xml)?;
            } else {
                writer.write_all(&part.data)?;
            }
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Builds a minimal package whose body holds the given paragraphs, each a
    /// list of run texts.
    pub fn compose(paragraphs: &[&[&str]]) -> Result<Vec<u8>, DocxError> {
        let mut body = String::new();
        for runs in paragraphs {
            body.push_str("<w:p>");
            for text in *runs {
                body.push_str(r#"<w:r><w:t xml:space="preserve">"#);
                body.push_str(&quick_xml::escape::escape(*text));
                body.push_str("</w:t></w:r>");
            }
            body.push_str("</w:p>");
        }

        let document = format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
                "<w:body>{}</w:body></w:document>"
            ),
            body
        );

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", ROOT_RELS),
            (DOCUMENT_PART, document.as_str()),
        ] {
            writer.start_file(name, options)?;
            writer.write_all(data.as_bytes())?;
        }

        Ok(writer.finish()?.into_inner())
    }
}

/// Reads at most `limit` bytes; the size in the zip header is not trusted.
fn read_part(reader: impl Read, name: &str, limit: u64) -> Result<Vec<u8>, DocxError> {
    let mut data = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut data)?;

    if data.len() as u64 > limit {
        return Err(DocxError::PartTooLarge {
            name: name.to_string(),
            limit,
        });
    }
    Ok(data)
}

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#
);
