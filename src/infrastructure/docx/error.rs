//! Errors raised while decoding or encoding a `.docx` package.

#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("invalid zip package: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(String),

    #[error("package has no {0} part")]
    MissingPart(&'static str),

    #[error("package part {name} exceeds {limit} bytes")]
    PartTooLarge { name: String, limit: u64 },

    #[error("template layout changed: {0}")]
    LayoutMismatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
