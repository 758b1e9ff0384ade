//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded by
//! `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `TEMPLATE_PATH` - Word template to fill
//!   (default: `allergist-prescription-template.docx`)
//! - `OUTPUT_FILENAME` - Name sent in `Content-Disposition`
//!   (default: `filled-form.docx`)
//! - `FILL_MODE` - `run` or `paragraph` (default: `run`)
//! - `MAX_BODY_BYTES` - Request body limit (default: 65536, min: 1024, max: 10 MiB)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::domain::entities::FillMode;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
pub const DEFAULT_TEMPLATE_PATH: &str = "allergist-prescription-template.docx";
pub const DEFAULT_OUTPUT_FILENAME: &str = "filled-form.docx";

const MIN_BODY_BYTES: usize = 1024;
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub template_path: PathBuf,
    pub output_filename: String,
    pub fill_mode: FillMode,
    pub max_body_bytes: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `FILL_MODE` or `MAX_BODY_BYTES` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let template_path = env::var("TEMPLATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_PATH));
        let output_filename =
            env::var("OUTPUT_FILENAME").unwrap_or_else(|_| DEFAULT_OUTPUT_FILENAME.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let fill_mode = match env::var("FILL_MODE") {
            Ok(value) => value
                .parse::<FillMode>()
                .map_err(anyhow::Error::msg)
                .context("Invalid FILL_MODE")?,
            Err(_) => FillMode::default(),
        };

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("MAX_BODY_BYTES must be a number, got '{value}'"))?,
            Err(_) => 64 * 1024,
        };

        Ok(Self {
            listen_addr,
            template_path,
            output_filename,
            fill_mode,
            max_body_bytes,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `template_path` is empty
    /// - `output_filename` does not end in `.docx` or contains quotes or separators
    /// - `max_body_bytes` is outside 1 KiB..=10 MiB
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.template_path.as_os_str().is_empty() {
            anyhow::bail!("TEMPLATE_PATH must not be empty");
        }

        if !self.output_filename.ends_with(".docx") {
            anyhow::bail!(
                "OUTPUT_FILENAME must end with '.docx', got '{}'",
                self.output_filename
            );
        }

        if self
            .output_filename
            .chars()
            .any(|c| matches!(c, '"' | ';' | '/' | '\\') || c.is_control())
        {
            anyhow::bail!(
                "OUTPUT_FILENAME contains characters not allowed in a header, got '{}'",
                self.output_filename
            );
        }

        if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&self.max_body_bytes) {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between {} and {}, got {}",
                MIN_BODY_BYTES,
                MAX_BODY_BYTES,
                self.max_body_bytes
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Template: {}", self.template_path.display());
        tracing::info!("  Output filename: {}", self.output_filename);
        tracing::info!("  Fill mode: {}", self.fill_mode);
        tracing::info!("  Max body bytes: {}", self.max_body_bytes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
