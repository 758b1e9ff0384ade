#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use clinic_desk::domain::entities::FillMode;
use clinic_desk::infrastructure::docx::{DocxDocument, starter_template};
use clinic_desk::infrastructure::template_store::FsTemplateStore;
use clinic_desk::routes::app_router;
use clinic_desk::state::AppState;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_BODY_LIMIT: usize = 4096;

/// Temporary directory holding `template.docx`. Dropped with the test.
pub struct TemplateDir {
    pub dir: TempDir,
}

impl TemplateDir {
    pub fn template_path(&self) -> PathBuf {
        self.dir.path().join("template.docx")
    }
}

/// Writes the starter template into a fresh temp directory.
pub fn starter_dir() -> TemplateDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("template.docx"), starter_template().unwrap()).unwrap();
    TemplateDir { dir }
}

/// Writes a template built from explicit paragraphs and runs.
pub fn composed_dir(paragraphs: &[&[&str]]) -> TemplateDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("template.docx"),
        DocxDocument::compose(paragraphs).unwrap(),
    )
    .unwrap();
    TemplateDir { dir }
}

pub fn create_test_state(template_path: &Path, fill_mode: FillMode) -> AppState {
    AppState::new(
        FsTemplateStore::new(template_path),
        fill_mode,
        "filled-form.docx",
    )
}

/// Serves the production router, path normalization and body limit included.
pub fn test_server(template_path: &Path, fill_mode: FillMode) -> TestServer {
    let app = app_router(create_test_state(template_path, fill_mode), TEST_BODY_LIMIT);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn john_doe() -> Value {
    json!({
        "name": "John Doe",
        "age": "30",
        "sex": "Male",
        "diagnosis": "Hypertension",
        "date": "2024-03-13"
    })
}

/// Paragraph texts of a returned document.
pub fn paragraph_texts(bytes: &[u8]) -> Vec<String> {
    DocxDocument::from_bytes(bytes).unwrap().template().texts()
}
