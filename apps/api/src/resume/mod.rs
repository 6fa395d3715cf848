//! Resume uploads: text extraction and the ATS template catalogue.

pub mod ats;
pub mod handlers;
pub mod parser;

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::resume::parser::extract_resume_text;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Extracts the resume text off the async executor. PDF parsing is CPU-bound.
    pub async fn extract_text(&self) -> Result<String, AppError> {
        let file_name = self.file_name.clone();
        let bytes = self.bytes.clone();
        tokio::task::spawn_blocking(move || extract_resume_text(&file_name, &bytes))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume parsing: {e}"))
            })?
            .map_err(AppError::from)
    }
}

/// A drained multipart body: the resume file plus every text field.
#[derive(Debug, Default)]
pub struct ResumeForm {
    pub resume: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl ResumeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ResumeForm::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if name == RESUME_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                debug!("Received resume upload '{}' ({} bytes)", file_name, bytes.len());
                form.resume = Some(UploadedFile { file_name, bytes });
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }
        Ok(form)
    }

    pub fn require_resume(&self) -> Result<&UploadedFile, AppError> {
        self.resume
            .as_ref()
            .filter(|file| !file.bytes.is_empty())
            .ok_or_else(|| AppError::Validation("Please upload a resume (PDF or DOCX)".to_string()))
    }

    /// Trimmed value of a text field; blank counts as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extract_text_maps_parse_errors() {
        let file = UploadedFile {
            file_name: "resume.txt".to_string(),
            bytes: Bytes::from_static(b"plain text"),
        };
        assert!(matches!(
            file.extract_text().await,
            Err(AppError::UnsupportedFileType(_))
        ));

        let corrupt = UploadedFile {
            file_name: "resume.docx".to_string(),
            bytes: Bytes::from_static(b"not a zip archive"),
        };
        assert!(matches!(
            corrupt.extract_text().await,
            Err(AppError::Validation(_))
        ));
    }
}
