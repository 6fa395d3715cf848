//! Free ATS-friendly resume templates offered for download.

use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("Sample 1", "1NWFIz-EZ1ZztZSdXfrrcdffSzG-uermd"),
    ("Sample 2", "1xO7hvK-RQSb0mjXRn24ri3AiDrXx6qt8"),
    ("Sample 3", "1fAukvT0lWXns3VexbZjwXyCAZGw2YptO"),
    ("Sample 4", "1htdoqTPDnG-T0OpTtj8wUOIfX9PfvqhS"),
    ("Sample 5", "1uTINCs71c4lL1Gcb8DQlyFYVqzOPidoS"),
    ("Sample 6", "1KO9OuhY7l6dn2c5xynpCOIgbx5LWsfb0"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsTemplate {
    pub name: &'static str,
    pub document_id: &'static str,
    pub download_url: String,
    pub preview_url: String,
}

pub fn ats_templates() -> Vec<AtsTemplate> {
    TEMPLATES
        .iter()
        .map(|&(name, document_id)| AtsTemplate {
            name,
            document_id,
            download_url: format!(
                "https://docs.google.com/document/d/{document_id}/export?format=docx"
            ),
            preview_url: format!("https://docs.google.com/document/d/{document_id}/preview"),
        })
        .collect()
}
