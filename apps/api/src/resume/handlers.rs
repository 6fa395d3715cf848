use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::ats::{ats_templates, AtsTemplate};
use crate::resume::ResumeForm;

#[derive(Debug, Serialize)]
pub struct ParsedResumeResponse {
    pub file_name: String,
    pub text: String,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_resume(
    multipart: Multipart,
) -> Result<Json<ParsedResumeResponse>, AppError> {
    let form = ResumeForm::from_multipart(multipart).await?;
    let file = form.require_resume()?;
    let text = file.extract_text().await?;
    Ok(Json(ParsedResumeResponse {
        file_name: file.file_name.clone(),
        text,
    }))
}

/// GET /api/v1/ats-templates
pub async fn handle_list_ats_templates() -> Json<Vec<AtsTemplate>> {
    Json(ats_templates())
}
