//! Axum route handlers for analysis, cover letters and rephrasing.

use std::time::Duration;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::pipeline::{
    analyze_documents, generate_cover_letter, rephrase_text, PromptContext,
};
use crate::evaluation::report::EvaluationReport;
use crate::evaluation::result::AnalysisResult;
use crate::gatherer::sources::ContextSources;
use crate::gatherer::{gather_context, ContextBlurbs, GatherSettings};
use crate::resume::ResumeForm;
use crate::session::handlers::session_not_found;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub session_id: Uuid,
    pub result: AnalysisResult,
    /// Scored view of a successful result; absent on extraction failure.
    pub report: Option<EvaluationReport>,
    pub context: ContextBlurbs,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub session_id: Uuid,
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct RephraseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RephraseResponse {
    pub rephrased_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/analysis
///
/// "Run Analysis": reset the session, parse the resume, gather optional context,
/// evaluate, and store everything back on the session.
pub async fn handle_run_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    state
        .sessions
        .update(id, |session| session.reset())
        .await
        .ok_or_else(|| session_not_found(id))?;

    let form = ResumeForm::from_multipart(multipart).await?;
    let file = form.require_resume()?;
    let job_description = form
        .text("job_description")
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;
    let resume_text = file.extract_text().await?;

    let sources = ContextSources {
        company_name: form.text("company_name"),
        company_website_url: form.text("company_website_url"),
        linkedin_url: form.text("linkedin_url"),
        github_url: form.text("github_url"),
    };
    let settings = GatherSettings {
        summary_model: state.config.summary_model.clone(),
        fetch_timeout: Duration::from_secs(state.config.fetch_timeout_secs),
    };
    let context: ContextBlurbs = if sources.is_empty() {
        ContextBlurbs::default()
    } else {
        gather_context(
            state.fetcher.as_ref(),
            state.llm.as_ref(),
            &sources,
            &settings,
        )
        .await
        .into()
    };

    let prompt_context = PromptContext::new(resume_text.clone(), job_description.clone())
        .with_context(&context, state.config.context_excerpt_chars);
    let result = analyze_documents(
        state.llm.as_ref(),
        &state.analysis_cache,
        &state.config.evaluation_model,
        prompt_context,
    )
    .await?;

    let report = match &result {
        AnalysisResult::Success { analysis } => Some(EvaluationReport::from_analysis(analysis)),
        AnalysisResult::Failure { .. } => None,
    };
    if let Some(report) = &report {
        info!("Session {} scored {:.2} overall", id, report.overall_score);
    }

    let stored_result = result.clone();
    let stored_context = context.clone();
    state
        .sessions
        .update(id, move |session| {
            session.resume_text = Some(resume_text);
            session.job_description = Some(job_description);
            session.company_info =
                Some(stored_context.company.clone()).filter(|c| !c.is_empty());
            session.context = Some(stored_context);
            session.analysis = Some(stored_result);
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(AnalysisResponse {
        session_id: id,
        result,
        report,
        context,
    }))
}

/// POST /api/v1/sessions/:id/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let (resume_text, job_description) = session.cover_letter_inputs().ok_or_else(|| {
        AppError::Conflict(
            "Run an analysis with a resume and job description before generating a cover letter"
                .to_string(),
        )
    })?;

    let cover_letter = generate_cover_letter(
        state.llm.as_ref(),
        &state.config.summary_model,
        resume_text,
        job_description,
        session.company_info.as_deref().unwrap_or_default(),
    )
    .await?;

    let stored = cover_letter.clone();
    state
        .sessions
        .update(id, move |session| session.cover_letter = Some(stored))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(CoverLetterResponse {
        session_id: id,
        cover_letter,
    }))
}

/// POST /api/v1/rephrase
pub async fn handle_rephrase(
    State(state): State<AppState>,
    Json(request): Json<RephraseRequest>,
) -> Result<Json<RephraseResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let rephrased_text = rephrase_text(
        state.llm.as_ref(),
        &state.rephrase_cache,
        &state.config.summary_model,
        &request.text,
    )
    .await?;

    Ok(Json(RephraseResponse { rephrased_text }))
}
