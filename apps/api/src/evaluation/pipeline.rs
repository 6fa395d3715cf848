//! Evaluation pipeline: prompt, completion, extraction, shaped result.
//!
//! Also hosts the two other free-text tasks built on the same adapter:
//! ATS rephrasing and cover letter generation.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::evaluation::cache::MemoCache;
use crate::evaluation::result::{shape_response, AnalysisResult};
use crate::gatherer::{excerpt, ContextBlurbs};
use crate::llm_client::prompts::{COVER_LETTER_SYSTEM, EVALUATION_SYSTEM, REPHRASE_SYSTEM};
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::templates::Task;

const EVALUATION_TEMPERATURE: f32 = 0.7;
const EVALUATION_MAX_TOKENS: u32 = 8192;
const REPHRASE_TEMPERATURE: f32 = 0.7;
const REPHRASE_MAX_TOKENS: u32 = 768;
const COVER_LETTER_TEMPERATURE: f32 = 0.7;
const COVER_LETTER_MAX_TOKENS: u32 = 2048;

/// Everything substituted into the evaluation template. Doubles as the cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PromptContext {
    pub resume_text: String,
    pub job_description: String,
    pub company_info: String,
    pub crunchbase_info: String,
    pub linkedin_info: String,
    pub github_info: String,
}

impl PromptContext {
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description: job_description.into(),
            ..Self::default()
        }
    }

    /// Attaches gathered blurbs, each cut to its first `max_chars` characters.
    pub fn with_context(mut self, blurbs: &ContextBlurbs, max_chars: usize) -> Self {
        self.company_info = excerpt(&blurbs.company, max_chars).to_string();
        self.crunchbase_info = excerpt(&blurbs.crunchbase, max_chars).to_string();
        self.linkedin_info = excerpt(&blurbs.linkedin, max_chars).to_string();
        self.github_info = excerpt(&blurbs.github, max_chars).to_string();
        self
    }

    fn vars(&self) -> [(&'static str, &str); 6] {
        [
            ("resume_text", &self.resume_text),
            ("job_description", &self.job_description),
            ("company_info", &self.company_info),
            ("crunchbase_info", &self.crunchbase_info),
            ("linkedin_info", &self.linkedin_info),
            ("github_info", &self.github_info),
        ]
    }
}

pub type AnalysisCache = MemoCache<PromptContext, AnalysisResult>;
pub type RephraseCache = MemoCache<String, String>;

/// Evaluates a resume against a job description.
///
/// Identical inputs return the stored result without another upstream call.
/// Extraction failures are results, not errors; only the completion call itself can fail.
pub async fn analyze_documents(
    llm: &dyn CompletionClient,
    cache: &AnalysisCache,
    model: &str,
    context: PromptContext,
) -> Result<AnalysisResult, AppError> {
    if let Some(cached) = cache.get(&context).await {
        debug!("Analysis cache hit");
        return Ok(cached);
    }

    let prompt = Task::Evaluation
        .render(&context.vars())
        .map_err(|e| AppError::Internal(e.into()))?;
    debug!("Evaluation prompt rendered ({} chars)", prompt.len());

    let request = CompletionRequest {
        system: EVALUATION_SYSTEM.to_string(),
        prompt,
        model: model.to_string(),
        temperature: EVALUATION_TEMPERATURE,
        max_tokens: EVALUATION_MAX_TOKENS,
    };

    info!("Sending document analysis request (model: {})", model);
    let raw = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Error during analysis: {e}")))?;

    let result = shape_response(&raw);
    info!("Document analysis finished: success={}", result.is_success());

    let stored = cache.insert(context, result).await;
    debug!("Analysis cache holds {} entries", cache.len().await);
    Ok(stored)
}

/// Rewrites resume lines to ATS standards. Memoized by input text.
pub async fn rephrase_text(
    llm: &dyn CompletionClient,
    cache: &RephraseCache,
    model: &str,
    text: &str,
) -> Result<String, AppError> {
    if let Some(cached) = cache.get(&text.to_string()).await {
        return Ok(cached);
    }

    let prompt = Task::Rephrase
        .render(&[("text", text)])
        .map_err(|e| AppError::Internal(e.into()))?;
    let request = CompletionRequest {
        system: REPHRASE_SYSTEM.to_string(),
        prompt,
        model: model.to_string(),
        temperature: REPHRASE_TEMPERATURE,
        max_tokens: REPHRASE_MAX_TOKENS,
    };

    let rephrased = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Error during rephrasing: {e}")))?;

    Ok(cache.insert(text.to_string(), rephrased).await)
}

/// Writes a first-person cover letter from the session's resume and job description.
pub async fn generate_cover_letter(
    llm: &dyn CompletionClient,
    model: &str,
    resume_text: &str,
    job_description: &str,
    company_info: &str,
) -> Result<String, AppError> {
    let prompt = Task::CoverLetter
        .render(&[
            ("resume_text", resume_text),
            ("job_description", job_description),
            ("company_info", company_info),
        ])
        .map_err(|e| AppError::Internal(e.into()))?;
    let request = CompletionRequest {
        system: COVER_LETTER_SYSTEM.to_string(),
        prompt,
        model: model.to_string(),
        temperature: COVER_LETTER_TEMPERATURE,
        max_tokens: COVER_LETTER_MAX_TOKENS,
    };

    info!("Sending cover letter request (model: {})", model);
    llm.complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Error during cover letter generation: {e}")))
}
