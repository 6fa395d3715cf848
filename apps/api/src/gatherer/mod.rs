//! Context Gatherer: optional company and candidate context for an evaluation.
//!
//! Flow: fetch every configured source concurrently (barrier) → summarize each
//! fetched page into a blurb, one completion call at a time.
//!
//! A slot that is unconfigured, fails, or times out degrades to an empty string.
//! It never blocks the other slots or the analysis.

pub mod fetcher;
pub mod prompts;
pub mod sources;

use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::gatherer::fetcher::{FetchError, PageFetcher};
use crate::gatherer::sources::{ContextSources, SourceKind};
use crate::llm_client::prompts::BLURB_SYSTEM;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::templates::{BlurbKind, Task};

const BLURB_TEMPERATURE: f32 = 0.7;
const BLURB_MAX_TOKENS: u32 = 1024;
/// Scraped text beyond this many characters is dropped before summarization.
const MAX_SCRAPED_CHARS: usize = 12_000;

#[derive(Debug, Clone)]
pub struct GatherSettings {
    pub summary_model: String,
    pub fetch_timeout: Duration,
}

/// Named view over the four positional blurb slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextBlurbs {
    pub company: String,
    pub crunchbase: String,
    pub linkedin: String,
    pub github: String,
}

impl From<[String; 4]> for ContextBlurbs {
    fn from(slots: [String; 4]) -> Self {
        let [company, crunchbase, linkedin, github] = slots;
        Self {
            company,
            crunchbase,
            linkedin,
            github,
        }
    }
}

/// Returns blurbs in `SourceKind::ALL` order: company, crunchbase, linkedin, github.
pub async fn gather_context(
    fetcher: &dyn PageFetcher,
    llm: &dyn CompletionClient,
    sources: &ContextSources,
    settings: &GatherSettings,
) -> [String; 4] {
    let plan = sources.plan();
    let configured = plan.iter().filter(|url| url.is_some()).count();
    info!("Gathering context from {} source(s)", configured);

    let fetches = SourceKind::ALL
        .iter()
        .zip(plan.iter())
        .map(|(&kind, url)| fetch_slot(fetcher, kind, url.as_deref(), settings.fetch_timeout));
    let pages: Vec<Option<String>> = join_all(fetches).await;

    let mut blurbs: [String; 4] = Default::default();
    for ((slot, kind), page) in blurbs.iter_mut().zip(SourceKind::ALL).zip(pages) {
        let Some(text) = page else {
            continue;
        };
        match generate_blurb(llm, kind.blurb_kind(), &text, &settings.summary_model).await {
            Ok(blurb) => *slot = blurb,
            Err(e) => warn!("Blurb generation failed for {:?}: {}", kind, e),
        }
    }

    info!("Context gathering complete");
    blurbs
}

async fn fetch_slot(
    fetcher: &dyn PageFetcher,
    kind: SourceKind,
    url: Option<&str>,
    timeout: Duration,
) -> Option<String> {
    let url = url?;
    let outcome = match tokio::time::timeout(timeout, fetcher.fetch(url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(timeout.as_secs())),
    };
    match outcome {
        Ok(text) if !text.trim().is_empty() => {
            debug!("Fetched {:?} ({} chars)", kind, text.len());
            Some(text)
        }
        Ok(_) => {
            warn!("Fetch returned no text for {:?} at {}", kind, url);
            None
        }
        Err(e) => {
            warn!("Fetch failed for {:?} at {}: {}", kind, url, e);
            None
        }
    }
}

/// Reduces arbitrary-length text to a short markdown blurb.
pub async fn generate_blurb(
    llm: &dyn CompletionClient,
    kind: BlurbKind,
    text: &str,
    model: &str,
) -> Result<String, AppError> {
    debug!("Starting {:?} blurb generation", kind);
    let prompt = Task::Blurb(kind)
        .render(&[("scraped_info", excerpt(text, MAX_SCRAPED_CHARS))])
        .map_err(|e| AppError::Internal(e.into()))?;

    let request = CompletionRequest {
        system: BLURB_SYSTEM.to_string(),
        prompt,
        model: model.to_string(),
        temperature: BLURB_TEMPERATURE,
        max_tokens: BLURB_MAX_TOKENS,
    };

    llm.complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Blurb generation failed: {e}")))
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedLlm, StaticFetcher};

    fn settings() -> GatherSettings {
        GatherSettings {
            summary_model: "llama3-8b-8192".to_string(),
            fetch_timeout: Duration::from_secs(5),
        }
    }

    fn all_sources() -> ContextSources {
        ContextSources {
            company_name: Some("Acme".to_string()),
            company_website_url: Some("acme.com".to_string()),
            linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
            github_url: Some("https://github.com/ada".to_string()),
        }
    }

    /// Echoes the source-specific heading of each blurb prompt back as the blurb.
    fn echo_llm() -> ScriptedLlm {
        ScriptedLlm::new(|req| {
            let heading = ["Company Information", "Crunchbase Profile", "LinkedIn Profile", "GitHub Profile"]
                .into_iter()
                .find(|h| req.prompt.contains(h))
                .unwrap_or("unknown");
            Ok(format!("blurb: {heading}"))
        })
    }

    #[tokio::test]
    async fn test_failed_source_leaves_empty_slot_in_position() {
        let fetcher = StaticFetcher::new()
            .with_page("https://acme.com", "Acme builds rockets")
            .with_page("https://linkedin.com/in/ada", "Ada Lovelace, engineer")
            .with_page("https://github.com/ada", "ada/analytical-engine");
        let llm = echo_llm();

        let blurbs = gather_context(&fetcher, &llm, &all_sources(), &settings()).await;

        assert_eq!(blurbs.len(), 4);
        assert_eq!(blurbs[0], "blurb: Company Information");
        assert_eq!(blurbs[1], "");
        assert_eq!(blurbs[2], "blurb: LinkedIn Profile");
        assert_eq!(blurbs[3], "blurb: GitHub Profile");
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_unconfigured_sources_are_never_fetched() {
        let fetcher = StaticFetcher::new();
        let llm = echo_llm();

        let blurbs =
            gather_context(&fetcher, &llm, &ContextSources::default(), &settings()).await;

        assert_eq!(blurbs, <[String; 4]>::default());
        assert!(fetcher.requested().is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blurb_failure_degrades_only_that_slot() {
        let fetcher = StaticFetcher::new()
            .with_page("https://acme.com", "Acme builds rockets")
            .with_page("https://www.crunchbase.com/organization/acme", "Series B");
        let llm = ScriptedLlm::new(|req| {
            if req.prompt.contains("Crunchbase Profile") {
                Err(crate::llm_client::LlmError::RateLimited { retries: 3 })
            } else {
                Ok("Mission-driven".to_string())
            }
        });
        let sources = ContextSources {
            company_name: Some("Acme".to_string()),
            company_website_url: Some("acme.com".to_string()),
            ..ContextSources::default()
        };

        let blurbs: ContextBlurbs = gather_context(&fetcher, &llm, &sources, &settings())
            .await
            .into();

        assert_eq!(blurbs.company, "Mission-driven");
        assert_eq!(blurbs.crunchbase, "");
        assert_eq!(blurbs.linkedin, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_source_times_out_without_blocking_others() {
        let fetcher = StaticFetcher::new()
            .with_page("https://acme.com", "Acme builds rockets")
            .with_slow_page("https://github.com/ada", Duration::from_secs(60));
        let llm = echo_llm();
        let sources = ContextSources {
            company_website_url: Some("acme.com".to_string()),
            github_url: Some("github.com/ada".to_string()),
            ..ContextSources::default()
        };

        let blurbs = gather_context(&fetcher, &llm, &sources, &settings()).await;

        assert_eq!(blurbs[0], "blurb: Company Information");
        assert_eq!(blurbs[3], "");
    }

    #[tokio::test]
    async fn test_blurb_request_uses_summary_profile() {
        let llm = ScriptedLlm::replying("short");
        let blurb = generate_blurb(&llm, BlurbKind::Github, "repo list", "small-model")
            .await
            .unwrap();

        assert_eq!(blurb, "short");
        let request = &llm.requests()[0];
        assert_eq!(request.model, "small-model");
        assert_eq!(request.max_tokens, BLURB_MAX_TOKENS);
        assert_eq!(request.system, BLURB_SYSTEM);
        assert!(request.prompt.contains("repo list"));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo");
        assert_eq!(excerpt("short", 256), "short");
        assert_eq!(excerpt("", 3), "");
    }
}
