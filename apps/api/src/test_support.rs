//! In-process fakes for the completion and fetch boundaries.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::gatherer::fetcher::{FetchError, PageFetcher};
use crate::llm_client::{CompletionClient, CompletionRequest, LlmError};

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync>;

/// Completion client that answers from a closure and records every request.
pub struct ScriptedLlm {
    respond: Responder,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlm {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::new(move |_| Ok(reply.clone()))
    }

    pub fn failing() -> Self {
        Self::new(|_| {
            Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        })
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        request.validate()?;
        self.requests.lock().unwrap().push(request.clone());
        (self.respond)(request)
    }
}

enum Page {
    Ready(String),
    Slow(Duration),
}

/// Fetcher serving canned pages by exact URL; anything else is a 404.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Page>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, text: &str) -> Self {
        self.pages
            .insert(url.to_string(), Page::Ready(text.to_string()));
        self
    }

    /// A page that never answers before `delay` elapses.
    pub fn with_slow_page(mut self, url: &str, delay: Duration) -> Self {
        self.pages.insert(url.to_string(), Page::Slow(delay));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Page::Ready(text)) => Ok(text.clone()),
            Some(Page::Slow(delay)) => {
                tokio::time::sleep(*delay).await;
                Ok("too late".to_string())
            }
            None => Err(FetchError::Status(404)),
        }
    }
}
