//! Per-user session: the documents and results of the most recent analysis.

pub mod handlers;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::evaluation::result::AnalysisResult;
use crate::gatherer::ContextBlurbs;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
    /// Company blurb, reused by cover letter generation.
    pub company_info: Option<String>,
    pub context: Option<ContextBlurbs>,
    pub analysis: Option<AnalysisResult>,
    pub cover_letter: Option<String>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            resume_text: None,
            job_description: None,
            company_info: None,
            context: None,
            analysis: None,
            cover_letter: None,
        }
    }

    /// Clears every field except identity and creation time.
    pub fn reset(&mut self) {
        self.resume_text = None;
        self.job_description = None;
        self.company_info = None;
        self.context = None;
        self.analysis = None;
        self.cover_letter = None;
        self.updated_at = Utc::now();
    }

    /// Resume text and job description, if both are present and an analysis has run.
    pub fn cover_letter_inputs(&self) -> Option<(&str, &str)> {
        self.analysis.as_ref()?;
        let resume = self.resume_text.as_deref().filter(|s| !s.trim().is_empty())?;
        let jd = self
            .job_description
            .as_deref()
            .filter(|s| !s.trim().is_empty())?;
        Some((resume, jd))
    }
}

/// In-memory sessions. Idle sessions are swept whenever a new one is created.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        let mut sessions = self.sessions.write().await;

        let cutoff = session.created_at - self.ttl;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} idle session(s)", evicted);
        }

        sessions.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Applies `f` under the write lock and returns the updated snapshot.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Option<Session>
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        f(session);
        session.updated_at = Utc::now();
        Some(session.clone())
    }
}
