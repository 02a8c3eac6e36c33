#![allow(dead_code)]

use job_insight::types::{AnalysisRequest, AnalysisResponse, Critique, FocusArea, Severity};
use job_insight::{Transport, TransportError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn report(title: &str) -> AnalysisResponse {
    AnalysisResponse {
        title: Some(title.to_string()),
        summary: "Backend role with cloud focus".to_string(),
        resume_alignment: None,
        focus_areas: vec![FocusArea {
            name: "Backend Development".to_string(),
            weight: 0.6,
            skills: vec!["rust".to_string(), "postgresql".to_string()],
        }],
        explicit_skills: vec!["rust".to_string(), "postgresql".to_string()],
        hidden_skills: vec![],
        critiques: vec![Critique {
            severity: Severity::Warning,
            message: "Salary range missing".to_string(),
        }],
        salary_range: None,
        interview_stages: vec![],
        quality_score: 72.0,
    }
}

pub enum Outcome {
    Report(AnalysisResponse),
    Status(u16),
}

/// Records every request; optionally blocks inside `submit` until released.
pub struct StubTransport {
    outcome: Outcome,
    calls: AtomicUsize,
    requests: Mutex<Vec<AnalysisRequest>>,
    gate: Option<(Notify, Notify)>,
}

impl StubTransport {
    pub fn ok(report: AnalysisResponse) -> Self {
        Self::new(Outcome::Report(report), false)
    }

    pub fn failing(status: u16) -> Self {
        Self::new(Outcome::Status(status), false)
    }

    pub fn gated(report: AnalysisResponse) -> Self {
        Self::new(Outcome::Report(report), true)
    }

    fn new(outcome: Outcome, gated: bool) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            gate: gated.then(|| (Notify::new(), Notify::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn wait_started(&self) {
        if let Some((started, _)) = &self.gate {
            started.notified().await;
        }
    }

    pub fn release(&self) {
        if let Some((_, release)) = &self.gate {
            release.notify_one();
        }
    }
}

#[rocket::async_trait]
impl Transport for StubTransport {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some((started, release)) = &self.gate {
            started.notify_one();
            release.notified().await;
        }

        match &self.outcome {
            Outcome::Report(report) => Ok(report.clone()),
            Outcome::Status(status) => Err(TransportError::Status {
                status: *status,
                detail: Some("Internal server error during analysis".to_string()),
            }),
        }
    }
}
