// src/types/analysis.rs
//! Wire types exchanged with the analysis API

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Request =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingInput {
    pub text: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub job_posting: JobPostingInput,
    pub resume_text: Option<String>,
}

impl AnalysisRequest {
    pub fn from_text(text: impl Into<String>, resume_text: Option<String>) -> Self {
        Self {
            job_posting: JobPostingInput {
                text: Some(text.into()),
                url: None,
            },
            resume_text,
        }
    }

    pub fn from_url(url: impl Into<String>, resume_text: Option<String>) -> Self {
        Self {
            job_posting: JobPostingInput {
                text: None,
                url: Some(url.into()),
            },
            resume_text,
        }
    }
}

// ===== Response =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub name: String,
    /// Relative importance, 0..1
    pub weight: f64,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Critique {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub title: Option<String>,
    pub summary: String,
    /// Résumé alignment in 0..1, absent when no résumé was sent
    #[serde(default)]
    pub resume_alignment: Option<f64>,
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    #[serde(default)]
    pub explicit_skills: Vec<String>,
    #[serde(default)]
    pub hidden_skills: Vec<String>,
    #[serde(default)]
    pub critiques: Vec<Critique>,
    #[serde(default)]
    pub salary_range: Option<serde_json::Value>,
    #[serde(default)]
    pub interview_stages: Vec<String>,
    #[serde(default)]
    pub quality_score: f64,
}

// ===== Service metadata =====

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
}

/// FastAPI-style error body
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub detail: serde_json::Value,
}
