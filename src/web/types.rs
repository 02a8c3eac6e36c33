// src/web/types.rs

use rocket::form::FromForm;
use rocket::serde::Serialize;

use crate::view::FormFields;

/// Fields posted by the analysis form; all optional so a blank field is never a 422
#[derive(Debug, FromForm)]
pub struct AnalyzeForm {
    pub job_text: Option<String>,
    pub job_url: Option<String>,
    pub resume_text: Option<String>,
}

impl From<AnalyzeForm> for FormFields {
    fn from(form: AnalyzeForm) -> Self {
        FormFields {
            job_text: form.job_text.unwrap_or_default(),
            job_url: form.job_url.unwrap_or_default(),
            resume_text: form.resume_text.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: &str, error_code: &str, suggestions: &[&str]) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            error_code: error_code.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}
