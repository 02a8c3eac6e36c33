// src/view/state.rs
//! View State: active input tab, form fields, submit control and the results slot

use reqwest::Url;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::types::AnalysisRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputTab {
    #[default]
    Text,
    Url,
}

impl InputTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputTab::Text => "text",
            InputTab::Url => "url",
        }
    }
}

impl fmt::Display for InputTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(InputTab::Text),
            "url" => Ok(InputTab::Url),
            other => Err(format!("Unknown input tab: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a job description")]
    MissingJobText,
    #[error("Please enter a job posting URL")]
    MissingJobUrl,
    #[error("Please enter a valid http(s) job posting URL")]
    InvalidJobUrl,
}

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub job_text: String,
    pub job_url: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_tab: InputTab,
    fields: FormFields,
    submitting: bool,
    results: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> InputTab {
        self.active_tab
    }

    /// Explicit user selection is the only way the tab changes
    pub fn select_tab(&mut self, tab: InputTab) {
        self.active_tab = tab;
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn results(&self) -> Option<&str> {
        self.results.as_deref()
    }

    /// Validate the active tab's field and build the request to send
    pub fn build_request(&self) -> Result<AnalysisRequest, ValidationError> {
        let resume_text = Some(self.fields.resume_text.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        match self.active_tab {
            InputTab::Text => {
                let text = self.fields.job_text.trim();
                if text.is_empty() {
                    return Err(ValidationError::MissingJobText);
                }
                Ok(AnalysisRequest::from_text(text, resume_text))
            }
            InputTab::Url => {
                let url = self.fields.job_url.trim();
                if url.is_empty() {
                    return Err(ValidationError::MissingJobUrl);
                }
                match Url::parse(url) {
                    Ok(parsed)
                        if matches!(parsed.scheme(), "http" | "https")
                            && parsed.host_str().is_some() => {}
                    _ => return Err(ValidationError::InvalidJobUrl),
                }
                Ok(AnalysisRequest::from_url(url, resume_text))
            }
        }
    }

    /// Disable the submit control and hide previous results
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.results = None;
    }

    /// Re-enable the submit control, swapping in a rendered fragment when one is given
    pub fn finish_submit(&mut self, fragment: Option<String>) {
        self.submitting = false;
        self.results = fragment;
    }

    pub fn show_results(&mut self, fragment: String) {
        self.results = Some(fragment);
    }
}
