// src/core/service_client.rs
//! HTTP transport to the analysis API - one network call per submission, no retries

use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::types::analysis::ApiErrorBody;
use crate::types::{AnalysisRequest, AnalysisResponse, HealthStatus, VersionInfo};

const ANALYZE_ENDPOINT: &str = "/analyze";
const HEALTH_ENDPOINT: &str = "/health";
const VERSION_ENDPOINT: &str = "/version";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("analysis API returned HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("invalid response body (HTTP {status}): {message}")]
    Decode { status: u16, message: String },
}

impl TransportError {
    /// HTTP status of the failed exchange, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } | TransportError::Decode { status, .. } => {
                Some(*status)
            }
        }
    }
}

/// Submits an analysis request and returns the decoded report.
#[rocket::async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, TransportError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// No timeout is configured: a call runs to completion or failure.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        self.get_json(HEALTH_ENDPOINT).await
    }

    pub async fn version(&self) -> Result<VersionInfo, TransportError> {
        self.get_json(VERSION_ENDPOINT).await
    }

    async fn get_json<R>(&self, endpoint: &str) -> Result<R, TransportError>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: url.clone(),
                source,
            })?;

        Self::read_json(&url, response).await
    }

    async fn read_json<R>(url: &str, response: Response) -> Result<R, TransportError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Network {
                url: url.to_string(),
                source,
            })?;

        if !status.is_success() {
            let detail = Self::error_detail(status, &body);
            error!(
                "Analysis API error {} from {}: {}",
                status,
                url,
                detail.as_deref().unwrap_or("-")
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_str::<R>(&body).map_err(|e| TransportError::Decode {
            status: status.as_u16(),
            message: e.to_string(),
        })
    }

    fn error_detail(status: StatusCode, body: &str) -> Option<String> {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody {
                detail: serde_json::Value::String(detail),
            }) => Some(detail),
            Ok(ApiErrorBody { detail }) => Some(detail.to_string()),
            Err(_) if body.trim().is_empty() => status.canonical_reason().map(str::to_string),
            Err(_) => Some(body.chars().take(200).collect()),
        }
    }
}

#[rocket::async_trait]
impl Transport for ServiceClient {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, TransportError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);

        info!("Calling analysis API: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: url.clone(),
                source,
            })?;

        let report: AnalysisResponse = Self::read_json(&url, response).await?;
        info!("Received analysis with {} explicit skills", report.explicit_skills.len());
        Ok(report)
    }
}
