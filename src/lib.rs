//! Front-end for the AJIPS job-posting analysis API: collects a posting (text or URL)
//! and an optional résumé, submits them, and renders the returned report as HTML.

pub mod core;
pub mod types;
pub mod view;
pub mod web;

pub use crate::core::{ConfigManager, ServiceClient, Transport, TransportError};
pub use types::{AnalysisRequest, AnalysisResponse};
pub use view::{render_report, AnalysisController};
pub use web::{build_rocket, start_web_server};
