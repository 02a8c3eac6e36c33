// src/types/mod.rs
pub mod analysis;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, Critique, FocusArea, HealthStatus, JobPostingInput,
    Severity, VersionInfo,
};
