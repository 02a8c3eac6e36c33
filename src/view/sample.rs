// src/view/sample.rs
//! Built-in sample analysis for previewing the report layout offline

use crate::types::{AnalysisResponse, Critique, FocusArea, Severity};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_analysis() -> AnalysisResponse {
    AnalysisResponse {
        title: Some("Senior Backend Engineer".to_string()),
        summary: "**Senior Backend Engineer** (Senior Level) | Key skills: python, aws, postgresql, docker, kubernetes | Primary focus: Backend Development (60% match) | Inferred 14 hidden skills that may be valuable | Job posting quality: B".to_string(),
        resume_alignment: Some(0.75),
        focus_areas: vec![
            FocusArea {
                name: "Backend Development".to_string(),
                weight: 0.6,
                skills: strings(&["python", "fastapi", "postgresql", "api"]),
            },
            FocusArea {
                name: "Cloud & Infrastructure".to_string(),
                weight: 0.4,
                skills: strings(&["aws", "docker", "kubernetes"]),
            },
        ],
        explicit_skills: strings(&[
            "python", "fastapi", "postgresql", "aws", "docker", "kubernetes", "api", "rest",
        ]),
        hidden_skills: strings(&[
            "testing",
            "packaging",
            "type hints",
            "virtual environments",
            "pip",
            "pytest",
            "iam",
            "vpc",
            "cloudwatch",
            "s3",
            "ec2",
            "containerization",
            "dockerfile",
            "docker compose",
        ]),
        critiques: vec![
            Critique {
                severity: Severity::Info,
                message: "No salary or compensation information provided. Including salary range increases application rates and attracts more qualified candidates.".to_string(),
            },
            Critique {
                severity: Severity::Info,
                message: "Work location or remote policy not clearly specified.".to_string(),
            },
        ],
        salary_range: None,
        interview_stages: Vec::new(),
        quality_score: 0.0,
    }
}
