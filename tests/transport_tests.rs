use job_insight::types::{AnalysisRequest, Severity};
use job_insight::{ServiceClient, Transport, TransportError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analysis_body() -> serde_json::Value {
    json!({
        "title": "Senior Backend Engineer",
        "summary": "Key skills: python, aws",
        "resume_alignment": 0.75,
        "focus_areas": [
            {"name": "Backend Development", "weight": 0.6, "skills": ["python", "fastapi"]}
        ],
        "explicit_skills": ["python", "aws"],
        "hidden_skills": ["iam", "vpc"],
        "critiques": [
            {"severity": "info", "message": "Work location not specified."}
        ],
        "salary_range": null,
        "interview_stages": [],
        "quality_score": 68.5
    })
}

#[tokio::test]
async fn submit_posts_request_and_decodes_report() {
    let server = MockServer::start().await;
    let request = AnalysisRequest::from_text("We need a Python developer", None);

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({
            "job_posting": {"text": "We need a Python developer", "url": null},
            "resume_text": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let report = client.submit(&request).await.unwrap();

    assert_eq!(report.title.as_deref(), Some("Senior Backend Engineer"));
    assert_eq!(report.resume_alignment, Some(0.75));
    assert_eq!(report.focus_areas[0].skills, vec!["python", "fastapi"]);
    assert_eq!(report.critiques[0].severity, Severity::Info);
    assert_eq!(report.quality_score, 68.5);
}

#[tokio::test]
async fn non_success_status_carries_status_and_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "URL is not allowed or is potentially unsafe"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let err = client
        .submit(&AnalysisRequest::from_url("http://127.0.0.1/local", None))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    match err {
        TransportError::Status { detail, .. } => assert_eq!(
            detail.as_deref(),
            Some("URL is not allowed or is potentially unsafe")
        ),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let err = client
        .submit(&AnalysisRequest::from_text("anything", None))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let err = client
        .submit(&AnalysisRequest::from_text("anything", None))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() {
    // Bind then drop a server so the port is very likely closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = ServiceClient::new(uri).unwrap();
    let err = client
        .submit(&AnalysisRequest::from_text("anything", None))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Network { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn health_and_version_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "AJIPS", "version": "1.0.0"})),
        )
        .mount(&server)
        .await;

    let client = ServiceClient::new(format!("{}/", server.uri())).unwrap();

    assert!(client.health().await.unwrap().is_ok());
    let version = client.version().await.unwrap();
    assert_eq!(version.name, "AJIPS");
    assert_eq!(version.version, "1.0.0");
}
