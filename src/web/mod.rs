// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{ByteUnit, Limits, ToByteUnit};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Request, Rocket, State};
use std::sync::Arc;
use tracing::info;

use crate::core::{ConfigManager, ServiceClient};
use crate::view::AnalysisController;

/// Pasted postings and résumés are URL-encoded; rocket's 32 KiB default is too small
pub fn form_limit() -> ByteUnit {
    2.mebibytes()
}

pub const OVERSIZED_SUBMISSION_MESSAGE: &str =
    "Submission is too large. Please shorten the job posting or resume.";

#[get("/")]
pub async fn index(controller: &State<AnalysisController>) -> RawHtml<String> {
    handlers::index_handler(controller).await
}

#[get("/tab/<tab>")]
pub async fn select_tab(
    tab: &str,
    controller: &State<AnalysisController>,
) -> Result<Redirect, Status> {
    handlers::select_tab_handler(tab, controller).await
}

#[post("/analyze", data = "<form>")]
pub async fn analyze(form: Form<AnalyzeForm>, controller: &State<AnalysisController>) -> Redirect {
    handlers::analyze_handler(form, controller).await
}

#[post("/notices/<id>/dismiss")]
pub async fn dismiss_notice(
    id: &str,
    controller: &State<AnalysisController>,
) -> Result<Redirect, Status> {
    handlers::dismiss_notice_handler(id, controller).await
}

#[get("/sample")]
pub async fn sample(controller: &State<AnalysisController>) -> Redirect {
    handlers::sample_handler(controller).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Resource not found",
        "NOT_FOUND",
        &["Open / to return to the analysis form"],
    ))
}

// Oversized form bodies never reach the handler; send the user back to the form
#[rocket::catch(413)]
pub fn payload_too_large(req: &Request<'_>) -> Redirect {
    if let Some(controller) = req.rocket().state::<AnalysisController>() {
        controller.reject_submission(OVERSIZED_SUBMISSION_MESSAGE);
    }
    Redirect::to("/")
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid form submission",
        "UNPROCESSABLE",
        &["Submit the analysis form from the main page"],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error",
        "INTERNAL_ERROR",
        &["Try again in a few moments"],
    ))
}

/// Assemble the server around an existing controller (tests inject stub transports here)
pub fn build_rocket(config: &ConfigManager, controller: AnalysisController) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port))
        .merge(("limits", Limits::default().limit("form", form_limit())));

    rocket::custom(figment)
        .manage(controller)
        .register("/", catchers![not_found, payload_too_large, unprocessable, internal_error])
        .mount(
            "/",
            routes![index, select_tab, analyze, dismiss_notice, sample, health],
        )
}

pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let client = ServiceClient::new(config.service.api_base_url.clone())?;
    let controller = AnalysisController::new(Arc::new(client), config.ui.notice_ttl);

    info!("Starting AJIPS front-end");
    info!("Analysis API: {}", config.service.api_base_url);
    info!(
        "Server: http://{}:{}",
        config.server.address, config.server.port
    );

    build_rocket(&config, controller)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
