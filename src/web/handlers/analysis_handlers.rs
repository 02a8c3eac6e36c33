// src/web/handlers/analysis_handlers.rs
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;
use tracing::{info, warn};
use uuid::Uuid;

use crate::view::{render_page, sample_analysis, AnalysisController, InputTab};
use crate::web::types::AnalyzeForm;

pub async fn index_handler(controller: &State<AnalysisController>) -> RawHtml<String> {
    let snapshot = controller.snapshot(chrono::Utc::now());
    RawHtml(render_page(&snapshot))
}

pub async fn select_tab_handler(
    tab: &str,
    controller: &State<AnalysisController>,
) -> Result<Redirect, Status> {
    let tab: InputTab = tab.parse().map_err(|e: String| {
        warn!("{}", e);
        Status::NotFound
    })?;

    controller.select_tab(tab);
    Ok(Redirect::to("/"))
}

/// Validation and transport failures surface as notices on the redirected page.
pub async fn analyze_handler(
    form: Form<AnalyzeForm>,
    controller: &State<AnalysisController>,
) -> Redirect {
    match controller.submit(form.into_inner().into()).await {
        Ok(_) => info!("Analysis rendered"),
        Err(e) => info!("Analysis not rendered: {}", e),
    }
    Redirect::to("/")
}

pub async fn dismiss_notice_handler(
    id: &str,
    controller: &State<AnalysisController>,
) -> Result<Redirect, Status> {
    let id = Uuid::parse_str(id).map_err(|_| Status::NotFound)?;

    // An already-expired notice is not an error: the page just reloads without it.
    controller.dismiss_notice(id);
    Ok(Redirect::to("/"))
}

pub async fn sample_handler(controller: &State<AnalysisController>) -> Redirect {
    controller.show_report(&sample_analysis());
    Redirect::to("/")
}
