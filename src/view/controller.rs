// src/view/controller.rs
//! Submission flow: validate, send one request, render, swap into the view

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::core::{Transport, TransportError};
use crate::types::AnalysisResponse;
use crate::view::notices::{Notice, NoticeBoard, NoticeKind};
use crate::view::renderer::render_report;
use crate::view::state::{FormFields, InputTab, ValidationError, ViewState};

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to analyze job posting. Please try again.";
pub const BUSY_MESSAGE: &str = "An analysis is already in progress";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", BUSY_MESSAGE)]
    Busy,

    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(#[source] TransportError),
}

/// Everything the page shell needs, copied out from under the lock
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub active_tab: InputTab,
    pub fields: FormFields,
    pub submitting: bool,
    pub notices: Vec<Notice>,
    pub results: Option<String>,
}

struct Session {
    view: ViewState,
    notices: NoticeBoard,
}

/// Clears the in-flight flag when a submission future is dropped or unwinds mid-request
struct InFlight<'a> {
    controller: &'a AnalysisController,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Submission abandoned before the analysis API answered");
            self.controller.lock().view.finish_submit(None);
        }
    }
}

pub struct AnalysisController {
    transport: Arc<dyn Transport>,
    session: Mutex<Session>,
}

impl AnalysisController {
    pub fn new(transport: Arc<dyn Transport>, notice_ttl: Duration) -> Self {
        Self {
            transport,
            session: Mutex::new(Session {
                view: ViewState::new(),
                notices: NoticeBoard::new(notice_ttl),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn select_tab(&self, tab: InputTab) {
        debug!("Switching input tab to {}", tab);
        self.lock().view.select_tab(tab);
    }

    pub fn dismiss_notice(&self, id: Uuid) -> bool {
        self.lock().notices.dismiss(id)
    }

    /// Surface a submission that was refused before it reached the controller
    pub fn reject_submission(&self, message: &str) {
        warn!("Submission rejected: {}", message);
        self.lock()
            .notices
            .push(NoticeKind::Validation, message, Utc::now());
    }

    /// Render a report that did not come from a submission (the built-in sample)
    pub fn show_report(&self, report: &AnalysisResponse) {
        let fragment = render_report(report);
        self.lock().view.show_results(fragment);
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> ViewSnapshot {
        let mut session = self.lock();
        let notices = session.notices.active(now).to_vec();
        ViewSnapshot {
            active_tab: session.view.active_tab(),
            fields: session.view.fields().clone(),
            submitting: session.view.is_submitting(),
            notices,
            results: session.view.results().map(str::to_string),
        }
    }

    /// Run one submission. The lock is released while the request is in flight;
    /// a concurrent submit during that window is rejected as `Busy`.
    pub async fn submit(&self, fields: FormFields) -> Result<String, SubmitError> {
        let request = {
            let mut session = self.lock();
            if session.view.is_submitting() {
                warn!("Submission rejected: another analysis is in flight");
                session
                    .notices
                    .push(NoticeKind::Validation, BUSY_MESSAGE, Utc::now());
                return Err(SubmitError::Busy);
            }

            session.view.set_fields(fields);
            let tab = session.view.active_tab();

            match session.view.build_request() {
                Ok(request) => {
                    info!("Submitting job posting from the {} tab", tab);
                    session.view.begin_submit();
                    request
                }
                Err(e) => {
                    warn!("Validation failed on the {} tab: {}", tab, e);
                    session
                        .notices
                        .push(NoticeKind::Validation, e.to_string(), Utc::now());
                    return Err(e.into());
                }
            }
        };

        let mut in_flight = InFlight {
            controller: self,
            armed: true,
        };
        let result = self.transport.submit(&request).await;
        in_flight.armed = false;

        let mut session = self.lock();
        match result {
            Ok(report) => {
                let fragment = render_report(&report);
                debug!("Rendered report fragment ({} bytes)", fragment.len());
                session.view.finish_submit(Some(fragment.clone()));
                Ok(fragment)
            }
            Err(e) => {
                error!("Error analyzing job posting (status {:?}): {}", e.status(), e);
                session.view.finish_submit(None);
                session
                    .notices
                    .push(NoticeKind::Transport, TRANSPORT_FAILURE_MESSAGE, Utc::now());
                Err(SubmitError::Transport(e))
            }
        }
    }
}
