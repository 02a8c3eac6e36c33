// src/view/mod.rs
//! Browser-facing side: view state, rendering and the submission flow

pub mod controller;
pub mod notices;
pub mod page;
pub mod renderer;
pub mod sample;
pub mod state;

pub use controller::{
    AnalysisController, SubmitError, ViewSnapshot, BUSY_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
pub use notices::{Notice, NoticeBoard, NoticeKind};
pub use page::{render_page, render_report_document};
pub use renderer::{escape_html, render_report};
pub use sample::sample_analysis;
pub use state::{FormFields, InputTab, ValidationError, ViewState};
