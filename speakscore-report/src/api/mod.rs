//! HTTP API handlers for speakscore-report

pub mod assessment;
pub mod buildinfo;
pub mod health;
pub mod ui;

pub use assessment::{get_assessment, AssessmentError};
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index, serve_report_css};
