//! UI serving routes
//!
//! Serves the static HTML/JS/CSS report dashboard embedded at compile time

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../ui/index.html");
const APP_JS: &str = include_str!("../../ui/app.js");
const REPORT_CSS: &str = include_str!("../../ui/report.css");

/// GET /
///
/// Serves the report page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
///
/// Serves the renderer script
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/report.css
pub async fn serve_report_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], REPORT_CSS).into_response()
}
