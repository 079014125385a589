use axum::{
    http::header,
    response::{IntoResponse, Response},
};

const SITE_CSS: &str = include_str!("../../assets/site.css");

/// GET /static/site.css
pub async fn stylesheet() -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_CSS,
    )
        .into_response()
}
