use crate::pages::layout::{self, Page};

use axum::{http::StatusCode, http::Uri, response::Html};

/// Fallback for every unmatched route
pub async fn not_found_page(uri: Uri) -> (StatusCode, Html<String>) {
    log::debug!("No page for {}", uri.path());
    (StatusCode::NOT_FOUND, Html(render(uri.path())))
}

pub fn render(path: &str) -> String {
    let main = r#"<section class="section centered">
  <div class="container narrow">
    <p class="error-code">404</p>
    <h1>Page Not Found</h1>
    <p class="muted">The page you're looking for doesn't exist or has been moved.</p>
    <a class="button button-primary" href="/">Back to Home</a>
  </div>
</section>"#;

    layout::render(&Page::new("Page Not Found", path), main)
}
