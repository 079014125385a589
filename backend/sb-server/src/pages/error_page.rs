use crate::pages::html::escape;
use crate::pages::layout::{self, Page};

/// Friendly page for a request the server could not handle. `detail` is
/// shown verbatim (escaped) below the apology when present.
pub fn render(path: &str, detail: &str) -> String {
    let detail = match detail.trim() {
        "" => String::new(),
        text => format!(r#"<p class="error-detail">{}</p>"#, escape(text)),
    };

    let main = format!(
        r#"<section class="section centered">
  <div class="container narrow">
    <h1>Oops! Something went wrong</h1>
    <p class="muted">We encountered an unexpected error while processing your request.</p>
    {detail}
    <div class="actions">
      <a class="button button-primary" href="{path}">Try Again</a>
      <a class="button button-outline" href="/">Go Home</a>
    </div>
    <p class="muted">If this problem persists, please <a href="/contact">contact our support team</a>.</p>
  </div>
</section>"#,
        detail = detail,
        path = escape(path),
    );

    layout::render(&Page::new("Something Went Wrong", path), &main)
}
