//! Shared page chrome: head metadata, header navigation, footer and the
//! floating WhatsApp button.

use crate::pages::html::escape;

use sb_core::{NAV_LINKS, company};

/// Per-page values the layout needs
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// Page name shown before the site name; `None` uses the site title
    pub title: Option<&'a str>,
    pub description: &'a str,
    /// Request path, used to mark the active navigation link
    pub path: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, path: &'a str) -> Self {
        Self {
            title: Some(title),
            description: company::META_DESCRIPTION,
            path,
        }
    }

    pub fn document_title(&self) -> String {
        match self.title {
            Some(title) => format!("{} | {}", title, company::NAME),
            None => company::META_TITLE.to_string(),
        }
    }
}

/// Wrap page content in the full HTML document
pub fn render(page: &Page, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{og_title}">
<meta property="og:description" content="{og_description}">
<meta property="og:type" content="website">
<meta property="og:site_name" content="{site}">
<link rel="icon" href="/favicon.ico">
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
{loading}
{header}
<main>
{main}
</main>
{footer}
{whatsapp}
{script}
</body>
</html>
"#,
        title = escape(&page.document_title()),
        description = escape(page.description),
        og_title = escape(company::OG_TITLE),
        og_description = escape(company::OG_DESCRIPTION),
        site = escape(company::NAME),
        loading = LOADING_SCREEN,
        header = header(page.path),
        main = main,
        footer = footer(),
        whatsapp = whatsapp_button(),
        script = PAGE_SCRIPT,
    )
}

/// Decorative overlay; CSS fades it out shortly after load
const LOADING_SCREEN: &str = r#"<div class="loading-screen" aria-hidden="true">
  <div class="brand-mark">S</div>
  <div class="loading-bar"><span></span></div>
</div>"#;

/// Client side of the contact form state:
/// - banners carrying `data-dismiss-after` (milliseconds) remove themselves
/// - a `data-submit-once` form disables its submit button while sending and
///   swallows further submits
/// - editing a field drops the banner and that field's error text
const PAGE_SCRIPT: &str = r#"<script>
document.querySelectorAll("[data-dismiss-after]").forEach(function (el) {
  setTimeout(function () { el.remove(); }, Number(el.dataset.dismissAfter));
});
document.querySelectorAll("form[data-submit-once]").forEach(function (form) {
  form.addEventListener("submit", function (event) {
    if (form.dataset.sending) {
      event.preventDefault();
      return;
    }
    form.dataset.sending = "true";
    var button = form.querySelector("button[type=submit]");
    if (button) {
      button.disabled = true;
      button.textContent = button.dataset.sendingLabel;
    }
  });
  form.addEventListener("input", function (event) {
    form.querySelectorAll(".banner").forEach(function (el) { el.remove(); });
    var error = document.getElementById(event.target.name + "-error");
    if (error) { error.remove(); }
    event.target.removeAttribute("aria-invalid");
  });
});
window.addEventListener("pageshow", function (event) {
  if (!event.persisted) { return; }
  document.querySelectorAll("form[data-submit-once]").forEach(function (form) {
    delete form.dataset.sending;
    var button = form.querySelector("button[type=submit]");
    if (button) {
      button.disabled = false;
      button.textContent = button.dataset.sendLabel;
    }
  });
});
</script>"#;

fn header(path: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|link| {
            let current = if link.is_active(path) {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, link.href, current, link.label)
        })
        .collect();

    let phone = company::PHONES[0];

    format!(
        r#"<header class="site-header">
  <div class="container header-inner">
    <a class="brand" href="/"><span class="brand-mark">S</span><span>{short}</span></a>
    <input type="checkbox" id="nav-toggle" class="nav-toggle" aria-label="Open menu">
    <label for="nav-toggle" class="nav-toggle-label" aria-hidden="true"><span></span></label>
    <nav class="site-nav">
      {links}
      <div class="mobile-actions">
        <a class="button button-accent" href="/projects">Explore Projects</a>
        <a class="button button-primary" href="/contact">Get In Touch</a>
        <p class="quick-contact">Quick contact:
          <a href="{tel}">Call</a>
          <a href="{whatsapp}" target="_blank" rel="noopener noreferrer">WhatsApp</a>
        </p>
      </div>
    </nav>
    <a class="button button-accent header-cta" href="/contact">Get In Touch</a>
  </div>
</header>"#,
        short = escape(company::SHORT_NAME),
        links = links,
        tel = escape(&company::tel_link(phone)),
        whatsapp = escape(company::WHATSAPP_LINK),
    )
}

fn footer() -> String {
    let quick_links: String = NAV_LINKS
        .iter()
        .map(|link| format!(r#"<li><a href="{}">{}</a></li>"#, link.href, link.label))
        .collect();

    let phones: String = company::PHONES
        .iter()
        .map(|phone| {
            format!(
                r#"<li><a href="{}">Ph: {}</a></li>"#,
                escape(&company::tel_link(phone)),
                escape(phone)
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer">
  <div class="container footer-grid">
    <div>
      <a class="brand" href="/"><span class="brand-mark">S</span><span>{short}</span></a>
      <p>{tagline}</p>
    </div>
    <div>
      <h3>Quick Links</h3>
      <ul>{quick_links}</ul>
    </div>
    <div>
      <h3>Contact</h3>
      <address>{address}</address>
      <ul>{phones}
        <li><a href="mailto:{email}">{email}</a></li>
        <li><a href="{whatsapp}" target="_blank" rel="noopener noreferrer">WhatsApp</a></li>
      </ul>
    </div>
    <div>
      <h3>Follow Us</h3>
      <ul class="social">
        <li><a href="https://facebook.com" target="_blank" rel="noopener noreferrer">Facebook</a></li>
        <li><a href="https://instagram.com" target="_blank" rel="noopener noreferrer">Instagram</a></li>
        <li><a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">LinkedIn</a></li>
      </ul>
    </div>
  </div>
  <div class="container footer-bottom">
    <p>&copy; {legal}. All rights reserved.</p>
  </div>
</footer>"#,
        short = escape(company::SHORT_NAME),
        tagline = escape(company::TAGLINE),
        quick_links = quick_links,
        address = company::ADDRESS_LINES
            .iter()
            .map(|line| escape(line))
            .collect::<Vec<_>>()
            .join("<br>"),
        phones = phones,
        email = escape(company::EMAIL),
        whatsapp = escape(company::WHATSAPP_LINK),
        legal = escape(company::LEGAL_NAME),
    )
}

fn whatsapp_button() -> String {
    format!(
        r#"<a class="whatsapp-fab" href="{}" target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">WhatsApp</a>"#,
        escape(company::WHATSAPP_LINK)
    )
}
