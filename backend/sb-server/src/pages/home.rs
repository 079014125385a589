use crate::AppState;
use crate::pages::html::{cta_band, escape, project_card};
use crate::pages::layout::{self, Page};

use sb_core::{ProjectCatalog, company};

use axum::{extract::State, response::Html};

/// GET /
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(render(&state.catalog))
}

pub fn render(catalog: &ProjectCatalog) -> String {
    let featured: String = catalog.featured().into_iter().map(project_card).collect();

    let reasons: String = company::WHY_CHOOSE_US
        .iter()
        .map(|reason| {
            format!(
                r#"<div class="tile"><h3>{}</h3><p class="muted">{}</p></div>"#,
                escape(reason.label),
                escape(reason.value)
            )
        })
        .collect();

    let main = format!(
        r#"<section class="hero" id="home">
  <div class="container">
    <h1>{tagline}</h1>
    <p class="lead">{subtitle}</p>
    <div class="hero-actions">
      <a class="button button-accent" href="/projects">Explore Projects</a>
      <a class="button button-outline" href="/contact">Get In Touch</a>
    </div>
  </div>
</section>
<section class="section" id="about">
  <div class="container narrow">
    <h2>About {name}</h2>
    <p>{about}</p>
    <a class="text-link" href="/about">Learn more about us</a>
  </div>
</section>
<section class="section alt" id="projects">
  <div class="container">
    <h2>Our Signature Projects</h2>
    <p class="muted">Explore our portfolio of residential and commercial excellence</p>
    <div class="grid three">{featured}</div>
    <a class="text-link" href="/projects">View all projects</a>
  </div>
</section>
<section class="section" id="why">
  <div class="container">
    <h2>Why Choose Us</h2>
    <div class="grid four">{reasons}</div>
  </div>
</section>
{cta}"#,
        tagline = escape(company::TAGLINE),
        subtitle = escape(company::HERO_SUBTITLE),
        name = escape(company::NAME),
        about = escape(company::HOME_ABOUT),
        featured = featured,
        reasons = reasons,
        cta = cta_band(
            "Ready to Start Your Dream Project?",
            "Let's bring your vision to life with our expertise and dedication",
            "/contact",
            "Get In Touch",
        ),
    );

    let page = Page {
        title: None,
        description: company::META_DESCRIPTION,
        path: "/",
    };
    layout::render(&page, &main)
}
