use crate::AppState;
use crate::pages::html::{cta_band, escape, list};
use crate::pages::layout::{self, Page};

use sb_core::{Project, ProjectCatalog};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

/// GET /projects/{slug}
pub async fn project_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.catalog.get(&slug) {
        Some(project) => (StatusCode::OK, Html(render(&state.catalog, project))),
        None => (StatusCode::NOT_FOUND, Html(render_missing(&slug))),
    }
}

pub fn render(catalog: &ProjectCatalog, project: &Project) -> String {
    let mut info = vec![("Location", project.location.as_str())];
    if let Some(year) = project.year.as_deref() {
        info.push(("Year", year));
    }
    if let Some(team) = project.team.as_deref() {
        info.push(("Team", team));
    }
    info.push(("Type", project.kind.as_str()));
    info.push(("Status", project.status.label()));

    let info_strip: String = info
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div><span class="muted">{}</span><strong>{}</strong></div>"#,
                label,
                escape(value)
            )
        })
        .collect();

    let overview = project.overview.as_deref().unwrap_or(&project.description);

    let features = if project.features.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div><h2>Key Features</h2>{}</div>"#,
            list(&project.features, "checklist")
        )
    };

    let specifications = if project.specifications.is_empty() {
        String::new()
    } else {
        let rows: String = project
            .specifications
            .iter()
            .map(|spec| {
                format!(
                    "<tr><th>{}</th><td>{}</td></tr>",
                    escape(&spec.label),
                    escape(&spec.value)
                )
            })
            .collect();
        format!(r#"<div><h2>Specifications</h2><table class="specs">{rows}</table></div>"#)
    };

    let gallery = if project.images.len() > 1 {
        let images: String = project
            .images
            .iter()
            .map(|src| {
                format!(
                    r#"<img src="{}" alt="{}" loading="lazy">"#,
                    escape(src),
                    escape(&project.title)
                )
            })
            .collect();
        format!(
            r#"<section class="section alt"><div class="container"><h2>Project Gallery</h2><div class="gallery">{images}</div></div></section>"#
        )
    } else {
        String::new()
    };

    let next = catalog
        .next_of(&project.slug)
        .map(|next| {
            format!(
                r#"<section class="section next-project">
  <div class="container">
    <p class="muted">Next Project</p>
    <a class="next-link" href="{}">{}</a>
  </div>
</section>"#,
                escape(&next.link()),
                escape(&next.title)
            )
        })
        .unwrap_or_default();

    let main = format!(
        r#"<section class="project-hero" style="background-image: url('{image}')">
  <div class="container">
    <a class="text-link" href="/projects">&larr; Back to Projects</a>
    <span class="badge">{category}</span>
    <h1>{title}</h1>
    <p class="lead">{description}</p>
  </div>
</section>
<section class="info-strip">
  <div class="container grid four">{info_strip}</div>
</section>
<section class="section">
  <div class="container narrow">
    <h2>Project Overview</h2>
    <p>{overview}</p>
  </div>
</section>
<section class="section">
  <div class="container grid two">{features}{specifications}</div>
</section>
{gallery}
{cta}
{next}"#,
        image = escape(project.cover_image()),
        category = escape(project.category.label()),
        title = escape(&project.title),
        description = escape(&project.description),
        info_strip = info_strip,
        overview = escape(overview),
        features = features,
        specifications = specifications,
        gallery = gallery,
        cta = cta_band(
            "Interested in a Similar Project?",
            "Let's discuss your vision and create something extraordinary.",
            "/contact",
            "Get In Touch",
        ),
        next = next,
    );

    let path = project.link();
    let page = Page {
        title: Some(&project.title),
        description: &project.description,
        path: &path,
    };
    layout::render(&page, &main)
}

pub fn render_missing(slug: &str) -> String {
    let main = r#"<section class="section centered">
  <div class="container narrow">
    <h1>Project Not Found</h1>
    <p class="muted">We couldn't find the project you were looking for.</p>
    <a class="button button-primary" href="/projects">Back to Projects</a>
  </div>
</section>"#;

    let path = format!("/projects/{slug}");
    layout::render(&Page::new("Project Not Found", &path), main)
}
