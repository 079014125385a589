use crate::pages::html::{cta_band, escape, page_hero, project_card};
use crate::pages::layout::{self, Page};
use crate::{AppState, ListProjectsQuery};

use sb_core::{CategoryFilter, Project, ProjectCatalog, ProjectCategory};

use axum::{
    extract::{Query, State},
    response::Html,
};

const PORTFOLIO_STATS: [(&str, &str); 3] = [
    ("50+", "Projects Completed"),
    ("50K+", "Square Feet Delivered"),
    ("100%", "Client Satisfaction"),
];

/// GET /projects?category=
///
/// An unrecognised category shows every project rather than an error page.
pub async fn projects_page(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Html<String> {
    let filter = CategoryFilter::from_query(query.category.as_deref()).unwrap_or_else(|e| {
        log::debug!("Ignoring project filter: {}", e);
        CategoryFilter::All
    });

    Html(render(&state.catalog, filter))
}

pub fn render(catalog: &ProjectCatalog, filter: CategoryFilter) -> String {
    let buttons: String = CategoryFilter::options()
        .map(|option| {
            let href = match option {
                CategoryFilter::All => "/projects".to_string(),
                other => format!("/projects?category={}", other.as_str()),
            };
            let class = if option == filter {
                "filter-button active"
            } else {
                "filter-button"
            };
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                escape(&href),
                escape(option.label())
            )
        })
        .collect();

    let projects = catalog.filter(filter);
    let grid: String = if projects.is_empty() {
        r#"<p class="muted">No projects in this category yet.</p>"#.to_string()
    } else {
        projects.into_iter().map(project_card).collect()
    };

    let residential_link = if filter == CategoryFilter::Only(ProjectCategory::Residential) {
        r#"<p><a class="text-link" href="/projects/residential">See our residential portfolio in detail</a></p>"#
    } else {
        ""
    };

    let stats: String = PORTFOLIO_STATS
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<div class="stat"><span class="stat-value">{}</span><span class="muted">{}</span></div>"#,
                escape(value),
                escape(label)
            )
        })
        .collect();

    let main = format!(
        r#"{hero}
<section class="section">
  <div class="container">
    <div class="filter-bar">
      <span>Filter by Category:</span>
      {buttons}
    </div>
    {residential_link}
    <div class="grid three">{grid}</div>
  </div>
</section>
<section class="section alt">
  <div class="container grid three">{stats}</div>
</section>
{cta}"#,
        hero = page_hero(
            "Our Projects",
            "A portfolio of homes, workplaces and restorations across Bangalore"
        ),
        buttons = buttons,
        residential_link = residential_link,
        grid = grid,
        stats = stats,
        cta = cta_band(
            "Have a Project in Mind?",
            "Let's talk about what you want to build.",
            "/contact",
            "Start a Conversation",
        ),
    );

    layout::render(&Page::new("Projects", "/projects"), &main)
}

/// GET /projects/residential
pub async fn residential_page(State(state): State<AppState>) -> Html<String> {
    Html(render_residential(&state.catalog))
}

pub fn render_residential(catalog: &ProjectCatalog) -> String {
    let cards: String = catalog
        .in_category(ProjectCategory::Residential)
        .into_iter()
        .map(residential_card)
        .collect();

    let main = format!(
        r#"{hero}
<section class="section">
  <div class="container grid three">
    <div class="tile"><h3>Design Excellence</h3><p class="muted">Layouts planned around how families live.</p></div>
    <div class="tile"><h3>Premium Materials</h3><p class="muted">Finishes chosen to last for decades.</p></div>
    <div class="tile"><h3>Smart Living</h3><p class="muted">Homes ready for modern technology.</p></div>
  </div>
</section>
<section class="section alt">
  <div class="container">
    <h2>Our Residential Portfolio</h2>
    <div class="grid two">{cards}</div>
  </div>
</section>
{cta}"#,
        hero = page_hero(
            "Residential Projects",
            "Luxury homes designed for modern living"
        ),
        cards = cards,
        cta = cta_band(
            "Ready to Build Your Dream Home?",
            "Tell us about the home you have in mind.",
            "/contact",
            "Get In Touch",
        ),
    );

    layout::render(
        &Page::new("Residential Projects", "/projects/residential"),
        &main,
    )
}

fn residential_card(project: &Project) -> String {
    let highlights: String = project
        .highlights
        .iter()
        .map(|h| format!(r#"<span class="badge">{}</span>"#, escape(h)))
        .collect();

    let area = project
        .area
        .as_deref()
        .map(|area| format!(r#"<p><strong>Area:</strong> {}</p>"#, escape(area)))
        .unwrap_or_default();

    format!(
        r#"<article class="residential-card">
  <img src="{image}" alt="{title}" loading="lazy">
  <div class="project-card-body">
    <h3><a href="{href}">{title}</a></h3>
    <p class="muted">{description}</p>
    <div class="badges">{highlights}</div>
    {area}
    <p><strong>Location:</strong> {location}</p>
  </div>
</article>"#,
        image = escape(project.cover_image()),
        title = escape(&project.title),
        href = escape(&project.link()),
        description = escape(&project.description),
        highlights = highlights,
        area = area,
        location = escape(&project.location),
    )
}
