use crate::pages::html::{cta_band, escape, page_hero, person_card};
use crate::pages::layout::{self, Page};

use sb_core::company;

use axum::response::Html;

const VALUES: [(&str, &str); 4] = [
    (
        "Quality Construction",
        "Durable materials and careful workmanship on every site.",
    ),
    (
        "Transparency",
        "Clear pricing, honest timelines and regular updates.",
    ),
    (
        "Design Excellence",
        "Innovative designs that blend aesthetics with functionality.",
    ),
    (
        "Timely Delivery",
        "Planned schedules that we hold ourselves to.",
    ),
];

/// GET /about
pub async fn about_page() -> Html<String> {
    Html(render())
}

pub fn render() -> String {
    let stats: String = company::STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat"><span class="stat-value">{}</span><span class="muted">{}</span></div>"#,
                escape(stat.value),
                escape(stat.label)
            )
        })
        .collect();

    let services: String = company::SERVICES
        .iter()
        .map(|service| {
            format!(
                r#"<div class="tile"><h3>{}</h3><p class="muted">{}</p></div>"#,
                escape(service.title),
                escape(service.description)
            )
        })
        .collect();

    let values: String = VALUES
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="tile"><h3>{}</h3><p class="muted">{}</p></div>"#,
                escape(title),
                escape(text)
            )
        })
        .collect();

    let team: String = company::DIRECTORS
        .iter()
        .chain(company::TEAM.iter())
        .map(person_card)
        .collect();

    let main = format!(
        r#"{hero}
<section class="section">
  <div class="container narrow">
    <p class="lead">{intro}</p>
  </div>
</section>
<section class="section alt">
  <div class="container grid two">
    <div class="tile"><h2>Our Mission</h2><p>{mission}</p></div>
    <div class="tile"><h2>Our Vision</h2><p>{vision}</p></div>
  </div>
</section>
<section class="section">
  <div class="container">
    <h2>By The Numbers</h2>
    <div class="grid four">{stats}</div>
  </div>
</section>
<section class="section alt">
  <div class="container">
    <h2>Core Services</h2>
    <div class="grid three">{services}</div>
  </div>
</section>
<section class="section">
  <div class="container">
    <div class="grid four">{values}</div>
  </div>
</section>
<section class="section alt">
  <div class="container">
    <h2>Our Expert Team</h2>
    <div class="grid three">{team}</div>
  </div>
</section>
{cta}"#,
        hero = page_hero(
            &format!("About {}", company::LEGAL_NAME),
            company::TAGLINE
        ),
        intro = escape(company::ABOUT_INTRO),
        mission = escape(company::MISSION),
        vision = escape(company::VISION),
        stats = stats,
        services = services,
        values = values,
        team = team,
        cta = cta_band(
            "Ready to Work With Us?",
            "Let's discuss your project and bring your vision to life.",
            "/contact",
            "Contact Us",
        ),
    );

    layout::render(&Page::new("About", "/about"), &main)
}
