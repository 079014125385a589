use crate::pages::html::{cta_band, page_hero, person_card};
use crate::pages::layout::{self, Page};

use sb_core::company;

use axum::response::Html;

/// GET /team
pub async fn team_page() -> Html<String> {
    Html(render())
}

pub fn render() -> String {
    let directors: String = company::DIRECTORS.iter().map(person_card).collect();
    let people: String = company::TEAM.iter().map(person_card).collect();

    let main = format!(
        r#"{hero}
<section class="section">
  <div class="container">
    <h2>Directors</h2>
    <div class="grid two">{directors}</div>
  </div>
</section>
<section class="section alt">
  <div class="container">
    <h2>Our People</h2>
    <div class="grid four">{people}</div>
  </div>
</section>
{cta}"#,
        hero = page_hero(
            "Our Team",
            "The architects, designers and engineers behind every project"
        ),
        directors = directors,
        people = people,
        cta = cta_band(
            "Work With Our Team",
            "Tell us about your project and we'll put the right people on it.",
            "/contact",
            "Get In Touch",
        ),
    );

    layout::render(&Page::new("Team", "/team"), &main)
}
