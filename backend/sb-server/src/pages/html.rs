use sb_core::Project;
use sb_core::company::TeamMember;

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full-width banner at the top of inner pages
pub fn page_hero(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="page-hero">
  <div class="container">
    <h1>{}</h1>
    <p>{}</p>
  </div>
</section>"#,
        escape(title),
        escape(subtitle)
    )
}

/// Closing call-to-action band
pub fn cta_band(heading: &str, text: &str, href: &str, label: &str) -> String {
    format!(
        r#"<section class="cta-band">
  <div class="container">
    <h2>{}</h2>
    <p>{}</p>
    <a class="button button-accent" href="{}">{}</a>
  </div>
</section>"#,
        escape(heading),
        escape(text),
        escape(href),
        escape(label)
    )
}

/// Grid card linking to a project detail page
pub fn project_card(project: &Project) -> String {
    format!(
        r#"<a class="project-card" href="{href}">
  <img src="{image}" alt="{title}" loading="lazy">
  <div class="project-card-body">
    <span class="badge">{kind}</span>
    <h3>{title}</h3>
    <p class="muted">{location}</p>
  </div>
</a>"#,
        href = escape(&project.link()),
        image = escape(project.cover_image()),
        title = escape(&project.title),
        kind = escape(&project.kind),
        location = escape(&project.location),
    )
}

pub fn person_card(member: &TeamMember) -> String {
    format!(
        r#"<article class="person-card">
  <img src="{image}" alt="{name}" loading="lazy">
  <h3>{name}</h3>
  <p class="role">{role}</p>
  <p class="muted">{bio}</p>
</article>"#,
        image = escape(member.image),
        name = escape(member.name),
        role = escape(member.role),
        bio = escape(member.bio),
    )
}

/// `<ul>` of escaped items
pub fn list(items: &[String], class: &str) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!(r#"<ul class="{}">{}</ul>"#, escape(class), items)
}
