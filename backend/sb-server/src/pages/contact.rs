use crate::pages::error_page;
use crate::pages::html::{escape, page_hero};
use crate::pages::layout::{self, Page};
use crate::{AppState, ContactRequest, ContactWorkflow, WorkflowOutcome};

use sb_core::{
    BannerKind, ContactField, ContactFormState, ProjectType, SEND_LABEL, SENDING_LABEL,
    StatusBanner, company,
};

use std::time::Instant;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::Html,
};

/// GET /contact
pub async fn contact_page(State(state): State<AppState>) -> Html<String> {
    Html(render(&ContactFormState::new(state.success_display)))
}

/// POST /contact
///
/// Runs the submission and re-renders the page with the result. Typed values
/// survive a validation or delivery failure; a delivered message clears them.
/// A duplicate of a message still being sent renders the form as sending.
pub async fn contact_submit(
    State(state): State<AppState>,
    form: Result<Form<ContactRequest>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => {
            log::debug!("Unreadable contact form post: {}", rejection);
            return (
                rejection.status(),
                Html(error_page::render("/contact", &rejection.body_text())),
            );
        }
    };

    let mut form_state = ContactFormState::with_form(request.into(), state.success_display);

    let status = match ContactWorkflow::run(
        &mut form_state,
        &state.dispatcher,
        &state.in_flight,
        Instant::now(),
    )
    .await
    {
        WorkflowOutcome::Delivered => StatusCode::OK,
        WorkflowOutcome::Invalid => StatusCode::BAD_REQUEST,
        WorkflowOutcome::Failed => StatusCode::BAD_GATEWAY,
        WorkflowOutcome::Skipped => StatusCode::CONFLICT,
    };

    (status, Html(render(&form_state)))
}

pub fn render(state: &ContactFormState) -> String {
    let main = format!(
        r#"{hero}
<section class="section">
  <div class="container grid two contact-grid">
    {info}
    {form}
  </div>
</section>
<section class="section alt">
  <div class="container">
    <h2>Find Us On The Map</h2>
    <iframe class="map" src="{map}" title="Office location" loading="lazy" referrerpolicy="no-referrer-when-downgrade" allowfullscreen></iframe>
  </div>
</section>"#,
        hero = page_hero(
            "Get In Touch",
            "Tell us about your project and we'll get back to you shortly"
        ),
        info = contact_info(),
        form = contact_form(state),
        map = escape(company::MAP_EMBED_URL),
    );

    layout::render(&Page::new("Contact", "/contact"), &main)
}

fn contact_info() -> String {
    let phones: String = company::PHONES
        .iter()
        .map(|phone| {
            format!(
                r#"<a href="{}">{}</a><br>"#,
                escape(&company::tel_link(phone)),
                escape(phone)
            )
        })
        .collect();

    let hours: String = company::BUSINESS_HOURS
        .iter()
        .map(|line| format!("<li>{}</li>", escape(line)))
        .collect();

    format!(
        r#"<div class="contact-info">
  <h2>Contact Information</h2>
  <div class="tile"><h3>Address</h3><address>{address}</address></div>
  <div class="tile"><h3>Phone</h3><p>{phones}</p></div>
  <div class="tile"><h3>Email</h3><p><a href="mailto:{email}">{email}</a></p></div>
  <div class="tile"><h3>WhatsApp</h3><p><a href="{whatsapp}" target="_blank" rel="noopener noreferrer">Chat with us</a></p></div>
  <div class="tile"><h3>Business Hours</h3><ul>{hours}</ul></div>
</div>"#,
        address = company::ADDRESS_LINES
            .iter()
            .map(|line| escape(line))
            .collect::<Vec<_>>()
            .join("<br>"),
        phones = phones,
        email = escape(company::EMAIL),
        whatsapp = escape(company::WHATSAPP_LINK),
        hours = hours,
    )
}

fn contact_form(state: &ContactFormState) -> String {
    let form = state.form();
    let errors = state.field_errors();

    let field_error = |field: ContactField| -> String {
        errors
            .get(field)
            .map(|msg| {
                format!(
                    r#"<p class="field-error" id="{}-error">{}</p>"#,
                    field.as_str(),
                    escape(msg)
                )
            })
            .unwrap_or_default()
    };

    let invalid = |field: ContactField| -> &'static str {
        if errors.contains(field) {
            r#" aria-invalid="true""#
        } else {
            ""
        }
    };

    let options: String = std::iter::once(r#"<option value="">Select a project type</option>"#.to_string())
        .chain(ProjectType::ALL.iter().map(|kind| {
            let selected = if form.project_type == kind.as_str() {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                kind.as_str(),
                selected,
                escape(kind.label())
            )
        }))
        .collect();

    let banner = StatusBanner::from_state(state)
        .map(|banner| match banner.kind {
            BannerKind::Success => format!(
                r#"<div class="banner banner-success" role="status" data-dismiss-after="{}">{}</div>"#,
                state.success_display().as_millis(),
                escape(&banner.text)
            ),
            BannerKind::Error => format!(
                r#"<div class="banner banner-error" role="alert">{}</div>"#,
                escape(&banner.text)
            ),
        })
        .unwrap_or_default();

    let disabled = if state.can_submit() { "" } else { " disabled" };

    format!(
        r#"<form class="contact-form" method="post" action="/contact" novalidate data-submit-once>
  <h2>Send Us a Message</h2>
  <label for="name">Full Name *</label>
  <input id="name" name="name" type="text" placeholder="John Doe" value="{name}"{name_invalid}>
  {name_error}
  <label for="email">Email Address *</label>
  <input id="email" name="email" type="email" placeholder="john@example.com" value="{email}"{email_invalid}>
  {email_error}
  <label for="phone">Phone Number</label>
  <input id="phone" name="phone" type="tel" placeholder="+91 98765 43210" value="{phone}"{phone_invalid}>
  {phone_error}
  <label for="projectType">Project Type *</label>
  <select id="projectType" name="projectType"{type_invalid}>{options}</select>
  {type_error}
  <label for="message">Message *</label>
  <textarea id="message" name="message" rows="5" placeholder="Tell us about your project..."{message_invalid}>{message}</textarea>
  {message_error}
  {banner}
  <button class="button button-primary" type="submit" data-send-label="{send_label}" data-sending-label="{sending_label}"{disabled}>{label}</button>
</form>"#,
        name = escape(&form.name),
        name_invalid = invalid(ContactField::Name),
        name_error = field_error(ContactField::Name),
        email = escape(&form.email),
        email_invalid = invalid(ContactField::Email),
        email_error = field_error(ContactField::Email),
        phone = escape(&form.phone),
        phone_invalid = invalid(ContactField::Phone),
        phone_error = field_error(ContactField::Phone),
        type_invalid = invalid(ContactField::ProjectType),
        options = options,
        type_error = field_error(ContactField::ProjectType),
        message = escape(&form.message),
        message_invalid = invalid(ContactField::Message),
        message_error = field_error(ContactField::Message),
        banner = banner,
        send_label = SEND_LABEL,
        sending_label = SENDING_LABEL,
        disabled = disabled,
        label = StatusBanner::submit_label(state),
    )
}
