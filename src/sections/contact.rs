use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use super::{indexed_ids, reveal_on_enter, use_motion_context, SectionKind};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::core::contact::{contact_endpoint, ContactError, ContactSubmitter, ReqwestTransport, SubmitRejection};
use crate::motion::trigger::BandParseError;
use crate::motion::{ContextId, ContextPlan, Easing, MotionIntent, MotionSpec, Timing};
use crate::state::content::{INFO_CARDS, SOCIAL_LINKS};
use crate::state::{ContactField, ContactFormState, SubmitStatus};

const SECTION: &str = "contact";
const TITLE: &str = "contact-title";
const FORM: &str = "contact-form";
const FIELD: &str = "contact-field";
const INFO: &str = "contact-info";
const CARD: &str = "contact-card";

/// Name, email, message, submit button.
const FORM_ROWS: usize = 4;

pub(super) fn plan() -> Result<ContextPlan, BandParseError> {
    let stagger_in = |targets| {
        MotionSpec::group(
            targets,
            MotionIntent::RevealFromBelow { distance: ITEM_REVEAL_DISTANCE },
            Timing::new(ITEM_DURATION, Easing::ExpoOut).stagger(ITEM_STAGGER),
        )
    };

    Ok(ContextPlan {
        scroll: vec![
            reveal_on_enter(
                SECTION,
                "top 70%",
                vec![MotionSpec::new(
                    TITLE,
                    MotionIntent::RevealFromBelow { distance: TITLE_REVEAL_DISTANCE },
                    Timing::new(REVEAL_DURATION, Easing::ExpoOut),
                )],
            )?,
            reveal_on_enter(FORM, "top 70%", vec![stagger_in(indexed_ids(FIELD, FORM_ROWS))])?,
            reveal_on_enter(INFO, "top 70%", vec![stagger_in(indexed_ids(CARD, INFO_CARDS.len()))])?,
        ],
        pointer: Vec::new(),
    })
}

/// Text for the failure dialog, or `None` when nothing should be shown.
fn failure_notice(err: &ContactError, state: &ContactFormState) -> Option<String> {
    match (err, &state.status) {
        (ContactError::Rejected(SubmitRejection::AlreadySending), _) => None,
        (_, SubmitStatus::Failed(shown)) => Some(shown.clone()),
        _ => Some(err.to_string()),
    }
}

fn link_initial(label: &str) -> char {
    label.chars().next().unwrap_or('?')
}

#[component]
pub fn Contact() -> Element {
    use_motion_context(ContextId::Section(SectionKind::Contact), plan);
    let config = use_context::<SiteConfig>();
    let form = use_signal(ContactFormState::default);
    let submitter = use_hook(move || {
        let endpoint = contact_endpoint(&config.api_origin);
        log::info!("contact endpoint: {}", endpoint);
        Rc::new(ContactSubmitter::new(
            ReqwestTransport::new(endpoint),
            Duration::from_secs(CONTACT_SUCCESS_DISPLAY_SECS),
        ))
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitter = submitter.clone();
        spawn(async move {
            let mut store = form;
            let Err(err) = submitter.submit(&mut store).await else {
                return;
            };
            let notice = failure_notice(&err, &form.peek());
            if let Some(description) = notice {
                rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Contact")
                    .set_description(description)
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show()
                    .await;
            }
        });
    };

    let state = form.read().clone();
    let sending = state.is_sending();
    let button_class = if state.status == SubmitStatus::Succeeded { "submit-button sent" } else { "submit-button" };

    let field_row = move |index: usize, field: ContactField, label: &'static str, placeholder: &'static str| {
        let mut form = form;
        let value = form.read().field(field).to_string();
        rsx! {
            div {
                id: "{FIELD}-{index}",
                label {
                    r#for: "contact-{field.label()}",
                    style: "display: block; margin-bottom: 0.75rem; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.05em; text-transform: uppercase; color: {TEXT_MUTED};",
                    "{label}"
                }
                if field == ContactField::Message {
                    textarea {
                        id: "contact-{field.label()}",
                        class: "form-input",
                        rows: "4",
                        required: true,
                        placeholder,
                        value: "{value}",
                        oninput: move |e| form.write().set_field(field, e.value()),
                    }
                } else {
                    input {
                        id: "contact-{field.label()}",
                        class: "form-input",
                        r#type: if field == ContactField::Email { "email" } else { "text" },
                        required: true,
                        placeholder,
                        value: "{value}",
                        oninput: move |e| form.write().set_field(field, e.value()),
                    }
                }
            }
        }
    };

    rsx! {
        section {
            id: SECTION,
            class: "section-padding",
            style: "position: relative; min-height: 100vh; width: 100%; background-color: {BG_BASE};",

            div {
                class: "container",
                div {
                    style: "margin-bottom: 6rem;",
                    span {
                        style: "display: block; margin-bottom: 1rem; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; color: {ACCENT};",
                        "Get In Touch"
                    }
                    h2 {
                        id: TITLE,
                        class: "text-section",
                        style: "margin: 0; font-family: {FONT_DISPLAY}; color: {TEXT_PRIMARY};",
                        "Contact"
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 6rem;",

                    form {
                        id: FORM,
                        style: "display: flex; flex-direction: column; gap: 2rem;",
                        onsubmit: on_submit,
                        {field_row(0, ContactField::Name, "Your Name", "John Doe")}
                        {field_row(1, ContactField::Email, "Email Address", "john@example.com")}
                        {field_row(2, ContactField::Message, "Your Message", "Tell me about your project...")}
                        div {
                            id: "{FIELD}-3",
                            style: "padding-top: 1rem;",
                            button {
                                r#type: "submit",
                                class: button_class,
                                disabled: sending,
                                span { "{state.button_label()}" }
                                span { class: if sending { "send-icon pulse" } else { "send-icon" }, "➤" }
                            }
                        }
                    }

                    div {
                        id: INFO,
                        style: "display: flex; flex-direction: column; gap: 2rem;",
                        p {
                            style: "margin: 0; font-family: {FONT_BODY}; font-size: 1rem; line-height: 1.7; color: {TEXT_SECONDARY};",
                            "I'm always excited to discuss new ML projects, Django applications, or any innovative ideas you have in mind. Let's build something intelligent together."
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 1rem;",
                            for (index, card) in INFO_CARDS.iter().enumerate() {
                                div {
                                    key: "{index}",
                                    id: "{CARD}-{index}",
                                    class: "glass-card info-card",
                                    div { class: "info-icon", "{card.icon}" }
                                    div {
                                        span {
                                            style: "display: block; margin-bottom: 0.25rem; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.05em; text-transform: uppercase; color: {TEXT_MUTED};",
                                            "{card.label}"
                                        }
                                        if let Some(href) = card.href {
                                            a { href, class: "info-value", "{card.value}" }
                                        } else {
                                            span { class: "info-value", "{card.value}" }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            style: "padding-top: 2rem;",
                            span {
                                style: "display: block; margin-bottom: 1rem; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.05em; text-transform: uppercase; color: {TEXT_MUTED};",
                                "Connect With Me"
                            }
                            div {
                                style: "display: flex; gap: 1rem;",
                                for link in SOCIAL_LINKS.iter() {
                                    a {
                                        key: "{link.label}",
                                        href: link.href,
                                        class: "social-chip",
                                        title: link.label,
                                        "{link_initial(link.label)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_form_rows_and_cards_are_staggered() {
        let plan = plan().unwrap();
        assert_eq!(plan.scroll[1].trigger.as_str(), FORM);
        assert_eq!(plan.scroll[1].specs[0].targets.len(), FORM_ROWS);
        assert_eq!(plan.scroll[2].specs[0].targets.len(), INFO_CARDS.len());
    }

    #[test]
    fn test_failure_notice_prefers_status_text() {
        let err = ContactError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        let state = ContactFormState {
            status: SubmitStatus::Failed("Failed to send message: API error: 500 Internal Server Error - boom".to_string()),
            ..ContactFormState::default()
        };
        assert_eq!(
            failure_notice(&err, &state).as_deref(),
            Some("Failed to send message: API error: 500 Internal Server Error - boom")
        );
    }

    #[test]
    fn test_no_notice_for_double_submit() {
        let err = ContactError::Rejected(SubmitRejection::AlreadySending);
        assert_eq!(failure_notice(&err, &ContactFormState::default()), None);

        let missing = ContactError::Rejected(SubmitRejection::MissingField("email"));
        assert_eq!(
            failure_notice(&missing, &ContactFormState::default()).as_deref(),
            Some("please fill in your email")
        );
    }
}
