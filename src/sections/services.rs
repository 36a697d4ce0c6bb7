use dioxus::prelude::*;

use super::{indexed_ids, reveal_on_enter, use_motion_context, SectionKind};
use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{ContextId, ContextPlan, Easing, MotionIntent, MotionSpec, Timing};
use crate::state::content::{list_index, SERVICES};

const SECTION: &str = "services";
const TITLE: &str = "services-title";
const DIVIDER: &str = "services-divider";
const LIST: &str = "services-list";
const BAR: &str = "services-bar";

pub(super) fn plan() -> Result<ContextPlan, BandParseError> {
    Ok(ContextPlan {
        scroll: vec![
            reveal_on_enter(
                SECTION,
                "top 70%",
                vec![
                    MotionSpec::new(
                        TITLE,
                        MotionIntent::RevealFromBelow { distance: 60.0 },
                        Timing::new(REVEAL_DURATION, Easing::ExpoOut),
                    ),
                    MotionSpec::new(
                        DIVIDER,
                        MotionIntent::DrawHorizontal,
                        Timing::new(REVEAL_DURATION, Easing::Power2InOut),
                    ),
                ],
            )?,
            reveal_on_enter(
                LIST,
                "top 70%",
                vec![MotionSpec::group(
                    indexed_ids(BAR, SERVICES.len()),
                    MotionIntent::GrowIn,
                    Timing::new(ITEM_DURATION, Easing::ExpoOut).stagger(ITEM_STAGGER),
                )],
            )?,
        ],
        pointer: Vec::new(),
    })
}

/// Accordion toggle: clicking the open item closes it, any other opens it.
fn toggle_expanded(expanded: Option<usize>, clicked: usize) -> Option<usize> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn Services() -> Element {
    use_motion_context(ContextId::Section(SectionKind::Services), plan);
    let mut expanded = use_signal(|| None::<usize>);

    rsx! {
        section {
            id: SECTION,
            class: "section-padding",
            style: "position: relative; min-height: 100vh; width: 100%; background-color: {BG_ELEVATED};",

            div {
                class: "container",
                div {
                    style: "margin-bottom: 6rem;",
                    span {
                        style: "display: block; margin-bottom: 1rem; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; color: {ACCENT};",
                        "What I Do"
                    }
                    h2 {
                        id: TITLE,
                        class: "text-section",
                        style: "margin: 0; font-family: {FONT_DISPLAY}; color: {TEXT_PRIMARY};",
                        "Services"
                    }
                }

                div {
                    id: DIVIDER,
                    style: "height: 1px; margin-bottom: 2rem; background-color: {BORDER_DEFAULT}; transform-origin: left center;",
                }

                div {
                    id: LIST,
                    for (index, service) in SERVICES.iter().enumerate() {
                        div {
                            key: "{index}",
                            id: "{BAR}-{index}",
                            style: "border-bottom: 1px solid {BORDER_SUBTLE}; transform-origin: left center;",
                            button {
                                class: "service-toggle",
                                style: "width: 100%; padding: 2rem 0; display: flex; align-items: center; justify-content: space-between; background: none; border: none; cursor: pointer;",
                                onclick: move |_| {
                                    let next = toggle_expanded(expanded(), index);
                                    expanded.set(next);
                                },
                                div {
                                    style: "display: flex; align-items: center; gap: 2rem;",
                                    span {
                                        style: "width: 2rem; font-family: {FONT_BODY}; font-size: 0.75rem; color: {TEXT_DIM};",
                                        "{list_index(index)}"
                                    }
                                    div { class: "service-icon", "{service.icon}" }
                                    h3 {
                                        class: "service-title",
                                        style: "margin: 0; font-family: {FONT_DISPLAY}; font-size: clamp(1.5rem, 4vw, 3rem); text-align: left;",
                                        "{service.title}"
                                    }
                                }
                                div {
                                    class: if expanded() == Some(index) { "service-expand open" } else { "service-expand" },
                                    if expanded() == Some(index) { "−" } else { "+" }
                                }
                            }
                            div {
                                class: if expanded() == Some(index) { "service-body open" } else { "service-body" },
                                div {
                                    style: "padding: 0 1rem 0 7rem;",
                                    p {
                                        style: "max-width: 42rem; margin: 0; font-family: {FONT_BODY}; font-size: 1rem; line-height: 1.7; color: {TEXT_SECONDARY};",
                                        "{service.description}"
                                    }
                                    a {
                                        href: "#contact",
                                        style: "display: inline-flex; align-items: center; gap: 0.5rem; margin-top: 1.5rem; font-family: {FONT_BODY}; font-size: 0.875rem; color: {TEXT_PRIMARY}; text-decoration: none;",
                                        span { class: "link-underline", "Discuss this service" }
                                        span { "→" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    style: "margin-top: 6rem; text-align: center;",
                    p {
                        style: "margin: 0 0 1.5rem 0; font-family: {FONT_BODY}; font-size: 0.875rem; color: {TEXT_MUTED};",
                        "Have a project in mind?"
                    }
                    a {
                        href: "#contact",
                        class: "pill-link",
                        span { "Let's work together" }
                        span { "→" }
                    }
                }
            }
        }
    }
}
