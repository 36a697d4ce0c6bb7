use dioxus::prelude::*;

use super::{indexed_ids, reveal_on_enter, use_motion_context, SectionKind};
use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{ContextId, ContextPlan, Easing, ElementId, MotionIntent, MotionSpec, PointerIntent, PointerPlan, Timing};
use crate::state::content::{list_index, PROJECTS};

const SECTION: &str = "works";
const TITLE: &str = "works-title";
const LIST: &str = "works-list";
const ITEM: &str = "works-item";
const BACKDROP: &str = "works-backdrop";
const VIEW: &str = "works-view";
const VIEW_LABEL: &str = "works-view-label";

pub(super) fn plan() -> Result<ContextPlan, BandParseError> {
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
            reveal_on_enter(
                LIST,
                "top 70%",
                vec![MotionSpec::group(
                    indexed_ids(ITEM, PROJECTS.len()),
                    MotionIntent::SlideFromLeft { distance: 50.0 },
                    Timing::new(ITEM_DURATION, Easing::ExpoOut).stagger(ITEM_STAGGER),
                )],
            )?,
        ],
        pointer: vec![
            over_list(BACKDROP, PointerIntent::HoverReveal { rest_scale: BACKDROP_REST_SCALE }),
            over_list(VIEW, PointerIntent::Follow { duration: VIEW_LABEL_FOLLOW, easing: Easing::Power2Out }),
            over_list(VIEW_LABEL, PointerIntent::HoverReveal { rest_scale: VIEW_LABEL_REST_SCALE }),
        ],
    })
}

fn over_list(target: &str, intent: PointerIntent) -> PointerPlan {
    PointerPlan {
        watch: ElementId::new(LIST),
        target: ElementId::new(target),
        intent,
    }
}

/// Opacity of one backdrop image while `active` is hovered.
fn layer_opacity(active: Option<usize>, index: usize) -> f64 {
    if active == Some(index) {
        0.3
    } else {
        0.0
    }
}

#[component]
pub fn Works() -> Element {
    use_motion_context(ContextId::Section(SectionKind::Works), plan);
    let mut active_project = use_signal(|| None::<usize>);

    rsx! {
        section {
            id: SECTION,
            class: "section-padding",
            style: "position: relative; min-height: 100vh; width: 100%; overflow: hidden; background-color: {BG_BASE};",

            // Engine-driven: opacity and scale only change through style writes.
            div {
                id: BACKDROP,
                style: "position: fixed; inset: 0; pointer-events: none; z-index: 0; opacity: 0; transform: scale({BACKDROP_REST_SCALE});",
                for (index, project) in PROJECTS.iter().enumerate() {
                    div {
                        key: "{index}",
                        style: "position: absolute; inset: 0; transition: opacity 0.5s; opacity: {layer_opacity(active_project(), index)};",
                        img {
                            src: project.image,
                            alt: project.title,
                            style: "width: 100%; height: 100%; object-fit: cover;",
                        }
                    }
                }
                div { style: "position: absolute; inset: 0; background-color: rgba(0, 0, 0, 0.7);" }
            }

            // The wrapper follows the pointer; the label opens over the list.
            div {
                id: VIEW,
                class: "works-view",
                style: "position: fixed; top: 0; left: 0; z-index: 100; pointer-events: none;",
                div {
                    id: VIEW_LABEL,
                    class: "view-label",
                    style: "opacity: 0; transform: scale({VIEW_LABEL_REST_SCALE});",
                    "View"
                }
            }

            div {
                class: "container",
                style: "position: relative; z-index: 10;",
                h2 {
                    id: TITLE,
                    class: "text-section",
                    style: "margin: 0 0 6rem 0; font-family: {FONT_DISPLAY}; color: {TEXT_PRIMARY};",
                    "Selected Works"
                }

                div {
                    id: LIST,
                    style: "max-width: 56rem;",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        div {
                            key: "{index}",
                            id: "{ITEM}-{index}",
                            class: "project-item",
                            style: "padding: 3rem 0; border-top: 1px solid {BORDER_SUBTLE}; cursor: pointer;",
                            onmouseenter: move |_| active_project.set(Some(index)),
                            onmouseleave: move |_| active_project.set(None),
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between;",
                                div {
                                    style: "display: flex; align-items: baseline; gap: 2rem;",
                                    span {
                                        style: "width: 2rem; font-family: {FONT_BODY}; font-size: 0.75rem; color: {TEXT_DIM};",
                                        "{list_index(index)}"
                                    }
                                    h3 {
                                        class: "project-title",
                                        style: "margin: 0; font-family: {FONT_DISPLAY}; font-size: clamp(1.875rem, 5vw, 3.75rem);",
                                        "{project.title}"
                                    }
                                }
                                div {
                                    style: "display: flex; align-items: center; gap: 2rem;",
                                    span {
                                        style: "font-family: {FONT_BODY}; font-size: 0.875rem; letter-spacing: 0.05em; text-transform: uppercase; color: {TEXT_MUTED};",
                                        "{project.category}"
                                    }
                                    div { class: "project-arrow", "↗" }
                                }
                            }
                        }
                    }
                    div { style: "border-top: 1px solid {BORDER_SUBTLE};" }
                }

                div {
                    style: "margin-top: 4rem; text-align: center;",
                    a {
                        href: "#",
                        style: "display: inline-flex; align-items: center; gap: 0.75rem; font-family: {FONT_BODY}; font-size: 0.875rem; color: {TEXT_SECONDARY}; text-decoration: none;",
                        span { class: "link-underline", "View All Projects" }
                        span { "↗" }
                    }
                }
            }
        }
    }
}
