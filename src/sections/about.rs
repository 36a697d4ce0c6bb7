use dioxus::prelude::*;

use super::{indexed_ids, reveal_on_enter, scrub, use_motion_context, SectionKind};
use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{
    Axis, ContextId, ContextPlan, Easing, ElementId, MotionIntent, MotionSpec, PointerIntent, PointerPlan, ShiftUnit,
    Timing,
};
use crate::state::content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS};

const SECTION: &str = "about";
const TITLE: &str = "about-title";
const CARD: &str = "about-card";
const IMAGE: &str = "about-image";
const TEXT: &str = "about-text";
const DECOR: &str = "about-decor";

/// Label, heading, paragraphs, link.
const TEXT_ITEMS: usize = ABOUT_PARAGRAPHS.len() + 3;

/// Per decorative square, parallax speed as a multiple of half the viewport.
const DECOR_SPEEDS: [f64; 2] = [0.3, -0.2];

pub(super) fn plan() -> Result<ContextPlan, BandParseError> {
    let shift = |target: &str, axis: Axis, unit: ShiftUnit, from: f64, to: f64| {
        MotionSpec::new(target, MotionIntent::Parallax { axis, unit, from, to }, Timing::new(1.0, Easing::Linear))
    };

    let mut scroll = vec![
        scrub(
            SECTION,
            "top bottom",
            "bottom top",
            SCRUB_SMOOTHING,
            vec![shift(TITLE, Axis::X, ShiftUnit::Percent, -10.0, -30.0)],
        )?,
        reveal_on_enter(
            SECTION,
            "top 70%",
            vec![MotionSpec::new(
                CARD,
                MotionIntent::FlipIn { tilt_deg: 30.0, distance: 100.0 },
                Timing::new(REVEAL_DURATION, Easing::ExpoOut),
            )],
        )?,
        reveal_on_enter(
            SECTION,
            "top 60%",
            vec![
                MotionSpec::new(IMAGE, MotionIntent::ScaleIn { from: 1.3 }, Timing::new(1.2, Easing::ExpoOut)),
                MotionSpec::group(
                    indexed_ids(TEXT, TEXT_ITEMS),
                    MotionIntent::RevealFromBelow { distance: ITEM_REVEAL_DISTANCE },
                    Timing::new(ITEM_DURATION, Easing::ExpoOut).stagger(ITEM_STAGGER),
                ),
            ],
        )?,
        scrub(
            SECTION,
            "top bottom",
            "bottom top",
            SCRUB_SMOOTHING,
            vec![shift(IMAGE, Axis::Y, ShiftUnit::Px, 0.0, -40.0)],
        )?,
    ];
    for (index, speed) in DECOR_SPEEDS.iter().enumerate() {
        let id = ElementId::indexed(DECOR, index);
        scroll.push(scrub(
            id.as_str(),
            "top bottom",
            "bottom top",
            0.0,
            vec![shift(id.as_str(), Axis::Y, ShiftUnit::ViewportFactor, 0.0, *speed)],
        )?);
    }

    Ok(ContextPlan {
        scroll,
        pointer: vec![PointerPlan {
            watch: ElementId::new(CARD),
            target: ElementId::new(CARD),
            intent: PointerIntent::Tilt { max_deg: CARD_TILT_DEG },
        }],
    })
}

#[component]
pub fn About() -> Element {
    use_motion_context(ContextId::Section(SectionKind::About), plan);

    let text_style = |index: usize| {
        let color = if index == 0 { TEXT_PRIMARY } else { TEXT_SECONDARY };
        format!("margin: 0 0 1rem 0; font-family: {FONT_BODY}; font-size: 1rem; line-height: 1.7; color: {color};")
    };

    rsx! {
        section {
            id: SECTION,
            class: "section-padding",
            style: "position: relative; min-height: 100vh; width: 100%; overflow: hidden; background-color: {BG_BASE};",

            div {
                id: TITLE,
                style: "position: absolute; top: 50%; left: 0; margin-top: -10vw; white-space: nowrap; pointer-events: none; user-select: none; z-index: 0;",
                span {
                    class: "text-outline",
                    style: "font-family: {FONT_DISPLAY}; font-size: 20vw; letter-spacing: 0.05em; opacity: 0.3;",
                    "ABOUT ME • ABOUT ME • ABOUT ME •"
                }
            }

            div {
                class: "container",
                style: "position: relative; z-index: 10;",
                div {
                    class: "about-grid",
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 5rem; align-items: center; min-height: 70vh;",

                    div {
                        style: "position: relative;",
                        div {
                            id: IMAGE,
                            style: "position: relative; overflow: hidden; border-radius: 2px; perspective: 1000px; will-change: transform;",
                            img {
                                class: "grayscale-hover",
                                src: ABOUT_IMAGE,
                                alt: "About Vinod Raja",
                                style: "display: block; width: 100%; height: auto; object-fit: cover;",
                            }
                            div {
                                style: "position: absolute; bottom: 0; left: 0; width: 100%; height: 4px; background-color: {ACCENT};",
                            }
                        }
                        div {
                            id: "{DECOR}-0",
                            style: "position: absolute; bottom: -1.5rem; right: -1.5rem; width: 8rem; height: 8rem; border: 1px solid {BORDER_SUBTLE}; border-radius: 2px; z-index: -1;",
                        }
                        div {
                            id: "{DECOR}-1",
                            style: "position: absolute; top: -1.5rem; left: -1.5rem; width: 5rem; height: 5rem; border: 1px solid rgba(239, 68, 68, 0.3); border-radius: 2px; z-index: -1;",
                        }
                    }

                    div {
                        id: CARD,
                        class: "glass-card",
                        style: "padding: 3rem; border-radius: 2px; transform-style: preserve-3d; will-change: transform;",
                        span {
                            id: "{TEXT}-0",
                            style: "display: block; margin-bottom: 1rem; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; color: {ACCENT};",
                            "Who I Am"
                        }
                        h2 {
                            id: "{TEXT}-1",
                            class: "text-section",
                            style: "margin: 0 0 1.5rem 0; font-family: {FONT_DISPLAY}; color: {TEXT_PRIMARY};",
                            "About Me"
                        }
                        div {
                            style: "margin-bottom: 2rem;",
                            for (index, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
                                p {
                                    key: "{index}",
                                    id: "{TEXT}-{index + 2}",
                                    style: text_style(index),
                                    "{paragraph}"
                                }
                            }
                        }
                        a {
                            id: "{TEXT}-{TEXT_ITEMS - 1}",
                            href: "#contact",
                            style: "display: inline-flex; align-items: center; gap: 0.75rem; font-family: {FONT_BODY}; font-size: 0.875rem; color: {TEXT_PRIMARY}; text-decoration: none;",
                            span { class: "link-underline", "Let's Connect" }
                            span { class: "arrow-nudge", "→" }
                        }
                    }
                }
            }
        }
    }
}
