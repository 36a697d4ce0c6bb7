use dioxus::prelude::*;

use super::{scrub, use_motion_context, SectionKind};
use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{
    Axis, Band, ContextId, ContextPlan, ElementId, MotionIntent, MotionSpec, PointerIntent, PointerPlan, ScrollPlan,
    ShiftUnit, Timing, TriggerMode,
};
use crate::motion::Easing;
use crate::state::content::{GREETING, HERO_IMAGE, OWNER_NAME, ROLE, TAGLINE};

const SECTION: &str = "hero";
const IMAGE: &str = "hero-image";
const DIAGONAL: &str = "hero-diagonal";
const GREETING_ID: &str = "hero-greeting";
const NAME: &str = "hero-name";
const NAME_CHAR: &str = "hero-char";
const ROLE_ID: &str = "hero-role";
const LOCATION: &str = "hero-location";

pub(super) fn plan() -> Result<ContextPlan, BandParseError> {
    let delay = HERO_ENTRANCE_DELAY;
    let chars = super::indexed_ids(NAME_CHAR, OWNER_NAME.chars().count());

    // The hero is in view at load, so "top bottom" fires on the first sample.
    let entrance = ScrollPlan {
        trigger: ElementId::new(SECTION),
        band: Band::parse("top bottom", "bottom top")?,
        mode: TriggerMode::PlayOnce,
        specs: vec![
            MotionSpec::new(
                IMAGE,
                MotionIntent::FocusIn { from_scale: 1.2, blur: 10.0 },
                Timing::new(1.4, Easing::ExpoOut).at(delay),
            ),
            MotionSpec::new(
                DIAGONAL,
                MotionIntent::StrokeDraw { length: 1000.0 },
                Timing::new(1.2, Easing::Power2InOut).at(delay),
            ),
            MotionSpec::new(
                GREETING_ID,
                MotionIntent::RevealFromBelow { distance: 30.0 },
                Timing::new(ITEM_DURATION, Easing::ExpoOut).at(delay + 0.2),
            ),
            MotionSpec::group(
                chars,
                MotionIntent::RiseAndTurn { rotate: 5.0 },
                Timing::new(REVEAL_DURATION, Easing::ExpoOut).stagger(0.03).at(delay + 0.2),
            ),
            MotionSpec::new(
                ROLE_ID,
                MotionIntent::WipeIn,
                Timing::new(ITEM_DURATION, Easing::Power2Out).at(delay + 0.4),
            ),
            MotionSpec::new(
                LOCATION,
                MotionIntent::RevealFromBelow { distance: 30.0 },
                Timing::new(ITEM_DURATION, Easing::ExpoOut).at(delay + 0.6),
            ),
        ],
    };

    let drift = |target: &str, to: f64| {
        MotionSpec::new(
            target,
            MotionIntent::Parallax { axis: Axis::Y, unit: ShiftUnit::Percent, from: 0.0, to },
            Timing::new(1.0, Easing::Linear),
        )
    };

    Ok(ContextPlan {
        scroll: vec![
            entrance,
            scrub(SECTION, "top top", "bottom top", HERO_PARALLAX_SMOOTHING, vec![drift(IMAGE, 15.0)])?,
            scrub(SECTION, "top top", "bottom top", HERO_PARALLAX_SMOOTHING, vec![drift(NAME, -30.0)])?,
        ],
        pointer: vec![PointerPlan {
            watch: ElementId::new(SECTION),
            target: ElementId::new(DIAGONAL),
            intent: PointerIntent::Sway { max_deg: DIAGONAL_SWAY_DEG },
        }],
    })
}

#[component]
pub fn Hero() -> Element {
    use_motion_context(ContextId::Section(SectionKind::Hero), plan);

    rsx! {
        section {
            id: SECTION,
            style: "position: relative; height: 100vh; width: 100%; overflow: hidden; background-color: {BG_BASE};",

            div {
                id: IMAGE,
                style: "position: absolute; inset: 0; will-change: transform;",
                img {
                    src: HERO_IMAGE,
                    alt: "Vinod Raja",
                    style: "width: 100%; height: 100%; object-fit: cover; object-position: center;",
                }
                div {
                    style: "position: absolute; inset: 0; background: linear-gradient(to right, rgba(0,0,0,0.8), rgba(0,0,0,0.4), transparent);",
                }
            }

            svg {
                style: "position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: 10;",
                view_box: "0 0 100 100",
                preserve_aspect_ratio: "none",
                line {
                    id: DIAGONAL,
                    x1: "55",
                    y1: "0",
                    x2: "35",
                    y2: "100",
                    stroke: "rgba(255, 255, 255, 0.15)",
                    stroke_width: "0.1",
                    stroke_dasharray: "1000",
                    style: "transform-box: fill-box; transform-origin: center;",
                }
            }

            div {
                class: "container",
                style: "position: relative; z-index: 20; height: 100%; display: flex; flex-direction: column; justify-content: center;",
                div {
                    style: "max-width: 56rem;",
                    span {
                        id: GREETING_ID,
                        style: "display: block; margin-bottom: 1rem; font-family: {FONT_BODY}; font-size: 0.875rem; letter-spacing: 0.3em; text-transform: uppercase; color: {TEXT_SECONDARY};",
                        "{GREETING}"
                    }
                    h1 {
                        id: NAME,
                        style: "margin: 0 0 1rem 0; overflow: hidden; font-family: {FONT_DISPLAY}; font-size: clamp(4rem, 15vw, 14rem); line-height: 1; color: {TEXT_PRIMARY};",
                        for (index, ch) in OWNER_NAME.chars().enumerate() {
                            span {
                                key: "{index}",
                                style: "display: inline-block; overflow: hidden;",
                                span {
                                    id: "{NAME_CHAR}-{index}",
                                    style: "display: inline-block;",
                                    if ch == ' ' { "\u{00A0}" } else { "{ch}" }
                                }
                            }
                        }
                    }
                    p {
                        id: ROLE_ID,
                        style: "margin: 0 0 1.5rem 0; font-family: {FONT_DISPLAY}; font-size: clamp(1.5rem, 4vw, 3rem); letter-spacing: 0.05em; color: rgba(255, 255, 255, 0.9);",
                        "{ROLE}"
                    }
                    span {
                        id: LOCATION,
                        class: "tracking-breathe",
                        style: "display: inline-block; font-family: {FONT_BODY}; font-size: 0.875rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255, 255, 255, 0.6);",
                        "{TAGLINE}"
                    }
                }
            }

            div {
                style: "position: absolute; bottom: 0; left: 0; right: 0; height: 8rem; z-index: 10; background: linear-gradient(to top, {BG_BASE}, transparent);",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::intent::{build_timeline, BuildEnv};
    use crate::motion::property::Property;

    #[test]
    fn test_entrance_staggers_every_name_character() {
        let plan = plan().unwrap();
        let entrance = &plan.scroll[0];
        assert_eq!(entrance.mode, TriggerMode::PlayOnce);
        let timeline = build_timeline(&entrance.specs, &BuildEnv::default());
        let char_offsets: Vec<f64> = timeline
            .tweens()
            .iter()
            .filter(|t| t.target.as_str().starts_with(NAME_CHAR) && t.property == Property::Opacity)
            .map(|t| t.offset)
            .collect();
        assert_eq!(char_offsets.len(), OWNER_NAME.chars().count());
        assert!((char_offsets[0] - (HERO_ENTRANCE_DELAY + 0.2)).abs() < 1e-9);
        assert!((char_offsets[9] - (HERO_ENTRANCE_DELAY + 0.2 + 9.0 * 0.03)).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_layers_scrub_with_smoothing() {
        let plan = plan().unwrap();
        for scroll in &plan.scroll[1..] {
            assert_eq!(scroll.mode, TriggerMode::Scrub { smoothing: HERO_PARALLAX_SMOOTHING });
        }
    }
}
