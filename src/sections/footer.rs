use chrono::Datelike;
use dioxus::prelude::*;

use super::{indexed_ids, reveal_on_enter, use_motion_context, SectionKind};
use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{
    Band, ContextId, ContextPlan, Easing, ElementId, MotionIntent, MotionSpec, PointerIntent, PointerPlan, ScrollPlan,
    Timing, TriggerMode,
};
use crate::state::content::{
    footer_link_count, mailto_with_subject, Link, CONTACT_EMAIL, LEGAL_LINKS, NAV_LINKS, OWNER_NAME, ROLE, SOCIAL_LINKS,
};

const SECTION: &str = "footer";
const CTA: &str = "footer-cta";
const LINKS: &str = "footer-links";
const LINK: &str = "footer-link";
const COPYRIGHT: &str = "footer-copyright";

pub(super) fn plan() -> Result<ContextPlan, BandParseError> {
    Ok(ContextPlan {
        scroll: vec![
            reveal_on_enter(
                SECTION,
                "top 80%",
                vec![MotionSpec::new(
                    CTA,
                    MotionIntent::ScaleIn { from: 0.8 },
                    Timing::new(ITEM_DURATION, Easing::ExpoOut),
                )],
            )?,
            reveal_on_enter(
                LINKS,
                "top 90%",
                vec![MotionSpec::group(
                    indexed_ids(LINK, footer_link_count()),
                    MotionIntent::RevealFromBelow { distance: 20.0 },
                    Timing::new(0.5, Easing::ExpoOut).stagger(0.05),
                )],
            )?,
            ScrollPlan {
                trigger: ElementId::new(COPYRIGHT),
                band: Band::parse("top 95%", "bottom top")?,
                mode: TriggerMode::PlayReverseOnExit,
                specs: vec![MotionSpec::new(COPYRIGHT, MotionIntent::FadeIn, Timing::new(0.5, Easing::Power2Out).at(0.3))],
            },
        ],
        pointer: vec![PointerPlan {
            watch: ElementId::new(CTA),
            target: ElementId::new(CTA),
            intent: PointerIntent::Magnetic { strength: MAGNETIC_STRENGTH },
        }],
    })
}

fn copyright_line(year: i32) -> String {
    let name = OWNER_NAME
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("© {} {}. All Rights Reserved.", year, name)
}

fn link_column(heading: &'static str, links: &'static [Link], first_index: usize) -> Element {
    rsx! {
        div {
            h4 { class: "footer-heading", "{heading}" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.75rem;",
                for (offset, link) in links.iter().enumerate() {
                    li {
                        key: "{link.label}",
                        a {
                            id: "{LINK}-{first_index + offset}",
                            href: link.href,
                            class: "footer-link link-underline",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    use_motion_context(ContextId::Section(SectionKind::Footer), plan);
    let year = chrono::Local::now().year();
    let email_index = footer_link_count() - 1;
    let cta_href = mailto_with_subject("Project inquiry");

    rsx! {
        footer {
            id: SECTION,
            style: "position: relative; width: 100%; padding: 8rem 0 2rem 0; background-color: {BG_BASE};",

            div {
                class: "container",
                style: "margin-bottom: 8rem; text-align: center;",
                a {
                    id: CTA,
                    href: cta_href,
                    class: "footer-cta",
                    style: "display: inline-block; font-family: {FONT_DISPLAY}; font-size: clamp(3rem, 10vw, 8rem); will-change: transform;",
                    span {
                        style: "display: flex; align-items: center; gap: 2rem;",
                        "Let's Talk"
                        span { "↗" }
                    }
                }
            }

            div {
                id: LINKS,
                class: "container",
                style: "padding-top: 4rem; border-top: 1px solid {BORDER_SUBTLE};",
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 3rem; margin-bottom: 4rem;",
                    {link_column("Navigation", &NAV_LINKS, 0)}
                    {link_column("Legal", &LEGAL_LINKS, NAV_LINKS.len())}
                    {link_column("Social", &SOCIAL_LINKS, NAV_LINKS.len() + LEGAL_LINKS.len())}
                    div {
                        h4 { class: "footer-heading", "Contact" }
                        ul {
                            style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.75rem;",
                            li {
                                a {
                                    id: "{LINK}-{email_index}",
                                    href: "mailto:{CONTACT_EMAIL}",
                                    class: "footer-link link-underline",
                                    "{CONTACT_EMAIL}"
                                }
                            }
                            li {
                                span {
                                    style: "font-family: {FONT_BODY}; font-size: 0.875rem; color: {TEXT_SECONDARY};",
                                    "Pakistan"
                                }
                            }
                        }
                    }
                }
            }

            div {
                id: COPYRIGHT,
                class: "container",
                style: "padding-top: 2rem; border-top: 1px solid {BORDER_SUBTLE};",
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1rem; font-family: {FONT_BODY}; font-size: 0.75rem; color: {TEXT_DIM};",
                    p { style: "margin: 0;", "{copyright_line(year)}" }
                    p { style: "margin: 0;", "{ROLE}" }
                }
            }

            button {
                class: "back-to-top",
                title: "Back to top",
                onclick: move |_| {
                    document::eval(SCROLL_TO_TOP_SCRIPT);
                },
                "↑"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_footer_link_is_animated() {
        let plan = plan().unwrap();
        let links = &plan.scroll[1].specs[0];
        assert_eq!(links.targets.len(), 11);
        assert_eq!(links.targets[10].as_str(), "footer-link-10");
    }

    #[test]
    fn test_copyright_waits_before_fading_in() {
        let plan = plan().unwrap();
        let copyright = &plan.scroll[2];
        assert_eq!(copyright.trigger.as_str(), COPYRIGHT);
        assert_eq!(copyright.specs[0].timing.offset, 0.3);
    }

    #[test]
    fn test_copyright_uses_given_year() {
        assert_eq!(copyright_line(2031), "© 2031 Vinod Raja. All Rights Reserved.");
    }
}
