use dioxus::prelude::*;

use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{ContextId, ContextPlan, Easing, MotionIntent, MotionSpec, Timing};
use crate::sections::{reveal_on_enter, use_motion_context, SectionKind};
use crate::state::content::{NAV_LINKS, OWNER_NAME};

const NAV: &str = "site-nav";

/// The bar slides down once the page has scrolled past the offset and back up
/// above it.
pub(crate) fn plan() -> Result<ContextPlan, BandParseError> {
    let start = format!("top top-={}", NAV_REVEAL_OFFSET_PX);
    Ok(ContextPlan {
        scroll: vec![reveal_on_enter(
            SectionKind::Hero.anchor(),
            &start,
            vec![MotionSpec::new(
                NAV,
                MotionIntent::RevealFromBelow { distance: -NAV_REVEAL_OFFSET_PX },
                Timing::new(NAV_REVEAL_DURATION, Easing::ExpoOut),
            )],
        )?],
        pointer: Vec::new(),
    })
}

/// Mobile menu entries drop in one after another when the menu opens.
fn menu_item_style(open: bool, index: usize) -> String {
    let (offset, opacity) = if open { (0, 1) } else { (20 + index * 10, 0) };
    format!(
        "transform: translateY({}px); opacity: {}; transition: all 0.5s ease {:.1}s;",
        offset,
        opacity,
        index as f64 * 0.1
    )
}

#[component]
pub fn Navigation() -> Element {
    use_motion_context(ContextId::Navigation, plan);
    let mut menu_open = use_signal(|| false);
    let open = menu_open();

    rsx! {
        nav {
            id: NAV,
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 50; opacity: 0; transform: translate3d(0px, -{NAV_REVEAL_OFFSET_PX}px, 0);",
            div {
                style: "background-color: rgba(0, 0, 0, 0.8); backdrop-filter: blur(24px); border-bottom: 1px solid rgba(255, 255, 255, 0.05);",
                div {
                    class: "container",
                    style: "display: flex; align-items: center; justify-content: space-between; height: 5rem;",
                    a {
                        href: "#hero",
                        class: "nav-logo",
                        "{OWNER_NAME}"
                    }
                    div {
                        class: "nav-desktop",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                href: link.href,
                                class: "nav-link link-underline",
                                "{link.label}"
                            }
                        }
                    }
                    a { href: "#contact", class: "nav-desktop pill-link", "Let's Talk" }
                    button {
                        class: "nav-mobile-toggle",
                        onclick: move |_| menu_open.set(!open),
                        if open { "✕" } else { "☰" }
                    }
                }
            }
        }

        div {
            class: if open { "mobile-menu open" } else { "mobile-menu" },
            div {
                style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; gap: 2rem;",
                for (index, link) in NAV_LINKS.iter().enumerate() {
                    a {
                        key: "{link.label}",
                        href: link.href,
                        class: "mobile-menu-link",
                        style: menu_item_style(open, index),
                        onclick: move |_| menu_open.set(false),
                        "{link.label}"
                    }
                }
                a {
                    href: "#contact",
                    class: "pill-link",
                    style: menu_item_style(open, NAV_LINKS.len()),
                    onclick: move |_| menu_open.set(false),
                    "Let's Talk"
                }
            }
        }

        div {
            style: "position: fixed; top: 2rem; left: 3rem; z-index: 30;",
            a { href: "#hero", class: "nav-logo", "{OWNER_NAME}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::viewport::{ElementRect, ViewportSample};

    fn scrolled(scroll_y: f64) -> (ElementRect, ViewportSample) {
        let sample = ViewportSample { scroll_y, ..ViewportSample::default() };
        (ElementRect::new(-scroll_y, 0.0, 1280.0, 800.0), sample)
    }

    #[test]
    fn test_bar_appears_past_scroll_offset() {
        let plan = plan().unwrap();
        let band = &plan.scroll[0].band;
        for (scroll_y, expected) in [(50.0, false), (NAV_REVEAL_OFFSET_PX + 1.0, true), (20_000.0, true)] {
            let (hero, sample) = scrolled(scroll_y);
            assert_eq!(band.is_active(&hero, &sample), expected, "scroll {}", scroll_y);
        }
    }

    #[test]
    fn test_menu_items_drop_in_staggered() {
        assert_eq!(menu_item_style(true, 3), "transform: translateY(0px); opacity: 1; transition: all 0.5s ease 0.3s;");
        assert!(menu_item_style(false, 2).starts_with("transform: translateY(40px); opacity: 0;"));
    }
}
