//! Root application component
//!
//! Owns the motion engine, runs the page bridge and lays the page out in
//! section order.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::bridge::{Bridge, BridgeEvent, PageEnv};
use crate::components::{Cursor, Navigation};
use crate::config::SiteConfig;
use crate::constants::*;
use crate::motion::MotionEngine;
use crate::sections::{About, Contact, Footer, Hero, SectionKind, Services, SharedEngine, Works};

/// Whether the custom cursor should be mounted for this page environment.
fn wants_custom_cursor(env: Option<PageEnv>) -> bool {
    matches!(env, Some(env) if !env.touch && !env.reduced_motion)
}

fn section_view(kind: SectionKind) -> Element {
    match kind {
        SectionKind::Hero => rsx! { Hero {} },
        SectionKind::About => rsx! { About {} },
        SectionKind::Works => rsx! { Works {} },
        SectionKind::Services => rsx! { Services {} },
        SectionKind::Contact => rsx! { Contact {} },
        SectionKind::Footer => rsx! { Footer {} },
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();
    let forced_reduced_motion = config.reduced_motion;
    let engine: SharedEngine = use_context_provider(|| {
        Rc::new(RefCell::new(MotionEngine::new(
            config.frame_rate,
            forced_reduced_motion.unwrap_or(false),
        )))
    });
    let mut bridge_eval = use_signal(|| None::<document::Eval>);
    let page_env = use_signal(|| None::<PageEnv>);

    use_effect(move || {
        if bridge_eval().is_some() {
            return;
        }
        let eval = document::eval(BRIDGE_SCRIPT);
        bridge_eval.set(Some(eval));
    });

    use_future(move || {
        let engine = engine.clone();
        let mut page_env = page_env;
        async move {
            let mut bridge = Bridge::new(forced_reduced_motion);
            loop {
                let Some(eval) = bridge_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<BridgeEvent>().await {
                        Ok(event) => {
                            let outcome = bridge.handle(&mut engine.borrow_mut(), event);
                            if let Some(env) = outcome.env {
                                page_env.set(Some(env));
                            }
                            for command in outcome.commands {
                                if let Err(err) = eval.send(command) {
                                    log::warn!("failed to send bridge command: {:?}", err);
                                }
                            }
                        }
                        Err(err) => {
                            log::warn!("page bridge closed: {:?}", err);
                            break;
                        }
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    let show_cursor = wants_custom_cursor(page_env());
    let root_class = if show_cursor { "page custom-cursor-on" } else { "page" };

    rsx! {
        // Global styles
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; }}
            html {{ scroll-behavior: smooth; }}
            body {{ -webkit-font-smoothing: antialiased; overflow-x: hidden; font-family: {FONT_BODY}; }}
            ::selection {{ background: {ACCENT}; color: {TEXT_PRIMARY}; }}
            ::-webkit-scrollbar {{ width: 6px; }}
            ::-webkit-scrollbar-track {{ background: {BG_BASE}; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            a {{ color: inherit; }}
            .container {{ width: 100%; max-width: 1400px; margin: 0 auto; padding: 0 3rem; }}
            .section-padding {{ padding-top: 8rem; padding-bottom: 8rem; }}
            .text-section {{ font-size: clamp(3rem, 8vw, 7rem); line-height: 0.9; letter-spacing: 0.02em; }}
            .text-outline {{ color: transparent; -webkit-text-stroke: 1px rgba(255, 255, 255, 0.3); }}
            .glass-card {{ background: {GLASS_FILL}; border: 1px solid {BORDER_SUBTLE}; backdrop-filter: blur(12px); }}
            .link-underline {{ position: relative; }}
            .link-underline::after {{ content: ''; position: absolute; left: 0; bottom: -2px; width: 100%; height: 1px; background: currentColor; transform: scaleX(0); transform-origin: right; transition: transform 0.4s ease; }}
            .link-underline:hover::after {{ transform: scaleX(1); transform-origin: left; }}
            .grayscale-hover {{ filter: grayscale(1); transition: filter 0.7s ease; }}
            .grayscale-hover:hover {{ filter: grayscale(0); }}
            .arrow-nudge {{ transition: transform 0.3s ease; }}
            a:hover .arrow-nudge {{ transform: translateX(0.5rem); }}
            .tracking-breathe {{ animation: breathe 4s ease-in-out infinite; }}
            @keyframes breathe {{ 0%, 100% {{ letter-spacing: 0.2em; }} 50% {{ letter-spacing: 0.3em; }} }}
            .project-title {{ color: {TEXT_PRIMARY}; transition: color 0.5s ease; }}
            .project-item:hover .project-title {{ color: {ACCENT}; }}
            .project-arrow {{ width: 3rem; height: 3rem; border-radius: 50%; border: 1px solid {BORDER_DEFAULT}; display: flex; align-items: center; justify-content: center; transition: all 0.3s ease; }}
            .project-item:hover .project-arrow {{ background: {ACCENT}; border-color: {ACCENT}; }}
            .service-toggle {{ color: {TEXT_PRIMARY}; }}
            .service-title {{ transition: color 0.3s ease; }}
            .service-toggle:hover .service-title {{ color: {ACCENT}; }}
            .service-icon, .service-expand {{ width: 3rem; height: 3rem; border-radius: 50%; border: 1px solid {BORDER_DEFAULT}; display: flex; align-items: center; justify-content: center; color: {TEXT_SECONDARY}; transition: all 0.3s ease; }}
            .service-toggle:hover .service-icon {{ border-color: {ACCENT}; color: {ACCENT}; }}
            .service-expand.open {{ background: {ACCENT}; border-color: {ACCENT}; color: {TEXT_PRIMARY}; }}
            .service-body {{ overflow: hidden; max-height: 0; transition: max-height 0.5s cubic-bezier(0.34, 1.56, 0.64, 1), padding 0.5s ease; }}
            .service-body.open {{ max-height: 16rem; padding-bottom: 2rem; }}
            .pill-link {{ display: inline-flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border: 1px solid {BORDER_DEFAULT}; border-radius: 9999px; font-size: 0.875rem; color: {TEXT_PRIMARY}; text-decoration: none; transition: all 0.5s ease; }}
            .pill-link:hover {{ background: {TEXT_PRIMARY}; color: {BG_BASE}; }}
            .form-input {{ width: 100%; background: transparent; border: none; border-bottom: 1px solid {BORDER_DEFAULT}; padding: 1rem 0; font-family: {FONT_BODY}; font-size: 1.125rem; color: {TEXT_PRIMARY}; resize: none; transition: border-color 0.3s ease; }}
            .form-input:focus {{ outline: none; border-color: {ACCENT}; }}
            .form-input::placeholder {{ color: rgba(255, 255, 255, 0.2); }}
            .submit-button {{ display: inline-flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border: none; border-radius: 9999px; font-family: {FONT_BODY}; font-size: 0.875rem; background: {TEXT_PRIMARY}; color: {BG_BASE}; cursor: pointer; transition: all 0.5s ease; }}
            .submit-button:hover:not(:disabled) {{ background: {ACCENT}; color: {TEXT_PRIMARY}; }}
            .submit-button:disabled {{ cursor: default; opacity: 0.8; }}
            .submit-button.sent {{ background: {ACCENT_SUCCESS}; color: {TEXT_PRIMARY}; }}
            .send-icon.pulse {{ animation: pulse 1s ease-in-out infinite; }}
            @keyframes pulse {{ 50% {{ opacity: 0.3; }} }}
            .info-card {{ display: flex; align-items: center; gap: 1.5rem; padding: 1.5rem; border-radius: 2px; transition: border-color 0.3s ease; }}
            .info-card:hover {{ border-color: rgba(239, 68, 68, 0.3); }}
            .info-icon {{ width: 3rem; height: 3rem; border-radius: 50%; background: rgba(255, 255, 255, 0.05); display: flex; align-items: center; justify-content: center; color: {ACCENT}; }}
            .info-value {{ color: {TEXT_PRIMARY}; text-decoration: none; transition: color 0.3s ease; }}
            a.info-value:hover {{ color: {ACCENT}; }}
            .social-chip {{ width: 2.5rem; height: 2.5rem; border-radius: 50%; border: 1px solid {BORDER_DEFAULT}; display: flex; align-items: center; justify-content: center; font-size: 0.75rem; color: {TEXT_SECONDARY}; text-decoration: none; transition: all 0.3s ease; }}
            .social-chip:hover {{ border-color: {ACCENT}; color: {ACCENT}; }}
            .footer-heading {{ margin: 0 0 1.5rem 0; font-size: 0.75rem; font-weight: 400; letter-spacing: 0.05em; text-transform: uppercase; color: {TEXT_MUTED}; }}
            .footer-link {{ display: inline-block; font-size: 0.875rem; color: {TEXT_SECONDARY}; text-decoration: none; transition: color 0.3s ease; }}
            .footer-link:hover {{ color: {TEXT_PRIMARY}; }}
            .footer-cta {{ color: {TEXT_PRIMARY}; text-decoration: none; transition: color 0.5s ease; }}
            .footer-cta:hover {{ color: {ACCENT}; }}
            .back-to-top {{ position: fixed; bottom: 2rem; right: 2rem; z-index: 40; width: 3rem; height: 3rem; border: none; border-radius: 50%; background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(4px); color: {TEXT_PRIMARY}; cursor: pointer; transition: background 0.3s ease; }}
            .back-to-top:hover {{ background: {ACCENT}; }}
            .nav-logo {{ font-family: {FONT_DISPLAY}; font-size: 1.5rem; color: {TEXT_PRIMARY}; text-decoration: none; transition: color 0.3s ease; }}
            .nav-logo:hover {{ color: {ACCENT}; }}
            .nav-desktop {{ display: flex; align-items: center; gap: 2rem; }}
            .nav-link {{ font-size: 0.875rem; color: {TEXT_SECONDARY}; text-decoration: none; }}
            .nav-link:hover {{ color: {TEXT_PRIMARY}; }}
            .nav-mobile-toggle {{ display: none; width: 2.5rem; height: 2.5rem; background: none; border: none; font-size: 1.5rem; color: {TEXT_PRIMARY}; cursor: pointer; }}
            .mobile-menu {{ position: fixed; inset: 0; z-index: 40; background: {BG_BASE}; opacity: 0; pointer-events: none; transition: opacity 0.5s ease; }}
            .mobile-menu.open {{ opacity: 1; pointer-events: auto; }}
            .mobile-menu-link {{ font-family: {FONT_DISPLAY}; font-size: 2.25rem; color: {TEXT_PRIMARY}; text-decoration: none; }}
            .mobile-menu-link:hover {{ color: {ACCENT}; }}
            .custom-cursor-on, .custom-cursor-on * {{ cursor: none !important; }}
            .view-label {{ width: 5rem; height: 5rem; margin: -2.5rem 0 0 -2.5rem; border-radius: 50%; background: {ACCENT}; display: flex; align-items: center; justify-content: center; font-family: {FONT_BODY}; font-size: 0.75rem; letter-spacing: 0.05em; text-transform: uppercase; color: {TEXT_PRIMARY}; }}
            @media (hover: none) {{ .works-view {{ display: none; }} }}
            @media (max-width: 768px) {{
                .container {{ padding: 0 1.5rem; }}
                .nav-desktop {{ display: none; }}
                .works-view {{ display: none; }}
                .nav-mobile-toggle {{ display: flex; align-items: center; justify-content: center; }}
            }}
            @media (min-width: 769px) {{ .mobile-menu {{ display: none; }} }}
            @media (prefers-reduced-motion: reduce) {{
                .tracking-breathe, .send-icon.pulse {{ animation: none; }}
                html {{ scroll-behavior: auto; }}
            }}
            "#
        }

        div {
            class: root_class,
            style: "position: relative; width: 100%; min-height: 100vh; background-color: {BG_BASE}; color: {TEXT_PRIMARY};",

            Navigation {}

            for kind in SectionKind::ALL {
                Fragment {
                    key: "{kind.anchor()}",
                    {section_view(kind)}
                }
            }

            if show_cursor {
                Cursor {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_cursor_needs_mouse_and_motion() {
        assert!(!wants_custom_cursor(None));
        assert!(wants_custom_cursor(Some(PageEnv { reduced_motion: false, touch: false })));
        assert!(!wants_custom_cursor(Some(PageEnv { reduced_motion: true, touch: false })));
        assert!(!wants_custom_cursor(Some(PageEnv { reduced_motion: false, touch: true })));
    }
}
