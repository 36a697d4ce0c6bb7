//! Page sections.
//!
//! Each section module pairs a pure `plan()` (which elements animate, how and
//! when) with the Dioxus component that renders those elements. Components
//! register their plan with the shared engine on mount and drop it on unmount.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::motion::trigger::BandParseError;
use crate::motion::{Band, ContextId, ContextPlan, ElementId, MotionEngine, MotionSpec, ScrollPlan, TriggerMode};

mod about;
mod contact;
mod footer;
mod hero;
mod services;
mod works;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use services::Services;
pub use works::Works;

/// Engine handle shared through the component tree.
pub type SharedEngine = Rc<RefCell<MotionEngine>>;

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Works,
    Services,
    Contact,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Works,
        SectionKind::Services,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    /// DOM id of the section root, also used as its in-page anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Works => "works",
            SectionKind::Services => "services",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }
}

/// Animation plan of a section.
pub fn section_plan(kind: SectionKind) -> Result<ContextPlan, BandParseError> {
    match kind {
        SectionKind::Hero => hero::plan(),
        SectionKind::About => about::plan(),
        SectionKind::Works => works::plan(),
        SectionKind::Services => services::plan(),
        SectionKind::Contact => contact::plan(),
        SectionKind::Footer => footer::plan(),
    }
}

/// Register `build()` with the engine for the lifetime of the calling
/// component. A plan that fails to build leaves the content static.
pub fn use_motion_context(id: ContextId, build: fn() -> Result<ContextPlan, BandParseError>) {
    let engine = use_context::<SharedEngine>();
    use_hook({
        let engine = engine.clone();
        move || match build() {
            Ok(plan) => engine.borrow_mut().mount(id, plan),
            Err(err) => log::error!("{:?} animations disabled: {}", id, err),
        }
    });
    use_drop(move || engine.borrow_mut().unmount(id));
}

/// Play when `start` is crossed, reverse when scrolled back above it.
pub(crate) fn reveal_on_enter(trigger: &str, start: &str, specs: Vec<MotionSpec>) -> Result<ScrollPlan, BandParseError> {
    Ok(ScrollPlan {
        trigger: ElementId::new(trigger),
        band: Band::parse(start, "bottom top")?,
        mode: TriggerMode::PlayReverseOnExit,
        specs,
    })
}

/// Tie the timeline to scroll progress through `start`..`end`.
pub(crate) fn scrub(trigger: &str, start: &str, end: &str, smoothing: f64, specs: Vec<MotionSpec>) -> Result<ScrollPlan, BandParseError> {
    Ok(ScrollPlan {
        trigger: ElementId::new(trigger),
        band: Band::parse(start, end)?,
        mode: TriggerMode::Scrub { smoothing },
        specs,
    })
}

/// Ids `prefix-0` .. `prefix-{count-1}`.
pub(crate) fn indexed_ids(prefix: &str, count: usize) -> Vec<ElementId> {
    (0..count).map(|i| ElementId::indexed(prefix, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::property::PropertyKey;
    use crate::motion::intent::BuildEnv;
    use crate::motion::intent::build_timeline;
    use std::collections::HashSet;

    #[test]
    fn test_sections_are_in_page_order() {
        let mut sorted = SectionKind::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionKind::ALL);
        let anchors: Vec<&str> = SectionKind::ALL.iter().map(|k| k.anchor()).collect();
        assert_eq!(anchors, ["hero", "about", "works", "services", "contact", "footer"]);
    }

    #[test]
    fn test_every_plan_builds() {
        for kind in SectionKind::ALL {
            let plan = section_plan(kind).unwrap_or_else(|err| panic!("{:?}: {}", kind, err));
            assert!(!plan.scroll.is_empty(), "{:?} has no scroll bindings", kind);
        }
    }

    #[test]
    fn test_plans_are_deterministic() {
        for kind in SectionKind::ALL {
            assert_eq!(section_plan(kind).unwrap(), section_plan(kind).unwrap());
        }
    }

    #[test]
    fn test_discrete_bindings_in_a_section_drive_distinct_properties() {
        // Overlap is only expected between a discrete entrance and a scrub or
        // pointer effect, never between two entrances.
        let env = BuildEnv::default();
        for kind in SectionKind::ALL {
            let plan = section_plan(kind).unwrap();
            let mut seen: HashSet<PropertyKey> = HashSet::new();
            for scroll in plan.scroll.iter().filter(|s| !s.mode.is_continuous()) {
                for key in build_timeline(&scroll.specs, &env).keys() {
                    assert!(seen.insert(key.clone()), "{:?}: {:?} driven twice", kind, key);
                }
            }
        }
    }
}
