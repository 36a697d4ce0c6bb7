use dioxus::prelude::*;

use crate::constants::*;
use crate::motion::trigger::BandParseError;
use crate::motion::{ContextId, ContextPlan, Easing, ElementId, PointerIntent, PointerPlan};
use crate::sections::use_motion_context;

const RING: &str = "cursor-ring";
const DOT: &str = "cursor-dot";

fn follow(id: &str, intent: PointerIntent) -> PointerPlan {
    PointerPlan {
        watch: ElementId::new(id),
        target: ElementId::new(id),
        intent,
    }
}

pub(crate) fn plan() -> Result<ContextPlan, BandParseError> {
    Ok(ContextPlan {
        scroll: Vec::new(),
        pointer: vec![
            follow(RING, PointerIntent::Follow { duration: CURSOR_RING_FOLLOW, easing: Easing::Power2Out }),
            follow(RING, PointerIntent::InteractiveScale { scale: CURSOR_RING_HOVER_SCALE }),
            follow(DOT, PointerIntent::Follow { duration: CURSOR_DOT_FOLLOW, easing: Easing::Linear }),
        ],
    })
}

/// Pointer-following ring and dot. Only mounted for mouse input with motion
/// enabled.
#[component]
pub fn Cursor() -> Element {
    use_motion_context(ContextId::Cursor, plan);

    rsx! {
        div {
            id: RING,
            style: "position: fixed; top: 0; left: 0; z-index: 9999; pointer-events: none; mix-blend-mode: difference;",
            div {
                style: "width: 2rem; height: 2rem; margin: -1rem 0 0 -1rem; border-radius: 50%; border: 1px solid rgba(255, 255, 255, 0.5);",
            }
        }
        div {
            id: DOT,
            style: "position: fixed; top: 0; left: 0; z-index: 9999; pointer-events: none;",
            div {
                style: "width: 4px; height: 4px; margin: -2px 0 0 -2px; border-radius: 50%; background-color: {ACCENT};",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_lags_behind_dot() {
        let plan = plan().unwrap();
        let duration = |id: &str| {
            plan.pointer
                .iter()
                .find_map(|p| match p.intent {
                    PointerIntent::Follow { duration, .. } if p.target.as_str() == id => Some(duration),
                    _ => None,
                })
                .unwrap()
        };
        assert!(duration(RING) > duration(DOT));
    }
}
