//! Messages exchanged with the page script and their routing into the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::motion::context::Geometry;
use crate::motion::{ElementId, ElementRect, MotionEngine, StyleWrite};

/// Page script to Rust.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    Env {
        reduced_motion: bool,
        touch: bool,
        width: f64,
        height: f64,
    },
    ReducedMotion {
        reduced: bool,
    },
    Scroll {
        y: f64,
    },
    Pointer {
        x: f64,
        y: f64,
        #[serde(default)]
        interactive: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
    Frame {
        timestamp: f64,
        #[serde(default)]
        rects: HashMap<String, ElementRect>,
    },
}

/// Rust to page script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeCommand {
    Track { ids: Vec<ElementId> },
    Styles { writes: Vec<StyleWrite> },
}

/// Platform facts reported once the page script is running.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageEnv {
    pub reduced_motion: bool,
    pub touch: bool,
}

#[derive(Debug, Default)]
pub struct BridgeOutcome {
    pub commands: Vec<BridgeCommand>,
    /// Set when the effective environment changed.
    pub env: Option<PageEnv>,
}

/// Routes page events into a [`MotionEngine`].
#[derive(Debug, Default)]
pub struct Bridge {
    /// Overrides the platform reduced-motion preference when set.
    forced_reduced_motion: Option<bool>,
    env: PageEnv,
    sent_tracked_version: Option<u64>,
}

impl Bridge {
    pub fn new(forced_reduced_motion: Option<bool>) -> Self {
        Self {
            forced_reduced_motion,
            ..Self::default()
        }
    }

    pub fn env(&self) -> PageEnv {
        self.env
    }

    pub fn handle(&mut self, engine: &mut MotionEngine, event: BridgeEvent) -> BridgeOutcome {
        let mut outcome = BridgeOutcome::default();
        match event {
            BridgeEvent::Env {
                reduced_motion,
                touch,
                width,
                height,
            } => {
                let reduced_motion = self.forced_reduced_motion.unwrap_or(reduced_motion);
                log::info!(
                    "page bridge ready ({}x{}, reduced motion: {}, touch: {})",
                    width,
                    height,
                    reduced_motion,
                    touch
                );
                engine.set_reduced_motion(reduced_motion);
                engine.start(width, height);
                self.env = PageEnv { reduced_motion, touch };
                self.sent_tracked_version = None;
                outcome.env = Some(self.env);
            }
            BridgeEvent::ReducedMotion { reduced } => {
                if self.forced_reduced_motion.is_none() && reduced != self.env.reduced_motion {
                    engine.set_reduced_motion(reduced);
                    self.env.reduced_motion = reduced;
                    outcome.env = Some(self.env);
                }
            }
            BridgeEvent::Scroll { y } => engine.on_scroll(y),
            BridgeEvent::Pointer { x, y, interactive } => engine.on_pointer(x, y, interactive),
            BridgeEvent::Resize { width, height } => engine.on_resize(width, height),
            BridgeEvent::Frame { timestamp, rects } => {
                let geometry: Geometry = rects
                    .into_iter()
                    .map(|(id, rect)| (ElementId::new(id), rect))
                    .collect();
                let writes = engine.frame(timestamp, &geometry);
                if !writes.is_empty() {
                    outcome.commands.push(BridgeCommand::Styles { writes });
                }
            }
        }

        let version = engine.tracked_version();
        if self.sent_tracked_version != Some(version) {
            self.sent_tracked_version = Some(version);
            outcome.commands.push(BridgeCommand::Track {
                ids: engine.tracked_elements(),
            });
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{ContextId, ContextPlan};
    use crate::sections::{section_plan, SectionKind};

    fn parse(json: &str) -> BridgeEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_events_deserialize_from_page_messages() {
        assert_eq!(parse(r#"{"kind":"scroll","y":120.5}"#), BridgeEvent::Scroll { y: 120.5 });
        assert_eq!(
            parse(r#"{"kind":"pointer","x":1,"y":2}"#),
            BridgeEvent::Pointer { x: 1.0, y: 2.0, interactive: false }
        );
        match parse(r#"{"kind":"frame","timestamp":16.6,"rects":{"hero":{"top":0,"left":0,"width":1280,"height":800}}}"#) {
            BridgeEvent::Frame { rects, .. } => assert_eq!(rects["hero"].height, 800.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_commands_serialize_for_page_script() {
        let command = BridgeCommand::Styles {
            writes: vec![StyleWrite::revert(ElementId::new("nav"))],
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["kind"], "styles");
        assert_eq!(json["writes"][0]["id"], "nav");
        assert!(json["writes"][0]["declarations"]["opacity"].is_null());
    }

    #[test]
    fn test_tracked_ids_sent_once_per_change() {
        let mut engine = MotionEngine::new(60.0, false);
        let mut bridge = Bridge::new(None);
        engine.mount(ContextId::Section(SectionKind::Works), section_plan(SectionKind::Works).unwrap());

        let first = bridge.handle(&mut engine, BridgeEvent::Scroll { y: 0.0 });
        assert!(matches!(first.commands.as_slice(), [BridgeCommand::Track { ids }] if !ids.is_empty()));
        let second = bridge.handle(&mut engine, BridgeEvent::Scroll { y: 10.0 });
        assert!(second.commands.is_empty());

        engine.unmount(ContextId::Section(SectionKind::Works));
        let third = bridge.handle(&mut engine, BridgeEvent::Scroll { y: 20.0 });
        assert!(matches!(third.commands.as_slice(), [BridgeCommand::Track { ids }] if ids.is_empty()));
    }

    #[test]
    fn test_forced_preference_wins() {
        let mut engine = MotionEngine::new(60.0, false);
        engine.mount(ContextId::Navigation, ContextPlan::default());
        let mut bridge = Bridge::new(Some(true));
        let outcome = bridge.handle(
            &mut engine,
            BridgeEvent::Env { reduced_motion: false, touch: false, width: 1280.0, height: 800.0 },
        );
        assert_eq!(outcome.env, Some(PageEnv { reduced_motion: true, touch: false }));
        assert!(engine.reduced_motion());

        let outcome = bridge.handle(&mut engine, BridgeEvent::ReducedMotion { reduced: false });
        assert!(outcome.env.is_none());
        assert!(engine.reduced_motion());
    }
}
