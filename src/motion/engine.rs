//! Page-wide animation registry.
//!
//! The engine owns the viewport tracker and one [`AnimationContext`] per
//! mounted section (plus the navigation bar and the cursor). The bridge feeds
//! it raw events and frame callbacks; it hands back the style writes to apply.

use std::collections::{BTreeMap, BTreeSet};

use super::context::{AnimationContext, ContextPlan, ContextSettings, Geometry};
use super::intent::BuildEnv;
use super::property::{ElementId, StyleWrite};
use super::viewport::{ViewportSample, ViewportTracker};
use crate::constants::MAX_FRAME_STEP_SECS;
use crate::sections::SectionKind;

/// Owner of an animation context. Ordering follows the page: sections top to
/// bottom, then the chrome layered above them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContextId {
    Section(SectionKind),
    Navigation,
    Cursor,
}

#[derive(Debug)]
pub struct MotionEngine {
    tracker: ViewportTracker,
    settings: ContextSettings,
    plans: BTreeMap<ContextId, ContextPlan>,
    contexts: BTreeMap<ContextId, AnimationContext>,
    pending: Vec<StyleWrite>,
    last_frame: Option<f64>,
    last_sample: Option<ViewportSample>,
    tracked_version: u64,
}

impl MotionEngine {
    pub fn new(frame_rate: f64, reduced_motion: bool) -> Self {
        Self {
            tracker: ViewportTracker::new(frame_rate),
            settings: ContextSettings {
                reduced_motion,
                env: BuildEnv::default(),
            },
            plans: BTreeMap::new(),
            contexts: BTreeMap::new(),
            pending: Vec::new(),
            last_frame: None,
            last_sample: None,
            tracked_version: 0,
        }
    }

    /// Begin viewport observation with the initial window size.
    pub fn start(&mut self, width: f64, height: f64) {
        self.tracker.subscribe();
        self.tracker.on_resize(width, height);
        self.settings.env = BuildEnv {
            viewport_width: width,
            viewport_height: height,
        };
        self.rebuild_all(false);
    }

    pub fn stop(&mut self) {
        self.tracker.unsubscribe();
        self.last_frame = None;
        self.last_sample = None;
    }

    pub fn reduced_motion(&self) -> bool {
        self.settings.reduced_motion
    }

    pub fn is_mounted(&self, id: ContextId) -> bool {
        self.contexts.contains_key(&id)
    }

    pub fn context(&self, id: ContextId) -> Option<&AnimationContext> {
        self.contexts.get(&id)
    }

    pub fn context_ids(&self) -> Vec<ContextId> {
        self.contexts.keys().copied().collect()
    }

    /// Create the context for `id`, replacing (and reverting) any previous one.
    pub fn mount(&mut self, id: ContextId, plan: ContextPlan) {
        if let Some(previous) = self.contexts.remove(&id) {
            self.pending.extend(previous.teardown());
        }
        log::debug!(
            "mounting {:?}: {} scroll, {} pointer bindings",
            id,
            plan.scroll.len(),
            plan.pointer.len()
        );
        let mut context = AnimationContext::new(&plan, self.settings);
        context.resume_from(self.last_sample);
        self.contexts.insert(id, context);
        self.plans.insert(id, plan);
        self.tracked_version += 1;
    }

    /// Drop the context for `id`. Its reverting writes go out with the next
    /// frame.
    pub fn unmount(&mut self, id: ContextId) {
        self.plans.remove(&id);
        if let Some(context) = self.contexts.remove(&id) {
            log::debug!("unmounting {:?}", id);
            self.pending.extend(context.teardown());
            self.tracked_version += 1;
        }
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        if self.settings.reduced_motion == reduced_motion {
            return;
        }
        log::info!("reduced motion {}", if reduced_motion { "on" } else { "off" });
        self.settings.reduced_motion = reduced_motion;
        self.rebuild_all(false);
    }

    fn rebuild_all(&mut self, keep_progress: bool) {
        let ids: Vec<ContextId> = self.plans.keys().copied().collect();
        for id in ids {
            self.rebuild(id, keep_progress);
        }
    }

    fn rebuild(&mut self, id: ContextId, keep_progress: bool) {
        let Some(plan) = self.plans.get(&id) else {
            return;
        };
        let mut context = AnimationContext::new(plan, self.settings);
        context.resume_from(self.last_sample);
        if let Some(previous) = self.contexts.remove(&id) {
            if keep_progress {
                context.adopt_progress(&previous);
            } else {
                self.pending.extend(previous.teardown());
            }
        }
        self.contexts.insert(id, context);
        self.tracked_version += 1;
    }

    fn apply_viewport(&mut self, sample: &ViewportSample) {
        let env = BuildEnv {
            viewport_width: sample.viewport_width,
            viewport_height: sample.viewport_height,
        };
        if env == self.settings.env {
            return;
        }
        let previous = std::mem::replace(&mut self.settings.env, env);
        let affected: Vec<ContextId> = self
            .plans
            .iter()
            .filter(|(_, plan)| plan.depends_on_viewport(&previous, &env))
            .map(|(id, _)| *id)
            .collect();
        for id in affected {
            log::debug!("viewport resized; rebuilding {:?}", id);
            self.rebuild(id, true);
        }
    }

    /// Elements whose rects the bridge should report each frame.
    pub fn tracked_elements(&self) -> Vec<ElementId> {
        let mut out = BTreeSet::new();
        for context in self.contexts.values() {
            out.extend(context.tracked_elements());
        }
        out.into_iter().collect()
    }

    /// Bumped whenever [`MotionEngine::tracked_elements`] may have changed.
    pub fn tracked_version(&self) -> u64 {
        self.tracked_version
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.tracker.on_scroll(scroll_y);
    }

    pub fn on_pointer(&mut self, x: f64, y: f64, over_interactive: bool) {
        self.tracker.on_pointer(x, y, over_interactive);
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.tracker.on_resize(width, height);
    }

    pub fn latest_sample(&self) -> &ViewportSample {
        self.tracker.latest()
    }

    /// Process one frame callback. `timestamp` is in milliseconds and
    /// `geometry` holds the rects of the tracked elements that exist.
    pub fn frame(&mut self, timestamp: f64, geometry: &Geometry) -> Vec<StyleWrite> {
        let dt = self
            .last_frame
            .map(|last| ((timestamp - last) / 1000.0).clamp(0.0, MAX_FRAME_STEP_SECS))
            .unwrap_or(0.0);
        self.last_frame = Some(timestamp);

        let sample = self.tracker.on_frame(timestamp);
        if let Some(sample) = &sample {
            self.apply_viewport(sample);
            self.last_sample = Some(*sample);
        }

        let mut writes = std::mem::take(&mut self.pending);
        for context in self.contexts.values_mut() {
            writes.extend(context.tick(geometry, sample.as_ref(), dt));
        }
        writes
    }
}
