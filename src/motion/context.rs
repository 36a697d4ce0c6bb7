//! Per-section animation context.
//!
//! A context owns the timelines, players and bindings built from one
//! [`ContextPlan`]. It is the only code that turns animation state into style
//! writes, and it enforces one driver per (element, property): starting a
//! player claims its keys from whoever held them before.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::intent::{build_timeline, retarget, BuildEnv, MotionSpec, PointerIntent, Pose, Timing};
use super::property::{ElementId, ElementStyle, PropertyKey, StyleWrite};
use super::timeline::{Player, Timeline};
use super::easing::Easing;
use super::trigger::{Band, TriggerEvent, TriggerMode, TriggerState};
use super::viewport::{ElementRect, ViewportSample};

/// Latest measured rect per element. Elements absent from the map are not in
/// the document.
pub type Geometry = HashMap<ElementId, ElementRect>;

/// A scroll-triggered timeline, as data.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPlan {
    pub trigger: ElementId,
    pub band: Band,
    pub mode: TriggerMode,
    pub specs: Vec<MotionSpec>,
}

/// A pointer-driven effect, as data.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerPlan {
    /// Element whose rect decides engagement.
    pub watch: ElementId,
    /// Element that moves.
    pub target: ElementId,
    pub intent: PointerIntent,
}

/// Everything a context animates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextPlan {
    pub scroll: Vec<ScrollPlan>,
    pub pointer: Vec<PointerPlan>,
}

impl ContextPlan {
    /// Whether building this plan reads the viewport size.
    pub fn depends_on_viewport(&self, a: &BuildEnv, b: &BuildEnv) -> bool {
        self.scroll.iter().any(|scroll| {
            build_timeline(&scroll.specs, a) != build_timeline(&scroll.specs, b)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextSettings {
    pub reduced_motion: bool,
    pub env: BuildEnv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStatus {
    /// Waiting for its elements to be mounted.
    Pending,
    Installed,
    /// An element went away; the binding does nothing from now on.
    Removed,
}

#[derive(Debug)]
struct ScrollBinding {
    trigger: ElementId,
    elements: Vec<ElementId>,
    state: TriggerState,
    slot: usize,
    status: BindingStatus,
}

#[derive(Debug)]
struct PointerBinding {
    watch: ElementId,
    target: ElementId,
    intent: PointerIntent,
    last_pose: Option<Pose>,
    slot: usize,
    status: BindingStatus,
}

#[derive(Debug)]
pub struct AnimationContext {
    settings: ContextSettings,
    players: Vec<Player>,
    needs_apply: Vec<bool>,
    scroll: Vec<ScrollBinding>,
    pointer: Vec<PointerBinding>,
    styles: BTreeMap<ElementId, ElementStyle>,
    owners: HashMap<PropertyKey, usize>,
    dirty: BTreeSet<ElementId>,
    last_sample: Option<ViewportSample>,
}

/// Bindings that went from pending to installed during one frame.
#[derive(Debug, Default)]
struct Installed {
    scroll: Vec<usize>,
    pointer: Vec<usize>,
}

impl AnimationContext {
    /// Build every timeline of `plan`. Nothing is written until the bound
    /// elements show up in the geometry passed to [`AnimationContext::tick`].
    ///
    /// Under reduced motion, discrete timelines are collapsed to their end
    /// state and scrubbed or pointer-driven effects are not created.
    pub fn new(plan: &ContextPlan, settings: ContextSettings) -> Self {
        let mut context = Self {
            settings,
            players: Vec::new(),
            needs_apply: Vec::new(),
            scroll: Vec::new(),
            pointer: Vec::new(),
            styles: BTreeMap::new(),
            owners: HashMap::new(),
            dirty: BTreeSet::new(),
            last_sample: None,
        };

        for scroll in &plan.scroll {
            if settings.reduced_motion && scroll.mode.is_continuous() {
                continue;
            }
            let mut timeline = build_timeline(&scroll.specs, &settings.env);
            if settings.reduced_motion {
                timeline = timeline.collapsed();
            }
            let mut elements = vec![scroll.trigger.clone()];
            for key in timeline.keys() {
                if !elements.contains(&key.element) {
                    elements.push(key.element);
                }
            }
            let slot = context.push_player(Player::new(timeline));
            context.scroll.push(ScrollBinding {
                trigger: scroll.trigger.clone(),
                elements,
                state: TriggerState::new(scroll.band, scroll.mode),
                slot,
                status: BindingStatus::Pending,
            });
        }

        if !settings.reduced_motion {
            for pointer in &plan.pointer {
                let slot = context.push_player(Player::new(Timeline::default()));
                context.pointer.push(PointerBinding {
                    watch: pointer.watch.clone(),
                    target: pointer.target.clone(),
                    intent: pointer.intent,
                    last_pose: None,
                    slot,
                    status: BindingStatus::Pending,
                });
            }
        }

        context
    }

    fn push_player(&mut self, player: Player) -> usize {
        self.players.push(player);
        self.needs_apply.push(false);
        self.players.len() - 1
    }

    pub fn settings(&self) -> &ContextSettings {
        &self.settings
    }

    /// Elements whose geometry this context needs each frame.
    pub fn tracked_elements(&self) -> BTreeSet<ElementId> {
        let mut out = BTreeSet::new();
        for binding in &self.scroll {
            if binding.status != BindingStatus::Removed {
                out.extend(binding.elements.iter().cloned());
            }
        }
        for binding in &self.pointer {
            if binding.status != BindingStatus::Removed {
                out.insert(binding.watch.clone());
                out.insert(binding.target.clone());
            }
        }
        out
    }

    pub fn style_of(&self, id: &ElementId) -> Option<&ElementStyle> {
        self.styles.get(id)
    }

    /// Index of the player currently driving `key`.
    pub fn owner_of(&self, key: &PropertyKey) -> Option<usize> {
        self.owners.get(key).copied()
    }

    pub fn scroll_status(&self, index: usize) -> Option<BindingStatus> {
        self.scroll.get(index).map(|b| b.status)
    }

    pub fn scroll_progress(&self, index: usize) -> Option<f64> {
        self.scroll.get(index).map(|b| self.players[b.slot].progress())
    }

    pub fn scroll_slot(&self, index: usize) -> Option<usize> {
        self.scroll.get(index).map(|b| b.slot)
    }

    pub fn pointer_slot(&self, index: usize) -> Option<usize> {
        self.pointer.get(index).map(|b| b.slot)
    }

    pub fn is_player_running(&self, slot: usize) -> bool {
        self.players.get(slot).is_some_and(Player::is_playing)
    }

    /// Whether any player still has motion to deliver.
    pub fn is_animating(&self) -> bool {
        self.players.iter().any(Player::is_playing) || self.needs_apply.iter().any(|n| *n)
    }

    /// Remember the sample last emitted before this context existed, so
    /// bindings installed before the next sample still see the viewport.
    pub fn resume_from(&mut self, sample: Option<ViewportSample>) {
        self.last_sample = sample;
    }

    /// Carry trigger state and playhead positions over from a context built
    /// from the same plan, so a rebuild does not replay finished entrances.
    pub fn adopt_progress(&mut self, previous: &AnimationContext) {
        for (binding, old) in self.scroll.iter_mut().zip(&previous.scroll) {
            if binding.trigger != old.trigger || old.status != BindingStatus::Installed {
                continue;
            }
            binding.state = old.state.clone();
            let progress = previous.players[old.slot].progress();
            self.players[binding.slot].seek_progress(progress);
        }
    }

    /// Claim every key of the player in `slot`. A previous owner that is left
    /// with no keys is stopped.
    fn claim(&mut self, slot: usize) {
        let keys = self.players[slot].timeline().keys();
        let mut displaced = BTreeSet::new();
        for key in keys {
            if let Some(previous) = self.owners.insert(key, slot) {
                if previous != slot {
                    displaced.insert(previous);
                }
            }
        }
        for previous in displaced {
            if !self.owners.values().any(|owner| *owner == previous) {
                self.players[previous].stop();
                log::debug!("player {} overridden by {}", previous, slot);
            }
        }
        self.needs_apply[slot] = true;
    }

    fn release(&mut self, slot: usize) {
        self.players[slot].stop();
        self.owners.retain(|_, owner| *owner != slot);
        self.needs_apply[slot] = false;
    }

    fn install_or_remove(&mut self, geometry: &Geometry) -> Installed {
        let mut installed = Installed::default();
        for index in 0..self.scroll.len() {
            let present = self.scroll[index].elements.iter().all(|id| geometry.contains_key(id));
            match (self.scroll[index].status, present) {
                (BindingStatus::Pending, true) => {
                    self.scroll[index].status = BindingStatus::Installed;
                    let slot = self.scroll[index].slot;
                    self.claim(slot);
                    installed.scroll.push(index);
                }
                (BindingStatus::Installed, false) => {
                    log::debug!("trigger {} left the document; removing binding", self.scroll[index].trigger);
                    self.scroll[index].status = BindingStatus::Removed;
                    let slot = self.scroll[index].slot;
                    self.release(slot);
                }
                _ => {}
            }
        }

        for index in 0..self.pointer.len() {
            let binding = &self.pointer[index];
            let present = geometry.contains_key(&binding.watch) && geometry.contains_key(&binding.target);
            match (binding.status, present) {
                (BindingStatus::Pending, true) => {
                    self.pointer[index].status = BindingStatus::Installed;
                    if let Some(pose) = self.pointer[index].intent.initial_pose() {
                        self.start_pose(index, pose, Timing::new(0.0, Easing::Linear));
                    }
                    installed.pointer.push(index);
                }
                (BindingStatus::Installed, false) => {
                    self.pointer[index].status = BindingStatus::Removed;
                    let slot = self.pointer[index].slot;
                    self.release(slot);
                }
                _ => {}
            }
        }
        installed
    }

    fn start_pose(&mut self, index: usize, pose: Pose, timing: Timing) {
        let binding = &self.pointer[index];
        let current = self.styles.get(&binding.target).cloned().unwrap_or_default();
        let timeline = retarget(&binding.target, &pose, &current, timing);
        let slot = binding.slot;
        self.players[slot] = Player::new(timeline);
        self.players[slot].play();
        self.pointer[index].last_pose = Some(pose);
        self.claim(slot);
    }

    /// Trigger geometry as laid out, without the transform this context has
    /// put on the trigger itself.
    fn trigger_rect(&self, index: usize, geometry: &Geometry) -> Option<ElementRect> {
        let trigger = &self.scroll[index].trigger;
        let rendered = geometry.get(trigger)?;
        Some(match self.styles.get(trigger) {
            Some(style) => style.layout_rect(rendered),
            None => *rendered,
        })
    }

    fn evaluate_scroll(&mut self, index: usize, geometry: &Geometry, sample: &ViewportSample) {
        if self.scroll[index].status != BindingStatus::Installed {
            return;
        }
        let Some(rect) = self.trigger_rect(index, geometry) else {
            return;
        };
        let Some(event) = self.scroll[index].state.evaluate(&rect, sample) else {
            return;
        };
        if self.settings.reduced_motion {
            // Already at the end state; nothing to replay.
            return;
        }
        let slot = self.scroll[index].slot;
        match event {
            TriggerEvent::Enter => self.players[slot].play(),
            TriggerEvent::Exit => self.players[slot].reverse(),
            TriggerEvent::Scrub { progress, smoothing } => self.players[slot].scrub_to(progress, smoothing),
        }
        self.claim(slot);
    }

    fn evaluate_pointer(&mut self, index: usize, geometry: &Geometry, sample: &ViewportSample) {
        if self.pointer[index].status != BindingStatus::Installed {
            return;
        }
        let Some(rect) = geometry.get(&self.pointer[index].watch) else {
            return;
        };
        let intent = self.pointer[index].intent;
        let engaged = intent.engaged(sample, rect);
        let pose = intent.pose(sample, rect, engaged);
        if self.pointer[index].last_pose.as_ref() == Some(&pose) {
            return;
        }
        self.start_pose(index, pose, intent.timing(engaged));
    }

    /// Run one frame: install or tear down bindings against `geometry`, react
    /// to `sample` if a new one was emitted, advance players by `dt` seconds
    /// and return the resulting style writes.
    ///
    /// Bindings installed on a frame without a new sample are evaluated
    /// against the last one seen.
    pub fn tick(&mut self, geometry: &Geometry, sample: Option<&ViewportSample>, dt: f64) -> Vec<StyleWrite> {
        let installed = self.install_or_remove(geometry);
        if let Some(sample) = sample {
            self.last_sample = Some(*sample);
            for index in 0..self.scroll.len() {
                self.evaluate_scroll(index, geometry, sample);
            }
            for index in 0..self.pointer.len() {
                self.evaluate_pointer(index, geometry, sample);
            }
        } else if let Some(latest) = self.last_sample {
            for index in installed.scroll {
                self.evaluate_scroll(index, geometry, &latest);
            }
            for index in installed.pointer {
                self.evaluate_pointer(index, geometry, &latest);
            }
        }

        for slot in 0..self.players.len() {
            let moved = self.players[slot].advance(dt);
            if !moved && !self.needs_apply[slot] {
                continue;
            }
            self.needs_apply[slot] = false;
            for (key, value) in self.players[slot].sample() {
                if self.owners.get(&key) != Some(&slot) {
                    continue;
                }
                self.styles.entry(key.element.clone()).or_default().set(key.property, value);
                self.dirty.insert(key.element);
            }
        }

        std::mem::take(&mut self.dirty)
            .into_iter()
            .filter_map(|id| {
                let style = self.styles.get(&id)?;
                Some(StyleWrite::from_style(id, style))
            })
            .collect()
    }

    /// Discard every binding and revert the styles this context wrote.
    pub fn teardown(self) -> Vec<StyleWrite> {
        self.styles.into_keys().map(StyleWrite::revert).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::intent::MotionIntent;
    use crate::motion::property::Property;

    const VH: f64 = 1000.0;

    fn settings(reduced_motion: bool) -> ContextSettings {
        ContextSettings {
            reduced_motion,
            env: BuildEnv { viewport_width: 1280.0, viewport_height: VH },
        }
    }

    fn sample(scroll_y: f64) -> ViewportSample {
        ViewportSample {
            scroll_y,
            viewport_height: VH,
            ..ViewportSample::default()
        }
    }

    /// Section 1000px down the page, 400px tall, as seen at `scroll_y`.
    fn geometry(scroll_y: f64) -> Geometry {
        let mut geometry = Geometry::new();
        geometry.insert(ElementId::new("section"), ElementRect::new(1000.0 - scroll_y, 0.0, 1280.0, 400.0));
        geometry.insert(ElementId::new("title"), ElementRect::new(1000.0 - scroll_y, 0.0, 600.0, 80.0));
        geometry
    }

    fn reveal(mode: TriggerMode) -> ScrollPlan {
        ScrollPlan {
            trigger: ElementId::new("section"),
            band: Band::parse("top 70%", "bottom 20%").unwrap(),
            mode,
            specs: vec![MotionSpec::new(
                "title",
                MotionIntent::RevealFromBelow { distance: 80.0 },
                Timing::new(1.0, Easing::ExpoOut),
            )],
        }
    }

    fn parallax() -> ScrollPlan {
        ScrollPlan {
            trigger: ElementId::new("section"),
            band: Band::parse("top top", "bottom top").unwrap(),
            mode: TriggerMode::Scrub { smoothing: 0.0 },
            specs: vec![MotionSpec::new(
                "title",
                MotionIntent::Parallax { axis: crate::motion::intent::Axis::Y, unit: crate::motion::intent::ShiftUnit::Px, from: 0.0, to: -40.0 },
                Timing::new(1.0, Easing::Linear),
            )],
        }
    }

    fn run(context: &mut AnimationContext, geometry: &Geometry, frames: usize) {
        for _ in 0..frames {
            context.tick(geometry, None, 0.1);
        }
    }

    fn title_value(context: &AnimationContext, property: Property) -> f64 {
        context.style_of(&ElementId::new("title")).unwrap().get(property)
    }

    #[test]
    fn test_binding_waits_for_its_elements() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayOnce)], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        assert!(context.tick(&Geometry::new(), Some(&sample(0.0)), 0.016).is_empty());
        assert_eq!(context.scroll_status(0), Some(BindingStatus::Pending));

        let writes = context.tick(&geometry(0.0), Some(&sample(0.0)), 0.016);
        assert_eq!(context.scroll_status(0), Some(BindingStatus::Installed));
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].declarations.get("opacity"), Some(&Some("0".to_string())));
        assert_eq!(title_value(&context, Property::Y), 80.0);
    }

    #[test]
    fn test_binding_installed_between_samples_uses_last_sample() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayOnce)], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        context.tick(&Geometry::new(), Some(&sample(350.0)), 0.016);
        assert_eq!(context.scroll_status(0), Some(BindingStatus::Pending));

        // Elements show up on a frame that carries no new sample.
        let g = geometry(350.0);
        context.tick(&g, None, 0.016);
        assert_eq!(context.scroll_status(0), Some(BindingStatus::Installed));
        run(&mut context, &g, 20);
        assert_eq!(context.scroll_progress(0), Some(1.0));
        assert_eq!(title_value(&context, Property::Opacity), 1.0);
    }

    #[test]
    fn test_binding_waits_without_any_sample() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayOnce)], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        let g = geometry(350.0);
        run(&mut context, &g, 5);
        assert_eq!(context.scroll_progress(0), Some(0.0));

        let mut resumed = AnimationContext::new(&plan, settings(false));
        resumed.resume_from(Some(sample(350.0)));
        run(&mut resumed, &g, 20);
        assert_eq!(resumed.scroll_progress(0), Some(1.0));
    }

    #[test]
    fn test_self_triggered_scrub_reaches_band_end() {
        let decor = ElementId::new("decor");
        let plan = ContextPlan {
            scroll: vec![ScrollPlan {
                trigger: decor.clone(),
                band: Band::parse("top bottom", "bottom top").unwrap(),
                mode: TriggerMode::Scrub { smoothing: 0.0 },
                specs: vec![MotionSpec::new(
                    "decor",
                    MotionIntent::Parallax {
                        axis: crate::motion::intent::Axis::Y,
                        unit: crate::motion::intent::ShiftUnit::ViewportFactor,
                        from: 0.0,
                        to: 0.3,
                    },
                    Timing::new(1.0, Easing::Linear),
                )],
            }],
            pointer: vec![],
        };
        let mut context = AnimationContext::new(&plan, settings(false));

        // 200px tall, 2000px down the page; the band runs from scroll 1000
        // to 2200. The measured rect includes the shift written so far.
        let mut scroll = 1000.0;
        while scroll <= 2200.0 {
            let y = context.style_of(&decor).map_or(0.0, |style| style.get(Property::Y));
            let mut g = Geometry::new();
            g.insert(decor.clone(), ElementRect::new(2000.0 - scroll + y, 0.0, 300.0, 200.0));
            context.tick(&g, Some(&sample(scroll)), 0.016);
            scroll += 10.0;
        }

        let progress = context.scroll_progress(0).unwrap();
        assert!((progress - 1.0).abs() < 1e-9, "progress {}", progress);
        let y = context.style_of(&decor).unwrap().get(Property::Y);
        assert!((y - 150.0).abs() < 1e-6, "y {}", y);
    }

    #[test]
    fn test_reduced_motion_lands_on_end_state() {
        let plan = ContextPlan {
            scroll: vec![reveal(TriggerMode::PlayOnce), parallax()],
            pointer: vec![PointerPlan {
                watch: ElementId::new("section"),
                target: ElementId::new("title"),
                intent: PointerIntent::Tilt { max_deg: 8.0 },
            }],
        };
        let mut context = AnimationContext::new(&plan, settings(true));
        assert_eq!(context.scroll_status(1), None);
        assert_eq!(context.pointer_slot(0), None);

        context.tick(&geometry(0.0), Some(&sample(0.0)), 0.0);
        assert_eq!(context.scroll_progress(0), Some(1.0));
        assert_eq!(title_value(&context, Property::Opacity), 1.0);
        assert_eq!(title_value(&context, Property::Y), 0.0);
        assert!(!context.is_animating());

        // Scrolling the band in and out changes nothing.
        context.tick(&geometry(500.0), Some(&sample(500.0)), 0.016);
        context.tick(&geometry(0.0), Some(&sample(0.0)), 0.016);
        assert_eq!(title_value(&context, Property::Opacity), 1.0);
    }

    #[test]
    fn test_enter_then_exit_returns_to_start() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayReverseOnExit)], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        context.tick(&geometry(0.0), Some(&sample(0.0)), 0.016);

        // Start edge sits at scroll 1000 - 700 = 300.
        let inside = geometry(350.0);
        context.tick(&inside, Some(&sample(350.0)), 0.016);
        run(&mut context, &inside, 20);
        assert_eq!(context.scroll_progress(0), Some(1.0));
        assert_eq!(title_value(&context, Property::Opacity), 1.0);

        let outside = geometry(100.0);
        context.tick(&outside, Some(&sample(100.0)), 0.016);
        run(&mut context, &outside, 20);
        assert_eq!(context.scroll_progress(0), Some(0.0));
        assert_eq!(title_value(&context, Property::Opacity), 0.0);
        assert_eq!(title_value(&context, Property::Y), 80.0);
    }

    #[test]
    fn test_newest_starter_owns_shared_property() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayOnce), parallax()], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        let reveal_slot = context.scroll_slot(0).unwrap();
        let parallax_slot = context.scroll_slot(1).unwrap();
        let y = PropertyKey::new(ElementId::new("title"), Property::Y);
        let opacity = PropertyKey::new(ElementId::new("title"), Property::Opacity);

        context.tick(&geometry(0.0), Some(&sample(0.0)), 0.016);
        assert_eq!(context.owner_of(&y), Some(parallax_slot));

        context.tick(&geometry(350.0), Some(&sample(350.0)), 0.016);
        assert_eq!(context.owner_of(&y), Some(reveal_slot));
        assert_eq!(context.owner_of(&opacity), Some(reveal_slot));

        // Parallax progress moves once the section top passes the viewport top.
        context.tick(&geometry(1100.0), Some(&sample(1100.0)), 0.016);
        assert_eq!(context.owner_of(&y), Some(parallax_slot));
        assert_eq!(context.owner_of(&opacity), Some(reveal_slot));
        assert!(context.is_player_running(reveal_slot));
        assert!((title_value(&context, Property::Y) - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_removed_element_tears_binding_down() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayReverseOnExit)], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        context.tick(&geometry(350.0), Some(&sample(350.0)), 0.016);
        assert!(context.is_animating());

        let writes = context.tick(&Geometry::new(), Some(&sample(350.0)), 0.016);
        assert!(writes.is_empty());
        assert_eq!(context.scroll_status(0), Some(BindingStatus::Removed));
        assert!(context.tracked_elements().is_empty());

        // Coming back does not revive it.
        for scroll in [0.0, 350.0, 100.0] {
            assert!(context.tick(&geometry(scroll), Some(&sample(scroll)), 0.1).is_empty());
        }
        assert_eq!(context.scroll_status(0), Some(BindingStatus::Removed));
    }

    #[test]
    fn test_hover_reveal_starts_hidden_and_follows_hover() {
        let plan = ContextPlan {
            scroll: vec![],
            pointer: vec![PointerPlan {
                watch: ElementId::new("section"),
                target: ElementId::new("title"),
                intent: PointerIntent::HoverReveal { rest_scale: 0.95 },
            }],
        };
        let mut context = AnimationContext::new(&plan, settings(false));
        let g = geometry(0.0);
        context.tick(&g, None, 0.016);
        assert_eq!(title_value(&context, Property::Opacity), 0.0);
        assert_eq!(title_value(&context, Property::Scale), 0.95);

        let hovering = ViewportSample { pointer_x: 200.0, pointer_y: 1100.0, ..sample(0.0) };
        context.tick(&g, Some(&hovering), 0.016);
        run(&mut context, &g, 10);
        assert_eq!(title_value(&context, Property::Opacity), 1.0);
        assert_eq!(title_value(&context, Property::Scale), 1.0);
    }

    #[test]
    fn test_adopted_progress_skips_replay() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayOnce)], pointer: vec![] };
        let mut old = AnimationContext::new(&plan, settings(false));
        let g = geometry(350.0);
        old.tick(&g, Some(&sample(350.0)), 0.016);
        run(&mut old, &g, 20);

        let mut rebuilt = AnimationContext::new(&plan, settings(false));
        rebuilt.adopt_progress(&old);
        rebuilt.tick(&g, Some(&sample(350.0)), 0.016);
        assert_eq!(rebuilt.scroll_progress(0), Some(1.0));
        assert_eq!(rebuilt.style_of(&ElementId::new("title")).unwrap().get(Property::Opacity), 1.0);
    }

    #[test]
    fn test_teardown_reverts_written_elements() {
        let plan = ContextPlan { scroll: vec![reveal(TriggerMode::PlayOnce)], pointer: vec![] };
        let mut context = AnimationContext::new(&plan, settings(false));
        context.tick(&geometry(0.0), None, 0.016);
        let writes = context.teardown();
        assert_eq!(writes, vec![StyleWrite::revert(ElementId::new("title"))]);
    }
}
