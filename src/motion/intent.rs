//! Timeline construction from semantic intents.
//!
//! Everything here is pure: the same specs and environment always produce an
//! equal [`Timeline`], which lets contexts be rebuilt on resize or when the
//! reduced-motion preference changes.

use super::easing::Easing;
use super::property::{ElementId, ElementStyle, Property};
use super::timeline::{Timeline, Tween};
use super::viewport::{ElementRect, ViewportSample};

/// Viewport facts a build may depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildEnv {
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for BuildEnv {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }
}

/// Duration, curve and placement of a spec inside its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub easing: Easing,
    /// Delay between consecutive targets.
    pub stagger: f64,
    /// Start time within the timeline.
    pub offset: f64,
}

impl Timing {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            stagger: 0.0,
            offset: 0.0,
        }
    }

    pub const fn stagger(mut self, each: f64) -> Self {
        self.stagger = each;
        self
    }

    pub const fn at(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShiftUnit {
    Px,
    /// Percent of the element's own size.
    Percent,
    /// Multiple of half the viewport height (`k * vh * 0.5`).
    ViewportFactor,
}

/// What an element should do, independent of how it is triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionIntent {
    RevealFromBelow { distance: f64 },
    SlideFromLeft { distance: f64 },
    FadeIn,
    ScaleIn { from: f64 },
    /// Rotate forward out of the screen plane while rising.
    FlipIn { tilt_deg: f64, distance: f64 },
    /// Draw a line from its left edge.
    DrawHorizontal,
    /// Like [`MotionIntent::DrawHorizontal`] with a fade.
    GrowIn,
    /// Uncover left to right with a clip inset.
    WipeIn,
    /// Settle from an enlarged, blurred state.
    FocusIn { from_scale: f64, blur: f64 },
    /// Split-letter entrance: rise a full line height and straighten.
    RiseAndTurn { rotate: f64 },
    StrokeDraw { length: f64 },
    Parallax { axis: Axis, unit: ShiftUnit, from: f64, to: f64 },
}

impl MotionIntent {
    fn tracks(&self, env: &BuildEnv) -> Vec<(Property, f64, f64)> {
        match *self {
            MotionIntent::RevealFromBelow { distance } => {
                vec![(Property::Y, distance, 0.0), (Property::Opacity, 0.0, 1.0)]
            }
            MotionIntent::SlideFromLeft { distance } => {
                vec![(Property::X, -distance, 0.0), (Property::Opacity, 0.0, 1.0)]
            }
            MotionIntent::FadeIn => vec![(Property::Opacity, 0.0, 1.0)],
            MotionIntent::ScaleIn { from } => {
                vec![(Property::Scale, from, 1.0), (Property::Opacity, 0.0, 1.0)]
            }
            MotionIntent::FlipIn { tilt_deg, distance } => vec![
                (Property::RotateX, tilt_deg, 0.0),
                (Property::Y, distance, 0.0),
                (Property::Opacity, 0.0, 1.0),
            ],
            MotionIntent::DrawHorizontal => vec![(Property::ScaleX, 0.0, 1.0)],
            MotionIntent::GrowIn => {
                vec![(Property::ScaleX, 0.0, 1.0), (Property::Opacity, 0.0, 1.0)]
            }
            MotionIntent::WipeIn => vec![(Property::ClipRight, 100.0, 0.0)],
            MotionIntent::FocusIn { from_scale, blur } => {
                vec![(Property::Scale, from_scale, 1.0), (Property::Blur, blur, 0.0)]
            }
            MotionIntent::RiseAndTurn { rotate } => vec![
                (Property::YPercent, 100.0, 0.0),
                (Property::Rotate, rotate, 0.0),
                (Property::Opacity, 0.0, 1.0),
            ],
            MotionIntent::StrokeDraw { length } => {
                vec![(Property::StrokeDashOffset, length, 0.0)]
            }
            MotionIntent::Parallax { axis, unit, from, to } => {
                let property = match (axis, unit) {
                    (Axis::X, ShiftUnit::Percent) => Property::XPercent,
                    (Axis::Y, ShiftUnit::Percent) => Property::YPercent,
                    (Axis::X, _) => Property::X,
                    (Axis::Y, _) => Property::Y,
                };
                let scale = match unit {
                    ShiftUnit::ViewportFactor => env.viewport_height * 0.5,
                    _ => 1.0,
                };
                vec![(property, from * scale, to * scale)]
            }
        }
    }
}

/// An intent applied to one or more targets with a timing.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSpec {
    pub targets: Vec<ElementId>,
    pub intent: MotionIntent,
    pub timing: Timing,
}

impl MotionSpec {
    pub fn new(target: impl Into<ElementId>, intent: MotionIntent, timing: Timing) -> Self {
        Self {
            targets: vec![target.into()],
            intent,
            timing,
        }
    }

    /// Same intent on every target, staggered by `timing.stagger`.
    pub fn group(targets: Vec<ElementId>, intent: MotionIntent, timing: Timing) -> Self {
        Self { targets, intent, timing }
    }
}

/// Build one timeline from a list of specs.
pub fn build_timeline(specs: &[MotionSpec], env: &BuildEnv) -> Timeline {
    let mut tweens = Vec::new();
    for spec in specs {
        let tracks = spec.intent.tracks(env);
        for (index, target) in spec.targets.iter().enumerate() {
            let offset = spec.timing.offset + spec.timing.stagger * index as f64;
            for &(property, from, to) in &tracks {
                tweens.push(Tween {
                    target: target.clone(),
                    property,
                    from,
                    to,
                    duration: spec.timing.duration,
                    easing: spec.timing.easing,
                    offset,
                });
            }
        }
    }
    Timeline::new(tweens)
}

/// Pointer-driven effects. Their end values come from the latest sample, so
/// they are rebuilt (retargeted) rather than played once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerIntent {
    /// Rotate toward the pointer while it is over the element.
    Tilt { max_deg: f64 },
    /// Pull toward the pointer while it is over the element.
    Magnetic { strength: f64 },
    /// Track the pointer everywhere (custom cursor).
    Follow { duration: f64, easing: Easing },
    /// Show the target while the watched element is hovered.
    HoverReveal { rest_scale: f64 },
    /// Grow while the pointer is over any interactive element.
    InteractiveScale { scale: f64 },
    /// Rotate with the horizontal pointer position across the viewport.
    Sway { max_deg: f64 },
}

pub type Pose = Vec<(Property, f64)>;

impl PointerIntent {
    /// Whether the effect is engaged for this sample.
    pub fn engaged(&self, sample: &ViewportSample, watched: &ElementRect) -> bool {
        match self {
            PointerIntent::Follow { .. } | PointerIntent::Sway { .. } => true,
            PointerIntent::InteractiveScale { .. } => sample.pointer_over_interactive,
            _ => watched.contains(sample.pointer_x, sample.pointer_y),
        }
    }

    /// Target pose for the current pointer position.
    pub fn pose(&self, sample: &ViewportSample, watched: &ElementRect, engaged: bool) -> Pose {
        match *self {
            PointerIntent::Tilt { max_deg } => {
                if !engaged || watched.width <= 0.0 || watched.height <= 0.0 {
                    return vec![(Property::RotateY, 0.0), (Property::RotateX, 0.0)];
                }
                let x = (sample.pointer_x - watched.left) / watched.width - 0.5;
                let y = (sample.pointer_y - watched.top) / watched.height - 0.5;
                vec![(Property::RotateY, x * max_deg), (Property::RotateX, -y * max_deg)]
            }
            PointerIntent::Magnetic { strength } => {
                if !engaged {
                    return vec![(Property::X, 0.0), (Property::Y, 0.0)];
                }
                let (cx, cy) = watched.center();
                vec![
                    (Property::X, (sample.pointer_x - cx) * strength),
                    (Property::Y, (sample.pointer_y - cy) * strength),
                ]
            }
            PointerIntent::Follow { .. } => {
                vec![(Property::X, sample.pointer_x), (Property::Y, sample.pointer_y)]
            }
            PointerIntent::HoverReveal { rest_scale } => {
                if engaged {
                    vec![(Property::Opacity, 1.0), (Property::Scale, 1.0)]
                } else {
                    Self::hidden_pose(rest_scale)
                }
            }
            PointerIntent::InteractiveScale { scale } => {
                vec![(Property::Scale, if engaged { scale } else { 1.0 })]
            }
            PointerIntent::Sway { max_deg } => {
                let (x, _) = sample.normalized_pointer();
                vec![(Property::Rotate, x * max_deg)]
            }
        }
    }

    fn hidden_pose(rest_scale: f64) -> Pose {
        vec![(Property::Opacity, 0.0), (Property::Scale, rest_scale)]
    }

    /// Pose applied when the binding is installed, before any pointer input.
    pub fn initial_pose(&self) -> Option<Pose> {
        match *self {
            PointerIntent::HoverReveal { rest_scale } => Some(Self::hidden_pose(rest_scale)),
            _ => None,
        }
    }

    /// Timing of the move toward the pose; engaging and releasing may differ.
    pub fn timing(&self, engaged: bool) -> Timing {
        match *self {
            PointerIntent::Tilt { .. } => Timing::new(0.3, Easing::Power2Out),
            PointerIntent::Magnetic { .. } if engaged => Timing::new(0.2, Easing::Power2Out),
            PointerIntent::Magnetic { .. } => Timing::new(0.4, Easing::ELASTIC),
            PointerIntent::Follow { duration, easing } => Timing::new(duration, easing),
            PointerIntent::HoverReveal { .. } if engaged => Timing::new(0.4, Easing::ExpoOut),
            PointerIntent::HoverReveal { .. } => Timing::new(0.3, Easing::ExpoOut),
            PointerIntent::InteractiveScale { .. } => Timing::new(0.2, Easing::Power2Out),
            PointerIntent::Sway { .. } => Timing::new(0.3, Easing::Power2Out),
        }
    }
}

/// Timeline moving `target` from its current values to `pose`.
pub fn retarget(target: &ElementId, pose: &[(Property, f64)], current: &ElementStyle, timing: Timing) -> Timeline {
    Timeline::new(
        pose.iter()
            .map(|&(property, to)| Tween {
                target: target.clone(),
                property,
                from: current.get(property),
                to,
                duration: timing.duration,
                easing: timing.easing,
                offset: timing.offset,
            })
            .collect(),
    )
}
