//! Scroll and pointer driven animation.
//!
//! Leaf modules are pure and testable without a renderer: [`viewport`] turns
//! raw events into frame-rate samples, [`trigger`] maps samples to band
//! progress, [`intent`] builds timelines and [`context`] plays them. The
//! [`engine`] ties those together for the whole page.

pub mod context;
pub mod easing;
pub mod engine;
pub mod intent;
pub mod property;
pub mod timeline;
pub mod trigger;
pub mod viewport;

pub use context::{ContextPlan, Geometry, PointerPlan, ScrollPlan};
pub use easing::Easing;
pub use engine::{ContextId, MotionEngine};
pub use intent::{Axis, MotionIntent, MotionSpec, PointerIntent, ShiftUnit, Timing};
pub use property::{ElementId, StyleWrite};
pub use trigger::{Band, TriggerMode};
pub use viewport::ElementRect;
