//! Timelines and their playback.
//!
//! A [`Timeline`] is an immutable set of tweens played as one unit. A
//! [`Player`] holds the playhead for one timeline and knows nothing about
//! triggers; the binder decides when to play, reverse or seek it.

use super::easing::Easing;
use super::property::{ElementId, Property, PropertyKey};

/// One property interpolation inside a timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: ElementId,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    /// Seconds.
    pub duration: f64,
    pub easing: Easing,
    /// Start time relative to the timeline start, in seconds.
    pub offset: f64,
}

impl Tween {
    pub fn key(&self) -> PropertyKey {
        PropertyKey::new(self.target.clone(), self.property)
    }

    pub fn end(&self) -> f64 {
        self.offset + self.duration
    }

    fn value_at(&self, time: f64) -> f64 {
        let progress = if self.duration <= 0.0 {
            if time >= self.offset {
                1.0
            } else {
                0.0
            }
        } else {
            ((time - self.offset) / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.easing.evaluate(progress)
    }
}

/// Ordered tweens played together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(mut tweens: Vec<Tween>) -> Self {
        // Stable sort keeps insertion order for tweens sharing an offset.
        tweens.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { tweens }
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    /// Every (element, property) pair this timeline drives, deduplicated.
    pub fn keys(&self) -> Vec<PropertyKey> {
        let mut keys: Vec<PropertyKey> = self.tweens.iter().map(Tween::key).collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// Property values at `time` seconds.
    ///
    /// Before its first tween starts a property holds that tween's start value;
    /// afterwards the latest started tween for the property wins.
    pub fn sample(&self, time: f64) -> Vec<(PropertyKey, f64)> {
        let mut values: Vec<(PropertyKey, f64)> = Vec::new();
        for tween in &self.tweens {
            let key = tween.key();
            let existing = values.iter().position(|(k, _)| *k == key);
            match existing {
                None => values.push((key, tween.value_at(time))),
                Some(index) if time >= tween.offset => values[index].1 = tween.value_at(time),
                Some(_) => {}
            }
        }
        values
    }

    /// Same tweens with zero duration and offset: everything jumps to its end.
    pub fn collapsed(&self) -> Self {
        Self {
            tweens: self
                .tweens
                .iter()
                .map(|tween| Tween {
                    duration: 0.0,
                    offset: 0.0,
                    ..tween.clone()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Playhead over one timeline.
#[derive(Debug, Clone)]
pub struct Player {
    timeline: Timeline,
    position: f64,
    direction: Direction,
    playing: bool,
    /// Scrub target position in seconds, with the smoothing time constant.
    scrub: Option<(f64, f64)>,
}

impl Player {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            position: 0.0,
            direction: Direction::Forward,
            playing: false,
            scrub: None,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Position as a fraction of the timeline duration.
    pub fn progress(&self) -> f64 {
        let duration = self.timeline.duration();
        if duration <= 0.0 {
            // A zero-length timeline always sits on its end state.
            1.0
        } else {
            (self.position / duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing || self.scrub.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Play forward from the current position.
    pub fn play(&mut self) {
        self.scrub = None;
        self.direction = Direction::Forward;
        self.playing = true;
    }

    /// Play backward from the current position.
    pub fn reverse(&mut self) {
        self.scrub = None;
        self.direction = Direction::Backward;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.scrub = None;
    }

    /// Jump directly to a fraction of the timeline, stopping playback.
    pub fn seek_progress(&mut self, progress: f64) {
        self.stop();
        self.position = self.position_for(progress);
    }

    /// Move the playhead toward `progress`. With `smoothing` of zero the move is
    /// immediate; otherwise the playhead closes the gap over roughly that many
    /// seconds as [`Player::advance`] is called.
    pub fn scrub_to(&mut self, progress: f64, smoothing: f64) {
        self.playing = false;
        let target = self.position_for(progress);
        if smoothing <= 0.0 {
            self.scrub = None;
            self.position = target;
        } else {
            self.scrub = Some((target, smoothing));
        }
    }

    fn position_for(&self, progress: f64) -> f64 {
        progress.clamp(0.0, 1.0) * self.timeline.duration()
    }

    /// Advance by `dt` seconds. Returns true if the position changed.
    pub fn advance(&mut self, dt: f64) -> bool {
        let before = self.position;
        let duration = self.timeline.duration();

        if let Some((target, smoothing)) = self.scrub {
            let factor = 1.0 - (-dt.max(0.0) / smoothing).exp();
            let next = self.position + (target - self.position) * factor;
            if (target - next).abs() < 1e-4 {
                self.position = target;
                self.scrub = None;
            } else {
                self.position = next;
            }
        } else if self.playing {
            match self.direction {
                Direction::Forward => {
                    self.position = (self.position + dt).min(duration);
                    if self.position >= duration {
                        self.playing = false;
                    }
                }
                Direction::Backward => {
                    self.position = (self.position - dt).max(0.0);
                    if self.position <= 0.0 {
                        self.playing = false;
                    }
                }
            }
        }

        // Zero-length timelines finish the moment they are played.
        if duration <= 0.0 && self.playing {
            self.playing = false;
        }

        (self.position - before).abs() > f64::EPSILON
    }

    pub fn sample(&self) -> Vec<(PropertyKey, f64)> {
        self.timeline.sample(self.position)
    }
}
