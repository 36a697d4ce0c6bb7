//! Scroll trigger bands and binding evaluation.
//!
//! A band is two edges. Each edge pairs a point on the element with a point
//! on the viewport; the edge is crossed when scrolling brings those points
//! together. Progress runs from 0 at the start edge to 1 at the end edge and
//! only depends on the scroll offset, so it is monotonic in it.

use std::str::FromStr;
use thiserror::Error;

use super::viewport::{ElementRect, ViewportSample};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandParseError {
    #[error("band edge is empty")]
    Empty,
    #[error("band edge `{0}` must have an element anchor and a viewport anchor")]
    MissingAnchor(String),
    #[error("unknown anchor `{0}`")]
    UnknownAnchor(String),
    #[error("invalid pixel offset `{0}`")]
    InvalidOffset(String),
}

/// One edge of a band: element fraction meets viewport fraction (+ px offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandEdge {
    /// 0 = element top, 1 = element bottom.
    pub element: f64,
    /// 0 = viewport top, 1 = viewport bottom.
    pub viewport: f64,
    /// Extra pixels added to the viewport point.
    pub offset_px: f64,
}

impl BandEdge {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport, offset_px: 0.0 }
    }

    /// Scroll offset at which this edge is crossed, given the element's
    /// document-space top and height.
    fn crossing(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element * element_height - (self.viewport * viewport_height + self.offset_px)
    }
}

fn parse_anchor(token: &str) -> Result<f64, BandParseError> {
    match token {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => token
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .map(|n| n / 100.0)
            .ok_or_else(|| BandParseError::UnknownAnchor(token.to_string())),
    }
}

impl FromStr for BandEdge {
    type Err = BandParseError;

    /// Parses `"<element> <viewport>"`, e.g. `"top 80%"` or `"top top-=100"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts.next().ok_or(BandParseError::Empty)?;
        let viewport = parts
            .next()
            .ok_or_else(|| BandParseError::MissingAnchor(s.to_string()))?;
        if parts.next().is_some() {
            return Err(BandParseError::MissingAnchor(s.to_string()));
        }

        let (viewport, offset_px) = match viewport.find(['+', '-']) {
            Some(index) if index > 0 => {
                let (anchor, offset) = viewport.split_at(index);
                let sign = if offset.starts_with('-') { -1.0 } else { 1.0 };
                let amount = offset[1..]
                    .strip_prefix('=')
                    .and_then(|n| n.parse::<f64>().ok())
                    .ok_or_else(|| BandParseError::InvalidOffset(offset.to_string()))?;
                (anchor, sign * amount)
            }
            _ => (viewport, 0.0),
        };

        Ok(Self {
            element: parse_anchor(element)?,
            viewport: parse_anchor(viewport)?,
            offset_px,
        })
    }
}

/// Start and end edges of a trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub start: BandEdge,
    pub end: BandEdge,
}

impl Band {
    pub fn new(start: BandEdge, end: BandEdge) -> Self {
        Self { start, end }
    }

    /// Parse both edges, e.g. `Band::parse("top 80%", "bottom 20%")`.
    pub fn parse(start: &str, end: &str) -> Result<Self, BandParseError> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Progress in [0, 1] for the element at `rect` (viewport-relative, taken
    /// in the same frame as `sample`).
    pub fn progress(&self, rect: &ElementRect, sample: &ViewportSample) -> f64 {
        let element_top = rect.top + sample.scroll_y;
        let vh = sample.viewport_height;
        let start = self.start.crossing(element_top, rect.height, vh);
        let end = self.end.crossing(element_top, rect.height, vh);
        let scroll = sample.scroll_y;
        if end <= start {
            return if scroll > start { 1.0 } else { 0.0 };
        }
        ((scroll - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// Whether the start edge has been scrolled past.
    pub fn is_active(&self, rect: &ElementRect, sample: &ViewportSample) -> bool {
        let element_top = rect.top + sample.scroll_y;
        sample.scroll_y > self.start.crossing(element_top, rect.height, sample.viewport_height)
    }
}

/// Replay policy of a binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerMode {
    /// Play forward on first enter, never reverse.
    PlayOnce,
    /// Play forward on enter, backward on exit.
    PlayReverseOnExit,
    /// Set the playhead from progress on every sample. `smoothing` is the
    /// catch-up time in seconds (0 = locked to scroll).
    Scrub { smoothing: f64 },
}

impl TriggerMode {
    pub fn is_continuous(&self) -> bool {
        matches!(self, TriggerMode::Scrub { .. })
    }
}

/// What a binding asks of its timeline after a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEvent {
    Enter,
    Exit,
    Scrub { progress: f64, smoothing: f64 },
}

/// Per-binding evaluation state.
#[derive(Debug, Clone)]
pub struct TriggerState {
    band: Band,
    mode: TriggerMode,
    active: bool,
    fired_once: bool,
    last_progress: Option<f64>,
}

impl TriggerState {
    pub fn new(band: Band, mode: TriggerMode) -> Self {
        Self {
            band,
            mode,
            active: false,
            fired_once: false,
            last_progress: None,
        }
    }

    pub fn band(&self) -> &Band {
        &self.band
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Evaluate against a new sample. Discrete modes return an event only on
    /// an edge; scrub returns one whenever progress moved.
    pub fn evaluate(&mut self, rect: &ElementRect, sample: &ViewportSample) -> Option<TriggerEvent> {
        match self.mode {
            TriggerMode::Scrub { smoothing } => {
                let progress = self.band.progress(rect, sample);
                let changed = self
                    .last_progress
                    .map_or(true, |last| (last - progress).abs() > f64::EPSILON);
                self.last_progress = Some(progress);
                self.active = progress > 0.0;
                changed.then_some(TriggerEvent::Scrub { progress, smoothing })
            }
            TriggerMode::PlayOnce | TriggerMode::PlayReverseOnExit => {
                let now_active = self.band.is_active(rect, sample);
                let was_active = std::mem::replace(&mut self.active, now_active);
                match (was_active, now_active) {
                    (false, true) => {
                        if self.mode == TriggerMode::PlayOnce && self.fired_once {
                            return None;
                        }
                        self.fired_once = true;
                        Some(TriggerEvent::Enter)
                    }
                    (true, false) if self.mode == TriggerMode::PlayReverseOnExit => Some(TriggerEvent::Exit),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scroll_y: f64) -> ViewportSample {
        ViewportSample {
            scroll_y,
            viewport_height: 1000.0,
            ..ViewportSample::default()
        }
    }

    /// Rect of an element at document offset `doc_top` seen at `scroll_y`.
    fn rect_at(doc_top: f64, height: f64, scroll_y: f64) -> ElementRect {
        ElementRect::new(doc_top - scroll_y, 0.0, 800.0, height)
    }

    #[test]
    fn test_parse_named_and_percent_anchors() {
        let edge: BandEdge = "top 80%".parse().unwrap();
        assert_eq!(edge, BandEdge::new(0.0, 0.8));
        let edge: BandEdge = "bottom top".parse().unwrap();
        assert_eq!(edge, BandEdge::new(1.0, 0.0));
        let edge: BandEdge = "center center".parse().unwrap();
        assert_eq!(edge, BandEdge::new(0.5, 0.5));
    }

    #[test]
    fn test_parse_pixel_offset() {
        let edge: BandEdge = "top top-=100".parse().unwrap();
        assert_eq!(edge.offset_px, -100.0);
        let edge: BandEdge = "top 50%+=20".parse().unwrap();
        assert_eq!((edge.viewport, edge.offset_px), (0.5, 20.0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<BandEdge>(), Err(BandParseError::Empty));
        assert!(matches!("top".parse::<BandEdge>(), Err(BandParseError::MissingAnchor(_))));
        assert!(matches!("middle top".parse::<BandEdge>(), Err(BandParseError::UnknownAnchor(_))));
        assert!(matches!("top top-100".parse::<BandEdge>(), Err(BandParseError::InvalidOffset(_))));
        assert!(matches!("top top bottom".parse::<BandEdge>(), Err(BandParseError::MissingAnchor(_))));
    }

    #[test]
    fn test_progress_endpoints_and_monotonicity() {
        // Element 2000px down, 600px tall; band "top bottom" -> "bottom top".
        let band = Band::parse("top bottom", "bottom top").unwrap();
        let start = 2000.0 - 1000.0;
        let end = 2000.0 + 600.0;
        assert_eq!(band.progress(&rect_at(2000.0, 600.0, start), &sample(start)), 0.0);
        assert_eq!(band.progress(&rect_at(2000.0, 600.0, end), &sample(end)), 1.0);

        let mut previous = -1.0;
        let mut offset = start - 300.0;
        while offset <= end + 300.0 {
            let p = band.progress(&rect_at(2000.0, 600.0, offset), &sample(offset));
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= previous, "progress fell at offset {}", offset);
            previous = p;
            offset += 7.0;
        }
    }

    #[test]
    fn test_degenerate_band_is_a_step() {
        let band = Band::new(BandEdge::new(0.0, 0.0), BandEdge::new(0.0, 0.0));
        assert_eq!(band.progress(&rect_at(500.0, 100.0, 400.0), &sample(400.0)), 0.0);
        assert_eq!(band.progress(&rect_at(500.0, 100.0, 600.0), &sample(600.0)), 1.0);
    }

    #[test]
    fn test_reverse_on_exit_edges() {
        let band = Band::parse("top 70%", "bottom 20%").unwrap();
        let mut state = TriggerState::new(band, TriggerMode::PlayReverseOnExit);
        // Start edge at scroll 1000 - 700 = 300.
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 0.0), &sample(0.0)), None);
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 350.0), &sample(350.0)), Some(TriggerEvent::Enter));
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 900.0), &sample(900.0)), None);
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 100.0), &sample(100.0)), Some(TriggerEvent::Exit));
        assert!(!state.is_active());
    }

    #[test]
    fn test_play_once_ignores_exit_and_reentry() {
        let band = Band::parse("top 70%", "bottom 20%").unwrap();
        let mut state = TriggerState::new(band, TriggerMode::PlayOnce);
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 400.0), &sample(400.0)), Some(TriggerEvent::Enter));
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 0.0), &sample(0.0)), None);
        assert_eq!(state.evaluate(&rect_at(1000.0, 400.0, 400.0), &sample(400.0)), None);
    }

    #[test]
    fn test_scrub_reports_only_changes() {
        let band = Band::parse("top top", "bottom top").unwrap();
        let mut state = TriggerState::new(band, TriggerMode::Scrub { smoothing: 0.5 });
        let first = state.evaluate(&rect_at(0.0, 1000.0, 250.0), &sample(250.0));
        assert_eq!(first, Some(TriggerEvent::Scrub { progress: 0.25, smoothing: 0.5 }));
        assert_eq!(state.evaluate(&rect_at(0.0, 1000.0, 250.0), &sample(250.0)), None);
    }
}
