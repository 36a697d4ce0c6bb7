//! Viewport tracking
//!
//! Scroll, pointer and resize events only record the latest values. A sample
//! is emitted from the frame callback, at most once per frame interval, and
//! only when something changed since the previous sample.

use serde::Deserialize;

/// Snapshot of the viewport taken at a frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSample {
    pub scroll_y: f64,
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Whether the pointer is over a link, button or form control.
    pub pointer_over_interactive: bool,
    /// Frame timestamp in milliseconds.
    pub timestamp: f64,
}

impl ViewportSample {
    /// Pointer position mapped to [-1, 1] on both axes, centre at 0.
    pub fn normalized_pointer(&self) -> (f64, f64) {
        let w = self.viewport_width.max(1.0);
        let h = self.viewport_height.max(1.0);
        (
            (self.pointer_x / w) * 2.0 - 1.0,
            (self.pointer_y / h) * 2.0 - 1.0,
        )
    }
}

impl Default for ViewportSample {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            pointer_x: 0.0,
            pointer_y: 0.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            pointer_over_interactive: false,
            timestamp: 0.0,
        }
    }
}

/// Bounding box of an element relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Frame-throttled viewport observer.
#[derive(Debug)]
pub struct ViewportTracker {
    latest: ViewportSample,
    frame_interval_ms: f64,
    subscribed: bool,
    dirty: bool,
    frame_requested: bool,
    last_emit: Option<f64>,
}

// Callbacks a hair early still count as the next frame.
const FRAME_JITTER_MS: f64 = 0.5;

impl ViewportTracker {
    pub fn new(frame_rate: f64) -> Self {
        Self {
            latest: ViewportSample::default(),
            frame_interval_ms: 1000.0 / frame_rate.max(1.0),
            subscribed: false,
            dirty: false,
            frame_requested: false,
            last_emit: None,
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Whether a frame callback is wanted.
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Start observing. Emission starts at the next frame boundary; the
    /// first sample always goes out so bindings see the initial layout.
    pub fn subscribe(&mut self) {
        self.subscribed = true;
        self.dirty = true;
        self.frame_requested = true;
        self.last_emit = None;
    }

    /// Stop observing and cancel any pending frame request.
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.dirty = false;
        self.frame_requested = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !self.subscribed {
            return;
        }
        self.latest.scroll_y = scroll_y;
        self.mark_dirty();
    }

    pub fn on_pointer(&mut self, x: f64, y: f64, over_interactive: bool) {
        if !self.subscribed {
            return;
        }
        self.latest.pointer_x = x;
        self.latest.pointer_y = y;
        self.latest.pointer_over_interactive = over_interactive;
        self.mark_dirty();
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        if !self.subscribed {
            return;
        }
        self.latest.viewport_width = width;
        self.latest.viewport_height = height;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.frame_requested = true;
    }

    /// Frame callback. Returns the sample to process, if one is due.
    pub fn on_frame(&mut self, timestamp: f64) -> Option<ViewportSample> {
        if !self.subscribed || !self.frame_requested {
            return None;
        }
        if let Some(last) = self.last_emit {
            if timestamp - last < self.frame_interval_ms - FRAME_JITTER_MS {
                // Too soon; keep the request alive for the next frame.
                return None;
            }
        }
        self.frame_requested = false;
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        self.last_emit = Some(timestamp);
        self.latest.timestamp = timestamp;
        Some(self.latest)
    }

    /// Most recent values, whether or not they have been emitted yet.
    pub fn latest(&self) -> &ViewportSample {
        &self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sample_before_first_frame() {
        let mut tracker = ViewportTracker::new(60.0);
        tracker.subscribe();
        tracker.on_scroll(120.0);
        assert!(tracker.frame_requested());
        let sample = tracker.on_frame(16.0).unwrap();
        assert_eq!(sample.scroll_y, 120.0);
        assert_eq!(sample.timestamp, 16.0);
    }

    #[test]
    fn test_events_before_subscribe_are_ignored() {
        let mut tracker = ViewportTracker::new(60.0);
        tracker.on_scroll(50.0);
        assert!(tracker.on_frame(16.0).is_none());
        assert_eq!(tracker.latest().scroll_y, 0.0);
    }

    #[test]
    fn test_intermediate_events_are_coalesced() {
        let mut tracker = ViewportTracker::new(60.0);
        tracker.subscribe();
        tracker.on_frame(0.0);
        for y in 1..=10 {
            tracker.on_scroll(y as f64 * 10.0);
        }
        tracker.on_pointer(5.0, 6.0, true);
        let sample = tracker.on_frame(16.7).unwrap();
        assert_eq!(sample.scroll_y, 100.0);
        assert_eq!((sample.pointer_x, sample.pointer_y), (5.0, 6.0));
        assert!(sample.pointer_over_interactive);
        assert!(tracker.on_frame(33.4).is_none());
    }

    #[test]
    fn test_unsubscribe_cancels_pending_frame() {
        let mut tracker = ViewportTracker::new(60.0);
        tracker.subscribe();
        tracker.on_scroll(10.0);
        tracker.unsubscribe();
        assert!(!tracker.frame_requested());
        assert!(tracker.on_frame(16.0).is_none());
    }

    #[test]
    fn test_duplicate_frame_callbacks_emit_once() {
        let mut tracker = ViewportTracker::new(60.0);
        tracker.subscribe();
        tracker.on_scroll(1.0);
        assert!(tracker.on_frame(100.0).is_some());
        tracker.on_scroll(2.0);
        assert!(tracker.on_frame(100.0).is_none());
        assert!(tracker.on_frame(105.0).is_none());
        // The pending change is delivered on the next eligible frame.
        assert_eq!(tracker.on_frame(116.7).map(|s| s.scroll_y), Some(2.0));
    }

    #[test]
    fn test_rate_never_exceeds_frame_rate() {
        let mut tracker = ViewportTracker::new(60.0);
        tracker.subscribe();
        let mut emitted = Vec::new();
        // Events every millisecond, frame callbacks at 240 Hz for one second.
        for ms in 0..1000 {
            let t = ms as f64;
            tracker.on_scroll(t);
            tracker.on_pointer(t, t, false);
            if ms % 4 == 0 {
                if let Some(sample) = tracker.on_frame(t) {
                    emitted.push(sample.timestamp);
                }
            }
        }
        assert!(emitted.len() <= 60, "emitted {}", emitted.len());
        assert!(emitted.len() >= 50);
        for pair in emitted.windows(2) {
            assert!(pair[1] - pair[0] >= tracker.frame_interval_ms() - FRAME_JITTER_MS);
        }
        for &start in &emitted {
            let in_window = emitted
                .iter()
                .filter(|&&t| t >= start && t < start + 1000.0)
                .count();
            assert!(in_window <= 60);
        }
    }

    #[test]
    fn test_normalized_pointer() {
        let sample = ViewportSample {
            pointer_x: 640.0,
            pointer_y: 0.0,
            ..ViewportSample::default()
        };
        assert_eq!(sample.normalized_pointer(), (0.0, -1.0));
    }

    #[test]
    fn test_rect_contains_and_center() {
        let rect = ElementRect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(20.0, 10.0));
        assert!(!rect.contains(130.0, 30.0));
        assert_eq!(rect.center(), (70.0, 35.0));
    }
}
