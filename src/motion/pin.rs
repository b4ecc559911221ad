use super::easing::{tween, Ease};
use super::progress::Progress;

/// Measured layout of a pinned two-pane section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinGeometry {
    pub container_height: f64,
    pub content_height: f64,
    /// Scroll spent on the width split before pinning starts. Zero when the
    /// panes have a fixed split.
    pub split_distance: f64,
}

/// Where the panes should be drawn for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinFrame {
    /// Width of the left pane, in percent of the container.
    pub left_width: f64,
    /// Vertical translation of the scrolling pane, in pixels (zero or negative).
    pub list_offset: f64,
    pub pinned: bool,
}

impl PinGeometry {
    pub const SPLIT_FROM: f64 = 100.0;
    pub const SPLIT_TO: f64 = 50.0;

    pub fn new(container_height: f64, content_height: f64) -> Self {
        Self {
            container_height,
            content_height,
            split_distance: 0.0,
        }
    }

    pub fn with_split(mut self, split_distance: f64) -> Self {
        self.split_distance = split_distance.max(0.0);
        self
    }

    /// How long the container stays pinned while the list scrolls through.
    /// Missing or inverted measurements mean there is nothing to scroll.
    pub fn pin_distance(&self) -> f64 {
        let distance = self.content_height - self.container_height;
        if distance.is_finite() && distance > 0.0 {
            distance
        } else {
            0.0
        }
    }

    /// Total scroll consumed by the section beyond its own height.
    pub fn scroll_length(&self) -> f64 {
        self.split_distance + self.pin_distance()
    }

    /// `scrolled` is how far the page has moved past the section's top edge.
    pub fn frame(&self, scrolled: f64) -> PinFrame {
        let left_width = if self.split_distance > 0.0 {
            let split = Progress::between(scrolled, 0.0, self.split_distance);
            tween(Self::SPLIT_FROM, Self::SPLIT_TO, split, Ease::Power2InOut)
        } else {
            Self::SPLIT_TO
        };

        let distance = self.pin_distance();
        let list_offset = if distance > 0.0 {
            let pin = Progress::between(scrolled - self.split_distance, 0.0, distance);
            -tween(0.0, distance, pin, Ease::Linear)
        } else {
            0.0
        };

        let length = self.scroll_length();
        PinFrame {
            left_width,
            list_offset,
            pinned: length > 0.0 && scrolled >= 0.0 && scrolled <= length,
        }
    }
}

/// Cached layout measurement, thrown away whenever the layout may have moved
/// (resize, late image load).
#[derive(Debug, Default)]
pub struct LayoutCache {
    geometry: Option<PinGeometry>,
}

impl LayoutCache {
    pub fn invalidate(&mut self) {
        self.geometry = None;
    }

    pub fn get_or_measure<F>(&mut self, measure: F) -> Option<PinGeometry>
    where
        F: FnOnce() -> Option<PinGeometry>,
    {
        if self.geometry.is_none() {
            self.geometry = measure();
        }
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_distance_is_overflow_of_content() {
        assert_eq!(PinGeometry::new(800.0, 2000.0).pin_distance(), 1200.0);
        assert_eq!(PinGeometry::new(800.0, 800.0).pin_distance(), 0.0);
        assert_eq!(PinGeometry::new(800.0, 300.0).pin_distance(), 0.0);
        assert_eq!(PinGeometry::new(0.0, 0.0).pin_distance(), 0.0);
        assert_eq!(PinGeometry::new(f64::NAN, 100.0).pin_distance(), 0.0);
    }

    #[test]
    fn list_follows_scroll_while_pinned() {
        let geometry = PinGeometry::new(800.0, 2000.0);
        assert_eq!(geometry.frame(0.0).list_offset, 0.0);
        assert_eq!(geometry.frame(600.0).list_offset, -600.0);
        assert_eq!(geometry.frame(1200.0).list_offset, -1200.0);
        assert_eq!(geometry.frame(5000.0).list_offset, -1200.0);
        assert!(geometry.frame(600.0).pinned);
        assert!(!geometry.frame(-10.0).pinned);
        assert!(!geometry.frame(1300.0).pinned);
    }

    #[test]
    fn short_content_never_pins() {
        let geometry = PinGeometry::new(800.0, 500.0);
        let frame = geometry.frame(400.0);
        assert_eq!(frame.list_offset, 0.0);
        assert!(!frame.pinned);
    }

    #[test]
    fn split_runs_before_pin() {
        let geometry = PinGeometry::new(800.0, 2000.0).with_split(400.0);
        assert_eq!(geometry.scroll_length(), 1600.0);

        let start = geometry.frame(0.0);
        assert_eq!(start.left_width, 100.0);
        assert_eq!(start.list_offset, 0.0);

        let split_done = geometry.frame(400.0);
        assert_eq!(split_done.left_width, 50.0);
        assert_eq!(split_done.list_offset, 0.0);

        let end = geometry.frame(1600.0);
        assert_eq!(end.left_width, 50.0);
        assert_eq!(end.list_offset, -1200.0);
    }

    #[test]
    fn cache_remeasures_after_invalidation() {
        let mut cache = LayoutCache::default();
        let first = cache.get_or_measure(|| Some(PinGeometry::new(800.0, 1000.0)));
        let cached = cache.get_or_measure(|| Some(PinGeometry::new(800.0, 9000.0)));
        assert_eq!(first, cached);

        cache.invalidate();
        let grown = cache.get_or_measure(|| Some(PinGeometry::new(800.0, 2400.0)));
        assert_eq!(grown.map(|g| g.pin_distance()), Some(1600.0));
    }

    #[test]
    fn failed_measurement_is_retried() {
        let mut cache = LayoutCache::default();
        assert_eq!(cache.get_or_measure(|| None), None);
        assert!(cache.get_or_measure(|| Some(PinGeometry::new(1.0, 2.0))).is_some());
    }
}
