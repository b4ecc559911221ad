/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section, in declared order, whose bounds contain `probe`.
pub fn locate<'a, I>(probe: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Option<SectionBounds>)>,
{
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.map_or(false, |b| b.contains(probe)))
        .map(|(id, _)| id)
}

/// Active section and scroll-to-top visibility for the side navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    active: &'static str,
    show_scroll_top: bool,
    probe_offset: f64,
    scroll_top_threshold: f64,
}

impl ScrollTracker {
    /// Starts on `first`, the first declared section.
    pub fn new(first: &'static str, probe_offset: f64, scroll_top_threshold: f64) -> Self {
        Self {
            active: first,
            show_scroll_top: false,
            probe_offset,
            scroll_top_threshold,
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    /// Re-evaluates against freshly measured sections. When nothing contains
    /// the probe point the previous section stays active.
    pub fn observe<I>(&mut self, scroll_y: f64, sections: I)
    where
        I: IntoIterator<Item = (&'static str, Option<SectionBounds>)>,
    {
        self.show_scroll_top = scroll_y > self.scroll_top_threshold;
        if let Some(id) = locate(scroll_y + self.probe_offset, sections) {
            self.active = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, height: f64) -> Option<SectionBounds> {
        Some(SectionBounds { top, height })
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new("hero", 100.0, 300.0)
    }

    #[test]
    fn first_declared_section_wins_on_overlap() {
        let sections = [
            ("chapter-1", bounds(0.0, 1000.0)),
            ("chapter-2", bounds(500.0, 1000.0)),
        ];
        assert_eq!(locate(700.0, sections), Some("chapter-1"));
    }

    #[test]
    fn bounds_are_half_open() {
        let b = SectionBounds {
            top: 100.0,
            height: 50.0,
        };
        assert!(b.contains(100.0));
        assert!(b.contains(149.9));
        assert!(!b.contains(150.0));
    }

    #[test]
    fn probe_includes_fixed_offset() {
        let mut t = tracker();
        t.observe(
            850.0,
            [("hero", bounds(0.0, 900.0)), ("chapter-1", bounds(900.0, 900.0))],
        );
        assert_eq!(t.active(), "chapter-1");
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let mut t = tracker();
        t.observe(0.0, [("hero", None), ("chapter-1", bounds(0.0, 500.0))]);
        assert_eq!(t.active(), "chapter-1");
    }

    #[test]
    fn keeps_previous_section_when_nothing_matches() {
        let mut t = tracker();
        assert_eq!(t.active(), "hero");
        t.observe(5000.0, [("hero", bounds(0.0, 900.0))]);
        assert_eq!(t.active(), "hero");
    }

    #[test]
    fn scroll_top_button_appears_past_threshold() {
        let mut t = tracker();
        t.observe(300.0, std::iter::empty());
        assert!(!t.show_scroll_top());
        t.observe(301.0, std::iter::empty());
        assert!(t.show_scroll_top());
    }
}
