//! Scroll-triggered entrance animations.
//!
//! A reveal plays forward once when its trigger boundary crosses the start
//! line on the way down and plays in reverse when the boundary is scrolled
//! back above that line. Repeated scroll events on the same side of the line
//! never restart the animation.

use super::easing::Ease;

/// Lines in the viewport, as fractions of its height measured from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// The element's top crossing this line starts the entrance.
    pub start: f64,
    /// The element's bottom rising above this line means it has been left.
    pub end: f64,
}

/// Where a trigger's element sits relative to the start and end lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Top edge still below the start line.
    Before,
    Active,
    /// Bottom edge already above the end line.
    After,
}

impl Trigger {
    pub const TOP_80: Trigger = Trigger {
        start: 0.80,
        end: 0.20,
    };
    pub const TOP_85: Trigger = Trigger {
        start: 0.85,
        end: 0.20,
    };

    pub fn zone(&self, element_top: f64, element_bottom: f64, viewport_height: f64) -> Zone {
        if element_top > viewport_height * self.start {
            Zone::Before
        } else if element_bottom < viewport_height * self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    Entering,
    Entered,
    Reversing,
}

impl RevealPhase {
    /// Whether the element is heading towards (or sitting in) its final frame.
    pub fn is_shown(self) -> bool {
        matches!(self, RevealPhase::Entering | RevealPhase::Entered)
    }
}

/// Per-element animation state.
///
/// Every direction change bumps `generation`; a settle request carrying an
/// older generation belongs to an animation that has since been superseded
/// and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    phase: RevealPhase,
    generation: u32,
}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_shown(&self) -> bool {
        self.phase.is_shown()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, RevealPhase::Entering | RevealPhase::Reversing)
    }

    /// Feeds the latest zone. Returns `true` when this starts a new animation.
    pub fn observe(&mut self, zone: Zone) -> bool {
        let past_start = zone != Zone::Before;
        let next = match (self.phase, past_start) {
            (RevealPhase::Idle | RevealPhase::Reversing, true) => RevealPhase::Entering,
            (RevealPhase::Entering | RevealPhase::Entered, false) => RevealPhase::Reversing,
            _ => return false,
        };
        self.phase = next;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Called when the animation started at `generation` has run its course.
    pub fn settle(&mut self, generation: u32) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = match self.phase {
            RevealPhase::Entering => RevealPhase::Entered,
            RevealPhase::Reversing => RevealPhase::Idle,
            _ => return false,
        };
        true
    }
}

/// Visual state of an element, relative to where it sits in the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub rotate_y: f64,
    pub blur: f64,
    pub opacity: f64,
}

impl Frame {
    /// The element in its natural place.
    pub const REST: Frame = Frame {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_y: 0.0,
        blur: 0.0,
        opacity: 1.0,
    };

    /// Invisible, otherwise at rest. The usual starting point of an entrance.
    pub const HIDDEN: Frame = Frame {
        opacity: 0.0,
        ..Frame::REST
    };

    pub const fn shifted(x: f64, y: f64) -> Frame {
        Frame {
            x,
            y,
            ..Frame::HIDDEN
        }
    }

    pub const fn scaled(self, scale: f64) -> Frame {
        Frame { scale, ..self }
    }

    pub const fn rotated(self, rotate: f64) -> Frame {
        Frame { rotate, ..self }
    }

    pub const fn turned(self, rotate_y: f64) -> Frame {
        Frame { rotate_y, ..self }
    }

    pub const fn blurred(self, blur: f64, opacity: f64) -> Frame {
        Frame {
            blur,
            opacity,
            ..self
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}) rotate({}deg) rotateY({}deg); filter: blur({}px); opacity: {};",
            self.x, self.y, self.scale, self.rotate, self.rotate_y, self.blur, self.opacity
        )
    }
}

/// Declarative description of one reveal: what the element looks like
/// before it enters and how it gets to rest.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealIntent {
    pub from: Frame,
    /// Seconds.
    pub duration: f64,
    /// Seconds before the first element starts.
    pub delay: f64,
    /// Seconds between consecutive elements of a group.
    pub stagger: f64,
    pub ease: Ease,
    pub trigger: Trigger,
    /// Odd and even items start tilted to opposite sides by `from.rotate`.
    pub alternate_rotation: bool,
}

impl RevealIntent {
    pub fn new(from: Frame) -> Self {
        Self {
            from,
            duration: 1.0,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::Power2Out,
            trigger: Trigger::TOP_80,
            alternate_rotation: false,
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn alternating(mut self) -> Self {
        self.alternate_rotation = true;
        self
    }

    pub fn from_frame(&self, index: usize) -> Frame {
        if self.alternate_rotation && index % 2 == 1 {
            self.from.rotated(-self.from.rotate)
        } else {
            self.from
        }
    }

    /// Start offset of item `index` out of `count`. Reversing runs the group
    /// backwards, so the last item leaves first.
    pub fn delay_for(&self, index: usize, count: usize, forward: bool) -> f64 {
        let slot = if forward {
            index
        } else {
            count.saturating_sub(1).saturating_sub(index)
        };
        let lead = if forward { self.delay } else { 0.0 };
        lead + self.stagger * slot as f64
    }

    /// Time until the whole group has settled, in milliseconds.
    pub fn total_ms(&self, count: usize, forward: bool) -> u32 {
        let lead = if forward { self.delay } else { 0.0 };
        let spread = self.stagger * count.saturating_sub(1) as f64;
        ((lead + spread + self.duration) * 1000.0).round().max(0.0) as u32
    }

    /// Inline style for item `index` of a `count`-item group in `state`.
    pub fn style(&self, index: usize, count: usize, state: RevealState) -> String {
        let shown = state.is_shown();
        let frame = if shown {
            Frame::REST
        } else {
            self.from_frame(index)
        };
        let delay = self.delay_for(index, count, shown);
        format!(
            "{} transition: transform {d}s {e} {delay}s, opacity {d}s {e} {delay}s, filter {d}s {e} {delay}s; will-change: transform, opacity;",
            frame.css(),
            d = self.duration,
            e = self.ease.css(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_uses_start_and_end_lines() {
        let t = Trigger::TOP_80;
        assert_eq!(t.zone(900.0, 1400.0, 1000.0), Zone::Before);
        assert_eq!(t.zone(800.0, 1400.0, 1000.0), Zone::Active);
        assert_eq!(t.zone(-900.0, 150.0, 1000.0), Zone::After);
    }

    #[test]
    fn entering_then_settling() {
        let mut s = RevealState::default();
        assert!(s.observe(Zone::Active));
        assert_eq!(s.phase(), RevealPhase::Entering);
        assert!(s.settle(s.generation()));
        assert_eq!(s.phase(), RevealPhase::Entered);
    }

    #[test]
    fn repeated_events_in_entered_zone_do_not_restart() {
        let mut s = RevealState::default();
        s.observe(Zone::Active);
        let generation = s.generation();
        for _ in 0..25 {
            assert!(!s.observe(Zone::Active));
            assert!(!s.observe(Zone::After));
        }
        assert_eq!(s.generation(), generation);
        s.settle(generation);
        assert!(!s.observe(Zone::Active));
        assert_eq!(s.phase(), RevealPhase::Entered);
    }

    #[test]
    fn scrolling_back_above_reverses_once() {
        let mut s = RevealState::default();
        s.observe(Zone::Active);
        s.settle(s.generation());
        assert!(s.observe(Zone::Before));
        assert_eq!(s.phase(), RevealPhase::Reversing);
        assert!(!s.observe(Zone::Before));
        s.settle(s.generation());
        assert_eq!(s.phase(), RevealPhase::Idle);
        assert!(!s.observe(Zone::Before));
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut s = RevealState::default();
        s.observe(Zone::Active);
        let entering = s.generation();
        s.observe(Zone::Before);
        assert!(!s.settle(entering));
        assert_eq!(s.phase(), RevealPhase::Reversing);
        assert!(s.settle(s.generation()));
        assert_eq!(s.phase(), RevealPhase::Idle);
    }

    #[test]
    fn direction_change_mid_animation() {
        let mut s = RevealState::default();
        s.observe(Zone::Active);
        s.observe(Zone::Before);
        assert!(s.observe(Zone::Active));
        assert_eq!(s.phase(), RevealPhase::Entering);
        assert!(s.is_shown());
    }

    #[test]
    fn stagger_runs_backwards_on_reverse() {
        let intent = RevealIntent::new(Frame::shifted(0.0, 50.0))
            .stagger(0.2)
            .delay(0.5);
        assert!((intent.delay_for(0, 3, true) - 0.5).abs() < 1e-9);
        assert!((intent.delay_for(2, 3, true) - 0.9).abs() < 1e-9);
        assert!((intent.delay_for(2, 3, false)).abs() < 1e-9);
        assert!((intent.delay_for(0, 3, false) - 0.4).abs() < 1e-9);
        assert_eq!(intent.total_ms(3, true), 1900);
        assert_eq!(intent.total_ms(3, false), 1400);
    }

    #[test]
    fn alternating_rotation_flips_odd_items() {
        let intent = RevealIntent::new(Frame::shifted(0.0, 50.0).rotated(-5.0)).alternating();
        assert_eq!(intent.from_frame(0).rotate, -5.0);
        assert_eq!(intent.from_frame(1).rotate, 5.0);
    }

    #[test]
    fn style_targets_rest_frame_once_shown() {
        let intent = RevealIntent::new(Frame::shifted(-100.0, 0.0));
        let mut s = RevealState::default();
        assert!(intent.style(0, 1, s).contains("translate(-100px, 0px)"));
        s.observe(Zone::Active);
        let shown = intent.style(0, 1, s);
        assert!(shown.contains("translate(0px, 0px)"));
        assert!(shown.contains("opacity: 1;"));
    }
}
