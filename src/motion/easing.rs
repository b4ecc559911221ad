use std::f64::consts::PI;

use super::progress::Progress;

const BACK_OVERSHOOT: f64 = 1.7;

/// Easing curves used by the page. Each one exists in two forms: a CSS timing
/// function for transitions the browser drives, and a numeric curve for the
/// values we tween ourselves (counters, canvas rings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out.
    Power2Out,
    /// Cubic ease-in-out.
    Power2InOut,
    /// Overshoots slightly before settling.
    BackOut,
    SineInOut,
}

impl Ease {
    pub fn apply(self, t: Progress) -> f64 {
        let t = t.value();
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + BACK_OVERSHOOT * (t - 1.0).powi(2)
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
            Ease::BackOut => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
            Ease::SineInOut => "cubic-bezier(0.445, 0.05, 0.55, 0.95)",
        }
    }
}

/// Value between `from` and `to` at `t`, shaped by `ease`.
pub fn tween(from: f64, to: f64, t: Progress, ease: Ease) -> f64 {
    from + (to - from) * ease.apply(t)
}

/// Progress of item `index` in a staggered group driven by one shared clock.
/// `stagger` is the gap between item starts as a fraction of one item's run.
pub fn staggered(clock: Progress, index: usize, count: usize, stagger: f64) -> Progress {
    let total = 1.0 + stagger * count.saturating_sub(1) as f64;
    let start = stagger * index as f64;
    Progress::between(clock.value() * total, start, start + 1.0)
}

/// Length of the shared clock for a staggered group, in milliseconds.
pub const fn staggered_ms(item_ms: u32, stagger_ms: u32, count: usize) -> u32 {
    let gaps = if count == 0 { 0 } else { count as u32 - 1 };
    item_ms + stagger_ms * gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::BackOut,
        Ease::SineInOut,
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for ease in ALL {
            assert!(ease.apply(Progress::START).abs() < 1e-9, "{ease:?}");
            assert!((ease.apply(Progress::END) - 1.0).abs() < 1e-9, "{ease:?}");
        }
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        let t = Progress::new(0.3);
        assert!(Ease::Power2Out.apply(t) > Ease::Linear.apply(t));
        assert!(Ease::Power2InOut.apply(t) < Ease::Linear.apply(t));
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut.apply(Progress::new(f64::from(i) / 100.0)))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn tween_interpolates_between_bounds() {
        assert_eq!(tween(0.0, 80.0, Progress::END, Ease::Power2Out), 80.0);
        assert_eq!(tween(10.0, 20.0, Progress::new(0.5), Ease::Linear), 15.0);
    }

    #[test]
    fn staggered_items_start_in_turn() {
        let half = Progress::new(0.5);
        assert!(staggered(half, 0, 4, 0.2) > staggered(half, 3, 4, 0.2));
        assert_eq!(staggered(Progress::END, 3, 4, 0.2), Progress::END);
        assert_eq!(staggered(Progress::START, 0, 4, 0.2), Progress::START);
        assert_eq!(staggered_ms(2000, 200, 4), 2600);
        assert_eq!(staggered_ms(1500, 100, 0), 1500);
    }
}
