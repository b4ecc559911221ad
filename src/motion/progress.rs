/// Normalised progress through a bounded scroll region, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamps `value` into `[0, 1]`. NaN is treated as the start of the region.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// How far `position` has travelled from `start` towards `end`.
    ///
    /// An empty or inverted region has no interior: anything at or past `end`
    /// is finished, anything before it has not started.
    pub fn between(position: f64, start: f64, end: f64) -> Self {
        let span = end - start;
        if span <= 0.0 || !span.is_finite() {
            return if position >= end { Self::END } else { Self::START };
        }
        Self::new((position - start) / span)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Progress::new(-0.2), Progress::START);
        assert_eq!(Progress::new(1.4), Progress::END);
        assert_eq!(Progress::new(0.25).value(), 0.25);
        assert_eq!(Progress::new(f64::NAN), Progress::START);
    }

    #[test]
    fn measures_position_inside_region() {
        assert_eq!(Progress::between(150.0, 100.0, 300.0).value(), 0.25);
        assert_eq!(Progress::between(50.0, 100.0, 300.0), Progress::START);
        assert_eq!(Progress::between(900.0, 100.0, 300.0), Progress::END);
    }

    #[test]
    fn empty_region_is_a_step() {
        assert_eq!(Progress::between(99.0, 100.0, 100.0), Progress::START);
        assert_eq!(Progress::between(100.0, 100.0, 100.0), Progress::END);
        assert_eq!(Progress::between(10.0, 100.0, 0.0), Progress::END);
    }
}
