/// Simulated loading progress shown before the page is revealed.
///
/// The loader only ever moves forward: `Filling` until the bar reaches 100,
/// `Holding` while the full bar is on screen, `Exiting` while the screen
/// slides away and `Done` once the page may mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Filling,
    Holding,
    Exiting,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loader {
    progress: f64,
    phase: LoaderPhase,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub const COMPLETE: f64 = 100.0;
    /// Largest increment a single tick may add, in percentage points.
    pub const MAX_STEP: f64 = 10.0;

    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: LoaderPhase::Filling,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn percent(&self) -> u32 {
        self.progress.round() as u32
    }

    /// Adds `step` percentage points. Returns `true` on the one tick that
    /// fills the bar; later ticks are ignored.
    pub fn tick(&mut self, step: f64) -> bool {
        if self.phase != LoaderPhase::Filling {
            return false;
        }
        let step = if step.is_finite() {
            step.clamp(0.0, Self::MAX_STEP)
        } else {
            0.0
        };
        self.progress = (self.progress + step).min(Self::COMPLETE);
        if self.progress >= Self::COMPLETE {
            self.phase = LoaderPhase::Holding;
            true
        } else {
            false
        }
    }

    pub fn begin_exit(&mut self) -> bool {
        self.advance(LoaderPhase::Holding, LoaderPhase::Exiting)
    }

    /// Marks the exit animation as finished. Returns `true` exactly once.
    pub fn finish(&mut self) -> bool {
        self.advance(LoaderPhase::Exiting, LoaderPhase::Done)
    }

    fn advance(&mut self, from: LoaderPhase, to: LoaderPhase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> &'static str {
        match self.progress {
            p if p < 20.0 => "🌾 Preparing the village fields...",
            p if p < 40.0 => "📚 Loading the learning journey...",
            p if p < 60.0 => "💻 Setting up coding animations...",
            p if p < 80.0 => "✈️ Preparing aviation experience...",
            p if p < Self::COMPLETE => "🌅 Almost ready for sunrise...",
            _ => "🎉 Welcome to my story!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_one_hundred() {
        let mut loader = Loader::new();
        for _ in 0..50 {
            loader.tick(9.7);
        }
        assert_eq!(loader.progress(), Loader::COMPLETE);
        assert_eq!(loader.percent(), 100);
    }

    #[test]
    fn completes_exactly_once_under_jittery_ticks() {
        let mut loader = Loader::new();
        let steps = [0.0, 7.3, 10.0, 2.5, 12.0, 9.99, -3.0, f64::NAN, 10.0];
        let mut fills = 0;
        for step in steps.iter().cycle().take(200) {
            if loader.tick(*step) {
                fills += 1;
            }
        }
        assert_eq!(fills, 1);
        assert_eq!(loader.phase(), LoaderPhase::Holding);

        assert!(loader.begin_exit());
        assert!(!loader.begin_exit());
        assert!(loader.finish());
        assert!(!loader.finish());
        assert_eq!(loader.phase(), LoaderPhase::Done);
    }

    #[test]
    fn oversized_steps_are_capped() {
        let mut loader = Loader::new();
        loader.tick(55.0);
        assert_eq!(loader.progress(), Loader::MAX_STEP);
    }

    #[test]
    fn exit_requires_a_full_bar() {
        let mut loader = Loader::new();
        loader.tick(5.0);
        assert!(!loader.begin_exit());
        assert!(!loader.finish());
        assert_eq!(loader.phase(), LoaderPhase::Filling);
    }

    #[test]
    fn message_tracks_progress_bands() {
        let mut loader = Loader::new();
        assert!(loader.message().contains("village"));
        loader.tick(10.0);
        loader.tick(10.0);
        assert!(loader.message().contains("learning"));
        while !loader.tick(10.0) {}
        assert!(loader.message().contains("Welcome"));
    }
}
