use super::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn lerp(self, to: Rgb, progress: Progress) -> Rgb {
        Rgb(
            lerp_channel(self.0, to.0, progress),
            lerp_channel(self.1, to.1, progress),
            lerp_channel(self.2, to.2, progress),
        )
    }

    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// `round(start + (end - start) * p)` on a single colour channel.
pub fn lerp_channel(start: u8, end: u8, progress: Progress) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);
    (start + (end - start) * progress.value())
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Two-stop vertical gradient used for the sky backdrops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyGradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

pub const NIGHT: SkyGradient = SkyGradient {
    top: Rgb(15, 32, 72),
    bottom: Rgb(25, 42, 82),
};

pub const SUNRISE: SkyGradient = SkyGradient {
    top: Rgb(255, 179, 71),
    bottom: Rgb(255, 140, 0),
};

impl SkyGradient {
    pub fn lerp(self, to: SkyGradient, progress: Progress) -> SkyGradient {
        SkyGradient {
            top: self.top.lerp(to.top, progress),
            bottom: self.bottom.lerp(to.bottom, progress),
        }
    }

    pub fn reversed(self) -> SkyGradient {
        SkyGradient {
            top: self.bottom,
            bottom: self.top,
        }
    }

    pub fn css(self) -> String {
        format!(
            "linear-gradient(to bottom, {}, {})",
            self.top.css(),
            self.bottom.css()
        )
    }
}

/// Sky behind the hero: night fading into sunrise as the hero scrolls away.
pub fn hero_sky(progress: Progress) -> SkyGradient {
    NIGHT.lerp(SUNRISE, progress)
}

/// Sky at the top of the first chapter. The stops are flipped so the hero's
/// bottom colour continues straight into this section.
pub fn chapter_sky(progress: Progress) -> SkyGradient {
    hero_sky(progress).reversed()
}

/// Trailing edge of the first chapter, handing sunrise back to night.
pub fn dusk_sky(progress: Progress) -> SkyGradient {
    SUNRISE.reversed().lerp(NIGHT.reversed(), progress)
}

/// Position of the sun disc for a given hero progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPose {
    /// Vertical offset as a percentage of the disc's own height.
    pub offset_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl SunPose {
    pub fn at(progress: Progress) -> Self {
        let p = progress.value();
        Self {
            offset_y: 50.0 - p * 80.0,
            scale: 0.4 + p * 0.6,
            opacity: (p * 2.0).min(1.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate(-50%, {:.2}%) scale({:.3}); opacity: {:.3};",
            self.offset_y, self.scale, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_follows_rounded_linear_formula() {
        for start in [0u8, 15, 128, 255] {
            for end in [0u8, 71, 140, 255] {
                for step in 0..=20 {
                    let p = f64::from(step) / 20.0;
                    let expected =
                        (f64::from(start) + (f64::from(end) - f64::from(start)) * p).round();
                    assert_eq!(
                        f64::from(lerp_channel(start, end, Progress::new(p))),
                        expected,
                        "start={start} end={end} p={p}"
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(hero_sky(Progress::new(-0.2)), NIGHT);
        assert_eq!(hero_sky(Progress::new(1.4)), SUNRISE);
    }

    #[test]
    fn midpoint_rounds_to_integers() {
        let sky = hero_sky(Progress::new(0.5));
        assert_eq!(sky.top, Rgb(135, 106, 72));
        assert_eq!(sky.bottom, Rgb(140, 91, 41));
        assert_eq!(
            sky.css(),
            "linear-gradient(to bottom, rgb(135,106,72), rgb(140,91,41))"
        );
    }

    #[test]
    fn chapter_sky_continues_hero_gradient() {
        for step in 0..=10 {
            let p = Progress::new(f64::from(step) / 10.0);
            assert_eq!(chapter_sky(p).top, hero_sky(p).bottom);
            assert_eq!(chapter_sky(p).bottom, hero_sky(p).top);
        }
    }

    #[test]
    fn dusk_starts_where_sunrise_ends() {
        assert_eq!(dusk_sky(Progress::START), chapter_sky(Progress::END));
        assert_eq!(dusk_sky(Progress::END), NIGHT.reversed());
    }

    #[test]
    fn sun_rises_and_fades_in() {
        let hidden = SunPose::at(Progress::START);
        assert_eq!(hidden.offset_y, 50.0);
        assert_eq!(hidden.opacity, 0.0);

        let half = SunPose::at(Progress::new(0.5));
        assert_eq!(half.opacity, 1.0);
        assert!((half.scale - 0.7).abs() < 1e-9);

        let risen = SunPose::at(Progress::END);
        assert!((risen.offset_y + 30.0).abs() < 1e-9);
        assert_eq!(risen.scale, 1.0);
    }
}
