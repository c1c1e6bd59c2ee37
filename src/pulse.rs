// Frame-driven values for the avatar glow and the skill dials

pub const GLOW_STEP: f64 = 0.02;
pub const GLOW_SCALE: f64 = 0.04;
pub const GLOW_BLUR: f64 = 20.0;
pub const GLOW_BLUR_SWING: f64 = 6.0;

pub const SKILL_THRESHOLD: f64 = 0.4;

// Breathing glow behind the hexagon avatar
#[derive(Copy, Clone, Debug, Default)]
pub struct GlowPulse {
    phase: f64,
}

impl GlowPulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advances one frame and returns `(scale, blur_px)`.
    pub fn advance(&mut self) -> (f64, f64) {
        self.phase += GLOW_STEP;
        let wave = self.phase.sin();
        (1.0 + wave * GLOW_SCALE, GLOW_BLUR + wave * GLOW_BLUR_SWING)
    }

    pub fn transform(scale: f64) -> String {
        format!("scale({})", scale)
    }

    pub fn filter(blur: f64) -> String {
        format!("blur({}px)", blur)
    }
}

// Circular progress dial counting up to a skill's percentage, one step per frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkillDial {
    target: u32,
    progress: u32,
}

impl SkillDial {
    pub fn new(percent: u32) -> Self {
        SkillDial {
            target: percent.min(100),
            progress: 0,
        }
    }

    /// Reads a `data-percent` attribute value. Only the leading digits count,
    /// so `"85%"` is 85 and `"72.5"` is 72.
    pub fn parse(percent: &str) -> Option<Self> {
        let digits: String = percent
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return None;
        }
        // anything too long for u64 is far past 100 anyway
        let value = digits.parse::<u64>().unwrap_or(u64::MAX);
        Some(SkillDial::new(value.min(100) as u32))
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_done(&self) -> bool {
        self.progress >= self.target
    }

    /// Moves one percent forward. Always moves at least once, like the page
    /// shows `1%` even for a zero skill.
    pub fn advance(&mut self) -> u32 {
        self.progress += 1;
        self.progress
    }

    pub fn degrees(&self) -> f64 {
        self.progress as f64 / 100.0 * 360.0
    }

    pub fn background(&self) -> String {
        let deg = self.degrees();
        format!(
            "conic-gradient(var(--cyan-glow) {}deg, rgba(255,255,255,0.1) {}deg)",
            deg, deg
        )
    }

    pub fn label(&self) -> String {
        format!("{}%", self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_starts_near_rest_and_swings_both_ways() {
        let mut pulse = GlowPulse::new();
        let (scale, blur) = pulse.advance();
        assert!((scale - (1.0 + 0.02f64.sin() * 0.04)).abs() < 1e-12);
        assert!((blur - (20.0 + 0.02f64.sin() * 6.0)).abs() < 1e-12);

        let mut min_scale = f64::MAX;
        let mut max_scale = f64::MIN;
        for _ in 0..400 {
            let (scale, blur) = pulse.advance();
            min_scale = min_scale.min(scale);
            max_scale = max_scale.max(scale);
            assert!(blur >= 14.0 && blur <= 26.0);
        }
        assert!(max_scale > 1.039 && min_scale < 0.961);
        assert!((pulse.phase() - 401.0 * GLOW_STEP).abs() < 1e-9);
    }

    #[test]
    fn glow_css() {
        assert_eq!(GlowPulse::transform(1.04), "scale(1.04)");
        assert_eq!(GlowPulse::filter(26.0), "blur(26px)");
    }

    #[test]
    fn dial_counts_to_target() {
        let mut dial = SkillDial::parse("3").unwrap();
        let mut labels = Vec::new();
        while {
            dial.advance();
            labels.push(dial.label());
            !dial.is_done()
        } {}
        assert_eq!(labels, vec!["1%", "2%", "3%"]);
    }

    #[test]
    fn dial_background_uses_degrees() {
        let mut dial = SkillDial::new(90);
        for _ in 0..50 {
            dial.advance();
        }
        assert_eq!(dial.degrees(), 180.0);
        assert_eq!(
            dial.background(),
            "conic-gradient(var(--cyan-glow) 180deg, rgba(255,255,255,0.1) 180deg)"
        );
    }

    #[test]
    fn dial_parsing() {
        assert_eq!(SkillDial::parse(" 85 ").map(|d| d.target()), Some(85));
        assert_eq!(SkillDial::parse("250").map(|d| d.target()), Some(100));
        assert_eq!(SkillDial::parse("lots"), None);
        assert_eq!(SkillDial::parse(""), None);
    }

    #[test]
    fn dial_parsing_reads_leading_digits() {
        assert_eq!(SkillDial::parse("85%").map(|d| d.target()), Some(85));
        assert_eq!(SkillDial::parse("72.5").map(|d| d.target()), Some(72));
        assert_eq!(SkillDial::parse("  40 percent").map(|d| d.target()), Some(40));
        assert_eq!(
            SkillDial::parse("123456789012345678901234567890").map(|d| d.target()),
            Some(100)
        );
        assert_eq!(SkillDial::parse("%85"), None);
        assert_eq!(SkillDial::parse("-5"), None);
    }

    #[test]
    fn zero_dial_still_ticks_once() {
        let mut dial = SkillDial::new(0);
        assert!(dial.is_done());
        assert_eq!(dial.advance(), 1);
    }
}
