/// Clamped linear map from an input span to an output span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Ramp {
    pub const fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    pub fn at(&self, input: f64) -> f64 {
        let (lo, hi) = self.from;
        let (start, end) = self.to;
        if hi <= lo {
            return if input < lo { start } else { end };
        }
        let t = ((input - lo) / (hi - lo)).clamp(0.0, 1.0);
        start + (end - start) * t
    }
}

/// Hero block drifts up 100 units over the whole page
pub const HERO_OFFSET: Ramp = Ramp::new((0.0, 1.0), (0.0, -100.0));
/// and is fully faded by the first 30% of the scroll
pub const HERO_FADE: Ramp = Ramp::new((0.0, 0.3), (1.0, 0.0));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub offset_y: f64,
    pub opacity: f64,
}

impl HeroTransform {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}px); opacity: {:.3};",
            self.offset_y, self.opacity
        )
    }
}

pub fn hero_transform(progress: f64) -> HeroTransform {
    let progress = if progress.is_finite() { progress } else { 0.0 };
    HeroTransform {
        offset_y: HERO_OFFSET.at(progress),
        opacity: HERO_FADE.at(progress),
    }
}

/// Fraction of the document scrolled, 0.0 at the top and 1.0 at the bottom
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range.is_nan() || range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn top_of_page_is_fully_visible() {
        let t = hero_transform(0.0);
        assert!(close(t.offset_y, 0.0));
        assert!(close(t.opacity, 1.0));
    }

    #[test]
    fn fade_completes_at_thirty_percent() {
        assert!(close(hero_transform(0.15).opacity, 0.5));
        for p in [0.3, 0.31, 0.5, 0.99, 1.0] {
            assert!(close(hero_transform(p).opacity, 0.0), "progress {p}");
        }
    }

    #[test]
    fn offset_spans_the_whole_page() {
        assert!(close(hero_transform(0.5).offset_y, -50.0));
        assert!(close(hero_transform(1.0).offset_y, -100.0));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(hero_transform(-0.5), hero_transform(0.0));
        assert_eq!(hero_transform(2.0), hero_transform(1.0));
        assert_eq!(hero_transform(f64::NAN), hero_transform(0.0));
    }

    #[test]
    fn scroll_progress_guards_short_documents() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(120.0, 600.0, 800.0), 0.0);
        assert!(close(scroll_progress(500.0, 1800.0, 800.0), 0.5));
        assert_eq!(scroll_progress(5000.0, 1800.0, 800.0), 1.0);
        assert_eq!(scroll_progress(100.0, f64::NAN, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 1800.0, 800.0), 0.0);
    }

    #[test]
    fn style_carries_both_properties() {
        let style = hero_transform(1.0).style();
        assert!(style.contains("translateY(-100.00px)"));
        assert!(style.contains("opacity: 0.000"));
    }
}
