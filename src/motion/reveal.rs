/// One-shot entrance state: once revealed, always revealed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        matches!(self, Reveal::Revealed)
    }

    /// Feed a visibility sample. Returns `true` only on the call that
    /// performs the Hidden -> Revealed transition.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && *self == Reveal::Hidden {
            *self = Reveal::Revealed;
            return true;
        }
        false
    }
}

/// Where a block starts before it animates to rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    /// Fade in while moving up by the given distance
    Rise(f64),
    /// Fade in while sliding horizontally; negative starts from the left
    Slide(f64),
    Fade,
    Pop,
}

impl Entrance {
    fn hidden_transform(&self) -> String {
        match self {
            Entrance::Rise(dy) => format!("translateY({dy}px)"),
            Entrance::Slide(dx) => format!("translateX({dx}px)"),
            Entrance::Fade => "none".to_string(),
            Entrance::Pop => "scale(0.8)".to_string(),
        }
    }

    /// Inline style for the element in the given state
    pub fn style(&self, state: Reveal, delay_s: f64) -> String {
        match state {
            Reveal::Hidden => format!(
                "opacity: 0; transform: {};",
                self.hidden_transform()
            ),
            Reveal::Revealed => format!(
                "opacity: 1; transform: none; transition-delay: {delay_s:.2}s;"
            ),
        }
    }
}

/// Portion of an element's height that must be on screen to count as seen
const VISIBLE_MARGIN_PX: f64 = 40.0;

/// Whether an element spanning `top..bottom` (viewport coordinates) is on
/// screen.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let margin = VISIBLE_MARGIN_PX.min((bottom - top).max(0.0));
    top + margin <= viewport_height && bottom - margin >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot() {
        let mut state = Reveal::Hidden;
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(true));
        assert!(!state.observe(false));
        assert!(state.is_revealed());
    }

    #[test]
    fn hidden_style_depends_on_entrance() {
        assert_eq!(
            Entrance::Rise(50.0).style(Reveal::Hidden, 0.0),
            "opacity: 0; transform: translateY(50px);"
        );
        assert!(Entrance::Slide(-100.0)
            .style(Reveal::Hidden, 0.0)
            .contains("translateX(-100px)"));
        assert!(Entrance::Pop.style(Reveal::Hidden, 0.0).contains("scale(0.8)"));
    }

    #[test]
    fn revealed_style_carries_stagger() {
        let style = Entrance::Fade.style(Reveal::Revealed, 0.4);
        assert!(style.starts_with("opacity: 1"));
        assert!(style.contains("transition-delay: 0.40s"));
    }

    #[test]
    fn viewport_checks() {
        assert!(in_viewport(100.0, 400.0, 800.0));
        assert!(!in_viewport(900.0, 1200.0, 800.0));
        assert!(!in_viewport(-500.0, -10.0, 800.0));
        // peeking in by less than the margin does not count
        assert!(!in_viewport(780.0, 1100.0, 800.0));
        assert!(!in_viewport(0.0, 100.0, 0.0));
    }
}
