use std::time::Duration;

use leptos::prelude::*;

use crate::motion::Reveal;

/// Scroll offset past which the nav bar switches to its solid background
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long each testimonial stays up before the carousel moves on
pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Floating nav bar state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > NAV_SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called when any nav link is followed
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Cyclic cursor over a fixed-length list.
///
/// An empty list has no active entry and every operation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    len: usize,
    index: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

/// All mutable UI state for the landing page, owned by `HomePage` and handed
/// to the components that need it.
#[derive(Clone, Copy)]
pub struct PageState {
    pub nav: RwSignal<NavState>,
    pub scroll_progress: RwSignal<f64>,
    pub testimonial: RwSignal<Rotator>,
    pub hero: RwSignal<Reveal>,
}

impl PageState {
    pub fn new(testimonials: usize) -> Self {
        Self {
            nav: RwSignal::new(NavState::default()),
            scroll_progress: RwSignal::new(0.0),
            testimonial: RwSignal::new(Rotator::new(testimonials)),
            hero: RwSignal::new(Reveal::Hidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_len_times_returns_to_start() {
        for len in 1..=7 {
            let mut rotator = Rotator::new(len);
            rotator.select(len / 2);
            let start = rotator.active();
            for _ in 0..len {
                rotator.advance();
            }
            assert_eq!(rotator.active(), start, "len {len}");
        }
    }

    #[test]
    fn three_testimonials_wrap_around() {
        let mut rotator = Rotator::new(3);
        let mut seen = vec![rotator.active().unwrap()];
        for _ in 0..3 {
            rotator.advance();
            seen.push(rotator.active().unwrap());
        }
        assert_eq!(seen, [0, 1, 2, 0]);
    }

    #[test]
    fn select_overrides_automatic_position() {
        let mut rotator = Rotator::new(3);
        assert!(rotator.select(1));
        assert_eq!(rotator.active(), Some(1));

        rotator.advance();
        rotator.advance();
        assert!(rotator.select(2));
        assert_eq!(rotator.active(), Some(2));
        assert!(rotator.is_active(2));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut rotator = Rotator::new(3);
        rotator.advance();
        assert!(!rotator.select(3));
        assert_eq!(rotator.active(), Some(1));
    }

    #[test]
    fn empty_rotator_never_moves() {
        let mut rotator = Rotator::new(0);
        rotator.advance();
        assert!(!rotator.select(0));
        assert_eq!(rotator.active(), None);
        assert!(!rotator.is_active(0));
        assert_eq!(rotator, Rotator::new(0));
    }

    #[test]
    fn nav_turns_solid_past_threshold() {
        let mut nav = NavState::default();
        nav.on_scroll(NAV_SCROLL_THRESHOLD_PX);
        assert!(!nav.scrolled);
        nav.on_scroll(NAV_SCROLL_THRESHOLD_PX + 1.0);
        assert!(nav.scrolled);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn page_state_starts_at_rest() {
        let state = PageState::new(3);
        assert_eq!(state.nav.get_untracked(), NavState::default());
        assert_eq!(state.testimonial.get_untracked().active(), Some(0));
        assert_eq!(state.hero.get_untracked(), Reveal::Hidden);
        assert_eq!(state.scroll_progress.get_untracked(), 0.0);
    }
}
