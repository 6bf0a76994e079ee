//! Layout for the decorative particle fields.
//!
//! Positions and timings are drawn once from a seeded RNG, so the server
//! render and the hydrated page agree and re-renders never reshuffle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Violet,
    Pink,
}

impl Tint {
    const ALL: [Tint; 3] = [Tint::Blue, Tint::Violet, Tint::Pink];

    pub fn hex(&self) -> &'static str {
        match self {
            Tint::Blue => "#3b82f6",
            Tint::Violet => "#8b5cf6",
            Tint::Pink => "#ec4899",
        }
    }
}

/// How animation duration and start delay are chosen per particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    /// Uniform draws from `[min, max)` seconds
    Random {
        duration: (f64, f64),
        delay: (f64, f64),
    },
    /// Fixed duration, delay grows by `step` per particle
    Staggered { duration: f64, step: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub count: usize,
    pub timing: Timing,
    pub tinted: bool,
}

pub const STARS: FieldSpec = FieldSpec {
    count: 100,
    timing: Timing::Random {
        duration: (2.0, 5.0),
        delay: (0.0, 2.0),
    },
    tinted: false,
};

pub const ORBS: FieldSpec = FieldSpec {
    count: 20,
    timing: Timing::Random {
        duration: (3.0, 7.0),
        delay: (0.0, 2.0),
    },
    tinted: true,
};

pub const SPARKLES: FieldSpec = FieldSpec {
    count: 8,
    timing: Timing::Staggered {
        duration: 2.0,
        step: 0.2,
    },
    tinted: false,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub tint: Option<Tint>,
}

impl Particle {
    pub fn style(&self) -> String {
        let mut style = format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        );
        if let Some(tint) = self.tint {
            style.push_str(&format!(
                " background: radial-gradient(circle, {}, transparent);",
                tint.hex()
            ));
        }
        style
    }
}

fn draw(rng: &mut StdRng, (min, max): (f64, f64)) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Lay out a field. The same `seed` always yields the same particles.
pub fn scatter(spec: &FieldSpec, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..spec.count)
        .map(|i| {
            let left_pct = rng.gen_range(0.0..100.0);
            let top_pct = rng.gen_range(0.0..100.0);
            let (duration_s, delay_s) = match spec.timing {
                Timing::Random { duration, delay } => {
                    (draw(&mut rng, duration), draw(&mut rng, delay))
                }
                Timing::Staggered { duration, step } => (duration, i as f64 * step),
            };
            let tint = spec
                .tinted
                .then(|| Tint::ALL[rng.gen_range(0..Tint::ALL.len())]);
            Particle {
                left_pct,
                top_pct,
                duration_s,
                delay_s,
                tint,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_field() {
        assert_eq!(scatter(&STARS, 1).len(), 100);
        assert_eq!(scatter(&ORBS, 1).len(), 20);
        assert_eq!(scatter(&SPARKLES, 1).len(), 8);
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(scatter(&STARS, 42), scatter(&STARS, 42));
        assert_ne!(scatter(&STARS, 42), scatter(&STARS, 43));
    }

    #[test]
    fn values_stay_in_range() {
        for p in scatter(&STARS, 7) {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((2.0..5.0).contains(&p.duration_s));
            assert!((0.0..2.0).contains(&p.delay_s));
            assert!(p.tint.is_none());
        }
    }

    #[test]
    fn orbs_are_tinted() {
        assert!(scatter(&ORBS, 3).iter().all(|p| p.tint.is_some()));
    }

    #[test]
    fn sparkles_are_staggered() {
        let delays: Vec<f64> = scatter(&SPARKLES, 9).iter().map(|p| p.delay_s).collect();
        for (i, d) in delays.iter().enumerate() {
            assert!((d - i as f64 * 0.2).abs() < 1e-9);
        }
        assert!(scatter(&SPARKLES, 9).iter().all(|p| p.duration_s == 2.0));
    }

    #[test]
    fn empty_field_is_fine() {
        let spec = FieldSpec { count: 0, ..STARS };
        assert!(scatter(&spec, 0).is_empty());
    }

    #[test]
    fn tinted_style_adds_gradient() {
        let orb = Particle {
            left_pct: 10.0,
            top_pct: 20.0,
            duration_s: 3.0,
            delay_s: 0.5,
            tint: Some(Tint::Pink),
        };
        let style = orb.style();
        assert!(style.starts_with("left: 10.00%; top: 20.00%;"));
        assert!(style.contains("#ec4899"));
    }
}
