//! Pure animation math shared by the server render and the browser.

pub mod decor;
mod parallax;
mod reveal;

pub use parallax::{hero_transform, scroll_progress, HeroTransform, Ramp};
pub use reveal::{in_viewport, Entrance, Reveal};
