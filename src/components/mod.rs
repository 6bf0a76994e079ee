mod effects;
mod footer;
mod icon;
mod image;
mod join;
mod nav;
mod reveal;
mod sections;
mod testimonials;

pub use effects::{CardHover, GlowingStars, SparklesText, WavyBackground};
pub use footer::Footer;
pub use icon::Glyph;
pub use image::FallbackImage;
pub use join::JoinForm;
pub use nav::FloatingNav;
pub use reveal::{RevealOnScroll, SectionHeading};
pub use sections::{CapabilityGrid, Hashtags, ProjectGrid, Timeline};
pub use testimonials::TestimonialCarousel;
