mod content;
mod inquiry;

pub use content::*;
pub use inquiry::Inquiry;
