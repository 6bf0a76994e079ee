//! Image references resolved against the `public/` asset directory.

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Resolve an optional image reference, using the placeholder when it is
/// missing or empty.
pub fn image_or_placeholder(src: Option<&str>) -> &str {
    match src.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER_IMAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_uses_placeholder() {
        assert_eq!(image_or_placeholder(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_placeholder(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_placeholder(Some("   ")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn present_reference_is_kept() {
        assert_eq!(image_or_placeholder(Some("/team/arjun.jpg")), "/team/arjun.jpg");
    }
}
