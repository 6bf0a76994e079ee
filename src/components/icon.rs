use leptos::prelude::*;

use crate::models::Icon;

fn paths(icon: Icon) -> &'static str {
    match icon {
        Icon::Rocket => concat!(
            r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/>"#,
            r#"<path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/>"#,
            r#"<path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/>"#,
            r#"<path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
        ),
        Icon::Brain => concat!(
            r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/>"#,
            r#"<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
            r#"<path d="M12 5v13"/>"#,
        ),
        Icon::Cog => concat!(
            r#"<circle cx="12" cy="12" r="3"/>"#,
            r#"<circle cx="12" cy="12" r="7"/>"#,
            r#"<path d="M12 2v3M12 19v3M2 12h3M19 12h3M4.93 4.93l2.12 2.12M16.95 16.95l2.12 2.12M4.93 19.07l2.12-2.12M16.95 7.05l2.12-2.12"/>"#,
        ),
        Icon::Users => concat!(
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="9" cy="7" r="4"/>"#,
            r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
            r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        ),
        Icon::Trophy => concat!(
            r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/>"#,
            r#"<path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/>"#,
            r#"<path d="M4 22h16"/>"#,
            r#"<path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/>"#,
            r#"<path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/>"#,
            r#"<path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
        ),
        Icon::Award => concat!(
            r#"<circle cx="12" cy="8" r="6"/>"#,
            r#"<path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
        ),
        Icon::Star => {
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
        }
        Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        Icon::Play => r#"<polygon points="5 3 19 12 5 21 5 3"/>"#,
        Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        Icon::Menu => concat!(
            r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
            r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
            r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
        ),
        Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        Icon::Instagram => concat!(
            r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
            r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
            r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
        ),
        Icon::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/>"#,
            r#"<circle cx="4" cy="4" r="2"/>"#,
        ),
        Icon::Github => concat!(
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
            r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        ),
    }
}

/// Inline SVG glyph in the current text colour
#[component]
pub fn Glyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=format!("glyph glyph-{} {class}", icon.name())
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=paths(icon)
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_markup() {
        for icon in Icon::all() {
            let markup = paths(icon);
            assert!(markup.starts_with('<') && markup.ends_with("/>"), "{icon:?}");
        }
    }
}
