use leptos::prelude::*;

use crate::assets::{image_or_placeholder, PLACEHOLDER_IMAGE};

/// `<img>` that swaps to the placeholder when its source is missing or
/// fails to load
#[component]
pub fn FallbackImage(
    src: Option<&'static str>,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (current, set_current) = signal(image_or_placeholder(src).to_string());

    let on_error = move |_| {
        if current.get_untracked() != PLACEHOLDER_IMAGE {
            set_current.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    view! { <img src=current alt=alt class=class on:error=on_error/> }
}
