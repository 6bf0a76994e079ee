use leptos::html;
use leptos::prelude::*;

use crate::hooks::use_reveal;
use crate::motion::{Entrance, Reveal};

/// Plays `entrance` the first time the block scrolls into view, then stays put
#[component]
pub fn RevealOnScroll(
    #[prop(default = Entrance::Rise(50.0))] entrance: Entrance,
    #[prop(default = 0.0)] delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = RwSignal::new(Reveal::Hidden);
    use_reveal(node, state);

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            style=move || entrance.style(state.get(), delay)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <RevealOnScroll class="section-heading">
            <h2 class=format!("section-title gradient-text {gradient}")>{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </RevealOnScroll>
    }
}
