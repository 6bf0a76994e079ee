use leptos::prelude::*;

use crate::components::Glyph;
use crate::content::BRAND;
use crate::hooks::use_window_scroll;
use crate::models::{Icon, Section};
use crate::state::NavState;

#[component]
pub fn FloatingNav(nav: RwSignal<NavState>) -> impl IntoView {
    use_window_scroll(move |sample| nav.update(|n| n.on_scroll(sample.y)));

    let links = move |class: &'static str| {
        Section::all()
            .into_iter()
            .enumerate()
            .map(move |(i, section)| {
                view! {
                    <a
                        href=section.href()
                        class=class
                        style=format!("animation-delay: {:.1}s", i as f64 * 0.1)
                        on:click=move |_| nav.update(NavState::close_menu)
                    >
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || if nav.get().scrolled { "floating-nav scrolled" } else { "floating-nav" }>
            <div class="nav-row">
                <a href=Section::Home.href() class="nav-brand gradient-text">{BRAND}</a>

                <div class="nav-links">{links("nav-link")}</div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        let icon = if nav.get().menu_open { Icon::Close } else { Icon::Menu };
                        view! { <Glyph icon=icon/> }
                    }}
                </button>
            </div>

            <Show when=move || nav.get().menu_open>
                <div class="nav-mobile">{links("nav-mobile-link")}</div>
            </Show>
        </nav>
    }
}
