use leptos::prelude::*;

use crate::models::Section;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="gradient-text">"404 - Lost in Orbit"</h1>
            <p>"This page drifted out of range."</p>
            <a href=format!("/{}", Section::Home.href()) class="btn btn-outline">"Back to base"</a>
        </div>
    }
}
