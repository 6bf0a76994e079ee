//! Purely decorative wrappers: starfield, sparkles, hover glow, wave.

use leptos::prelude::*;

use crate::motion::decor::{scatter, ORBS, SPARKLES, STARS};

/// Twinkling point lights plus a few tinted glow orbs, filling the parent
#[component]
pub fn GlowingStars(#[prop(default = 0xADA5)] seed: u64) -> impl IntoView {
    let stars = scatter(&STARS, seed);
    let orbs = scatter(&ORBS, seed.wrapping_add(1));

    view! {
        <div class="starfield" aria-hidden="true">
            {stars
                .into_iter()
                .map(|p| view! { <div class="star" style=p.style()></div> })
                .collect_view()}
            {orbs
                .into_iter()
                .map(|p| view! { <div class="orb" style=p.style()></div> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SparklesText(
    #[prop(default = 8)] seed: u64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let sparkles = scatter(&SPARKLES, seed);

    view! {
        <span class=format!("sparkles {class}")>
            {children()}
            {sparkles
                .into_iter()
                .map(|p| view! { <span class="sparkle" style=p.style() aria-hidden="true"></span> })
                .collect_view()}
        </span>
    }
}

/// Lifts and glows its children on hover
#[component]
pub fn CardHover(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card-hover {class}")>
            <div class="card-hover-glow"></div>
            <div class="card-hover-body">{children()}</div>
        </div>
    }
}

const WAVE_PATH: &str = "M0,400 C300,200 600,600 1200,400 L1200,800 L0,800 Z";

/// Gradient wave drawn behind the section content.
///
/// `gradient_id` must be unique on the page.
#[component]
pub fn WavyBackground(gradient_id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="wavy">
            <svg class="wavy-svg" viewBox="0 0 1200 800" preserveAspectRatio="none" aria-hidden="true">
                <defs>
                    <linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#3b82f6" stop-opacity="0.1"/>
                        <stop offset="50%" stop-color="#8b5cf6" stop-opacity="0.2"/>
                        <stop offset="100%" stop-color="#ec4899" stop-opacity="0.1"/>
                    </linearGradient>
                </defs>
                <path class="wave-path" d=WAVE_PATH fill=format!("url(#{gradient_id})") pathLength="1"/>
            </svg>
            <div class="wavy-body">{children()}</div>
        </div>
    }
}
