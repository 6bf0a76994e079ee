use leptos::prelude::*;

use crate::components::{Glyph, RevealOnScroll};
use crate::content::{BRAND, PARTNERS, QUICK_LINKS, SOCIAL_LINKS};
use crate::motion::Entrance;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3 class="gradient-text">{BRAND}</h3>
                    <p>
                        "Where innovation takes flight across Bharat. Join us in shaping the future of "
                        "robotics and drone technology for a self-reliant India."
                    </p>
                    <div class="socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.href
                                    class=format!("social {}", link.hover_class)
                                    aria-label=link.label
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Glyph icon=link.icon/>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading violet">"Quick Links"</h4>
                    <ul class="footer-list">
                        {QUICK_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                let delay = i as f64 * 0.1;
                                view! {
                                    <li>
                                        <RevealOnScroll entrance=Entrance::Slide(-20.0) delay=delay class="footer-link">
                                            {*link}
                                        </RevealOnScroll>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer-heading blue">"Our Partners"</h4>
                    <ul class="footer-list muted">
                        {PARTNERS.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                    </ul>
                </div>
            </div>

            <RevealOnScroll entrance=Entrance::Fade delay=0.3 class="footer-bottom">
                <p>"\u{a9} 2024 AdAstra Robotics & Drone Club. Proudly Made in India \u{1f1ee}\u{1f1f3}"</p>
                <p class="small">"Empowering the next generation of Indian innovators"</p>
            </RevealOnScroll>
        </footer>
    }
}
