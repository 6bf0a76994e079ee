use leptos::prelude::*;

use crate::components::{CardHover, FallbackImage};
use crate::hooks::use_interval;
use crate::models::Testimonial;
use crate::state::{Rotator, ROTATION_PERIOD};

/// One testimonial at a time, advancing on a timer. The dots jump straight to
/// an entry without restarting the timer.
#[component]
pub fn TestimonialCarousel(
    items: &'static [Testimonial],
    rotator: RwSignal<Rotator>,
) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    use_interval(ROTATION_PERIOD, move || rotator.update(Rotator::advance));

    let current = move || rotator.get().active().and_then(|i| items.get(i));

    view! {
        <div class="carousel">
            {move || {
                current()
                    .map(|t| {
                        view! {
                            <CardHover>
                                <div class="card testimonial-card enter">
                                    <div class="testimonial-head">
                                        <FallbackImage src=t.avatar alt=t.name class="avatar"/>
                                        <div class="testimonial-who">
                                            <h4>{t.name}</h4>
                                            <p class="testimonial-role">{t.role}</p>
                                        </div>
                                    </div>
                                    <p class="testimonial-quote">"\u{201c}" {t.quote} "\u{201d}"</p>
                                </div>
                            </CardHover>
                        }
                    })
            }}

            <div class="carousel-dots">
                {(0..items.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || if rotator.get().is_active(i) { "dot active" } else { "dot" }
                                aria-label=format!("Show testimonial {}", i + 1)
                                on:click=move |_| {
                                    rotator.update(|r| {
                                        r.select(i);
                                    });
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;

    const NONE: &[Testimonial] = &[];

    #[test]
    fn empty_carousel_renders_nothing() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let rotator = RwSignal::new(Rotator::new(0));
            view! { <TestimonialCarousel items=NONE rotator=rotator/> }.to_html()
        });
        assert!(!html.contains("<div"), "{html}");
        assert!(!html.contains("<button"), "{html}");
    }

    #[test]
    fn one_dot_per_testimonial_with_the_first_active() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let rotator = RwSignal::new(Rotator::new(TESTIMONIALS.len()));
            view! { <TestimonialCarousel items=TESTIMONIALS rotator=rotator/> }.to_html()
        });
        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches("\"dot active\"").count(), 1);
        assert_eq!(html.matches("class=\"dot\"").count(), 2);
        assert!(html.contains(TESTIMONIALS[0].name));
        assert!(!html.contains(TESTIMONIALS[1].name));
    }
}
