use leptos::html;
use leptos::prelude::*;

use crate::components::{
    CapabilityGrid, FloatingNav, Footer, Glyph, GlowingStars, Hashtags, JoinForm, ProjectGrid,
    RevealOnScroll, SectionHeading, SparklesText, TestimonialCarousel, Timeline, WavyBackground,
};
use crate::content::{
    ACHIEVEMENTS, BRAND, CAPABILITIES, HASHTAGS, HERO_BLURB, PROJECTS, TAGLINE, TESTIMONIALS,
};
use crate::hooks::{use_reveal, use_window_scroll};
use crate::models::{Icon, Section};
use crate::motion::{hero_transform, Entrance};
use crate::state::PageState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = PageState::new(TESTIMONIALS.len());
    use_window_scroll(move |sample| state.scroll_progress.set(sample.progress));

    view! {
        <div class="landing">
            <FloatingNav nav=state.nav/>
            <Hero state=state/>
            <Vision/>

            <section id=Section::Projects.anchor() class="section">
                <WavyBackground gradient_id="wave-what-we-do">
                    <div class="container">
                        <SectionHeading
                            title="What We Do"
                            subtitle="Transforming ideas into reality through cutting-edge technology and Indian innovation"
                            gradient="grad-text-blue-purple"
                        />
                        <CapabilityGrid items=CAPABILITIES/>
                    </div>
                </WavyBackground>
            </section>

            <section class="section">
                <div class="container wide">
                    <SectionHeading
                        title="Featured Projects"
                        subtitle="Innovation that's making India proud on the global stage"
                        gradient="grad-text-magenta-blue"
                    />
                    <ProjectGrid items=PROJECTS/>
                </div>
            </section>

            <section id=Section::Achievements.anchor() class="section section-tinted">
                <div class="container">
                    <SectionHeading
                        title="Our Journey"
                        subtitle="Milestones that shaped India's robotics future"
                        gradient="grad-text-yellow-orange"
                    />
                    <Timeline items=ACHIEVEMENTS/>
                </div>
            </section>

            <section class="section">
                <div class="container narrow centered">
                    <SectionHeading
                        title="Voices of Innovation"
                        subtitle="Stories from the AdAstra family"
                        gradient="grad-text-blue-magenta"
                    />
                    <TestimonialCarousel items=TESTIMONIALS rotator=state.testimonial/>
                    <Hashtags tags=HASHTAGS/>
                </div>
            </section>

            <section id=Section::Join.anchor() class="section">
                <WavyBackground gradient_id="wave-join">
                    <div class="container narrow centered">
                        <RevealOnScroll>
                            <h2 class="section-title gradient-text grad-text-purple-blue">
                                <SparklesText seed=31>"Be the Future"</SparklesText>
                            </h2>
                            <p class="section-lead">
                                "Your journey to revolutionize Indian robotics starts here"
                            </p>
                            <JoinForm/>
                        </RevealOnScroll>
                    </div>
                </WavyBackground>
            </section>

            <Footer/>
        </div>
    }
}

/// Full-height intro. Drifts and fades with page scroll; its copy plays an
/// entrance once on first view.
#[component]
fn Hero(state: PageState) -> impl IntoView {
    let intro = NodeRef::<html::Div>::new();
    use_reveal(intro, state.hero);

    let parallax = move || hero_transform(state.scroll_progress.get()).style();
    let entrance = move || Entrance::Rise(100.0).style(state.hero.get(), 0.2);

    view! {
        <section id=Section::Home.anchor() class="hero">
            <GlowingStars/>

            <div class="hero-body" style=parallax>
                <div node_ref=intro class="hero-intro" style=entrance>
                    <h1 class="hero-title gradient-text shimmer">{BRAND}</h1>
                    <div class="hero-tagline fade-in" style="animation-delay: 0.8s">
                        <SparklesText seed=11>{TAGLINE}</SparklesText>
                    </div>
                    <p class="hero-blurb rise-in" style="animation-delay: 1.2s">{HERO_BLURB}</p>
                </div>

                <div class="pop-in" style="animation-delay: 1.5s">
                    <a href=Section::Join.href() class="btn btn-hero">
                        <span class="btn-shine"></span>
                        <span class="btn-label">
                            "Join the Movement"
                            <Glyph icon=Icon::ArrowRight class="btn-icon nudge"/>
                        </span>
                    </a>
                </div>
            </div>

            <div class="ring ring-a" aria-hidden="true"></div>
            <div class="ring ring-b" aria-hidden="true"></div>
            <div class="ring ring-c" aria-hidden="true"></div>
        </section>
    }
}

#[component]
fn Vision() -> impl IntoView {
    view! {
        <section id=Section::Vision.anchor() class="section">
            <div class="container centered">
                <RevealOnScroll>
                    <h2 class="section-title big">
                        <SparklesText seed=21 class="gradient-text grad-text-purple-blue">
                            "Our Vision"
                        </SparklesText>
                    </h2>
                    <RevealOnScroll entrance=Entrance::Fade delay=0.3>
                        <p class="vision-copy">
                            "To pioneer " <span class="hl-blue">"Innovation"</span>
                            " in robotics, achieve complete " <span class="hl-purple">"Autonomy"</span>
                            " in drone technology, and elevate Indian " <span class="hl-magenta">"Engineering"</span>
                            " to new heights through intelligent systems that serve humanity."
                        </p>
                    </RevealOnScroll>
                </RevealOnScroll>
            </div>
        </section>
    }
}
