use leptos::prelude::*;

use crate::components::{CardHover, FallbackImage, Glyph, RevealOnScroll};
use crate::models::{Achievement, Capability, Icon, Project, Side};
use crate::motion::Entrance;

/// Stagger between consecutive cards in a grid
const CARD_STAGGER_S: f64 = 0.2;

#[component]
pub fn CapabilityGrid(items: &'static [Capability]) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="grid grid-2">
            {items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let delay = i as f64 * CARD_STAGGER_S;
                    view! {
                        <RevealOnScroll delay=delay>
                            <CardHover>
                                <div class="card capability-card">
                                    <div class="capability-head">
                                        <div class=format!("icon-tile {}", item.gradient.class())>
                                            <Glyph icon=item.icon class="glyph-lg"/>
                                        </div>
                                        <h3>{item.title}</h3>
                                    </div>
                                    <p>{item.description}</p>
                                </div>
                            </CardHover>
                        </RevealOnScroll>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn ProjectGrid(items: &'static [Project]) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="grid grid-3">
            {items
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    let delay = i as f64 * CARD_STAGGER_S;
                    view! {
                        <RevealOnScroll delay=delay>
                            <CardHover>
                                <div class="card project-card">
                                    <div class="project-media">
                                        <FallbackImage src=project.image alt=project.title class="project-image"/>
                                        <div class="project-shade"></div>
                                        <span class="badge badge-win">{project.achievement}</span>
                                    </div>
                                    <div class="project-body">
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <div class="tags">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tech| view! { <span class="badge badge-outline">{*tech}</span> })
                                                .collect_view()}
                                        </div>
                                        <button type="button" class="btn btn-outline btn-block">
                                            <Glyph icon=Icon::Play class="btn-icon grow"/>
                                            "View Demo"
                                        </button>
                                    </div>
                                </div>
                            </CardHover>
                        </RevealOnScroll>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Milestones on a vertical spine, alternating sides
#[component]
pub fn Timeline(items: &'static [Achievement]) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="timeline">
            <div class="timeline-spine"></div>
            {items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let side = Side::for_index(i);
                    let entrance = match side {
                        Side::Left => Entrance::Slide(-100.0),
                        Side::Right => Entrance::Slide(100.0),
                    };
                    let delay = i as f64 * CARD_STAGGER_S;
                    view! {
                        <RevealOnScroll
                            entrance=entrance
                            delay=delay
                            class=format!("timeline-entry {}", side.class())
                        >
                            <div class="timeline-card">
                                <CardHover>
                                    <div class="card">
                                        <div class="timeline-meta">
                                            <span class=format!("badge {}", item.color.class())>{item.year}</span>
                                            <span class="timeline-icon">
                                                <Glyph icon=item.icon/>
                                            </span>
                                        </div>
                                        <h3>{item.title}</h3>
                                        <p>{item.description}</p>
                                    </div>
                                </CardHover>
                            </div>
                            <div class="timeline-node"></div>
                        </RevealOnScroll>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn Hashtags(tags: &'static [&'static str]) -> impl IntoView {
    if tags.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="hashtags">
            {tags
                .iter()
                .enumerate()
                .map(|(i, tag)| {
                    let delay = 0.5 + i as f64 * 0.1;
                    view! {
                        <RevealOnScroll entrance=Entrance::Rise(20.0) delay=delay class="hashtag">
                            {*tag}
                        </RevealOnScroll>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{ACHIEVEMENTS, CAPABILITIES, HASHTAGS, PROJECTS};

    const NO_CAPABILITIES: &[Capability] = &[];
    const NO_PROJECTS: &[Project] = &[];
    const NO_ACHIEVEMENTS: &[Achievement] = &[];
    const NO_TAGS: &[&str] = &[];

    fn render<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn empty_lists_render_no_markup() {
        for html in [
            render(|| view! { <CapabilityGrid items=NO_CAPABILITIES/> }),
            render(|| view! { <ProjectGrid items=NO_PROJECTS/> }),
            render(|| view! { <Timeline items=NO_ACHIEVEMENTS/> }),
            render(|| view! { <Hashtags tags=NO_TAGS/> }),
        ] {
            assert!(!html.contains("<div"), "{html}");
        }
    }

    #[test]
    fn grids_render_every_card() {
        let html = render(|| view! { <CapabilityGrid items=CAPABILITIES/> });
        assert_eq!(html.matches("capability-card").count(), CAPABILITIES.len());

        let html = render(|| view! { <ProjectGrid items=PROJECTS/> });
        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
        assert_eq!(html.matches("View Demo").count(), PROJECTS.len());
    }

    #[test]
    fn timeline_alternates_sides() {
        let html = render(|| view! { <Timeline items=ACHIEVEMENTS/> });
        assert_eq!(html.matches("timeline-entry left").count(), 2);
        assert_eq!(html.matches("timeline-entry right").count(), 2);
    }

    #[test]
    fn hashtags_render_in_order() {
        let html = render(|| view! { <Hashtags tags=HASHTAGS/> });
        let positions: Vec<usize> = HASHTAGS
            .iter()
            .map(|tag| html.find(tag).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
    }
}
