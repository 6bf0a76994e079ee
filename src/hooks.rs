//! Browser listeners and timers scoped to the owning component.
//!
//! Everything here touches `window`, so it only does work in the hydrated
//! client. During server rendering the hooks are inert.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use crate::motion::Reveal;
#[cfg(feature = "hydrate")]
use crate::motion::{in_viewport, scroll_progress};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Vertical scroll offset in CSS pixels
    pub y: f64,
    /// 0.0 at the top of the document, 1.0 at the bottom
    pub progress: f64,
}

#[cfg(feature = "hydrate")]
fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[cfg(feature = "hydrate")]
fn sample_scroll() -> ScrollSample {
    let y = window().scroll_y().unwrap_or(0.0);
    let viewport = viewport_height();
    let height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport);
    ScrollSample {
        y,
        progress: scroll_progress(y, height, viewport),
    }
}

/// Call `on_scroll` once after mount and then on every window scroll.
pub fn use_window_scroll(on_scroll: impl Fn(ScrollSample) + Clone + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let initial = on_scroll.clone();
        request_animation_frame(move || initial(sample_scroll()));

        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll(sample_scroll()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_scroll;
}

/// Repeat `tick` every `period` until the owner is disposed.
pub fn use_interval(period: Duration, tick: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        match set_interval_with_handle(tick, period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(?err, "could not start interval"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (period, tick);
}

/// Feed one visibility sample into `state`. On the sample that reveals, the
/// scroll listener is handed back so the caller can release it.
#[cfg(any(feature = "hydrate", test))]
fn release_on_reveal<H>(state: &mut Reveal, listener: &mut Option<H>, visible: bool) -> Option<H> {
    if state.observe(visible) {
        listener.take()
    } else {
        None
    }
}

/// Flip `state` to revealed the first time `node` scrolls into view, then
/// stop listening.
pub fn use_reveal(node: NodeRef<html::Div>, state: RwSignal<Reveal>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::leptos_dom::helpers::WindowListenerHandle;

        let listener = StoredValue::new_local(None::<WindowListenerHandle>);

        let check = move || {
            if state.get_untracked().is_revealed() {
                return;
            }
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            if !in_viewport(rect.top(), rect.bottom(), viewport_height()) {
                return;
            }
            let released = state
                .try_update(|s| {
                    listener
                        .try_update_value(|l| release_on_reveal(s, l, true))
                        .flatten()
                })
                .flatten();
            if let Some(handle) = released {
                handle.remove();
            }
        };

        // first check once the element is mounted
        Effect::new(move |_| {
            if node.get().is_some() {
                check();
            }
        });

        let handle = window_event_listener(leptos::ev::scroll, move |_| check());
        if state.get_untracked().is_revealed() {
            handle.remove();
        } else {
            listener.set_value(Some(handle));
        }
        on_cleanup(move || {
            if let Some(handle) = listener.try_update_value(Option::take).flatten() {
                handle.remove();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (node, state);
}
