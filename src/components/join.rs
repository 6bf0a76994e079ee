use leptos::prelude::*;

use crate::components::{CardHover, Glyph};
use crate::models::{Icon, Inquiry};

/// Join form. There is no backend yet: a submission is logged and
/// acknowledged in place.
#[component]
pub fn JoinForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (interest, set_interest) = signal(String::new());
    let (sent, set_sent) = signal(Option::<Inquiry>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = Inquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            interest: interest.get_untracked(),
        };
        if inquiry.is_blank() {
            return;
        }
        tracing::info!(interest = %inquiry.interest, "join inquiry captured");
        set_sent.set(Some(inquiry));
    };

    let reset = move |_| {
        set_name.set(String::new());
        set_email.set(String::new());
        set_interest.set(String::new());
        set_sent.set(None);
    };

    let greeting = move || {
        sent.with(|s| {
            s.as_ref()
                .map(|inquiry| format!("Thanks, {}!", inquiry.greeting_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <CardHover>
            <div class="card join-card">
                <Show
                    when=move || sent.with(Option::is_none)
                    fallback=move || view! {
                        <div class="join-thanks">
                            <h3>{greeting}</h3>
                            <p>"We'll reach out before the next launch window."</p>
                            <button type="button" class="btn btn-outline" on:click=reset>
                                "Send another"
                            </button>
                        </div>
                    }
                >
                    <form class="join-form" on:submit=on_submit>
                        <div class="join-row">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Email Address"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <input
                            type="text"
                            name="interest"
                            placeholder="Area of Interest (Drones, AI, Robotics, IoT, etc.)"
                            prop:value=interest
                            on:input=move |ev| set_interest.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn-launch">
                            <span class="btn-shine"></span>
                            <span class="btn-label">
                                <Glyph icon=Icon::Rocket class="btn-icon tilt"/>
                                "Launch with AdAstra"
                                <Glyph icon=Icon::Zap class="btn-icon grow"/>
                            </span>
                        </button>
                    </form>
                </Show>
            </div>
        </CardHover>
    }
}
