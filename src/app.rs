use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700;800&display=swap";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/adastra.css"/>
        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="stylesheet" href=FONT_STYLESHEET/>
        <Title text="AdAstra - Rise Above. Build Beyond."/>
        <Meta
            name="description"
            content="The official Robotics & Drone Club of CIT – where innovation takes flight across Bharat. Join India's premier robotics community."
        />
        <Meta
            name="keywords"
            content="robotics, drones, AI, engineering, India, innovation, technology, college club, automation"
        />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
