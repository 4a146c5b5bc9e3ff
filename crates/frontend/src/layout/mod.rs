pub mod footer;
pub mod global_context;
pub mod header;
pub mod side;

use crate::sections::{About, Contact, Hero, Jobs, Projects};
use global_context::SiteContext;
use leptos::prelude::*;

/// Page layout.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// | Social |  Hero / About / Jobs /  | Email |
/// |  rail  |  Projects / Contact     | rail  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let jobs = expect_context::<SiteContext>().jobs;

    view! {
        <div class="app-layout">
            <header::Header />
            <side::SocialRail />
            <side::EmailRail />
            <main id="content" class="app-main">
                <Hero />
                <About />
                <Jobs jobs=jobs />
                <Projects />
                <Contact />
            </main>
            <footer::Footer />
        </div>
    }
}
