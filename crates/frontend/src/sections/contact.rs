use crate::layout::global_context::SiteContext;
use crate::shared::reveal::Reveal;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let email = expect_context::<SiteContext>().config.site.email;

    view! {
        <section id="contact" class="contact">
            <Reveal>
                <h2 class="numbered-heading overline">"What’s Next?"</h2>
                <h2 class="title">"Get In Touch"</h2>
                <p>
                    "My inbox is always open. Whether you have a question or just want to say hi, \
                     I’ll try my best to get back to you!"
                </p>
                <a class="email-link" href=format!("mailto:{}", email)>"Say Hello"</a>
            </Reveal>
        </section>
    }
}
