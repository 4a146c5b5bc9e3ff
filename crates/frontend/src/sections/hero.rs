use crate::layout::global_context::SiteContext;
use crate::shared::motion::stagger_style;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let site = ctx.config.site;
    let animate = !ctx.reduced_motion;
    let style = move |i: usize| {
        if animate {
            stagger_style(i, 100, 100)
        } else {
            String::new()
        }
    };

    view! {
        <section id="hero" class="hero">
            <h1 style=style(0)>"Hi, my name is"</h1>
            <h2 class="big-heading" style=style(1)>{site.name.clone()}"."</h2>
            <h3 class="big-heading medium" style=style(2)>{site.title.clone()}</h3>
            <p style=style(3)>{site.tagline.clone()}</p>
            <a class="email-link" href=format!("mailto:{}", site.email) style=style(4)>
                "Get In Touch"
            </a>
        </section>
    }
}
