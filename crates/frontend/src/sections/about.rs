use crate::layout::global_context::SiteContext;
use crate::shared::reveal::Reveal;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    let about = expect_context::<SiteContext>().content.about;

    view! {
        <section id="about" class="about">
            <Reveal>
                <h2 class="numbered-heading">"About Me"</h2>
                <div class="about__inner">
                    {about
                        .paragraphs
                        .into_iter()
                        .map(|p| view! { <p>{p}</p> })
                        .collect_view()}
                    <ul class="skills-list">
                        {about
                            .skills
                            .into_iter()
                            .map(|skill| view! { <li>{skill}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </Reveal>
        </section>
    }
}
