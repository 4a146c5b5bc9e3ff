use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use crate::shared::reveal::Reveal;
use contracts::Project;
use leptos::prelude::*;

/// Cards cascade in 100 ms apart.
const CARD_STAGGER_MS: u32 = 100;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = expect_context::<SiteContext>().content.projects;

    view! {
        <section id="projects" class="projects">
            <Reveal>
                <h2 class="numbered-heading">"Some Things I’ve Built"</h2>
            </Reveal>
            <ul class="projects__grid">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <li>
                                <Reveal delay_ms=CARD_STAGGER_MS * i as u32 class="project">
                                    <ProjectCard project=project />
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tech,
        github,
        external,
    } = project;

    view! {
        <div class="project__inner">
            <header>
                <div class="project__top">
                    <div class="folder">{icon("folder")}</div>
                    <div class="project__links">
                        {github.map(|url| view! {
                            <a href=url aria-label="GitHub Link" target="_blank" rel="noopener noreferrer">
                                {icon("github")}
                            </a>
                        })}
                        {external.map(|url| view! {
                            <a href=url aria-label="External Link" target="_blank" rel="noopener noreferrer">
                                {icon("external")}
                            </a>
                        })}
                    </div>
                </div>
                <h3 class="project__title">{title}</h3>
                <p class="project__description">{description}</p>
            </header>
            <footer>
                <ul class="project__tech-list">
                    {tech.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                </ul>
            </footer>
        </div>
    }
}
