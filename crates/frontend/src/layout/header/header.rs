use crate::layout::global_context::SiteContext;
use crate::layout::header::menu::Menu;
use crate::shared::motion::stagger_style;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let animate = !ctx.reduced_motion;
    let initial = ctx.config.site.initial.clone();
    let links = ctx.config.nav.clone();

    view! {
        <header data-zone="header" class="header">
            <nav class="header__nav">
                <a class="header__logo" href="/" aria-label="home">
                    <span class="header__logo-hex">{initial}</span>
                </a>
                <ol class="header__links">
                    {links
                        .into_iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let style = if animate { stagger_style(i, 100, 0) } else { String::new() };
                            view! {
                                <li style=style>
                                    <a href=link.url>{link.name}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <Menu />
            </nav>
        </header>
    }
}
