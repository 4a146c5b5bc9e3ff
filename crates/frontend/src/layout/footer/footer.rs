use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let socials = ctx.config.socials;
    let name = ctx.config.site.name;

    view! {
        <footer class="footer">
            // Side rails are hidden on mobile, the footer repeats the links there.
            <ul class="footer__socials">
                {socials
                    .into_iter()
                    .map(|social| view! {
                        <li>
                            <a href=social.url aria-label=social.name.clone() target="_blank" rel="noopener noreferrer">
                                {icon(&social.name)}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <div class="footer__credit">{format!("Built by {} with Rust & Leptos", name)}</div>
        </footer>
    }
}
