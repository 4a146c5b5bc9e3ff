use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Fixed rail along the left (socials) or right (email) edge of wide screens.
#[component]
fn Side(#[prop(into)] orientation: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("side side--{}", orientation)>
            {children()}
        </div>
    }
}

#[component]
pub fn SocialRail() -> impl IntoView {
    let socials = expect_context::<SiteContext>().config.socials;

    view! {
        <Side orientation="left">
            <ul class="side__list">
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
        </Side>
    }
}

#[component]
pub fn EmailRail() -> impl IntoView {
    let email = expect_context::<SiteContext>().config.site.email;

    view! {
        <Side orientation="right">
            <div class="side__email">
                <a href=format!("mailto:{}", email)>{email.clone()}</a>
            </div>
        </Side>
    }
}
