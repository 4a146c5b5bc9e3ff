use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::shared::loader::Loader;
use crate::shared::motion::prefers_reduced_motion;
use contracts::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("site config failed to load: {:#}", e);
            return view! {
                <p class="fatal">"This page failed to load its configuration."</p>
            }
            .into_any();
        }
    };

    let reduced_motion = prefers_reduced_motion();
    let initial = config.site.initial.clone();

    // Provide the loaded config and content to the whole page via context.
    provide_context(SiteContext::new(config, reduced_motion));

    // No loader animation when the user prefers reduced motion.
    let is_loading = RwSignal::new(!reduced_motion);
    let finish_loading = Callback::new(move |_| is_loading.set(false));

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=move || view! { <Loader initial=initial.clone() on_finish=finish_loading /> }
        >
            <Shell />
        </Show>
    }
    .into_any()
}
