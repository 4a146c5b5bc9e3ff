use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

/// Mobile navigation drawer, hidden above the mobile breakpoint by CSS.
#[component]
pub fn Menu() -> impl IntoView {
    let links = expect_context::<SiteContext>().config.nav;
    let open = RwSignal::new(false);

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    };

    view! {
        <div class="menu" on:keydown=on_keydown>
            <button
                class="menu__toggle"
                aria-label="Menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|v| *v = !*v)
            >
                {move || if open.get() { icon("close") } else { icon("menu") }}
            </button>
            <aside class="menu__drawer" class:menu__drawer--open=move || open.get() aria-hidden=move || (!open.get()).to_string()>
                <nav>
                    <ol>
                        {links
                            .into_iter()
                            .map(|link| view! {
                                <li>
                                    <a href=link.url on:click=move |_| open.set(false)>{link.name}</a>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </nav>
            </aside>
        </div>
    }
}
