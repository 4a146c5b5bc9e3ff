use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long the loader stays on screen before the page is shown.
pub const LOADER_DURATION_MS: u32 = 2200;

/// Full-screen hexagon logo shown on first load.
///
/// Drawing itself is a CSS animation (`@keyframes loader-draw` / `loader-out`);
/// the component only waits and then reports completion via `on_finish`.
#[component]
pub fn Loader(#[prop(into)] initial: String, on_finish: Callback<()>) -> impl IntoView {
    spawn_local(async move {
        TimeoutFuture::new(LOADER_DURATION_MS).await;
        log::debug!("loader finished");
        on_finish.run(());
    });

    view! {
        <div class="loader" aria-label="Loading">
            <div class="loader__logo">
                <IconLoader initial=initial />
            </div>
        </div>
    }
}

#[component]
fn IconLoader(initial: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="261.021"
            height="298.536"
            viewBox="0 0 261.021 298.536"
        >
            <g transform="translate(-238.695 -107.379)">
                <text
                    class="loader__letter"
                    transform="translate(293 324)"
                    fill="#63ffda"
                    font-size="200"
                    font-family="SegoeUI-Semibold, Segoe UI"
                    font-weight="600"
                >
                    <tspan x="0" y="0">{initial}</tspan>
                </text>
                <path
                    class="loader__hexagon"
                    d="M435.651,850.174l126.064-68.158V637.388L437.036,563.135,310.695,632.124V776.474Z"
                    transform="translate(-67 -450)"
                    fill="none"
                    stroke="#63ffda"
                    stroke-width="5"
                />
            </g>
        </svg>
    }
}
