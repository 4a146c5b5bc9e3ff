//! Reveal — появление блока при прокрутке.
//!
//! Блок стартует смещённым и прозрачным (см. `RevealConfig::hidden_transform`)
//! и переходит в видимое состояние, когда `IntersectionObserver` сообщает, что
//! в viewport попала доля элемента не меньше `view_factor`.
//! При `prefers-reduced-motion` стили не применяются вовсе.

use crate::layout::global_context::SiteContext;
use contracts::RevealConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Inline style of a reveal wrapper for the given state.
pub fn reveal_style(config: &RevealConfig, visible: bool) -> String {
    if visible {
        format!(
            "opacity: 1; transform: none; transition: {};",
            config.transition()
        )
    } else {
        format!(
            "opacity: {}; transform: {}; transition: {};",
            config.opacity,
            config.hidden_transform(),
            config.transition()
        )
    }
}

/// Observer thresholds are not exact, allow a small tolerance.
pub fn should_reveal(ratio: f64, view_factor: f64) -> bool {
    ratio + 0.01 >= view_factor
}

#[component]
pub fn Reveal(
    /// Overrides `reveal.delay_ms` from the site config.
    #[prop(optional)]
    delay_ms: Option<u32>,
    /// Overrides `reveal.view_factor` from the site config.
    #[prop(optional)]
    view_factor: Option<f64>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let mut config = ctx.config.reveal.clone();
    if let Some(delay) = delay_ms {
        config = config.with_delay(delay);
    }
    if let Some(factor) = view_factor {
        config = config.with_view_factor(factor);
    }

    let reduced_motion = ctx.reduced_motion;
    let visible = RwSignal::new(reduced_motion);
    let container = NodeRef::<leptos::html::Div>::new();

    if !reduced_motion {
        let view_factor = config.view_factor;
        let reset = config.reset;
        Effect::new(move |_| {
            if let Some(el) = container.get() {
                if let Err(e) = observe(&el, view_factor, reset, visible) {
                    log::warn!("reveal: observer unavailable, showing content: {:?}", e);
                    visible.set(true);
                }
            }
        });
    }

    let style = move || {
        if reduced_motion {
            String::new()
        } else {
            reveal_style(&config, visible.get())
        }
    };

    view! {
        <div class=format!("reveal {}", class) node_ref=container style=style>
            {children()}
        </div>
    }
}

fn observe(
    el: &web_sys::HtmlDivElement,
    view_factor: f64,
    reset: bool,
    visible: RwSignal<bool>,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting()
                    && should_reveal(entry.intersection_ratio(), view_factor)
                {
                    visible.set(true);
                    if !reset {
                        observer.unobserve(&entry.target());
                    }
                } else if reset && !entry.is_intersecting() {
                    visible.set(false);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(view_factor));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(el);
    // Sections are never unmounted, the observer lives as long as the page.
    callback.forget();
    Ok(())
}
