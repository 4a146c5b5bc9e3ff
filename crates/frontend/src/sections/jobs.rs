//! Секция «Where I've Worked» — вертикальный tablist с историей работы.
//!
//! Состояние (активная панель и курсор фокуса) живёт в [`TabSelector`];
//! этот компонент только рисует его и переводит события DOM в операции:
//! - click по вкладке → `activate(i)`
//! - ArrowUp / ArrowDown внутри tablist → `move_focus`, затем `.focus()` на кнопке

use crate::shared::reveal::Reveal;
use contracts::{FocusCommand, FocusStep, JobList, JobRecord, TabSelector};
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;

pub fn tab_id(index: usize) -> String {
    format!("tab-{}", index)
}

pub fn panel_id(index: usize) -> String {
    format!("panel-{}", index)
}

/// Highlight bar offset; the CSS multiplies it by `--tab-height` (or `--tab-width` on mobile).
pub fn highlight_style(active: usize) -> String {
    format!("--active-tab: {};", active)
}

#[component]
pub fn Jobs(jobs: JobList) -> impl IntoView {
    let Some(selector) = TabSelector::new(jobs.len()) else {
        log::warn!("jobs: empty job list, rendering heading only");
        return view! {
            <section id="jobs" class="jobs">
                <h2 class="numbered-heading">"Where I’ve Worked"</h2>
            </section>
        }
        .into_any();
    };

    let selector = RwSignal::new(selector);
    let tab_refs: Vec<NodeRef<html::Button>> = (0..jobs.len()).map(|_| NodeRef::new()).collect();

    let run_focus = {
        let tab_refs = tab_refs.clone();
        move |command: FocusCommand| {
            let index = command.index();
            match tab_refs.get(index).and_then(|r| r.get()) {
                Some(button) => {
                    if let Err(e) = button.focus() {
                        log::warn!("jobs: focus on tab {} failed: {:?}", index, e);
                    }
                }
                None => log::warn!("jobs: tab {} is not mounted", index),
            }
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let Some(step) = FocusStep::from_key(&ev.key()) else {
            return;
        };
        // Arrow keys would otherwise scroll the page.
        ev.prevent_default();
        if let Some(command) = selector.try_update(|s| s.move_focus(step)) {
            run_focus(command);
        }
    };

    let tabs = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let company = job.company.clone();
            view! {
                <button
                    node_ref=tab_refs[i]
                    id=tab_id(i)
                    class="jobs__tab"
                    class:jobs__tab--active=move || selector.with(|s| s.is_active(i))
                    role="tab"
                    tabindex=move || selector.with(|s| s.tab_index(i)).to_string()
                    aria-selected=move || selector.with(|s| s.is_active(i)).to_string()
                    aria-controls=panel_id(i)
                    on:click=move |_| {
                        selector.update(|s| {
                            if let Err(e) = s.activate(i) {
                                log::warn!("jobs: {}", e);
                            }
                        });
                    }
                >
                    <span>{company}</span>
                </button>
            }
        })
        .collect_view();

    let panels = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| view! { <JobPanel index=i job=job.clone() selector=selector /> })
        .collect_view();

    view! {
        <section id="jobs" class="jobs">
            <Reveal>
                <h2 class="numbered-heading">"Where I’ve Worked"</h2>
                <div class="jobs__inner">
                    <div class="jobs__tablist" role="tablist" aria-label="Job tabs" on:keydown=on_keydown>
                        {tabs}
                        <div
                            class="jobs__highlight"
                            style=move || highlight_style(selector.with(|s| s.active()))
                        ></div>
                    </div>
                    <div class="jobs__panels">{panels}</div>
                </div>
            </Reveal>
        </section>
    }
    .into_any()
}

#[component]
fn JobPanel(index: usize, job: JobRecord, selector: RwSignal<TabSelector>) -> impl IntoView {
    let is_active = move || selector.with(|s| s.is_active(index));
    let JobRecord {
        title,
        company,
        location,
        range,
        url,
        description,
    } = job;

    view! {
        <div
            id=panel_id(index)
            class="jobs__panel"
            class:jobs__panel--active=is_active
            role="tabpanel"
            tabindex=move || if is_active() { "0" } else { "-1" }
            aria-labelledby=tab_id(index)
            aria-hidden=move || (!is_active()).to_string()
            hidden=move || !is_active()
        >
            <h3>
                <span>{title}</span>
                <span class="company">
                    "\u{a0}@\u{a0}"
                    <a href=url class="inline-link" target="_blank" rel="noopener noreferrer">
                        {company}
                    </a>
                </span>
            </h3>
            <p class="company">{location}</p>
            <p class="range">{range}</p>
            <div class="jobs__description" inner_html=description></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_link_tabs_and_panels() {
        assert_eq!(tab_id(0), "tab-0");
        assert_eq!(panel_id(2), "panel-2");
    }

    #[test]
    fn test_highlight_style() {
        assert_eq!(highlight_style(0), "--active-tab: 0;");
        assert_eq!(highlight_style(2), "--active-tab: 2;");
    }
}
