//! Tab bar and tab panels

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::use_editor;
use crate::state::{tab_state, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let (state, ctrl) = use_editor();

    // one handler for every button, dispatched on data-tab
    let on_tab_click = move |ev: ev::MouseEvent| {
        let button: web_sys::Element = event_target(&ev);
        let Some(tab) = button.get_attribute("data-tab").and_then(|id| Tab::parse(&id)) else {
            return;
        };
        spawn_local(async move {
            ctrl.get_value().select_tab(tab).await;
        });
    };

    view! {
        <nav class="tabs" role="tablist">
            {Tab::ALL.into_iter().map(|tab| {
                let selected = move || state.with(|s| tab_state(s.active_tab, tab).selected);
                view! {
                    <button
                        type="button"
                        class="tab-button"
                        class:active=selected
                        role="tab"
                        data-tab=tab.id()
                        aria-controls=tab.panel_id()
                        aria-selected=move || selected().to_string()
                        on:click=on_tab_click
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let (state, _) = use_editor();
    let hidden = move || state.with(|s| tab_state(s.active_tab, tab).hidden);

    view! {
        <section
            id=tab.panel_id()
            class="tab-content"
            class:active=move || !hidden()
            role="tabpanel"
            aria-hidden=move || hidden().to_string()
            hidden=hidden
        >
            {children()}
        </section>
    }
}
