//! Shared article template editor

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::{use_editor, NoticeView};

#[component]
pub fn TemplatePanel() -> impl IntoView {
    let (state, ctrl) = use_editor();

    let on_save = move |_| {
        spawn_local(async move {
            ctrl.get_value().save_template().await;
        });
    };

    view! {
        <div class="template-panel">
            <textarea
                id="template-editor"
                class="template-editor"
                rows="24"
                spellcheck="false"
                prop:value=move || state.with(|s| s.template_text.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctrl.with_value(|c| c.set_template_text(text));
                }
            ></textarea>
            <button id="save-template" type="button" on:click=on_save>"Guardar template"</button>
            <NoticeView output_id="template-output" notice=Signal::derive(move || state.with(|s| s.template_output.clone())) />
        </div>
    }
}
