//! Article generation form

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::{use_editor, NoticeView};
use crate::utils::config::SATIRE_RANGE;

#[component]
pub fn CreatePanel() -> impl IntoView {
    let (state, ctrl) = use_editor();
    let (min_level, max_level) = (*SATIRE_RANGE.start(), *SATIRE_RANGE.end());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            ctrl.get_value().create_article().await;
        });
    };

    view! {
        <div class="create-panel">
            <form id="create-form" class="create-form" on:submit=on_submit>
                <label for="prompt">"Prompt"</label>
                <textarea
                    id="prompt"
                    name="prompt"
                    rows="4"
                    required
                    placeholder="¿Sobre qué noticia escribimos?"
                    prop:value=move || state.with(|s| s.create_form.prompt.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.with_value(|c| c.edit_create_form(|f| f.prompt = value));
                    }
                ></textarea>

                <label for="satire-level">
                    "Nivel de sátira: "
                    <span id="satire-value">{move || state.with(|s| s.create_form.satire_label.clone())}</span>
                </label>
                <input
                    id="satire-level"
                    type="range"
                    name="satire_level"
                    min=min_level
                    max=max_level
                    prop:value=move || state.with(|s| s.create_form.satire_level.to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.with_value(|c| c.set_satire_level(&value));
                    }
                />

                <label for="image-prompt-primary">"Imagen principal (opcional)"</label>
                <input
                    id="image-prompt-primary"
                    type="text"
                    name="image_prompt_primary"
                    prop:value=move || state.with(|s| s.create_form.image_prompt_primary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.with_value(|c| c.edit_create_form(|f| f.image_prompt_primary = value));
                    }
                />

                <label for="image-prompt-secondary">"Imagen secundaria (opcional)"</label>
                <input
                    id="image-prompt-secondary"
                    type="text"
                    name="image_prompt_secondary"
                    prop:value=move || state.with(|s| s.create_form.image_prompt_secondary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.with_value(|c| c.edit_create_form(|f| f.image_prompt_secondary = value));
                    }
                />

                <button type="submit">"Generar artículo"</button>
            </form>

            <NoticeView output_id="create-output" notice=Signal::derive(move || state.with(|s| s.create_output.clone())) />
        </div>
    }
}
