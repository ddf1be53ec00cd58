//! Article edit panel
//!
//! The inputs are generated from the field list of the edit form, so the
//! panel follows whatever fields `EditForm` carries.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::{use_editor, NoticeView};
use crate::forms::{IMAGE_PRIMARY_FIELD, IMAGE_SECONDARY_FIELD, TOPICS_FIELD};

fn field_label(name: &str) -> String {
    match name {
        TOPICS_FIELD => "Temas (separados por comas)".to_string(),
        IMAGE_PRIMARY_FIELD => "Imagen principal (URL)".to_string(),
        IMAGE_SECONDARY_FIELD => "Imagen secundaria (URL)".to_string(),
        other => other.trim_start_matches("mod_").replace('_', " "),
    }
}

fn is_multiline(name: &str) -> bool {
    name.contains("cuerpo") || name.contains("relacionada") || name.contains("catchline")
}

#[component]
pub fn EditPanel() -> impl IntoView {
    let (state, ctrl) = use_editor();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            ctrl.get_value().submit_edit().await;
        });
    };
    let field_names: Vec<String> =
        state.with_untracked(|s| s.edit_form.fields.iter().map(|f| f.name.clone()).collect());

    view! {
        <div class="edit-area">
            <NoticeView output_id="edit-output" notice=Signal::derive(move || state.with(|s| s.edit_output.clone())) />
            <section id="edit-panel" class="edit-panel" hidden=move || !state.with(|s| s.edit_panel_visible)>
                <h2>"Editar artículo"</h2>
                <form id="edit-form" on:submit=on_submit>
                    <input
                        type="hidden"
                        name="article_id"
                        prop:value=move || state.with(|s| {
                            s.edit_form.article_id.map(|id| id.to_string()).unwrap_or_default()
                        })
                    />
                    {field_names.into_iter().map(|name| view! { <EditFieldInput name=name /> }).collect_view()}
                    <button type="submit">"Guardar cambios"</button>
                </form>
            </section>
        </div>
    }
}

#[component]
fn EditFieldInput(name: String) -> impl IntoView {
    let (state, ctrl) = use_editor();
    let id = format!("edit-{}", name);
    let label = field_label(&name);
    let multiline = is_multiline(&name);

    let value = {
        let name = name.clone();
        move || state.with(|s| s.edit_form.value(&name).unwrap_or_default().to_string())
    };
    let on_input = {
        let name = name.clone();
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            ctrl.with_value(|c| c.set_edit_field(&name, value));
        }
    };

    let input = if multiline {
        view! {
            <textarea id=id.clone() name=name rows="5" prop:value=value on:input=on_input></textarea>
        }
        .into_view()
    } else {
        view! {
            <input id=id.clone() type="text" name=name prop:value=value on:input=on_input />
        }
        .into_view()
    };

    view! {
        <div class="field">
            <label for=id>{label}</label>
            {input}
        </div>
    }
}
