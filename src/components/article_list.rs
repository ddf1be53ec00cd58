//! Article management list

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::use_editor;
use crate::listing::{ArticleListView, ArticleRow, ListDisplay};

#[component]
pub fn ArticleList() -> impl IntoView {
    let (state, _) = use_editor();

    view! {
        <div id="articles-list" class="articles-list">
            {move || match state.with(|s| s.list_display.clone()) {
                ListDisplay::NotLoaded => ().into_view(),
                ListDisplay::Failed(message) => view! {
                    <p class="status error">{message}</p>
                }.into_view(),
                ListDisplay::Rendered(ArticleListView::Empty { placeholder }) => view! {
                    <p class="empty">{placeholder}</p>
                }.into_view(),
                ListDisplay::Rendered(ArticleListView::Rows(rows)) => rows
                    .into_iter()
                    .map(|row| view! { <ArticleItem row=row /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ArticleItem(row: ArticleRow) -> impl IntoView {
    let (_, ctrl) = use_editor();
    let id = row.id;

    view! {
        <article class="article-item">
            <h3>{row.title}</h3>
            <p class="meta">{row.meta}</p>
            <div class="actions">
                <a class="view" href=row.view_href target="_blank" rel="noopener">"Ver"</a>
                <button type="button" class="edit"
                    on:click=move |_| spawn_local(async move { ctrl.get_value().open_editor(id).await })
                >
                    "Editar"
                </button>
                <button type="button" class="delete"
                    on:click=move |_| spawn_local(async move { ctrl.get_value().delete_article(id).await })
                >
                    "Eliminar"
                </button>
            </div>
        </article>
    }
}
