//! UI components

pub mod article_list;
pub mod create_panel;
pub mod edit_panel;
pub mod notice;
pub mod tabs;
pub mod template_panel;

pub use article_list::ArticleList;
pub use create_panel::CreatePanel;
pub use edit_panel::EditPanel;
pub use notice::NoticeView;
pub use tabs::{TabBar, TabPanel};
pub use template_panel::TemplatePanel;

use leptos::*;

use crate::controller::Controller;
use crate::state::EditorState;
use crate::utils::api::HttpApi;
use crate::utils::dialogs::BrowserDialogs;

pub type AppController = Controller<HttpApi, RwSignal<EditorState>, BrowserDialogs>;

/// State signal and controller provided by `App`
pub fn use_editor() -> (RwSignal<EditorState>, StoredValue<AppController>) {
    let state = use_context::<RwSignal<EditorState>>().expect("EditorState not found");
    let ctrl = use_context::<StoredValue<AppController>>().expect("AppController not found");
    (state, ctrl)
}
