//! Screen state owned by the controller

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate, SignalWith};

use crate::forms::{CreateForm, EditForm};
use crate::listing::ListDisplay;
use crate::models::ArticleSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Create,
    Manage,
    Template,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Create, Tab::Manage, Tab::Template];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Create => "create",
            Tab::Manage => "manage",
            Tab::Template => "template",
        }
    }

    pub fn parse(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Create => "Crear artículo",
            Tab::Manage => "Gestionar artículos",
            Tab::Template => "Template",
        }
    }

    pub fn panel_id(self) -> String {
        format!("tab-{}", self.id())
    }
}

/// Button/panel attributes for one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub tab: Tab,
    pub selected: bool,
    pub hidden: bool,
}

pub fn tab_state(active: Tab, tab: Tab) -> TabState {
    TabState { tab, selected: tab == active, hidden: tab != active }
}

/// Message shown in an output area; a request is `Pending` while in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Pending(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Pending(t) | Notice::Success(t) | Notice::Error(t) => t,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Pending(_) => "status pending",
            Notice::Success(_) => "status success",
            Notice::Error(_) => "status error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub active_tab: Tab,

    pub create_form: CreateForm,
    pub create_output: Option<Notice>,

    /// Last successful list fetch, the source `list_display` is rendered
    /// from; emptied by every mutation
    pub articles_cache: Vec<ArticleSummary>,
    pub list_display: ListDisplay,

    pub edit_panel_visible: bool,
    pub edit_form: EditForm,
    pub edit_output: Option<Notice>,

    pub template_text: String,
    pub template_loaded: bool,
    pub template_output: Option<Notice>,
}

/// Where the controller keeps `EditorState`. The app uses a reactive
/// signal, tests a plain `RefCell`.
pub trait Store: Clone + 'static {
    fn modify(&self, f: impl FnOnce(&mut EditorState));
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R;
}

impl Store for RwSignal<EditorState> {
    fn modify(&self, f: impl FnOnce(&mut EditorState)) {
        SignalUpdate::update(self, f);
    }

    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        SignalWith::with(self, f)
    }
}

impl Store for Rc<RefCell<EditorState>> {
    fn modify(&self, f: impl FnOnce(&mut EditorState)) {
        f(&mut self.borrow_mut());
    }

    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.borrow())
    }
}
