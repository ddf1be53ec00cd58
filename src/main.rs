mod components;
mod controller;
mod forms;
mod listing;
mod messages;
mod models;
mod state;
mod utils;

use leptos::*;

use components::{ArticleList, CreatePanel, EditPanel, TabBar, TabPanel, TemplatePanel};
use controller::Controller;
use state::{EditorState, Tab};
use utils::api::HttpApi;
use utils::config::AppConfig;
use utils::dialogs::BrowserDialogs;

// ============================================
// Main app (tab switching)
// ============================================

#[component]
fn App() -> impl IntoView {
    let config = AppConfig::default();
    let state = create_rw_signal(EditorState::default());
    let controller = Controller::new(HttpApi::new(config), state, BrowserDialogs);

    provide_context(state);
    provide_context(store_value(controller));

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Info Sur · Editor"</h1>
                <TabBar />
            </header>

            <main class="container">
                <TabPanel tab=Tab::Create>
                    <CreatePanel />
                </TabPanel>
                <TabPanel tab=Tab::Manage>
                    <ArticleList />
                    <EditPanel />
                </TabPanel>
                <TabPanel tab=Tab::Template>
                    <TemplatePanel />
                </TabPanel>
            </main>
        </div>
    }
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
