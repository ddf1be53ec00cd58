//! Editor operations: tabs, article CRUD and the shared template
//!
//! Every operation catches its own errors and turns them into a `Notice`
//! (or an alert for deletes). The store is never borrowed across an
//! `.await`, so overlapping operations interleave in response order.

use std::rc::Rc;

use serde_json::json;

use crate::forms::CreateForm;
use crate::listing::{render_articles, ListDisplay};
use crate::messages;
use crate::models::TemplateDocument;
use crate::state::{Notice, Store, Tab};
use crate::utils::api::{ApiError, EditorApi};
use crate::utils::dialogs::Dialogs;
use crate::utils::log_trace::{log_error, log_info, log_info_with_data, log_warn};

/// Text shown for a failed request: the fixed `fallback` when the server
/// answered with an error status, the error itself when no usable
/// response arrived.
fn failure_text(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { .. } => fallback.to_string(),
        other => other.to_string(),
    }
}

pub struct Controller<A, S, D> {
    api: Rc<A>,
    store: S,
    dialogs: Rc<D>,
}

impl<A, S: Clone, D> Clone for Controller<A, S, D> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            dialogs: Rc::clone(&self.dialogs),
        }
    }
}

impl<A, S, D> Controller<A, S, D>
where
    A: EditorApi + 'static,
    S: Store,
    D: Dialogs + 'static,
{
    pub fn new(api: A, store: S, dialogs: D) -> Self {
        Self {
            api: Rc::new(api),
            store,
            dialogs: Rc::new(dialogs),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn read<R>(&self, f: impl FnOnce(&crate::state::EditorState) -> R) -> R {
        self.store.read(f)
    }

    // ============================================
    // Tabs
    // ============================================

    pub fn switch_tab(&self, tab: Tab) {
        self.store.modify(|s| s.active_tab = tab);
    }

    /// Tab click: `manage` refreshes the list every time, `template`
    /// loads the template once per session.
    pub async fn select_tab(&self, tab: Tab) {
        log_info("ui-action", &format!("tab {}", tab.id()));
        self.switch_tab(tab);
        match tab {
            Tab::Manage => self.load_articles().await,
            Tab::Template => self.load_template().await,
            Tab::Create => {}
        }
    }

    // ============================================
    // Create
    // ============================================

    pub fn edit_create_form(&self, f: impl FnOnce(&mut CreateForm)) {
        self.store.modify(|s| f(&mut s.create_form));
    }

    pub fn set_satire_level(&self, raw: &str) {
        self.edit_create_form(|form| form.set_satire_level(raw));
    }

    pub async fn create_article(&self) {
        let request = self.store.read(|s| s.create_form.to_request());
        self.store.modify(|s| s.create_output = Some(Notice::Pending(messages::CREATE_PENDING.to_string())));
        log_info_with_data(
            "articles",
            "creating article",
            json!({"satire_level": request.satire_level, "images": request.image_prompts.len()}),
        );

        match self.api.create_article(&request).await {
            Ok(created) => {
                log_info("articles", &format!("article created: {} (id {:?})", created.slug, created.id));
                self.store.modify(|s| {
                    s.create_output = Some(Notice::Success(messages::created(&created.slug)));
                    s.create_form = CreateForm::default();
                    s.articles_cache.clear();
                });
                self.load_articles().await;
            }
            Err(err) => {
                let message = match &err {
                    ApiError::Status { message, .. } => {
                        message.clone().unwrap_or_else(|| messages::CREATE_FAILED.to_string())
                    }
                    other => other.to_string(),
                };
                let message = message.trim();
                log_error("articles", &format!("create failed: {}", message));
                self.store.modify(|s| s.create_output = Some(Notice::Error(messages::error(message))));
            }
        }
    }

    // ============================================
    // List
    // ============================================

    pub async fn load_articles(&self) {
        match self.api.list_articles().await {
            Ok(articles) => {
                log_info("articles", &format!("{} articles loaded", articles.len()));
                self.store.modify(|s| {
                    s.articles_cache = articles;
                    s.list_display = ListDisplay::Rendered(render_articles(&s.articles_cache));
                });
            }
            Err(err) => {
                log_error("articles", &format!("list failed: {}", err));
                self.store.modify(|s| s.list_display = ListDisplay::Failed(messages::LIST_FAILED));
            }
        }
    }

    // ============================================
    // Edit
    // ============================================

    pub fn set_edit_field(&self, name: &str, value: String) {
        self.store.modify(|s| s.edit_form.set_value(name, value));
    }

    /// On failure the panel keeps whatever it showed before; the form is
    /// not cleared.
    pub async fn open_editor(&self, id: i64) {
        log_info("editor", &format!("opening article {}", id));
        match self.api.get_article(id).await {
            Ok(article) => self.store.modify(|s| {
                s.edit_form.populate(&article);
                s.edit_panel_visible = true;
            }),
            Err(err) => {
                log_error("editor", &format!("open {} failed: {}", id, err));
                let message = messages::open_error(&failure_text(&err, messages::OPEN_FAILED));
                self.store.modify(|s| s.edit_output = Some(Notice::Error(message)));
            }
        }
    }

    pub async fn submit_edit(&self) {
        let (id, request) = self.store.read(|s| (s.edit_form.article_id, s.edit_form.to_request()));
        let Some(id) = id else {
            log_warn("editor", "submit without an open article");
            self.store.modify(|s| {
                s.edit_output = Some(Notice::Error(messages::save_error(messages::EDIT_NO_ARTICLE)));
            });
            return;
        };
        self.store.modify(|s| s.edit_output = Some(Notice::Pending(messages::EDIT_PENDING.to_string())));

        match self.api.update_article(id, &request).await {
            Ok(()) => {
                log_info("editor", &format!("article {} saved", id));
                self.store.modify(|s| {
                    s.edit_output = Some(Notice::Success(messages::EDIT_SAVED.to_string()));
                    s.articles_cache.clear();
                });
                self.load_articles().await;
            }
            Err(err) => {
                log_error("editor", &format!("save {} failed: {}", id, err));
                let message = messages::save_error(&failure_text(&err, messages::EDIT_FAILED));
                self.store.modify(|s| s.edit_output = Some(Notice::Error(message)));
            }
        }
    }

    // ============================================
    // Delete
    // ============================================

    pub async fn delete_article(&self, id: i64) {
        if !self.dialogs.confirm(messages::DELETE_CONFIRM) {
            log_info("articles", &format!("delete {} declined", id));
            return;
        }

        match self.api.delete_article(id).await {
            Ok(()) => {
                log_info("articles", &format!("article {} deleted", id));
                self.store.modify(|s| s.articles_cache.clear());
                self.load_articles().await;
            }
            Err(err) => {
                log_error("articles", &format!("delete {} failed: {}", id, err));
                self.dialogs.alert(&messages::delete_error(&failure_text(&err, messages::DELETE_FAILED)));
            }
        }
    }

    // ============================================
    // Template
    // ============================================

    pub fn set_template_text(&self, text: String) {
        self.store.modify(|s| s.template_text = text);
    }

    /// No-op once loaded. The flag is only set after a successful fetch,
    /// so a failed load is retried on the next visit.
    pub async fn load_template(&self) {
        if self.store.read(|s| s.template_loaded) {
            return;
        }
        match self.api.get_template().await {
            Ok(document) => {
                log_info("template", "template loaded");
                self.store.modify(|s| {
                    s.template_text = document.template;
                    s.template_loaded = true;
                });
            }
            Err(err) => {
                log_error("template", &format!("load failed: {}", err));
                let message = messages::error(&failure_text(&err, messages::TEMPLATE_LOAD_FAILED));
                self.store.modify(|s| s.template_output = Some(Notice::Error(message)));
            }
        }
    }

    pub async fn save_template(&self) {
        let document = self.store.read(|s| TemplateDocument { template: s.template_text.clone() });
        self.store.modify(|s| s.template_output = Some(Notice::Pending(messages::TEMPLATE_PENDING.to_string())));

        match self.api.save_template(&document).await {
            Ok(()) => {
                log_info("template", "template saved");
                self.store.modify(|s| {
                    s.template_output = Some(Notice::Success(messages::TEMPLATE_SAVED.to_string()));
                });
            }
            Err(err) => {
                log_error("template", &format!("save failed: {}", err));
                let message = messages::template_save_error(&failure_text(&err, messages::TEMPLATE_SAVE_FAILED));
                self.store.modify(|s| s.template_output = Some(Notice::Error(message)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::EditForm;
    use crate::listing::ArticleListView;
    use crate::state::EditorState;
    use crate::models::{
        ArticleDetail, ArticleSummary, CreateArticleRequest, CreatedArticle, UpdateArticleRequest,
    };
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct MockInner {
        calls: RefCell<Vec<String>>,
        list: RefCell<Result<Vec<ArticleSummary>, ApiError>>,
        detail: RefCell<Result<ArticleDetail, ApiError>>,
        create: RefCell<Result<CreatedArticle, ApiError>>,
        update: RefCell<Result<(), ApiError>>,
        delete: RefCell<Result<(), ApiError>>,
        template: RefCell<Result<TemplateDocument, ApiError>>,
        save: RefCell<Result<(), ApiError>>,
        sent_create: RefCell<Option<CreateArticleRequest>>,
        sent_update: RefCell<Option<UpdateArticleRequest>>,
        sent_template: RefCell<Option<TemplateDocument>>,
    }

    #[derive(Clone)]
    struct MockApi(Rc<MockInner>);

    impl MockApi {
        fn new() -> Self {
            MockApi(Rc::new(MockInner {
                calls: RefCell::new(Vec::new()),
                list: RefCell::new(Ok(vec![summary(1, "uno-20240101000000")])),
                detail: RefCell::new(Err(not_found())),
                create: RefCell::new(Ok(CreatedArticle { slug: "nuevo-20240102000000".into(), id: Some(2) })),
                update: RefCell::new(Ok(())),
                delete: RefCell::new(Ok(())),
                template: RefCell::new(Ok(TemplateDocument { template: "<html></html>".into() })),
                save: RefCell::new(Ok(())),
                sent_create: RefCell::new(None),
                sent_update: RefCell::new(None),
                sent_template: RefCell::new(None),
            }))
        }

        fn calls(&self) -> Vec<String> {
            self.0.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.0.calls.borrow_mut().push(call);
        }
    }

    #[async_trait(?Send)]
    impl EditorApi for MockApi {
        async fn list_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
            self.record("GET /api/articles".into());
            self.0.list.borrow().clone()
        }

        async fn get_article(&self, id: i64) -> Result<ArticleDetail, ApiError> {
            self.record(format!("GET /api/articles/{}", id));
            self.0.detail.borrow().clone()
        }

        async fn create_article(&self, request: &CreateArticleRequest) -> Result<CreatedArticle, ApiError> {
            self.record("POST /api/articles".into());
            *self.0.sent_create.borrow_mut() = Some(request.clone());
            self.0.create.borrow().clone()
        }

        async fn update_article(&self, id: i64, request: &UpdateArticleRequest) -> Result<(), ApiError> {
            self.record(format!("PUT /api/articles/{}", id));
            *self.0.sent_update.borrow_mut() = Some(request.clone());
            self.0.update.borrow().clone()
        }

        async fn delete_article(&self, id: i64) -> Result<(), ApiError> {
            self.record(format!("DELETE /api/articles/{}", id));
            self.0.delete.borrow().clone()
        }

        async fn get_template(&self) -> Result<TemplateDocument, ApiError> {
            self.record("GET /api/template".into());
            self.0.template.borrow().clone()
        }

        async fn save_template(&self, document: &TemplateDocument) -> Result<(), ApiError> {
            self.record("PUT /api/template".into());
            *self.0.sent_template.borrow_mut() = Some(document.clone());
            self.0.save.borrow().clone()
        }
    }

    #[derive(Clone)]
    struct ScriptedDialogs {
        answer: bool,
        confirms: Rc<RefCell<Vec<String>>>,
        alerts: Rc<RefCell<Vec<String>>>,
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    type TestController = Controller<MockApi, Rc<RefCell<EditorState>>, ScriptedDialogs>;

    fn setup_with(answer: bool) -> (TestController, MockApi, ScriptedDialogs) {
        let api = MockApi::new();
        let dialogs = ScriptedDialogs {
            answer,
            confirms: Rc::default(),
            alerts: Rc::default(),
        };
        let store = Rc::new(RefCell::new(EditorState::default()));
        let ctrl = Controller::new(api.clone(), store, dialogs.clone());
        (ctrl, api, dialogs)
    }

    fn setup() -> (TestController, MockApi) {
        let (ctrl, api, _) = setup_with(true);
        (ctrl, api)
    }

    fn summary(id: i64, slug: &str) -> ArticleSummary {
        ArticleSummary {
            id,
            slug: slug.to_string(),
            title: Some(format!("Titular {}", id)),
            created_at: "2024-01-01T10:00:00".to_string(),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status { status: 404, message: None }
    }

    fn rendered_rows(ctrl: &TestController) -> usize {
        ctrl.read(|s| match &s.list_display {
            ListDisplay::Rendered(ArticleListView::Rows(rows)) => rows.len(),
            _ => 0,
        })
    }

    // ---- tabs ----

    #[test]
    fn manage_tab_fetches_list_on_every_click() {
        let (ctrl, api) = setup();
        block_on(ctrl.select_tab(Tab::Manage));
        block_on(ctrl.select_tab(Tab::Manage));

        assert_eq!(api.calls(), vec!["GET /api/articles", "GET /api/articles"]);
        assert_eq!(ctrl.read(|s| s.active_tab), Tab::Manage);
    }

    #[test]
    fn create_tab_issues_no_requests() {
        let (ctrl, api) = setup();
        block_on(ctrl.select_tab(Tab::Template));
        block_on(ctrl.select_tab(Tab::Create));
        assert_eq!(ctrl.read(|s| s.active_tab), Tab::Create);
        assert_eq!(api.calls(), vec!["GET /api/template"]);
    }

    #[test]
    fn template_tab_loads_only_on_first_visit() {
        let (ctrl, api) = setup();
        block_on(ctrl.select_tab(Tab::Template));
        ctrl.set_template_text("edited locally".into());
        block_on(ctrl.select_tab(Tab::Create));
        block_on(ctrl.select_tab(Tab::Template));

        assert_eq!(api.calls(), vec!["GET /api/template"]);
        assert!(ctrl.read(|s| s.template_loaded));
        assert_eq!(ctrl.read(|s| s.template_text.clone()), "edited locally");
    }

    #[test]
    fn failed_template_load_is_retried_on_next_visit() {
        let (ctrl, api) = setup();
        *api.0.template.borrow_mut() = Err(ApiError::Status { status: 503, message: None });
        block_on(ctrl.select_tab(Tab::Template));

        assert!(!ctrl.read(|s| s.template_loaded));
        assert_eq!(
            ctrl.read(|s| s.template_output.clone()),
            Some(Notice::Error("Error: No se pudo cargar el template".into()))
        );

        *api.0.template.borrow_mut() = Ok(TemplateDocument { template: "tpl".into() });
        block_on(ctrl.select_tab(Tab::Template));
        assert_eq!(api.calls().len(), 2);
        assert_eq!(ctrl.read(|s| s.template_text.clone()), "tpl");
    }

    // ---- create ----

    #[test]
    fn create_success_shows_slug_resets_form_and_refreshes() {
        let (ctrl, api) = setup();
        ctrl.edit_create_form(|f| f.prompt = "x".into());
        ctrl.set_satire_level("80");
        ctrl.store().modify(|s| s.articles_cache = vec![summary(9, "viejo")]);

        block_on(ctrl.create_article());

        assert_eq!(
            api.0.sent_create.borrow().clone(),
            Some(CreateArticleRequest { prompt: "x".into(), satire_level: 80, image_prompts: vec![] })
        );
        assert_eq!(api.calls(), vec!["POST /api/articles", "GET /api/articles"]);
        let output = ctrl.read(|s| s.create_output.clone()).unwrap();
        assert!(matches!(output, Notice::Success(_)));
        assert!(output.text().contains("nuevo-20240102000000"));
        assert_eq!(ctrl.read(|s| s.create_form.clone()), CreateForm::default());
        assert_eq!(ctrl.read(|s| s.create_form.satire_label.clone()), "50");
        assert_eq!(ctrl.read(|s| s.articles_cache.clone()), vec![summary(1, "uno-20240101000000")]);
    }

    #[test]
    fn create_failure_shows_server_error_and_keeps_form() {
        let (ctrl, api) = setup();
        *api.0.create.borrow_mut() = Err(ApiError::Status { status: 400, message: Some("bad prompt".into()) });
        ctrl.edit_create_form(|f| f.prompt = "x".into());

        block_on(ctrl.create_article());

        assert_eq!(
            ctrl.read(|s| s.create_output.clone()),
            Some(Notice::Error("Error: bad prompt".into()))
        );
        assert_eq!(ctrl.read(|s| s.create_form.prompt.clone()), "x");
        assert_eq!(api.calls(), vec!["POST /api/articles"]);
    }

    #[test]
    fn create_failure_messages_are_trimmed_or_defaulted() {
        let (ctrl, api) = setup();
        *api.0.create.borrow_mut() = Err(ApiError::Status { status: 429, message: Some("  rate limited \n".into()) });
        block_on(ctrl.create_article());
        assert_eq!(ctrl.read(|s| s.create_output.clone()).unwrap().text(), "Error: rate limited");

        *api.0.create.borrow_mut() = Err(ApiError::Status { status: 500, message: None });
        block_on(ctrl.create_article());
        assert_eq!(
            ctrl.read(|s| s.create_output.clone()).unwrap().text(),
            "Error: Error al generar el artículo"
        );

        *api.0.create.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));
        block_on(ctrl.create_article());
        assert_eq!(ctrl.read(|s| s.create_output.clone()).unwrap().text(), "Error: Failed to fetch");
    }

    // ---- list ----

    #[test]
    fn list_failure_degrades_display_but_keeps_cache() {
        let (ctrl, api) = setup();
        block_on(ctrl.load_articles());
        *api.0.list.borrow_mut() = Err(ApiError::Network("offline".into()));
        block_on(ctrl.load_articles());

        assert_eq!(ctrl.read(|s| s.list_display.clone()), ListDisplay::Failed("Error cargando artículos"));
        assert_eq!(ctrl.read(|s| s.articles_cache.len()), 1);
    }

    #[test]
    fn each_render_replaces_previous_rows() {
        let (ctrl, api) = setup();
        *api.0.list.borrow_mut() = Ok(vec![summary(1, "a"), summary(2, "b"), summary(3, "c")]);
        block_on(ctrl.load_articles());
        assert_eq!(rendered_rows(&ctrl), 3);

        *api.0.list.borrow_mut() = Ok(vec![summary(3, "c")]);
        block_on(ctrl.load_articles());
        assert_eq!(rendered_rows(&ctrl), 1);
        assert_eq!(
            ctrl.read(|s| s.list_display.clone()),
            ListDisplay::Rendered(render_articles(&ctrl.read(|s| s.articles_cache.clone())))
        );

        *api.0.list.borrow_mut() = Ok(vec![]);
        block_on(ctrl.load_articles());
        assert_eq!(rendered_rows(&ctrl), 0);
        assert_eq!(
            ctrl.read(|s| s.list_display.clone()),
            ListDisplay::Rendered(ArticleListView::Empty { placeholder: "No hay artículos guardados todavía." })
        );
    }

    // ---- edit ----

    fn editable(ctrl: &TestController) {
        ctrl.store().modify(|s| {
            s.edit_form = EditForm::with_fields(["title", "body", "temas", "image_primary", "image_secondary"]);
        });
    }

    #[test]
    fn open_editor_populates_form_and_reveals_panel() {
        let (ctrl, api) = setup();
        editable(&ctrl);
        *api.0.detail.borrow_mut() = Ok(serde_json::from_value(json!({
            "id": 7,
            "article_data": {"title": "T"},
            "temas": ["a", "b"],
            "image_data": {"primary": "p"}
        }))
        .unwrap());

        block_on(ctrl.open_editor(7));

        assert_eq!(api.calls(), vec!["GET /api/articles/7"]);
        assert!(ctrl.read(|s| s.edit_panel_visible));
        let form = ctrl.read(|s| s.edit_form.clone());
        assert_eq!(form.article_id, Some(7));
        assert_eq!(form.value("title"), Some("T"));
        assert_eq!(form.value("temas"), Some("a, b"));
        assert_eq!(form.value("image_primary"), Some("p"));
        assert_eq!(form.value("body"), Some(""));
    }

    #[test]
    fn open_failure_keeps_panel_hidden() {
        let (ctrl, _api) = setup();
        block_on(ctrl.open_editor(3));

        assert!(!ctrl.read(|s| s.edit_panel_visible));
        assert_eq!(
            ctrl.read(|s| s.edit_output.clone()),
            Some(Notice::Error("Error cargando artículo: No se pudo cargar el artículo".into()))
        );
    }

    #[test]
    fn open_failure_after_success_leaves_previous_form_in_place() {
        let (ctrl, api) = setup();
        editable(&ctrl);
        *api.0.detail.borrow_mut() = Ok(serde_json::from_value(json!({
            "id": 1, "article_data": {"title": "Primero"}
        }))
        .unwrap());
        block_on(ctrl.open_editor(1));

        *api.0.detail.borrow_mut() = Err(not_found());
        block_on(ctrl.open_editor(2));

        assert!(ctrl.read(|s| s.edit_panel_visible));
        assert_eq!(ctrl.read(|s| s.edit_form.value("title").map(str::to_string)), Some("Primero".into()));
        assert!(matches!(ctrl.read(|s| s.edit_output.clone()), Some(Notice::Error(_))));
    }

    #[test]
    fn open_without_response_shows_fetch_error() {
        let (ctrl, api) = setup();
        *api.0.detail.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));
        block_on(ctrl.open_editor(3));

        assert!(!ctrl.read(|s| s.edit_panel_visible));
        assert_eq!(
            ctrl.read(|s| s.edit_output.clone()),
            Some(Notice::Error("Error cargando artículo: Failed to fetch".into()))
        );
    }

    #[test]
    fn undecodable_detail_shows_decode_error() {
        let (ctrl, api) = setup();
        *api.0.detail.borrow_mut() = Err(ApiError::Decode("missing field `id`".into()));
        block_on(ctrl.open_editor(3));
        assert_eq!(
            ctrl.read(|s| s.edit_output.clone()),
            Some(Notice::Error("Error cargando artículo: respuesta inválida: missing field `id`".into()))
        );
    }

    #[test]
    fn submit_edit_builds_payload_and_refreshes() {
        let (ctrl, api) = setup();
        editable(&ctrl);
        ctrl.store().modify(|s| s.edit_form.article_id = Some(5));
        ctrl.set_edit_field("title", "Nuevo".into());
        ctrl.set_edit_field("temas", "a, , b ,".into());

        block_on(ctrl.submit_edit());

        let sent = api.0.sent_update.borrow().clone().unwrap();
        assert_eq!(sent.temas, vec!["a", "b"]);
        assert_eq!(sent.image_data.primary, None);
        assert_eq!(sent.article_data.get("title").map(String::as_str), Some("Nuevo"));
        assert!(!sent.article_data.contains_key("body"));
        assert_eq!(api.calls(), vec!["PUT /api/articles/5", "GET /api/articles"]);
        assert_eq!(
            ctrl.read(|s| s.edit_output.clone()),
            Some(Notice::Success("Cambios guardados correctamente".into()))
        );
    }

    #[test]
    fn submit_edit_failure_shows_generic_message() {
        let (ctrl, api) = setup();
        editable(&ctrl);
        ctrl.store().modify(|s| s.edit_form.article_id = Some(5));
        *api.0.update.borrow_mut() = Err(ApiError::Status { status: 400, message: Some("detalle".into()) });

        block_on(ctrl.submit_edit());

        assert_eq!(
            ctrl.read(|s| s.edit_output.clone()),
            Some(Notice::Error("Error guardando: No se pudo guardar el artículo".into()))
        );
        assert_eq!(api.calls(), vec!["PUT /api/articles/5"]);
    }

    #[test]
    fn submit_edit_network_failure_shows_fetch_error() {
        let (ctrl, api) = setup();
        editable(&ctrl);
        ctrl.store().modify(|s| s.edit_form.article_id = Some(5));
        *api.0.update.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));

        block_on(ctrl.submit_edit());

        assert_eq!(
            ctrl.read(|s| s.edit_output.clone()),
            Some(Notice::Error("Error guardando: Failed to fetch".into()))
        );
    }

    #[test]
    fn submit_without_open_article_sends_nothing() {
        let (ctrl, api) = setup();
        block_on(ctrl.submit_edit());
        assert!(api.calls().is_empty());
        assert!(matches!(ctrl.read(|s| s.edit_output.clone()), Some(Notice::Error(_))));
    }

    // ---- delete ----

    #[test]
    fn declined_delete_sends_nothing() {
        let (ctrl, api, dialogs) = setup_with(false);
        block_on(ctrl.load_articles());
        let before = ctrl.read(|s| s.list_display.clone());

        block_on(ctrl.delete_article(1));

        assert_eq!(api.calls(), vec!["GET /api/articles"]);
        assert_eq!(dialogs.confirms.borrow().len(), 1);
        assert_eq!(ctrl.read(|s| s.list_display.clone()), before);
    }

    #[test]
    fn confirmed_delete_refreshes_list() {
        let (ctrl, api, dialogs) = setup_with(true);
        block_on(ctrl.delete_article(1));
        assert_eq!(api.calls(), vec!["DELETE /api/articles/1", "GET /api/articles"]);
        assert!(dialogs.alerts.borrow().is_empty());
    }

    #[test]
    fn failed_delete_alerts_without_refresh() {
        let (ctrl, api, dialogs) = setup_with(true);
        *api.0.delete.borrow_mut() = Err(not_found());
        block_on(ctrl.delete_article(4));

        assert_eq!(api.calls(), vec!["DELETE /api/articles/4"]);
        assert_eq!(dialogs.alerts.borrow().clone(), vec!["No se pudo eliminar: Error al eliminar"]);
    }

    #[test]
    fn unreachable_server_alerts_with_fetch_error_on_delete() {
        let (ctrl, api, dialogs) = setup_with(true);
        *api.0.delete.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));
        block_on(ctrl.delete_article(4));

        assert_eq!(api.calls(), vec!["DELETE /api/articles/4"]);
        assert_eq!(dialogs.alerts.borrow().clone(), vec!["No se pudo eliminar: Failed to fetch"]);
    }

    // ---- template ----

    #[test]
    fn save_template_sends_editor_text() {
        let (ctrl, api) = setup();
        ctrl.set_template_text("<p>{{mod_titulo}}</p>".into());
        block_on(ctrl.save_template());

        assert_eq!(
            api.0.sent_template.borrow().clone(),
            Some(TemplateDocument { template: "<p>{{mod_titulo}}</p>".into() })
        );
        assert_eq!(
            ctrl.read(|s| s.template_output.clone()),
            Some(Notice::Success("Template guardado correctamente".into()))
        );
    }

    #[test]
    fn save_template_failure_shows_error() {
        let (ctrl, api) = setup();
        *api.0.save.borrow_mut() = Err(ApiError::Status { status: 500, message: Some("boom".into()) });
        block_on(ctrl.save_template());
        assert_eq!(
            ctrl.read(|s| s.template_output.clone()),
            Some(Notice::Error("Error guardando template: No se pudo guardar el template".into()))
        );
    }

    #[test]
    fn template_network_failures_show_fetch_error() {
        let (ctrl, api) = setup();
        *api.0.template.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));
        block_on(ctrl.load_template());
        assert_eq!(
            ctrl.read(|s| s.template_output.clone()),
            Some(Notice::Error("Error: Failed to fetch".into()))
        );

        *api.0.save.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));
        block_on(ctrl.save_template());
        assert_eq!(
            ctrl.read(|s| s.template_output.clone()),
            Some(Notice::Error("Error guardando template: Failed to fetch".into()))
        );
    }
}
