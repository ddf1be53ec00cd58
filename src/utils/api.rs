//! Articles/template JSON API client

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{
    ArticleDetail, ArticleSummary, CreateArticleRequest, CreatedArticle, TemplateDocument,
    UpdateArticleRequest,
};
use crate::utils::config::AppConfig;
use crate::utils::log_trace::log_warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request was rejected before any response arrived
    #[error("{0}")]
    Network(String),
    /// Non-2xx response; `message` is what the server said, if anything
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },
    #[error("respuesta inválida: {0}")]
    Decode(String),
    #[error("{0}")]
    Request(String),
}

fn status_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("HTTP {}", status),
    }
}

/// Error text of a failed response: the `error` field of a JSON body,
/// or the raw body for anything else. Empty values count as absent.
pub fn extract_error_message(content_type: &str, body: &str) -> Option<String> {
    if content_type.contains("application/json") {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .filter(|m| !m.is_empty())
    } else if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

#[async_trait(?Send)]
pub trait EditorApi {
    async fn list_articles(&self) -> Result<Vec<ArticleSummary>, ApiError>;
    async fn get_article(&self, id: i64) -> Result<ArticleDetail, ApiError>;
    async fn create_article(&self, request: &CreateArticleRequest) -> Result<CreatedArticle, ApiError>;
    async fn update_article(&self, id: i64, request: &UpdateArticleRequest) -> Result<(), ApiError>;
    async fn delete_article(&self, id: i64) -> Result<(), ApiError>;
    async fn get_template(&self) -> Result<TemplateDocument, ApiError>;
    async fn save_template(&self, document: &TemplateDocument) -> Result<(), ApiError>;
}

/// `fetch`-backed client used in the browser
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn send<B: Serialize>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.config.endpoint(path);

        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = body {
            let json = serde_json::to_string(body)
                .map_err(|e| ApiError::Request(format!("JSON serialization failed: {}", e)))?;
            opts.set_body(&JsValue::from_str(&json));
        }

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| ApiError::Request(format!("could not build request: {:?}", e)))?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Request(format!("could not set header: {:?}", e)))?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Request("window unavailable".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_error_text(&e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Decode("not a Response".to_string()))?;

        if !resp.ok() {
            let content_type = resp
                .headers()
                .get("content-type")
                .ok()
                .flatten()
                .unwrap_or_default();
            let body = read_text(&resp).await.unwrap_or_default();
            let err = ApiError::Status {
                status: resp.status(),
                message: extract_error_message(&content_type, &body),
            };
            log_warn("api", &format!("{} {} -> {}: {}", method, url, resp.status(), err));
            return Err(err);
        }

        Ok(resp)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body).await?;
        let json = JsFuture::from(
            resp.json()
                .map_err(|e| ApiError::Decode(format!("json() failed: {:?}", e)))?,
        )
        .await
        .map_err(|e| ApiError::Decode(js_error_text(&e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl EditorApi for HttpApi {
    async fn list_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
        self.send_json::<(), _>("GET", "/api/articles", None).await
    }

    async fn get_article(&self, id: i64) -> Result<ArticleDetail, ApiError> {
        self.send_json::<(), _>("GET", &format!("/api/articles/{}", id), None).await
    }

    async fn create_article(&self, request: &CreateArticleRequest) -> Result<CreatedArticle, ApiError> {
        self.send_json("POST", "/api/articles", Some(request)).await
    }

    async fn update_article(&self, id: i64, request: &UpdateArticleRequest) -> Result<(), ApiError> {
        self.send("PUT", &format!("/api/articles/{}", id), Some(request)).await?;
        Ok(())
    }

    async fn delete_article(&self, id: i64) -> Result<(), ApiError> {
        self.send::<()>("DELETE", &format!("/api/articles/{}", id), None).await?;
        Ok(())
    }

    async fn get_template(&self) -> Result<TemplateDocument, ApiError> {
        self.send_json::<(), _>("GET", "/api/template", None).await
    }

    async fn save_template(&self, document: &TemplateDocument) -> Result<(), ApiError> {
        self.send("PUT", "/api/template", Some(document)).await?;
        Ok(())
    }
}

async fn read_text(resp: &Response) -> Option<String> {
    let promise = resp.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

fn js_error_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
