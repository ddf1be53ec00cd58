//! Data structures exchanged with the articles/template API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

// ============================================
// Articles
// ============================================

/// Row of `GET /api/articles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `GET /api/articles/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: i64,
    #[serde(default)]
    pub article_data: Map<String, Value>,
    #[serde(default)]
    pub temas: Option<Vec<String>>,
    #[serde(default)]
    pub image_data: ImageData,
}

impl ArticleDetail {
    /// Topics of the article. The backend keeps them inside `article_data`,
    /// a top-level `temas` wins when present.
    pub fn topics(&self) -> Vec<String> {
        if let Some(temas) = &self.temas {
            return temas.clone();
        }
        match self.article_data.get("temas") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Text shown in the form field `name`, `None` when the value is falsy.
    pub fn field_text(&self, name: &str) -> Option<String> {
        self.article_data.get(name).and_then(value_text)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

/// Image URLs attached to an article. Extra keys (captions) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
}

/// Body of `POST /api/articles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub prompt: String,
    pub satire_level: i64,
    pub image_prompts: Vec<String>,
}

/// Success body of `POST /api/articles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedArticle {
    pub slug: String,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Body of `PUT /api/articles/{id}`
///
/// `image_data` always serializes both keys; an empty field is sent as
/// `null` so the server can tell "no image" apart from "unset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    pub article_data: BTreeMap<String, String>,
    pub temas: Vec<String>,
    pub image_data: ImageData,
}

// ============================================
// Template
// ============================================

/// The singleton article template, used for both GET and PUT
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub template: String,
}
