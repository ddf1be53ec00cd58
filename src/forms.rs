//! Create/edit form state and the payloads built from it

use std::collections::BTreeMap;

use crate::models::{ArticleDetail, CreateArticleRequest, ImageData, UpdateArticleRequest};
use crate::utils::config::{DEFAULT_SATIRE_LEVEL, SATIRE_RANGE};

/// Article module fields editable in the edit panel, in form order
pub const ARTICLE_FIELDS: &[&str] = &[
    "mod_titulo",
    "mod_subtitulo",
    "mod_autores",
    "mod_ciudad",
    "mod_fecha",
    "mod_pie1",
    "mod_cuerpo1",
    "mod_cuerpo2",
    "mod_relacionada",
    "mod_pie2",
    "mod_cuerpo3",
    "mod_cuerpo4",
    "mod_catchline",
    "mod_cuerpo5",
    "mod_cuerpo6",
    "mod_cuerpo7",
];

pub const TOPICS_FIELD: &str = "temas";
pub const IMAGE_PRIMARY_FIELD: &str = "image_primary";
pub const IMAGE_SECONDARY_FIELD: &str = "image_secondary";
const IMAGE_PREFIX: &str = "image_";

// ============================================
// Create form
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct CreateForm {
    pub prompt: String,
    pub satire_level: i64,
    /// Label mirrored from the slider
    pub satire_label: String,
    pub image_prompt_primary: String,
    pub image_prompt_secondary: String,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            satire_level: DEFAULT_SATIRE_LEVEL,
            satire_label: DEFAULT_SATIRE_LEVEL.to_string(),
            image_prompt_primary: String::new(),
            image_prompt_secondary: String::new(),
        }
    }
}

impl CreateForm {
    /// Slider input. Unparseable values keep the previous level.
    pub fn set_satire_level(&mut self, raw: &str) {
        if let Ok(level) = raw.trim().parse::<i64>() {
            self.satire_level = level.clamp(*SATIRE_RANGE.start(), *SATIRE_RANGE.end());
            self.satire_label = self.satire_level.to_string();
        }
    }

    pub fn to_request(&self) -> CreateArticleRequest {
        CreateArticleRequest {
            prompt: self.prompt.clone(),
            satire_level: self.satire_level,
            image_prompts: [&self.image_prompt_primary, &self.image_prompt_secondary]
                .into_iter()
                .filter(|p| !p.is_empty())
                .cloned()
                .collect(),
        }
    }
}

// ============================================
// Edit form
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct EditField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub article_id: Option<i64>,
    pub fields: Vec<EditField>,
}

impl Default for EditForm {
    fn default() -> Self {
        let names = ARTICLE_FIELDS
            .iter()
            .copied()
            .chain([TOPICS_FIELD, IMAGE_PRIMARY_FIELD, IMAGE_SECONDARY_FIELD]);
        Self::with_fields(names)
    }
}

impl EditForm {
    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            article_id: None,
            fields: names
                .into_iter()
                .map(|name| EditField { name: name.into(), value: String::new() })
                .collect(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.value.as_str())
    }

    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value;
        }
    }

    /// Fill every field from a freshly fetched article. Fields the article
    /// does not carry are cleared.
    pub fn populate(&mut self, article: &ArticleDetail) {
        self.article_id = Some(article.id);
        for field in &mut self.fields {
            field.value = match field.name.as_str() {
                TOPICS_FIELD => article.topics().join(", "),
                name => match article.field_text(name) {
                    Some(text) => text,
                    None if name == IMAGE_PRIMARY_FIELD => {
                        article.image_data.primary.clone().unwrap_or_default()
                    }
                    None if name == IMAGE_SECONDARY_FIELD => {
                        article.image_data.secondary.clone().unwrap_or_default()
                    }
                    None => String::new(),
                },
            };
        }
    }

    pub fn to_request(&self) -> UpdateArticleRequest {
        let article_data: BTreeMap<String, String> = self
            .fields
            .iter()
            .filter(|f| !f.value.is_empty())
            .filter(|f| f.name != TOPICS_FIELD && !f.name.starts_with(IMAGE_PREFIX))
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();

        UpdateArticleRequest {
            article_data,
            temas: split_topics(self.value(TOPICS_FIELD).unwrap_or_default()),
            image_data: ImageData {
                primary: non_empty(self.value(IMAGE_PRIMARY_FIELD)),
                secondary: non_empty(self.value(IMAGE_SECONDARY_FIELD)),
            },
        }
    }
}

/// `"a, , b ,"` -> `["a", "b"]`
pub fn split_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
