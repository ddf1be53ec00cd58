//! Article list rendering: article projections -> row descriptors

use chrono::{DateTime, NaiveDateTime};

use crate::messages;
use crate::models::ArticleSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub meta: String,
    pub view_href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArticleListView {
    Empty { placeholder: &'static str },
    Rows(Vec<ArticleRow>),
}

/// What the articles container currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListDisplay {
    #[default]
    NotLoaded,
    Rendered(ArticleListView),
    Failed(&'static str),
}

pub fn render_articles(articles: &[ArticleSummary]) -> ArticleListView {
    if articles.is_empty() {
        return ArticleListView::Empty { placeholder: messages::LIST_EMPTY };
    }
    ArticleListView::Rows(articles.iter().map(render_row).collect())
}

fn render_row(article: &ArticleSummary) -> ArticleRow {
    let title = article
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(messages::UNTITLED)
        .to_string();

    ArticleRow {
        id: article.id,
        title,
        meta: format!("{} · {}", article.slug, format_timestamp(&article.created_at)),
        view_href: format!("/{}", article.slug),
    }
}

/// es-ES style `d/m/yyyy, H:MM:SS`. Offset-less timestamps (what the
/// backend sends) are shown as-is. Zoned ones keep their own offset and
/// are not converted to the browser's local time zone, so they can differ
/// from what `Date.toLocaleString` would print.
pub fn format_timestamp(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));

    match parsed {
        Ok(dt) => dt.format("%-d/%-m/%Y, %-H:%M:%S").to_string(),
        Err(_) => messages::INVALID_DATE.to_string(),
    }
}
