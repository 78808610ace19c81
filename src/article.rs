//! Article save flow and dashboard summaries.
//!
//! Persistence and authentication live in the hosted backend. This module
//! covers what happens on this side of it: turning a submitted editor form
//! into the record that gets upserted, and summarizing an author's articles
//! for the dashboard.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::slug::generate_slug;
use crate::util::parse_leading_int;

/// Paths whose cached pages are stale after any save.
pub const REVALIDATE_PATHS: &[&str] = &["/articles", "/dashboard"];

/// Publication state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = Error;

    /// An empty status is a draft.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// Fields submitted by the article editor, as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleForm {
    pub title: String,
    /// Editor document serialized as JSON.
    pub content: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// The row handed to the backend for upsert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub content: Document,
    pub status: ArticleStatus,
    pub category_id: Option<i64>,
    pub author_id: String,
    pub slug: String,
    pub updated_at: Timestamp,
}

/// What the caller should do after the record is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub record: ArticleRecord,
    /// Cached paths to invalidate.
    pub revalidate: Vec<&'static str>,
    /// Where to send the author next. Set only for published articles.
    pub redirect: Option<String>,
}

/// Public URL path of an article.
pub fn article_path(slug: &str) -> String {
    format!("/articles/{slug}")
}

/// Validate a submitted form and build the upsert record.
///
/// The slug is derived from the title here and nowhere else, so changing a
/// title only changes the slug when the article is saved again. Slugs are
/// not checked for uniqueness.
///
/// # Errors
///
/// - [`Error::Json`] if `content` is not valid JSON
/// - [`Error::InvalidStatus`] for a status other than draft or published
/// - [`Error::Unauthorized`] if there is no signed-in author
pub fn save_article(
    form: &ArticleForm,
    author_id: Option<&str>,
    now: Timestamp,
) -> Result<SaveOutcome> {
    let content = Document::parse(&form.content)?;
    let status: ArticleStatus = form.status.as_deref().unwrap_or_default().parse()?;
    let category_id = form
        .category_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .and_then(parse_leading_int);

    let author_id = author_id.ok_or(Error::Unauthorized)?;

    let slug = generate_slug(&form.title);
    debug!(%slug, %status, blocks = content.len(), "built article record");

    let redirect = (status == ArticleStatus::Published).then(|| article_path(&slug));
    if redirect.is_some() {
        info!(%slug, "article published");
    }

    Ok(SaveOutcome {
        record: ArticleRecord {
            title: form.title.clone(),
            content,
            status,
            category_id,
            author_id: author_id.to_string(),
            slug,
            updated_at: now,
        },
        revalidate: REVALIDATE_PATHS.to_vec(),
        redirect,
    })
}

/// An article row as listed on the author dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub status: ArticleStatus,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
}

impl ArticleSummary {
    /// Category name, or "Uncategorized".
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Uncategorized")
    }

    /// Read time label; articles without an estimate show five minutes.
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time.unwrap_or(5))
    }
}

/// Counters shown at the top of the author dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub published: usize,
    pub drafts: usize,
    pub total_views: u64,
}

impl DashboardStats {
    pub fn from_articles(articles: &[ArticleSummary]) -> Self {
        articles.iter().fold(Self::default(), |mut stats, article| {
            match article.status {
                ArticleStatus::Published => stats.published += 1,
                ArticleStatus::Draft => stats.drafts += 1,
            }
            stats.total_views += article.view_count.unwrap_or(0);
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("".parse::<ArticleStatus>().unwrap(), ArticleStatus::Draft);
        assert_eq!("draft".parse::<ArticleStatus>().unwrap(), ArticleStatus::Draft);
        assert_eq!(
            "published".parse::<ArticleStatus>().unwrap(),
            ArticleStatus::Published
        );
        assert!(matches!(
            "archived".parse::<ArticleStatus>(),
            Err(Error::InvalidStatus(s)) if s == "archived"
        ));
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&ArticleStatus::Published).unwrap(),
            "\"published\""
        );
        let status: ArticleStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, ArticleStatus::Draft);
    }

    #[test]
    fn test_form_from_json() {
        let form: ArticleForm = serde_json::from_str(
            r#"{"title":"T","content":"{}","status":"published","categoryId":"3"}"#,
        )
        .unwrap();
        assert_eq!(form.category_id.as_deref(), Some("3"));
        assert_eq!(form.status.as_deref(), Some("published"));
    }

    #[test]
    fn test_summary_labels() {
        let summary = ArticleSummary {
            id: "1".to_string(),
            title: "T".to_string(),
            status: ArticleStatus::Draft,
            view_count: None,
            category: None,
            read_time: None,
        };
        assert_eq!(summary.category_label(), "Uncategorized");
        assert_eq!(summary.read_time_label(), "5 min read");
    }
}
