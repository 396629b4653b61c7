//! Data models for Quill
//!
//! Defines the core data structures: Article, Draft, and the partial
//! patch types used for merging edits into them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Words-per-minute convention used for reading time estimates
const WORDS_PER_MINUTE: usize = 200;

/// Maximum excerpt length when derived from content
const EXCERPT_LEN: usize = 150;

/// A published article with engagement counters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// Display title
    pub title: String,
    /// Full body content
    pub content: String,
    /// Short summary shown in listings
    pub excerpt: String,
    /// Author display name (denormalized snapshot, not a live reference)
    pub author: String,
    /// Author avatar URL
    pub author_avatar: String,
    /// Publication date, set at creation
    pub published_at: NaiveDate,
    /// Tags in display order
    pub tags: Vec<String>,
    /// Estimated reading time in minutes, derived at write time
    pub reading_time: u32,
    /// View counter, bumped by the detail view
    pub views: u64,
    /// Like counter, moves in lock-step with `is_liked`
    pub likes: u64,
    /// Whether the current viewer has liked this article
    pub is_liked: bool,
    /// Whether the current viewer has bookmarked this article
    pub is_bookmarked: bool,
    /// Optional cover image URL
    pub cover_image: Option<String>,
}

impl Article {
    /// Check whether this article carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match against title, content, or any tag
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }

    /// Merge the supplied fields into this article, leaving the rest untouched
    pub fn apply(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(avatar) = patch.author_avatar {
            self.author_avatar = avatar;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(reading_time) = patch.reading_time {
            self.reading_time = reading_time;
        }
        if let Some(cover) = patch.cover_image {
            self.cover_image = Some(cover);
        }
    }
}

/// Payload for creating a new article
///
/// Excludes everything the store assigns itself: identifier,
/// publication date, counters, and viewer flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    /// May be empty; the store then derives one from the content
    pub excerpt: String,
    pub author: String,
    pub author_avatar: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
}

/// Partial article update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub author_avatar: Option<String>,
    pub tags: Option<Vec<String>>,
    pub reading_time: Option<u32>,
    pub cover_image: Option<String>,
}

/// An in-progress article, upserted over time and keyed by identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    /// Draft identifier; matches the article id when editing an
    /// existing article
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub author_avatar: Option<String>,
    pub tags: Option<Vec<String>>,
    pub reading_time: Option<u32>,
    pub cover_image: Option<String>,
    /// When this draft was last saved
    pub updated_at: DateTime<Utc>,
}

impl Draft {
    /// Build a new draft from a patch, under the given identifier
    pub fn from_patch(id: String, patch: DraftPatch) -> Self {
        Self {
            id,
            title: patch.title,
            content: patch.content,
            excerpt: patch.excerpt,
            author: patch.author,
            author_avatar: patch.author_avatar,
            tags: patch.tags,
            reading_time: patch.reading_time,
            cover_image: patch.cover_image,
            updated_at: Utc::now(),
        }
    }

    /// Merge the supplied fields into this draft, leaving the rest untouched
    pub fn apply(&mut self, patch: DraftPatch) {
        if patch.title.is_some() {
            self.title = patch.title;
        }
        if patch.content.is_some() {
            self.content = patch.content;
        }
        if patch.excerpt.is_some() {
            self.excerpt = patch.excerpt;
        }
        if patch.author.is_some() {
            self.author = patch.author;
        }
        if patch.author_avatar.is_some() {
            self.author_avatar = patch.author_avatar;
        }
        if patch.tags.is_some() {
            self.tags = patch.tags;
        }
        if patch.reading_time.is_some() {
            self.reading_time = patch.reading_time;
        }
        if patch.cover_image.is_some() {
            self.cover_image = patch.cover_image;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial draft save; `id` is optional and assigned by the store
/// when absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub author_avatar: Option<String>,
    pub tags: Option<Vec<String>>,
    pub reading_time: Option<u32>,
    pub cover_image: Option<String>,
}

impl DraftPatch {
    /// Whether this patch carries anything worth autosaving
    ///
    /// A save is worthwhile once either the title or the content is
    /// non-empty.
    pub fn has_substance(&self) -> bool {
        let filled = |f: &Option<String>| f.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.title) || filled(&self.content)
    }
}

/// Estimated reading time in minutes for a body of text
///
/// Uses the 200 words-per-minute convention, rounded up. Empty
/// content reads in zero minutes.
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Derive a listing excerpt from article content
///
/// Takes the first 150 characters, with an ellipsis when truncated.
pub fn derive_excerpt(content: &str) -> String {
    let excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    if content.chars().count() > EXCERPT_LEN {
        format!("{}...", excerpt)
    } else {
        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_reading_time_convention() {
        assert_eq!(reading_time(""), 0);
        assert_eq!(reading_time("one two three"), 1);
        assert_eq!(reading_time(&words(200)), 1);
        assert_eq!(reading_time(&words(201)), 2);
        assert_eq!(reading_time(&words(400)), 2);
        assert_eq!(reading_time(&words(401)), 3);
    }

    #[test]
    fn test_derive_excerpt_short_content() {
        assert_eq!(derive_excerpt("short body"), "short body");
    }

    #[test]
    fn test_derive_excerpt_truncates() {
        let content = "x".repeat(300);
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.chars().count(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_matches_query_title_content_tags() {
        let article = Article {
            id: "1".to_string(),
            title: "Mastering React Hooks".to_string(),
            content: "Hooks have revolutionized components.".to_string(),
            excerpt: String::new(),
            author: "Mike Chen".to_string(),
            author_avatar: String::new(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            tags: vec!["React".to_string(), "Tutorial".to_string()],
            reading_time: 12,
            views: 0,
            likes: 0,
            is_liked: false,
            is_bookmarked: false,
            cover_image: None,
        };

        assert!(article.matches_query(""));
        assert!(article.matches_query("react"));
        assert!(article.matches_query("REVOLUTIONIZED"));
        assert!(article.matches_query("tutor"));
        assert!(!article.matches_query("python"));
    }

    #[test]
    fn test_article_apply_merges_fields() {
        let mut article = Article {
            id: "1".to_string(),
            title: "Old".to_string(),
            content: "Body".to_string(),
            excerpt: "E".to_string(),
            author: "A".to_string(),
            author_avatar: String::new(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tags: vec!["one".to_string()],
            reading_time: 1,
            views: 7,
            likes: 2,
            is_liked: true,
            is_bookmarked: false,
            cover_image: None,
        };

        article.apply(ArticlePatch {
            title: Some("New".to_string()),
            tags: Some(vec!["two".to_string()]),
            ..Default::default()
        });

        assert_eq!(article.title, "New");
        assert_eq!(article.tags, vec!["two"]);
        // Untouched fields survive the merge
        assert_eq!(article.content, "Body");
        assert_eq!(article.views, 7);
        assert!(article.is_liked);
    }

    #[test]
    fn test_draft_apply_keeps_absent_fields() {
        let mut draft = Draft::from_patch(
            "5".to_string(),
            DraftPatch {
                title: Some("A".to_string()),
                content: Some("body".to_string()),
                ..Default::default()
            },
        );

        draft.apply(DraftPatch {
            title: Some("B".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.title.as_deref(), Some("B"));
        assert_eq!(draft.content.as_deref(), Some("body"));
    }

    #[test]
    fn test_draft_patch_substance() {
        assert!(!DraftPatch::default().has_substance());
        assert!(!DraftPatch {
            title: Some("   ".to_string()),
            ..Default::default()
        }
        .has_substance());
        assert!(DraftPatch {
            content: Some("words".to_string()),
            ..Default::default()
        }
        .has_substance());
    }

    #[test]
    fn test_article_serialization() {
        let article = Article {
            id: "1".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            excerpt: "E".to_string(),
            author: "A".to_string(),
            author_avatar: String::new(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            tags: vec![],
            reading_time: 1,
            views: 0,
            likes: 0,
            is_liked: false,
            is_bookmarked: false,
            cover_image: Some("https://example.com/img.jpg".to_string()),
        };
        let json = serde_json::to_string(&article).unwrap();
        let deserialized: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(article, deserialized);
    }
}
