//! Content store
//!
//! The `ContentStore` owns the canonical collections of articles and
//! drafts for one session. It is the single source of truth: every
//! derived view (featured, bookmarked, search results) is computed
//! from it on demand and never stored separately.
//!
//! Articles are kept newest-first; `create` inserts at the front and
//! `articles()` preserves that order for listings.
//!
//! ## Change notification
//!
//! The store carries a monotonically increasing version counter,
//! bumped by every mutation that changed state. Consumers that need
//! to react to changes compare `version()` across reads instead of
//! relying on any implicit notification.
//!
//! ## Usage
//!
//! ```
//! use quill_core::{ArticleInput, ContentStore};
//!
//! let mut store = ContentStore::new();
//! let article = store.create(ArticleInput {
//!     title: "Hello".to_string(),
//!     content: "First post.".to_string(),
//!     ..Default::default()
//! });
//! assert!(store.get(&article.id).is_some());
//! ```

use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{derive_excerpt, reading_time, Article, ArticleInput, ArticlePatch, Draft};

/// In-memory store of articles and drafts for one session
#[derive(Debug, Default)]
pub struct ContentStore {
    /// Articles, newest first
    pub(crate) articles: Vec<Article>,
    /// Drafts, in upsert order
    pub(crate) drafts: Vec<Draft>,
    /// Bumped on every state change
    pub(crate) version: u64,
}

impl ContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the showcase articles
    ///
    /// Used by the CLI so a fresh session has something to browse.
    pub fn with_sample_articles() -> Self {
        let mut store = Self::new();
        for (days_ago, article) in sample_articles() {
            let mut article = article;
            article.published_at = (Utc::now() - Duration::days(days_ago)).date_naive();
            store.articles.push(article);
        }
        store
    }

    // ==================== Article Operations ====================

    /// Create a new article from the given input
    ///
    /// Assigns a fresh identifier and today's publication date,
    /// zeroes the counters and viewer flags, and derives the excerpt
    /// and reading time when the input leaves them out. The article
    /// is inserted at the front of the collection.
    pub fn create(&mut self, input: ArticleInput) -> Article {
        let excerpt = if input.excerpt.trim().is_empty() {
            derive_excerpt(&input.content)
        } else {
            input.excerpt
        };
        let article = Article {
            id: Uuid::new_v4().to_string(),
            reading_time: reading_time(&input.content),
            title: input.title,
            content: input.content,
            excerpt,
            author: input.author,
            author_avatar: input.author_avatar,
            published_at: Utc::now().date_naive(),
            tags: input.tags,
            views: 0,
            likes: 0,
            is_liked: false,
            is_bookmarked: false,
            cover_image: input.cover_image,
        };
        debug!(id = %article.id, title = %article.title, "created article");
        self.articles.insert(0, article.clone());
        self.bump();
        article
    }

    /// Merge the supplied fields into an existing article
    ///
    /// Reading time is recomputed when the patch changes the content
    /// without supplying an explicit value.
    pub fn update(&mut self, id: &str, patch: ArticlePatch) -> StoreResult<()> {
        let recompute = patch.content.is_some() && patch.reading_time.is_none();
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::ArticleNotFound { id: id.to_string() })?;

        article.apply(patch);
        if recompute {
            article.reading_time = reading_time(&article.content);
        }
        debug!(id, "updated article");
        self.bump();
        Ok(())
    }

    /// Remove an article; absent identifiers are a no-op
    ///
    /// Returns whether an article was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        let removed = self.articles.len() < before;
        if removed {
            debug!(id, "deleted article");
            self.bump();
        }
        removed
    }

    /// Get an article by identifier
    pub fn get(&self, id: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.id == id).cloned()
    }

    /// All articles in insertion order, newest first
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of articles
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Whether the store holds no articles
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Bump the view counter on an article
    ///
    /// The store never counts views itself; the detail view calls
    /// this once per read. Unknown identifiers are a no-op.
    pub fn record_view(&mut self, id: &str) {
        if let Some(article) = self.articles.iter_mut().find(|a| a.id == id) {
            article.views += 1;
            self.bump();
        }
    }

    // ==================== Change Tracking ====================

    /// Current change version; increases on every mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn bump(&mut self) {
        self.version += 1;
    }
}

/// The three showcase articles from the original product demo,
/// paired with how many days before "now" each was published
fn sample_articles() -> Vec<(i64, Article)> {
    let sample = |id: &str,
                  title: &str,
                  content: &str,
                  excerpt: &str,
                  author: &str,
                  tags: &[&str],
                  minutes: u32,
                  views: u64,
                  likes: u64,
                  cover: &str| Article {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        author_avatar: crate::identity::avatar_url(author),
        published_at: Utc::now().date_naive(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        reading_time: minutes,
        views,
        likes,
        is_liked: false,
        is_bookmarked: false,
        cover_image: Some(cover.to_string()),
    };

    vec![
        (
            3,
            sample(
                "1",
                "The Future of Web Development: Trends to Watch in 2024",
                "Web development is constantly evolving...",
                "Explore the latest trends shaping the future of web development, from AI integration to new frameworks.",
                "Sarah Johnson",
                &["Web Development", "Technology", "Future"],
                8,
                1250,
                89,
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=400&fit=crop",
            ),
        ),
        (
            6,
            sample(
                "2",
                "Mastering React Hooks: A Comprehensive Guide",
                "React Hooks have revolutionized...",
                "Learn how to effectively use React Hooks to build better, more maintainable applications.",
                "Mike Chen",
                &["React", "Programming", "Tutorial"],
                12,
                2100,
                156,
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop",
            ),
        ),
        (
            8,
            sample(
                "3",
                "Design Systems: Building Consistent User Experiences",
                "A well-designed system is the backbone...",
                "Discover how to create and maintain design systems that scale across your organization.",
                "Emma Rodriguez",
                &["Design", "UX", "Systems"],
                6,
                890,
                67,
                "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=400&fit=crop",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> ArticleInput {
        ArticleInput {
            title: title.to_string(),
            content: content.to_string(),
            author: "Test Author".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_preserves_input_and_zeroes_counters() {
        let mut store = ContentStore::new();
        let created = store.create(ArticleInput {
            title: "Title".to_string(),
            content: "Some content here".to_string(),
            excerpt: "My excerpt".to_string(),
            author: "Jane".to_string(),
            author_avatar: "https://example.com/a.png".to_string(),
            tags: vec!["Rust".to_string()],
            cover_image: Some("https://example.com/c.jpg".to_string()),
        });

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched.title, "Title");
        assert_eq!(fetched.content, "Some content here");
        assert_eq!(fetched.excerpt, "My excerpt");
        assert_eq!(fetched.author, "Jane");
        assert_eq!(fetched.tags, vec!["Rust"]);
        assert_eq!(fetched.cover_image.as_deref(), Some("https://example.com/c.jpg"));
        assert_eq!(fetched.views, 0);
        assert_eq!(fetched.likes, 0);
        assert!(!fetched.is_liked);
        assert!(!fetched.is_bookmarked);
        assert_eq!(fetched.published_at, Utc::now().date_naive());
    }

    #[test]
    fn test_create_inserts_newest_first() {
        let mut store = ContentStore::new();
        store.create(input("first", "a"));
        store.create(input("second", "b"));

        let titles: Vec<_> = store.articles().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_create_derives_excerpt_when_empty() {
        let mut store = ContentStore::new();
        let long = "y".repeat(400);
        let created = store.create(input("t", &long));
        assert_eq!(created.excerpt.chars().count(), 153);
        assert!(created.excerpt.ends_with("..."));
    }

    #[test]
    fn test_create_derives_reading_time() {
        let mut store = ContentStore::new();
        let content = vec!["word"; 400].join(" ");
        let created = store.create(input("t", &content));
        assert_eq!(created.reading_time, 2);
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let mut store = ContentStore::new();
        let article = store.create(input("before", "body"));

        store
            .update(
                &article.id,
                ArticlePatch {
                    title: Some("after".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let fetched = store.get(&article.id).unwrap();
        assert_eq!(fetched.title, "after");
        assert_eq!(fetched.content, "body");
    }

    #[test]
    fn test_update_recomputes_reading_time_on_content_change() {
        let mut store = ContentStore::new();
        let article = store.create(input("t", "short"));
        assert_eq!(store.get(&article.id).unwrap().reading_time, 1);

        let long = vec!["word"; 500].join(" ");
        store
            .update(
                &article.id,
                ArticlePatch {
                    content: Some(long),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.get(&article.id).unwrap().reading_time, 3);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = ContentStore::new();
        let err = store
            .update("missing", ArticlePatch::default())
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::ArticleNotFound {
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_delete_removes_article() {
        let mut store = ContentStore::new();
        let article = store.create(input("t", "c"));

        assert!(store.delete(&article.id));
        assert!(store.get(&article.id).is_none());
        assert!(store.articles().iter().all(|a| a.id != article.id));
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = ContentStore::new();
        store.create(input("t", "c"));
        let version = store.version();

        assert!(!store.delete("missing"));
        assert_eq!(store.article_count(), 1);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_record_view_bumps_counter() {
        let mut store = ContentStore::new();
        let article = store.create(input("t", "c"));

        store.record_view(&article.id);
        store.record_view(&article.id);
        assert_eq!(store.get(&article.id).unwrap().views, 2);

        // Unknown id leaves state alone
        let version = store.version();
        store.record_view("missing");
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_version_increases_on_mutation() {
        let mut store = ContentStore::new();
        let v0 = store.version();
        let article = store.create(input("t", "c"));
        let v1 = store.version();
        assert!(v1 > v0);

        store
            .update(
                &article.id,
                ArticlePatch {
                    title: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(store.version() > v1);
    }

    #[test]
    fn test_sample_articles_seeded() {
        let store = ContentStore::with_sample_articles();
        assert_eq!(store.article_count(), 3);
        assert_eq!(store.articles()[0].id, "1");
        assert!(store.articles()[1].has_tag("React"));
    }
}
