//! Query engine
//!
//! Read-only derivations over the article collection. Nothing here
//! mutates the store; every view is computed from current state on
//! each call, so there is no secondary copy to keep in sync.

use crate::models::Article;
use crate::store::ContentStore;

/// How many articles the featured strip shows
const FEATURED_COUNT: usize = 3;

impl ContentStore {
    /// The featured articles: a fixed-size prefix of the listing,
    /// not a ranking
    pub fn featured(&self) -> Vec<Article> {
        self.articles
            .iter()
            .take(FEATURED_COUNT)
            .cloned()
            .collect()
    }

    /// Articles belonging to the current user
    ///
    /// The store has a single-viewer model, so this is the full
    /// listing; the presentation layer narrows it by comparing
    /// `author` against the signed-in identity.
    pub fn by_current_user(&self) -> Vec<Article> {
        self.articles.to_vec()
    }

    /// Articles the viewer has bookmarked
    pub fn bookmarked(&self) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|a| a.is_bookmarked)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title, content, and tags
    ///
    /// An empty query returns the full collection.
    pub fn search(&self, query: &str) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|a| a.matches_query(query))
            .cloned()
            .collect()
    }

    /// Articles whose tag list contains `tag` exactly
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|a| a.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Combined listing filter: search AND tag
    ///
    /// Empty strings act as wildcards for their half of the
    /// predicate. This is the filter the paginated listing runs
    /// before slicing a page out of the result.
    pub fn filtered(&self, query: &str, tag: &str) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|a| a.matches_query(query) && (tag.is_empty() || a.has_tag(tag)))
            .cloned()
            .collect()
    }

    /// Articles related to the given one: sharing at least one tag,
    /// source excluded, in current list order, capped at `limit`
    ///
    /// First match wins; there is no relevance scoring. Unknown
    /// identifiers yield an empty list.
    pub fn related_to(&self, id: &str, limit: usize) -> Vec<Article> {
        let Some(source) = self.articles.iter().find(|a| a.id == id) else {
            return Vec::new();
        };
        self.articles
            .iter()
            .filter(|a| a.id != source.id && a.tags.iter().any(|t| source.has_tag(t)))
            .take(limit)
            .cloned()
            .collect()
    }

    /// All unique tags, in first-appearance order
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for article in &self.articles {
            for tag in &article.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}

/// Slice a 1-indexed page out of a filtered listing
///
/// Returns `[(page_number - 1) * page_size, page_number * page_size)`.
/// Out-of-range pages come back empty; clamping the page number into
/// `[1, total_pages]` is the caller's job.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages a listing of `count` items spans
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        count.div_ceil(page_size)
    }
}
