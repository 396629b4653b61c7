//! Engagement toggles
//!
//! Like and bookmark state for the current viewer. The model is
//! single-viewer: each article carries one `is_liked` and one
//! `is_bookmarked` flag rather than per-user sets.
//!
//! `likes` and `is_liked` move in lock-step: these toggles are the
//! only mutation path for the counter, so a double toggle always
//! restores the starting state.

use tracing::debug;

use crate::store::ContentStore;

impl ContentStore {
    /// Flip the like flag on an article, adjusting the counter
    ///
    /// Returns the new liked state, or `None` when the identifier
    /// does not resolve (a no-op, not an error).
    pub fn toggle_like(&mut self, id: &str) -> Option<bool> {
        let article = self.articles.iter_mut().find(|a| a.id == id)?;
        article.is_liked = !article.is_liked;
        if article.is_liked {
            article.likes += 1;
        } else {
            // The counter never goes below zero, even if state was
            // seeded with is_liked set and likes at 0.
            article.likes = article.likes.saturating_sub(1);
        }
        let liked = article.is_liked;
        debug!(id, liked, "toggled like");
        self.bump();
        Some(liked)
    }

    /// Flip the bookmark flag on an article
    ///
    /// No counter side effect. Returns the new bookmarked state, or
    /// `None` when the identifier does not resolve.
    pub fn toggle_bookmark(&mut self, id: &str) -> Option<bool> {
        let article = self.articles.iter_mut().find(|a| a.id == id)?;
        article.is_bookmarked = !article.is_bookmarked;
        let bookmarked = article.is_bookmarked;
        debug!(id, bookmarked, "toggled bookmark");
        self.bump();
        Some(bookmarked)
    }
}
