//! Draft management
//!
//! Drafts are partial articles keyed by identifier. Saving is an
//! upsert: a patch whose id matches an existing draft merges into it,
//! anything else becomes a new draft (with a fresh id when the patch
//! carries none). There is never more than one draft per identifier.
//!
//! Publishing does not remove the matching draft; it stays in the
//! collection alongside the article.

use tracing::debug;
use uuid::Uuid;

use crate::models::{Draft, DraftPatch};
use crate::store::ContentStore;

impl ContentStore {
    /// Upsert a draft, keyed by its identifier
    ///
    /// Returns the identifier the draft ended up under, which is
    /// freshly assigned when the patch carries none.
    pub fn save_draft(&mut self, patch: DraftPatch) -> String {
        let id = patch
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Some(existing) = self.drafts.iter_mut().find(|d| d.id == id) {
            existing.apply(patch);
            debug!(id = %id, "merged into existing draft");
        } else {
            self.drafts.push(Draft::from_patch(id.clone(), patch));
            debug!(id = %id, "created draft");
        }
        self.bump();
        id
    }

    /// Get a draft by identifier
    pub fn get_draft(&self, id: &str) -> Option<Draft> {
        self.drafts.iter().find(|d| d.id == id).cloned()
    }

    /// Drafts eligible for listing: those carrying a non-empty
    /// identifier
    pub fn named_drafts(&self) -> Vec<Draft> {
        self.drafts
            .iter()
            .filter(|d| !d.id.is_empty())
            .cloned()
            .collect()
    }

    /// Number of stored drafts
    pub fn draft_count(&self) -> usize {
        self.drafts.len()
    }
}
