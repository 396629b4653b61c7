//! Draft command handlers

use anyhow::Result;

use quill_core::{DraftPatch, SharedStore, Viewer};

use crate::output::Output;

/// List named drafts, most recently saved first
pub async fn list(store: &SharedStore, output: &Output) -> Result<()> {
    let store = store.lock().await;
    let mut drafts = store.named_drafts();
    drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    output.print_drafts(&drafts);
    Ok(())
}

/// Save (upsert) a draft from arguments
pub async fn save(
    store: &SharedStore,
    viewer: &Viewer,
    id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    output: &Output,
) -> Result<()> {
    let reading_time = content.as_deref().map(quill_core::reading_time);
    let mut store = store.lock().await;
    let draft_id = store.save_draft(DraftPatch {
        id,
        title,
        content,
        author: Some(viewer.name.clone()),
        author_avatar: Some(viewer.avatar_url.clone()),
        tags: (!tags.is_empty()).then_some(tags),
        reading_time,
        ..Default::default()
    });

    output.success(&format!("Saved draft: {}", draft_id));
    if output.is_quiet() {
        println!("{}", draft_id);
    }
    Ok(())
}
