//! Tag command handlers

use anyhow::Result;

use quill_core::SharedStore;

use crate::output::Output;

/// List all tags with usage counts, in first-appearance order
pub async fn list(store: &SharedStore, output: &Output) -> Result<()> {
    let store = store.lock().await;
    let tags: Vec<(String, usize)> = store
        .all_tags()
        .into_iter()
        .map(|tag| {
            let count = store.filter_by_tag(&tag).len();
            (tag, count)
        })
        .collect();

    output.print_tags(&tags);
    Ok(())
}
