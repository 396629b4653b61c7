//! Session status

use anyhow::Result;

use quill_core::{SharedStore, Viewer};

use crate::output::Output;

/// Show session counts and the active viewer identity
pub async fn show(store: &SharedStore, viewer: &Viewer, output: &Output) -> Result<()> {
    let store = store.lock().await;
    let articles = store.article_count();
    let drafts = store.named_drafts().len();
    let tags = store.all_tags().len();

    if output.is_quiet() {
        println!("{} {} {}", articles, drafts, tags);
        return Ok(());
    }

    match output.format {
        crate::output::OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "author": viewer.name,
                    "articles": articles,
                    "drafts": drafts,
                    "tags": tags,
                    "version": store.version(),
                })
            );
        }
        _ => {
            println!("Author:   {}", viewer.name);
            println!("Articles: {}", articles);
            println!("Drafts:   {}", drafts);
            println!("Tags:     {}", tags);
        }
    }
    Ok(())
}
