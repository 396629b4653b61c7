//! Article command handlers
//!
//! Creating, listing, showing, editing, and deleting articles, plus
//! the like/bookmark toggles. Editing commands run the autosave task
//! against the editor workfile for the length of the session.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use quill_core::{
    page, reading_time, spawn_autosave, total_pages, ArticleInput, ArticlePatch, Config,
    DraftPatch, SharedStore, Viewer,
};

use crate::editor::{cleanup_workfile, confirm, create_workfile, read_workfile, run_editor};
use crate::output::Output;

/// Listing selector flags, mutually exclusive in practice
pub struct ListArgs {
    pub tag: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub bookmarked: bool,
    pub featured: bool,
    pub mine: bool,
}

/// Create an article directly from arguments (scripting path)
pub async fn create(
    store: &SharedStore,
    viewer: &Viewer,
    title: String,
    content: String,
    excerpt: Option<String>,
    tags: Vec<String>,
    cover_image: Option<String>,
    output: &Output,
) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Article title cannot be empty");
    }

    let article = store.lock().await.create(ArticleInput {
        title,
        content,
        excerpt: excerpt.unwrap_or_default(),
        author: viewer.name.clone(),
        author_avatar: viewer.avatar_url.clone(),
        tags,
        cover_image,
    });

    output.success(&format!("Published article: {}", article.id));
    if output.is_quiet() {
        println!("{}", article.id);
    }
    Ok(())
}

/// List articles through the requested view, paginated
pub async fn list(store: &SharedStore, config: &Config, args: ListArgs, output: &Output) -> Result<()> {
    let store = store.lock().await;

    let articles = if args.featured {
        store.featured()
    } else if args.bookmarked {
        store.bookmarked()
    } else if args.mine {
        store.by_current_user()
    } else {
        store.filtered(
            args.search.as_deref().unwrap_or(""),
            args.tag.as_deref().unwrap_or(""),
        )
    };

    let page_size = args.page_size.unwrap_or(config.page_size);
    let pages = total_pages(articles.len(), page_size);
    // The page slice itself never clamps; that is this caller's job.
    let page_number = args.page.clamp(1, pages.max(1));
    let slice = page(&articles, page_number, page_size);

    output.print_articles(slice);
    if !output.is_quiet() && pages > 1 {
        output.message(&format!("Page {} of {}", page_number, pages));
    }
    Ok(())
}

/// Show one article in full, recording the view
pub async fn show(store: &SharedStore, id: String, output: &Output) -> Result<()> {
    let mut store = store.lock().await;
    let id = resolve_id(&store, &id)?;

    store.record_view(&id);
    let article = store
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("Article not found: {}", id))?;
    output.print_article(&article);

    let related = store.related_to(&id, 3);
    if !related.is_empty() && !output.is_quiet() {
        output.message("\nRelated articles:");
        output.print_articles(&related);
    }
    Ok(())
}

/// Write a new article through $EDITOR, or rework an existing one
///
/// While the editor is open, an autosave task snapshots the workfile
/// every `config.autosave_secs` seconds into the draft collection.
/// The task is stopped before the result is read, so no save can
/// land after the session ends.
pub async fn compose(
    store: &SharedStore,
    config: &Config,
    viewer: &Viewer,
    existing_id: Option<String>,
    seed_title: Option<String>,
    output: &Output,
) -> Result<()> {
    let existing = match existing_id {
        Some(raw) => {
            let store = store.lock().await;
            let id = resolve_id(&store, &raw)?;
            Some(
                store
                    .get(&id)
                    .ok_or_else(|| anyhow::anyhow!("Article not found: {}", id))?,
            )
        }
        None => None,
    };

    let (initial_title, initial_content) = match &existing {
        Some(article) => (article.title.clone(), article.content.clone()),
        None => (seed_title.unwrap_or_default(), String::new()),
    };

    let workfile = create_workfile(&initial_title, &initial_content)?;
    let draft_id = existing
        .as_ref()
        .map(|a| a.id.clone())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let snapshot_path = workfile.clone();
    let snapshot_viewer = viewer.clone();
    let snapshot_draft_id = draft_id.clone();
    let autosave = spawn_autosave(
        store.clone(),
        Duration::from_secs(config.autosave_secs),
        move || {
            let (title, content) = read_workfile(&snapshot_path)?;
            let patch = DraftPatch {
                id: Some(snapshot_draft_id.clone()),
                title: Some(title),
                reading_time: Some(reading_time(&content)),
                content: Some(content),
                author: Some(snapshot_viewer.name.clone()),
                author_avatar: Some(snapshot_viewer.avatar_url.clone()),
                ..Default::default()
            };
            patch.has_substance().then_some(patch)
        },
    );

    let edit_result = run_editor(&workfile).await;
    autosave.stop().await;

    let parsed = read_workfile(&workfile);
    cleanup_workfile(&workfile);
    edit_result?;

    let (title, content) = parsed.context("Failed to read edited file")?;
    if title.trim().is_empty() && content.trim().is_empty() {
        output.message("Nothing written; no article published.");
        return Ok(());
    }

    let mut store = store.lock().await;
    match existing {
        Some(article) => {
            store.update(
                &article.id,
                ArticlePatch {
                    title: Some(title),
                    content: Some(content),
                    ..Default::default()
                },
            )?;
            output.success(&format!("Updated article: {}", article.id));
        }
        None => {
            let article = store.create(ArticleInput {
                title,
                content,
                author: viewer.name.clone(),
                author_avatar: viewer.avatar_url.clone(),
                ..Default::default()
            });
            output.success(&format!("Published article: {}", article.id));
            if output.is_quiet() {
                println!("{}", article.id);
            }
        }
    }
    // The working draft stays in the draft collection after publish.
    Ok(())
}

/// Delete an article (with confirmation in human mode)
pub async fn delete(store: &SharedStore, id: String, output: &Output) -> Result<()> {
    let mut store = store.lock().await;
    let id = resolve_id(&store, &id)?;

    if output.should_prompt() {
        let article = store
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("Article not found: {}", id))?;
        println!("Delete article: {} - {}", id, article.title);
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.delete(&id);
    output.success(&format!("Deleted article: {}", id));
    Ok(())
}

/// Toggle the like flag on an article
pub async fn like(store: &SharedStore, id: String, output: &Output) -> Result<()> {
    let mut store = store.lock().await;
    let id = resolve_id(&store, &id)?;

    match store.toggle_like(&id) {
        Some(true) => output.success(&format!("Liked article: {}", id)),
        Some(false) => output.success(&format!("Unliked article: {}", id)),
        None => output.message(&format!("Article not found: {}", id)),
    }
    Ok(())
}

/// Toggle the bookmark flag on an article
pub async fn bookmark(store: &SharedStore, id: String, output: &Output) -> Result<()> {
    let mut store = store.lock().await;
    let id = resolve_id(&store, &id)?;

    match store.toggle_bookmark(&id) {
        Some(true) => output.success(&format!("Bookmarked article: {}", id)),
        Some(false) => output.success(&format!("Removed bookmark: {}", id)),
        None => output.message(&format!("Article not found: {}", id)),
    }
    Ok(())
}

/// Resolve an article id argument (full id or unique prefix)
pub fn resolve_id(store: &quill_core::ContentStore, id: &str) -> Result<String> {
    if store.get(id).is_some() {
        return Ok(id.to_string());
    }

    let matches: Vec<_> = store
        .articles()
        .iter()
        .filter(|a| a.id.starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No article found matching: {}", id),
        1 => Ok(matches[0].id.clone()),
        _ => {
            eprintln!("Multiple articles match '{}':", id);
            for article in &matches {
                eprintln!("  {} - {}", article.id, article.title);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}
