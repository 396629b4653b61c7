//! Quill Core Library
//!
//! This crate provides the core functionality for Quill, a
//! session-local manager for short-form articles: creation, editing,
//! engagement toggles, search and tag filtering, pagination, and
//! draft autosave.
//!
//! # Architecture
//!
//! A single `ContentStore` owns all article and draft state for the
//! session. Mutations go through it; every listing (featured,
//! bookmarked, search, pagination) is derived from it on demand.
//! State lives for the process lifetime only.
//!
//! # Quick Start
//!
//! ```
//! use quill_core::{ArticleInput, ContentStore};
//!
//! let mut store = ContentStore::new();
//!
//! let article = store.create(ArticleInput {
//!     title: "Hello, world".to_string(),
//!     content: "My first post.".to_string(),
//!     ..Default::default()
//! });
//!
//! store.toggle_like(&article.id);
//! let hits = store.search("hello");
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! # Modules
//!
//! - `store`: the content store (main entry point)
//! - `models`: article and draft data structures
//! - `engagement`: like/bookmark toggles
//! - `query`: read-only filtered and paginated views
//! - `drafts`: draft upsert and listing
//! - `autosave`: cancelable periodic draft saving
//! - `config`: application configuration
//! - `identity`: current viewer snapshot

pub mod autosave;
pub mod config;
pub mod drafts;
pub mod engagement;
pub mod error;
pub mod identity;
pub mod models;
pub mod query;
pub mod store;

pub use autosave::{spawn_autosave, AutosaveHandle, SharedStore};
pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use identity::Viewer;
pub use models::{
    derive_excerpt, reading_time, Article, ArticleInput, ArticlePatch, Draft, DraftPatch,
};
pub use query::{page, total_pages};
pub use store::ContentStore;
