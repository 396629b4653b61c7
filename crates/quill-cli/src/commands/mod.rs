//! Command implementations

pub mod article;
pub mod config;
pub mod draft;
pub mod status;
pub mod tag;
pub mod titles;
