//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use quill_core::{Article, Draft};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a single article in full
    pub fn print_article(&self, article: &Article) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:        {}", article.id);
                println!("Title:     {}", article.title);
                println!("Author:    {}", article.author);
                println!("Published: {}", article.published_at.format("%Y-%m-%d"));
                if !article.tags.is_empty() {
                    println!("Tags:      {}", article.tags.join(", "));
                }
                println!(
                    "Stats:     {} min read | {} views | {} likes{}{}",
                    article.reading_time,
                    article.views,
                    article.likes,
                    if article.is_liked { " | liked" } else { "" },
                    if article.is_bookmarked {
                        " | bookmarked"
                    } else {
                        ""
                    }
                );
                if let Some(ref cover) = article.cover_image {
                    println!("Cover:     {}", cover);
                }
                println!();
                println!("{}", article.content);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(article).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", article.id);
            }
        }
    }

    /// Print a list of articles, one row each
    pub fn print_articles(&self, articles: &[Article]) {
        match self.format {
            OutputFormat::Human => {
                if articles.is_empty() {
                    println!("No articles found.");
                    return;
                }
                for article in articles {
                    let mut markers = String::new();
                    if article.is_liked {
                        markers.push('♥');
                    }
                    if article.is_bookmarked {
                        markers.push('☆');
                    }
                    println!(
                        "{} | {} | {} | {} min{}{}",
                        short_id(&article.id),
                        truncate(&article.title, 45),
                        article.published_at.format("%Y-%m-%d"),
                        article.reading_time,
                        if markers.is_empty() { "" } else { " " },
                        markers
                    );
                }
                println!("\n{} article(s)", articles.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(articles).unwrap());
            }
            OutputFormat::Quiet => {
                for article in articles {
                    println!("{}", article.id);
                }
            }
        }
    }

    /// Print a list of drafts
    pub fn print_drafts(&self, drafts: &[Draft]) {
        match self.format {
            OutputFormat::Human => {
                if drafts.is_empty() {
                    println!("No drafts.");
                    return;
                }
                for draft in drafts {
                    println!(
                        "{} | {} | saved {}",
                        short_id(&draft.id),
                        truncate(draft.title.as_deref().unwrap_or("(untitled)"), 45),
                        draft.updated_at.format("%Y-%m-%d %H:%M")
                    );
                }
                println!("\n{} draft(s)", drafts.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(drafts).unwrap());
            }
            OutputFormat::Quiet => {
                for draft in drafts {
                    println!("{}", draft.id);
                }
            }
        }
    }

    /// Print a list of tags with usage counts
    pub fn print_tags(&self, tags: &[(String, usize)]) {
        match self.format {
            OutputFormat::Human => {
                if tags.is_empty() {
                    println!("No tags found.");
                    return;
                }
                for (name, count) in tags {
                    println!("{} ({})", name, count);
                }
                println!("\n{} tag(s)", tags.len());
            }
            OutputFormat::Json => {
                let json_tags: Vec<_> = tags
                    .iter()
                    .map(|(name, count)| serde_json::json!({"name": name, "count": count}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json_tags).unwrap());
            }
            OutputFormat::Quiet => {
                for (name, _) in tags {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// First eight characters of an identifier (UUIDs are long; the
/// sample ids are short already)
///
/// Draft ids are caller-supplied and not necessarily ASCII, so the
/// cut falls on a char boundary, never a byte offset.
fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("3"), "3");
        assert_eq!(short_id("0123456789abcdef"), "01234567");
    }

    #[test]
    fn test_short_id_multibyte() {
        // Caller-supplied draft ids are not guaranteed ASCII; the cut
        // must not land inside a multibyte character.
        assert_eq!(short_id("aaaaaaa\u{2665}x"), "aaaaaaa\u{2665}");
        assert_eq!(short_id("héllo-wörld-id"), "héllo-wö");
        assert_eq!(short_id("♥♥♥"), "♥♥♥");
    }
}
