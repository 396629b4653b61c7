//! Current viewer identity
//!
//! A denormalized snapshot of whoever is writing: name and avatar
//! URL. The store stamps this onto created articles and draft
//! defaults and never validates it; real authentication lives
//! outside the core.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Fallback display name when none is configured
const ANONYMOUS: &str = "Anonymous";

/// The current viewer's identity snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Viewer {
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar_url: String,
}

impl Viewer {
    /// Build a viewer from configuration, falling back to Anonymous
    /// with a generated avatar
    pub fn from_config(config: &Config) -> Self {
        let name = config
            .author_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());
        let avatar_url = config
            .author_avatar
            .clone()
            .unwrap_or_else(|| avatar_url(&name));
        Self { name, avatar_url }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            name: ANONYMOUS.to_string(),
            avatar_url: avatar_url(ANONYMOUS),
        }
    }
}

/// Generated avatar URL for a display name
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=7c3aed&color=ffffff",
        name.replace(' ', "+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let viewer = Viewer::default();
        assert_eq!(viewer.name, "Anonymous");
        assert!(viewer.avatar_url.contains("Anonymous"));
    }

    #[test]
    fn test_from_config_uses_configured_name() {
        let config = Config {
            author_name: Some("Sarah Johnson".to_string()),
            ..Default::default()
        };
        let viewer = Viewer::from_config(&config);
        assert_eq!(viewer.name, "Sarah Johnson");
        assert!(viewer.avatar_url.contains("Sarah+Johnson"));
    }

    #[test]
    fn test_blank_name_falls_back() {
        let config = Config {
            author_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(Viewer::from_config(&config).name, "Anonymous");
    }

    #[test]
    fn test_configured_avatar_wins() {
        let config = Config {
            author_name: Some("Jane".to_string()),
            author_avatar: Some("https://example.com/me.png".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Viewer::from_config(&config).avatar_url,
            "https://example.com/me.png"
        );
    }
}
