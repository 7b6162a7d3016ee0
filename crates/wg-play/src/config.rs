//! Configuration for a game session.

use wg_core::Locale;

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Name typed by the player. Blank names fall back to a localized default.
    pub player_name: Option<String>,
    /// Language of all player-facing text.
    pub locale: Locale,
    /// Maximum number of remembered locations. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl SessionConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Set the language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Bound the visit history.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::new();
        assert_eq!(cfg.player_name, None);
        assert_eq!(cfg.locale, Locale::French);
        assert_eq!(cfg.history_limit, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::new()
            .with_player_name("Link")
            .with_locale(Locale::English)
            .with_history_limit(3);
        assert_eq!(cfg.player_name.as_deref(), Some("Link"));
        assert_eq!(cfg.locale, Locale::English);
        assert_eq!(cfg.history_limit, Some(3));
    }
}
