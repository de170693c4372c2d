//! Shell configuration.

/// Configuration for an interactive shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text written before each input line.
    pub prompt: String,

    /// Whether to print the banner when the session starts.
    pub show_banner: bool,

    /// Whether to print the prompt at all.
    pub show_prompt: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
            show_prompt: true,
        }
    }
}

impl ShellConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no banner and no prompt, for scripts.
    #[must_use]
    pub fn quiet() -> Self {
        Self::new().show_banner(false).show_prompt(false)
    }

    /// Sets the prompt text.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets whether to print the banner.
    #[must_use]
    pub fn show_banner(mut self, value: bool) -> Self {
        self.show_banner = value;
        self
    }

    /// Sets whether to print the prompt.
    #[must_use]
    pub fn show_prompt(mut self, value: bool) -> Self {
        self.show_prompt = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "> ");
        assert!(config.show_banner);
        assert!(config.show_prompt);
    }

    #[test]
    fn builder_pattern() {
        let config = ShellConfig::new().prompt("db> ").show_banner(false);

        assert_eq!(config.prompt, "db> ");
        assert!(!config.show_banner);
        assert!(config.show_prompt);
    }

    #[test]
    fn quiet_disables_decoration() {
        let config = ShellConfig::quiet();
        assert!(!config.show_banner);
        assert!(!config.show_prompt);
    }
}
