//! Runtime settings for the shell.

/// Default cap on the number of names `type` classifies in one call.
pub const DEFAULT_MAX_TOKENS: usize = 20;

/// Settings shared by every command the shell runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Emit ANSI colors in command output.
    pub color: bool,
    /// Upper bound on tokens `type` accepts; `None` removes the bound.
    pub max_tokens: Option<usize>,
    /// Prompt printed before each interactive line.
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            color: true,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            prompt: "$ ".to_string(),
        }
    }
}

impl ShellConfig {
    /// Configuration with colors turned off, handy for capturing output.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}
