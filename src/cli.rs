//! Command-line argument parsing.

use clap::Parser;
use minishell::ShellConfig;
use minishell::config::DEFAULT_MAX_TOKENS;

/// A minimal interactive shell with a handful of builtins.
#[derive(Parser, Debug)]
#[command(name = "minishell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c', long, value_name = "LINE")]
    pub command: Option<String>,

    /// Disable colored output (also disabled when NO_COLOR is set)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum names `type` accepts in one call; 0 removes the limit
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: usize,

    /// Prompt shown before each line
    #[arg(long, default_value = "$ ")]
    pub prompt: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Builds the shell configuration from the parsed flags and the environment.
    pub fn to_config(&self) -> ShellConfig {
        self.config_with_no_color_env(std::env::var_os("NO_COLOR").is_some())
    }

    fn config_with_no_color_env(&self, no_color_env: bool) -> ShellConfig {
        ShellConfig {
            color: !(self.no_color || no_color_env),
            max_tokens: (self.max_tokens > 0).then_some(self.max_tokens),
            prompt: self.prompt.clone(),
        }
    }
}
