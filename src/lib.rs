use std::io::Write;
use std::str::FromStr;
use tracing::debug;

pub mod builtins;
pub mod config;
pub mod error;
pub mod input;
pub mod normalize;
pub mod parser;
pub mod path;
pub mod style;

pub use builtins::Builtin;
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use parser::tokenize;
pub use path::{FileSystem, HostFs, PathResolver};

/// Result of a command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
    /// The shell should continue running.
    Continue,
    /// The shell should exit with the provided code.
    Exit(i32),
}

/// The command dispatcher: configuration plus the path resolver used to
/// classify anything that is not a builtin.
#[derive(Debug, Clone)]
pub struct Shell<F = HostFs> {
    config: ShellConfig,
    resolver: PathResolver<F>,
}

impl Shell<HostFs> {
    /// Creates a shell that searches the process `PATH`.
    pub fn new(config: ShellConfig) -> Self {
        Self::with_resolver(config, PathResolver::from_env())
    }
}

impl<F: FileSystem> Shell<F> {
    pub fn with_resolver(config: ShellConfig, resolver: PathResolver<F>) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn resolver(&self) -> &PathResolver<F> {
        &self.resolver
    }

    /// Runs `command` if it names a builtin.
    ///
    /// Returns `Ok(None)` when the command is not a builtin, so the caller can
    /// fall through to external-command handling.
    pub fn handle_builtin<W: Write, E: Write>(
        &self,
        command: &str,
        argument: Option<&str>,
        stdout: W,
        stderr: E,
    ) -> Result<Option<ShellStatus>> {
        match Builtin::from_str(command) {
            Ok(builtin) => builtin.execute(argument, self, stdout, stderr).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Orchestrates a full input line.
    ///
    /// Builtins run in-process. Anything else is looked up on the search path
    /// and reported, since external programs are never launched.
    pub fn handle_line<W: Write, E: Write>(
        &self,
        line: &str,
        mut stdout: W,
        mut stderr: E,
    ) -> Result<ShellStatus> {
        let line = normalize::normalize_token(line);
        if line.is_empty() {
            return Ok(ShellStatus::Continue);
        }

        let (command, argument) = parser::split_command(line);
        if let Some(status) = self.handle_builtin(command, argument, &mut stdout, &mut stderr)? {
            return Ok(status);
        }

        match self.resolver.resolve(command) {
            Some(path) => {
                debug!(command, path = %path.display(), "external command found");
                writeln!(stderr, "{}: external commands are not supported", command)?;
            }
            None => {
                writeln!(stderr, "{}: command not found", command)?;
            }
        }
        Ok(ShellStatus::Continue)
    }

    /// Builtin and search-path names starting with `prefix`, sorted and
    /// without duplicates.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let mut all_commands: Vec<String> = Builtin::ALL
            .iter()
            .map(|b| b.name())
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect();

        all_commands.extend(
            self.resolver
                .executables()
                .into_iter()
                .filter(|cmd| cmd.starts_with(prefix)),
        );

        all_commands.sort();
        all_commands.dedup();
        all_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shell_without_path() -> Shell {
        Shell::with_resolver(ShellConfig::plain(), PathResolver::new(None, HostFs))
    }

    fn run_line(shell: &Shell, line: &str) -> (ShellStatus, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = shell.handle_line(line, &mut out, &mut err).unwrap();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_handle_builtin_falls_through_for_unknown() {
        let shell = shell_without_path();
        let status = shell
            .handle_builtin("ls", None, Vec::new(), Vec::new())
            .unwrap();
        assert_eq!(status, None);
    }

    #[test]
    fn test_handle_builtin_recognizes_echo() {
        let shell = shell_without_path();
        let mut out = Vec::new();
        let status = shell
            .handle_builtin("echo", Some("hi"), &mut out, Vec::new())
            .unwrap();
        assert_eq!(status, Some(ShellStatus::Continue));
        assert_eq!(out, b"hi\n");
    }

    #[test]
    fn test_handle_line_echo_keeps_inner_spacing() {
        let (status, out, err) = run_line(&shell_without_path(), "  echo  a   b \n");
        assert_eq!(status, ShellStatus::Continue);
        assert_eq!(out, "a   b\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_handle_line_exit() {
        let (status, out, _) = run_line(&shell_without_path(), "exit 3");
        assert_eq!(status, ShellStatus::Exit(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_handle_line_empty_is_noop() {
        let (status, out, err) = run_line(&shell_without_path(), "   \r\n");
        assert_eq!(status, ShellStatus::Continue);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_handle_line_unknown_command() {
        let (status, out, err) = run_line(&shell_without_path(), "frobnicate --now");
        assert_eq!(status, ShellStatus::Continue);
        assert!(out.is_empty());
        assert_eq!(err, "frobnicate: command not found\n");
    }

    #[test]
    fn test_completions_include_builtins() {
        let shell = shell_without_path();
        assert_eq!(shell.completions("e"), vec!["echo", "exit"]);
        assert_eq!(shell.completions("p"), vec!["pwd"]);
        assert!(shell.completions("zz").is_empty());
    }
}
