use crate::{Shell, ShellStatus};
use crate::error::{Result, ShellError};
use crate::normalize::{normalize_token, strip_line_terminator};
use crate::parser::{tokenize, tokenize_bounded};
use crate::path::FileSystem;
use crate::style::paint;
use std::io::{ErrorKind, Write};
use std::str::FromStr;
use termion::color;
use tracing::debug;

/// Enumeration of all supported builtin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Echo,
    Type,
    Cd,
    Pwd,
    Help,
    Exit,
}

impl Builtin {
    /// Every builtin, in the order `help` lists them.
    pub const ALL: [Builtin; 6] = [
        Builtin::Echo,
        Builtin::Type,
        Builtin::Cd,
        Builtin::Pwd,
        Builtin::Help,
        Builtin::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Echo => "echo",
            Builtin::Type => "type",
            Builtin::Cd => "cd",
            Builtin::Pwd => "pwd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }
}

impl FromStr for Builtin {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "echo" => Ok(Builtin::Echo),
            "type" => Ok(Builtin::Type),
            "cd" => Ok(Builtin::Cd),
            "pwd" => Ok(Builtin::Pwd),
            "help" => Ok(Builtin::Help),
            "exit" => Ok(Builtin::Exit),
            _ => Err(()),
        }
    }
}

impl Builtin {
    /// Executes the builtin command.
    ///
    /// `argument` is the raw text following the command name. Returns a
    /// `ShellStatus` indicating whether the shell should continue or exit.
    pub fn execute<F: FileSystem, W: Write, E: Write>(
        &self,
        argument: Option<&str>,
        shell: &Shell<F>,
        mut stdout: W,
        mut stderr: E,
    ) -> Result<ShellStatus> {
        debug!(builtin = self.name(), ?argument, "running builtin");
        match self {
            Builtin::Echo => echo_cmd(argument, &mut stdout)?,
            Builtin::Type => type_cmd(argument, shell, &mut stdout, &mut stderr)?,
            Builtin::Cd => cd_cmd(argument, &mut stderr)?,
            Builtin::Pwd => pwd_cmd(&mut stdout, &mut stderr)?,
            Builtin::Help => help_cmd(shell.config().color, &mut stdout)?,
            Builtin::Exit => return Ok(ShellStatus::Exit(0)),
        }
        Ok(ShellStatus::Continue)
    }
}

/// Implementation of the `echo` command.
///
/// Prints the argument verbatim minus any trailing line terminator. A missing
/// or empty argument prints a blank line.
pub fn echo_cmd<W: Write>(argument: Option<&str>, writer: &mut W) -> Result<()> {
    match argument {
        None | Some("") => writeln!(writer)?,
        Some(text) => writeln!(writer, "{}", strip_line_terminator(text))?,
    }
    Ok(())
}

/// Implementation of the `type` command.
///
/// Classifies each token of the argument, in order, as a builtin, a name
/// found on the search path, or not found.
pub fn type_cmd<F: FileSystem, W: Write, E: Write>(
    argument: Option<&str>,
    shell: &Shell<F>,
    stdout: &mut W,
    stderr: &mut E,
) -> Result<()> {
    let Some(argument) = argument else {
        return Ok(());
    };

    let tokens = match shell.config().max_tokens {
        Some(limit) => match tokenize_bounded(argument, limit) {
            Ok(tokens) => tokens,
            Err(e @ ShellError::TooManyTokens { .. }) => {
                writeln!(stderr, "type: {}", e)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        },
        None => tokenize(argument),
    };

    let use_color = shell.config().color;
    for token in &tokens {
        let command = normalize_token(token);
        if command.is_empty() {
            continue;
        }

        // 1. Check if it's a builtin
        if Builtin::from_str(command).is_ok() {
            writeln!(
                stdout,
                "{} is a shell {}",
                paint(command, color::Red, use_color),
                paint("built-in", color::Red, use_color)
            )?;
            continue;
        }

        // 2. External command check
        if shell.resolver().resolve(command).is_some() {
            writeln!(stdout, "{}", command)?;
        } else {
            writeln!(
                stdout,
                "{}{} not found",
                paint("bash: type: ", color::Cyan, use_color),
                paint(&format!("{}:", command), color::Red, use_color)
            )?;
        }
    }
    Ok(())
}

/// Implementation of the `pwd` command.
pub fn pwd_cmd<W: Write, E: Write>(stdout: &mut W, stderr: &mut E) -> Result<()> {
    match std::env::current_dir() {
        Ok(path) => writeln!(stdout, "{}", path.display())?,
        Err(e) => writeln!(stderr, "pwd: error retrieving current directory: {}", e)?,
    }
    Ok(())
}

/// Implementation of the `cd` command.
///
/// No argument, or `~`, changes to `$HOME`.
pub fn cd_cmd<E: Write>(argument: Option<&str>, stderr: &mut E) -> Result<()> {
    let home = std::env::var("HOME").ok();
    change_dir(argument, home.as_deref(), stderr)
}

fn change_dir<E: Write>(
    argument: Option<&str>,
    home: Option<&str>,
    stderr: &mut E,
) -> Result<()> {
    let target = argument.map(normalize_token).unwrap_or("");
    let new_dir = if target.is_empty() || target == "~" {
        match home {
            Some(val) => val,
            None => {
                writeln!(stderr, "cd: HOME not set")?;
                return Ok(());
            }
        }
    } else {
        target
    };

    if let Err(e) = std::env::set_current_dir(new_dir) {
        if e.kind() == ErrorKind::NotFound {
            writeln!(stderr, "cd: {}: No such file or directory", new_dir)?;
        } else {
            writeln!(stderr, "cd: {}: {}", new_dir, e)?;
        }
    }
    Ok(())
}

const HELP_BANNER: &str = "
**********************************************************
*                                                        *
*            List of available commands                  *
*                                                        *
* 1. echo: prints the argument to the standard output    *
* 2. type: prints the type of the command                *
* 3. cd: changes the current working directory           *
* 4. pwd: prints the current working directory           *
* 5. help: prints the list of available commands         *
* 6. exit: leaves the shell                              *
*                                                        *
**********************************************************
";

/// Implementation of the `help` command.
pub fn help_cmd<W: Write>(use_color: bool, stdout: &mut W) -> Result<()> {
    writeln!(stdout, "{}", paint(HELP_BANNER, color::Magenta, use_color))?;
    Ok(())
}
