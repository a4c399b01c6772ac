mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use minishell::{Shell, ShellStatus, input};
use std::{
    io::{self, Write},
    process,
};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let shell = Shell::new(cli.to_config());
    info!(config = ?shell.config(), "shell started");

    if let Some(line) = cli.command.as_deref() {
        let status = run_line(&shell, line)?;
        if let ShellStatus::Exit(code) = status {
            process::exit(code);
        }
        return Ok(());
    }

    let interactive = termion::is_tty(&io::stdin()) && termion::is_tty(&io::stdout());
    debug!(interactive, "starting read loop");

    loop {
        let line = if interactive {
            input::read_line_raw(&shell.config().prompt, |prefix| shell.completions(prefix))
                .context("failed to read input")?
        } else {
            input::read_line_buffered(&mut io::stdin().lock()).context("failed to read input")?
        };

        let Some(line) = line else {
            return Ok(());
        };

        match run_line(&shell, &line)? {
            ShellStatus::Exit(code) => process::exit(code),
            ShellStatus::Continue => continue,
        }
    }
}

fn run_line(shell: &Shell, line: &str) -> Result<ShellStatus> {
    let mut stdout = io::stdout().lock();
    let status = shell
        .handle_line(line, &mut stdout, io::stderr())
        .with_context(|| format!("failed to run `{}`", line))?;
    stdout.flush()?;
    Ok(status)
}
