//! External command execution for keeping the protobufs checkout current.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Render a command line for logs and error messages.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion, failing on a non-zero exit status.
pub fn run_command(program: &str, args: &[&str], dir: Option<&Path>) -> Result<()> {
    let line = command_line(program, args);
    info!(command = %line, "executing command");

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .with_context(|| format!("failed to start `{line}`"))?;
    if !status.success() {
        bail!("`{line}` exited with {status}");
    }
    Ok(())
}

/// Clone the repository when missing, then switch to `branch` and pull.
pub fn ensure_checkout(remote: &str, repo_dir: &Path, branch: &str) -> Result<()> {
    if repo_dir.is_dir() {
        info!(path = %repo_dir.display(), "detected existing protobufs");
    } else {
        info!(path = %repo_dir.display(), "no protobufs detected");
        let target = repo_dir.to_string_lossy();
        run_command("git", &["clone", remote, &*target], None)?;
    }

    run_command("git", &["switch", branch], Some(repo_dir))?;
    run_command("git", &["pull", "--rebase"], Some(repo_dir))?;
    Ok(())
}
