use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Pipe `text` into the configured clipboard command
///
/// The command line is split on whitespace (`xclip -selection clipboard`).
/// Stdin is closed after writing; the child is not waited on.
pub fn copy_to_clipboard(command_line: &str, text: &str) -> Result<()> {
    let mut parts = command_line.split_whitespace();
    let program = parts
        .next()
        .context("clipboard_command is empty")?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to execute clipboard command '{}'", command_line))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .context("Failed to write to clipboard command")?;
        // Close stdin to signal EOF
        drop(stdin);
    }

    log::debug!("Copied to clipboard via {}: {}", command_line, text);
    Ok(())
}
