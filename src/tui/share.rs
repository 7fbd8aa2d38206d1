//! Hands share text to an external command (clipboard tool, messenger CLI).
//!
//! The command line is split on whitespace; the text goes to its stdin.
//! No shell is involved.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use log::{info, warn};

#[derive(Debug)]
pub enum ShareError {
    EmptyCommand,
    Spawn { program: String, source: std::io::Error },
    Io(std::io::Error),
    Exit { program: String, code: Option<i32> },
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::EmptyCommand => write!(f, "share command is empty"),
            ShareError::Spawn { program, source } => write!(f, "could not start {program}: {source}"),
            ShareError::Io(e) => write!(f, "share I/O error: {e}"),
            ShareError::Exit { program, code: Some(code) } => {
                write!(f, "{program} exited with status {code}")
            }
            ShareError::Exit { program, code: None } => write!(f, "{program} was terminated"),
        }
    }
}

impl std::error::Error for ShareError {}

/// Run `command_line` with `text` on stdin and wait for it. Returns the program name.
pub fn run_share_command(command_line: &str, text: &str) -> Result<String, ShareError> {
    let mut parts = command_line.split_whitespace();
    let program = parts.next().ok_or(ShareError::EmptyCommand)?.to_string();

    let mut child = Command::new(&program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ShareError::Spawn {
            program: program.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // A program that exits without reading stdin is judged by its exit status.
        if let Err(e) = stdin.write_all(text.as_bytes())
            && e.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(ShareError::Io(e));
        }
    }
    let status = child.wait().map_err(ShareError::Io)?;
    if !status.success() {
        warn!("Share command {} failed: {:?}", program, status.code());
        return Err(ShareError::Exit {
            program,
            code: status.code(),
        });
    }
    info!("Shared {} bytes via {}", text.len(), program);
    Ok(program)
}
