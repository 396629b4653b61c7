//! Interactive editing support
//!
//! Opens $EDITOR on a temp markdown file whose first line is the
//! article title. While the editor runs, the autosave task reads the
//! same file for its periodic draft snapshots.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Create the temp file the editor session works on
///
/// Layout: `# Title`, a blank line, then the body.
pub fn create_workfile(title: &str, content: &str) -> Result<PathBuf> {
    let temp_path = env::temp_dir().join(format!("quill_edit_{}.md", std::process::id()));
    let initial = format!("# {}\n\n{}", title, content);
    fs::write(&temp_path, initial)
        .with_context(|| format!("Failed to create temp file: {:?}", temp_path))?;
    Ok(temp_path)
}

/// Open the user's preferred editor on a file, blocking until it exits
///
/// Runs inside `spawn_blocking` so the autosave task keeps ticking
/// while the editor is open.
pub async fn run_editor(path: &Path) -> Result<()> {
    let editor = find_editor()?;
    let path = path.to_path_buf();

    let status = tokio::task::spawn_blocking(move || {
        Command::new(&editor)
            .arg(&path)
            .status()
            .with_context(|| format!("Failed to run editor: {}", editor))
    })
    .await
    .context("Editor task panicked")??;

    if !status.success() {
        bail!("Editor exited with non-zero status. Check that your editor is configured correctly.");
    }
    Ok(())
}

/// Split an edited workfile into (title, content)
///
/// The first non-empty line is the title, with a leading `# `
/// stripped; everything after it is the body.
pub fn parse_workfile(text: &str) -> (String, String) {
    let mut lines = text.lines();
    let mut title = String::new();
    for line in lines.by_ref() {
        if !line.trim().is_empty() {
            title = line.trim().trim_start_matches("# ").trim().to_string();
            break;
        }
    }
    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    (title, content)
}

/// Read and parse the current workfile state, if readable
pub fn read_workfile(path: &Path) -> Option<(String, String)> {
    let text = fs::read_to_string(path).ok()?;
    Some(parse_workfile(&text))
}

/// Remove the workfile, ignoring errors
pub fn cleanup_workfile(path: &Path) {
    let _ = fs::remove_file(path);
}

/// Find the user's preferred editor
fn find_editor() -> Result<String> {
    // Check environment variables
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(visual) = env::var("VISUAL") {
        if !visual.is_empty() {
            return Ok(visual);
        }
    }

    // Try common editors
    let common_editors = ["nano", "vim", "vi", "emacs", "code", "notepad"];

    for editor in common_editors {
        if command_exists(editor) {
            return Ok(editor.to_string());
        }
    }

    bail!(
        "No editor found. Set $EDITOR environment variable.\n\
         Example: export EDITOR=nano"
    )
}

/// Check if a command exists in PATH
fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Prompt for confirmation
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    // Check if stdin is a TTY
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
