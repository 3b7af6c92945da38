use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaveOutcome {
    Written,
    Declined,
}

/// Wrap a rendered tree in a fenced code block.
pub fn fence(body: &str) -> String {
    format!("```\n{body}\n```")
}

/// Write `contents` to `path`, asking on `output` before replacing an
/// existing file. Only `y` or `yes` (any case) confirms.
pub fn save<R: BufRead, W: Write>(
    path: &Path,
    contents: &str,
    input: &mut R,
    output: &mut W,
) -> Result<SaveOutcome> {
    if path.exists() && !confirm_overwrite(path, input, output)? {
        writeln!(output, "Write failed!")?;
        return Ok(SaveOutcome::Declined);
    }

    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "saved tree");
    Ok(SaveOutcome::Written)
}

fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, input: &mut R, output: &mut W) -> Result<bool> {
    writeln!(
        output,
        "File {} already exists, do you want to overwrite it? (y/n)",
        path.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read overwrite confirmation")?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
