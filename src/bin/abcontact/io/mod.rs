mod infer;

pub use infer::{input as infer_input_format, output as infer_output_format};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use abcontact::io::Format;

/// One report to produce: a format and a file, or stdout when `path` is `None`.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    pub path: Option<PathBuf>,
    pub format: Format,
}

impl OutputSpec {
    /// File name for progress lines, `stdout` for piped output.
    pub fn label(&self) -> String {
        match &self.path {
            Some(p) => p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string()),
            None => "stdout".to_string(),
        }
    }
}

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

/// Display label for an input path, `stdin` when reading from a pipe.
pub fn input_label(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

/// Opens the structure file, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        return Ok(Box::new(BufReader::new(io::stdin().lock())));
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open structure file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Creates a report file, or writes to stdout when no path is given.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
