//! CLI command implementations

use anyhow::{Context, Result};
use snapscript_codegen::TranslateOptions;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub mod convert;
pub mod inspect;

/// Path argument standing for stdin/stdout
const STDIO: &str = "-";

/// Load translation options, falling back to defaults without a config file
fn load_options(config: Option<&Path>) -> Result<TranslateOptions> {
    match config {
        Some(path) => {
            tracing::info!("Loading options from {}", path.display());
            TranslateOptions::load(path).context("Failed to load options")
        }
        None => Ok(TranslateOptions::default()),
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Open the graph document
fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
