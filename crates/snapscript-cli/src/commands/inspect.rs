//! Show the parsed nodes of a graph document

use anyhow::{Context, Result};
use snapscript_codegen::Translator;
use std::path::Path;

use super::{load_options, open_input};

/// Run the inspect command
pub fn run(config: Option<&Path>, input: &Path) -> Result<()> {
    let options = load_options(config)?;
    let reader = open_input(input)?;

    let nodes = Translator::new(options)
        .inspect(reader)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    tracing::debug!("Parsed {} nodes", nodes.len());
    println!("{}", serde_json::to_string_pretty(&nodes)?);

    Ok(())
}
