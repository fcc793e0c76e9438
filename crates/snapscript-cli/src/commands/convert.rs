//! Convert a graph document to a script

use anyhow::{Context, Result, bail};
use snapscript_codegen::{PythonVersion, TranslateOptions, Translator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{is_stdio, load_options, open_input};

/// Command-line overrides applied on top of the loaded options
#[derive(Debug, Default)]
pub struct Overrides {
    /// Force Python 3 print calls
    pub python3: bool,
    /// Replacement snappy module
    pub module: Option<String>,
    /// Replacement artifact prefix
    pub prefix: Option<String>,
    /// Drop progress prints
    pub no_progress: bool,
}

impl Overrides {
    fn apply(self, options: &mut TranslateOptions) {
        if self.python3 {
            options.python = PythonVersion::Python3;
        }
        if let Some(module) = self.module {
            options.snappy_module = module;
        }
        if let Some(prefix) = self.prefix {
            options.artifact_prefix = prefix;
        }
        if self.no_progress {
            options.progress_messages = false;
        }
    }
}

/// Run the convert command
pub fn run(
    config: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    overrides: Overrides,
) -> Result<()> {
    let mut options = load_options(config)?;
    overrides.apply(&mut options);
    options.validate().context("Invalid options")?;

    let output = output_path(input, output)?;
    let reader = open_input(input)?;
    let writer = open_output(&output)?;

    tracing::info!("Converting {} → {}", input.display(), output.display());

    let report = Translator::new(options)
        .translate(reader, writer)
        .with_context(|| format!("Conversion of {} failed", input.display()))?;

    tracing::info!(
        "✓ {} nodes, {} blocks generated, {} without operator",
        report.nodes,
        report.emitted,
        report.dropped
    );
    if report.unresolved_sources > 0 {
        tracing::warn!(
            "{} source reference(s) did not resolve and were emitted as None",
            report.unresolved_sources
        );
    }

    Ok(())
}

/// Explicit output, or the input path with a `.py` extension
///
/// The output must not be the input: creating it would truncate the graph
/// before it is read.
fn output_path(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None if is_stdio(input) => PathBuf::from(super::STDIO),
        None => input.with_extension("py"),
    };
    if !is_stdio(&path) && same_file(input, &path) {
        bail!(
            "Output {} would overwrite the input graph; pass an explicit output path",
            path.display()
        );
    }
    Ok(path)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
