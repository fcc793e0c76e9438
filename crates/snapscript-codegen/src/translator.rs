//! Graph → script translation driver
//!
//! Streams the graph document node by node and writes each node's block as
//! soon as it is parsed. The output is flushed after every node so a
//! translation that fails part-way leaves the blocks generated so far.

use std::io::{BufRead, Write};

use crate::artifacts::ArtifactTable;
use crate::config::TranslateOptions;
use crate::error::Result;
use crate::generator::Generator;
use crate::ir::NodeIR;
use crate::parser::GraphReader;

/// Summary of one translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Nodes parsed
    pub nodes: usize,

    /// Nodes that produced a block
    pub emitted: usize,

    /// Nodes dropped for lack of an operator
    pub dropped: usize,

    /// Source references emitted as `None`
    pub unresolved_sources: usize,
}

/// Graph document translator
pub struct Translator {
    generator: Generator,
}

impl Translator {
    /// Create a translator with the given options
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            generator: Generator::new(options),
        }
    }

    /// Translate a graph document into a script
    ///
    /// Each call starts a fresh artifact numbering.
    pub fn translate<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<TranslationReport> {
        let mut reader = GraphReader::new(input);
        let mut artifacts = self.artifact_table();
        let mut report = TranslationReport::default();

        write_lines(&mut output, &self.generator.preamble())?;
        output.flush()?;

        while let Some(node) = reader.next_node(&mut artifacts)? {
            report.nodes += 1;
            report.unresolved_sources += node.unresolved_sources();

            match self.generator.generate(&node) {
                Some(lines) => {
                    tracing::debug!(
                        "Generated {} lines for node '{}' ({})",
                        lines.len(),
                        node.id.as_deref().unwrap_or_default(),
                        node.artifact
                    );
                    write_lines(&mut output, &lines)?;
                    report.emitted += 1;
                }
                None => {
                    tracing::debug!(
                        "Node '{}' has no operator; nothing generated",
                        node.id.as_deref().unwrap_or_default()
                    );
                    report.dropped += 1;
                }
            }
            output.flush()?;
        }

        Ok(report)
    }

    /// Parse a graph document without generating code
    ///
    /// Nodes carry the artifact identifiers a translation would assign.
    pub fn inspect<R: BufRead>(&self, input: R) -> Result<Vec<NodeIR>> {
        let mut reader = GraphReader::new(input);
        let mut artifacts = self.artifact_table();
        let mut nodes = Vec::new();
        while let Some(node) = reader.next_node(&mut artifacts)? {
            nodes.push(node);
        }
        Ok(nodes)
    }

    fn artifact_table(&self) -> ArtifactTable {
        ArtifactTable::new(self.generator.options().artifact_prefix.clone())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
