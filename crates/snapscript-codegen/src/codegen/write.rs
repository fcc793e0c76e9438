//! Sink-write block codegen

use super::read::FILE;
use super::{Block, literal};
use crate::ir::SourceRef;
use crate::value::ParameterMap;

/// Parameter naming the writer format
pub const FORMAT_NAME: &str = "formatName";

/// Helper for generating `ProductIO.writeProduct` blocks
pub struct WriteCodegen;

impl WriteCodegen {
    /// Write the first source to `file` in `formatName`
    ///
    /// Additional sources are ignored.
    pub fn generate(block: &mut Block<'_>, params: Option<&ParameterMap>, sources: &[SourceRef]) {
        let product = match sources {
            [] => {
                tracing::warn!("Write node has no source product");
                None
            }
            [first] => first.artifact.as_deref(),
            [first, rest @ ..] => {
                tracing::warn!(
                    "Write node has {} extra sources; only the first is written",
                    rest.len()
                );
                first.artifact.as_deref()
            }
        };

        let param = |name: &str| {
            let value = params.and_then(|p| p.get(name)).and_then(|v| v.as_text());
            if value.is_none() {
                tracing::warn!("Write node has no '{}' parameter", name);
            }
            literal::quote_opt(value.as_deref())
        };
        let file = param(FILE);
        let format_name = param(FORMAT_NAME);

        block.banner("write result to file");
        block.line(format!(
            "ProductIO.writeProduct({}, {}, {})",
            literal::identifier(product),
            file,
            format_name
        ));
        block.progress("Done writing to file.");
        block.blank();
    }
}
