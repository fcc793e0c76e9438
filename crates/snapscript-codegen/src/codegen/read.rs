//! Source-read block codegen

use super::{Block, literal};
use crate::value::ParameterMap;

/// Parameter naming the product file
pub const FILE: &str = "file";

/// Helper for generating `ProductIO.readProduct` blocks
pub struct ReadCodegen;

impl ReadCodegen {
    /// Bind `artifact` to the product opened from the `file` parameter
    pub fn generate(block: &mut Block<'_>, artifact: &str, params: Option<&ParameterMap>) {
        let file = params.and_then(|p| p.get(FILE)).and_then(|v| v.as_text());
        if file.is_none() {
            tracing::warn!("Read node {} has no '{}' parameter", artifact, FILE);
        }

        block.banner("read data from file");
        block.line(format!(
            "{} = ProductIO.readProduct({})",
            artifact,
            literal::quote_opt(file.as_deref())
        ));
        block.progress("Done reading from file.");
        block.blank();
    }
}
