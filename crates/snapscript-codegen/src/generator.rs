//! Python script generation
//!
//! Turns one [`NodeIR`] at a time into lines of snappy Python. Generation
//! is pure: the same node and options always yield the same lines.

use crate::codegen::{Block, OperatorCodegen, ReadCodegen, WriteCodegen};
use crate::config::TranslateOptions;
use crate::ir::{NodeIR, OperatorKind};

/// Script generator
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: TranslateOptions,
}

impl Generator {
    /// Create a generator with the given options
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Imports and runtime bootstrap emitted once at the top of the script
    pub fn preamble(&self) -> Vec<String> {
        vec![
            format!(
                "from {} import ProductIO, HashMap, GPF, jpy",
                self.options.snappy_module
            ),
            "import os, sys, gc".to_string(),
            "from osgeo.osr import SpatialReference".to_string(),
            String::new(),
            "GPF.getDefaultInstance().getOperatorSpiRegistry().loadOperatorSpis()".to_string(),
            "HashMap = jpy.get_type('java.util.HashMap')".to_string(),
            String::new(),
            "# generated operations follow".to_string(),
        ]
    }

    /// Statements for one node, `None` if the node has no operator
    pub fn generate(&self, node: &NodeIR) -> Option<Vec<String>> {
        let operator = node.operator.as_deref()?;
        let params = node.parameters.as_ref();
        let mut block = Block::new(&self.options);

        match OperatorKind::from_name(operator) {
            OperatorKind::Read => ReadCodegen::generate(&mut block, &node.artifact, params),
            OperatorKind::Write => WriteCodegen::generate(&mut block, params, &node.sources),
            OperatorKind::Generic => OperatorCodegen::generate(
                &mut block,
                operator,
                &node.artifact,
                params,
                &node.sources,
            ),
        }

        Some(block.into_lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PythonVersion;
    use crate::ir::SourceRef;
    use crate::value::{ParamValue, ParameterMap};

    fn node(id: &str, artifact: &str, operator: Option<&str>) -> NodeIR {
        let mut node = NodeIR::new(Some(id.to_string()), artifact);
        node.operator = operator.map(str::to_string);
        node
    }

    #[test]
    fn test_preamble() {
        let lines = Generator::default().preamble();
        assert_eq!(lines[0], "from snappy import ProductIO, HashMap, GPF, jpy");
        assert_eq!(lines.last().unwrap(), "# generated operations follow");
    }

    #[test]
    fn test_preamble_uses_configured_module() {
        let options = TranslateOptions {
            snappy_module: "esa_snappy".to_string(),
            ..Default::default()
        };
        let lines = Generator::new(options).preamble();
        assert_eq!(lines[0], "from esa_snappy import ProductIO, HashMap, GPF, jpy");
    }

    #[test]
    fn test_no_operator_generates_nothing() {
        let generator = Generator::default();
        assert!(generator.generate(&node("x", "artifact1", None)).is_none());
    }

    #[test]
    fn test_dispatch_by_operator_name() {
        let generator = Generator::default();

        let mut read = node("Read", "artifact1", Some("Read"));
        let mut params = ParameterMap::new();
        params.insert("file", ParamValue::Text("a.dat".into()));
        read.parameters = Some(params);
        let lines = generator.generate(&read).unwrap();
        assert!(lines.contains(&"artifact1 = ProductIO.readProduct('a.dat')".to_string()));

        let mut write = node("Write", "artifact2", Some("Write"));
        write.sources.push(SourceRef {
            refid: Some("Read".into()),
            artifact: Some("artifact1".into()),
        });
        let lines = generator.generate(&write).unwrap();
        assert!(lines[3].starts_with("ProductIO.writeProduct(artifact1, "));

        let subset = node("Subset", "artifact3", Some("Subset"));
        let lines = generator.generate(&subset).unwrap();
        assert_eq!(lines[1], "# perform Subset");
    }

    #[test]
    fn test_python3_progress() {
        let options = TranslateOptions {
            python: PythonVersion::Python3,
            ..Default::default()
        };
        let generator = Generator::new(options);
        let lines = generator
            .generate(&node("Sub", "artifact1", Some("Subset")))
            .unwrap();
        assert!(lines.contains(&"print('Subset is done.')".to_string()));
    }
}
