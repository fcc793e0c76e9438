//! Intermediate representation of a graph node
//!
//! A node lives only between being parsed and being emitted; the graph as
//! a whole is never materialized.

use serde::Serialize;

use crate::value::ParameterMap;

/// Operator name of the source-read node
pub const READ_OPERATOR: &str = "Read";

/// Operator name of the sink-write node
pub const WRITE_OPERATOR: &str = "Write";

/// One parsed `<node>` element
#[derive(Debug, Clone, Serialize)]
pub struct NodeIR {
    /// Document-local id, if the node carried one
    pub id: Option<String>,

    /// Script variable bound to this node's result
    pub artifact: String,

    /// Operator to invoke; a node without one produces no statements
    pub operator: Option<String>,

    /// Parameter block, if the node had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterMap>,

    /// Source references in document order
    pub sources: Vec<SourceRef>,
}

impl NodeIR {
    /// Create an empty node bound to an artifact identifier
    pub fn new(id: Option<String>, artifact: impl Into<String>) -> Self {
        Self {
            id,
            artifact: artifact.into(),
            operator: None,
            parameters: None,
            sources: Vec::new(),
        }
    }

    /// How this node is emitted, `None` when it has no operator
    pub fn kind(&self) -> Option<OperatorKind> {
        self.operator.as_deref().map(OperatorKind::from_name)
    }

    /// Number of source references that did not resolve
    pub fn unresolved_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.artifact.is_none()).count()
    }
}

/// A reference from a node to one of its inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRef {
    /// Referenced node id as written in the document
    pub refid: Option<String>,

    /// Resolved identifier; `None` when the id was not seen before
    pub artifact: Option<String>,
}

/// Emission strategy selected by operator name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Open a product from a file
    Read,
    /// Write a product to a file
    Write,
    /// Any other operator, invoked generically by name
    Generic,
}

impl OperatorKind {
    /// Classify an operator name
    pub fn from_name(name: &str) -> Self {
        match name {
            READ_OPERATOR => OperatorKind::Read,
            WRITE_OPERATOR => OperatorKind::Write,
            _ => OperatorKind::Generic,
        }
    }
}
