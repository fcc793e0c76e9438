//! Error types for graph translation

use thiserror::Error;

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a translation
///
/// Problems confined to a single parameter never show up here; they are
/// logged and the parameter is dropped.
#[derive(Error, Debug)]
pub enum Error {
    /// The graph document is not well-formed XML
    #[error("malformed graph document at byte {position}: {source}")]
    Xml {
        /// Byte offset where the reader stopped
        position: u64,
        /// Underlying reader error
        #[source]
        source: quick_xml::Error,
    },

    /// An element carries a syntactically broken attribute
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// An attribute the translation depends on could not be decoded
    #[error("cannot decode attribute '{name}' on <{element}>: {message}")]
    AttributeValue {
        /// Element carrying the attribute
        element: String,
        /// Attribute local name
        name: String,
        /// Decoder message
        message: String,
    },

    /// The document ended while an element was still open
    #[error("unexpected end of graph document inside <{element}>")]
    UnexpectedEof {
        /// Innermost element that was left open
        element: String,
    },

    /// IO error on the input or output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },
}
