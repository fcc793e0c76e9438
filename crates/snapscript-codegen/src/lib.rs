//! snapscript code generation
//!
//! This crate translates processing-graph XML documents into Python
//! scripts that rebuild the same pipeline through the snappy API.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌─────────┐     ┌─────────┐     ┌─────────┐     ┌─────────┐
//! │  Graph  │────▶│  Nodes  │────▶│  Lines  │────▶│ Script  │
//! │   XML   │     │ (Parse) │     │  (Gen)  │     │ (Write) │
//! └─────────┘     └─────────┘     └─────────┘     └─────────┘
//! ```
//!
//! The document is never held in memory as a whole: nodes are parsed,
//! emitted and dropped one at a time.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use snapscript_codegen::{TranslateOptions, Translator};
//!
//! let input = BufReader::new(File::open("graph.xml")?);
//! let output = File::create("graph.py")?;
//! let report = Translator::new(TranslateOptions::default()).translate(input, output)?;
//! println!("{} blocks generated", report.emitted);
//! # Ok::<(), snapscript_codegen::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod artifacts;
pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
pub mod ir;
pub mod parser;
pub mod translator;
pub mod value;
mod xml;

pub use artifacts::ArtifactTable;
pub use config::{PythonVersion, TranslateOptions};
pub use error::{Error, Result};
pub use generator::Generator;
pub use ir::{NodeIR, OperatorKind, SourceRef};
pub use parser::GraphReader;
pub use translator::{TranslationReport, Translator};
pub use value::{BandDescriptor, BandMap, ParamValue, ParameterMap};
