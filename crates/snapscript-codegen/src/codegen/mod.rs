//! Operator-specific script generation helpers
//!
//! Each helper appends the statements of one block kind to a [`Block`].
//! The block takes care of the parts every kind shares: the banner, the
//! progress `print` in the configured dialect and the trailing blank line.

pub mod bands;
pub mod literal;
pub mod operator;
pub mod read;
pub mod write;

pub use bands::BandsCodegen;
pub use operator::OperatorCodegen;
pub use read::ReadCodegen;
pub use write::WriteCodegen;

use crate::config::{PythonVersion, TranslateOptions};

const BANNER: &str = "####################";

/// Lines of one generated statement block
#[derive(Debug)]
pub struct Block<'a> {
    options: &'a TranslateOptions,
    lines: Vec<String>,
}

impl<'a> Block<'a> {
    /// Start an empty block
    pub fn new(options: &'a TranslateOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    /// Append one line
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an empty line
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append a three-line comment banner
    pub fn banner(&mut self, title: &str) {
        self.line(BANNER);
        self.line(format!("# {}", title));
        self.line(BANNER);
    }

    /// Append a progress message, unless progress output is disabled
    pub fn progress(&mut self, message: &str) {
        if !self.options.progress_messages {
            return;
        }
        let quoted = literal::quote(message);
        match self.options.python {
            PythonVersion::Python2 => self.line(format!("print {}", quoted)),
            PythonVersion::Python3 => self.line(format!("print({})", quoted)),
        }
    }

    /// Finish the block
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
