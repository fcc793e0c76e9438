//! Graph document parser
//!
//! Walks the document one node at a time. Each `<node>` directly under the
//! root is parsed into a [`NodeIR`]; everything else (including the
//! presentation section some editors append) is skipped. Parsing a node
//! consumes exactly its own sub-region, so the reader never looks ahead
//! past the node being handed out.

use std::io::BufRead;

use crate::artifacts::ArtifactTable;
use crate::error::{Error, Result};
use crate::ir::{NodeIR, SourceRef};
use crate::value::{BandDescriptor, BandMap, ParamValue, ParameterMap, TARGET_BANDS};
use crate::xml::{ElementText, Token, TokenStream};

const NODE: &str = "node";
const OPERATOR: &str = "operator";
const SOURCES: &str = "sources";
const PARAMETERS: &str = "parameters";
const SOURCE_PREFIX: &str = "sourceProduct";
const TARGET_BAND: &str = "targetBand";

/// Streaming reader yielding one node at a time
pub struct GraphReader<R> {
    tokens: TokenStream<R>,
    depth: usize,
}

impl<R: BufRead> GraphReader<R> {
    /// Create a reader over a graph document
    pub fn new(input: R) -> Self {
        Self {
            tokens: TokenStream::new(input),
            depth: 0,
        }
    }

    /// Parse the next node, assigning its artifact identifier
    ///
    /// Returns `Ok(None)` once the document is exhausted.
    pub fn next_node(&mut self, artifacts: &mut ArtifactTable) -> Result<Option<NodeIR>> {
        loop {
            match self.tokens.next_token()? {
                Token::Start(tag) => {
                    if self.depth == 0 {
                        self.depth = 1;
                    } else if self.depth == 1 && tag.name == NODE {
                        let id = tag.attribute("id")?;
                        let artifact = artifacts.assign(id.as_deref());
                        let node = NodeIR::new(id, artifact);
                        return self.parse_node(node, artifacts).map(Some);
                    } else {
                        self.tokens.skip_element(&tag.name)?;
                    }
                }
                Token::End => self.depth = self.depth.saturating_sub(1),
                Token::Text(_) => {}
                Token::Eof => return Ok(None),
            }
        }
    }

    fn parse_node(&mut self, mut node: NodeIR, artifacts: &ArtifactTable) -> Result<NodeIR> {
        loop {
            match self.tokens.next_token()? {
                Token::Start(child) => match child.name.as_str() {
                    OPERATOR => node.operator = self.parse_operator()?,
                    SOURCES => self.parse_sources(&mut node, artifacts)?,
                    PARAMETERS => node.parameters = Some(self.parse_parameters()?),
                    _ => self.tokens.skip_element(&child.name)?,
                },
                Token::End => return Ok(node),
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: NODE.to_string(),
                    });
                }
            }
        }
    }

    fn parse_operator(&mut self) -> Result<Option<String>> {
        match self.tokens.element_text(OPERATOR)? {
            ElementText::Text(text) => {
                let name = text.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            ElementText::Invalid(reason) => {
                tracing::info!("Ignoring unreadable operator name: {}", reason);
                Ok(None)
            }
        }
    }

    fn parse_sources(&mut self, node: &mut NodeIR, artifacts: &ArtifactTable) -> Result<()> {
        loop {
            match self.tokens.next_token()? {
                Token::Start(child) => {
                    if child.name.starts_with(SOURCE_PREFIX) {
                        let refid = child.attribute("refid")?;
                        let artifact = refid
                            .as_deref()
                            .and_then(|r| artifacts.resolve(r))
                            .map(str::to_string);
                        if artifact.is_none() {
                            tracing::warn!(
                                "Source '{}' of node '{}' does not refer to an earlier node",
                                refid.as_deref().unwrap_or("<missing refid>"),
                                node.id.as_deref().unwrap_or(node.artifact.as_str())
                            );
                        }
                        node.sources.push(SourceRef { refid, artifact });
                    }
                    self.tokens.skip_element(&child.name)?;
                }
                Token::End => return Ok(()),
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: SOURCES.to_string(),
                    });
                }
            }
        }
    }

    fn parse_parameters(&mut self) -> Result<ParameterMap> {
        let mut params = ParameterMap::new();
        loop {
            match self.tokens.next_token()? {
                Token::Start(child) if child.name == TARGET_BANDS => {
                    let bands = self.parse_target_bands()?;
                    params.insert(TARGET_BANDS, ParamValue::Bands(bands));
                }
                Token::Start(child) => match self.tokens.element_text(&child.name)? {
                    ElementText::Text(text) if text.trim().is_empty() => {
                        tracing::info!(
                            "Skipping element '{}' because its value is empty.",
                            child.name
                        );
                    }
                    ElementText::Text(text) => {
                        let value = ParamValue::coerce(&text);
                        params.insert(child.name, value);
                    }
                    ElementText::Invalid(reason) => {
                        tracing::info!(
                            "Skipping element '{}' due to parsing error '{}'.",
                            child.name,
                            reason
                        );
                    }
                },
                Token::End => return Ok(params),
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: PARAMETERS.to_string(),
                    });
                }
            }
        }
    }

    fn parse_target_bands(&mut self) -> Result<BandMap> {
        let mut bands = BandMap::new();
        loop {
            match self.tokens.next_token()? {
                Token::Start(child) if child.name == TARGET_BAND => {
                    let band = self.parse_band()?;
                    let name = bands.push(band);
                    tracing::debug!("Parsed {}", name);
                }
                Token::Start(child) => self.tokens.skip_element(&child.name)?,
                Token::End => return Ok(bands),
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: TARGET_BANDS.to_string(),
                    });
                }
            }
        }
    }

    fn parse_band(&mut self) -> Result<BandDescriptor> {
        let mut band = BandDescriptor::default();
        loop {
            match self.tokens.next_token()? {
                Token::Start(field) => match self.tokens.element_text(&field.name)? {
                    ElementText::Text(text) if text.trim().is_empty() => {}
                    ElementText::Text(text) => {
                        if !band.set_field(&field.name, text) {
                            tracing::debug!("Ignoring band field '{}'", field.name);
                        }
                    }
                    ElementText::Invalid(reason) => {
                        tracing::info!(
                            "Skipping band field '{}' due to parsing error '{}'.",
                            field.name,
                            reason
                        );
                    }
                },
                Token::End => return Ok(band),
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: TARGET_BAND.to_string(),
                    });
                }
            }
        }
    }
}
