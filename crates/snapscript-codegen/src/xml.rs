//! Pull-style token stream over the graph document
//!
//! Wraps a `quick_xml` reader and hands out owned tokens so the parsers can
//! recurse into sub-regions without holding on to the read buffer. Only the
//! local part of element and attribute names is kept.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// An opening tag with its decoded attributes
#[derive(Debug, Clone)]
pub(crate) struct StartTag {
    /// Element local name
    pub name: String,

    /// `(local name, decoded value)`; decoding failures keep the message
    attributes: Vec<(String, std::result::Result<String, String>)>,
}

impl StartTag {
    fn from_event(event: &BytesStart<'_>) -> Result<Self> {
        let name = decode_name(event.local_name().as_ref());
        let mut attributes = Vec::new();
        for attr in event.attributes() {
            let attr = attr?;
            let key = decode_name(attr.key.local_name().as_ref());
            let value = attr
                .unescape_value()
                .map(|v| v.into_owned())
                .map_err(|e| e.to_string());
            attributes.push((key, value));
        }
        Ok(Self { name, attributes })
    }

    /// Decoded value of the attribute with the given local name
    ///
    /// An attribute that is present but cannot be decoded is an error.
    pub fn attribute(&self, name: &str) -> Result<Option<String>> {
        match self.attributes.iter().find(|(k, _)| k == name) {
            None => Ok(None),
            Some((_, Ok(value))) => Ok(Some(value.clone())),
            Some((_, Err(message))) => Err(Error::AttributeValue {
                element: self.name.clone(),
                name: name.to_string(),
                message: message.clone(),
            }),
        }
    }
}

/// One structural token of the document
#[derive(Debug)]
pub(crate) enum Token {
    /// Opening tag (empty elements are reported as a start/end pair)
    Start(StartTag),
    /// Closing tag; the reader rejects names that do not match the open
    /// element
    End,
    /// Character data; `Err` carries the decoder message
    Text(std::result::Result<String, String>),
    /// End of input
    Eof,
}

/// Full text content of a leaf element
#[derive(Debug, PartialEq)]
pub(crate) enum ElementText {
    /// Concatenated character data
    Text(String),
    /// The element held nested markup or undecodable text
    Invalid(String),
}

/// Owned-token reader over a buffered byte stream
pub(crate) struct TokenStream<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> TokenStream<R> {
    /// Wrap an input stream
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Pull the next structural token, skipping comments, processing
    /// instructions and declarations
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(Error::Xml {
                        position: self.reader.buffer_position() as u64,
                        source,
                    });
                }
            };
            let token = match event {
                Event::Start(e) => Token::Start(StartTag::from_event(&e)?),
                Event::End(_) => Token::End,
                Event::Text(e) => Token::Text(
                    e.unescape()
                        .map(|t| t.into_owned())
                        .map_err(|err| err.to_string()),
                ),
                Event::CData(e) => Token::Text(
                    String::from_utf8(e.into_inner().into_owned()).map_err(|err| err.to_string()),
                ),
                Event::Eof => Token::Eof,
                _ => continue,
            };
            return Ok(token);
        }
    }

    /// Consume everything up to and including the end tag of an element
    /// whose start tag was just read
    pub fn skip_element(&mut self, name: &str) -> Result<()> {
        let mut depth = 1usize;
        loop {
            match self.next_token()? {
                Token::Start(_) => depth += 1,
                Token::End => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: name.to_string(),
                    });
                }
            }
        }
    }

    /// Read the text content of an element whose start tag was just read
    ///
    /// Always consumes through the element's end tag. Nested markup or a
    /// decoding failure yields [`ElementText::Invalid`] rather than an
    /// error; only stream-level problems are errors.
    pub fn element_text(&mut self, name: &str) -> Result<ElementText> {
        let mut text = String::new();
        let mut problem: Option<String> = None;
        loop {
            match self.next_token()? {
                Token::Text(Ok(chunk)) => text.push_str(&chunk),
                Token::Text(Err(message)) => {
                    problem.get_or_insert(message);
                }
                Token::Start(child) => {
                    problem.get_or_insert_with(|| {
                        format!("unexpected element <{}> in text content", child.name)
                    });
                    self.skip_element(&child.name)?;
                }
                Token::End => break,
                Token::Eof => {
                    return Err(Error::UnexpectedEof {
                        element: name.to_string(),
                    });
                }
            }
        }
        Ok(match problem {
            Some(message) => ElementText::Invalid(message),
            None => ElementText::Text(text),
        })
    }
}

fn decode_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
