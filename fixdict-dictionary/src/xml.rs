//! Intermediate XML tree of a FIX dictionary document.
//!
//! The document is read with the quick-xml pull parser into a small owned tree
//! of [`Element`]s. This module knows nothing about FIX, it only gives the
//! conversion stages a uniform view of:
//! - element names, lower-cased so `<Fields>` and `<fields>` are the same section
//! - attributes, in declaration order, with entities already unescaped
//! - child elements, in document order
//!
//! Text, comments, CDATA, processing instructions and the XML declaration are
//! not part of a dictionary and are dropped while reading.
//! Elements nested deeper than `MAX_DEPTH` are skipped along with their
//! content.

use quick_xml::{
    Error as XmlError, Reader,
    errors::IllFormedError,
    events::{BytesStart, Event},
};


// Deepest level kept in the tree, the top level element being at level 1.
const MAX_DEPTH: usize = 16;

/// A single element of the parsed document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Parses `text` and returns the first top level element.
    ///
    /// `Ok(None)` means the document is well formed but contains no element
    /// at all (e.g. only a declaration or a comment).
    pub fn parse(text: &str) -> Result<Option<Element>, XmlError> {
        let mut reader = Reader::from_str(text);
        let mut open: Vec<Element> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) if open.len() < MAX_DEPTH => {
                    open.push(Element::from_start(&start)?);
                }
                Event::Start(start) => {
                    reader.read_to_end(start.name())?;
                }
                Event::Empty(start) if open.len() < MAX_DEPTH => {
                    let element = Element::from_start(&start)?;
                    attach(&mut open, &mut root, element);
                }
                // End names are verified against the open tag by the reader
                Event::End(_) => {
                    if let Some(element) = open.pop() {
                        attach(&mut open, &mut root, element);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.pop() {
            return Err(XmlError::IllFormed(IllFormedError::MissingEndTag(
                unclosed.name,
            )));
        }

        Ok(root)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element, XmlError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_lowercase();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Lower-cased element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of attribute `key`.
    ///
    /// Attribute names are matched exactly. An attribute present with an empty
    /// value is reported as absent, a dictionary never gives meaning to `''`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Returns the first child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.name.eq_ignore_ascii_case(name))
    }

    /// Iterates over child elements named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |child| child.name.eq_ignore_ascii_case(name))
    }
}

// Hands a completed element to its parent, or makes it the document root.
// Only the first top level element is kept.
fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    }
}
