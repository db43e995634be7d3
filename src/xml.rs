//! Read-only XML tree of a parsed document.
//!
//! # Name matching
//! Lookups by name compare ***local names*** and ignore namespace prefixes.
//! FB2 files inconsistently declare or omit namespaces
//! (`<FictionBook>`, `<fb:FictionBook>`, `l:href`, `xlink:href`),
//! so `find("book-title")` matches `<book-title>` and `<fb:book-title>` alike.

use crate::util::str::StrExt;
use std::slice::Iter as SliceIter;

/// A node within an [`Element`]: either a child element or text.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    /// Unescaped text, including CDATA sections.
    Text(String),
}

/// Representation of an XML element, where its name, attributes
/// and children are accessible.
///
/// # Examples
/// - Navigating the tree of a book:
/// ```
/// # use fb2reader::{Fb2, Fb2Settings};
/// # fn main() -> fb2reader::ebook::errors::EbookResult<()> {
/// let fb2 = Fb2::from_bytes(
///     br##"<FictionBook xmlns:l="http://www.w3.org/1999/xlink">
///           <description><title-info>
///             <book-title>T</book-title>
///             <coverpage><image l:href="#cover.jpg"/></coverpage>
///           </title-info></description>
///         </FictionBook>"##,
///     Fb2Settings::default(),
/// )?;
/// let image = fb2.root().find("coverpage").and_then(|c| c.find("image")).unwrap();
///
/// assert_eq!(Some("#cover.jpg"), image.get_attribute("href"));
/// assert_eq!("T", fb2.root().find("book-title").unwrap().text());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(name: String, attributes: Vec<Attribute>) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// The qualified name, including a namespace prefix if present (e.g., `fb:body`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its namespace prefix (e.g., `body`).
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    pub fn is_local_name(&self, local_name: &str) -> bool {
        self.local_name() == local_name
    }

    /// Retrieve all attributes
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Retrieve the value of the first attribute with the given local name.
    /// Namespace/prefix is ignored (`href` matches `l:href`).
    pub fn get_attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.local_name() == local_name)
            .map(Attribute::value)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Direct child elements with the given local name, in document order.
    pub fn children_by_name<'a>(
        &'a self,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements()
            .filter(move |child| child.is_local_name(local_name))
    }

    /// The first direct child element with the given local name.
    pub fn get_child(&self, local_name: &str) -> Option<&Element> {
        self.child_elements()
            .find(|child| child.is_local_name(local_name))
    }

    /// All descendant elements (excluding `self`) in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// The first descendant element with the given local name (depth-first, document order).
    pub fn find(&self, local_name: &str) -> Option<&Element> {
        self.descendants()
            .find(|element| element.is_local_name(local_name))
    }

    /// All descendant elements with the given local name in document order.
    ///
    /// Each call starts a fresh traversal, so repeated calls yield identical sequences.
    pub fn find_all<'a>(&'a self, local_name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants()
            .filter(move |element| element.is_local_name(local_name))
    }

    /// Concatenation of all descendant text nodes in document order.
    ///
    /// Whitespace is kept exactly as found in the document.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(value) => text.push_str(value),
                Node::Element(element) => element.collect_text(text),
            }
        }
    }
}

/// Representation of an XML attribute, where its name and
/// (unescaped) value are accessible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The qualified name, including a namespace prefix if present (e.g., `l:href`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its namespace prefix (e.g., `href`).
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Depth-first (pre-order) iterator over descendant elements.
///
/// See [`Element::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    stack: Vec<SliceIter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
