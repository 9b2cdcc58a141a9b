//! Rendered element tree.
//!
//! Components build a small element tree describing what a row shows and which
//! controls are live. Hosts with a real widget layer walk the tree; tests use the
//! query helpers to assert on rendered output without a terminal.
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::ui::tree::{Element, Node, Tag};
//!
//! let node = Element::new(Tag::Div)
//!     .id("row")
//!     .child(Element::new(Tag::Span).text("hello"))
//!     .into_node();
//!
//! assert_eq!(node.find_by_id("row").map(Element::text_content).as_deref(), Some("hello"));
//! ```

use crate::ui::item_view::Gesture;
use std::collections::BTreeMap;

/// Element kinds produced by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Paragraph,
    Bold,
    /// Outbound hyperlink (`href`, `target`, `rel`).
    Anchor,
    /// In-app navigation link resolved by the host router (`to`).
    RouterLink,
    Button,
    /// Image with a `src`.
    Image,
    /// Generic plugin glyph used when no icon image exists.
    PlaceholderIcon,
    /// Loading indicator.
    Spinner,
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes, classes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
    /// Gesture emitted when the element is clicked.
    pub on_click: Option<Gesture>,
    pub disabled: bool,
}

impl Element {
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
            on_click: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds `class` only when `condition` holds.
    #[must_use]
    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn on_click(mut self, gesture: Gesture) -> Self {
        self.on_click = Some(gesture);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Simulates a click. Disabled elements emit nothing.
    #[must_use]
    pub const fn click(&self) -> Option<Gesture> {
        if self.disabled {
            None
        } else {
            self.on_click
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl Node {
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Depth-first search for the element with the given `id` attribute.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.get_attr("id") == Some(id))
    }

    /// First element, in document order, matching the predicate.
    #[must_use]
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let element = self.as_element()?;
        if predicate(element) {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.find(predicate))
    }

    /// All elements with the given tag, in document order.
    #[must_use]
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.tag == tag {
                found.push(element);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Self::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.text_content(),
        }
    }
}
