// Owned HTML tree for one rich-text field.
//
// html5ever parses into an rcdom, which is immediately converted into this
// tree. Every node has exactly one owner, so the resolver mutates it through
// plain `&mut` borrows instead of shared `RefCell` handles. The tree
// serializes back through html5ever's serializer.

mod parse;
mod serialize;

use html5ever::{ns, LocalName, QualName};

pub use parse::parse_fragment;

/// A parsed HTML fragment: a sequence of top-level nodes without a wrapper.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub children: Vec<Node>,
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element with its ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: QualName,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A name/value attribute pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Create an attribute without a namespace.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        }
    }
}

impl Node {
    /// Borrow the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Number of direct children (always zero for text and comments).
    pub fn child_count(&self) -> usize {
        match self {
            Node::Element(element) => element.children.len(),
            _ => 0,
        }
    }
}

impl Element {
    /// Create an HTML element with no attributes or children.
    pub fn new(tag: &str) -> Self {
        Self {
            name: html_name(tag),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Local tag name (`"a"`, `"img"`, ...).
    pub fn tag(&self) -> &str {
        self.name.local.as_ref()
    }

    /// Value of the first attribute with the given local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Overwrite an existing attribute. Returns `false` (and changes nothing)
    /// when the element has no such attribute.
    pub fn set_attr(&mut self, name: &str, value: &str) -> bool {
        match self
            .attrs
            .iter_mut()
            .find(|attr| attr.name.local.as_ref() == name)
        {
            Some(attr) => {
                attr.value.clear();
                attr.value.push_str(value);
                true
            }
            None => false,
        }
    }

    /// Append an attribute at the end of the attribute list.
    pub fn push_attr(&mut self, name: &str, value: &str) {
        self.attrs.push(Attribute::new(name, value));
    }

    /// Add space-separated classes to the `class` attribute, creating it if needed.
    pub fn append_class(&mut self, classes: &str) {
        if classes.is_empty() {
            return;
        }
        match self
            .attrs
            .iter_mut()
            .find(|attr| attr.name.local.as_ref() == "class")
        {
            Some(attr) if attr.value.trim().is_empty() => attr.value = classes.to_string(),
            Some(attr) => {
                attr.value.push(' ');
                attr.value.push_str(classes);
            }
            None => self.push_attr("class", classes),
        }
    }

    /// Change the tag name, keeping attributes and children.
    pub fn rename(&mut self, tag: &str) {
        self.name = html_name(tag);
    }

    /// Splice another element into this position: tag, attributes and
    /// children are all taken from `other`.
    pub fn replace_with(&mut self, other: Element) {
        let Element {
            name,
            attrs,
            children,
        } = other;
        self.name = name;
        self.attrs = attrs;
        self.children = children;
    }

    /// Value of the first child when it is a text node.
    pub fn first_text(&self) -> Option<&str> {
        match self.children.first() {
            Some(Node::Text(text)) => Some(text),
            _ => None,
        }
    }
}

fn html_name(tag: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Element {
        let mut element = Element::new("a");
        element.push_attr("data-item-id", "x");
        element.push_attr("href", "");
        element.children.push(Node::Text("Joel".into()));
        element
    }

    #[test]
    fn test_attr_lookup() {
        let element = anchor();
        assert_eq!(element.attr("data-item-id"), Some("x"));
        assert_eq!(element.attr("href"), Some(""));
        assert!(!element.has_attr("title"));
    }

    #[test]
    fn test_set_attr_only_overwrites() {
        let mut element = anchor();
        assert!(element.set_attr("href", "/joel"));
        assert!(!element.set_attr("title", "Joel"));
        assert_eq!(element.attr("href"), Some("/joel"));
        assert_eq!(element.attrs.len(), 2);
    }

    #[test]
    fn test_append_class() {
        let mut element = Element::new("p");
        element.append_class("a b");
        assert_eq!(element.attr("class"), Some("a b"));
        element.append_class("c");
        assert_eq!(element.attr("class"), Some("a b c"));
        element.append_class("");
        assert_eq!(element.attr("class"), Some("a b c"));
    }

    #[test]
    fn test_replace_with() {
        let mut element = anchor();
        let mut replacement = Element::new("test");
        replacement.push_attr("id", "t");
        replacement.children.push(Node::Text("slug".into()));
        element.replace_with(replacement);

        assert_eq!(element.tag(), "test");
        assert_eq!(element.attr("id"), Some("t"));
        assert!(!element.has_attr("href"));
        assert_eq!(element.first_text(), Some("slug"));
    }

    #[test]
    fn test_first_text_requires_text_node() {
        let mut element = Element::new("a");
        element.children.push(Node::Element(Element::new("strong")));
        element.children.push(Node::Text("later".into()));
        assert_eq!(element.first_text(), None);
    }
}
