// Owned tree → HTML string, through html5ever's serializer.

use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever::serialize::{Serialize, Serializer, TraversalScope};
use std::io;

use super::{Element, Fragment, Node};
use crate::error::ResolverError;

impl Fragment {
    /// Serialize the fragment's nodes to an HTML string.
    pub fn to_html(&self) -> Result<String, ResolverError> {
        let mut bytes = Vec::new();
        serialize(&mut bytes, self, SerializeOpts::default())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Serialize for Fragment {
    fn serialize<S>(&self, serializer: &mut S, _traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        // A fragment has no node of its own; every scope serializes the children.
        self.children
            .iter()
            .try_for_each(|child| write_node(serializer, child))
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match traversal_scope {
            TraversalScope::IncludeNode => write_element(serializer, self),
            TraversalScope::ChildrenOnly(_) => self
                .children
                .iter()
                .try_for_each(|child| write_node(serializer, child)),
        }
    }
}

fn write_node<S: Serializer>(serializer: &mut S, node: &Node) -> io::Result<()> {
    match node {
        Node::Element(element) => write_element(serializer, element),
        Node::Text(text) => serializer.write_text(text),
        Node::Comment(text) => serializer.write_comment(text),
    }
}

fn write_element<S: Serializer>(serializer: &mut S, element: &Element) -> io::Result<()> {
    let attrs = element
        .attrs
        .iter()
        .map(|attr| (&attr.name, attr.value.as_str()));
    serializer.start_elem(element.name.clone(), attrs)?;
    for child in &element.children {
        write_node(serializer, child)?;
    }
    serializer.end_elem(element.name.clone())
}
