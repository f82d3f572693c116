// HTML string → owned tree.
//
// Fragment parsing uses a `<body>` context element, the way rich-text values
// are rendered by consumers. The rcdom produced by html5ever is walked once and
// converted; doctypes and processing instructions are dropped.

use html5ever::tendril::TendrilSink;
use html5ever::{local_name, ns, parse_fragment as html5ever_parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{Attribute, Element, Fragment, Node};

/// Parse an HTML fragment into an owned tree.
///
/// html5ever recovers from any malformed input, so this never fails.
pub fn parse_fragment(html: &str) -> Fragment {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let dom = html5ever_parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new(), false)
        .from_utf8()
        .one(html.as_bytes());

    // Fragment parsing puts the parsed nodes under a synthetic <html> root.
    let document = dom.document.children.borrow();
    let root = document
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }));

    let children = match root {
        Some(root) => convert_all(root),
        None => Vec::new(),
    };
    Fragment { children }
}

fn convert_all(handle: &Handle) -> Vec<Node> {
    handle.children.borrow().iter().filter_map(convert).collect()
}

fn convert(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| Attribute {
                    name: attr.name.clone(),
                    value: attr.value.to_string(),
                })
                .collect();
            Some(Node::Element(Element {
                name: name.clone(),
                attrs,
                children: convert_all(handle),
            }))
        }
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(Node::Comment(contents.to_string())),
        _ => None,
    }
}
