// Data contracts of one resolution call: what the resolver discovered while
// walking the tree, and the final result handed to the field mapper.

use serde::Serialize;

/// Sub-kind of an inline content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkedItemKind {
    /// An independently referenceable item.
    LinkedItem,
    /// An item embedded in exactly one parent.
    Component,
}

/// An item-referencing link (`<a data-item-id>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkObject {
    pub item_id: String,
}

/// A linked item or component marker (`<object data-type data-codename>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedItemObject {
    pub codename: String,
    pub data_type: String,
    pub kind: LinkedItemKind,
}

/// A managed asset image (`<img data-image-id>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    pub image_id: String,
}

/// Objects discovered during one field's resolution, in document pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FeaturedObjects {
    pub links: Vec<LinkObject>,
    pub linked_items: Vec<LinkedItemObject>,
    pub images: Vec<ImageObject>,
}

/// Output of [`crate::resolve_field`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverResult {
    pub resolved_html: String,
    pub links: Vec<LinkObject>,
    pub linked_items: Vec<LinkedItemObject>,
    pub images: Vec<ImageObject>,
}

impl ResolverResult {
    pub(crate) fn new(resolved_html: String, featured: FeaturedObjects) -> Self {
        let FeaturedObjects {
            links,
            linked_items,
            images,
        } = featured;
        Self {
            resolved_html,
            links,
            linked_items,
            images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_serializes_for_consumers() {
        let featured = FeaturedObjects {
            links: vec![LinkObject { item_id: "X".into() }],
            linked_items: vec![LinkedItemObject {
                codename: "n_quote".into(),
                data_type: "item".into(),
                kind: LinkedItemKind::Component,
            }],
            images: vec![ImageObject { image_id: "I1".into() }],
        };
        let result = ResolverResult::new("<p>x</p>".into(), featured);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "resolved_html": "<p>x</p>",
                "links": [{ "item_id": "X" }],
                "linked_items": [{ "codename": "n_quote", "data_type": "item", "kind": "component" }],
                "images": [{ "image_id": "I1" }]
            })
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(serde_json::to_string(&LinkedItemKind::LinkedItem).unwrap(), r#""linkedItem""#);
        assert_eq!(serde_json::to_string(&LinkedItemKind::Component).unwrap(), r#""component""#);
    }
}
