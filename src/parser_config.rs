// Marker vocabulary: the tag and attribute names that identify elements the
// resolver rewrites. Defined once, consulted by every handler.

/// Managed asset images: `<img data-image-id="..." src="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageElementData {
    pub node_name: &'static str,
    pub data_image_id: &'static str,
    pub src_attribute: &'static str,
}

/// Links to other content items: `<a data-item-id="..." href="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkElementData {
    pub node_name: &'static str,
    pub data_item_id: &'static str,
    pub href_attribute: &'static str,
}

/// Linked items and components:
/// `<object type="application/kenticocloud" data-type="item" data-codename="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedItemElementData {
    pub node_name: &'static str,
    pub data_type: &'static str,
    pub data_codename: &'static str,
    pub rel_attribute: &'static str,
    /// `rel_attribute` value marking a component rather than a linked item.
    pub component_rel: &'static str,
    /// The only supported `data_type` value.
    pub item_data_type: &'static str,
    /// Set on a marker once it has been substituted.
    pub resolved_attribute: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfiguration {
    pub image_element_data: ImageElementData,
    pub link_element_data: LinkElementData,
    pub linked_item_element_data: LinkedItemElementData,
}

pub const PARSER_CONFIGURATION: ParserConfiguration = ParserConfiguration {
    image_element_data: ImageElementData {
        node_name: "img",
        data_image_id: "data-image-id",
        src_attribute: "src",
    },
    link_element_data: LinkElementData {
        node_name: "a",
        data_item_id: "data-item-id",
        href_attribute: "href",
    },
    linked_item_element_data: LinkedItemElementData {
        node_name: "object",
        data_type: "data-type",
        data_codename: "data-codename",
        rel_attribute: "data-rel",
        component_rel: "component",
        item_data_type: "item",
        resolved_attribute: "data-sdk-resolved",
    },
};
