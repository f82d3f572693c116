/// Errors that abort the resolution of a rich-text field.
///
/// Advisory conditions (unsupported data types, anchors without `href`) are
/// never errors; they are reported through `tracing` when advanced logging is
/// enabled.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResolverError {
    /// A recognized marker element lacks an attribute it must carry.
    #[error("The '{attribute}' attribute is missing and therefore linked item cannot be retrieved")]
    MissingAttribute { attribute: &'static str },

    /// Replacement HTML for a link did not parse to a single root node.
    #[error("Invalid number of root nodes in link replacement html: expected 1, found {count}")]
    InvalidRootNodeCount { count: usize },

    /// The root node of a link's replacement HTML did not have a single child.
    #[error(
        "When specifying 'html' in a link resolver be sure to use a single wrapper element \
         (found {count} child nodes). Valid syntax: '<p>data</p>'. \
         Invalid syntax: '<p><data></p><p>another data</p>'"
    )]
    InvalidChildNodeCount { count: usize },

    /// An image marker referenced an asset that the field does not describe.
    #[error("Image with id '{image_id}' is not present in the images of rich text field '{field_name}'")]
    MissingImage { image_id: String, field_name: String },

    #[error("HTML serialize error: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("rich text element JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
