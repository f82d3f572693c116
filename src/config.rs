// Resolver configuration.

/// Options for rich-text resolution.
///
/// Construct once and pass by reference into every resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Report advisory conditions (unsupported data types, anchors without
    /// `href`, unknown links) as `tracing` warnings. Default: `false`.
    pub enable_advanced_logging: bool,
    /// Tag that replaces a linked item marker. Default: `"p"`.
    pub linked_item_wrapper_tag: String,
    /// Classes added to the wrapper. Default: `["kc-linked-item-wrapper"]`.
    pub linked_item_wrapper_classes: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enable_advanced_logging: false,
            linked_item_wrapper_tag: "p".to_string(),
            linked_item_wrapper_classes: vec!["kc-linked-item-wrapper".to_string()],
        }
    }
}

impl ResolverConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether advisory warnings are logged.
    pub fn with_advanced_logging(mut self, enabled: bool) -> Self {
        self.enable_advanced_logging = enabled;
        self
    }

    /// Set the linked item wrapper tag.
    pub fn with_wrapper_tag(mut self, tag: impl Into<String>) -> Self {
        self.linked_item_wrapper_tag = tag.into();
        self
    }

    /// Set the linked item wrapper classes.
    pub fn with_wrapper_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.linked_item_wrapper_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Wrapper classes as a single `class` attribute value.
    pub(crate) fn wrapper_class_value(&self) -> String {
        self.linked_item_wrapper_classes.join(" ")
    }
}
