// Replacement provider: the caller-side callbacks the resolver consults for
// every marker it finds.

use crate::error::ResolverError;
use crate::models::LinkedItemKind;

/// New URL for a managed asset image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolution {
    pub url: String,
}

impl ImageResolution {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// How an item-referencing anchor should be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResolution {
    /// Overwrite the anchor's `href`.
    Url(String),
    /// Replace the anchor with this markup (single wrapper element).
    Html(String),
    /// Both were offered; non-empty `html` takes precedence.
    ///
    /// Empty strings count as absent, so `Url("")` keeps the existing `href`.
    Combined { html: String, url: String },
}

/// The action a [`LinkResolution`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkOutcome<'a> {
    ReplaceHtml(&'a str),
    SetUrl(&'a str),
    Nothing,
}

impl LinkResolution {
    pub(crate) fn outcome(&self) -> LinkOutcome<'_> {
        match self {
            LinkResolution::Html(html) | LinkResolution::Combined { html, .. } if !html.is_empty() => {
                LinkOutcome::ReplaceHtml(html)
            }
            LinkResolution::Url(url) | LinkResolution::Combined { url, .. } if !url.is_empty() => {
                LinkOutcome::SetUrl(url)
            }
            _ => LinkOutcome::Nothing,
        }
    }
}

impl From<String> for LinkResolution {
    fn from(url: String) -> Self {
        LinkResolution::Url(url)
    }
}

impl From<&str> for LinkResolution {
    fn from(url: &str) -> Self {
        LinkResolution::Url(url.to_string())
    }
}

/// Callbacks that produce replacement content for marker elements.
///
/// An error returned from any callback aborts the field's resolution.
pub trait RichTextReplacements {
    /// Markup substituted for a linked item or component marker.
    fn get_linked_item_html(
        &self,
        codename: &str,
        kind: LinkedItemKind,
    ) -> Result<String, ResolverError>;

    /// New `src` for a managed asset image.
    fn get_image_result(
        &self,
        owner_codename: &str,
        image_id: &str,
        field_name: &str,
    ) -> Result<ImageResolution, ResolverError>;

    /// Rewrite for an item-referencing anchor; `None` leaves it untouched.
    fn get_link_result(
        &self,
        item_id: &str,
        link_text: &str,
    ) -> Result<Option<LinkResolution>, ResolverError>;
}

impl<T: RichTextReplacements + ?Sized> RichTextReplacements for &T {
    fn get_linked_item_html(
        &self,
        codename: &str,
        kind: LinkedItemKind,
    ) -> Result<String, ResolverError> {
        (**self).get_linked_item_html(codename, kind)
    }

    fn get_image_result(
        &self,
        owner_codename: &str,
        image_id: &str,
        field_name: &str,
    ) -> Result<ImageResolution, ResolverError> {
        (**self).get_image_result(owner_codename, image_id, field_name)
    }

    fn get_link_result(
        &self,
        item_id: &str,
        link_text: &str,
    ) -> Result<Option<LinkResolution>, ResolverError> {
        (**self).get_link_result(item_id, link_text)
    }
}
