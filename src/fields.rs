// Rich-text field model and the default replacement provider.
//
// The delivery API returns a rich-text element as its HTML plus side tables
// describing the assets, item links and linked items the HTML references.
// `RichTextField` holds that data; `ItemReplacements` answers the resolver's
// callbacks from it, delegating presentation to caller closures.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::config::ResolverConfig;
use crate::error::ResolverError;
use crate::models::{ImageObject, LinkObject, LinkedItemKind, LinkedItemObject, ResolverResult};
use crate::replacements::{ImageResolution, LinkResolution, RichTextReplacements};
use crate::resolver::resolve_field;

// ---------------------------------------------------------------------------
// Response JSON
// ---------------------------------------------------------------------------

/// A rich-text element as returned by the delivery API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub images: BTreeMap<String, ImageData>,
    #[serde(default)]
    pub links: BTreeMap<String, LinkData>,
    #[serde(default)]
    pub modular_content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageData {
    pub image_id: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkData {
    pub codename: String,
    #[serde(rename = "type")]
    pub type_codename: String,
    #[serde(default)]
    pub url_slug: String,
}

// ---------------------------------------------------------------------------
// Field model
// ---------------------------------------------------------------------------

/// A content item referenced by an anchor in rich text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub link_id: String,
    pub codename: String,
    pub type_codename: String,
    pub url_slug: String,
}

/// An asset embedded in rich text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTextImage {
    pub image_id: String,
    pub url: String,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// What a link resolver knows about the anchor being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkContext<'a> {
    pub link_id: &'a str,
    /// Text of the anchor as authored (empty when it does not start with text).
    pub link_text: &'a str,
    pub field_name: &'a str,
}

/// A rich-text field of a content item, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTextField {
    /// Codename of the field within its content type.
    pub name: String,
    /// Raw HTML as delivered.
    pub value: String,
    pub linked_item_codenames: Vec<String>,
    pub links: Vec<Link>,
    pub images: Vec<RichTextImage>,
}

impl RichTextField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            linked_item_codenames: Vec::new(),
            links: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Map a delivered element stored under `name`.
    pub fn from_element(name: impl Into<String>, element: RichTextElement) -> Self {
        let links = element
            .links
            .into_iter()
            .map(|(link_id, data)| Link {
                link_id,
                codename: data.codename,
                type_codename: data.type_codename,
                url_slug: data.url_slug,
            })
            .collect();
        let images = element
            .images
            .into_values()
            .map(|data| RichTextImage {
                image_id: data.image_id,
                url: data.url,
                description: data.description,
                width: data.width,
                height: data.height,
            })
            .collect();

        Self {
            name: name.into(),
            value: element.value,
            linked_item_codenames: element.modular_content,
            links,
            images,
        }
    }

    /// Parse the element JSON stored under `name`.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, ResolverError> {
        let element: RichTextElement = serde_json::from_str(json)?;
        Ok(Self::from_element(name, element))
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    pub fn with_images(mut self, images: Vec<RichTextImage>) -> Self {
        self.images = images;
        self
    }

    pub fn with_linked_item_codenames(mut self, codenames: Vec<String>) -> Self {
        self.linked_item_codenames = codenames;
        self
    }

    pub fn link(&self, link_id: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.link_id == link_id)
    }

    pub fn image(&self, image_id: &str) -> Option<&RichTextImage> {
        self.images.iter().find(|image| image.image_id == image_id)
    }

    /// Resolve this field's HTML on behalf of the item `owner_codename`.
    pub fn resolve<R>(
        &self,
        owner_codename: &str,
        replacements: &R,
        config: &ResolverConfig,
    ) -> Result<ResolvedRichText, ResolverError>
    where
        R: RichTextReplacements + ?Sized,
    {
        let result = resolve_field(owner_codename, &self.value, &self.name, replacements, config)?;
        Ok(ResolvedRichText {
            field_name: self.name.clone(),
            result,
        })
    }
}

/// A rich-text field after successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRichText {
    pub field_name: String,
    pub result: ResolverResult,
}

impl ResolvedRichText {
    pub fn html(&self) -> &str {
        &self.result.resolved_html
    }

    pub fn links(&self) -> &[LinkObject] {
        &self.result.links
    }

    pub fn linked_items(&self) -> &[LinkedItemObject] {
        &self.result.linked_items
    }

    pub fn images(&self) -> &[ImageObject] {
        &self.result.images
    }
}

// ---------------------------------------------------------------------------
// Default replacement provider
// ---------------------------------------------------------------------------

type LinkResolver<'a> = Box<dyn Fn(&Link, &LinkContext<'_>) -> Option<LinkResolution> + 'a>;
type LinkedItemResolver<'a> = Box<dyn Fn(&str, LinkedItemKind) -> Option<String> + 'a>;
type ImageResolver<'a> = Box<dyn Fn(&RichTextImage, &str) -> ImageResolution + 'a>;

/// Answers resolver callbacks from a field's own link and image tables.
///
/// Without a link resolver anchors are left untouched. Without a linked item
/// resolver linked items render empty. Without an image resolver images keep
/// the asset URL from the response.
///
/// Images inside linked item content are looked up in that item's table when
/// one was registered with [`ItemReplacements::with_linked_item_images`], and in
/// the field's own table otherwise.
pub struct ItemReplacements<'a> {
    field: &'a RichTextField,
    advanced_logging: bool,
    linked_item_images: BTreeMap<String, Vec<RichTextImage>>,
    link_resolver: Option<LinkResolver<'a>>,
    linked_item_resolver: Option<LinkedItemResolver<'a>>,
    image_resolver: Option<ImageResolver<'a>>,
}

impl<'a> ItemReplacements<'a> {
    pub fn new(field: &'a RichTextField, config: &ResolverConfig) -> Self {
        Self {
            field,
            advanced_logging: config.enable_advanced_logging,
            linked_item_images: BTreeMap::new(),
            link_resolver: None,
            linked_item_resolver: None,
            image_resolver: None,
        }
    }

    /// Register the assets of linked item `codename`, used for images in its content.
    pub fn with_linked_item_images(mut self, codename: impl Into<String>, images: Vec<RichTextImage>) -> Self {
        self.linked_item_images.insert(codename.into(), images);
        self
    }

    pub fn with_link_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Link, &LinkContext<'_>) -> Option<LinkResolution> + 'a,
    {
        self.link_resolver = Some(Box::new(resolver));
        self
    }

    pub fn with_linked_item_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, LinkedItemKind) -> Option<String> + 'a,
    {
        self.linked_item_resolver = Some(Box::new(resolver));
        self
    }

    pub fn with_image_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&RichTextImage, &str) -> ImageResolution + 'a,
    {
        self.image_resolver = Some(Box::new(resolver));
        self
    }
}

impl RichTextReplacements for ItemReplacements<'_> {
    fn get_linked_item_html(
        &self,
        codename: &str,
        kind: LinkedItemKind,
    ) -> Result<String, ResolverError> {
        let html = self
            .linked_item_resolver
            .as_ref()
            .and_then(|resolver| resolver(codename, kind));

        match html {
            Some(html) => Ok(html),
            None => {
                if self.advanced_logging {
                    let listed = self.field.linked_item_codenames.iter().any(|c| c == codename);
                    if listed {
                        warn!(
                            field_name = self.field.name.as_str(),
                            codename,
                            "Linked item '{codename}' could not be resolved and renders empty"
                        );
                    } else {
                        warn!(
                            field_name = self.field.name.as_str(),
                            codename,
                            "Linked item '{codename}' is not listed in the linked items of the field and renders empty"
                        );
                    }
                }
                Ok(String::new())
            }
        }
    }

    fn get_image_result(
        &self,
        owner_codename: &str,
        image_id: &str,
        field_name: &str,
    ) -> Result<ImageResolution, ResolverError> {
        let image = match self.linked_item_images.get(owner_codename) {
            Some(images) => images.iter().find(|image| image.image_id == image_id),
            None => self.field.image(image_id),
        };
        let image = image.ok_or_else(|| ResolverError::MissingImage {
            image_id: image_id.to_string(),
            field_name: field_name.to_string(),
        })?;

        Ok(match &self.image_resolver {
            Some(resolver) => resolver(image, field_name),
            None => ImageResolution::new(image.url.clone()),
        })
    }

    fn get_link_result(
        &self,
        item_id: &str,
        link_text: &str,
    ) -> Result<Option<LinkResolution>, ResolverError> {
        let Some(link) = self.field.link(item_id) else {
            if self.advanced_logging {
                warn!(
                    field_name = self.field.name.as_str(),
                    item_id,
                    "Cannot resolve link with id '{item_id}' because it is not present in the links of the field"
                );
            }
            return Ok(None);
        };

        let context = LinkContext {
            link_id: item_id,
            link_text,
            field_name: &self.field.name,
        };
        Ok(self
            .link_resolver
            .as_ref()
            .and_then(|resolver| resolver(link, &context)))
    }
}
