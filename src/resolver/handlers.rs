// Marker handlers: one function per marker kind.
//
// Each handler decides relevance from the tag name and required attributes
// and returns without touching the element when it does not apply.

use tracing::warn;

use super::State;
use crate::dom::{self, Element, Node};
use crate::error::ResolverError;
use crate::models::{ImageObject, LinkObject, LinkedItemKind, LinkedItemObject};
use crate::parser_config::PARSER_CONFIGURATION;
use crate::replacements::{LinkOutcome, RichTextReplacements};

// ---------------------------------------------------------------------------
// Linked items and components
// ---------------------------------------------------------------------------

/// Substitute a linked item marker with the item's markup.
///
/// Returns the item's codename when the element's children were replaced by
/// the item's content and still have to be resolved on its behalf.
pub(crate) fn linked_item<R>(
    state: &mut State<'_, R>,
    element: &mut Element,
) -> Result<Option<String>, ResolverError>
where
    R: RichTextReplacements + ?Sized,
{
    let data = &PARSER_CONFIGURATION.linked_item_element_data;

    if element.tag() != data.node_name || element.has_attr(data.resolved_attribute) {
        return Ok(None);
    }
    let Some(data_type) = element.attr(data.data_type) else {
        return Ok(None);
    };

    if data_type != data.item_data_type {
        if state.config.enable_advanced_logging {
            warn!(
                field_name = state.field_name,
                data_type,
                "Rich text element contains object with unsupported data type '{data_type}'"
            );
        }
        return Ok(None);
    }
    let data_type = data_type.to_string();

    let codename = element
        .attr(data.data_codename)
        .ok_or(ResolverError::MissingAttribute {
            attribute: data.data_codename,
        })?
        .to_string();

    let kind = if element.attr(data.rel_attribute) == Some(data.component_rel) {
        LinkedItemKind::Component
    } else {
        LinkedItemKind::LinkedItem
    };

    state.featured.linked_items.push(LinkedItemObject {
        codename: codename.clone(),
        data_type,
        kind,
    });

    let circular = state.expanding.contains(&codename);
    let html = if circular {
        if state.config.enable_advanced_logging {
            warn!(
                field_name = state.field_name,
                codename = codename.as_str(),
                "Linked item '{codename}' references itself and is not expanded again"
            );
        }
        None
    } else {
        Some(state.replacements.get_linked_item_html(&codename, kind)?)
    };

    element.push_attr(data.resolved_attribute, "1");
    element.rename(&state.config.linked_item_wrapper_tag);
    element.append_class(&state.config.wrapper_class_value());

    match html {
        Some(html) => {
            element.children = dom::parse_fragment(&html).children;
            Ok(Some(codename))
        }
        None => {
            element.children.clear();
            Ok(None)
        }
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Point a managed asset image at the URL chosen by the caller.
pub(crate) fn image<R>(
    state: &mut State<'_, R>,
    owner_codename: &str,
    element: &mut Element,
) -> Result<(), ResolverError>
where
    R: RichTextReplacements + ?Sized,
{
    let data = &PARSER_CONFIGURATION.image_element_data;

    if element.tag() != data.node_name {
        return Ok(());
    }
    // Without an asset id this is an ordinary image.
    let Some(image_id) = element.attr(data.data_image_id) else {
        return Ok(());
    };
    let image_id = image_id.to_string();

    state.featured.images.push(ImageObject {
        image_id: image_id.clone(),
    });

    let resolution = state
        .replacements
        .get_image_result(owner_codename, &image_id, state.field_name)?;
    element.set_attr(data.src_attribute, &resolution.url);
    Ok(())
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Rewrite an item-referencing anchor, either its `href` or the whole element.
pub(crate) fn link<R>(state: &mut State<'_, R>, element: &mut Element) -> Result<(), ResolverError>
where
    R: RichTextReplacements + ?Sized,
{
    let data = &PARSER_CONFIGURATION.link_element_data;

    if element.tag() != data.node_name {
        return Ok(());
    }
    // Regular links carry no item id.
    let Some(item_id) = element.attr(data.data_item_id) else {
        return Ok(());
    };
    let item_id = item_id.to_string();

    state.featured.links.push(LinkObject {
        item_id: item_id.clone(),
    });

    let link_text = element.first_text().unwrap_or_default().to_string();
    let Some(resolution) = state.replacements.get_link_result(&item_id, &link_text)? else {
        return Ok(());
    };

    match resolution.outcome() {
        LinkOutcome::ReplaceHtml(html) => element.replace_with(single_wrapper(html)?),
        LinkOutcome::SetUrl(url) => {
            if !element.set_attr(data.href_attribute, url) && state.config.enable_advanced_logging {
                warn!(
                    field_name = state.field_name,
                    item_id = item_id.as_str(),
                    "Cannot set url '{url}' because 'href' attribute is not present in the <a> tag"
                );
            }
        }
        LinkOutcome::Nothing => {}
    }
    Ok(())
}

/// Parse link replacement markup that must be one element with one child.
fn single_wrapper(html: &str) -> Result<Element, ResolverError> {
    let roots = dom::parse_fragment(html).children;
    let [root] = <[Node; 1]>::try_from(roots)
        .map_err(|roots| ResolverError::InvalidRootNodeCount { count: roots.len() })?;

    match root {
        Node::Element(element) if element.children.len() == 1 => Ok(element),
        other => Err(ResolverError::InvalidChildNodeCount {
            count: other.child_count(),
        }),
    }
}
