// Rich-text resolution engine.
//
// Parses a field's HTML into an owned tree and walks it depth-first in
// document order. Every element is offered to the marker handlers (linked
// item, image, link) before its children are visited, so a handler that
// renames an element or swaps its children has its effect seen by the descent
// that follows. Linked item content is resolved by that same descent, which
// keeps a single accumulator in strict pre-order.

pub(crate) mod handlers;

use crate::config::ResolverConfig;
use crate::dom::{self, Node};
use crate::error::ResolverError;
use crate::models::{FeaturedObjects, ResolverResult};
use crate::replacements::RichTextReplacements;

/// Resolution state threaded through all handlers.
pub(crate) struct State<'a, R: ?Sized> {
    pub field_name: &'a str,
    pub replacements: &'a R,
    pub config: &'a ResolverConfig,
    /// Everything discovered so far, nested items included.
    pub featured: FeaturedObjects,
    /// Codenames of the linked items whose content is currently being walked.
    pub expanding: Vec<String>,
}

impl<'a, R: RichTextReplacements + ?Sized> State<'a, R> {
    fn new(field_name: &'a str, replacements: &'a R, config: &'a ResolverConfig) -> Self {
        Self {
            field_name,
            replacements,
            config,
            featured: FeaturedObjects::default(),
            expanding: Vec::new(),
        }
    }
}

/// Resolve the markers of one rich-text field.
///
/// `owner_codename` identifies the item the field belongs to and is passed to
/// image resolution. Any fatal condition aborts the whole field: there is no
/// partially resolved result.
///
/// # Examples
///
/// ```
/// use delivery_richtext::{
///     resolve_field, ImageResolution, LinkResolution, LinkedItemKind, ResolverConfig,
///     ResolverError, RichTextReplacements,
/// };
///
/// struct Actors;
///
/// impl RichTextReplacements for Actors {
///     fn get_linked_item_html(&self, codename: &str, _: LinkedItemKind) -> Result<String, ResolverError> {
///         Ok(format!("<span>{codename}</span>"))
///     }
///     fn get_image_result(&self, _: &str, id: &str, _: &str) -> Result<ImageResolution, ResolverError> {
///         Ok(ImageResolution::new(format!("https://assets.example.com/{id}")))
///     }
///     fn get_link_result(&self, id: &str, _: &str) -> Result<Option<LinkResolution>, ResolverError> {
///         Ok(Some(format!("/items/{id}").into()))
///     }
/// }
///
/// let html = r#"<p><a data-item-id="42" href="">Tom</a></p>"#;
/// let result = resolve_field("movie", html, "plot", &Actors, &ResolverConfig::default()).unwrap();
/// assert_eq!(result.resolved_html, r#"<p><a data-item-id="42" href="/items/42">Tom</a></p>"#);
/// assert_eq!(result.links.len(), 1);
/// ```
pub fn resolve_field<R>(
    owner_codename: &str,
    html: &str,
    field_name: &str,
    replacements: &R,
    config: &ResolverConfig,
) -> Result<ResolverResult, ResolverError>
where
    R: RichTextReplacements + ?Sized,
{
    let mut fragment = dom::parse_fragment(html);
    let mut state = State::new(field_name, replacements, config);

    walk(&mut state, owner_codename, &mut fragment.children)?;

    let resolved_html = fragment.to_html()?;
    tracing::debug!(
        field_name,
        links = state.featured.links.len(),
        linked_items = state.featured.linked_items.len(),
        images = state.featured.images.len(),
        "resolved rich text field"
    );
    Ok(ResolverResult::new(resolved_html, state.featured))
}

/// Visit `nodes` in document order, running the handlers on each element
/// before descending into its children.
fn walk<R>(state: &mut State<'_, R>, owner_codename: &str, nodes: &mut [Node]) -> Result<(), ResolverError>
where
    R: RichTextReplacements + ?Sized,
{
    for node in nodes.iter_mut() {
        let Node::Element(element) = node else {
            continue;
        };

        let expanded = handlers::linked_item(state, element)?;
        handlers::image(state, owner_codename, element)?;
        handlers::link(state, element)?;

        match expanded {
            // The children are the linked item's own content: resolve them
            // on behalf of that item.
            Some(codename) => {
                state.expanding.push(codename.clone());
                let result = walk(state, &codename, &mut element.children);
                state.expanding.pop();
                result?;
            }
            None => walk(state, owner_codename, &mut element.children)?,
        }
    }
    Ok(())
}
