// delivery-richtext: rich-text resolution for headless CMS delivery clients.
//
// Architecture:
//   field HTML → html5ever parse → owned tree → resolver (marker handlers +
//   replacement callbacks) → html5ever serialize → resolved HTML + discovered
//   links, linked items and images
//
// Marker elements:
//   <object data-type="item" data-codename="..">  linked item / component
//   <img data-image-id=".." src="..">              managed asset
//   <a data-item-id=".." href="..">                link to another item
//
// Warnings:
//   Recoverable problems (unknown data-type, missing href, unresolved linked
//   item) are reported as `tracing` WARN events, and only when
//   `ResolverConfig::enable_advanced_logging` is set. Install any `tracing`
//   subscriber to collect them. Failures that invalidate the field are
//   returned as `ResolverError` instead.

pub mod config;
pub mod dom;
mod error;
pub mod fields;
pub mod models;
pub mod parser_config;
pub mod replacements;
mod resolver;

pub use config::ResolverConfig;
pub use error::ResolverError;
pub use fields::{ItemReplacements, Link, LinkContext, ResolvedRichText, RichTextField, RichTextImage};
pub use models::{
    FeaturedObjects, ImageObject, LinkObject, LinkedItemKind, LinkedItemObject, ResolverResult,
};
pub use parser_config::PARSER_CONFIGURATION;
pub use replacements::{ImageResolution, LinkResolution, RichTextReplacements};
pub use resolver::resolve_field;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Echo;

    impl RichTextReplacements for Echo {
        fn get_linked_item_html(
            &self,
            codename: &str,
            _kind: LinkedItemKind,
        ) -> Result<String, ResolverError> {
            Ok(format!("<em>{codename}</em>"))
        }

        fn get_image_result(
            &self,
            owner_codename: &str,
            image_id: &str,
            _field_name: &str,
        ) -> Result<ImageResolution, ResolverError> {
            Ok(ImageResolution::new(format!("/{owner_codename}/{image_id}")))
        }

        fn get_link_result(
            &self,
            item_id: &str,
            _link_text: &str,
        ) -> Result<Option<LinkResolution>, ResolverError> {
            Ok(Some(format!("/items/{item_id}").into()))
        }
    }

    #[test]
    fn test_resolve_empty() {
        let result = resolve_field("movie", "", "plot", &Echo, &ResolverConfig::default()).unwrap();
        assert_eq!(result.resolved_html, "");
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_resolve_through_trait_object() {
        let replacements: &dyn RichTextReplacements = &Echo;
        let html = r#"<img data-image-id="i1" src="">"#;
        let result = resolve_field("movie", html, "plot", replacements, &ResolverConfig::default()).unwrap();
        assert_eq!(result.resolved_html, r#"<img data-image-id="i1" src="/movie/i1">"#);
    }

    #[test]
    fn test_resolve_linked_item_default_wrapper() {
        let html = r#"<object type="application/kenticocloud" data-type="item" data-codename="tom_hardy"></object>"#;
        let result = resolve_field("movie", html, "plot", &Echo, &ResolverConfig::default()).unwrap();
        assert_eq!(
            result.resolved_html,
            r#"<p type="application/kenticocloud" data-type="item" data-codename="tom_hardy" data-sdk-resolved="1" class="kc-linked-item-wrapper"><em>tom_hardy</em></p>"#
        );
    }
}
