// Shared test helpers for delivery-richtext.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use delivery_richtext::{
    ImageResolution, LinkResolution, LinkedItemKind, ResolverError, RichTextReplacements,
};
use tracing::span;
use tracing::{Event, Level, Metadata, Subscriber};

/// Replacement provider backed by lookup tables.
///
/// Unknown linked items render as empty, unknown images keep an empty URL and
/// unknown links are left untouched. Every call is recorded.
#[derive(Default)]
pub struct MapReplacements {
    pub linked_items: HashMap<String, String>,
    pub images: HashMap<String, String>,
    pub links: HashMap<String, LinkResolution>,
    pub calls: RefCell<Vec<String>>,
}

impl MapReplacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn linked_item(mut self, codename: &str, html: &str) -> Self {
        self.linked_items.insert(codename.to_string(), html.to_string());
        self
    }

    pub fn image(mut self, image_id: &str, url: &str) -> Self {
        self.images.insert(image_id.to_string(), url.to_string());
        self
    }

    pub fn link(mut self, item_id: &str, resolution: impl Into<LinkResolution>) -> Self {
        self.links.insert(item_id.to_string(), resolution.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl RichTextReplacements for MapReplacements {
    fn get_linked_item_html(
        &self,
        codename: &str,
        kind: LinkedItemKind,
    ) -> Result<String, ResolverError> {
        self.calls
            .borrow_mut()
            .push(format!("linked_item:{codename}:{kind:?}"));
        Ok(self.linked_items.get(codename).cloned().unwrap_or_default())
    }

    fn get_image_result(
        &self,
        owner_codename: &str,
        image_id: &str,
        field_name: &str,
    ) -> Result<ImageResolution, ResolverError> {
        self.calls
            .borrow_mut()
            .push(format!("image:{owner_codename}:{image_id}:{field_name}"));
        Ok(ImageResolution::new(
            self.images.get(image_id).cloned().unwrap_or_default(),
        ))
    }

    fn get_link_result(
        &self,
        item_id: &str,
        link_text: &str,
    ) -> Result<Option<LinkResolution>, ResolverError> {
        self.calls
            .borrow_mut()
            .push(format!("link:{item_id}:{link_text}"));
        Ok(self.links.get(item_id).cloned())
    }
}

/// Subscriber that only counts `WARN` events.
pub struct WarningCounter {
    count: Arc<AtomicUsize>,
}

impl Subscriber for WarningCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::WARN {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

/// Run `f` with a subscriber installed and return its result plus the number
/// of warnings emitted on this thread.
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = WarningCounter {
        count: Arc::clone(&count),
    };
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, count.load(Ordering::SeqCst))
}
