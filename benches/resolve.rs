// Benchmarks for rich-text field resolution.

use criterion::{criterion_group, criterion_main, Criterion};
use delivery_richtext::{
    resolve_field, ImageResolution, LinkResolution, LinkedItemKind, ResolverConfig, ResolverError,
    RichTextReplacements,
};

struct Static;

impl RichTextReplacements for Static {
    fn get_linked_item_html(&self, codename: &str, _: LinkedItemKind) -> Result<String, ResolverError> {
        Ok(format!("<p>{codename}</p>"))
    }

    fn get_image_result(&self, _: &str, image_id: &str, _: &str) -> Result<ImageResolution, ResolverError> {
        Ok(ImageResolution::new(format!("https://assets.example.com/{image_id}")))
    }

    fn get_link_result(&self, item_id: &str, _: &str) -> Result<Option<LinkResolution>, ResolverError> {
        Ok(Some(format!("/items/{item_id}").into()))
    }
}

fn bench_plain(c: &mut Criterion) {
    let html = "<h1>Hello</h1><p>This is a <strong>simple</strong> field.</p>".repeat(50);
    let config = ResolverConfig::default();
    c.bench_function("plain_field", |b| {
        b.iter(|| resolve_field("item", &html, "body", &Static, &config).unwrap());
    });
}

fn bench_markers(c: &mut Criterion) {
    let html = concat!(
        r#"<p>Intro <a data-item-id="a1" href="">link</a></p>"#,
        r#"<object type="application/kenticocloud" data-type="item" data-codename="x"></object>"#,
        r#"<figure><img data-image-id="i1" src=""></figure>"#,
    )
    .repeat(50);
    let config = ResolverConfig::default();
    c.bench_function("marker_field", |b| {
        b.iter(|| resolve_field("item", &html, "body", &Static, &config).unwrap());
    });
}

criterion_group!(benches, bench_plain, bench_markers);
criterion_main!(benches);
