//! Server-side renders of `LazyImage` before any visibility report arrives.

use dioxus::dioxus_core::VirtualDom;
use lazy_image::prelude::*;

fn host(attributes: AttributeBag) -> Element {
    rsx! {
        LazyImage {
            src: CCStr::from("https://example.com/a.jpg"),
            alt: CCStr::from("A"),
            class: CCStr::from("pic"),
            attributes,
        }
    }
}

fn render(attributes: AttributeBag) -> String {
    let mut dom = VirtualDom::new_with_props(host, attributes);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn img_tag(html: &str) -> &str {
    let start = html.find("<img").expect("no img element rendered");
    let end = html[start..].find('>').expect("unterminated img element");
    &html[start..=start + end]
}

#[test]
fn source_is_not_bound_before_the_image_is_in_view() {
    let html = render(AttributeBag::new());
    let img = img_tag(&html);
    assert!(!img.contains(" src="), "{img}");
    assert!(!html.contains("example.com/a.jpg"), "{html}");
    assert!(img.contains(r#"alt="A""#), "{img}");
    assert!(img.contains(r#"id="lazy-image-"#), "{img}");
    assert!(img.contains("opacity: 0"), "{img}");
}

#[test]
fn container_carries_the_host_class() {
    let html = render(AttributeBag::new());
    assert!(html.contains(r#"class="pic""#), "{html}");
    assert!(!img_tag(&html).contains(r#"class="pic""#));
}

#[test]
fn bag_attributes_reach_the_img() {
    let bag = AttributeBag::new()
        .with("width", "640")
        .and_then(|b| b.with("decoding", "async"))
        .unwrap();
    let html = render(bag);
    let img = img_tag(&html);
    assert!(img.contains(r#"width="640""#), "{img}");
    assert!(img.contains(r#"decoding="async""#), "{img}");
}

#[test]
fn native_lazy_loading_is_the_default() {
    let html = render(AttributeBag::new());
    assert!(img_tag(&html).contains(r#"loading="lazy""#), "{html}");
}

#[test]
fn bag_can_override_loading() {
    let html = render(AttributeBag::new().with("loading", "eager").unwrap());
    let img = img_tag(&html);
    assert!(img.contains(r#"loading="eager""#), "{img}");
    assert!(!img.contains(r#"loading="lazy""#), "{img}");
}

#[test]
fn differently_cased_keys_are_forwarded_once() {
    let bag = AttributeBag::new()
        .with("width", "320")
        .and_then(|b| b.with("WIDTH", "640"))
        .unwrap();
    let html = render(bag);
    let img = img_tag(&html).to_ascii_lowercase();
    assert_eq!(img.matches("width=").count(), 1, "{img}");
    assert!(img.contains(r#"width="640""#), "{img}");
}
