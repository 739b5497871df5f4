use crate::prelude::*;

use lazy_image::utils::log_error;

use super::TitledView;

const PHOTO_COUNT: usize = 24;
const UNREACHABLE_SRC: &str = "https://unreachable.invalid/missing.jpg";

const GALLERY_CSS: &str = ".tile { aspect-ratio: 4 / 3; border-radius: 0.5rem; }";

const THRESHOLD_CHOICES: [Threshold; 3] = [
    Threshold::DEFAULT,
    Threshold::new(0.5),
    Threshold::new(0.9),
];

fn photo_src(index: usize) -> CCStr {
    CCStr::from(format!("https://picsum.photos/seed/lazy-{index}/640/480"))
}

fn tile_attributes() -> AttributeBag {
    AttributeBag::new()
        .with("width", "640")
        .and_then(|bag| bag.with("height", "480"))
        .and_then(|bag| bag.with("decoding", "async"))
        .unwrap_or_else(|e| {
            log_error(e);
            AttributeBag::default()
        })
}

#[component]
pub fn GalleryView() -> Element {
    rsx! {
        TitledView {
            title: CCStr::from("Lazy Gallery"),
            subtitle: CCStr::from(
                "Images are only requested once they scroll into view, then sharpen in.",
            ),
            Gallery {}
        }
    }
}

#[component]
fn Gallery() -> Element {
    log::debug!("Gallery Rendered");

    let mut threshold = use_signal(Threshold::default);
    let mut mounted = use_signal(|| true);
    // Bumping the generation remounts every tile from scratch
    let mut generation = use_signal(|| 0usize);
    let attributes = use_hook(tile_attributes);

    use_drop(|| log::debug!("Gallery Dropped"));

    rsx! {
        style { {GALLERY_CSS} }
        div { style: "display: flex; gap: 1rem; align-items: center; flex-wrap: wrap; margin-bottom: 1rem;",
            span { "Visibility threshold:" }
            for choice in THRESHOLD_CHOICES {
                label { key: "{choice}",
                    input {
                        r#type: "radio",
                        name: "threshold",
                        checked: threshold() == choice,
                        onchange: move |_| threshold.set(choice),
                    }
                    " {choice}"
                }
            }
            button {
                onclick: move |_| mounted.set(!mounted()),
                if mounted() {
                    "Unmount gallery"
                } else {
                    "Mount gallery"
                }
            }
            button { onclick: move |_| *generation.write() += 1, "Reset" }
        }
        p { style: "height: 60vh; display: flex; align-items: end; color: #6b7280;",
            "Scroll down, nothing below has been requested yet."
        }
        if mounted() {
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem;",
                for index in 0..PHOTO_COUNT {
                    LazyImage {
                        key: "{generation}-{index}",
                        src: photo_src(index),
                        alt: CCStr::from(format!("Random photo #{index}")),
                        threshold: ReadOnlySignal::from(threshold),
                        class: CCStr::from("tile"),
                        attributes: attributes.clone(),
                    }
                }
                LazyImage {
                    key: "{generation}-unreachable",
                    src: CCStr::from(UNREACHABLE_SRC),
                    alt: CCStr::from("This one never loads"),
                    threshold: ReadOnlySignal::from(threshold),
                    class: CCStr::from("tile"),
                    attributes: attributes.clone(),
                }
            }
        }
    }
}
