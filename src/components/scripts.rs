//! JavaScript run through `document::eval` to reach the browser primitives.
//!
//! Observers live in `window.__lazyImageObservers`, keyed by the target id,
//! so that a later eval (threshold change, unmount) can find and disconnect
//! them.

use crate::lazy::config::Threshold;

fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Registers an IntersectionObserver on `target_id`, replacing any previous one.
///
/// Every entry is sent back as a `VisibilityReport` tagged with `generation`.
pub fn observe(target_id: &str, threshold: Threshold, generation: u32) -> String {
    let id = js_string(target_id);
    let threshold = threshold.to_js();
    format!(
        r#"
const registry = (window.__lazyImageObservers ??= {{}});
const id = {id};
if (registry[id]) {{
    registry[id].disconnect();
    delete registry[id];
}}
const observer = new IntersectionObserver((entries) => {{
    for (const entry of entries) {{
        dioxus.send({{
            generation: {generation},
            ratio: entry.intersectionRatio,
            is_intersecting: entry.isIntersecting,
        }});
    }}
}}, {{ threshold: {threshold} }});
registry[id] = observer;
let attempts = 0;
const attach = () => {{
    if (registry[id] !== observer) return;
    const target = document.getElementById(id);
    if (target) {{
        observer.observe(target);
    }} else if (attempts++ < 10) {{
        requestAnimationFrame(attach);
    }}
}};
attach();
"#
    )
}

pub fn disconnect(target_id: &str) -> String {
    let id = js_string(target_id);
    format!(
        r#"
const registry = window.__lazyImageObservers;
const id = {id};
if (registry && registry[id]) {{
    registry[id].disconnect();
    delete registry[id];
}}
"#
    )
}

/// Fetches `src` through a detached image and reports `true` on load, `false` on error.
pub fn decode(src: &str) -> String {
    let src = js_string(src);
    format!(
        r#"
const img = new Image();
img.onload = () => dioxus.send(true);
img.onerror = () => dioxus.send(false);
img.src = {src};
"#
    )
}
