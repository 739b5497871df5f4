use crate::prelude::*;

pub mod gallery;

#[component]
fn TitledView(title: CCStr, subtitle: CCStr, children: Element) -> Element {
    rsx! {
        div { style: "text-align: center;",
            h1 { style: "font-size: 2.5rem; font-weight: 900; margin-bottom: 0;", {title} }
            h2 { style: "font-size: 1rem; font-weight: 300;", {subtitle} }
        }
        div { style: "margin-bottom: 1rem; height: 1px; border-top: 1px solid #6b7280;" }
        {children}
    }
}
