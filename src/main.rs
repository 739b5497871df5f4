mod views;

mod prelude {
    pub use lazy_image::prelude::*;
}

use serde::{Deserialize, Serialize};

use prelude::*;

use views::gallery::GalleryView;

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    GalleryView {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &'static str = "Lazy Image Gallery";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        div {
            id: "app",
            style: "font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem;",
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};
        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title(TITLE)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 900))
                        .with_resizable(true),
                ),
            )
            .launch(App);
    }
    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
