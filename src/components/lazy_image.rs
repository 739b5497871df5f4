use crate::prelude::*;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use dioxus::dioxus_core::Attribute;

use crate::{
    components::scripts,
    lazy::{controller::Effect, presentation::CONTAINER_STYLE},
    utils::{log_error, CCStr},
};

/// Glue between one [`LazyImageController`] and the platform.
///
/// Platform callbacks come back as events, the returned effects are executed
/// here. The controller's mounted flag is checked before touching the state
/// signal, so a completion arriving after unmount is dropped.
#[derive(Clone)]
struct Dispatcher {
    target_id: CCStr,
    controller: Rc<RefCell<LazyImageController>>,
    state: Signal<LazyImageState>,
    /// Task listening to the live observer registration.
    watch_task: Rc<Cell<Option<Task>>>,
}

impl Dispatcher {
    fn dispatch(&self, event: LazyImageEvent) {
        let (effects, snapshot, mounted) = {
            let mut controller = self.controller.borrow_mut();
            let effects = controller.handle(event);
            (effects, controller.state(), controller.is_mounted())
        };
        let mut state = self.state;
        if mounted && *state.peek() != snapshot {
            state.set(snapshot);
        }
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        log::debug!("LazyImage {} - running {effect:?}", self.target_id);
        match effect {
            Effect::Observe {
                threshold,
                generation,
            } => {
                let mut eval =
                    document::eval(&scripts::observe(&self.target_id, threshold, generation));
                let this = self.clone();
                let task = spawn(async move {
                    while this.controller.borrow().is_watching(generation) {
                        match eval.recv::<VisibilityReport>().await {
                            Ok(report) => this.dispatch(LazyImageEvent::Visibility(report)),
                            Err(e) => {
                                log_error(LazyImageError::Script {
                                    operation: "visibility",
                                    message: e.to_string(),
                                });
                                break;
                            }
                        }
                    }
                });
                // The replaced registration was disconnected and will never report again
                if let Some(previous) = self.watch_task.replace(Some(task)) {
                    previous.cancel();
                }
            }
            Effect::Disconnect => {
                document::eval(&scripts::disconnect(&self.target_id));
            }
            Effect::Decode { src } => {
                let mut eval = document::eval(&scripts::decode(&src));
                let this = self.clone();
                spawn(async move {
                    match eval.recv::<bool>().await {
                        Ok(loaded) => this.dispatch(LazyImageEvent::Decoded {
                            src,
                            outcome: DecodeOutcome::from(loaded),
                        }),
                        Err(e) => {
                            log_error(LazyImageError::Script {
                                operation: "decode",
                                message: e.to_string(),
                            });
                        }
                    }
                });
            }
        }
    }
}

/// Image that is only fetched once it scrolls into view, then fades from a
/// blurred placeholder to the sharp picture.
///
/// - `src` and `threshold` are reactive.
/// - `class` goes on the wrapping element.
/// - `attributes` are forwarded onto the `img` element. `loading="lazy"` is
///   set unless the bag provides its own `loading`.
///
/// A source that fails to load leaves the placeholder in place for good.
#[component]
pub fn LazyImage(
    src: ReadOnlySignal<CCStr>,
    alt: CCStr,
    threshold: Option<ReadOnlySignal<Threshold>>,
    class: Option<CCStr>,
    #[props(default)] attributes: AttributeBag,
) -> Element {
    let target_id = use_hook(|| CCStr::from(format!("lazy-image-{}", uuid::Uuid::new_v4())));
    log::debug!("LazyImage {target_id} Rendered");

    let state = use_signal(LazyImageState::default);
    let dispatcher = use_hook(|| Dispatcher {
        target_id: target_id.clone(),
        controller: Rc::new(RefCell::new(LazyImageController::new(
            src.peek().clone(),
        ))),
        state,
        watch_task: Rc::new(Cell::new(None)),
    });

    use_effect({
        let dispatcher = dispatcher.clone();
        move || {
            let threshold = threshold.map(|t| t()).unwrap_or_default();
            dispatcher.dispatch(LazyImageEvent::Watch { threshold });
        }
    });
    use_effect({
        let dispatcher = dispatcher.clone();
        move || dispatcher.dispatch(LazyImageEvent::SourceChanged(src()))
    });
    use_drop({
        let target_id = target_id.clone();
        move || {
            log::debug!("LazyImage {target_id} Dropped");
            dispatcher.dispatch(LazyImageEvent::Unmounted);
        }
    });

    let ImageLayers { placeholder, image } = ImageLayers::new(state(), &src());
    let placeholder_style = placeholder.style();
    let image_style = image.style();
    let image_src = image.src.map(|s| s.to_string());
    let mut passthrough: Vec<Attribute> = attributes
        .iter()
        .map(|(name, value)| Attribute::new(name, value.to_string(), None, false))
        .collect();
    if !attributes.contains("loading") {
        passthrough.push(Attribute::new("loading", "lazy", None, false));
    }

    rsx! {
        div { class: class.map(|c| c.to_string()), style: CONTAINER_STYLE,
            div { style: placeholder_style }
            img {
                id: "{target_id}",
                src: image_src,
                alt: "{alt}",
                style: image_style,
                ..passthrough,
            }
        }
    }
}
