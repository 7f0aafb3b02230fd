//! Scroll reveal hook backed by the browser's IntersectionObserver
//!
//! On the server nothing is observed and every block renders in its resting
//! state. After hydration each block gets its own [`RevealController`] whose
//! observer is released when the block is cleaned up.

use leptos::html;
use leptos::prelude::*;

use crate::core::{RevealState, Threshold};

/// Track whether the element behind `node_ref` has been revealed
pub fn use_reveal(node_ref: NodeRef<html::Div>, threshold: Threshold) -> Signal<RevealState> {
    let state = RwSignal::new(RevealState::Resting);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::{MountOutcome, RevealController};
        use browser::BrowserObserver;

        let controller = StoredValue::new_local(RevealController::<BrowserObserver>::new(threshold));

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };

            let on_sample = move |sample| {
                let latched = controller
                    .try_update_value(|c| c.record(sample))
                    .unwrap_or(false);
                if latched {
                    state.set(RevealState::Revealed);
                }
            };

            let observer = BrowserObserver::new(element.into(), on_sample);
            match controller.try_update_value(|c| c.mount(observer)) {
                Some(MountOutcome::Observing) | None => {}
                Some(MountOutcome::AlreadyRevealed) => state.set(RevealState::Revealed),
                Some(MountOutcome::FailedOpen(err)) => {
                    leptos::logging::warn!("Reveal observer unavailable, showing element: {}", err);
                    state.set(RevealState::Revealed);
                }
            }
        });

        on_cleanup(move || {
            controller.try_update_value(|c| c.unmount());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node_ref, threshold);
    }

    state.into()
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::JsValue;
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::core::{IntersectionSample, ObserverError, Threshold, ViewportObserver};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// [`ViewportObserver`] over `IntersectionObserver` for a single element
    pub struct BrowserObserver {
        element: Element,
        on_sample: Rc<dyn Fn(IntersectionSample)>,
        observer: Option<IntersectionObserver>,
        // Outlives `disconnect`, which can run from inside this callback
        callback: Option<ObserverCallback>,
    }

    impl BrowserObserver {
        pub fn new(element: Element, on_sample: impl Fn(IntersectionSample) + 'static) -> Self {
            Self {
                element,
                on_sample: Rc::new(on_sample),
                observer: None,
                callback: None,
            }
        }
    }

    impl ViewportObserver for BrowserObserver {
        fn observe(&mut self, threshold: Threshold) -> Result<(), ObserverError> {
            if self.observer.is_some() {
                return Ok(());
            }

            let on_sample = self.on_sample.clone();
            let callback = ObserverCallback::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                            on_sample(IntersectionSample::new(
                                entry.intersection_ratio(),
                                entry.is_intersecting(),
                            ));
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold.value()));

            let observer = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| ObserverError::Unsupported(format!("{err:?}")))?;
            observer.observe(&self.element);

            self.observer = Some(observer);
            self.callback = Some(callback);
            Ok(())
        }

        fn disconnect(&mut self) {
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
        }
    }
}
