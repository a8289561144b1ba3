//! Document-level event plumbing for listeners that outlive a single
//! component render, such as the outside-click handler of the search widget.

use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

pub struct DocumentEventListenerHandle {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl DocumentEventListenerHandle {
    pub fn remove(self) {
        let document = gloo::utils::document();
        let _ = document.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Attach a listener to the document. The handle must be kept alive; dropping
/// it without calling [`DocumentEventListenerHandle::remove`] leaks the
/// closure.
pub fn document_event_listener<E>(
    event: E,
    capture: bool,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> DocumentEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let options = AddEventListenerOptions::new();
    options.set_capture(capture);
    options.set_passive(true);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    let document = gloo::utils::document();
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        &event_name,
        callback.as_ref().unchecked_ref(),
        &options,
    );

    DocumentEventListenerHandle { event_name, callback, capture }
}
