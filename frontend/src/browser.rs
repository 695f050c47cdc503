//! Thin helpers over the browser environment.
//!
//! Everything here returns [`EnvError`] instead of panicking so components can
//! fall back to their static rendering when a lookup fails.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Event, EventTarget, MediaQueryList, Window};

use crate::config;
use crate::error::EnvError;

pub fn window() -> Result<Window, EnvError> {
    web_sys::window().ok_or(EnvError::NoWindow)
}

pub fn document() -> Result<Document, EnvError> {
    window()?.document().ok_or(EnvError::NoDocument)
}

pub fn reduced_motion_query() -> Result<MediaQueryList, EnvError> {
    window()?
        .match_media(config::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .ok_or_else(|| EnvError::MediaQuery(config::REDUCED_MOTION_QUERY.to_string()))
}

pub fn prefers_reduced_motion() -> Result<bool, EnvError> {
    Ok(reduced_motion_query()?.matches())
}

/// True when the window exposes `ontouchstart`, i.e. there is no pointer worth tracking.
pub fn is_touch_device() -> bool {
    match window() {
        Ok(window) => Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false),
        Err(_) => false,
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, EnvError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| EnvError::Listener {
                event,
                reason: format!("{:?}", err),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
