//! Page Identifier
//!
//! Reads the record identifier from the page URL and reports changes made
//! through history navigation.

use leptos::prelude::*;
use reqwest::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Value of `param` in the query of `href`. Empty values count as absent.
pub fn identifier_from_url(href: &str, param: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let value = url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned());
    value.filter(|v| !v.is_empty())
}

/// Identifier of the current page, if any
pub fn current_identifier(param: &str) -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    identifier_from_url(&href, param)
}

/// Re-read the identifier on every `popstate` and push it into `set_identifier`
pub fn bind_popstate(param: String, set_identifier: WriteSignal<Option<String>>) {
    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let id = current_identifier(&param);
        log::debug!("popstate, identifier now {:?}", id);
        set_identifier.set(id);
    });

    let bound = match web_sys::window() {
        Some(win) => listener_bound(
            "popstate",
            win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref()),
        ),
        None => listener_bound("popstate", Err("no window")),
    };
    if bound {
        on_popstate.forget();
    }
}

/// Log a failed listener registration. True when the listener is in place.
fn listener_bound<E: std::fmt::Debug>(event: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("cannot listen for {}, history navigation will not reload the page: {:?}", event, e);
            false
        }
    }
}
