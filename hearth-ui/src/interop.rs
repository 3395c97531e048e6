use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Get the browser viewport dimensions
pub fn get_viewport_size() -> (u32, u32) {
    current_viewport_size().unwrap_or((0, 0))
}

fn current_viewport_size() -> Option<(u32, u32)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some((width.round() as u32, height.round() as u32));
    }

    let document = window.document()?;
    let root = document.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

/// Keep `viewport` in sync with the browser window across resizes and
/// orientation changes.
pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

/// Mount element for window chrome: the dedicated `#overlay-root` node when
/// the host document provides one, otherwise the document body.
pub fn overlay_mount_point() -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    if let Ok(Some(root)) = document.query_selector("#overlay-root") {
        return Some(root);
    }
    document.body().map(|body| body.into())
}
