use dioxus::prelude::*;
use hearth_types::WindowRecord;

use crate::overlay::hooks::use_overlay;
use crate::overlay::window::FloatingWindow;

/// Projects every live window record into a positioned frame.
///
/// Frames render in ascending `z_index`, so DOM order matches paint order and
/// the most recently promoted window sits on top. The layer itself is fixed
/// out of normal page flow and lets pointer events through everywhere except
/// the frames.
#[component]
pub fn OverlayHost(
    viewport: Signal<(u32, u32)>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, i32, i32)>,
    on_minimize: Callback<String>,
    on_restore: Callback<String>,
    render_content: Callback<WindowRecord, Element>,
) -> Element {
    let overlay = use_overlay();
    let (windows, active_window) = {
        let overlay = overlay.read();
        (
            overlay.windows_by_paint_order(),
            overlay.active_window().map(str::to_string),
        )
    };
    let viewport_value = *viewport.read();

    rsx! {
        div {
            class: "overlay-layer",
            style: "position: fixed; inset: 0; overflow: hidden; pointer-events: none; \
                    z-index: 100;",

            for window in windows.iter() {
                FloatingWindow {
                    key: "{window.id}",
                    window: window.clone(),
                    is_active: active_window.as_ref() == Some(&window.id),
                    viewport: viewport_value,
                    on_close,
                    on_focus,
                    on_move,
                    on_minimize,
                    on_restore,
                    render_content,
                }
            }
        }
    }
}
