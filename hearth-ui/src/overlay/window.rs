use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use hearth_types::WindowRecord;
use wasm_bindgen::JsCast;

use crate::overlay::dimensions::size_to_pixels;
use crate::overlay::tools::tool_icon;

const DRAG_THRESHOLD_PX: i32 = 4;
const KEYBOARD_STEP_PX: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
struct InteractionState {
    pointer_id: i32,
    start_x: i32,
    start_y: i32,
    origin_x: i32,
    origin_y: i32,
}

/// Position of a window being dragged, or `None` while the pointer is still
/// inside the dead zone around the press point.
fn dragged_position(
    origin: (i32, i32),
    start: (i32, i32),
    current: (i32, i32),
) -> Option<(i32, i32)> {
    let dx = current.0 - start.0;
    let dy = current.1 - start.1;
    if dx.abs() < DRAG_THRESHOLD_PX && dy.abs() < DRAG_THRESHOLD_PX {
        return None;
    }
    Some((origin.0 + dx, origin.1 + dy))
}

fn pointer_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn capture_window_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".hearth-window").ok().flatten())
        .map(|window| window.set_pointer_capture(pointer_id));
}

fn release_window_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".hearth-window").ok().flatten())
        .map(|window| window.release_pointer_capture(pointer_id));
}

#[component]
pub fn FloatingWindow(
    window: WindowRecord,
    is_active: bool,
    viewport: (u32, u32),
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_move: Callback<(String, i32, i32)>,
    on_minimize: Callback<String>,
    on_restore: Callback<String>,
    render_content: Callback<WindowRecord, Element>,
) -> Element {
    let window_id = window.id.clone();
    let fullscreen = window.size.is_fullscreen();
    let (width, height) = size_to_pixels(window.size, viewport);

    let mut interaction = use_signal(|| None::<InteractionState>);
    let mut live_position = use_signal(|| None::<(i32, i32)>);

    let committed = (window.x, window.y);
    let (x, y) = live_position().unwrap_or(committed);

    let window_id_for_frame_pointer = window_id.clone();
    let window_id_for_pointer_move = window_id.clone();
    let window_id_for_pointer_up = window_id.clone();
    let window_id_for_keyboard = window_id.clone();
    let window_id_for_controls = window_id.clone();

    let z_index = window.z_index;
    let active_outline = if is_active && !fullscreen {
        "2px solid var(--accent-bg, #3b82f6)"
    } else {
        "none"
    };
    let window_style = if fullscreen {
        format!(
            "position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: {z_index}; \
             display: flex; flex-direction: column; background: var(--window-bg, #1f2937); \
             border: none; border-radius: 0; overflow: hidden; box-shadow: none; \
             pointer-events: auto; outline: {active_outline};"
        )
    } else if window.minimized {
        format!(
            "position: absolute; left: {x}px; top: {y}px; width: {width}px; z-index: {z_index}; \
             display: flex; flex-direction: column; background: var(--window-bg, #1f2937); \
             border: 1px solid var(--border-color, #374151); border-radius: var(--radius-lg, \
             12px); overflow: hidden; box-shadow: var(--shadow-md, 0 4px 6px rgba(0,0,0,0.4)); \
             pointer-events: auto; outline: {active_outline};"
        )
    } else {
        format!(
            "position: absolute; left: {x}px; top: {y}px; width: {width}px; height: {height}px; \
             z-index: {z_index}; display: flex; flex-direction: column; background: \
             var(--window-bg, #1f2937); border: 1px solid var(--border-color, #374151); \
             border-radius: var(--radius-lg, 12px); overflow: hidden; box-shadow: \
             var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5)); pointer-events: auto; \
             outline: {active_outline};"
        )
    };

    let on_window_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::Escape {
            e.prevent_default();
            // During a drag, Escape only cancels the gesture; the window is
            // dismissed on a plain press.
            if interaction().is_some() {
                live_position.set(None);
                interaction.set(None);
            } else {
                on_close.call(window_id_for_keyboard.clone());
            }
            return;
        }

        if key == Key::F4 && modifiers.alt() {
            e.prevent_default();
            on_close.call(window_id_for_keyboard.clone());
            return;
        }

        if key == Key::Character("m".to_string()) && modifiers.ctrl() {
            e.prevent_default();
            on_minimize.call(window_id_for_keyboard.clone());
            return;
        }

        if modifiers.alt() {
            let (x, y) = live_position().unwrap_or((window.x, window.y));
            let next = match key {
                Key::ArrowLeft => (x - KEYBOARD_STEP_PX, y),
                Key::ArrowRight => (x + KEYBOARD_STEP_PX, y),
                Key::ArrowUp => (x, y - KEYBOARD_STEP_PX),
                Key::ArrowDown => (x, y + KEYBOARD_STEP_PX),
                _ => return,
            };
            e.prevent_default();
            on_move.call((window_id_for_keyboard.clone(), next.0, next.1));
        }
    };

    rsx! {
        div {
            class: if is_active { "hearth-window active" } else { "hearth-window" },
            role: "dialog",
            "aria-label": window.title.clone(),
            tabindex: "0",
            style: "{window_style}",
            // Touching a window anywhere raises it above its siblings.
            onpointerdown: move |e| {
                if !pointer_target_is_window_control(&e) {
                    on_focus.call(window_id_for_frame_pointer.clone());
                }
            },
            onkeydown: on_window_keydown,
            onpointermove: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }

                // Pointer capture can occasionally be lost across browser focus
                // transitions. If no buttons are held, end the drag immediately
                // to avoid sticky drag mode.
                if pointer_buttons(&e) == 0 {
                    if let Some((next_x, next_y)) = live_position() {
                        on_move.call((window_id_for_pointer_move.clone(), next_x, next_y));
                    }
                    live_position.set(None);
                    interaction.set(None);
                    return;
                }

                let next = dragged_position(
                    (active.origin_x, active.origin_y),
                    (active.start_x, active.start_y),
                    pointer_point(&e),
                );
                if next.is_some() {
                    live_position.set(next);
                }
            },
            onpointerup: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_window_pointer(&e, active.pointer_id);

                if let Some((next_x, next_y)) = live_position() {
                    on_move.call((window_id_for_pointer_up.clone(), next_x, next_y));
                }
                live_position.set(None);
                interaction.set(None);
            },
            onpointercancel: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }
                release_window_pointer(&e, active.pointer_id);

                live_position.set(None);
                interaction.set(None);
            },

            div {
                class: "window-titlebar",
                style: "display: flex; align-items: center; justify-content: space-between; \
                        padding: 0.6rem 1rem; background: var(--titlebar-bg, #111827); \
                        border-bottom: 1px solid var(--border-color, #374151); cursor: grab; \
                        user-select: none; touch-action: none;",
                onpointerdown: move |e| {
                    if fullscreen || pointer_target_is_window_control(&e) {
                        return;
                    }
                    e.prevent_default();
                    capture_window_pointer(&e, e.data().pointer_id());

                    let (start_x, start_y) = pointer_point(&e);
                    interaction.set(Some(InteractionState {
                        pointer_id: e.data().pointer_id(),
                        start_x,
                        start_y,
                        origin_x: x,
                        origin_y: y,
                    }));
                },

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem;",
                    span { style: "font-size: 1rem;", {tool_icon(&window.tool_id)} }
                    span {
                        style: "font-weight: 500; color: var(--text-primary, white);",
                        "{window.title}"
                    }
                }

                WindowControls {
                    minimized: window.minimized,
                    window_id: window_id_for_controls,
                    on_minimize,
                    on_restore,
                    on_close,
                }
            }

            // A minimized window is just its title bar; body work is suspended
            // until restore, which re-renders it with state intact.
            if !window.minimized {
                div {
                    class: "window-content",
                    style: "flex: 1; overflow: hidden;",
                    {render_content.call(window.clone())}
                }
            }
        }
    }
}

#[component]
fn WindowControls(
    minimized: bool,
    window_id: String,
    on_minimize: Callback<String>,
    on_restore: Callback<String>,
    on_close: Callback<String>,
) -> Element {
    let window_id_for_toggle = window_id.clone();
    let window_id_for_close = window_id;

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",

            button {
                style: "width: 24px; height: 24px; display: flex; align-items: center; \
                        justify-content: center; background: transparent; color: #facc15; \
                        border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": if minimized { "Restore" } else { "Minimize" },
                onclick: move |e| {
                    e.stop_propagation();
                    if minimized {
                        on_restore.call(window_id_for_toggle.clone());
                    } else {
                        on_minimize.call(window_id_for_toggle.clone());
                    }
                },
                if minimized { "❐" } else { "−" }
            }
            button {
                class: "window-close",
                style: "width: 24px; height: 24px; display: flex; align-items: center; \
                        justify-content: center; background: transparent; color: #ef4444; \
                        border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; \
                        font-size: 1.25rem; line-height: 1;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id_for_close.clone());
                },
                "×"
            }
        }
    }
}
