use dioxus::prelude::*;
use hearth_overlay::{family_tools, launch, open_dialog};
use hearth_types::{ToolDefinition, WindowRecord};

use crate::interop::{get_viewport_size, track_viewport};
use crate::overlay::hooks::provide_overlay;
use crate::overlay::host::OverlayHost;
use crate::overlay::tools::render_tool;

/// Owns the overlay manager for the subtree and wires user gestures back into
/// lifecycle calls. Everything below it can reach the manager through
/// [`crate::overlay::use_overlay`].
#[component]
pub fn OverlayShell() -> Element {
    let mut overlay = provide_overlay();
    let viewport = use_signal(get_viewport_size);

    use_effect(move || {
        spawn(async move {
            track_viewport(viewport).await;
        });
    });

    let on_close = use_callback(move |window_id: String| {
        overlay.write().close(&window_id);
    });

    let on_focus = use_callback(move |window_id: String| {
        overlay.write().bring_to_front(&window_id);
    });

    let on_move = use_callback(move |(window_id, x, y): (String, i32, i32)| {
        overlay.write().move_to(&window_id, x, y);
    });

    let on_minimize = use_callback(move |window_id: String| {
        overlay.write().minimize(&window_id);
    });

    let on_restore = use_callback(move |window_id: String| {
        overlay.write().restore(&window_id);
    });

    let on_open_tool = use_callback(move |tool: ToolDefinition| {
        launch(&mut overlay.write(), &tool);
    });

    let on_open_dialog = use_callback(move |_| {
        open_dialog(
            &mut overlay.write(),
            "Add to Hearth",
            serde_json::json!({ "step": 1 }),
        );
    });

    let render_content = use_callback(|window: WindowRecord| render_tool(&window));

    let tools = use_hook(family_tools);

    rsx! {
        style { {STYLE_TOKENS} }

        div {
            class: "hearth-shell",
            style: "width: 100vw; height: 100dvh; display: flex; flex-direction: column; \
                    overflow: hidden;",

            LauncherStrip {
                tools,
                on_open_tool,
                on_open_dialog,
            }
        }

        OverlayHost {
            viewport,
            on_close,
            on_focus,
            on_move,
            on_minimize,
            on_restore,
            render_content,
        }
    }
}

#[component]
fn LauncherStrip(
    tools: Vec<ToolDefinition>,
    on_open_tool: Callback<ToolDefinition>,
    on_open_dialog: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "launcher-strip",
            style: "display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1rem;",

            for tool in tools.iter() {
                button {
                    key: "{tool.id}",
                    class: "launcher-icon",
                    style: "display: flex; flex-direction: column; align-items: center; \
                            gap: 0.25rem; padding: 0.5rem 0.75rem; background: transparent; \
                            color: var(--text-primary, #f8fafc); border: none; \
                            border-radius: var(--radius-md, 8px); cursor: pointer;",
                    onclick: {
                        let tool = tool.clone();
                        move |_| on_open_tool.call(tool.clone())
                    },
                    span { style: "font-size: 1.5rem;", "{tool.icon}" }
                    span { style: "font-size: 0.8rem;", "{tool.name}" }
                }
            }

            button {
                class: "launcher-icon",
                style: "margin-left: auto; display: flex; align-items: center; gap: 0.4rem; \
                        padding: 0.5rem 0.9rem; background: var(--accent-bg, #3b82f6); \
                        color: var(--accent-text, #ffffff); border: none; \
                        border-radius: var(--radius-md, 8px); cursor: pointer;",
                onclick: move |_| on_open_dialog.call(()),
                "＋ Add"
            }
        }
    }
}

const STYLE_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;

    /* Semantic colors */
    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-primary);
    --hover-bg: rgba(255, 255, 255, 0.1);

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.3);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html, body {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.launcher-icon:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
}

.hearth-window:focus {
    outline-offset: -2px;
}
"#;
