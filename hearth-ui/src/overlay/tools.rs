use dioxus::prelude::*;
use hearth_types::WindowRecord;

pub fn tool_icon(tool_id: &str) -> &'static str {
    match tool_id {
        "chores" => "🧹",
        "calendar" => "📅",
        "rewards" => "🏆",
        "members" => "👪",
        "settings" => "⚙️",
        "dialog" => "📋",
        _ => "🪟",
    }
}

/// Default content renderer: a placeholder panel per tool. Real tool views
/// plug in by passing a different `render_content` callback to the host.
pub fn render_tool(window: &WindowRecord) -> Element {
    let description = match window.tool_id.as_str() {
        "chores" => "Assign and check off the week's chores.",
        "calendar" => "Everyone's schedule in one place.",
        "rewards" => "Points, streaks, and prizes.",
        "members" => "Profiles for the whole household.",
        "settings" => "Household preferences.",
        "dialog" => "",
        _ => "This tool has no view yet.",
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; \
                    justify-content: center; gap: 0.75rem; height: 100%; padding: 1rem; \
                    color: var(--text-secondary, #94a3b8); text-align: center;",
            span { style: "font-size: 2.5rem;", {tool_icon(&window.tool_id)} }
            span { style: "font-size: 1.1rem; color: var(--text-primary, #f8fafc);",
                "{window.title}"
            }
            if !description.is_empty() {
                span { "{description}" }
            }
        }
    }
}
