//! Ergonomic launcher over the lifecycle API.
//!
//! Pre-canned `open` calls for the dashboard's tools: fixed title, icon, and
//! size combinations. Pure convenience; no state of its own.

use hearth_types::{SizeClass, ToolDefinition};
use serde::Serialize;

use crate::manager::OverlayManager;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Serialization error: {0}")]
    Props(#[from] serde_json::Error),
}

/// The built-in dashboard tools.
pub fn family_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            id: "chores".to_string(),
            name: "Chores".to_string(),
            icon: "🧹".to_string(),
            size: SizeClass::Large,
        },
        ToolDefinition {
            id: "calendar".to_string(),
            name: "Calendar".to_string(),
            icon: "📅".to_string(),
            size: SizeClass::ExtraLarge,
        },
        ToolDefinition {
            id: "rewards".to_string(),
            name: "Rewards".to_string(),
            icon: "🏆".to_string(),
            size: SizeClass::Medium,
        },
        ToolDefinition {
            id: "members".to_string(),
            name: "Members".to_string(),
            icon: "👪".to_string(),
            size: SizeClass::Medium,
        },
        ToolDefinition {
            id: "settings".to_string(),
            name: "Settings".to_string(),
            icon: "⚙️".to_string(),
            size: SizeClass::Small,
        },
    ]
}

/// Open a window shaped by `tool` with no payload.
pub fn launch(overlay: &mut OverlayManager, tool: &ToolDefinition) -> String {
    overlay.open(&tool.id, &tool.name, tool.size, serde_json::json!({}))
}

/// Open a window shaped by `tool`, serializing `props` into the record's
/// opaque payload.
pub fn launch_with_props<P: Serialize>(
    overlay: &mut OverlayManager,
    tool: &ToolDefinition,
    props: &P,
) -> Result<String, LaunchError> {
    let props = serde_json::to_value(props)?;
    Ok(overlay.open(&tool.id, &tool.name, tool.size, props))
}

/// Look `tool_id` up in `tools` and launch it.
pub fn launch_by_id(
    overlay: &mut OverlayManager,
    tools: &[ToolDefinition],
    tool_id: &str,
) -> Result<String, LaunchError> {
    let tool = tools
        .iter()
        .find(|t| t.id == tool_id)
        .ok_or_else(|| LaunchError::ToolNotFound(tool_id.to_string()))?;
    Ok(launch(overlay, tool))
}

/// Open a fullscreen dialog. The simpler, single-surface variant of the
/// floating tools.
pub fn open_dialog(
    overlay: &mut OverlayManager,
    title: impl Into<String>,
    props: serde_json::Value,
) -> String {
    overlay.open("dialog", title, SizeClass::Fullscreen, props)
}
