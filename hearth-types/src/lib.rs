//! Shared types between the overlay core and the web host
//!
//! These types are used by both:
//! - The synchronous window manager (`hearth-overlay`, native + WASM)
//! - Dioxus components (`hearth-ui`, WASM)
//!
//! Serializable with serde; exported to TypeScript for the browser host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Window State
// ============================================================================

/// Frame size bucket for a window. Concrete pixel dimensions are a host
/// concern; the core only carries the bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../hearth-ui/src/types/generated.ts")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    ExtraLarge,
    /// Covers the whole workspace; used by the dialog launcher.
    Fullscreen,
}

impl Default for SizeClass {
    fn default() -> Self {
        SizeClass::Medium
    }
}

impl SizeClass {
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, SizeClass::Fullscreen)
    }
}

/// One open or minimized window.
///
/// Records are created by `open`, mutated only through the lifecycle API, and
/// removed permanently by `close`. The `id` is a ULID string, unique for the
/// lifetime of the process and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../hearth-ui/src/types/generated.ts")]
pub struct WindowRecord {
    pub id: String,
    /// Which tool the window hosts ("chores", "calendar", ...). Opaque to the
    /// core; the host maps it to a view.
    pub tool_id: String,
    pub title: String,
    pub size: SizeClass,
    pub x: i32,
    pub y: i32,
    /// Stacking position. Strictly increases every time the window is
    /// promoted; no two live records share a value.
    pub z_index: u32,
    /// Minimized windows render as a title-bar-only affordance but keep their
    /// position and stacking slot.
    pub minimized: bool,
    pub opened_at: DateTime<Utc>,
    /// Tool-specific payload, never inspected by the core.
    #[ts(type = "unknown")]
    pub props: serde_json::Value,
}

/// Point-in-time projection of the whole overlay, handed to hosts for
/// rendering. `active_window` is the window currently accepting interaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, TS)]
#[ts(export, export_to = "../hearth-ui/src/types/generated.ts")]
pub struct OverlaySnapshot {
    pub windows: Vec<WindowRecord>,
    pub active_window: Option<String>,
}

impl OverlaySnapshot {
    /// Windows in paint order: ascending `z_index`, so later entries sit on
    /// top. Insertion order is already ascending except right after a
    /// promotion, which this sort resolves.
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// The window painted above all others, minimized or not.
    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    /// The highest non-minimized window; the natural focus fallback after the
    /// active window goes away.
    pub fn topmost_restored(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// A pre-canned window shape: fixed title, icon, and size bucket for one of
/// the dashboard tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../hearth-ui/src/types/generated.ts")]
pub struct ToolDefinition {
    pub id: String,
    pub name: String,
    /// Emoji or SVG reference shown in the launcher and title bar.
    pub icon: String,
    pub size: SizeClass,
}

// ============================================================================
// Tests
// ============================================================================
