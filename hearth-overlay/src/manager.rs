//! Window lifecycle operations.
//!
//! [`OverlayManager`] is the only mutation path into the store: open, close,
//! minimize, restore, bring-to-front, and drag-originated moves. Hosts read
//! through [`OverlayManager::snapshot`] and never hold a writable copy.

use chrono::Utc;
use hearth_types::{OverlaySnapshot, SizeClass, WindowRecord};

use crate::store::{WindowPatch, WindowStore};

/// Where the first window lands.
const CASCADE_ORIGIN: (i32, i32) = (100, 100);
/// Offset applied per already-open window so new windows never fully cover
/// their predecessors.
const CASCADE_STEP: i32 = 30;

#[derive(Debug, Default)]
pub struct OverlayManager {
    store: WindowStore,
    active_window: Option<String>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager around an existing store; used by tests and by hosts
    /// that scope the store themselves.
    pub fn with_store(store: WindowStore) -> Self {
        Self {
            store,
            active_window: None,
        }
    }

    /// Open a new window and return its id. The window is placed on the
    /// cascade, stacked above everything else, and becomes active.
    pub fn open(
        &mut self,
        tool_id: impl Into<String>,
        title: impl Into<String>,
        size: SizeClass,
        props: serde_json::Value,
    ) -> String {
        let id = ulid::Ulid::new().to_string();
        let (x, y) = self.cascade_position();

        let record = WindowRecord {
            id: id.clone(),
            tool_id: tool_id.into(),
            title: title.into(),
            size,
            x,
            y,
            z_index: self.store.next_z_index(),
            minimized: false,
            opened_at: Utc::now(),
            props,
        };

        tracing::info!(window_id = %id, title = %record.title, x, y, "window opened");
        self.store.insert(record);
        self.active_window = Some(id.clone());
        id
    }

    /// Remove the window permanently. Idempotent: closing an id that is
    /// already gone does nothing.
    pub fn close(&mut self, id: &str) {
        match self.store.remove(id) {
            Some(record) => {
                tracing::info!(window_id = %id, title = %record.title, "window closed");
                if self.active_window.as_deref() == Some(id) {
                    self.active_window = self.topmost_restored_id();
                }
            }
            None => tracing::debug!(window_id = %id, "close on unknown window, ignoring"),
        }
    }

    /// Collapse the window to its title bar. Position and size are retained so
    /// restore puts it back exactly where it was.
    pub fn minimize(&mut self, id: &str) {
        if !self.store.patch(id, WindowPatch::minimized(true)) {
            return;
        }
        tracing::debug!(window_id = %id, "window minimized");
        if self.active_window.as_deref() == Some(id) {
            self.active_window = self.topmost_restored_id();
        }
    }

    /// Un-minimize the window and make it active. No-op if it is already
    /// restored or gone.
    pub fn restore(&mut self, id: &str) {
        let minimized = match self.store.get(id) {
            Some(window) => window.minimized,
            None => {
                tracing::debug!(window_id = %id, "restore on unknown window, ignoring");
                return;
            }
        };
        if !minimized {
            return;
        }
        self.store.patch(id, WindowPatch::minimized(false));
        self.active_window = Some(id.to_string());
        tracing::debug!(window_id = %id, "window restored");
    }

    /// Promote the window above every sibling. Works on minimized windows too;
    /// they rise as title bars.
    pub fn bring_to_front(&mut self, id: &str) {
        if !self.store.contains(id) {
            tracing::debug!(window_id = %id, "bring_to_front on unknown window, ignoring");
            return;
        }
        let z_index = self.store.next_z_index();
        self.store.patch(id, WindowPatch::z_index(z_index));
        self.active_window = Some(id.to_string());
    }

    /// Drag-originated position update; the host commits the gesture's final
    /// coordinates here.
    pub fn move_to(&mut self, id: &str, x: i32, y: i32) {
        self.store.patch(id, WindowPatch::position(x, y));
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            windows: self.store.windows().to_vec(),
            active_window: self.active_window.clone(),
        }
    }

    /// Records sorted ascending by `z_index`; render in this order and the
    /// last one paints on top.
    pub fn windows_by_paint_order(&self) -> Vec<WindowRecord> {
        let mut windows = self.store.windows().to_vec();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.store.get(id)
    }

    pub fn active_window(&self) -> Option<&str> {
        self.active_window.as_deref()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn cascade_position(&self) -> (i32, i32) {
        let offset = self.store.len() as i32 * CASCADE_STEP;
        (CASCADE_ORIGIN.0 + offset, CASCADE_ORIGIN.1 + offset)
    }

    fn topmost_restored_id(&self) -> Option<String> {
        self.snapshot().topmost_restored().map(|w| w.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> serde_json::Value {
        serde_json::json!({})
    }

    #[test]
    fn test_open_ids_are_unique() {
        let mut overlay = OverlayManager::new();
        let mut ids: Vec<String> = (0..50)
            .map(|_| overlay.open("chores", "Chores", SizeClass::Medium, props()))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_open_cascades_positions() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let b = overlay.open("chores", "B", SizeClass::Medium, props());
        let c = overlay.open("chores", "C", SizeClass::Medium, props());

        let at = |id: &str| {
            let w = overlay.get(id).unwrap();
            (w.x, w.y)
        };
        assert_eq!(at(&a), (100, 100));
        assert_eq!(at(&b), (130, 130));
        assert_eq!(at(&c), (160, 160));
    }

    #[test]
    fn test_open_stacks_above_existing_windows() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let b = overlay.open("calendar", "B", SizeClass::Medium, props());
        assert!(overlay.get(&b).unwrap().z_index > overlay.get(&a).unwrap().z_index);
        assert_eq!(overlay.active_window(), Some(b.as_str()));
    }

    #[test]
    fn test_bring_to_front_is_strictly_monotonic() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let b = overlay.open("calendar", "B", SizeClass::Medium, props());
        let z_b = overlay.get(&b).unwrap().z_index;

        overlay.bring_to_front(&a);
        let z_a = overlay.get(&a).unwrap().z_index;
        assert!(z_a > z_b);

        // Paint order flips: b now renders below a.
        let order: Vec<String> = overlay
            .windows_by_paint_order()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn test_bring_to_front_works_on_minimized_window() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let b = overlay.open("calendar", "B", SizeClass::Medium, props());

        overlay.minimize(&a);
        overlay.bring_to_front(&a);
        assert!(overlay.get(&a).unwrap().minimized);
        assert!(overlay.get(&a).unwrap().z_index > overlay.get(&b).unwrap().z_index);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        overlay.close(&a);
        let after_first = overlay.snapshot();
        overlay.close(&a);
        assert_eq!(overlay.snapshot(), after_first);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_minimize_then_restore_preserves_position() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        overlay.move_to(&a, 240, 180);

        overlay.minimize(&a);
        let minimized = overlay.get(&a).unwrap();
        assert!(minimized.minimized);
        assert_eq!((minimized.x, minimized.y), (240, 180));

        overlay.restore(&a);
        let restored = overlay.get(&a).unwrap();
        assert!(!restored.minimized);
        assert_eq!((restored.x, restored.y), (240, 180));
    }

    #[test]
    fn test_restore_when_not_minimized_is_noop() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let b = overlay.open("calendar", "B", SizeClass::Medium, props());
        assert_eq!(overlay.active_window(), Some(b.as_str()));

        // A restored window must not steal focus via a redundant restore.
        overlay.restore(&a);
        assert_eq!(overlay.active_window(), Some(b.as_str()));
    }

    #[test]
    fn test_minimize_reselects_active_window() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let b = overlay.open("calendar", "B", SizeClass::Medium, props());

        overlay.minimize(&b);
        assert_eq!(overlay.active_window(), Some(a.as_str()));

        overlay.minimize(&a);
        assert_eq!(overlay.active_window(), None);
    }

    #[test]
    fn test_operations_on_missing_ids_do_not_change_state() {
        let mut overlay = OverlayManager::new();
        let a = overlay.open("chores", "A", SizeClass::Medium, props());
        let before = overlay.snapshot();

        overlay.minimize("ghost");
        overlay.restore("ghost");
        overlay.bring_to_front("ghost");
        overlay.move_to("ghost", 5, 5);
        overlay.close("ghost");

        assert_eq!(overlay.snapshot(), before);
        assert_eq!(overlay.active_window(), Some(a.as_str()));
    }

    #[test]
    fn test_close_on_empty_store_is_silent() {
        let mut overlay = OverlayManager::new();
        overlay.close("nonexistent");
        assert!(overlay.is_empty());
        assert_eq!(overlay.active_window(), None);
    }
}
