//! Authoritative window collection.
//!
//! The store owns every [`WindowRecord`] plus the stacking counter. Each
//! method is one atomic mutation; callers never observe a partial state.
//! Operations on ids that are no longer present are silent no-ops — a stale
//! UI callback firing after a close is an expected race, not an error.

use hearth_types::WindowRecord;

/// Stacking values start above the page content range.
const BASE_Z_INDEX: u32 = 100;

/// Partial update merged into a matching record by [`WindowStore::patch`].
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowPatch {
    pub position: Option<(i32, i32)>,
    pub minimized: Option<bool>,
    pub z_index: Option<u32>,
    pub title: Option<String>,
}

impl WindowPatch {
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            position: Some((x, y)),
            ..Self::default()
        }
    }

    pub fn minimized(minimized: bool) -> Self {
        Self {
            minimized: Some(minimized),
            ..Self::default()
        }
    }

    pub fn z_index(z_index: u32) -> Self {
        Self {
            z_index: Some(z_index),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Ordered collection of window records and the reserved next-z counter.
///
/// Insertion order is kept (a plain `Vec`), so iteration is stable; paint
/// order is derived from `z_index`, never from position in the vector.
#[derive(Debug, Clone)]
pub struct WindowStore {
    windows: Vec<WindowRecord>,
    next_z_index: u32,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: BASE_Z_INDEX,
        }
    }
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Never fails; the collection is unbounded.
    pub fn insert(&mut self, record: WindowRecord) {
        self.windows.push(record);
    }

    /// Delete the record with this id, returning it. `None` when the id is
    /// already gone.
    pub fn remove(&mut self, id: &str) -> Option<WindowRecord> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Merge `patch` into the matching record. Returns whether a record was
    /// found; a miss leaves the collection untouched.
    pub fn patch(&mut self, id: &str, patch: WindowPatch) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            tracing::debug!(window_id = %id, "patch on unknown window, ignoring");
            return false;
        };

        if let Some((x, y)) = patch.position {
            window.x = x;
            window.y = y;
        }
        if let Some(minimized) = patch.minimized {
            window.minimized = minimized;
        }
        if let Some(z_index) = patch.z_index {
            window.z_index = z_index;
        }
        if let Some(title) = patch.title {
            window.title = title;
        }
        true
    }

    /// Reserve and return a stacking value strictly greater than every
    /// `z_index` currently in the collection. Values are never repeated, even
    /// after the record holding the maximum is removed.
    pub fn next_z_index(&mut self) -> u32 {
        let floor = self.max_z().map_or(BASE_Z_INDEX, |max| max + 1);
        let z = self.next_z_index.max(floor);
        self.next_z_index = z + 1;
        z
    }

    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn max_z(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.z_index).max()
    }
}
