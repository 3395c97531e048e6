//! Overlay lifecycle integration tests
//!
//! End-to-end scenarios over the manager and launcher, the way a host drives
//! them: open, stack, drag-commit, minimize, restore, dismiss.

use hearth_overlay::{family_tools, launch, launch_by_id, open_dialog, OverlayManager};
use hearth_types::SizeClass;

fn props() -> serde_json::Value {
    serde_json::json!({})
}

#[test]
fn test_promotion_flips_paint_order() {
    let mut overlay = OverlayManager::new();
    let w1 = overlay.open("chores", "A", SizeClass::Medium, props());
    let w2 = overlay.open("calendar", "B", SizeClass::Medium, props());

    let z1 = overlay.get(&w1).unwrap().z_index;
    let z2 = overlay.get(&w2).unwrap().z_index;
    assert!(z2 > z1);

    overlay.bring_to_front(&w1);
    let z1_after = overlay.get(&w1).unwrap().z_index;
    assert!(z1_after > z2);

    let order: Vec<String> = overlay
        .windows_by_paint_order()
        .into_iter()
        .map(|w| w.id)
        .collect();
    assert_eq!(order, vec![w2, w1]);
}

#[test]
fn test_minimize_restore_round_trip_keeps_layout() {
    let mut overlay = OverlayManager::new();
    let w1 = overlay.open("rewards", "Rewards", SizeClass::Medium, props());
    assert_eq!(
        (overlay.get(&w1).unwrap().x, overlay.get(&w1).unwrap().y),
        (100, 100)
    );

    overlay.minimize(&w1);
    let window = overlay.get(&w1).unwrap();
    assert!(window.minimized);
    assert_eq!((window.x, window.y), (100, 100));

    overlay.restore(&w1);
    let window = overlay.get(&w1).unwrap();
    assert!(!window.minimized);
    assert_eq!((window.x, window.y), (100, 100));
}

#[test]
fn test_close_on_empty_overlay_does_not_fault() {
    let mut overlay = OverlayManager::new();
    overlay.close("nonexistent");
    assert!(overlay.is_empty());
}

#[test]
fn test_cascade_over_three_windows() {
    let mut overlay = OverlayManager::new();
    let positions: Vec<(i32, i32)> = (0..3)
        .map(|i| {
            let id = overlay.open("chores", format!("W{i}"), SizeClass::Medium, props());
            let w = overlay.get(&id).unwrap();
            (w.x, w.y)
        })
        .collect();
    assert_eq!(positions, vec![(100, 100), (130, 130), (160, 160)]);
}

#[test]
fn test_drag_commit_then_dismiss_flow() {
    let mut overlay = OverlayManager::new();
    let tools = family_tools();
    let id = launch_by_id(&mut overlay, &tools, "calendar").unwrap();

    // Drag ends: the host commits the final pointer position.
    overlay.bring_to_front(&id);
    overlay.move_to(&id, 420, 260);
    let window = overlay.get(&id).unwrap();
    assert_eq!((window.x, window.y), (420, 260));

    // Escape on the active window closes it; a second (stale) dismissal is
    // absorbed.
    let active = overlay.active_window().unwrap().to_string();
    overlay.close(&active);
    overlay.close(&active);
    assert!(overlay.is_empty());
}

#[test]
fn test_closing_active_window_falls_back_to_next_topmost() {
    let mut overlay = OverlayManager::new();
    let tools = family_tools();
    let chores = launch_by_id(&mut overlay, &tools, "chores").unwrap();
    let rewards = launch_by_id(&mut overlay, &tools, "rewards").unwrap();
    let settings = launch_by_id(&mut overlay, &tools, "settings").unwrap();
    assert_eq!(overlay.active_window(), Some(settings.as_str()));

    overlay.close(&settings);
    assert_eq!(overlay.active_window(), Some(rewards.as_str()));

    // A minimized window is skipped when focus falls back.
    overlay.minimize(&rewards);
    assert_eq!(overlay.active_window(), Some(chores.as_str()));
}

#[test]
fn test_dialog_sits_above_tools() {
    let mut overlay = OverlayManager::new();
    let tools = family_tools();
    let chores = tools.iter().find(|t| t.id == "chores").unwrap();

    let tool_id = launch(&mut overlay, chores);
    let dialog_id = open_dialog(&mut overlay, "Add chore", serde_json::json!({}));

    let snapshot = overlay.snapshot();
    assert_eq!(snapshot.topmost().unwrap().id, dialog_id);
    assert!(
        overlay.get(&dialog_id).unwrap().z_index > overlay.get(&tool_id).unwrap().z_index
    );
    assert!(overlay.get(&dialog_id).unwrap().size.is_fullscreen());
}

#[test]
fn test_many_windows_accumulate_without_cap() {
    let mut overlay = OverlayManager::new();
    for i in 0..64 {
        overlay.open("chores", format!("W{i}"), SizeClass::Small, props());
    }
    assert_eq!(overlay.len(), 64);

    // Every stacking slot is still unique.
    let mut zs: Vec<u32> = overlay.snapshot().windows.iter().map(|w| w.z_index).collect();
    zs.sort_unstable();
    zs.dedup();
    assert_eq!(zs.len(), 64);
}
