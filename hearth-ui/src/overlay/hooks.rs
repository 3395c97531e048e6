use dioxus::prelude::*;
use hearth_overlay::OverlayManager;

/// Create the overlay state and expose it to the whole subtree. Called once,
/// by the shell.
pub fn provide_overlay() -> Signal<OverlayManager> {
    use_context_provider(|| Signal::new(OverlayManager::new()))
}

pub fn try_use_overlay() -> Option<Signal<OverlayManager>> {
    try_consume_context::<Signal<OverlayManager>>()
}

/// The overlay manager provided by the nearest [`crate::overlay::OverlayShell`].
///
/// Panics when no provider is in scope: a window component rendered outside
/// the shell is a wiring defect, and failing loudly here surfaces it during
/// development instead of letting window state silently diverge.
pub fn use_overlay() -> Signal<OverlayManager> {
    try_use_overlay().expect(
        "no overlay manager in scope: window components must be rendered under an \
         OverlayShell (or a provide_overlay call)",
    )
}
