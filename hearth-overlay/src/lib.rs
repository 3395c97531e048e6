//! In-process floating-window manager for the Hearth dashboard.
//!
//! The overlay is a single-threaded, event-driven state machine: every
//! mutation happens synchronously inside a UI event handler, flows through
//! [`OverlayManager`], and lands in the [`WindowStore`] it owns. Hosts render
//! from [`OverlaySnapshot`] projections and translate gestures back into
//! lifecycle calls. Nothing here persists, blocks, or spawns.

pub mod launcher;
pub mod manager;
pub mod store;

pub use launcher::{family_tools, launch, launch_by_id, launch_with_props, open_dialog, LaunchError};
pub use manager::OverlayManager;
pub use store::{WindowPatch, WindowStore};
