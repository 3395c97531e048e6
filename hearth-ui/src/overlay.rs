//! Floating-window host: projects overlay state into draggable frames.

use dioxus::prelude::*;

mod dimensions;
mod hooks;
mod host;
mod shell;
mod tools;
mod window;

pub use dimensions::size_to_pixels;
pub use hooks::{provide_overlay, try_use_overlay, use_overlay};
pub use host::OverlayHost;
pub use shell::OverlayShell;
pub use window::FloatingWindow;

#[component]
pub fn Overlay() -> Element {
    rsx! {
        OverlayShell {}
    }
}
