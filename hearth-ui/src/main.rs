use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use hearth_ui::interop::overlay_mount_point;
use hearth_ui::overlay::Overlay;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    // Window chrome mounts into the dedicated overlay root when the host
    // document provides one, falling back to the document top level.
    match overlay_mount_point() {
        Some(root) => dioxus::LaunchBuilder::new()
            .with_cfg(dioxus_web::Config::new().rootelement(root))
            .launch(App),
        None => launch(App),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        Overlay {}
    }
}
