// Soho landing page — Leptos 0.8 Edition

use soho_landing::App;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("[soho] logging disabled: {e}").into());
    }
    leptos::mount::mount_to_body(App);
}
