//! WASM entry point for the SiteGuard dashboard
#![forbid(unsafe_code)]

use siteguard_web::App;

fn main() {
    // Surface panics in the browser console instead of "unreachable executed"
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("mounting SiteGuard dashboard");
    leptos::mount::mount_to_body(App);
}
