pub mod app;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Монтирует демо-страницу с таблицей товаров
#[wasm_bindgen]
pub fn mount_demo() {
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
