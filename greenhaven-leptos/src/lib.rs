use cfg_if::cfg_if;

pub mod app;
pub mod logger;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            logger::init().expect("global logger is installed once per page");
            tracing::debug!("hydrating");

            leptos::mount_to_body(app::App)
        }
    }
}
