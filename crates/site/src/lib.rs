//! Browser entrypoint: routes the landing page and the component showcase.

mod design_system;
mod web_app;

pub use design_system::{DemoParams, DesignSystemPage};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
