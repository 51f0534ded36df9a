#![cfg(target_arch = "wasm32")]

use sales_dashboard_wasm::domain::theme::{KeyValueStore, Theme, ThemeSurface};
use sales_dashboard_wasm::infrastructure::document::{BodyClassSurface, set_document_title};
use sales_dashboard_wasm::infrastructure::storage::LocalStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body_classes() -> String {
    web_sys::window().unwrap().document().unwrap().body().unwrap().class_name()
}

#[wasm_bindgen_test]
fn body_carries_exactly_one_theme_class() {
    let surface = BodyClassSurface;
    surface.apply_theme(Theme::Dark);
    surface.apply_theme(Theme::Light);

    let classes = body_classes();
    assert!(classes.contains("theme-light"));
    assert!(!classes.contains("theme-dark"));
}

#[wasm_bindgen_test]
fn local_storage_round_trips_theme() {
    let storage = LocalStorage::open().expect("localStorage in test browser");
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn document_title_is_set() {
    set_document_title("Reports | Business Dashboard");
    assert_eq!(web_sys::window().unwrap().document().unwrap().title(), "Reports | Business Dashboard");
}
