//! ページ読み込み時の初期化

use crate::components::{catalog::render_catalog, fabric_options::populate_fabric_options};
use crate::{config, dom, forms};
use crate::local_store::BrowserStorage;
use adoul_cms_common::{Fabric, RecordStore, Work};
use gloo::events::EventListener;

/// DOMContentLoaded 後に `f` を実行する（読み込み済みなら即時）
pub fn on_ready<F: FnOnce() + 'static>(f: F) {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// ページにある要素に応じて各機能を有効にする
pub fn run() {
    let store = RecordStore::new(BrowserStorage);

    render_catalog::<Fabric, _>("fabricsContainer", &store);
    render_catalog::<Work, _>("worksContainer", &store);
    populate_fabric_options("requestFabric", &store);

    forms::wire_fabric_form(store.clone());
    forms::wire_work_form(store);
    forms::wire_request_form();
    forms::wire_admin_gate(config::authenticator());
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_on_ready_runs_immediately_after_load() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();

        on_ready(move || flag.set(true));

        assert!(ran.get());
    }
}
