//! 依頼フォームの生地選択肢

use crate::dom;
use adoul_cms_common::{fabric_options, Fabric, KeyValueStore, RecordStore, SelectOption};
use leptos::prelude::*;
use web_sys::HtmlSelectElement;

/// セレクトボックスを作り直す
pub fn populate_fabric_options<S: KeyValueStore>(select_id: &str, store: &RecordStore<S>) {
    let Some(select) = dom::element_by_id::<HtmlSelectElement>(select_id) else {
        return;
    };

    let options = fabric_options(&store.read::<Fabric>());
    select.set_inner_html("");
    let parent: web_sys::HtmlElement = select.into();
    leptos::mount::mount_to(parent, move || view! { <FabricOptions options=options /> }).forget();
}

#[component]
pub fn FabricOptions(options: Vec<SelectOption>) -> impl IntoView {
    options
        .into_iter()
        .map(|option| view! { <option value=option.value>{option.label}</option> })
        .collect_view()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::local_store::BrowserStorage;
    use adoul_cms_common::messages;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_options_follow_storage_order() {
        let store = RecordStore::new(BrowserStorage);
        store
            .write(&[
                Fabric { name: "كتان".into(), code: "L-1".into(), ..Default::default() },
                Fabric { name: "حرير".into(), ..Default::default() },
            ])
            .expect("write");

        let document = dom::document().expect("document");
        let select: HtmlSelectElement = document
            .create_element("select")
            .expect("create select")
            .dyn_into()
            .expect("HtmlSelectElement");
        select.set_id("requestFabric");
        document.body().expect("body").append_child(&select).expect("append");

        populate_fabric_options("requestFabric", &store);
        // 2回目も重複しない
        populate_fabric_options("requestFabric", &store);

        assert_eq!(select.length(), 3);
        assert_eq!(select.value(), "");
        let labels: Vec<String> = (0..select.length())
            .filter_map(|i| select.item(i))
            .map(|option| option.text_content().unwrap_or_default())
            .collect();
        assert_eq!(labels, vec![messages::FABRIC_PLACEHOLDER_OPTION, "كتان (L-1)", "حرير"]);
        select.remove();
    }
}
