//! カタログ一覧コンポーネント

use crate::dom;
use adoul_cms_common::{Card, CardField, Cardable, CatalogView, KeyValueStore, Record, RecordStore, catalog_view};
use leptos::prelude::*;
use web_sys::HtmlElement;

/// コンテナを空にしてカードを描画する
///
/// コンテナがページに無ければ何もしない
pub fn render_catalog<T, S>(container_id: &str, store: &RecordStore<S>)
where
    T: Record + Cardable,
    S: KeyValueStore,
{
    let Some(container) = dom::element_by_id::<HtmlElement>(container_id) else {
        log::debug!("#{} not found, skip {}", container_id, T::KEY);
        return;
    };

    let catalog = catalog_view(&store.read::<T>());
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <CatalogCards catalog=catalog /> }).forget();
}

#[component]
pub fn CatalogCards(catalog: CatalogView) -> impl IntoView {
    match catalog {
        CatalogView::Empty { message } => view! { <p>{message}</p> }.into_any(),
        CatalogView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <CatalogCard card=card /> })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn CatalogCard(card: Card) -> impl IntoView {
    let Card { image, alt, heading, fields } = card;

    view! {
        <div class="card">
            <img src=image alt=alt />
            <h3>{heading}</h3>
            {fields
                .into_iter()
                .map(|field| match field {
                    CardField::Labeled { label, value } => {
                        view! { <p><strong>{label}</strong>" "{value}</p> }.into_any()
                    }
                    CardField::Text(text) => view! { <p>{text}</p> }.into_any(),
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::local_store::BrowserStorage;
    use adoul_cms_common::{messages, Fabric, Work};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(id: &str) -> HtmlElement {
        let document = dom::document().expect("document");
        let element: HtmlElement = document
            .create_element("div")
            .expect("create div")
            .dyn_into()
            .expect("HtmlElement");
        element.set_id(id);
        element.set_inner_html("<span>stale</span>");
        document.body().expect("body").append_child(&element).expect("append");
        element
    }

    #[wasm_bindgen_test]
    fn wasm_renders_one_card_per_fabric() {
        let store = RecordStore::new(BrowserStorage);
        let fabrics: Vec<Fabric> = ["أ", "ب", "ج"]
            .iter()
            .map(|name| Fabric { name: name.to_string(), fabric_type: "كنب".into(), ..Default::default() })
            .collect();
        store.write(&fabrics).expect("write");

        let element = container("fabricsContainer");
        render_catalog::<Fabric, _>("fabricsContainer", &store);

        let cards = element.query_selector_all(".card").expect("query");
        assert_eq!(cards.length(), 3);
        assert!(element.text_content().unwrap_or_default().starts_with("أ"));
        element.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_renders_placeholder_when_empty() {
        let store = RecordStore::new(BrowserStorage);
        store.write::<Work>(&[]).expect("write");

        let element = container("worksContainer");
        render_catalog::<Work, _>("worksContainer", &store);

        assert_eq!(element.query_selector_all(".card").expect("query").length(), 0);
        assert_eq!(element.text_content().unwrap_or_default(), messages::WORKS_EMPTY);
        element.remove();
    }
}
