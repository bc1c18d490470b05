//! フォームのイベントハンドラ
//!
//! - 生地 / 施工実績の追加（管理画面）
//! - 仕立て依頼の送信
//! - 管理画面のパスワードゲート

use crate::dom;
use crate::local_store::BrowserStorage;
use adoul_cms_common::{
    messages, prepare, AdminGate, Authenticator, Draft, FabricDraft, GateState, QuoteRequest,
    Record, RecordId, RecordStore, WorkDraft,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlFormElement};

fn now_millis() -> RecordId {
    js_sys::Date::now() as RecordId
}

/// submitイベントを既定動作なしで受け取る
fn on_submit<F>(form: &HtmlFormElement, mut handler: F)
where
    F: FnMut(&HtmlFormElement) + 'static,
{
    let target = form.clone();
    EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            handler(&target);
        },
    )
    .forget();
}

/// レコード追加フォームを接続する
///
/// 入力チェックはsubmit時に同期で行い、画像読み込み以降は非同期。
/// 保存が終わってから完了アラートとフォームのリセットを行う。
fn wire_record_form<D, F>(
    form_id: &str,
    image_field: &'static str,
    success: &'static str,
    store: RecordStore<BrowserStorage>,
    read_draft: F,
) where
    D: Draft + 'static,
    F: Fn() -> D + 'static,
{
    let Some(form) = dom::element_by_id::<HtmlFormElement>(form_id) else {
        return;
    };

    on_submit(&form, move |form| {
        let pending = match prepare(read_draft(), dom::selected_files(image_field)) {
            Ok(pending) => pending,
            Err(e) => {
                dom::alert(&e.to_string());
                return;
            }
        };

        let form = form.clone();
        let store = store.clone();
        spawn_local(async move {
            match pending.commit(&store, &now_millis).await {
                Ok(_) => {
                    dom::alert(success);
                    form.reset();
                }
                Err(e) => log::error!(
                    "Failed to save {}: {}",
                    <D::Record as Record>::KEY,
                    e
                ),
            }
        });
    });
}

pub fn wire_fabric_form(store: RecordStore<BrowserStorage>) {
    wire_record_form("fabricForm", "fabricImage", messages::FABRIC_ADDED, store, || FabricDraft {
        name: dom::field_value("fabricName"),
        code: dom::field_value("fabricCode"),
        fabric_type: dom::field_value("fabricType"),
        notes: dom::field_value("fabricNotes"),
    });
}

pub fn wire_work_form(store: RecordStore<BrowserStorage>) {
    wire_record_form("workForm", "workImage", messages::WORK_ADDED, store, || WorkDraft {
        title: dom::field_value("workTitle"),
        description: dom::field_value("workDescription"),
    });
}

/// 仕立て依頼: 確認アラートを出してフォームをリセットする（保存しない）
pub fn wire_request_form() {
    let Some(form) = dom::element_by_id::<HtmlFormElement>("requestForm") else {
        return;
    };

    on_submit(&form, |form| {
        let request = QuoteRequest {
            item: dom::field_value("requestItem"),
            fabric: dom::field_value("requestFabric"),
            dimensions: dom::field_value("requestDimensions"),
            city: dom::field_value("requestCity"),
            phone: dom::field_value("requestPhone"),
        };

        match request.validate() {
            Ok(request) => {
                dom::alert(&request.confirmation());
                form.reset();
            }
            Err(e) => dom::alert(&e.to_string()),
        }
    });
}

fn set_display(element: &HtmlElement, value: &str) {
    if let Err(e) = element.style().set_property("display", value) {
        log::warn!("Failed to set display of #{}: {:?}", element.id(), e);
    }
}

/// 管理画面のログイン
///
/// ログインセクションと管理コンテンツの両方がある場合のみ有効
pub fn wire_admin_gate<A: Authenticator + 'static>(auth: A) {
    let (Some(login), Some(content)) = (
        dom::element_by_id::<HtmlElement>("loginSection"),
        dom::element_by_id::<HtmlElement>("adminContent"),
    ) else {
        return;
    };
    let Some(button) = dom::element_by_id::<HtmlElement>("loginButton") else {
        log::debug!("#loginButton not found");
        return;
    };

    let mut gate = AdminGate::new(auth);
    EventListener::new(&button, "click", move |_| {
        let candidate = dom::field_value("adminPassword");
        match gate.unlock(&candidate) {
            GateState::Unlocked => {
                set_display(&login, "none");
                set_display(&content, "block");
            }
            GateState::Locked => dom::alert(messages::WRONG_PASSWORD),
        }
    })
    .forget();
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use adoul_cms_common::{Fabric, KeyValueStore, SharedPassword};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::HtmlInputElement;

    wasm_bindgen_test_configure!(run_in_browser);

    /// テスト用のDOM断片（drop時に取り除く）
    struct Fixture(HtmlElement);

    impl Fixture {
        fn new(markup: &str) -> Self {
            let document = dom::document().expect("document");
            let root: HtmlElement = document
                .create_element("div")
                .expect("create div")
                .dyn_into()
                .expect("HtmlElement");
            root.set_inner_html(markup);
            document.body().expect("body").append_child(&root).expect("append");
            Fixture(root)
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.0.remove();
        }
    }

    /// window.alert を記録用の関数に差し替える
    fn capture_alerts() {
        let window = web_sys::window().expect("window");
        let stub = js_sys::Function::new_with_args(
            "message",
            "(window.__alerts = window.__alerts || []).push(message)",
        );
        js_sys::Reflect::set(&window, &JsValue::from_str("alert"), &stub).expect("stub alert");
        js_sys::Reflect::set(&window, &JsValue::from_str("__alerts"), &js_sys::Array::new())
            .expect("reset alerts");
    }

    fn alerts() -> Vec<String> {
        let window = web_sys::window().expect("window");
        let list = js_sys::Reflect::get(&window, &JsValue::from_str("__alerts")).expect("alerts");
        js_sys::Array::from(&list).iter().filter_map(|v| v.as_string()).collect()
    }

    fn input(id: &str) -> HtmlInputElement {
        dom::element_by_id::<HtmlInputElement>(id).expect("input")
    }

    fn display(id: &str) -> String {
        dom::element_by_id::<HtmlElement>(id)
            .expect("element")
            .style()
            .get_property_value("display")
            .expect("display")
    }

    fn submit(form_id: &str) {
        let form = dom::element_by_id::<HtmlFormElement>(form_id).expect("form");
        let event = web_sys::Event::new("submit").expect("event");
        form.dispatch_event(&event).expect("dispatch");
    }

    const ADMIN_MARKUP: &str = r#"
        <div id="loginSection" style="display: block">
            <input id="adminPassword" type="password">
            <button id="loginButton" type="button">login</button>
        </div>
        <div id="adminContent" style="display: none"></div>
    "#;

    #[wasm_bindgen_test]
    fn wasm_correct_password_reveals_admin_content() {
        capture_alerts();
        let _fixture = Fixture::new(ADMIN_MARKUP);
        wire_admin_gate(SharedPassword::new("x"));

        input("adminPassword").set_value("x");
        dom::element_by_id::<HtmlElement>("loginButton").expect("button").click();

        assert_eq!(display("loginSection"), "none");
        assert_eq!(display("adminContent"), "block");
        assert!(alerts().is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_wrong_password_keeps_sections() {
        capture_alerts();
        let _fixture = Fixture::new(ADMIN_MARKUP);
        wire_admin_gate(SharedPassword::new("x"));

        input("adminPassword").set_value("y");
        dom::element_by_id::<HtmlElement>("loginButton").expect("button").click();

        assert_eq!(display("loginSection"), "block");
        assert_eq!(display("adminContent"), "none");
        assert_eq!(alerts(), vec![messages::WRONG_PASSWORD.to_string()]);
    }

    #[wasm_bindgen_test]
    fn wasm_gate_inactive_without_admin_content() {
        capture_alerts();
        let _fixture = Fixture::new(
            r#"
            <div id="loginSection" style="display: block">
                <input id="adminPassword" type="password">
                <button id="loginButton" type="button">login</button>
            </div>
            "#,
        );
        wire_admin_gate(SharedPassword::new("x"));

        input("adminPassword").set_value("x");
        dom::element_by_id::<HtmlElement>("loginButton").expect("button").click();

        assert_eq!(display("loginSection"), "block");
        assert!(alerts().is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_valid_request_alerts_and_resets() {
        capture_alerts();
        let _fixture = Fixture::new(
            r#"
            <form id="requestForm">
                <input id="requestItem">
                <input id="requestFabric">
                <input id="requestDimensions">
                <input id="requestCity">
                <input id="requestPhone">
            </form>
            "#,
        );
        wire_request_form();

        input("requestItem").set_value("ستائر");
        input("requestFabric").set_value("كتان");
        input("requestPhone").set_value(" 0500000000 ");
        submit("requestForm");

        let shown = alerts();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].contains("- الهاتف: 0500000000"));
        assert_eq!(input("requestItem").value(), "");
        assert_eq!(input("requestPhone").value(), "");
    }

    #[wasm_bindgen_test]
    fn wasm_incomplete_request_keeps_fields() {
        capture_alerts();
        let _fixture = Fixture::new(
            r#"
            <form id="requestForm">
                <input id="requestItem">
                <input id="requestFabric">
                <input id="requestPhone">
            </form>
            "#,
        );
        wire_request_form();

        input("requestItem").set_value("ستائر");
        submit("requestForm");

        assert_eq!(alerts(), vec![messages::REQUEST_INCOMPLETE.to_string()]);
        assert_eq!(input("requestItem").value(), "ستائر");
    }

    #[wasm_bindgen_test]
    fn wasm_fabric_without_type_is_not_saved() {
        capture_alerts();
        web_sys::window()
            .expect("window")
            .local_storage()
            .expect("localStorage")
            .expect("localStorage")
            .remove_item(Fabric::KEY)
            .expect("remove");
        let _fixture = Fixture::new(
            r#"
            <form id="fabricForm">
                <input id="fabricName">
                <input id="fabricCode">
                <input id="fabricType">
                <textarea id="fabricNotes"></textarea>
                <input id="fabricImage" type="file">
            </form>
            "#,
        );
        wire_fabric_form(RecordStore::new(BrowserStorage));

        input("fabricName").set_value("كتان");
        submit("fabricForm");

        assert_eq!(alerts(), vec![messages::FABRIC_INCOMPLETE.to_string()]);
        assert_eq!(BrowserStorage.get_item(Fabric::KEY).expect("get"), None);
    }
}
