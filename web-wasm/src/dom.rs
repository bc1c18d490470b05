//! DOM ヘルパー
//!
//! ページに要素が無い場合は `None` / 空文字を返し、呼び出し側で機能ごと無効にする。

use crate::image_reader::BrowserImage;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// IDで要素を取得し、指定の型にキャストする
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// input / select / textarea の現在値
pub fn field_value(id: &str) -> String {
    let Some(element) = element_by_id::<web_sys::Element>(id) else {
        log::debug!("#{} not found", id);
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// ファイル入力で選択されたファイル
pub fn selected_files(id: &str) -> Vec<BrowserImage> {
    let Some(files) = element_by_id::<HtmlInputElement>(id).and_then(|input| input.files()) else {
        return Vec::new();
    };

    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(BrowserImage)
        .collect()
}

/// ブロッキングのアラート
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}
