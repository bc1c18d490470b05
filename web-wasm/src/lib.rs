//! Adoul CMS Web (Leptos + WASM)
//!
//! 既存の静的ページに読み込まれ、ページ内にある要素IDに応じて
//! カタログ表示・フォーム処理・管理画面ゲートを有効にする。

mod bootstrap;
mod components;
mod config;
mod console_log;
mod dom;
mod forms;
mod image_reader;
mod local_store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    bootstrap::on_ready(bootstrap::run);
}
