//! localStorage ストア

use adoul_cms_common::{CmsError, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// `window.localStorage`
///
/// 呼び出しのたびに取得し直す（プライベートモード等で取得できない場合はエラー）
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(e: JsValue) -> CmsError {
    CmsError::Storage(format!("{:?}", e))
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| CmsError::Storage("window is not available".into()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| CmsError::Storage("localStorage is not available".into()))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use adoul_cms_common::{Fabric, RecordStore, Work};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_fabrics_roundtrip() {
        let store = RecordStore::new(BrowserStorage);
        let fabrics = vec![Fabric {
            id: 1712345678901,
            name: "كتان".to_string(),
            fabric_type: "ستائر".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
            ..Default::default()
        }];

        store.write(&fabrics).expect("localStorage write failed");
        assert_eq!(store.read::<Fabric>(), fabrics);
    }

    #[wasm_bindgen_test]
    fn wasm_malformed_entry_reads_empty() {
        BrowserStorage.set_item("works", "{oops").expect("localStorage write failed");
        let store = RecordStore::new(BrowserStorage);
        assert!(store.read::<Work>().is_empty());
    }
}
