//! JSONファイルのキー・バリューストア
//!
//! ブラウザのlocalStorageと同じく、キーごとに「JSON文字列」を値として持つ。
//! `{"fabrics": "[...]", "works": "[...]"}`

use crate::error::{AppError, Result};
use adoul_cms_common::{CmsError, KeyValueStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<データディレクトリ>/adoul-cms/storage.json`
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data_dir.join("adoul-cms").join(STORE_FILE_NAME))
    }

    fn storage_error(&self, e: impl std::fmt::Display) -> CmsError {
        CmsError::Storage(format!("{}: {}", self.path.display(), e))
    }

    fn load(&self) -> adoul_cms_common::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| self.storage_error(e))
    }

    fn save(&self, items: &BTreeMap<String, String>) -> adoul_cms_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }

        let content = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, content).map_err(|e| self.storage_error(e))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> adoul_cms_common::Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    /// 壊れたファイルは上書きせずエラーにする
    fn set_item(&self, key: &str, value: &str) -> adoul_cms_common::Result<()> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }
}
