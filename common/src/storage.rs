//! キー・バリューストア上のレコード一覧アクセサ
//!
//! ブラウザではlocalStorage、CLIではJSONファイル、テストではメモリを差し替えて使う。

use crate::error::Result;
use crate::types::Record;
use std::cell::RefCell;
use std::collections::HashMap;

/// 文字列のキー・バリューストア（localStorage相当）
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// メモリ上のストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生の値を直接書き込む（外部からの改ざん再現用）
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.insert_raw(key, value);
        Ok(())
    }
}

/// レコード一覧の読み書き
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    store: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// 一覧を読み込む
    ///
    /// 未保存・読み込み失敗・JSON不正はいずれも空リスト（警告ログのみ）
    pub fn read<T: Record>(&self) -> Vec<T> {
        match self.try_read::<T>() {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Error parsing data for {}: {}", T::KEY, e);
                Vec::new()
            }
        }
    }

    fn try_read<T: Record>(&self) -> Result<Vec<T>> {
        match self.store.get_item(T::KEY)? {
            Some(text) if !text.is_empty() => Ok(serde_json::from_str(&text)?),
            _ => Ok(Vec::new()),
        }
    }

    /// 一覧を上書き保存する
    pub fn write<T: Record>(&self, records: &[T]) -> Result<()> {
        let text = serde_json::to_string(records)?;
        self.store.set_item(T::KEY, &text)?;
        log::debug!("Saved {} record(s) to {}", records.len(), T::KEY);
        Ok(())
    }

    /// 現在の一覧を読み、末尾に追加して保存する
    ///
    /// 読み込みから書き込みまでの間に別の書き込みがあれば上書きされる
    pub fn append<T: Record>(&self, record: T) -> Result<()> {
        let mut records = self.read::<T>();
        records.push(record);
        self.write(&records)
    }
}

/// 書き込み不可のストア（容量超過の再現用）
#[cfg(test)]
pub(crate) struct FullStore;

#[cfg(test)]
impl KeyValueStore for FullStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(crate::error::CmsError::Storage("QuotaExceededError".into()))
    }
}
