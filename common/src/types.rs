//! カタログレコードの型定義
//!
//! ブラウザのlocalStorageに保存されている既存データと互換のJSONフィールド名を使う:
//! - Fabric: `{"id","name","code","type","notes","image"}`
//! - Work:   `{"id","title","description","image"}`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// レコードID（作成時刻のミリ秒）
pub type RecordId = i64;

/// 名前付きコレクションとして保存されるレコード
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// ストレージのキー
    const KEY: &'static str;
}

/// 生地
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fabric {
    pub id: RecordId,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub fabric_type: String,
    pub notes: String,
    /// Data URL (`data:image/...;base64,...`)
    pub image: String,
}

impl Record for Fabric {
    const KEY: &'static str = "fabrics";
}

/// 施工実績
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Work {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl Record for Work {
    const KEY: &'static str = "works";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabric_serialize_uses_type_key() {
        let fabric = Fabric {
            id: 1700000000000,
            name: "كتان".to_string(),
            fabric_type: "ستائر".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&fabric).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"ستائر\""));
        assert!(json.contains("\"id\":1700000000000"));
        assert!(!json.contains("fabric_type"));
    }

    #[test]
    fn test_fabric_deserialize_browser_record() {
        let json = r#"{
            "id": 1712345678901,
            "name": "مخمل",
            "code": "V-12",
            "type": "كنب",
            "notes": "",
            "image": "data:image/png;base64,iVBORw0KGgo="
        }"#;

        let fabric: Fabric = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(fabric.id, 1712345678901);
        assert_eq!(fabric.code, "V-12");
        assert_eq!(fabric.fabric_type, "كنب");
        assert!(fabric.image.starts_with("data:image/png"));
    }

    #[test]
    fn test_work_deserialize_missing_fields() {
        // 古いデータでdescriptionが無くても読める
        let json = r#"{"id": 5, "title": "مجلس"}"#;

        let work: Work = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(work.title, "مجلس");
        assert_eq!(work.description, "");
        assert_eq!(work.image, "");
    }

    #[test]
    fn test_record_keys() {
        assert_eq!(Fabric::KEY, "fabrics");
        assert_eq!(Work::KEY, "works");
    }
}
