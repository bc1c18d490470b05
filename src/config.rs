use crate::error::{AppError, Result};
use crate::file_store::FileStore;
use adoul_cms_common::DEFAULT_ADMIN_PASSWORD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ADMIN_PASSWORD_ENV: &str = "ADOUL_ADMIN_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub admin_password: Option<String>,
    pub store_path: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込めない設定ファイルは既定値として扱う
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                log::warn!("{}", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("設定ファイルを読み込めません（既定値を使用）: {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("adoul-cms").join("config.json"))
    }

    /// 管理パスワード（環境変数 > 設定ファイル > 既定値）
    pub fn admin_password(&self) -> String {
        self.admin_password_with(std::env::var(ADMIN_PASSWORD_ENV).ok())
    }

    /// 空の値は未設定として扱う
    fn admin_password_with(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|p| !p.is_empty())
            .or_else(|| self.admin_password.clone().filter(|p| !p.is_empty()))
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string())
    }

    pub fn set_admin_password(&mut self, password: String) -> Result<()> {
        self.admin_password = Some(password);
        self.save()
    }

    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => FileStore::default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_is_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
        assert!(config.admin_password.is_none());
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            admin_password: Some("s3cret".into()),
            store_path: Some(dir.path().join("storage.json")),
        };
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.admin_password.as_deref(), Some("s3cret"));
        assert_eq!(loaded.store_path, config.store_path);
    }

    #[test]
    fn test_admin_password_precedence() {
        let config = Config { admin_password: Some("from-file".into()), ..Default::default() };

        assert_eq!(config.admin_password_with(Some("from-env".into())), "from-env");
        assert_eq!(config.admin_password_with(None), "from-file");
        assert_eq!(Config::default().admin_password_with(None), DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_empty_admin_password_is_unset() {
        let config = Config { admin_password: Some(String::new()), ..Default::default() };

        assert_eq!(config.admin_password_with(Some(String::new())), DEFAULT_ADMIN_PASSWORD);
        assert_eq!(Config::default().admin_password_with(Some(String::new())), DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{broken").expect("書き込み失敗");

        assert!(matches!(Config::load_from(&path), Err(AppError::JsonParse(_))));
    }

    #[test]
    fn test_malformed_config_falls_back_and_can_be_repaired() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{broken").expect("書き込み失敗");

        let mut config = Config::load_or_default_from(&path);
        assert!(config.admin_password.is_none());

        config.admin_password = Some("fixed".into());
        config.save_to(&path).expect("保存失敗");
        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.admin_password.as_deref(), Some("fixed"));
    }

    #[test]
    fn test_explicit_store_path() {
        let config = Config { store_path: Some(PathBuf::from("/tmp/x.json")), ..Default::default() };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/tmp/x.json"));
    }
}
