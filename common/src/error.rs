//! エラー型定義

use crate::messages;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 入力チェックエラー
///
/// Displayはそのままユーザーへのアラート文言になる
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", messages::FABRIC_INCOMPLETE)]
    IncompleteFabric,

    #[error("{}", messages::WORK_INCOMPLETE)]
    IncompleteWork,

    #[error("{}", messages::REQUEST_INCOMPLETE)]
    IncompleteRequest,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, CmsError>;
