//! サブコマンドの実処理

use crate::error::{AppError, Result};
use crate::image_file::ImageFile;
use crate::printer;
use adoul_cms_common::{
    catalog_view, fabric_options, prepare, AdminGate, Authenticator, Cardable, Draft, Fabric,
    GateState, KeyValueStore, QuoteRequest, Record, RecordId, RecordStore,
};
use std::path::PathBuf;

fn now_millis() -> RecordId {
    chrono::Utc::now().timestamp_millis()
}

/// 保存済みレコードの一覧表示
pub fn show_catalog<T, S>(store: &RecordStore<S>) -> String
where
    T: Record + Cardable,
    S: KeyValueStore,
{
    printer::render_catalog(&catalog_view(&store.read::<T>()))
}

/// 依頼フォームの生地選択肢
pub fn show_fabric_options<S: KeyValueStore>(store: &RecordStore<S>) -> String {
    printer::render_options(&fabric_options(&store.read::<Fabric>()))
}

/// 管理パスワードの確認
///
/// `password` が無ければ対話入力する
pub fn authorize<A: Authenticator>(auth: A, password: Option<String>) -> Result<()> {
    let candidate = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("管理パスワード")
            .interact()?,
    };

    match AdminGate::new(auth).unlock(&candidate) {
        GateState::Unlocked => Ok(()),
        GateState::Locked => Err(AppError::AccessDenied),
    }
}

/// レコード追加（入力チェック → 画像読み込み → 追加保存）
pub async fn add_record<D, S>(store: &RecordStore<S>, draft: D, image: Option<PathBuf>) -> Result<D::Record>
where
    D: Draft,
    S: KeyValueStore,
{
    let images: Vec<ImageFile> = image.into_iter().map(ImageFile::new).collect();
    let pending = prepare(draft, images).map_err(adoul_cms_common::CmsError::from)?;
    let record = pending.commit(store, &now_millis).await?;
    Ok(record)
}

/// 依頼内容の確認メッセージ
pub fn quote(request: QuoteRequest) -> Result<String> {
    let request = request.validate().map_err(adoul_cms_common::CmsError::from)?;
    Ok(request.confirmation())
}
