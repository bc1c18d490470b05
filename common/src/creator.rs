//! レコード追加処理（2段階）
//!
//! 1. `prepare`: 入力チェック（同期）。失敗時は何も保存しない。
//! 2. `PendingRecord::commit`: 画像をData URLとして読み込んだ後に、
//!    一覧を読み込み → 追加 → 保存。完了通知とフォームのリセットは
//!    呼び出し側がこのFutureの完了後に行う。

use crate::error::{Result, ValidationError};
use crate::storage::{KeyValueStore, RecordStore};
use crate::types::{Fabric, Record, RecordId, Work};
use std::future::Future;

/// 添付画像（ブラウザのFile / CLIのファイルパス）
pub trait ImageSource {
    /// 画像を `data:<mime>;base64,...` 形式で読み込む
    fn read_data_url(self) -> impl Future<Output = Result<String>>;
}

/// レコードIDの採番元（現在時刻ミリ秒）
pub trait Clock {
    fn now_millis(&self) -> RecordId;
}

impl<F: Fn() -> RecordId> Clock for F {
    fn now_millis(&self) -> RecordId {
        self()
    }
}

/// フォーム入力
pub trait Draft: Sized {
    type Record: Record;

    /// 必須項目が欠けているときのエラー
    const INCOMPLETE: ValidationError;

    /// 前後の空白を除去する
    fn normalize(self) -> Self;

    /// 画像以外の必須項目が揃っているか
    fn is_complete(&self) -> bool;

    fn into_record(self, id: RecordId, image: String) -> Self::Record;
}

/// 生地追加フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FabricDraft {
    pub name: String,
    pub code: String,
    /// セレクトボックスの値（trimしない）
    pub fabric_type: String,
    pub notes: String,
}

impl Draft for FabricDraft {
    type Record = Fabric;

    const INCOMPLETE: ValidationError = ValidationError::IncompleteFabric;

    fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            fabric_type: self.fabric_type,
            notes: self.notes.trim().to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.fabric_type.is_empty()
    }

    fn into_record(self, id: RecordId, image: String) -> Fabric {
        Fabric {
            id,
            name: self.name,
            code: self.code,
            fabric_type: self.fabric_type,
            notes: self.notes,
            image,
        }
    }
}

/// 施工実績追加フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkDraft {
    pub title: String,
    pub description: String,
}

impl Draft for WorkDraft {
    type Record = Work;

    const INCOMPLETE: ValidationError = ValidationError::IncompleteWork;

    fn normalize(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.title.is_empty()
    }

    fn into_record(self, id: RecordId, image: String) -> Work {
        Work {
            id,
            title: self.title,
            description: self.description,
            image,
        }
    }
}

/// 入力チェック済み・画像読み込み待ちのレコード
#[derive(Debug)]
pub struct PendingRecord<D, I> {
    draft: D,
    image: I,
}

/// 入力チェック
///
/// 必須項目が揃い、画像がちょうど1枚添付されている場合のみ成功する
pub fn prepare<D, I>(draft: D, images: Vec<I>) -> std::result::Result<PendingRecord<D, I>, ValidationError>
where
    D: Draft,
    I: ImageSource,
{
    let draft = draft.normalize();
    let mut images = images.into_iter();

    match (draft.is_complete(), images.next(), images.next()) {
        (true, Some(image), None) => Ok(PendingRecord { draft, image }),
        _ => Err(D::INCOMPLETE),
    }
}

impl<D: Draft, I: ImageSource> PendingRecord<D, I> {
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// 画像を読み込んでから一覧に追加・保存する
    ///
    /// 一覧の読み込みは画像の読み込み完了後に行う。同時に複数回呼ばれた場合の
    /// 排他はしない（後から保存した側が勝つ）。
    pub async fn commit<S, C>(self, store: &RecordStore<S>, clock: &C) -> Result<D::Record>
    where
        S: KeyValueStore,
        C: Clock,
    {
        let image = self.image.read_data_url().await?;
        let record = self.draft.into_record(clock.now_millis(), image);
        store.append(record.clone())?;
        log::info!("Added record to {}", <D::Record as Record>::KEY);
        Ok(record)
    }
}
