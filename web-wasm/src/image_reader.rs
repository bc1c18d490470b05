//! 添付ファイルをData URLとして読み込む

use adoul_cms_common::{CmsError, ImageSource, Result};
use std::future::Future;

/// `<input type="file">` で選択されたファイル
pub struct BrowserImage(pub web_sys::File);

impl ImageSource for BrowserImage {
    fn read_data_url(self) -> impl Future<Output = Result<String>> {
        async move {
            let file = gloo::file::File::from(self.0);
            gloo::file::futures::read_as_data_url(&file)
                .await
                .map_err(|e| CmsError::Image(format!("{} の読み込みに失敗: {}", file.name(), e)))
        }
    }
}
