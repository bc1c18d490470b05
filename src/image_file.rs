//! 画像ファイルをData URLに変換する

use adoul_cms_common::{CmsError, ImageSource, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::future::Future;
use std::path::{Path, PathBuf};

/// 拡張子からMIMEタイプを判定
pub fn mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// ローカルの画像ファイル
#[derive(Debug, Clone)]
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for ImageFile {
    fn read_data_url(self) -> impl Future<Output = Result<String>> {
        async move {
            let mime = mime_type(&self.path).ok_or_else(|| {
                CmsError::Image(format!("未対応の画像形式: {}", self.path.display()))
            })?;
            let bytes = tokio::fs::read(&self.path)
                .await
                .map_err(|e| CmsError::Image(format!("{}: {}", self.path.display(), e)))?;
            Ok(to_data_url(mime, &bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_type(Path::new("dir/b.png")), Some("image/png"));
        assert_eq!(mime_type(Path::new("c.webp")), Some("image/webp"));
        assert_eq!(mime_type(Path::new("d.txt")), None);
        assert_eq!(mime_type(Path::new("noext")), None);
    }

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }
}
