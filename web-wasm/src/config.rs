//! ビルド時設定

use adoul_cms_common::{SharedPassword, DEFAULT_ADMIN_PASSWORD};

/// 管理画面パスワード
///
/// ビルド時の環境変数 `ADOUL_ADMIN_PASSWORD` で上書きできる
pub fn admin_password() -> &'static str {
    option_env!("ADOUL_ADMIN_PASSWORD").unwrap_or(DEFAULT_ADMIN_PASSWORD)
}

pub fn authenticator() -> SharedPassword {
    SharedPassword::new(admin_password())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adoul_cms_common::Authenticator;

    #[test]
    fn test_authenticator_uses_admin_password() {
        let auth = authenticator();
        assert!(auth.verify(admin_password()));
        assert!(!auth.verify(""));
    }
}
