//! 仕立て依頼フォーム
//!
//! 保存はしない。確認メッセージを組み立てて表示するだけ。

use crate::error::ValidationError;
use crate::messages;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteRequest {
    /// 仕立ての種類（セレクトボックスの値）
    pub item: String,
    /// 生地名（セレクトボックスの値）
    pub fabric: String,
    pub dimensions: String,
    pub city: String,
    pub phone: String,
}

impl QuoteRequest {
    /// 自由入力欄の前後空白を除去し、必須項目（種類・生地・電話番号）を確認する
    pub fn validate(self) -> Result<Self, ValidationError> {
        let request = Self {
            dimensions: self.dimensions.trim().to_string(),
            city: self.city.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..self
        };

        if request.item.is_empty() || request.fabric.is_empty() || request.phone.is_empty() {
            return Err(ValidationError::IncompleteRequest);
        }
        Ok(request)
    }

    /// 依頼内容のまとめ
    pub fn summary(&self) -> String {
        [
            messages::REQUEST_HEADER.to_string(),
            format!("- المطلوب: {}", self.item),
            format!("- القماش: {}", self.fabric),
            format!("- الأبعاد: {}", self.dimensions),
            format!("- المدينة: {}", self.city),
            format!("- الهاتف: {}", self.phone),
        ]
        .join("\n")
    }

    /// 送信完了アラートの本文
    pub fn confirmation(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            messages::REQUEST_SENT,
            self.summary(),
            messages::REQUEST_FOLLOW_UP
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> QuoteRequest {
        QuoteRequest {
            item: "ستائر".to_string(),
            fabric: "كتان".to_string(),
            dimensions: " 3x2 ".to_string(),
            city: " الرياض".to_string(),
            phone: " 0500000000 ".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_free_text() {
        let request = request().validate().expect("入力チェック失敗");
        assert_eq!(request.dimensions, "3x2");
        assert_eq!(request.city, "الرياض");
        assert_eq!(request.phone, "0500000000");
    }

    #[test]
    fn test_missing_required_fields() {
        for broken in [
            QuoteRequest { item: String::new(), ..request() },
            QuoteRequest { fabric: String::new(), ..request() },
            QuoteRequest { phone: "   ".to_string(), ..request() },
        ] {
            assert_eq!(broken.validate().unwrap_err(), ValidationError::IncompleteRequest);
        }
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let request = QuoteRequest { dimensions: String::new(), city: String::new(), ..request() }
            .validate()
            .expect("入力チェック失敗");

        assert!(request.summary().contains("- الأبعاد: \n"));
        assert!(request.summary().contains("- المدينة: \n"));
    }

    #[test]
    fn test_summary_format() {
        let request = request().validate().unwrap();
        assert_eq!(
            request.summary(),
            "طلب تفصيل جديد:\n- المطلوب: ستائر\n- القماش: كتان\n- الأبعاد: 3x2\n- المدينة: الرياض\n- الهاتف: 0500000000"
        );
    }

    #[test]
    fn test_confirmation_wraps_summary() {
        let request = request().validate().unwrap();
        let text = request.confirmation();

        assert!(text.starts_with("تم إرسال طلبك بنجاح!\n\nطلب تفصيل جديد:"));
        assert!(text.ends_with("\n\nيرجى التواصل معنا عبر واتساب أو الاتصال لإكمال التفاصيل."));
    }
}
