//! カタログ表示モデル
//!
//! 保存順のままカードに変換する。描画はフロントエンド側（Leptos / CLI）が行う。

use crate::messages;
use crate::types::{Fabric, Work};

/// カード内の項目
#[derive(Debug, Clone, PartialEq)]
pub enum CardField {
    /// 太字の固定ラベル + 値
    Labeled { label: &'static str, value: String },
    /// 値のみの段落
    Text(String),
}

/// 1レコード分のカード
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub image: String,
    pub alt: String,
    pub heading: String,
    pub fields: Vec<CardField>,
}

/// 一覧表示
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Empty { message: &'static str },
    Cards(Vec<Card>),
}

impl CatalogView {
    pub fn cards(&self) -> &[Card] {
        match self {
            CatalogView::Empty { .. } => &[],
            CatalogView::Cards(cards) => cards.as_slice(),
        }
    }
}

/// カードとして表示できるレコード
pub trait Cardable {
    /// 一覧が空のときの文言
    const EMPTY_MESSAGE: &'static str;

    fn to_card(&self) -> Card;
}

impl Cardable for Fabric {
    const EMPTY_MESSAGE: &'static str = messages::FABRICS_EMPTY;

    fn to_card(&self) -> Card {
        Card {
            image: self.image.clone(),
            alt: self.name.clone(),
            heading: self.name.clone(),
            fields: vec![
                CardField::Labeled { label: messages::CODE_LABEL, value: self.code.clone() },
                CardField::Labeled { label: messages::TYPE_LABEL, value: self.fabric_type.clone() },
                CardField::Text(self.notes.clone()),
            ],
        }
    }
}

impl Cardable for Work {
    const EMPTY_MESSAGE: &'static str = messages::WORKS_EMPTY;

    fn to_card(&self) -> Card {
        Card {
            image: self.image.clone(),
            alt: self.title.clone(),
            heading: self.title.clone(),
            fields: vec![CardField::Text(self.description.clone())],
        }
    }
}

pub fn catalog_view<T: Cardable>(records: &[T]) -> CatalogView {
    if records.is_empty() {
        return CatalogView::Empty { message: T::EMPTY_MESSAGE };
    }
    CatalogView::Cards(records.iter().map(Cardable::to_card).collect())
}

/// セレクトボックスの選択肢
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// 依頼フォームの生地選択肢
///
/// 先頭は常に値が空のプレースホルダ。ラベルはコードがあれば `名前 (コード)`。
pub fn fabric_options(fabrics: &[Fabric]) -> Vec<SelectOption> {
    let placeholder = SelectOption {
        value: String::new(),
        label: messages::FABRIC_PLACEHOLDER_OPTION.to_string(),
    };

    std::iter::once(placeholder)
        .chain(fabrics.iter().map(|fabric| {
            let label = if fabric.code.is_empty() {
                fabric.name.clone()
            } else {
                format!("{} ({})", fabric.name, fabric.code)
            };
            SelectOption { value: fabric.name.clone(), label }
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fabric(name: &str, code: &str) -> Fabric {
        Fabric {
            id: 1,
            name: name.to_string(),
            code: code.to_string(),
            fabric_type: "ستائر".to_string(),
            notes: "ملاحظة".to_string(),
            image: format!("data:image/png;base64,{}", name.len()),
        }
    }

    #[test]
    fn test_empty_fabrics_shows_placeholder() {
        let view = catalog_view::<Fabric>(&[]);
        assert_eq!(view, CatalogView::Empty { message: messages::FABRICS_EMPTY });
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_empty_works_shows_placeholder() {
        let view = catalog_view::<Work>(&[]);
        assert_eq!(view, CatalogView::Empty { message: messages::WORKS_EMPTY });
    }

    #[test]
    fn test_one_card_per_fabric_in_order() {
        let fabrics = vec![fabric("ب", "2"), fabric("أ", "1"), fabric("ج", "")];
        let view = catalog_view(&fabrics);

        let headings: Vec<&str> = view.cards().iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, vec!["ب", "أ", "ج"]);
    }

    #[test]
    fn test_fabric_card_fields() {
        let card = fabric("كتان", "L-1").to_card();

        assert_eq!(card.alt, "كتان");
        assert_eq!(card.image, "data:image/png;base64,8");
        assert_eq!(
            card.fields,
            vec![
                CardField::Labeled { label: messages::CODE_LABEL, value: "L-1".to_string() },
                CardField::Labeled { label: messages::TYPE_LABEL, value: "ستائر".to_string() },
                CardField::Text("ملاحظة".to_string()),
            ]
        );
    }

    #[test]
    fn test_work_card_fields_verbatim() {
        // マークアップはそのまま文字列として保持する
        let work = Work {
            id: 9,
            title: "<b>مجلس</b>".to_string(),
            description: "تفصيل & تركيب".to_string(),
            image: "data:image/jpeg;base64,/9j/".to_string(),
        };
        let card = work.to_card();

        assert_eq!(card.heading, "<b>مجلس</b>");
        assert_eq!(card.fields, vec![CardField::Text("تفصيل & تركيب".to_string())]);
    }

    #[test]
    fn test_options_placeholder_only() {
        let options = fabric_options(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, messages::FABRIC_PLACEHOLDER_OPTION);
    }

    #[test]
    fn test_options_one_per_fabric() {
        let options = fabric_options(&[fabric("كتان", "L-1"), fabric("حرير", "")]);

        assert_eq!(options.len(), 3);
        assert_eq!(options[1], SelectOption { value: "كتان".into(), label: "كتان (L-1)".into() });
        assert_eq!(options[2], SelectOption { value: "حرير".into(), label: "حرير".into() });
    }
}
