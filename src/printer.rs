//! カタログ・選択肢のテキスト表示

use adoul_cms_common::{CardField, CatalogView, SelectOption};

/// Data URLからMIMEタイプを抽出
pub fn data_url_mime(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")?
        .split([';', ','])
        .next()
        .filter(|mime| !mime.is_empty())
}

/// Data URLのBase64部分を抽出
pub fn data_url_payload(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

fn image_summary(data_url: &str) -> String {
    match (data_url_mime(data_url), data_url_payload(data_url)) {
        (Some(mime), Some(payload)) => format!("[{} {} chars]", mime, payload.len()),
        _ => "[画像なし]".to_string(),
    }
}

pub fn render_catalog(catalog: &CatalogView) -> String {
    let cards = match catalog {
        CatalogView::Empty { message } => return message.to_string(),
        CatalogView::Cards(cards) => cards,
    };

    let mut lines = Vec::new();
    for card in cards {
        lines.push(format!("■ {}", card.heading));
        for field in &card.fields {
            match field {
                CardField::Labeled { label, value } => lines.push(format!("  {} {}", label, value)),
                CardField::Text(text) if !text.is_empty() => lines.push(format!("  {}", text)),
                CardField::Text(_) => {}
            }
        }
        lines.push(format!("  {}", image_summary(&card.image)));
    }
    lines.join("\n")
}

pub fn render_options(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|option| format!("{:?}\t{}", option.value, option.label))
        .collect::<Vec<_>>()
        .join("\n")
}
