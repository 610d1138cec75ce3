//! One-shot export: HTML in, item + Markdown + filename out

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, Utc};
use regex::Regex;
use scraper::Html;
use serde::Serialize;
use tracing::info;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::extractors::ItemExtractor;
use crate::filename::generate_filename;
use crate::item::Item;
use crate::markdown::render_markdown;

/// Everything a sink needs for one listing
#[derive(Debug, Clone, Serialize)]
pub struct Export {
    pub item: Item,
    pub markdown: String,
    pub filename: String,
}

/// True for `https://jp.mercari.com/item/<id>` with nothing after the id
pub fn is_item_page(url: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https://jp\.mercari\.com/item/[^/]+$").unwrap())
        .is_match(url)
}

/// Export using the system clock in the configured offset
pub fn export_html(html: &str, url: &str, config: &ExportConfig) -> Result<Export> {
    export_html_at(html, url, config, config.now()?)
}

/// Export with an explicit capture instant
pub fn export_html_at(
    html: &str,
    url: &str,
    config: &ExportConfig,
    now: DateTime<FixedOffset>,
) -> Result<Export> {
    if html.trim().is_empty() {
        return Err(ExportError::EmptyDocument);
    }
    let document = Html::parse_document(html);
    let item = ItemExtractor::new(config.locale)?.extract_at(&document, url, now)?;

    let markdown = render_markdown(&item, config.locale);
    let filename = generate_filename(&item.title, now.with_timezone(&Utc), config);

    info!(
        title = %item.title,
        rows = item.basic_info.len(),
        comments = item.comments.len(),
        has_seller = item.seller.is_some(),
        "extracted listing"
    );

    Ok(Export {
        item,
        markdown,
        filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_item_page() {
        assert!(is_item_page("https://jp.mercari.com/item/m12345678901"));
        assert!(!is_item_page("https://jp.mercari.com/item/m123/comments"));
        assert!(!is_item_page("https://jp.mercari.com/search?keyword=iphone"));
        assert!(!is_item_page("http://jp.mercari.com/item/m123"));
    }

    #[test]
    fn test_export_bundle() {
        let html = r#"
        <html><body>
            <h1 data-testid="name">Switch 本体: 有機EL</h1>
            <div data-testid="price"><span class="currency">¥</span><span class="number__6b270ca7">32,000</span></div>
        </body></html>
        "#;
        let now = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 10, 12, 0, 5)
            .unwrap();
        let export = export_html_at(
            html,
            "https://jp.mercari.com/item/m1",
            &ExportConfig::default(),
            now,
        )
        .unwrap();

        assert_eq!(export.item.title, "Switch 本体: 有機EL");
        assert!(export.markdown.starts_with("# Switch 本体: 有機EL\n\n## 基本情報\n\n- **価格**: ¥32,000\n"));
        // Filename timestamp is UTC
        assert_eq!(export.filename, "mercari_Switch_本体__有機EL_20240510T030005.md");
    }

    #[test]
    fn test_blank_html_is_rejected() {
        let err = export_html("\n  \n", "https://jp.mercari.com/item/m1", &ExportConfig::default())
            .unwrap_err();
        assert!(matches!(err, ExportError::EmptyDocument));
    }
}
