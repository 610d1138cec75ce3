//! Listing fields: title, price, detail rows, breadcrumbs and description

use scraper::{ElementRef, Selector};

use super::selectors::{compile, first_text, text_of, SelectorChain};
use crate::error::Result;
use crate::item::BasicInfo;

/// Breadcrumb labels for the site root, never part of the category path
pub const ROOT_BREADCRUMB_LABELS: &[&str] = &["ホーム", "Home"];

pub const CATEGORY_SEPARATOR: &str = " > ";

const DEFAULT_CURRENCY: &str = "¥";

#[derive(Debug)]
pub struct ListingSelectors {
    title: SelectorChain,
    price: Selector,
    currency: Selector,
    amount: SelectorChain,
    price_note: SelectorChain,
    info_row: Selector,
    info_title: Selector,
    info_body: Selector,
    breadcrumb: Selector,
    description: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: SelectorChain::new(
                "title",
                &[r#"h1[data-testid="name"]"#, "h1.heading__a7d91561"],
            )?,
            price: compile(r#"[data-testid="price"]"#)?,
            currency: compile(".currency")?,
            amount: SelectorChain::new("price.amount", &[".number__6b270ca7", "span:last-child"])?,
            price_note: SelectorChain::new(
                "price.note",
                &[".iAMJxr", "p.merText.caption__5616e150"],
            )?,
            info_row: compile(".merDisplayRow")?,
            info_title: compile(".title__32cba457")?,
            info_body: compile(".body__32cba457")?,
            breadcrumb: compile(".merBreadcrumbItem a")?,
            description: compile(r#"[data-testid="description"]"#)?,
        })
    }

    pub fn title(&self, root: ElementRef<'_>) -> Option<String> {
        self.title.first_text(root)
    }

    /// Currency + amount, plus the tax/shipping note when the page shows one.
    /// Empty when the price container is missing.
    pub fn price(&self, root: ElementRef<'_>) -> String {
        let Some(container) = root.select(&self.price).next() else {
            return String::new();
        };

        let currency = container
            .select(&self.currency)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let amount = self
            .amount
            .first(container)
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();

        let mut price = format!("{}{}", currency.trim(), amount.trim());
        // The note sits outside the price container
        if let Some(note) = self.price_note.first_text(root) {
            price.push(' ');
            price.push_str(&note);
        }
        price
    }

    pub fn basic_info(&self, root: ElementRef<'_>) -> BasicInfo {
        let mut info = BasicInfo::new();
        for row in root.select(&self.info_row) {
            let (Some(label), Some(body)) = (
                first_text(row, &self.info_title),
                row.select(&self.info_body).next(),
            ) else {
                continue;
            };
            info.insert(label, join_lines(&text_of(body)));
        }
        info
    }

    pub fn category(&self, root: ElementRef<'_>) -> String {
        root.select(&self.breadcrumb)
            .map(text_of)
            .filter(|text| !text.is_empty() && !ROOT_BREADCRUMB_LABELS.contains(&text.as_str()))
            .collect::<Vec<_>>()
            .join(CATEGORY_SEPARATOR)
    }

    pub fn description(&self, root: ElementRef<'_>) -> String {
        first_text(root, &self.description).unwrap_or_default()
    }
}

/// Collapse a multi-line row body onto one line, dropping blank lines
fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn selectors() -> ListingSelectors {
        ListingSelectors::new().unwrap()
    }

    #[test]
    fn test_title_fallback_to_class_heading() {
        let document =
            Html::parse_document(r#"<div><h1 class="heading__a7d91561"> iPhone 13 </h1></div>"#);
        assert_eq!(
            selectors().title(document.root_element()).as_deref(),
            Some("iPhone 13")
        );
    }

    #[test]
    fn test_price_with_note() {
        let html = r#"
        <div data-testid="price">
            <span class="currency">¥</span><span class="number__6b270ca7">12,800</span>
        </div>
        <p class="merText caption__5616e150"> (税込) 送料込み </p>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            selectors().price(document.root_element()),
            "¥12,800 (税込) 送料込み"
        );
    }

    #[test]
    fn test_price_note_prefers_current_class() {
        let html = r#"
        <p class="merText caption__5616e150">(税込) 送料別</p>
        <div data-testid="price">
            <span class="currency">¥</span><span class="number__6b270ca7">5,500</span>
        </div>
        <p class="iAMJxr">(税込) 送料込み</p>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            selectors().price(document.root_element()),
            "¥5,500 (税込) 送料込み"
        );
    }

    #[test]
    fn test_price_amount_prefers_number_class() {
        let html = r#"
        <div data-testid="price">
            <span class="number__6b270ca7">9,999</span><span>円</span>
        </div>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(selectors().price(document.root_element()), "¥9,999");
    }

    #[test]
    fn test_price_defaults_currency_and_uses_last_span() {
        let html = r#"<div data-testid="price"><span>ignored</span><span>3,000</span></div>"#;
        let document = Html::parse_document(html);
        assert_eq!(selectors().price(document.root_element()), "¥3,000");
    }

    #[test]
    fn test_price_missing_container() {
        let html = r#"<p class="iAMJxr">送料込み</p>"#;
        let document = Html::parse_document(html);
        assert_eq!(selectors().price(document.root_element()), "");
    }

    #[test]
    fn test_basic_info_rows() {
        let html = r#"
        <div class="merDisplayRow">
            <div class="title__32cba457">商品の状態</div>
            <div class="body__32cba457">新品、未使用</div>
        </div>
        <div class="merDisplayRow">
            <div class="title__32cba457">配送の方法</div>
            <div class="body__32cba457">
                らくらくメルカリ便

                匿名配送
            </div>
        </div>
        <div class="merDisplayRow">
            <div class="title__32cba457">行のみ</div>
        </div>
        "#;
        let document = Html::parse_document(html);
        let info = selectors().basic_info(document.root_element());

        assert_eq!(info.len(), 2);
        assert_eq!(info.get("商品の状態"), Some("新品、未使用"));
        assert_eq!(info.get("配送の方法"), Some("らくらくメルカリ便 匿名配送"));
        assert_eq!(info.get("行のみ"), None);
    }

    #[test]
    fn test_category_drops_root() {
        let html = r#"
        <ul>
            <li class="merBreadcrumbItem"><a href="/">Home</a></li>
            <li class="merBreadcrumbItem"><a href="/c/1"> Electronics </a></li>
            <li class="merBreadcrumbItem"><a href="/c/2">Phones</a></li>
        </ul>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            selectors().category(document.root_element()),
            "Electronics > Phones"
        );
    }

    #[test]
    fn test_category_empty_without_breadcrumbs() {
        let document = Html::parse_document("<div></div>");
        assert_eq!(selectors().category(document.root_element()), "");
    }

    #[test]
    fn test_description_keeps_inner_newlines() {
        let html = "<pre data-testid=\"description\">\n  一度使用しました。\n即購入OKです。\n</pre>";
        let document = Html::parse_document(html);
        assert_eq!(
            selectors().description(document.root_element()),
            "一度使用しました。\n即購入OKです。"
        );
    }
}
