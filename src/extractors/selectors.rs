//! Compiled CSS selectors and ordered fallback chains
//!
//! Marketplace markup carries hashed class names that change between site
//! releases, so most fields are looked up through a chain of selectors: the
//! current one first, older ones after it.

use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::{ExportError, Result};

/// Compile a single selector, surfacing parse failures as a structural fault
pub fn compile(source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|e| ExportError::InvalidSelector {
        selector: source.to_string(),
        message: e.to_string(),
    })
}

/// Prioritized list of selectors for one field
#[derive(Debug)]
pub struct SelectorChain {
    field: &'static str,
    selectors: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    pub fn new(field: &'static str, sources: &[&'static str]) -> Result<Self> {
        let selectors = sources
            .iter()
            .map(|source| compile(source).map(|selector| (*source, selector)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { field, selectors })
    }

    /// First element matched by the earliest selector that matches anything.
    /// Later selectors are not evaluated once one succeeds.
    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .enumerate()
            .find_map(|(index, (source, selector))| {
                let found = scope.select(selector).next()?;
                if index > 0 {
                    debug!(field = self.field, selector = *source, "resolved via fallback selector");
                }
                Some(found)
            })
    }

    pub fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        self.first(scope).map(text_of)
    }
}

/// Concatenated descendant text, trimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match of `selector` under `scope`
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(text_of)
}

/// Map an empty string to `None`
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_chain_prefers_earlier_selector() {
        let html = r#"
        <html><body>
            <h1 class="legacy">Old heading</h1>
            <h1 data-testid="name">  New heading  </h1>
        </body></html>
        "#;
        let document = Html::parse_document(html);
        let chain = SelectorChain::new("title", &[r#"h1[data-testid="name"]"#, "h1.legacy"]).unwrap();

        assert_eq!(
            chain.first_text(document.root_element()).as_deref(),
            Some("New heading")
        );
    }

    #[test]
    fn test_chain_falls_back() {
        let html = r#"<div><h1 class="legacy">Old heading</h1></div>"#;
        let document = Html::parse_document(html);
        let chain = SelectorChain::new("title", &[r#"h1[data-testid="name"]"#, "h1.legacy"]).unwrap();

        assert_eq!(
            chain.first_text(document.root_element()).as_deref(),
            Some("Old heading")
        );
    }

    #[test]
    fn test_chain_no_match() {
        let document = Html::parse_document("<div><p>nothing</p></div>");
        let chain = SelectorChain::new("title", &["h1"]).unwrap();
        assert!(chain.first(document.root_element()).is_none());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let err = SelectorChain::new("broken", &["div[["]).unwrap_err();
        assert!(matches!(err, ExportError::InvalidSelector { .. }));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("4.9".to_string()), Some("4.9".to_string()));
    }
}
