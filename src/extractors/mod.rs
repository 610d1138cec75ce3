//! Listing page extraction
//!
//! Every field resolves independently and falls back to an empty value when
//! its fragment is missing. Only a document with no content, or a selector
//! table that does not compile, is an error.

mod comments;
mod listing;
mod selectors;
mod seller;

pub use listing::{CATEGORY_SEPARATOR, ROOT_BREADCRUMB_LABELS};

use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Html};
use tracing::warn;

use crate::config::Locale;
use crate::error::{ExportError, Result};
use crate::item::Item;
use comments::CommentSelectors;
use listing::ListingSelectors;
use seller::SellerSelectors;

/// Format of `Item::exported_at`
pub const EXPORTED_AT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Compiled selector table for the item-detail page.
///
/// Holds no per-page state, so one instance can serve any number of exports.
#[derive(Debug)]
pub struct ItemExtractor {
    listing: ListingSelectors,
    seller: SellerSelectors,
    comments: CommentSelectors,
    locale: Locale,
}

impl ItemExtractor {
    pub fn new(locale: Locale) -> Result<Self> {
        Ok(Self {
            listing: ListingSelectors::new()?,
            seller: SellerSelectors::new()?,
            comments: CommentSelectors::new()?,
            locale,
        })
    }

    /// Extract an item, resolving relative times against `now`
    pub fn extract_at(
        &self,
        document: &Html,
        url: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<Item> {
        let root = document.root_element();
        if !has_content(root) {
            return Err(ExportError::EmptyDocument);
        }

        let title = self.listing.title(root).filter(|t| !t.is_empty()).unwrap_or_else(|| {
            warn!(url, "listing title not found, using placeholder");
            self.locale.labels().title_placeholder.to_string()
        });

        Ok(Item {
            title,
            price: self.listing.price(root),
            basic_info: self.listing.basic_info(root),
            category: self.listing.category(root),
            description: self.listing.description(root),
            seller: self.seller.seller(root),
            comments: self.comments.comments(root, now),
            url: url.to_string(),
            exported_at: now.format(EXPORTED_AT_FORMAT).to_string(),
        })
    }
}

/// The parser always synthesizes html/head/body; anything else counts as content
fn has_content(root: ElementRef<'_>) -> bool {
    root.descendants().any(|node| match node.value().as_element() {
        Some(el) => !matches!(el.name(), "html" | "head" | "body"),
        None => node.value().as_text().is_some_and(|t| !t.trim().is_empty()),
    })
}
