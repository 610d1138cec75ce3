//! Seller block: name, rating, verification and badges

use scraper::{ElementRef, Selector};

use super::selectors::{compile, first_text, non_empty, text_of, SelectorChain};
use crate::error::Result;
use crate::item::Seller;

#[derive(Debug)]
pub struct SellerSelectors {
    profile_link: Selector,
    name: SelectorChain,
    rating: Selector,
    review_count: Selector,
    verified: Selector,
    badge: Selector,
    badge_label: Selector,
}

impl SellerSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            profile_link: compile(r#"a[href*="/user/profile/"]"#)?,
            name: SelectorChain::new(
                "seller.name",
                &[
                    ".merText.body__5616e150.primary__5616e150.bold__5616e150",
                    ".userName__449ec81a",
                ],
            )?,
            rating: compile(".merRating")?,
            review_count: compile(".count__60fe6cce")?,
            verified: compile(".merVerificationBadge")?,
            badge: compile(r#"[data-testid="seller-badge"]"#)?,
            badge_label: compile(".merText")?,
        })
    }

    /// `None` when the page has no seller profile link at all
    pub fn seller(&self, root: ElementRef<'_>) -> Option<Seller> {
        let link = root.select(&self.profile_link).next()?;

        let name = self.name.first_text(link).unwrap_or_default();

        let (rating, review_count) = match link.select(&self.rating).next() {
            Some(widget) => (
                widget.value().attr("aria-label").map(|label| label.trim().to_string()),
                first_text(widget, &self.review_count),
            ),
            None => (None, None),
        };

        let verified = link.select(&self.verified).next().is_some();

        // Badges are rendered beside the profile link, not inside it
        let badges = root
            .select(&self.badge)
            .filter_map(|badge| badge.select(&self.badge_label).next())
            .map(text_of)
            .filter(|text| !text.is_empty())
            .collect();

        Some(Seller {
            name,
            rating: rating.and_then(non_empty),
            review_count: review_count.and_then(non_empty),
            verified,
            badges,
        })
    }
}
