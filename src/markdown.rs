//! Markdown rendering of an extracted item
//!
//! Pure and deterministic: every time-dependent value is already inside the
//! `Item`, so the same record always renders to the same bytes.

use std::fmt::{self, Write};

use crate::config::Locale;
use crate::item::{Comment, Item, Seller};

/// Render `item` as a Markdown document with `locale` headings
pub fn render_markdown(item: &Item, locale: Locale) -> String {
    let mut md = String::new();
    // Writing into a String only fails if a Display impl fails; ours are all str
    render(&mut md, item, locale).expect("formatting into a String cannot fail");
    md
}

fn render(md: &mut String, item: &Item, locale: Locale) -> fmt::Result {
    let labels = locale.labels();

    writeln!(md, "# {}\n", item.title)?;

    writeln!(md, "## {}\n", labels.basic_info)?;
    if !item.price.is_empty() {
        writeln!(md, "- **{}**: {}", labels.price, item.price)?;
    }
    for (label, value) in item.basic_info.iter() {
        writeln!(md, "- **{}**: {}", label, value)?;
    }
    md.push('\n');

    if !item.category.is_empty() {
        writeln!(md, "## {}\n\n{}\n", labels.category, item.category)?;
    }

    if !item.description.is_empty() {
        writeln!(md, "## {}\n\n{}\n", labels.description, item.description)?;
    }

    if let Some(seller) = item.seller.as_ref().filter(|s| !s.name.is_empty()) {
        render_seller(md, seller, locale)?;
    }

    if !item.comments.is_empty() {
        render_comments(md, &item.comments, locale)?;
    }

    md.push_str("---\n\n");
    writeln!(md, "*{}: {}*  ", labels.exported_at, item.exported_at)?;
    writeln!(md, "*{}: {}*", labels.source_url, item.url)
}

fn render_seller(md: &mut String, seller: &Seller, locale: Locale) -> fmt::Result {
    let labels = locale.labels();

    writeln!(md, "## {}\n", labels.seller_info)?;
    writeln!(md, "- **{}**: {}", labels.seller, seller.name)?;

    if let (Some(rating), Some(count)) = (&seller.rating, &seller.review_count) {
        writeln!(
            md,
            "- **{}**: {} ({}{})",
            labels.rating, rating, count, labels.review_suffix
        )?;
    }
    if seller.verified {
        writeln!(md, "- **{}**: {}", labels.verified, labels.verified_value)?;
    }
    if !seller.badges.is_empty() {
        writeln!(
            md,
            "- **{}**: {}",
            labels.badges,
            seller.badges.join(labels.badge_separator)
        )?;
    }
    md.push('\n');
    Ok(())
}

fn render_comments(md: &mut String, comments: &[Comment], locale: Locale) -> fmt::Result {
    writeln!(md, "## {}\n", locale.labels().comments)?;
    for comment in comments {
        writeln!(md, "### {} ({})", comment.name, comment.time)?;
        writeln!(md, "{}\n", comment.content)?;
    }
    Ok(())
}
