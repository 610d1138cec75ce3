//! Comment thread under the listing

use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Selector};
use tracing::debug;

use super::selectors::{compile, first_text};
use crate::error::Result;
use crate::item::Comment;
use crate::relative_time::parse_relative_time;

#[derive(Debug)]
pub struct CommentSelectors {
    comment: Selector,
    name: Selector,
    content: Selector,
    time: Selector,
}

impl CommentSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            comment: compile(".comment__449ec81a")?,
            name: compile(".userName__449ec81a")?,
            content: compile(".merText.body__5616e150.inherit__5616e150")?,
            time: compile(".time__449ec81a")?,
        })
    }

    /// Comments in document order. A comment missing its name, content or
    /// time element is dropped whole.
    pub fn comments(&self, root: ElementRef<'_>, now: DateTime<FixedOffset>) -> Vec<Comment> {
        root.select(&self.comment)
            .enumerate()
            .filter_map(|(index, el)| {
                let parts = (
                    first_text(el, &self.name),
                    first_text(el, &self.content),
                    first_text(el, &self.time),
                );
                let (Some(name), Some(content), Some(time)) = parts else {
                    debug!(index, "skipping incomplete comment");
                    return None;
                };
                Some(Comment {
                    name,
                    content,
                    time: parse_relative_time(&time, now),
                })
            })
            .collect()
    }
}
