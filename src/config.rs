//! Export configuration
//!
//! Arrives from CLI flags or the FFI request JSON; nothing is read from disk
//! or the environment.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Output language for headings, labels and the title placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Fixed label table used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title_placeholder: &'static str,
    pub basic_info: &'static str,
    pub price: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub seller_info: &'static str,
    pub seller: &'static str,
    pub rating: &'static str,
    pub review_suffix: &'static str,
    pub verified: &'static str,
    pub verified_value: &'static str,
    pub badges: &'static str,
    pub badge_separator: &'static str,
    pub comments: &'static str,
    pub exported_at: &'static str,
    pub source_url: &'static str,
}

const JA_LABELS: Labels = Labels {
    title_placeholder: "商品名不明",
    basic_info: "基本情報",
    price: "価格",
    category: "カテゴリー",
    description: "商品の説明",
    seller_info: "出品者情報",
    seller: "出品者",
    rating: "評価",
    review_suffix: "件のレビュー",
    verified: "本人確認",
    verified_value: "済み",
    badges: "バッジ",
    badge_separator: "、",
    comments: "コメント",
    exported_at: "エクスポート日時",
    source_url: "商品URL",
};

const EN_LABELS: Labels = Labels {
    title_placeholder: "Unknown item",
    basic_info: "Basic Info",
    price: "Price",
    category: "Category",
    description: "Description",
    seller_info: "Seller Info",
    seller: "Seller",
    rating: "Rating",
    review_suffix: " reviews",
    verified: "Identity Verified",
    verified_value: "Yes",
    badges: "Badges",
    badge_separator: ", ",
    comments: "Comments",
    exported_at: "Exported at",
    source_url: "Source URL",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ja => &JA_LABELS,
            Locale::En => &EN_LABELS,
        }
    }
}

/// Options for a single export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub locale: Locale,
    /// Offset used for comment times and the export timestamp (Asia/Tokyo by default)
    pub utc_offset_minutes: i32,
    pub filename_prefix: String,
    pub max_title_chars: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Ja,
            utc_offset_minutes: 9 * 60,
            filename_prefix: "mercari".to_string(),
            max_title_chars: 50,
        }
    }
}

impl ExportConfig {
    pub fn offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ExportError::InvalidOffset(self.utc_offset_minutes))
    }

    /// Current wall-clock time in the configured offset.
    pub fn now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(Utc::now().with_timezone(&self.offset()?))
    }
}
