//! Listing exporter for Mercari item-detail pages
//!
//! Extracts a listing page into an `Item` record and renders it as Markdown:
//! - title, price, detail rows, category breadcrumbs, description
//! - seller profile (rating, verification, badges)
//! - comments with relative times resolved to absolute ones
//!
//! Output goes to a sink (writer or file) or back across the FFI boundary.

pub mod config;
pub mod error;
pub mod export;
pub mod extractors;
pub mod ffi;
pub mod filename;
pub mod item;
pub mod markdown;
pub mod relative_time;
pub mod sink;

pub use config::{ExportConfig, Locale};
pub use error::{ExportError, Result};
pub use export::{export_html, export_html_at, is_item_page, Export};
pub use extractors::ItemExtractor;
pub use item::{BasicInfo, Comment, Item, Seller};
pub use markdown::render_markdown;
pub use relative_time::parse_relative_time;
