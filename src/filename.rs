//! Download filenames derived from the listing title

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::config::ExportConfig;

pub const FILE_EXTENSION: &str = "md";

/// Compact UTC capture time, e.g. `20240510T030005`
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

fn forbidden_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap())
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Path-safe form of `title`: reserved characters and whitespace runs become
/// `_`, then the result is cut to `max_chars` characters.
pub fn sanitize_title(title: &str, max_chars: usize) -> String {
    let replaced = forbidden_chars().replace_all(title, "_");
    let collapsed = whitespace_runs().replace_all(&replaced, "_");
    collapsed.chars().take(max_chars).collect()
}

/// `{prefix}_{safe title}_{timestamp}.md`
pub fn generate_filename(title: &str, captured_at: DateTime<Utc>, config: &ExportConfig) -> String {
    format!(
        "{}_{}_{}.{}",
        config.filename_prefix,
        sanitize_title(title, config.max_title_chars),
        captured_at.format(TIMESTAMP_FORMAT),
        FILE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn captured() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 3, 0, 5).unwrap()
    }

    #[test]
    fn test_reserved_characters_and_spaces() {
        let name = generate_filename(
            "Nintendo Switch / 有機EL: ホワイト *美品*",
            captured(),
            &ExportConfig::default(),
        );

        assert_eq!(
            name,
            "mercari_Nintendo_Switch___有機EL__ホワイト__美品__20240510T030005.md"
        );
        assert!(!name.contains(char::is_whitespace));
        assert!(!name.contains(['/', ':', '*']));
    }

    #[test]
    fn test_title_truncated_by_characters() {
        let title = "あ".repeat(80);
        let safe = sanitize_title(&title, 50);
        assert_eq!(safe.chars().count(), 50);

        let name = generate_filename(&title, captured(), &ExportConfig::default());
        assert!(name.ends_with("_20240510T030005.md"));
        assert!(name.chars().count() <= "mercari_".len() + 50 + "_20240510T030005.md".len());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(sanitize_title("a \t\n b", 50), "a_b");
    }

    #[test]
    fn test_custom_prefix() {
        let config = ExportConfig {
            filename_prefix: "listing".to_string(),
            max_title_chars: 5,
            ..ExportConfig::default()
        };
        assert_eq!(
            generate_filename("abcdefgh", captured(), &config),
            "listing_abcde_20240510T030005.md"
        );
    }
}
