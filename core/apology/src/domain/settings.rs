//! 利用者設定（config/settings.json）
//!
//! すべて省略可能。CLI の指定があればそちらを優先する。

use serde::Deserialize;

use super::style::Style;

/// 元のフォームで count が読めなかったときの既定値
pub const DEFAULT_COUNT: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_style: Style,
    pub default_count: i64,
    pub add_emojis: bool,
    pub add_timestamp: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_style: Style::Heartfelt,
            default_count: DEFAULT_COUNT,
            add_emojis: false,
            add_timestamp: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let s: Settings = serde_json::from_str(r#"{"default_style":"poetic"}"#).unwrap();
        assert_eq!(s.default_style, Style::Poetic);
        assert_eq!(s.default_count, 100);
        assert!(!s.add_emojis);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"colour":"pink"}"#).is_err());
    }
}
