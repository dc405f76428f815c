//! スタイルテンプレート
//!
//! スタイルは 4 種で閉じている。名前からの解決に失敗したら InvalidStyle。

use common::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 繰り返し行に付ける絵文字（一様ランダムに 1 つ選ぶ）
pub const HEART_EMOJIS: [&str; 16] = [
    "💖", "💕", "💗", "💝", "💓", "💞", "💘", "❤️", "🧡", "💛", "💚", "💙", "💜", "🤎", "🖤", "🤍",
];

/// prefix + message + suffix の導入行と、繰り返し行の区切り
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTemplate {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub separator: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Heartfelt,
    Poetic,
    Sincere,
    Playful,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Heartfelt, Style::Poetic, Style::Sincere, Style::Playful];

    pub fn name(self) -> &'static str {
        match self {
            Style::Heartfelt => "heartfelt",
            Style::Poetic => "poetic",
            Style::Sincere => "sincere",
            Style::Playful => "playful",
        }
    }

    pub fn template(self) -> StyleTemplate {
        match self {
            Style::Heartfelt => StyleTemplate {
                prefix: "From the depths of my heart, ",
                suffix: " 💕",
                separator: "\n",
            },
            Style::Poetic => StyleTemplate {
                prefix: "Like roses that bloom in spring, ",
                suffix: " 🌹",
                separator: "\n~ ",
            },
            Style::Sincere => StyleTemplate {
                prefix: "With utmost sincerity, ",
                suffix: " ✨",
                separator: "\n",
            },
            Style::Playful => StyleTemplate {
                prefix: "Oopsie! ",
                suffix: " 🎈",
                separator: "\n",
            },
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    /// 完全一致のみ（大文字小文字も区別する）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| Error::InvalidStyle(s.to_string()))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
