//! 生成テキストの統計（文字数・単語数・ラブレベル）

/// 生成結果の統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Unicode スカラー値の数
    pub chars: usize,
    /// 空白区切りの単語数
    pub words: usize,
    /// 1..=5
    pub love_level: u8,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let chars = text.chars().count();
        let words = text.split_whitespace().count();
        let love_level = match chars {
            c if c > 5000 => 5,
            c if c > 3000 => 4,
            c if c > 1000 => 3,
            c if c > 500 => 2,
            _ => 1,
        };
        Self {
            chars,
            words,
            love_level,
        }
    }

    /// ラブレベルをハートで表す（例: 💖💖💖）
    pub fn love_meter(&self) -> String {
        "💖".repeat(usize::from(self.love_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let s = TextStats::of("Dear Alex,\n\nSorry!  Sorry!");
        assert_eq!(s.words, 4);
        assert_eq!(s.chars, 26);
        assert_eq!(s.love_level, 1);
        assert_eq!(s.love_meter(), "💖");
    }

    #[test]
    fn test_love_level_thresholds() {
        assert_eq!(TextStats::of(&"x".repeat(500)).love_level, 1);
        assert_eq!(TextStats::of(&"x".repeat(501)).love_level, 2);
        assert_eq!(TextStats::of(&"x".repeat(1001)).love_level, 3);
        assert_eq!(TextStats::of(&"x".repeat(3001)).love_level, 4);
        assert_eq!(TextStats::of(&"x".repeat(5001)).love_level, 5);
    }
}
