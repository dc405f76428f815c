//! 生成リクエスト（検証済みの値オブジェクト）

use common::error::Error;

use super::style::Style;

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 1000;

/// 検証済みの生成リクエスト
///
/// name / message は trim 済みで空でない。count は 1..=1000。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    message: String,
    count: u32,
    style: Style,
    add_emojis: bool,
    add_timestamp: bool,
}

impl GenerationRequest {
    /// 入力を trim して検証する。フィールド検証 → スタイル解決の順で、最初の失敗を返す。
    pub fn new(
        name: &str,
        message: &str,
        count: i64,
        style: &str,
        add_emojis: bool,
        add_timestamp: bool,
    ) -> Result<Self, Error> {
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if message.is_empty() {
            return Err(Error::validation("message must not be empty"));
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(Error::validation(format!(
                "count must be between {} and {} (got {})",
                MIN_COUNT, MAX_COUNT, count
            )));
        }
        let style: Style = style.parse()?;
        Ok(Self {
            name: name.to_string(),
            message: message.to_string(),
            count: count as u32,
            style,
            add_emojis,
            add_timestamp,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn add_emojis(&self) -> bool {
        self.add_emojis
    }

    pub fn add_timestamp(&self) -> bool {
        self.add_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_fields() {
        let r = GenerationRequest::new("  Alex ", "\tSorry!\n", 3, "heartfelt", false, true).unwrap();
        assert_eq!(r.name(), "Alex");
        assert_eq!(r.message(), "Sorry!");
        assert_eq!(r.count(), 3);
        assert_eq!(r.style(), Style::Heartfelt);
        assert!(r.add_timestamp());
    }

    #[test]
    fn test_count_bounds() {
        assert!(GenerationRequest::new("a", "b", 1, "poetic", false, false).is_ok());
        assert!(GenerationRequest::new("a", "b", 1000, "poetic", false, false).is_ok());
        for bad in [0, 1001, -5] {
            let err = GenerationRequest::new("a", "b", bad, "poetic", false, false).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "count {}", bad);
        }
    }

    #[test]
    fn test_empty_fields() {
        let err = GenerationRequest::new("   ", "b", 1, "poetic", false, false).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let err = GenerationRequest::new("a", "", 1, "poetic", false, false).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_validation_precedes_style() {
        let err = GenerationRequest::new("a", "b", 0, "gothic", false, false).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let err = GenerationRequest::new("a", "b", 5, "gothic", false, false).unwrap_err();
        assert_eq!(err, Error::InvalidStyle("gothic".to_string()));
    }
}
