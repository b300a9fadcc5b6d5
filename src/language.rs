//! The two languages of the site: Persian is the source language the operator
//! writes in, English is the translation target.

/// A site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Persian,
    English,
}

impl Language {
    /// ISO 639-1 code, which doubles as the field-id suffix.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Persian => "fa",
            Language::English => "en",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Persian => "Persian",
            Language::English => "English",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Persian => "فارسی",
            Language::English => "English",
        }
    }

    /// Whether this is the language the operator authors content in.
    pub fn is_source(&self) -> bool {
        matches!(self, Language::Persian)
    }

    /// Field id for a bilingual field base, e.g. `post_title` -> `post_title_fa`.
    pub fn field_id(&self, base: &str) -> String {
        format!("{}_{}", base, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::Persian.code(), "fa");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_source_language() {
        assert!(Language::Persian.is_source());
        assert!(!Language::English.is_source());
    }

    #[test]
    fn test_field_id_suffix() {
        assert_eq!(Language::Persian.field_id("post_title"), "post_title_fa");
        assert_eq!(Language::English.field_id("post_title"), "post_title_en");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::Persian.native_name(), "فارسی");
    }
}
