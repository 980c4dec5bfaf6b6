/// All localized user-facing strings of the widget.
///
/// Strings are stored raw and unescaped; the renderer escapes them for HTML.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// ISO 639-1 code of the UI language these strings belong to
    pub code: &'static str,

    // ==================== Selector ====================
    /// Placeholder entry shown in a disabled target selector
    pub no_targets: &'static str,

    // ==================== Lookup ====================
    /// Interim message shown while a lookup is outstanding
    pub searching: &'static str,

    /// Validation error for over-long input
    /// Placeholders: {max}
    pub input_too_long: &'static str,

    /// Error shown when a lookup fails
    /// Placeholders: {error}
    pub lookup_failed: &'static str,

    /// Error detail for a non-2xx lookup response
    /// Placeholders: {status}, {body}
    pub server_error: &'static str,

    // ==================== Results ====================
    /// Message rendered when the response carries no definitions
    pub no_definition: &'static str,

    /// Marker before each meaning
    pub bullet: &'static str,

    /// Marker before each example sentence
    pub example_prefix: &'static str,
}

// ==================== Chinese Strings ====================

/// Chinese strings (default UI language)
pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    code: "zh",
    no_targets: "无可用目标",
    searching: "正在查询...",
    input_too_long: "输入内容过长，最多允许输入 {max} 个字符。",
    lookup_failed: "查询失败: {error}",
    server_error: "服务器错误: {status} - {body}",
    no_definition: "未找到该词的释义。",
    bullet: "• ",
    example_prefix: "e.g., ",
};

// ==================== English Strings ====================

/// English strings
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    code: "en",
    no_targets: "No available targets",
    searching: "Searching...",
    input_too_long: "Input is too long. At most {max} characters are allowed.",
    lookup_failed: "Lookup failed: {error}",
    server_error: "Server error: {status} - {body}",
    no_definition: "No definition found for this word.",
    bullet: "• ",
    example_prefix: "e.g., ",
};

const ALL_STRINGS: [&LanguageStrings; 2] = [&CHINESE_STRINGS, &ENGLISH_STRINGS];

impl LanguageStrings {
    /// Strings for a UI language code, if that language has a string table.
    pub fn for_code(code: &str) -> Option<&'static LanguageStrings> {
        ALL_STRINGS.into_iter().find(|strings| strings.code == code)
    }

    pub fn supported_codes() -> Vec<&'static str> {
        ALL_STRINGS.iter().map(|strings| strings.code).collect()
    }

    pub fn format_input_too_long(&self, max: usize) -> String {
        self.input_too_long.replace("{max}", &max.to_string())
    }

    pub fn format_lookup_failed(&self, error: &str) -> String {
        self.lookup_failed.replace("{error}", error)
    }

    pub fn format_server_error(&self, status: u16, body: &str) -> String {
        self.server_error
            .replace("{status}", &status.to_string())
            .replace("{body}", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_for_code() {
        assert_eq!(LanguageStrings::for_code("zh").unwrap().code, "zh");
        assert_eq!(LanguageStrings::for_code("en").unwrap().code, "en");
        assert!(LanguageStrings::for_code("es").is_none());
    }

    #[test]
    fn test_supported_codes() {
        assert_eq!(LanguageStrings::supported_codes(), vec!["zh", "en"]);
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_all_tables_have_placeholders() {
        for strings in ALL_STRINGS {
            assert!(strings.input_too_long.contains("{max}"), "{}", strings.code);
            assert!(strings.lookup_failed.contains("{error}"), "{}", strings.code);
            assert!(strings.server_error.contains("{status}"), "{}", strings.code);
            assert!(strings.server_error.contains("{body}"), "{}", strings.code);
        }
    }

    #[test]
    fn test_no_string_is_empty() {
        for strings in ALL_STRINGS {
            assert!(!strings.no_targets.is_empty());
            assert!(!strings.searching.is_empty());
            assert!(!strings.no_definition.is_empty());
        }
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_format_input_too_long_chinese() {
        assert_eq!(
            CHINESE_STRINGS.format_input_too_long(50),
            "输入内容过长，最多允许输入 50 个字符。"
        );
    }

    #[test]
    fn test_format_server_error() {
        let msg = ENGLISH_STRINGS.format_server_error(500, "internal error");
        assert_eq!(msg, "Server error: 500 - internal error");
    }

    #[test]
    fn test_format_lookup_failed_wraps_detail() {
        let detail = CHINESE_STRINGS.format_server_error(404, "not found");
        let msg = CHINESE_STRINGS.format_lookup_failed(&detail);
        assert_eq!(msg, "查询失败: 服务器错误: 404 - not found");
    }
}
