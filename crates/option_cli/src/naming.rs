//! Output file naming for batch reports.
//!
//! Output files are named after the input (or a caller-supplied original
//! name) with unsafe characters replaced, so names in CJK or Japanese
//! scripts survive while path separators and punctuation do not.

use std::path::Path;

/// Suffix appended to every batch output stem.
pub const PROCESSED_SUFFIX: &str = "_processed";

/// Stem used when sanitising leaves nothing.
const FALLBACK_STEM: &str = "output";

fn is_safe_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(c, '_' | '-' | '.' | ' ')
        || ('\u{4e00}'..='\u{9fff}').contains(&c) // CJK ideographs
        || ('\u{3040}'..='\u{309f}').contains(&c) // Hiragana
        || ('\u{30a0}'..='\u{30ff}').contains(&c) // Katakana
}

/// Replaces every unsafe character with `_` and trims surrounding whitespace.
///
/// # Examples
/// ```
/// use option_cli::naming::sanitize_base_name;
///
/// assert_eq!(sanitize_base_name("期权 报价:2024/06"), "期权 报价_2024_06");
/// assert_eq!(sanitize_base_name("  quotes  "), "quotes");
/// ```
pub fn sanitize_base_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_safe_char(c) { c } else { '_' })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Strips the final extension of `name`, keeping dotfiles intact.
///
/// Only a dot inside the last path component counts, and leading dots of
/// that component never start an extension.
fn strip_extension(name: &str) -> &str {
    let tail_start = name.rfind(['/', '\\']).map_or(0, |idx| idx + 1);
    let tail = &name[tail_start..];
    let leading_dots = tail.len() - tail.trim_start_matches('.').len();

    match tail.rfind('.') {
        Some(dot) if dot > leading_dots => &name[..tail_start + dot],
        _ => name,
    }
}

/// Builds `<sanitised stem>_processed.<extension>`.
///
/// The stem comes from `original_name` when given (its extension removed),
/// otherwise from the base name of `input`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use option_cli::naming::output_file_name;
///
/// assert_eq!(
///     output_file_name(Path::new("/tmp/upload_3f2a.csv"), Some("Q3 报价.csv"), "csv"),
///     "Q3 报价_processed.csv"
/// );
/// assert_eq!(
///     output_file_name(Path::new("data/quotes.csv"), None, "json"),
///     "quotes_processed.json"
/// );
/// ```
pub fn output_file_name(input: &Path, original_name: Option<&str>, extension: &str) -> String {
    let base = match original_name {
        Some(name) => strip_extension(name).to_string(),
        None => input
            .file_name()
            .map(|n| strip_extension(&n.to_string_lossy()).to_string())
            .unwrap_or_default(),
    };

    let mut stem = sanitize_base_name(&base);
    if stem.is_empty() {
        stem = FALLBACK_STEM.to_string();
    }

    format!("{}{}.{}", stem, PROCESSED_SUFFIX, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sanitize_keeps_safe_ascii() {
        assert_eq!(sanitize_base_name("book_1-final.v2 copy"), "book_1-final.v2 copy");
    }

    #[test]
    fn test_sanitize_replaces_separators_and_symbols() {
        assert_eq!(sanitize_base_name("a/b\\c:d*e?f"), "a_b_c_d_e_f");
        assert_eq!(sanitize_base_name("50%+(x)"), "50___x_");
    }

    #[test]
    fn test_sanitize_keeps_cjk_and_kana() {
        assert_eq!(sanitize_base_name("对冲基金明细"), "对冲基金明细");
        assert_eq!(sanitize_base_name("ひらがなカタカナ"), "ひらがなカタカナ");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_base_name("  report \t"), "report _");
        assert_eq!(sanitize_base_name("   "), "");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("quotes.csv"), "quotes");
        assert_eq!(strip_extension("quotes.v2.csv"), "quotes.v2");
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("..a.b"), "..a");
        assert_eq!(strip_extension("name."), "name");
        assert_eq!(strip_extension("dir.v1/file"), "dir.v1/file");
    }

    #[test]
    fn test_strip_extension_ignores_trailing_component_dot() {
        assert_eq!(strip_extension("报价.é/."), "报价.é/.");
        assert_eq!(strip_extension("a.b/."), "a.b/.");
    }

    #[test]
    fn test_output_name_with_multibyte_dotted_directory() {
        let path = PathBuf::from("/tmp/x");
        assert_eq!(
            output_file_name(&path, Some("报价.é/."), "csv"),
            "报价.é_._processed.csv"
        );
        assert_eq!(output_file_name(&path, Some("a.b/."), "csv"), "a.b_._processed.csv");
    }

    #[test]
    fn test_output_name_from_input_path() {
        let path = PathBuf::from("/data/in/期权.csv");
        assert_eq!(output_file_name(&path, None, "csv"), "期权_processed.csv");
    }

    #[test]
    fn test_output_name_prefers_original_name() {
        let path = PathBuf::from("/tmp/tmp1234");
        assert_eq!(
            output_file_name(&path, Some("desk<A>.xlsx"), "csv"),
            "desk_A__processed.csv"
        );
    }

    #[test]
    fn test_output_name_falls_back_when_empty() {
        let path = PathBuf::from("/tmp/x.csv");
        assert_eq!(output_file_name(&path, Some("  .csv"), "json"), "output_processed.json");
    }
}
